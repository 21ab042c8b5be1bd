use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, trace};

use super::config::LifeConfig;
use crate::error::{EngineError, EngineResult};
use crate::grid;

/// Width of the dead ring kept around the evaluated area.
///
/// Ring 0 is where the frame is drawn; ring 1 stays dead so that neighbour
/// reads of the outermost evaluated cells never leave the grid.
pub const BORDER_INSET: usize = 2;

/// Pending change for one cell, computed from the previous generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Change {
    #[default]
    NoChange,
    Kill,
    Birth,
}

/// A cell whose state flipped during the last apply step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub row: usize,
    pub col: usize,
    pub alive: bool,
}

/// Summary of one generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub generation: u64,
    pub population: usize,
    pub births: usize,
    pub deaths: usize,
}

/// Conway's Game of Life on a bounded grid.
///
/// Every tick first evaluates the whole interior into the change overlay and
/// only then applies it, so no cell ever sees a neighbour from the generation
/// being built.
pub struct LifeEngine {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
    overlay: Vec<Change>,
    seed_pending: bool,
    density: f64,
    generation: u64,
    population: usize,
    changes: Vec<CellChange>,
    rng: StdRng,
}

impl LifeEngine {
    /// Allocate an all-dead grid. Call [`LifeEngine::randomize`] to seed it.
    pub fn new(rows: usize, cols: usize, config: &LifeConfig) -> EngineResult<Self> {
        config.validate()?;

        let min = 2 * BORDER_INSET + 1;
        if rows < min || cols < min {
            return Err(EngineError::GridTooSmall {
                rows,
                cols,
                min_rows: min,
                min_cols: min,
            });
        }

        let cells = grid::filled(rows, cols, false)?;
        let overlay = grid::filled(rows, cols, Change::NoChange)?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            rows,
            cols,
            cells,
            overlay,
            seed_pending: false,
            density: config.density,
            generation: 0,
            population: 0,
            changes: Vec::new(),
            rng,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Live cells after the last apply step
    pub fn population(&self) -> usize {
        self.population
    }

    /// Cells that flipped during the last tick
    pub fn changes(&self) -> &[CellChange] {
        &self.changes
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[self.index(row, col)]
    }

    /// Pending overlay entry for a cell
    pub fn pending(&self, row: usize, col: usize) -> Change {
        if row < self.rows && col < self.cols {
            self.overlay[self.index(row, col)]
        } else {
            Change::NoChange
        }
    }

    /// True for cells in the permanently dead ring
    pub fn is_border(&self, row: usize, col: usize) -> bool {
        row < BORDER_INSET
            || col < BORDER_INSET
            || row >= self.rows - BORDER_INSET
            || col >= self.cols - BORDER_INSET
    }

    /// Set a single interior cell. Border cells are left untouched.
    pub fn set_alive(&mut self, row: usize, col: usize, alive: bool) -> bool {
        if row >= self.rows || col >= self.cols || self.is_border(row, col) {
            return false;
        }

        let idx = self.index(row, col);
        if self.cells[idx] != alive {
            self.cells[idx] = alive;
            if alive {
                self.population += 1;
            } else {
                self.population -= 1;
            }
        }
        true
    }

    /// Kill every cell and drop any pending changes
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.overlay.fill(Change::NoChange);
        self.changes.clear();
        self.seed_pending = false;
        self.population = 0;
    }

    /// Re-seed with the configured density
    pub fn randomize(&mut self) {
        self.seed(self.density);
    }

    /// Schedule a random birth or death for every interior cell.
    ///
    /// Only the overlay is written; the next [`LifeEngine::tick`] applies it
    /// instead of evaluating the rule.
    pub fn seed(&mut self, density: f64) {
        let density = if density.is_nan() {
            0.0
        } else {
            density.clamp(0.0, 1.0)
        };

        for row in 0..self.rows {
            for col in 0..self.cols {
                let change = if self.is_border(row, col) {
                    Change::NoChange
                } else if self.rng.gen_bool(density) {
                    Change::Birth
                } else {
                    Change::Kill
                };
                let idx = self.index(row, col);
                self.overlay[idx] = change;
            }
        }

        self.seed_pending = true;
        debug!(density, rows = self.rows, cols = self.cols, "seeded life grid");
    }

    /// Advance one generation
    pub fn tick(&mut self) -> TickReport {
        if self.seed_pending {
            self.seed_pending = false;
        } else {
            self.evaluate();
        }

        let (births, deaths) = self.apply();
        self.generation += 1;

        trace!(
            generation = self.generation,
            population = self.population,
            births,
            deaths,
            "life tick"
        );

        TickReport {
            generation: self.generation,
            population: self.population,
            births,
            deaths,
        }
    }

    /// Read-only pass over the grid, write-only pass over the overlay
    fn evaluate(&mut self) {
        for row in BORDER_INSET..self.rows - BORDER_INSET {
            for col in BORDER_INSET..self.cols - BORDER_INSET {
                let change = match self.live_neighbours(row, col) {
                    2 => Change::NoChange,
                    3 => Change::Birth,
                    _ => Change::Kill,
                };
                let idx = self.index(row, col);
                self.overlay[idx] = change;
            }
        }
    }

    fn apply(&mut self) -> (usize, usize) {
        self.changes.clear();
        let mut births = 0;
        let mut deaths = 0;

        for idx in 0..self.overlay.len() {
            let alive = match self.overlay[idx] {
                Change::NoChange => continue,
                Change::Kill => false,
                Change::Birth => true,
            };
            self.overlay[idx] = Change::NoChange;

            if self.cells[idx] == alive {
                continue;
            }
            self.cells[idx] = alive;
            self.changes.push(CellChange {
                row: idx / self.cols,
                col: idx % self.cols,
                alive,
            });
            if alive {
                births += 1;
            } else {
                deaths += 1;
            }
        }

        self.population = self.population + births - deaths;
        (births, deaths)
    }

    // Only called for interior cells, so all eight neighbours exist.
    fn live_neighbours(&self, row: usize, col: usize) -> usize {
        let mut count = 0;
        for r in row - 1..=row + 1 {
            for c in col - 1..=col + 1 {
                if (r, c) != (row, col) && self.cells[self.index(r, c)] {
                    count += 1;
                }
            }
        }
        count
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(rows: usize, cols: usize) -> LifeEngine {
        LifeEngine::new(rows, cols, &LifeConfig::seeded(7)).unwrap()
    }

    fn snapshot(engine: &LifeEngine) -> Vec<Vec<bool>> {
        (0..engine.rows())
            .map(|r| (0..engine.cols()).map(|c| engine.is_alive(r, c)).collect())
            .collect()
    }

    fn live_cells(engine: &LifeEngine) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for r in 0..engine.rows() {
            for c in 0..engine.cols() {
                if engine.is_alive(r, c) {
                    cells.push((r, c));
                }
            }
        }
        cells
    }

    #[test]
    fn test_rejects_small_grid() {
        let result = LifeEngine::new(4, 20, &LifeConfig::default());
        assert!(matches!(
            result,
            Err(EngineError::GridTooSmall { rows: 4, .. })
        ));
        assert!(LifeEngine::new(5, 5, &LifeConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let result = LifeEngine::new(1 << 33, 1 << 33, &LifeConfig::seeded(1));
        assert!(matches!(
            result,
            Err(EngineError::GridTooLarge { .. })
        ));

        let result = LifeEngine::new(usize::MAX, 5, &LifeConfig::seeded(1));
        assert!(matches!(
            result,
            Err(EngineError::GridTooLarge { cols: 5, .. })
        ));
    }

    #[test]
    fn test_block_is_still_life() {
        let mut engine = blank(10, 10);
        for (r, c) in [(4, 4), (4, 5), (5, 4), (5, 5)] {
            engine.set_alive(r, c, true);
        }
        let before = snapshot(&engine);

        for _ in 0..10 {
            let report = engine.tick();
            assert_eq!(report.population, 4);
            assert_eq!(report.births + report.deaths, 0);
        }

        assert_eq!(snapshot(&engine), before);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut engine = blank(11, 11);
        for c in 4..=6 {
            engine.set_alive(5, c, true);
        }

        let report = engine.tick();
        assert_eq!(live_cells(&engine), vec![(4, 5), (5, 5), (6, 5)]);
        assert_eq!(report.births, 2);
        assert_eq!(report.deaths, 2);
        assert_eq!(report.population, 3);
        assert_eq!(engine.changes().len(), 4);

        engine.tick();
        assert_eq!(live_cells(&engine), vec![(5, 4), (5, 5), (5, 6)]);
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn test_tick_matches_batch_rule_on_snapshot() {
        let mut engine = LifeEngine::new(24, 40, &LifeConfig::seeded(42)).unwrap();
        engine.seed(0.35);
        engine.tick();

        for _ in 0..8 {
            let before = snapshot(&engine);
            let mut expected = before.clone();
            for r in BORDER_INSET..engine.rows() - BORDER_INSET {
                for c in BORDER_INSET..engine.cols() - BORDER_INSET {
                    let mut n = 0;
                    for dr in [-1i32, 0, 1] {
                        for dc in [-1i32, 0, 1] {
                            if (dr, dc) == (0, 0) {
                                continue;
                            }
                            let rr = (r as i32 + dr) as usize;
                            let cc = (c as i32 + dc) as usize;
                            if before[rr][cc] {
                                n += 1;
                            }
                        }
                    }
                    expected[r][c] = match n {
                        2 => before[r][c],
                        3 => true,
                        _ => false,
                    };
                }
            }

            engine.tick();
            assert_eq!(snapshot(&engine), expected);
        }
    }

    #[test]
    fn test_border_rings_never_change() {
        let mut engine = LifeEngine::new(12, 12, &LifeConfig::seeded(3)).unwrap();
        engine.seed(1.0);

        for _ in 0..6 {
            engine.tick();
            for r in 0..engine.rows() {
                for c in 0..engine.cols() {
                    if engine.is_border(r, c) {
                        assert!(!engine.is_alive(r, c), "border cell ({r}, {c}) alive");
                    }
                }
            }
        }

        assert!(!engine.set_alive(1, 5, true));
        assert!(!engine.set_alive(5, 10, true));
        assert!(!engine.is_alive(1, 5));
    }

    #[test]
    fn test_seed_is_materialized_by_next_tick() {
        let mut engine = blank(9, 9);
        engine.seed(1.0);

        assert_eq!(engine.population(), 0);
        assert_eq!(engine.pending(4, 4), Change::Birth);
        assert_eq!(engine.pending(0, 0), Change::NoChange);

        let report = engine.tick();
        assert_eq!(report.population, 5 * 5);
        assert_eq!(report.births, 25);
        assert_eq!(engine.pending(4, 4), Change::NoChange);

        // Full interior dies of overcrowding except the corners
        let report = engine.tick();
        assert_eq!(report.population, 4);
    }

    #[test]
    fn test_reseed_replaces_existing_life() {
        let mut engine = blank(10, 10);
        for (r, c) in [(4, 4), (4, 5), (5, 4), (5, 5)] {
            engine.set_alive(r, c, true);
        }

        engine.seed(0.0);
        let report = engine.tick();

        assert_eq!(report.population, 0);
        assert_eq!(report.deaths, 4);
    }

    #[test]
    fn test_nan_density_seeds_nothing() {
        let mut engine = blank(9, 9);
        engine.seed(f64::NAN);
        engine.tick();
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let mut a = LifeEngine::new(20, 30, &LifeConfig::seeded(99)).unwrap();
        let mut b = LifeEngine::new(20, 30, &LifeConfig::seeded(99)).unwrap();
        a.randomize();
        b.randomize();
        for _ in 0..5 {
            assert_eq!(a.tick(), b.tick());
        }
        assert_eq!(snapshot(&a), snapshot(&b));
    }

    #[test]
    fn test_clear() {
        let mut engine = blank(9, 9);
        engine.seed(1.0);
        engine.tick();
        engine.seed(1.0);
        engine.clear();

        assert_eq!(engine.population(), 0);
        assert_eq!(engine.pending(4, 4), Change::NoChange);
        assert_eq!(engine.tick().population, 0);
    }
}
