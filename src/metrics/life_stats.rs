use crate::life::TickReport;

/// Population trend of the running Life grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifeStats {
    /// Population one generation back
    pub previous: usize,
    pub current: usize,
    pub peak: usize,
    /// Consecutive generations in which no cell flipped
    pub still_generations: u64,
}

impl LifeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, report: &TickReport) {
        self.previous = self.current;
        self.current = report.population;
        self.peak = self.peak.max(report.population);

        if report.births == 0 && report.deaths == 0 {
            self.still_generations += 1;
        } else {
            self.still_generations = 0;
        }
    }

    /// Population change over the last generation
    pub fn delta(&self) -> i64 {
        self.current as i64 - self.previous as i64
    }

    pub fn is_still(&self) -> bool {
        self.still_generations > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life::{LifeConfig, LifeEngine};

    fn report(population: usize, births: usize, deaths: usize) -> TickReport {
        TickReport {
            generation: 1,
            population,
            births,
            deaths,
        }
    }

    #[test]
    fn test_population_trend() {
        let mut stats = LifeStats::new();
        stats.record(&report(40, 40, 0));
        stats.record(&report(25, 3, 18));

        assert_eq!(stats.previous, 40);
        assert_eq!(stats.current, 25);
        assert_eq!(stats.delta(), -15);
        assert_eq!(stats.peak, 40);
        assert!(!stats.is_still());
    }

    #[test]
    fn test_still_life_is_detected() {
        let mut engine = LifeEngine::new(10, 10, &LifeConfig::seeded(1)).unwrap();
        for (r, c) in [(4, 4), (4, 5), (5, 4), (5, 5)] {
            engine.set_alive(r, c, true);
        }

        let mut stats = LifeStats::new();
        stats.record(&engine.tick());
        stats.record(&engine.tick());

        assert_eq!(stats.current, 4);
        assert_eq!(stats.delta(), 0);
        assert_eq!(stats.still_generations, 2);
    }

    #[test]
    fn test_blinker_is_not_still() {
        let mut engine = LifeEngine::new(9, 9, &LifeConfig::seeded(1)).unwrap();
        for c in 3..6 {
            engine.set_alive(4, c, true);
        }

        let mut stats = LifeStats::new();
        for _ in 0..3 {
            stats.record(&engine.tick());
        }

        assert_eq!(stats.current, 3);
        assert_eq!(stats.peak, 3);
        assert!(!stats.is_still());
    }
}
