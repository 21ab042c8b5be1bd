use crate::error::{EngineError, EngineResult};

/// Allocate a row-major `rows x cols` buffer filled with `fill`.
///
/// Both the cell count and the allocation itself are checked, so a grid
/// requested from the command line fails with an error instead of aborting.
pub(crate) fn filled<T: Clone>(rows: usize, cols: usize, fill: T) -> EngineResult<Vec<T>> {
    let too_large = || EngineError::GridTooLarge { rows, cols };

    let len = rows.checked_mul(cols).ok_or_else(too_large)?;
    let mut cells = Vec::new();
    cells.try_reserve_exact(len).map_err(|_| too_large())?;
    cells.resize(len, fill);

    Ok(cells)
}
