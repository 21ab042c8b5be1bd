use thiserror::Error;

/// Errors raised while building an engine.
///
/// Ticking never fails; these only surface from constructors and config
/// validation, and the caller is expected to abort startup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("grid of {rows}x{cols} is too small (need at least {min_rows}x{min_cols})")]
    GridTooSmall {
        rows: usize,
        cols: usize,
        min_rows: usize,
        min_cols: usize,
    },

    #[error("grid of {rows}x{cols} cells cannot be allocated")]
    GridTooLarge { rows: usize, cols: usize },

    #[error("density must be within 0.0..=1.0, got {0}")]
    InvalidDensity(f64),

    #[error("initial snake length must be at least 1")]
    InvalidLength,

    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::GridTooSmall {
            rows: 2,
            cols: 3,
            min_rows: 5,
            min_cols: 5,
        };
        assert_eq!(
            err.to_string(),
            "grid of 2x3 is too small (need at least 5x5)"
        );
        assert_eq!(
            EngineError::InvalidDensity(1.5).to_string(),
            "density must be within 0.0..=1.0, got 1.5"
        );
        assert_eq!(
            EngineError::GridTooLarge { rows: 7, cols: 9 }.to_string(),
            "grid of 7x9 cells cannot be allocated"
        );
    }
}
