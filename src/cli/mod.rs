//! Command handlers for the agroscore CLI.

pub mod methodology;
pub mod score;

pub use methodology::run_methodology;
pub use score::{load_attributes, run_score, ScoreConfig};

/// Process exit codes used by the CLI.
pub mod exit_codes {
    /// Successful evaluation
    pub const SUCCESS: i32 = 0;
    /// Composite index below the requested `--min-index` threshold
    pub const BELOW_THRESHOLD: i32 = 1;
    /// Any error (bad input, IO failure)
    pub const ERROR: i32 = 3;
}
