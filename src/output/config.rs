//! Output configuration types

/// Configuration for the operator-facing status lines.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Suppress the status lines entirely
    pub quiet: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            quiet: false,
        }
    }
}
