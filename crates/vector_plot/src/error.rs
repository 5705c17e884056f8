//! Library error types

use crate::config::ConfigError;

/// Top-level error for plotting and export operations
#[derive(thiserror::Error, Debug)]
pub enum PlotError {
    /// Configuration could not be loaded or saved
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Writing the rendered output failed
    #[error("failed to write output: {0}")]
    Export(#[from] std::io::Error),
}
