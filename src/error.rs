// src/error.rs
//
// Error types for config loading and the per-frame step

use thiserror::Error;

/// Errors that can occur while loading `config.toml`
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but cannot drive the geometry or the window
    #[error("Invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Faults raised while stepping a frame. Any of these ends the app loop.
#[derive(Error, Debug, PartialEq)]
pub enum FrameError {
    #[error("Edge ({from}, {to}) references a vertex outside 0..{vertex_count}")]
    EdgeOutOfRange {
        from: usize,
        to: usize,
        vertex_count: usize,
    },

    #[error("Rotation angle is not finite: {0}")]
    NonFiniteAngle(f64),
}

pub type FrameResult<T> = Result<T, FrameError>;
