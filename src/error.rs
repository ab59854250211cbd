use std::path::PathBuf;

/// Errors surfaced by the game library.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// The high-score record could not be written
    #[error("cannot write record {path}: {source}")]
    Record {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The high score could not be encoded
    #[error("cannot encode record: {0}")]
    Encode(#[from] serde_json::Error),

    /// The screen cannot hold a ship and at least one row of aliens
    #[error("screen too small: {width}x{height}")]
    ScreenTooSmall { width: f32, height: f32 },
}

pub type Result<T> = std::result::Result<T, GameError>;
