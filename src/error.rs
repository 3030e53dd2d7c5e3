use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ViewerError {
    /// The image has no rows, so its aspect ratio is undefined.
    InvalidImage { width: u32, height: u32 },
    /// A configuration value is out of range.
    InvalidConfig(String),
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::InvalidImage { width, height } => {
                write!(f, "invalid image {}x{}: height must be positive", width, height)
            }
            ViewerError::InvalidConfig(msg) => write!(f, "invalid viewer config: {}", msg),
            ViewerError::ConfigIo { path, source } => {
                write!(f, "failed to read config {}: {}", path.display(), source)
            }
            ViewerError::ConfigParse { path, source } => {
                write!(f, "failed to parse config {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewerError::ConfigIo { source, .. } => Some(source),
            ViewerError::ConfigParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;
