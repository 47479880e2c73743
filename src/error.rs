use std::path::PathBuf;
use thiserror::Error;

/// Failures that can occur while serving a single digest request.
///
/// None of these is fatal to the host process. Each one is turned into the
/// `error` field of a [`HashResponse`](crate::bridge::HashResponse) through
/// its `Display` text.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The request was not a JSON object carrying a string `filePath`.
    #[error("failed to decode request: {0}")]
    Decode(String),

    /// The file could not be opened for reading.
    #[error("failed to open file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An I/O error occurred after the file was opened.
    #[error("failed to read {}: {source}", describe(.path))]
    Read {
        path: Option<PathBuf>,
        source: std::io::Error,
    },
}

impl BridgeError {
    /// Attaches a path to a read failure raised by a path-less reader.
    pub(crate) fn with_path(self, file: &std::path::Path) -> Self {
        match self {
            BridgeError::Read { path: None, source } => BridgeError::Read {
                path: Some(file.to_path_buf()),
                source,
            },
            other => other,
        }
    }
}

fn describe(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!("file {}", p.display()),
        None => "input".to_string(),
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        BridgeError::Decode(err.to_string())
    }
}
