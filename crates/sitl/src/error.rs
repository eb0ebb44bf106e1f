use std::path::PathBuf;

/// Errors from loading and running a mission on the host.
#[derive(Debug, thiserror::Error)]
pub enum SitlError {
    #[error("Failed to read mission config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid mission config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid task entry '{name}' in {group}: {reason}")]
    InvalidEntry {
        group: &'static str,
        name: String,
        reason: String,
    },

    #[error("Command too long ({len} bytes, max {max})")]
    CommandTooLong { len: usize, max: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
