use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("Unable to find/open {file_name}")]
    FileNotFound { file_name: String },
    #[error("Line {line} is not a valid test event. {source}")]
    InvalidEvent {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
