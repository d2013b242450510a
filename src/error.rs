use thiserror::Error;

#[derive(Error, Debug)]
pub enum BagError {
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed bag file {path}: {message}")]
    Malformed { path: String, message: String },
    #[error("club name must not be empty")]
    EmptyName,
    #[error("club distance must be a positive number of yards, got {0}")]
    InvalidDistance(f64),
    #[error("club index {index} out of range (bag holds {len} clubs)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("a club named {0} is already in the bag")]
    DuplicateName(String),
}
