use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("Index is out of range: {index} (container holds {len} notifications)")]
    OutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, NotificationError>;
