use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to bind or inspect the local listener for the fake API.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
