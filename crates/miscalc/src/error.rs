#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("Calculation failed: {0}")]
    Calculation(String),

    #[error("Server error: {0}")]
    Server(String),
}
