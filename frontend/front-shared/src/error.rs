#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Data service error: {0}")]
    Service(String),
    #[error("Failed to decode payload: {0}")]
    Decode(String),
    #[error(transparent)]
    Model(#[from] shared::Error),
}

impl From<serde_wasm_bindgen::Error> for Error {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Error::Decode(err.to_string())
    }
}
