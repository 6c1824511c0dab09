use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("invalid viewport: {0}")]
    InvalidViewport(String),
}
