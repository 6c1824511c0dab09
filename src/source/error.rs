use thiserror::Error;

use crate::coord::GeoError;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Geo(GeoError),
}

crate::impl_err!(GeoError, SourceError, Geo);
