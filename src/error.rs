use thiserror::Error;

use crate::coord::GeoError;
use crate::impl_err;
use crate::source::SourceError;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Geo(GeoError),

    #[error(transparent)]
    Source(SourceError),

    #[error("io failure: {0}")]
    Io(std::io::Error),
}

impl_err!(GeoError, Geo);
impl_err!(SourceError, Source);
impl_err!(std::io::Error, Io);
