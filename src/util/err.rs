/// Converts errors from their error type (of the submodule) to that of
/// a parkgrid::Error variant, or into another submodule error.
///
/// ```rust,ignore
/// use parkgrid::geo::GeoError;
/// parkgrid::impl_err!(GeoError, Geo);
/// parkgrid::impl_err!(GeoError, SourceError, Geo);
/// ```
pub mod err_macro {
    #[macro_export]
    macro_rules! impl_err {
        ($from:ty, $variant:ident) => {
            impl From<$from> for $crate::Error {
                fn from(value: $from) -> Self {
                    $crate::Error::$variant(value)
                }
            }
        };
        ($from:ty, $to:ident, $variant:ident) => {
            impl From<$from> for $to {
                fn from(value: $from) -> Self {
                    $to::$variant(value)
                }
            }
        };
    }

    pub use impl_err;
}
