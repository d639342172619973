use super::Error;

/// Error when a column value cannot be represented as a tabula value.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    from: Box<str>,
    to_type: &'static str,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {} to {}", self.from, self.to_type)
    }
}

impl Error {
    /// Creates a type conversion error.
    pub fn type_conversion(from: impl Into<String>, to_type: &'static str) -> Error {
        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            from: from.into().into(),
            to_type,
        }))
    }

    /// Returns `true` if this error is a type conversion error.
    pub fn is_type_conversion(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::TypeConversion(_)))
    }
}
