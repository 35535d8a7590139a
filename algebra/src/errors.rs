use ark_std::{error, fmt};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[allow(missing_docs)]
pub enum AlgebraError {
    DeserializationError,
    IndexError,
    ParameterError,
    GroupInversionError,
    UnsupportedCurveError,
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AlgebraError::*;
        f.write_str(match self {
            DeserializationError => "Could not deserialize object",
            IndexError => "Index out of bounds",
            ParameterError => "Unexpected parameter for method or function",
            GroupInversionError => "Group Element not invertible",
            UnsupportedCurveError => "The curve description names an unsupported curve",
        })
    }
}

impl error::Error for AlgebraError {}
