use ark_std::{error, fmt, string::String};
use quill_algebra::prelude::AlgebraError;

pub(crate) type Result<T> = core::result::Result<T, SnarkError>;

#[derive(Debug, Clone, Eq, PartialEq)]
/// The errors of the proof system.
pub enum SnarkError {
    /// Algebra error.
    Algebra(AlgebraError),
    /// The coefficient vector does not have `degree + 1` entries.
    CoefficientCountError {
        /// The expected number of coefficients.
        expected: usize,
        /// The number of coefficients provided.
        found: usize,
    },
    /// The witness does not have one value per variable.
    WitnessLengthError {
        /// The number of variables of the constraint system.
        expected: usize,
        /// The length of the witness.
        found: usize,
    },
    /// The witness violates the constraint at this row.
    UnsatisfiedConstraint(usize),
    /// The interpolation point at this index repeats an earlier one.
    DuplicateInterpolationPoint(usize),
    /// The secret evaluation point coincides with a constraint point.
    TauCollision,
    /// A(x)·B(x) − C(x) is not divisible by the vanishing polynomial.
    QapDivisibilityError,
    /// Division by zero.
    DivisionByZero,
    /// Function params error.
    FuncParamsError,
    /// The proof bytes are malformed.
    DeserializationError,
    /// Reading or writing a file failed.
    Io(String),
}

impl fmt::Display for SnarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SnarkError::*;
        match self {
            Algebra(e) => write!(f, "Algebra: {}", e),
            CoefficientCountError { expected, found } => write!(
                f,
                "Expected {} polynomial coefficients, found {}.",
                expected, found
            ),
            WitnessLengthError { expected, found } => write!(
                f,
                "Witness has {} values but the constraint system has {} variables.",
                found, expected
            ),
            UnsatisfiedConstraint(row) => write!(f, "Witness violates constraint {}.", row),
            DuplicateInterpolationPoint(index) => {
                write!(f, "Interpolation point {} is a duplicate.", index)
            }
            TauCollision => f.write_str("Secret point collides with a constraint point."),
            QapDivisibilityError => {
                f.write_str("A(x)B(x) - C(x) is not divisible by the vanishing polynomial.")
            }
            DivisionByZero => f.write_str("Division by zero."),
            FuncParamsError => f.write_str("Function params error."),
            DeserializationError => f.write_str("Malformed proof bytes."),
            Io(e) => write!(f, "I/O: {}", e),
        }
    }
}

impl error::Error for SnarkError {}

impl From<AlgebraError> for SnarkError {
    fn from(e: AlgebraError) -> SnarkError {
        SnarkError::Algebra(e)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for SnarkError {
    fn from(e: std::io::Error) -> SnarkError {
        SnarkError::Io(e.to_string())
    }
}
