//! Error types for densevec operations.
//!
//! Every contract violation is reported through [`VectorError`]; no operation
//! substitutes a zero or default result for a failed precondition.

use thiserror::Error;

/// Main error type for vector and classifier operations.
///
/// # Examples
///
/// ```
/// use densevec::error::VectorError;
///
/// let err = VectorError::size_mismatch("dot", 3, 2);
/// assert!(err.to_string().contains("size mismatch"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    /// Operand sizes disagree where equality is required.
    #[error("size mismatch in {operation}: expected {expected}, got {actual}")]
    SizeMismatch {
        /// Operation that rejected the operands
        operation: &'static str,
        /// Size of the receiver
        expected: usize,
        /// Size of the other operand
        actual: usize,
    },

    /// Indexed access outside `[0, len)`.
    #[error("index {index} out of range (len={len})")]
    IndexOutOfRange {
        /// Requested index (signed so negative requests are reported as-is)
        index: isize,
        /// Length of the vector
        len: usize,
    },

    /// Operation needs at least one element.
    #[error("{operation} requires a non-empty vector")]
    EmptyVector {
        /// Operation invoked on the empty vector
        operation: &'static str,
    },

    /// Malformed constructor or call input.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the input
        message: String,
    },

    /// Division by a zero norm.
    #[error("division by zero in {operation}: vector norm is 0")]
    DivisionByZero {
        /// Operation that would have divided by zero
        operation: &'static str,
    },

    /// Geometric quantity undefined for a zero-norm operand.
    #[error("{operation} is undefined for a zero-norm vector")]
    DegenerateVector {
        /// Operation that met the degenerate operand
        operation: &'static str,
    },

    /// Invalid classifier hyperparameter.
    #[error("invalid hyperparameter: {param} = {value}, expected {constraint}")]
    InvalidHyperparameter {
        /// Parameter name
        param: &'static str,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: &'static str,
    },
}

impl VectorError {
    /// Create a size mismatch error for `operation`.
    #[must_use]
    pub fn size_mismatch(operation: &'static str, expected: usize, actual: usize) -> Self {
        Self::SizeMismatch {
            operation,
            expected,
            actual,
        }
    }

    /// Create an index out of range error.
    #[must_use]
    pub fn index_out_of_range(index: isize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create an empty vector error for `operation`.
    #[must_use]
    pub fn empty(operation: &'static str) -> Self {
        Self::EmptyVector { operation }
    }

    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, VectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_mismatch_display() {
        let err = VectorError::size_mismatch("add", 3, 4);
        let msg = err.to_string();
        assert!(msg.contains("size mismatch"));
        assert!(msg.contains("add"));
        assert!(msg.contains('3'));
        assert!(msg.contains('4'));
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = VectorError::index_out_of_range(-1, 2);
        assert_eq!(err.to_string(), "index -1 out of range (len=2)");
    }

    #[test]
    fn test_empty_display() {
        let err = VectorError::empty("max");
        assert_eq!(err.to_string(), "max requires a non-empty vector");
    }

    #[test]
    fn test_invalid_argument_from_string() {
        let err = VectorError::invalid_argument(format!("expected {} values", 3));
        assert!(matches!(err, VectorError::InvalidArgument { .. }));
        assert!(err.to_string().contains("expected 3 values"));
    }

    #[test]
    fn test_degenerate_and_division_display() {
        let div = VectorError::DivisionByZero {
            operation: "normalize",
        };
        assert!(div.to_string().contains("division by zero"));

        let deg = VectorError::DegenerateVector {
            operation: "angle_between",
        };
        assert!(deg.to_string().contains("zero-norm"));
    }

    #[test]
    fn test_invalid_hyperparameter_display() {
        let err = VectorError::InvalidHyperparameter {
            param: "learning_rate",
            value: "-0.1".to_string(),
            constraint: "> 0",
        };
        let msg = err.to_string();
        assert!(msg.contains("learning_rate"));
        assert!(msg.contains("-0.1"));
        assert!(msg.contains("> 0"));
    }
}
