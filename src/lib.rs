//! densevec: dense `f64` vectors with checked arithmetic, plus a minimal
//! perceptron built on top of them.
//!
//! Every operation with a precondition (matching sizes, a non-empty
//! vector, a non-zero norm, an in-range index) returns a
//! [`Result`](error::Result) instead of a substituted default.
//!
//! # Quick Start
//!
//! ```
//! use densevec::prelude::*;
//!
//! let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
//! let b = Vector::from_slice(&[4.0, 5.0, 6.0]);
//!
//! let sum = (&a + &b).expect("equal sizes");
//! assert_eq!(sum.as_slice(), &[5.0, 7.0, 9.0]);
//! assert_eq!(a.dot(&b).expect("equal sizes"), 32.0);
//!
//! // Mismatched sizes are an error, never a zero vector
//! assert!(a.dot(&Vector::zeros(2)).is_err());
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the [`Vector`](primitives::Vector) type
//! - [`classification`]: single-neuron perceptron
//! - [`error`]: error taxonomy

pub mod classification;
pub mod error;
pub mod prelude;
pub mod primitives;

pub use error::{Result, VectorError};
