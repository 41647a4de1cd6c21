//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use densevec::prelude::*;
//! ```

pub use crate::classification::{Perceptron, PerceptronConfig, TrainingSummary};
pub use crate::error::{Result, VectorError};
pub use crate::primitives::Vector;
