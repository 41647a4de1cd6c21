//! Core compute primitives.
//!
//! [`Vector`] is the foundation every other module in the crate builds on.

mod vector;

pub use vector::Vector;
