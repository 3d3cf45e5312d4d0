//! Tabula Core - Fundamental types
//!
//! This crate provides the core types used throughout Tabula:
//! - `Element`: the numeric capabilities a matrix cell must offer
//! - `Rational`: exact fractions for elimination without rounding
//! - `TabulaError`: recoverable errors with machine-readable codes
//! - `requires!` / `ensures!`: contract checks for programmer errors

pub mod contract;
mod element;
mod error;
mod rational;

pub use element::Element;
pub use error::{codes, Result, TabulaError};
pub use rational::Rational;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Element, Rational, Result, TabulaError};
    pub use crate::error::codes;
    pub use num_traits::{One, Zero};
}
