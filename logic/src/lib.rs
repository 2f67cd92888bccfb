//! Packed three- and four-valued truth vectors.
//!
//! [`Kleene`] and [`KleeneVec`] implement Kleene's strong three-valued logic,
//! [`Belnap`] and [`BelnapVec`] implement Belnap's four-valued logic. Vectors
//! store 64 positions per word pair and combine whole words at a time.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_in_result)]

#[macro_use]
mod macros;

pub mod belnap;
mod bitplane;
mod convert;
pub mod error;
pub mod kleene;

pub use belnap::{Belnap, BelnapVec};
pub use error::{Contradiction, OutOfBounds};
pub use kleene::{Kleene, KleeneVec};
