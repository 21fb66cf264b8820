#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub use error::AbsentValueError;

// Opt module
pub mod opt;
pub use opt::*; // Allow `$crate::Opt` in macros

pub mod ops;

#[cfg(feature = "serde")]
mod serde_impl;
