#![no_std]

//! Authorization and bounds checks shared by the relief contracts.
//!
//! Input failures are reported with the message the calling contract passes
//! from its own error table, so each contract keeps an independent numbering
//! space. Only misuse of a guard itself has a message of its own.

pub mod admin;
pub mod bounds;
pub mod signers;
pub mod validation;

/// Longest string `BoundsModule::require_bounded_ascii` is able to inspect.
pub const MAX_CHECKED_STRING_LEN: usize = 256;

/// Raised when a caller asks for a string bound above `MAX_CHECKED_STRING_LEN`.
pub const ERR_BOUND_TOO_LARGE: &str = "string bound exceeds checked length";
