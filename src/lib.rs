//! # Decibinary - ordered enumeration of decibinary numbers
//!
//! A decibinary number is a string of decimal digits 0-9 read with base-2
//! place values, so `"13"` is `1·2 + 3 = 5`. Many strings share a value. The
//! infinite sequence orders them by decoded value, then by digit count, then
//! numerically:
//!
//! `0, 1, 2, 10, 3, 11, 4, 12, 20, 100, 5, 13, 21, 101, ...`
//!
//! [`DecibinaryEnumerator`] grows this sequence on demand. Each new value is
//! built one digit length at a time: pick the leading digit, then reuse the
//! memoized strings for the remainder, zero-padded to fill the gap.
//!
//! ## Example
//!
//! ```
//! use decibinary_rs::DecibinaryEnumerator;
//!
//! let mut enumerator = DecibinaryEnumerator::new();
//! assert_eq!(enumerator.nth(4).unwrap(), "10");
//! assert_eq!(enumerator.nth(10).unwrap(), "100");
//! assert_eq!(enumerator.all_strings_for(4), ["4", "12", "20", "100"]);
//! assert_eq!(enumerator.position_of("100").unwrap(), 10);
//! ```
//!
//! ## Performance
//!
//! - Each (value, length) pair is computed once and reused by every later value
//! - Memory grows with the highest value reached; nothing is evicted

mod digits;
mod enumerator;
mod error;
pub mod harness;
mod iter;
mod memo;


pub use digits::{decode, max_length, Decibinary};
pub use enumerator::{DecibinaryEnumerator, EnumerationStats};
pub use error::DecibinaryError;
pub use iter::Sequence;
pub use memo::MemoTable;
