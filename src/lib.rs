//! Randomized test vector generation for hexadecimal floating-point
//! parsers.
//!
//! Each run draws one pseudo-random `f64` and renders it two ways: as a
//! hexadecimal floating-point literal (`0x1.8p+1`, the format of C's `%a`
//! printf specifier) and as a decimal expansion with exactly 100 fractional
//! digits. A parser under test consumes the hex form; the harness checks
//! its output against the bit pattern implied by the decimal form, so any
//! divergence pins a parser defect.
//!
//! Magnitudes are deliberately spread from zero up through ~1e43, and
//! zero, subnormal and infinite outcomes are all legal vectors: the point
//! is to stress boundary handling in the parser under test, not to sample
//! a statistically rigorous distribution.
//!
//! The crate provides:
//! - [`RandomSource`] and [`TestVector`] for seedable sampling and the two
//!   encodings
//! - [`ToHex`] / [`FromHex`] for hex float formatting, plus a reference
//!   parser for round-trip checks
//! - [`extend`] with the sign-extension operation set
//!   (`i32.extend8_s`-family semantics)
//! - [`cli`] for the one-shot binary's argument handling
//!
//! # Examples
//!
//! ```
//! use fhexgen::{FromHex, RandomSource, TestVector};
//!
//! // Seeded explicitly, output is fully reproducible.
//! let mut source = RandomSource::from_parts(1_700_000_000, 42);
//! let vector = TestVector::generate(&mut source);
//!
//! // Both encodings name the same bit pattern.
//! let reparsed = f64::from_hex(&vector.hex).unwrap();
//! assert_eq!(reparsed.to_bits(), vector.value.to_bits());
//! let reparsed: f64 = vector.decimal.parse().unwrap();
//! assert_eq!(reparsed.to_bits(), vector.value.to_bits());
//! ```

pub mod cli;
pub mod extend;
pub mod hex;
pub mod vector;

pub use cli::InvalidArguments;
pub use hex::{FromHex, ToHex};
pub use vector::{decimal_expansion, RandomSource, TestVector};
