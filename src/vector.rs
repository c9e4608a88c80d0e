//! Test vector sampling and encoding.
//!
//! One run of the generator draws a single pseudo-random `f64` and renders
//! it twice: as a hex float literal and as a decimal expansion with exactly
//! 100 fractional digits. A hex float parser under test consumes the first
//! form; the harness checks its result against the bit pattern implied by
//! the second.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::hex::ToHex;

/// Pseudo-random state for a single generator run.
///
/// The state is built from an explicit seed so harness runs can be
/// reproduced; [`RandomSource::from_clock`] is the production path,
/// combining a second-granularity clock reading with the test identifier so
/// runs launched in parallel within the same second still diverge.
///
/// # Examples
///
/// ```
/// use fhexgen::{RandomSource, TestVector};
///
/// let mut a = RandomSource::from_parts(1_700_000_000, 42);
/// let mut b = RandomSource::from_parts(1_700_000_000, 42);
/// assert_eq!(TestVector::generate(&mut a), TestVector::generate(&mut b));
/// ```
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: Xoshiro256StarStar,
}

impl RandomSource {
    /// Builds a source from an explicit clock reading and test identifier.
    #[must_use]
    pub fn from_parts(clock_secs: u64, test_id: i64) -> Self {
        let seed = clock_secs.wrapping_add(test_id as u64);
        Self {
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    /// Builds a source from the system clock, perturbed by `test_id`.
    ///
    /// A clock before the Unix epoch reads as zero.
    #[must_use]
    pub fn from_clock(test_id: i64) -> Self {
        let clock_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self::from_parts(clock_secs, test_id)
    }
}

/// One generated vector: the sampled value and its two textual encodings.
///
/// Both encodings name the same bit pattern, so a standards-compliant
/// parser fed either string must reproduce [`TestVector::value`] exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct TestVector {
    /// The sampled value, sign applied.
    pub value: f64,
    /// Hexadecimal floating-point literal of `value`.
    pub hex: String,
    /// Decimal expansion of `value` with exactly 100 fractional digits.
    pub decimal: String,
}

impl TestVector {
    /// Draws one value from `source` and renders both encodings.
    ///
    /// The magnitude is shaped in two stages: `m` uniform in `[0, 100)`
    /// drives the scale, and the value is then uniform in `[0, e^m)`. The
    /// mixture keeps most values small while still reaching ~1e43 when `m`
    /// lands near the top, stressing parser boundary handling across the
    /// whole range. The sign is a fair coin flip.
    pub fn generate(source: &mut RandomSource) -> Self {
        let m: f64 = source.rng.gen::<f64>() * 100.0;
        // Scale a unit sample instead of drawing from a range: a non-finite
        // scale rides through as infinity, which stays a legal vector,
        // where `gen_range` would panic on the open bound.
        let mut value = source.rng.gen::<f64>() * m.exp();
        if source.rng.gen::<bool>() {
            value = -value;
        }
        Self {
            value,
            hex: value.to_hex(),
            decimal: decimal_expansion(value),
        }
    }
}

impl fmt::Display for TestVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.hex, self.decimal)
    }
}

/// Renders `value` with exactly 100 fractional digits, `%.100f` style.
///
/// Rust's precision formatting is exact for floats, so large magnitudes
/// print their full integer part and tiny ones their full run of leading
/// fractional zeroes. Infinity renders as `inf`, matching the hex form.
///
/// # Examples
///
/// ```
/// use fhexgen::decimal_expansion;
///
/// let s = decimal_expansion(0.5);
/// assert!(s.starts_with("0.5"));
/// assert_eq!(s.len(), "0.".len() + 100);
/// ```
#[must_use]
pub fn decimal_expansion(value: f64) -> String {
    format!("{value:.100}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::FromHex;

    const CLOCK: u64 = 1_650_000_000;

    #[test]
    fn same_seed_reproduces() {
        let mut a = RandomSource::from_parts(CLOCK, 42);
        let mut b = RandomSource::from_parts(CLOCK, 42);
        assert_eq!(TestVector::generate(&mut a), TestVector::generate(&mut b));
    }

    #[test]
    fn identifier_perturbs_seed() {
        let mut a = RandomSource::from_parts(CLOCK, 41);
        let mut b = RandomSource::from_parts(CLOCK, 43);
        assert_ne!(
            TestVector::generate(&mut a).value.to_bits(),
            TestVector::generate(&mut b).value.to_bits()
        );
    }

    #[test]
    fn encodings_agree_with_value() {
        for id in 0..500 {
            let mut source = RandomSource::from_parts(CLOCK, id);
            let vector = TestVector::generate(&mut source);

            assert!(!vector.hex.is_empty());
            assert!(!vector.decimal.is_empty());

            let from_hex = f64::from_hex(&vector.hex).unwrap();
            assert_eq!(
                from_hex.to_bits(),
                vector.value.to_bits(),
                "hex mismatch for id {id}: {}",
                vector.hex
            );

            let from_decimal: f64 = vector.decimal.parse().unwrap();
            assert_eq!(
                from_decimal.to_bits(),
                vector.value.to_bits(),
                "decimal mismatch for id {id}: {}",
                vector.decimal
            );

            assert_eq!(
                vector.hex.starts_with('-'),
                vector.decimal.starts_with('-'),
                "sign disagreement for id {id}"
            );
            assert_eq!(vector.hex.starts_with('-'), vector.value.is_sign_negative());
        }
    }

    #[test]
    fn magnitudes_span_many_decades() {
        let mut min_log = f64::INFINITY;
        let mut max_log = f64::NEG_INFINITY;
        for id in 0..10_000 {
            let mut source = RandomSource::from_parts(CLOCK, id);
            let vector = TestVector::generate(&mut source);
            let magnitude = vector.value.abs();
            if magnitude > 0.0 && magnitude.is_finite() {
                let log = magnitude.log10();
                min_log = min_log.min(log);
                max_log = max_log.max(log);
            }
        }
        assert!(max_log - min_log >= 20.0, "span {min_log}..{max_log}");
        assert!(max_log >= 20.0, "no large magnitudes, max {max_log}");
        assert!(min_log <= 3.0, "no small magnitudes, min {min_log}");
    }

    #[test]
    fn infinity_encodes_consistently() {
        // The sampler tolerates overflow to infinity; both encodings must
        // keep naming the same bit pattern when it happens.
        for value in [f64::INFINITY, f64::NEG_INFINITY] {
            let hex = value.to_hex();
            let decimal = decimal_expansion(value);
            assert_eq!(f64::from_hex(&hex).unwrap().to_bits(), value.to_bits());
            assert_eq!(decimal.parse::<f64>().unwrap().to_bits(), value.to_bits());
            assert_eq!(hex.starts_with('-'), decimal.starts_with('-'));
        }
        assert_eq!(decimal_expansion(f64::INFINITY), "inf");
    }

    #[test]
    fn negative_zero_keeps_its_sign() {
        let hex = (-0.0_f64).to_hex();
        let decimal = decimal_expansion(-0.0);
        assert_eq!(hex, "-0x0p+0");
        assert!(decimal.starts_with("-0.0"));
        assert_eq!(decimal.parse::<f64>().unwrap().to_bits(), (-0.0_f64).to_bits());
    }

    #[test]
    fn expansion_has_exactly_100_fractional_digits() {
        for value in [0.0, 0.5, 1.0, -2.25, 1e-10, 2f64.powi(100), f64::MAX] {
            let s = decimal_expansion(value);
            let (_, fraction) = s.split_once('.').unwrap();
            assert_eq!(fraction.len(), 100, "{value}: {s}");
        }
    }

    #[test]
    fn expansion_is_exact() {
        // 0.1 is not representable; the expansion must show the nearest
        // double, not the shortest decimal.
        let s = decimal_expansion(0.1);
        assert!(
            s.starts_with("0.1000000000000000055511151231257827021181583404541015625"),
            "{s}"
        );

        // 2^100 prints its full integer part.
        let s = decimal_expansion(2f64.powi(100));
        assert!(s.starts_with("1267650600228229401496703205376."), "{s}");
    }
}
