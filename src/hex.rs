//! Hex float formatting and parsing for `f64`.
//!
//! Generated vectors carry their value as a hexadecimal floating-point
//! literal (`0x1.8p+1`) — the format produced by C's `%a` printf specifier
//! and used by the WebAssembly text format. [`ToHex`] renders the literal;
//! [`FromHex`] parses one back, so a vector can be checked for an exact
//! bit-pattern round-trip.
//!
//! Special values follow the WAT conventions:
//! - `±0x0p+0` for zero
//! - `±inf` for infinity
//! - `nan` for quiet NaN, `nan:0x…` for NaN with a payload
//!
//! Subnormals are renormalized to a leading `1.`, so the smallest positive
//! `f64` renders as `0x1p-1074`. Neither direction panics.

use std::fmt::Write as _;

/// Converts a floating-point number to a hexadecimal literal.
///
/// # Examples
///
/// ```
/// use fhexgen::ToHex;
///
/// assert_eq!(3.0_f64.to_hex(), "0x1.8p+1");
/// assert_eq!((-10.0_f64).to_hex(), "-0x1.4p+3");
/// assert_eq!(f64::INFINITY.to_hex(), "inf");
/// ```
pub trait ToHex {
    /// Renders the value as a hexadecimal floating-point literal.
    #[must_use]
    fn to_hex(self) -> String;
}

/// Parses a hexadecimal floating-point literal.
///
/// Accepts the output of [`ToHex`] plus the usual lexical slack: `0X` and
/// `P` casing, an optional leading `+`, underscores between digits, and
/// surrounding whitespace. Returns `None` for anything else.
///
/// # Examples
///
/// ```
/// use fhexgen::FromHex;
///
/// assert_eq!(f64::from_hex("0x1.8p+1"), Some(3.0));
/// assert_eq!(f64::from_hex("-inf"), Some(f64::NEG_INFINITY));
/// assert_eq!(f64::from_hex("0x.p+0"), None);
/// ```
pub trait FromHex: Sized {
    /// Parses a hexadecimal literal, returning `None` if it is malformed.
    #[must_use]
    fn from_hex(s: &str) -> Option<Self>;
}

impl ToHex for f64 {
    fn to_hex(self) -> String {
        to_hex(self.to_bits())
    }
}

impl FromHex for f64 {
    fn from_hex(s: &str) -> Option<Self> {
        from_hex(s)
    }
}

// f64 bit layout.
const SIG_BITS: u32 = 52;
const SIG_MASK: u64 = (1 << SIG_BITS) - 1;
const EXP_MASK: u64 = 0x7ff;
const EXP_BIAS: i32 = 1023;
const QUIET_NAN_TAG: u64 = 1 << (SIG_BITS - 1);

const HEX_DIGITS: &[u8] = b"0123456789abcdef";

fn to_hex(bits: u64) -> String {
    let mut out = String::with_capacity(24);

    if bits >> 63 != 0 {
        out.push('-');
    }

    let biased = ((bits >> SIG_BITS) & EXP_MASK) as i32;
    let significand = bits & SIG_MASK;

    if biased as u64 == EXP_MASK {
        write_nan_or_infinity(&mut out, significand);
        return out;
    }

    if biased == 0 && significand == 0 {
        out.push_str("0x0p+0");
        return out;
    }

    let (exponent, fraction) = if biased == 0 {
        // Subnormal: the value is significand * 2^-1074. Renormalize so the
        // literal keeps the 0x1.xxx shape, shifting the leading set bit out
        // into the implicit 1.
        let msb = 63 - significand.leading_zeros();
        (msb as i32 - 1074, (significand << (SIG_BITS - msb)) & SIG_MASK)
    } else {
        (biased - EXP_BIAS, significand)
    };

    out.push_str("0x1");
    if fraction != 0 {
        out.push('.');
        // Left-align the 52 fraction bits and emit nybbles until only
        // trailing zeroes remain.
        let mut fraction = fraction << 12;
        while fraction != 0 {
            out.push(HEX_DIGITS[(fraction >> 60) as usize] as char);
            fraction <<= 4;
        }
    }
    let _ = write!(out, "p{exponent:+}");
    out
}

fn write_nan_or_infinity(out: &mut String, significand: u64) {
    if significand == 0 {
        out.push_str("inf");
    } else {
        out.push_str("nan");
        if significand != QUIET_NAN_TAG {
            out.push_str(":0x");
            // Left-align the payload, skip leading zero nybbles, then emit
            // the rest (trailing zeroes are significant here).
            let mut payload = significand << 12;
            let mut nybbles = 13;
            while payload >> 60 == 0 {
                payload <<= 4;
                nybbles -= 1;
            }
            for _ in 0..nybbles {
                out.push(HEX_DIGITS[(payload >> 60) as usize] as char);
                payload <<= 4;
            }
        }
    }
}

/// Result of parsing the sign and prefix of a literal.
enum ParsedPrefix<'a> {
    Inf { negative: bool },
    Nan { negative: bool },
    NanPayload { negative: bool, payload: &'a str },
    HexFloat { negative: bool, body: &'a str },
}

fn parse_prefix(s: &str) -> Option<ParsedPrefix<'_>> {
    let s = s.trim();

    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    if s.eq_ignore_ascii_case("inf") {
        return Some(ParsedPrefix::Inf { negative });
    }

    if s.eq_ignore_ascii_case("nan") {
        return Some(ParsedPrefix::Nan { negative });
    }

    if let Some(payload) = s.strip_prefix("nan:0x").or_else(|| s.strip_prefix("nan:0X")) {
        return Some(ParsedPrefix::NanPayload { negative, payload });
    }

    let body = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))?;
    Some(ParsedPrefix::HexFloat { negative, body })
}

fn from_hex(s: &str) -> Option<f64> {
    match parse_prefix(s)? {
        ParsedPrefix::Inf { negative } => {
            Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY })
        }
        ParsedPrefix::Nan { negative } => Some(if negative { -f64::NAN } else { f64::NAN }),
        ParsedPrefix::NanPayload { negative, payload } => {
            let payload = u64::from_str_radix(payload, 16).ok()?;
            // The payload must be non-zero and fit in the significand.
            if payload == 0 || payload > SIG_MASK {
                return None;
            }
            let value = f64::from_bits((EXP_MASK << SIG_BITS) | payload);
            Some(if negative { -value } else { value })
        }
        ParsedPrefix::HexFloat { negative, body } => parse_hex_float(body, negative),
    }
}

/// Parse the mantissa and binary exponent after the `0x` prefix.
fn parse_hex_float(s: &str, negative: bool) -> Option<f64> {
    let (mantissa_str, exp_str) = match s.find(['p', 'P']) {
        Some(p) => (&s[..p], &s[p + 1..]),
        None => (s, "+0"),
    };

    let exp_str = exp_str.strip_prefix('+').unwrap_or(exp_str);
    let exponent: i32 = exp_str.parse().ok()?;

    let (int_str, frac_str) = match mantissa_str.find('.') {
        Some(dot) => (&mantissa_str[..dot], &mantissa_str[dot + 1..]),
        None => (mantissa_str, ""),
    };

    // Underscores are legal digit separators in WAT numbers.
    let int_clean: String = int_str.chars().filter(|&c| c != '_').collect();
    let frac_clean: String = frac_str.chars().filter(|&c| c != '_').collect();

    if int_clean.is_empty() && frac_clean.is_empty() {
        return None;
    }

    let int_val = if int_clean.is_empty() {
        0u64
    } else {
        u64::from_str_radix(&int_clean, 16).ok()?
    };

    let mut mantissa = int_val as f64;

    // Each fractional hex digit contributes digit / 16^(i+1).
    for (i, c) in frac_clean.chars().enumerate() {
        let digit = c.to_digit(16)? as f64;
        let shift = 4 * (i as u32 + 1);
        if shift < 64 {
            mantissa += digit / (1_u64 << shift) as f64;
        }
        // Digits beyond 64 bits cannot affect an f64.
    }

    if mantissa == 0.0 {
        return Some(if negative { -0.0 } else { 0.0 });
    }

    // Apply the binary exponent in 30-bit steps so each scale factor stays
    // an exact power of two within u64 range.
    let value = if exponent >= 0 {
        let mut result = mantissa;
        let mut exp = exponent;
        while exp > 0 {
            let step = exp.min(30);
            result *= (1_u64 << step) as f64;
            exp -= step;
        }
        result
    } else {
        let mut result = mantissa;
        let mut exp = -exponent;
        while exp > 0 {
            let step = exp.min(30);
            result /= (1_u64 << step) as f64;
            exp -= step;
        }
        result
    };

    Some(if negative { -value } else { value })
}
