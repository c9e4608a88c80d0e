//! Sign-extension operations over two's-complement integers.
//!
//! These mirror the WebAssembly sign-extension instructions
//! (`i32.extend8_s` and friends): each function sign-extends the low bits
//! of its argument and discards everything above them. They are pure and
//! total; runtimes that lack the native instructions call them as drop-in
//! replacements.
//!
//! The narrowing-then-widening casts are the Rust spelling of the usual
//! mask-and-or arithmetic: `x as i8` keeps the low 8 bits, and widening an
//! `i8` replicates its sign bit.

/// Sign-extends the low 8 bits of `x`, discarding the upper 24.
#[inline]
#[must_use]
pub const fn i32_extend8_s(x: i32) -> i32 {
    x as i8 as i32
}

/// Sign-extends the low 16 bits of `x`, discarding the upper 16.
#[inline]
#[must_use]
pub const fn i32_extend16_s(x: i32) -> i32 {
    x as i16 as i32
}

/// Sign-extends the low 8 bits of `x`, discarding the upper 56.
#[inline]
#[must_use]
pub const fn i64_extend8_s(x: i64) -> i64 {
    x as i8 as i64
}

/// Sign-extends the low 16 bits of `x`, discarding the upper 48.
#[inline]
#[must_use]
pub const fn i64_extend16_s(x: i64) -> i64 {
    x as i16 as i64
}

/// Sign-extends the low 32 bits of `x`, discarding the upper 32.
#[inline]
#[must_use]
pub const fn i64_extend32_s(x: i64) -> i64 {
    x as i32 as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend8_s_i32() {
        let cases: &[(i32, i32)] = &[
            (0, 0),
            (0x7f, 127),
            (0x80, -128),
            (0xff, -1),
            (0x0123_4500, 0),
            (0xfedc_ba80_u32 as i32, -0x80),
            (-1, -1),
        ];
        for &(input, expected) in cases {
            assert_eq!(i32_extend8_s(input), expected, "input {input:#x}");
        }
    }

    #[test]
    fn extend16_s_i32() {
        let cases: &[(i32, i32)] = &[
            (0, 0),
            (0x7fff, 32767),
            (0x8000, -32768),
            (0xffff, -1),
            (0x0123_0000, 0),
            (0xfedc_8000_u32 as i32, -0x8000),
            (-1, -1),
        ];
        for &(input, expected) in cases {
            assert_eq!(i32_extend16_s(input), expected, "input {input:#x}");
        }
    }

    #[test]
    fn extend8_s_i64() {
        let cases: &[(i64, i64)] = &[
            (0, 0),
            (0x7f, 127),
            (0x80, -128),
            (0xff, -1),
            (0x0123_4567_89ab_cd00, 0),
            (0xfedc_ba98_7654_3280_u64 as i64, -0x80),
            (-1, -1),
        ];
        for &(input, expected) in cases {
            assert_eq!(i64_extend8_s(input), expected, "input {input:#x}");
        }
    }

    #[test]
    fn extend16_s_i64() {
        let cases: &[(i64, i64)] = &[
            (0, 0),
            (0x7fff, 32767),
            (0x8000, -32768),
            (0xffff, -1),
            (0x1234_5678_9abc_0000_u64 as i64, 0),
            (0xfedc_ba98_7654_8000_u64 as i64, -0x8000),
            (-1, -1),
        ];
        for &(input, expected) in cases {
            assert_eq!(i64_extend16_s(input), expected, "input {input:#x}");
        }
    }

    #[test]
    fn extend32_s_i64() {
        let cases: &[(i64, i64)] = &[
            (0, 0),
            (0x7fff_ffff, 2147483647),
            (0x8000_0000, -2147483648),
            (0xffff_ffff, -1),
            (0x0123_4567_0000_0000, 0),
            (0xfedc_ba98_8000_0000_u64 as i64, -0x8000_0000),
            (-1, -1),
        ];
        for &(input, expected) in cases {
            assert_eq!(i64_extend32_s(input), expected, "input {input:#x}");
        }
    }
}
