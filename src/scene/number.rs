//! Numeric formatting for emitted scene text.
//!
//! POV-Ray scene files produced by this format have always printed reals with
//! six significant digits in general notation: trailing zeros dropped,
//! exponent form for very small or very large magnitudes (`1e-05`,
//! `1.5e+06`). [`Real`] reproduces that so output stays diff-stable.

use std::fmt;

const SIGNIFICANT_DIGITS: i32 = 6;

/// A real number printed in six-significant-digit general notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Real(pub f64);

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("nan");
        }
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "inf" } else { "-inf" });
        }
        if v == 0.0 {
            return f.write_str(if v.is_sign_negative() { "-0" } else { "0" });
        }

        // Round to the target precision first; the decimal exponent of the
        // rounded value decides between fixed and exponent notation.
        let sci = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, v);
        let (mantissa, exp) = sci.split_once('e').ok_or(fmt::Error)?;
        let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;

        if exp < -4 || exp >= SIGNIFICANT_DIGITS {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
        } else {
            let decimals = (SIGNIFICANT_DIGITS - 1 - exp) as usize;
            let fixed = format!("{:.*}", decimals, v);
            f.write_str(trim_fraction(&fixed))
        }
    }
}

/// A 3-vector printed as `<x,y,z>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector(pub [f64; 3]);

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "<{},{},{}>", Real(x), Real(y), Real(z))
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(v: f64) -> String {
        Real(v).to_string()
    }

    #[test]
    fn integers_drop_fraction() {
        assert_eq!(show(0.0), "0");
        assert_eq!(show(1.0), "1");
        assert_eq!(show(-8.0), "-8");
        assert_eq!(show(100.0), "100");
        assert_eq!(show(123456.0), "123456");
    }

    #[test]
    fn negative_zero_keeps_sign() {
        assert_eq!(show(-0.0), "-0");
    }

    #[test]
    fn rounds_to_six_significant_digits() {
        assert_eq!(show(1.5), "1.5");
        assert_eq!(show(1.234_567_89), "1.23457");
        assert_eq!(show(-0.308), "-0.308");
        assert_eq!(show(0.000_123_456_7), "0.000123457");
        assert_eq!(show(89.999_999_9), "90");
    }

    #[test]
    fn exponent_form_for_extreme_magnitudes() {
        assert_eq!(show(0.000_01), "1e-05");
        assert_eq!(show(-2.5e-7), "-2.5e-07");
        assert_eq!(show(1_500_000.0), "1.5e+06");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(show(f64::NAN), "nan");
        assert_eq!(show(f64::INFINITY), "inf");
        assert_eq!(show(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn vector_is_angle_bracketed() {
        assert_eq!(Vector([2.0, -1.0, 5.25]).to_string(), "<2,-1,5.25>");
    }
}
