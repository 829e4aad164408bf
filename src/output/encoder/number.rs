use std::io::{self, Write};

use crate::model::{SampleValue, Timestamp};

// 2^53: every integer of smaller magnitude is exactly representable.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

const MIN_POSITIONAL: f64 = 1e-4;
const MAX_POSITIONAL: f64 = 1e21;

/// Writes a sample value in its shortest form that parses back to the very
/// same `f64`.
///
/// Infinities and NaN use the exposition spellings `+Inf`, `-Inf` and `NaN`.
/// Integers below 2^53 are written without a fraction, other values in
/// `[1e-4, 1e21)` positionally and the rest in scientific notation.
pub fn write_value<W: Write + ?Sized>(w: &mut W, v: SampleValue) -> io::Result<()> {
    if v.is_nan() {
        return w.write_all(b"NaN");
    }
    if v.is_infinite() {
        return w.write_all(if v > 0.0 { b"+Inf" } else { b"-Inf" });
    }
    if v == 0.0 && v.is_sign_negative() {
        return w.write_all(b"-0");
    }

    let abs = v.abs();
    if v.fract() == 0.0 && abs < MAX_SAFE_INTEGER {
        let mut buf = itoa::Buffer::new();
        return w.write_all(buf.format(v as i64).as_bytes());
    }

    if abs >= MIN_POSITIONAL && abs < MAX_POSITIONAL {
        write!(w, "{}", v)
    } else {
        write!(w, "{:e}", v)
    }
}

pub fn write_timestamp<W: Write + ?Sized>(w: &mut W, ts: Timestamp) -> io::Result<()> {
    let mut buf = itoa::Buffer::new();
    w.write_all(buf.format(ts).as_bytes())
}
