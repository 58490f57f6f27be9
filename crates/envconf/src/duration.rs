//! Signed nanosecond durations with a unit-suffixed text form.
//!
//! The text form is a sequence of decimal numbers, each with an optional
//! fraction and a unit suffix, e.g. `"300ms"`, `"-1.5h"` or `"2h45m"`.
//! Valid units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`.
//! Formatting produces the same grammar, e.g. `"1h30m0s"`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SEC: u64 = 1_000_000_000;
const NANOS_PER_MIN: u64 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MIN;

/// Magnitude of `i64::MIN`, the largest value a parsed number may reach
/// before the sign is applied.
const MAX_MAGNITUDE: u64 = 1 << 63;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("invalid duration {0:?}")]
    Invalid(String),

    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("duration {0:?} is out of range")]
    Overflow(String),
}

/// Elapsed time between two instants as a signed count of nanoseconds,
/// covering roughly ±292 years.
///
/// Unlike [`std::time::Duration`] it can be negative, so `"-5s"` is a
/// valid value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(i64);

impl Duration {
    pub const ZERO: Self = Self(0);
    pub const NANOSECOND: Self = Self(1);
    pub const MICROSECOND: Self = Self(NANOS_PER_MICRO as i64);
    pub const MILLISECOND: Self = Self(NANOS_PER_MILLI as i64);
    pub const SECOND: Self = Self(NANOS_PER_SEC as i64);
    pub const MINUTE: Self = Self(NANOS_PER_MIN as i64);
    pub const HOUR: Self = Self(NANOS_PER_HOUR as i64);
    pub const MIN: Self = Self(i64::MIN);
    pub const MAX: Self = Self(i64::MAX);

    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    /// Saturates at [`Duration::MIN`] / [`Duration::MAX`].
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis.saturating_mul(NANOS_PER_MILLI as i64))
    }

    /// Saturates at [`Duration::MIN`] / [`Duration::MAX`].
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(NANOS_PER_SEC as i64))
    }

    /// Saturates at [`Duration::MIN`] / [`Duration::MAX`].
    pub const fn from_mins(mins: i64) -> Self {
        Self(mins.saturating_mul(NANOS_PER_MIN as i64))
    }

    /// Saturates at [`Duration::MIN`] / [`Duration::MAX`].
    pub const fn from_hours(hours: i64) -> Self {
        Self(hours.saturating_mul(NANOS_PER_HOUR as i64))
    }

    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// `None` for negative durations.
    pub fn to_std(self) -> Option<std::time::Duration> {
        u64::try_from(self.0).ok().map(std::time::Duration::from_nanos)
    }

    /// `None` when `d` does not fit in `i64` nanoseconds.
    pub fn from_std(d: std::time::Duration) -> Option<Self> {
        i64::try_from(d.as_nanos()).ok().map(Self)
    }
}

impl Duration {
    fn parse(input: &str) -> Result<Self, DurationError> {
        let invalid = || DurationError::Invalid(input.to_string());
        let overflow = || DurationError::Overflow(input.to_string());

        let mut s = input;
        let mut negative = false;
        if let Some(rest) = s.strip_prefix('-') {
            negative = true;
            s = rest;
        } else if let Some(rest) = s.strip_prefix('+') {
            s = rest;
        }

        if s == "0" {
            return Ok(Self::ZERO);
        }
        if s.is_empty() {
            return Err(invalid());
        }

        let mut total: u64 = 0;
        while !s.is_empty() {
            if !s.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
                return Err(invalid());
            }

            let (whole, rest, has_whole) = leading_int(s).ok_or_else(invalid)?;
            s = rest;

            let (mut frac, mut scale, mut has_frac) = (0, 1.0, false);
            if let Some(rest) = s.strip_prefix('.') {
                let (f, sc, rest, consumed) = leading_fraction(rest);
                (frac, scale, has_frac) = (f, sc, consumed);
                s = rest;
            }
            if !has_whole && !has_frac {
                return Err(invalid());
            }

            let unit_len = s
                .find(|c: char| c == '.' || c.is_ascii_digit())
                .unwrap_or(s.len());
            if unit_len == 0 {
                return Err(DurationError::MissingUnit(input.to_string()));
            }
            let (unit, rest) = s.split_at(unit_len);
            s = rest;
            let unit_nanos = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
                unit: unit.to_string(),
                input: input.to_string(),
            })?;

            if whole > MAX_MAGNITUDE / unit_nanos {
                return Err(overflow());
            }
            let mut value = whole * unit_nanos;
            if frac > 0 {
                value += (frac as f64 * (unit_nanos as f64 / scale)) as u64;
                if value > MAX_MAGNITUDE {
                    return Err(overflow());
                }
            }
            total = total
                .checked_add(value)
                .filter(|t| *t <= MAX_MAGNITUDE)
                .ok_or_else(overflow)?;
        }

        if negative {
            // `total == 2^63` wraps onto `i64::MIN`, which is exactly right.
            return Ok(Self((total as i64).wrapping_neg()));
        }
        if total > i64::MAX as u64 {
            return Err(overflow());
        }
        Ok(Self(total as i64))
    }
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "\u{00b5}s" | "\u{03bc}s" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(NANOS_PER_MIN),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

/// Consumes `[0-9]*`. `None` when the number exceeds `2^63`.
fn leading_int(s: &str) -> Option<(u64, &str, bool)> {
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    let mut x: u64 = 0;
    for c in s.bytes().take(len) {
        if x > MAX_MAGNITUDE / 10 {
            return None;
        }
        x = x * 10 + u64::from(c - b'0');
        if x > MAX_MAGNITUDE {
            return None;
        }
    }
    Some((x, &s[len..], len > 0))
}

/// Consumes `[0-9]*` after a decimal point. Digits past what fits in
/// `x` are dropped rather than rejected; `x / scale` is the fraction.
fn leading_fraction(s: &str) -> (u64, f64, &str, bool) {
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    let mut x: u64 = 0;
    let mut scale = 1.0;
    let mut overflow = false;
    for c in s.bytes().take(len) {
        if overflow {
            continue;
        }
        if x > (MAX_MAGNITUDE - 1) / 10 {
            overflow = true;
            continue;
        }
        let y = x * 10 + u64::from(c - b'0');
        if y > MAX_MAGNITUDE {
            overflow = true;
            continue;
        }
        x = y;
        scale *= 10.0;
    }
    (x, scale, &s[len..], len > 0)
}

impl FromStr for Duration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("0s");
        }

        let sign = if self.0 < 0 { "-" } else { "" };
        let nanos = self.0.unsigned_abs();

        if nanos < NANOS_PER_SEC {
            if nanos < NANOS_PER_MICRO {
                return write!(f, "{sign}{nanos}ns");
            }
            let (unit, scale, digits) = if nanos < NANOS_PER_MILLI {
                ("\u{00b5}s", NANOS_PER_MICRO, 3)
            } else {
                ("ms", NANOS_PER_MILLI, 6)
            };
            write!(f, "{sign}{}", nanos / scale)?;
            write_fraction(f, nanos % scale, digits)?;
            return f.write_str(unit);
        }

        let secs = nanos / NANOS_PER_SEC;
        let (hours, mins, secs) = (secs / 3600, (secs / 60) % 60, secs % 60);
        f.write_str(sign)?;
        if hours > 0 {
            write!(f, "{hours}h")?;
        }
        if hours > 0 || mins > 0 {
            write!(f, "{mins}m")?;
        }
        write!(f, "{secs}")?;
        write_fraction(f, nanos % NANOS_PER_SEC, 9)?;
        f.write_str("s")
    }
}

fn write_fraction(f: &mut fmt::Formatter<'_>, value: u64, digits: usize) -> fmt::Result {
    if value == 0 {
        return Ok(());
    }
    let padded = format!("{value:0digits$}");
    write!(f, ".{}", padded.trim_end_matches('0'))
}
