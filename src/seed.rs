//! Clock-string seed derivation.
//!
//! A generator can be seeded from a wall-clock time-of-day string formatted
//! `HH:MM:SS`, parsed at the fixed character offsets 0,1,3,4,6,7 as
//! `hours * 3600 + minutes * 60 + seconds`. This mirrors build-timestamp
//! seeding: it yields only 86,400 distinct seeds per day and is unsuitable
//! wherever seed secrecy or high entropy matters.

use crate::error::{Error, Result};
use crate::tracing_compat::debug;

/// Derives a seed from a `HH:MM:SS` clock string.
///
/// Only the first eight bytes are inspected; trailing characters are
/// ignored. The string shape is validated (digits at the six digit offsets,
/// `:` separators), but field values are not range-checked: `"99:00:00"`
/// maps deterministically to `99 * 3600`.
pub fn seed_from_clock(clock: &str) -> Result<u32> {
    let bytes = clock.as_bytes();
    if bytes.len() < 8 || bytes[2] != b':' || bytes[5] != b':' {
        return Err(Error::MalformedClock {
            input: clock.to_string(),
        });
    }

    let hours = digit_at(bytes, 0, clock)? * 10 + digit_at(bytes, 1, clock)?;
    let minutes = digit_at(bytes, 3, clock)? * 10 + digit_at(bytes, 4, clock)?;
    let seconds = digit_at(bytes, 6, clock)? * 10 + digit_at(bytes, 7, clock)?;

    let seed = hours * 3600 + minutes * 60 + seconds;
    debug!(seed, "derived seed from clock string");
    Ok(seed)
}

fn digit_at(bytes: &[u8], index: usize, input: &str) -> Result<u32> {
    let byte = bytes[index];
    if byte.is_ascii_digit() {
        Ok(u32::from(byte - b'0'))
    } else {
        Err(Error::MalformedClock {
            input: input.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Well-Formed Input
    // =========================================================================

    #[test]
    fn parses_midday_clock() {
        assert_eq!(seed_from_clock("12:34:56").unwrap(), 45_296);
    }

    #[test]
    fn parses_midnight_to_zero() {
        assert_eq!(seed_from_clock("00:00:00").unwrap(), 0);
    }

    #[test]
    fn parses_last_second_of_day() {
        assert_eq!(seed_from_clock("23:59:59").unwrap(), 86_399);
    }

    #[test]
    fn trailing_characters_are_ignored() {
        assert_eq!(seed_from_clock("12:34:56 +0200").unwrap(), 45_296);
    }

    #[test]
    fn field_values_are_not_range_checked() {
        // Shape-valid but semantically out of range still maps through the
        // same arithmetic, exactly like the fixed-offset scheme it mirrors.
        assert_eq!(seed_from_clock("99:00:00").unwrap(), 99 * 3600);
    }

    // =========================================================================
    // Malformed Input
    // =========================================================================

    #[test]
    fn rejects_short_string() {
        let err = seed_from_clock("12:34:5").unwrap_err();
        assert!(matches!(err, Error::MalformedClock { .. }));
    }

    #[test]
    fn rejects_empty_string() {
        assert!(seed_from_clock("").is_err());
    }

    #[test]
    fn rejects_wrong_separator() {
        assert!(seed_from_clock("12-34-56").is_err());
    }

    #[test]
    fn rejects_non_digit_fields() {
        assert!(seed_from_clock("ab:cd:ef").is_err());
        assert!(seed_from_clock("1a:00:00").is_err());
    }

    #[test]
    fn rejects_unpadded_hours() {
        // Unpadded fields shift the separators off their fixed offsets.
        assert!(seed_from_clock("1:23:456").is_err());
    }
}
