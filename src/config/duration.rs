//! Duration strings (`1s`, `500ms`, `1m30s`)
//!
//! Accepts the same unit suffixes operators already type for Go-style tools:
//! `ns`, `us`/`µs`, `ms`, `s`, `m`, `h`, with optional fractions (`1.5s`).

use std::time::Duration;

use crate::error::{MirrorError, MirrorResult};

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Longest accepted duration, `2562047h47m16.854775807s` (`i64::MAX` ns).
///
/// Larger values cannot be added to an `Instant` on every platform.
pub const MAX_DURATION: Duration = Duration::new(9_223_372_036, 854_775_807);

/// Parse a duration string such as `10s`, `250ms` or `1h2m3.5s`.
pub fn parse_duration(input: &str) -> MirrorResult<Duration> {
    let invalid = |reason: &str| MirrorError::InvalidInterval {
        value: input.to_string(),
        reason: reason.to_string(),
    };

    let s = input.trim();
    if s.is_empty() {
        return Err(invalid("empty duration"));
    }
    if s.starts_with('-') {
        return Err(invalid("negative durations are not supported"));
    }
    let s = s.strip_prefix('+').unwrap_or(s);
    if s == "0" {
        return Ok(Duration::ZERO);
    }

    let mut total: u128 = 0;
    let mut rest = s;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if number_len == 0 {
            return Err(invalid("expected a number"));
        }
        let (number, tail) = rest.split_at(number_len);

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        if unit_len == 0 {
            return Err(invalid("missing unit (use ns, us, ms, s, m or h)"));
        }
        let (unit, tail) = tail.split_at(unit_len);

        let scale = unit_scale(unit).ok_or_else(|| invalid("unknown unit"))?;
        let nanos = scaled(number, scale).ok_or_else(|| invalid("malformed number"))?;
        total = total
            .checked_add(nanos)
            .ok_or_else(|| invalid("duration is too large"))?;
        rest = tail;
    }

    if total > MAX_DURATION.as_nanos() {
        return Err(invalid("duration is too large"));
    }
    let secs = u64::try_from(total / NANOS_PER_SEC).map_err(|_| invalid("duration is too large"))?;
    // Remainder is always below one second, so it fits in u32.
    let subsec = (total % NANOS_PER_SEC) as u32;
    Ok(Duration::new(secs, subsec))
}

/// Render a duration in the same syntax `parse_duration` accepts.
pub fn format_duration(duration: Duration) -> String {
    if duration.subsec_nanos() % 1_000_000 != 0 {
        return format!("{}ns", duration.as_nanos());
    }
    if duration.subsec_millis() != 0 {
        return format!("{}ms", duration.as_millis());
    }

    let secs = duration.as_secs();
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{}h", hours));
    }
    if minutes > 0 {
        out.push_str(&format!("{}m", minutes));
    }
    if seconds > 0 || out.is_empty() {
        out.push_str(&format!("{}s", seconds));
    }
    out
}

fn unit_scale(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(60 * NANOS_PER_SEC),
        "h" => Some(3600 * NANOS_PER_SEC),
        _ => None,
    }
}

/// `number * scale` for a decimal literal with at most one `.`.
fn scaled(number: &str, scale: u128) -> Option<u128> {
    let (whole, frac) = match number.split_once('.') {
        Some((w, f)) => (w, f),
        None => (number, ""),
    };
    if frac.contains('.') || (whole.is_empty() && frac.is_empty()) {
        return None;
    }

    let whole_value: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().ok()?
    };
    let mut nanos = whole_value.checked_mul(scale)?;

    // Digits past nanosecond precision cannot change the result.
    let frac = &frac[..frac.len().min(18)];
    if !frac.is_empty() {
        let frac_value: u128 = frac.parse().ok()?;
        let divisor = 10u128.pow(frac.len() as u32);
        nanos = nanos.checked_add(frac_value * scale / divisor)?;
    }
    Some(nanos)
}

/// Serde adapter storing durations as strings in TOML.
pub mod serde_duration {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_duration(*duration))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_duration(&raw).map_err(serde::de::Error::custom)
    }
}
