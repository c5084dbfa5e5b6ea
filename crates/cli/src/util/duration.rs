use super::error::ParseDurationError;
use lister_core::generator::constants::DAY;
use std::time::Duration;

/// Parses `<integer><unit>` durations such as `3d`, `12h`, `90s` or `500ms`.
/// A bare integer is read as seconds.
pub fn parse_duration(input: &str) -> Result<Duration, ParseDurationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseDurationError::Empty);
    }
    if input.contains('.') {
        return Err(ParseDurationError::NoFloats(input.to_owned()));
    }

    let split = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    let (number, unit) = input.split_at(split);
    let number: u64 = number
        .parse()
        .map_err(|_| ParseDurationError::InvalidNumber(input.to_owned()))?;

    let millis_per_unit = match unit.trim().to_lowercase().as_str() {
        "ms" | "msec" | "millisecond" | "milliseconds" => 1,
        "" | "s" | "sec" | "secs" | "second" | "seconds" => 1_000,
        "m" | "min" | "mins" | "minute" | "minutes" => 60 * 1_000,
        "h" | "hr" | "hrs" | "hour" | "hours" => 60 * 60 * 1_000,
        "d" | "day" | "days" => DAY * 1_000,
        _ => return Err(ParseDurationError::InvalidUnits(unit.to_owned())),
    };

    number
        .checked_mul(millis_per_unit)
        .map(Duration::from_millis)
        .ok_or_else(|| ParseDurationError::Overflow(input.to_owned()))
}
