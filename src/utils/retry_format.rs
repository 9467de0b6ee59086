use crate::utils::constants::MAX_RETRY_AFTER_MS;

const VERY_LONG_TIME: &str = "a very long time";

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Human readable wait time for a rate-limit delay in milliseconds, e.g.
/// `90061000` → `"1 day, 1 hour, 1 minute and 1 second"`.
///
/// Zero units are left out, except that a delay under one second still reads
/// `"0 seconds"`. Missing, negative, non-finite or larger-than-a-year values
/// read `"a very long time"`.
pub fn format_retry_after(retry_after_ms: Option<f64>) -> String {
    let ms = match retry_after_ms {
        Some(ms) if ms.is_finite() && (0.0..=MAX_RETRY_AFTER_MS).contains(&ms) => ms as u64,
        _ => return VERY_LONG_TIME.to_string(),
    };

    let days = ms / MS_PER_DAY;
    let hours = (ms % MS_PER_DAY) / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;

    let mut parts: Vec<String> = [(days, "day"), (hours, "hour"), (minutes, "minute")]
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, unit)| plural(count, unit))
        .collect();
    if seconds > 0 || parts.is_empty() {
        parts.push(plural(seconds, "second"));
    }

    join_with_and(parts)
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// `["a", "b", "c"]` → `"a, b and c"`
fn join_with_and(mut parts: Vec<String>) -> String {
    match parts.len() {
        0 => String::new(),
        1 => parts.remove(0),
        _ => {
            let last = parts.pop().unwrap_or_default();
            format!("{} and {}", parts.join(", "), last)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(ms: f64) -> String {
        format_retry_after(Some(ms))
    }

    #[test]
    fn one_of_each_unit() {
        assert_eq!(fmt(90_061_000.0), "1 day, 1 hour, 1 minute and 1 second");
    }

    #[test]
    fn zero_reads_zero_seconds() {
        assert_eq!(fmt(0.0), "0 seconds");
        assert_eq!(fmt(999.0), "0 seconds");
    }

    #[test]
    fn zero_units_are_omitted() {
        assert_eq!(fmt(3_600_000.0), "1 hour");
        assert_eq!(fmt(2.0 * 86_400_000.0 + 5_000.0), "2 days and 5 seconds");
        assert_eq!(fmt(7_320_000.0), "2 hours and 2 minutes");
    }

    #[test]
    fn plurals_apply_above_one() {
        assert_eq!(fmt(1_000.0), "1 second");
        assert_eq!(fmt(45_000.0), "45 seconds");
        assert_eq!(fmt(120_000.0), "2 minutes");
    }

    #[test]
    fn fractional_milliseconds_are_truncated() {
        assert_eq!(fmt(1_999.9), "1 second");
    }

    #[test]
    fn one_year_is_still_formatted() {
        assert_eq!(fmt(31_536_000_000.0), "365 days");
    }

    #[test]
    fn out_of_range_values_read_a_very_long_time() {
        assert_eq!(fmt(-1.0), "a very long time");
        assert_eq!(fmt(31_536_000_001.0), "a very long time");
        assert_eq!(fmt(f64::NAN), "a very long time");
        assert_eq!(fmt(f64::INFINITY), "a very long time");
        assert_eq!(format_retry_after(None), "a very long time");
    }

    #[test]
    fn every_in_range_value_omits_zero_units() {
        let samples = [0.0, 1.0, 59_999.0, 60_000.0, 3_599_999.0, 86_400_000.0, 90_061_000.0];
        for ms in samples {
            let text = fmt(ms);
            let has_zero_unit = text.split(", ").flat_map(|p| p.split(" and ")).any(|p| p.starts_with("0 "));
            assert!(!has_zero_unit || text == "0 seconds", "{} -> {}", ms, text);
        }
    }
}
