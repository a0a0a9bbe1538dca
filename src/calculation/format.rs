//! Duration formatting for SLA reports.

use chrono::Duration;

/// Formats a duration as zero-padded `HH:MM:SS`.
///
/// The sign is dropped; hours grow past two digits when needed.
///
/// # Example
///
/// ```
/// use sla_checker::calculation::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(Duration::seconds(3725)), "01:02:05");
/// assert_eq!(format_duration(Duration::hours(-2)), "02:00:00");
/// assert_eq!(format_duration(Duration::hours(100)), "100:00:00");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.num_seconds().unsigned_abs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration() {
        assert_eq!(format_duration(Duration::zero()), "00:00:00");
    }

    #[test]
    fn test_pads_each_component() {
        assert_eq!(format_duration(Duration::seconds(9)), "00:00:09");
        assert_eq!(format_duration(Duration::minutes(7)), "00:07:00");
        assert_eq!(format_duration(Duration::hours(3)), "03:00:00");
    }

    #[test]
    fn test_mixed_components() {
        let duration = Duration::hours(68) + Duration::minutes(4) + Duration::seconds(59);
        assert_eq!(format_duration(duration), "68:04:59");
    }

    #[test]
    fn test_negative_duration_has_no_sign() {
        let duration = -(Duration::minutes(90) + Duration::seconds(1));
        assert_eq!(format_duration(duration), "01:30:01");
    }

    #[test]
    fn test_sub_second_precision_is_truncated() {
        assert_eq!(format_duration(Duration::milliseconds(1999)), "00:00:01");
    }
}
