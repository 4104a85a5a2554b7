use std::time::Duration;

/// Format a second count as zero-padded `HH:MM:SS`.
///
/// The hours field widens past two digits instead of wrapping.
pub fn format_hms(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Format a duration as `HH:MM:SS`, dropping sub-second precision.
pub fn format_duration(duration: Duration) -> String {
    format_hms(duration.as_secs())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn zero_is_all_zeros() {
        assert_eq!(format_hms(0), "00:00:00");
    }

    #[test]
    fn carries_across_fields() {
        assert_eq!(format_hms(59), "00:00:59");
        assert_eq!(format_hms(60), "00:01:00");
        assert_eq!(format_hms(3661), "01:01:01");
    }

    #[test]
    fn hours_widen_without_cap() {
        assert_eq!(format_hms(100 * 3600), "100:00:00");
    }

    #[test]
    fn duration_drops_subseconds() {
        assert_eq!(format_duration(Duration::from_millis(59_900)), "00:00:59");
    }

    proptest! {
        #[test]
        fn fields_stay_in_range(total in 0u64..1_000_000) {
            let formatted = format_hms(total);
            let parts: Vec<u64> = formatted
                .split(':')
                .map(|p| p.parse().expect("numeric field"))
                .collect();
            prop_assert_eq!(parts.len(), 3);
            prop_assert!(parts[1] < 60);
            prop_assert!(parts[2] < 60);
            prop_assert_eq!(parts[0] * 3600 + parts[1] * 60 + parts[2], total);
        }
    }
}
