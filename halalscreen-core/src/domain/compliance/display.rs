// halalscreen-core/src/domain/compliance/display.rs
//
// Presentation helpers shared by every front-end. Both constants are load-bearing:
// output must stay identical across renderers.

use crate::domain::compliance::standard::Direction;

/// Thresholds below this are treated as "max allowed" style and get stretched.
pub const STRETCH_THRESHOLD: f64 = 50.0;
pub const STRETCH_FACTOR: f64 = 1.5;

/// Maps a finding value to a progress-bar width in `[0, 100]`.
pub fn progress_width(value: f64, threshold: f64) -> f64 {
    let width = if threshold < STRETCH_THRESHOLD {
        value * STRETCH_FACTOR
    } else {
        value
    };
    width.clamp(0.0, 100.0)
}

/// Direction-aware width used for findings: a minimum-required standard always takes
/// the unscaled branch, whatever its threshold.
pub fn directional_progress_width(value: f64, threshold: f64, direction: Direction) -> f64 {
    match direction {
        Direction::MaxAllowed => progress_width(value, threshold),
        Direction::MinRequired => value.clamp(0.0, 100.0),
    }
}

/// Formats a monetary amount with a B/M/K suffix.
///
/// Boundaries are inclusive, so exactly one billion renders as `1.00B`.
/// Below one thousand the number is printed as is; missing values render as `N/A`.
pub fn format_magnitude(n: Option<f64>) -> String {
    let Some(n) = n.filter(|v| !v.is_nan()) else {
        return "N/A".to_string();
    };

    // -0.0 prints as "-0"
    let n = if n == 0.0 { 0.0 } else { n };
    let abs = n.abs();
    if abs >= 1_000_000_000.0 {
        format!("{:.2}B", n / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{:.2}M", n / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.2}K", n / 1_000.0)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_width_stretches_low_thresholds() {
        assert_eq!(progress_width(20.0, 33.0), 30.0);
        assert_eq!(progress_width(2.0, 5.0), 3.0);
    }

    #[test]
    fn test_progress_width_high_thresholds_are_unscaled() {
        assert_eq!(progress_width(40.0, 70.0), 40.0);
        assert_eq!(progress_width(100.0, 95.0), 100.0);
        assert_eq!(progress_width(50.0, 50.0), 50.0);
    }

    #[test]
    fn test_directional_width_for_min_required() {
        assert_eq!(directional_progress_width(40.0, 20.0, Direction::MinRequired), 40.0);
        assert_eq!(directional_progress_width(140.0, 20.0, Direction::MinRequired), 100.0);
        assert_eq!(directional_progress_width(20.0, 33.0, Direction::MaxAllowed), 30.0);
    }

    #[test]
    fn test_progress_width_clamps() {
        assert_eq!(progress_width(80.0, 33.0), 100.0);
        assert_eq!(progress_width(5000.0, 33.0), 100.0);
        assert_eq!(progress_width(250.0, 95.0), 100.0);
        assert_eq!(progress_width(-10.0, 33.0), 0.0);
    }

    #[test]
    fn test_format_magnitude_suffixes() {
        assert_eq!(format_magnitude(Some(1_000_000_000.0)), "1.00B");
        assert_eq!(format_magnitude(Some(2_850_000_000_000.0)), "2850.00B");
        assert_eq!(format_magnitude(Some(58_000_000.0)), "58.00M");
        assert_eq!(format_magnitude(Some(1_000_000.0)), "1.00M");
        assert_eq!(format_magnitude(Some(1_000.0)), "1.00K");
        assert_eq!(format_magnitude(Some(12_500.0)), "12.50K");
    }

    #[test]
    fn test_format_magnitude_plain_and_missing() {
        assert_eq!(format_magnitude(Some(999.0)), "999");
        assert_eq!(format_magnitude(Some(12.5)), "12.5");
        assert_eq!(format_magnitude(Some(0.0)), "0");
        assert_eq!(format_magnitude(None), "N/A");
        assert_eq!(format_magnitude(Some(f64::NAN)), "N/A");
    }

    #[test]
    fn test_format_magnitude_negative_amounts() {
        assert_eq!(format_magnitude(Some(-2_500_000.0)), "-2.50M");
        assert_eq!(format_magnitude(Some(-42.0)), "-42");
        assert_eq!(format_magnitude(Some(-0.0)), "0");
    }
}
