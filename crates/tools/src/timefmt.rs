//! Splitting raw second counts into display components

/// Breakdown of a duration into days, hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TimeSplit {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

/// Split a duration in seconds into days, hours, minutes and seconds.
///
/// Fractional seconds are truncated; negative input counts as zero.
pub fn split_seconds(seconds: f64) -> TimeSplit {
    let total = seconds.max(0.0) as u64;

    TimeSplit {
        days: total / 86_400,
        hours: total % 86_400 / 3_600,
        minutes: total % 3_600 / 60,
        seconds: total % 60,
    }
}
