/// Seconds in a minute, the numerator of both tempo conversions.
const SECONDS_PER_MINUTE: f64 = 60.0;

pub fn total_beats(bars: f64, beats: f64) -> f64 {
    bars * beats
}

/// No guard: 0 BPM gives an infinite beat length.
pub fn seconds_per_beat(beats_per_minute: f64) -> f64 {
    SECONDS_PER_MINUTE / beats_per_minute
}

pub fn total_seconds(total_beats: f64, seconds_per_beat: f64) -> f64 {
    total_beats * seconds_per_beat
}

/// Inches of tape passing the head in `total_seconds` at `tape_speed` ips.
pub fn tape_length(total_seconds: f64, tape_speed: f64) -> f64 {
    total_seconds * tape_speed
}

/// Inverse of [`seconds_per_beat`].
pub fn beats_per_minute_from_seconds_per_beat(seconds_per_beat: f64) -> f64 {
    SECONDS_PER_MINUTE / seconds_per_beat
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tempo_conversions() {
        assert!((seconds_per_beat(120.0) - 0.5).abs() < 1e-12);
        assert!((seconds_per_beat(60.0) - 1.0).abs() < 1e-12);
        assert!((beats_per_minute_from_seconds_per_beat(0.5) - 120.0).abs() < 1e-12);
    }

    #[test]
    fn zero_denominators_propagate() {
        assert_eq!(seconds_per_beat(0.0), f64::INFINITY);
        assert_eq!(seconds_per_beat(-0.0), f64::NEG_INFINITY);
        assert_eq!(beats_per_minute_from_seconds_per_beat(0.0), f64::INFINITY);
        // 0 beats over an infinite beat length
        assert!(total_seconds(0.0, f64::INFINITY).is_nan());
    }

    #[test]
    fn length_is_seconds_times_speed() {
        assert!((tape_length(4.0, 7.5) - 30.0).abs() < 1e-12);
        assert!((tape_length(4.0, 15.0) - 60.0).abs() < 1e-12);
    }
}
