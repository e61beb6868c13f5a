use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_BARS: f64 = 2.0;
pub const DEFAULT_BEATS: f64 = 4.0;
pub const DEFAULT_BEATS_PER_MINUTE: f64 = 120.0;
/// Inches per second.
pub const DEFAULT_TAPE_SPEED: f64 = 7.5;

/// Display hint only, never enforced.
pub const ADVISORY_MIN: f64 = 0.0;
pub const ADVISORY_MAX: f64 = 999.0;

/// The four values the user sets directly.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LoopInputs {
    pub bars: f64,
    pub beats: f64,
    pub beats_per_minute: f64,
    pub tape_speed: f64,
}

impl Default for LoopInputs {
    fn default() -> Self {
        Self {
            bars: DEFAULT_BARS,
            beats: DEFAULT_BEATS,
            beats_per_minute: DEFAULT_BEATS_PER_MINUTE,
            tape_speed: DEFAULT_TAPE_SPEED,
        }
    }
}

/// Everything computed from [`LoopInputs`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LoopDerived {
    pub total_beats: f64,
    pub seconds_per_beat: f64,
    pub total_seconds: f64,
    /// Inches.
    pub tape_length: f64,
}

impl LoopDerived {
    pub fn is_finite(&self) -> bool {
        self.total_beats.is_finite()
            && self.seconds_per_beat.is_finite()
            && self.total_seconds.is_finite()
            && self.tape_length.is_finite()
    }
}

/// Full state of a session as printed by `--format json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub inputs: LoopInputs,
    pub derived: LoopDerived,
    pub show_intermediate: bool,
}

/// One widget of the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Bars,
    Beats,
    TotalBeats,
    BeatsPerMinute,
    SecondsPerBeat,
    TotalSeconds,
    TapeSpeed,
    TapeLength,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Bars,
        Field::Beats,
        Field::TotalBeats,
        Field::BeatsPerMinute,
        Field::SecondsPerBeat,
        Field::TotalSeconds,
        Field::TapeSpeed,
        Field::TapeLength,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Bars => "Bars",
            Field::Beats => "Beats",
            Field::TotalBeats => "Total Beats",
            Field::BeatsPerMinute | Field::SecondsPerBeat => "Tempo",
            Field::TotalSeconds => "Total Seconds",
            Field::TapeSpeed => "Tape Speed",
            Field::TapeLength => "Tape Length",
        }
    }

    pub fn unit_label(self) -> Option<&'static str> {
        match self {
            Field::BeatsPerMinute => Some("beats per minute"),
            Field::SecondsPerBeat => Some("seconds per beat"),
            Field::TapeSpeed => Some("inches per second"),
            Field::TapeLength => Some("inches"),
            _ => None,
        }
    }

    /// Increment used by the entry widget.
    pub fn step(self) -> f64 {
        match self {
            Field::SecondsPerBeat | Field::TapeSpeed | Field::TapeLength => 0.1,
            _ => 1.0,
        }
    }

    pub fn is_editable(self) -> bool {
        matches!(
            self,
            Field::Bars
                | Field::Beats
                | Field::BeatsPerMinute
                | Field::SecondsPerBeat
                | Field::TapeSpeed
        )
    }

    /// Hidden unless intermediate calculations are shown.
    pub fn is_intermediate(self) -> bool {
        matches!(
            self,
            Field::TotalBeats | Field::SecondsPerBeat | Field::TotalSeconds
        )
    }

    pub fn in_advisory_range(value: f64) -> bool {
        (ADVISORY_MIN..=ADVISORY_MAX).contains(&value)
    }

    /// Short name typed in the terminal form.
    pub fn command_name(self) -> &'static str {
        match self {
            Field::Bars => "bars",
            Field::Beats => "beats",
            Field::TotalBeats => "total-beats",
            Field::BeatsPerMinute => "bpm",
            Field::SecondsPerBeat => "spb",
            Field::TotalSeconds => "total-seconds",
            Field::TapeSpeed => "speed",
            Field::TapeLength => "length",
        }
    }

    pub fn from_command_name(name: &str) -> Option<Field> {
        let name = name.trim().to_lowercase();
        Field::ALL
            .into_iter()
            .find(|field| field.command_name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit_label() {
            Some(unit) => write!(f, "{} ({})", self.label(), unit),
            None => f.write_str(self.label()),
        }
    }
}
