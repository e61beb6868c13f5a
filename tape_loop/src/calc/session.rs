use crate::calc::{derive, formula};
use crate::error::CalcError;
use crate::model::{Field, LoopDerived, LoopInputs, Snapshot};

/// A user edit of one editable field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edit {
    Bars(f64),
    Beats(f64),
    BeatsPerMinute(f64),
    /// Inverse edit: rewrites the tempo.
    SecondsPerBeat(f64),
    TapeSpeed(f64),
}

impl Edit {
    pub fn new(field: Field, value: f64) -> Result<Self, CalcError> {
        match field {
            Field::Bars => Ok(Edit::Bars(value)),
            Field::Beats => Ok(Edit::Beats(value)),
            Field::BeatsPerMinute => Ok(Edit::BeatsPerMinute(value)),
            Field::SecondsPerBeat => Ok(Edit::SecondsPerBeat(value)),
            Field::TapeSpeed => Ok(Edit::TapeSpeed(value)),
            Field::TotalBeats | Field::TotalSeconds | Field::TapeLength => {
                Err(CalcError::ReadOnlyField(field))
            }
        }
    }

    pub fn field(&self) -> Field {
        match self {
            Edit::Bars(_) => Field::Bars,
            Edit::Beats(_) => Field::Beats,
            Edit::BeatsPerMinute(_) => Field::BeatsPerMinute,
            Edit::SecondsPerBeat(_) => Field::SecondsPerBeat,
            Edit::TapeSpeed(_) => Field::TapeSpeed,
        }
    }
}

/// The state of one calculator session.
///
/// `derived` is only ever written by [`derive`], right after the inputs
/// change, so it can never go stale.
#[derive(Debug, Clone)]
pub struct Session {
    inputs: LoopInputs,
    derived: LoopDerived,
    show_intermediate: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_inputs(LoopInputs::default())
    }

    pub fn with_inputs(inputs: LoopInputs) -> Self {
        Self {
            inputs,
            derived: derive(&inputs),
            show_intermediate: false,
        }
    }

    pub fn inputs(&self) -> &LoopInputs {
        &self.inputs
    }

    pub fn derived(&self) -> &LoopDerived {
        &self.derived
    }

    /// Applies the edit and recomputes all dependents before returning.
    pub fn apply(&mut self, edit: Edit) {
        log::debug!("Applying {:?}", edit);
        match edit {
            Edit::Bars(value) => self.inputs.bars = value,
            Edit::Beats(value) => self.inputs.beats = value,
            Edit::BeatsPerMinute(value) => self.inputs.beats_per_minute = value,
            Edit::SecondsPerBeat(value) => {
                self.inputs.beats_per_minute =
                    formula::beats_per_minute_from_seconds_per_beat(value);
            }
            Edit::TapeSpeed(value) => self.inputs.tape_speed = value,
        }
        self.recompute();
    }

    pub fn set(&mut self, field: Field, value: f64) -> Result<(), CalcError> {
        let edit = Edit::new(field, value)?;
        self.apply(edit);
        Ok(())
    }

    fn recompute(&mut self) {
        self.derived = derive(&self.inputs);
        log::trace!("{:?} -> {:?}", self.inputs, self.derived);
        if !self.derived.is_finite() {
            log::warn!("Loop is not finite: {:?}", self.derived);
        }
    }

    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::Bars => self.inputs.bars,
            Field::Beats => self.inputs.beats,
            Field::TotalBeats => self.derived.total_beats,
            Field::BeatsPerMinute => self.inputs.beats_per_minute,
            Field::SecondsPerBeat => self.derived.seconds_per_beat,
            Field::TotalSeconds => self.derived.total_seconds,
            Field::TapeSpeed => self.inputs.tape_speed,
            Field::TapeLength => self.derived.tape_length,
        }
    }

    pub fn show_intermediate(&self) -> bool {
        self.show_intermediate
    }

    pub fn set_show_intermediate(&mut self, show: bool) {
        self.show_intermediate = show;
    }

    /// Returns the new visibility.
    pub fn toggle_intermediate(&mut self) -> bool {
        self.show_intermediate = !self.show_intermediate;
        self.show_intermediate
    }

    /// Fields currently on screen, in display order.
    pub fn visible_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.show_intermediate || !field.is_intermediate())
            .collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            inputs: self.inputs,
            derived: self.derived,
            show_intermediate: self.show_intermediate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_derived_and_hidden() {
        let session = Session::new();
        assert_eq!(session.value(Field::TapeLength), 30.0);
        assert!(!session.show_intermediate());
        assert_eq!(
            session.visible_fields(),
            vec![
                Field::Bars,
                Field::Beats,
                Field::BeatsPerMinute,
                Field::TapeSpeed,
                Field::TapeLength
            ]
        );
    }

    #[test]
    fn editing_seconds_per_beat_rewrites_tempo() {
        let mut session = Session::new();
        assert_eq!(session.value(Field::SecondsPerBeat), 0.5);
        session.apply(Edit::SecondsPerBeat(1.0));
        assert_eq!(session.inputs().beats_per_minute, 60.0);
        assert_eq!(session.value(Field::TotalBeats), 8.0);
        assert!((session.value(Field::TotalSeconds) - 8.0).abs() < 1e-12);
        assert!((session.value(Field::TapeLength) - 60.0).abs() < 1e-12);
    }

    #[test]
    fn zero_seconds_per_beat_gives_infinite_tempo() {
        let mut session = Session::new();
        session.apply(Edit::SecondsPerBeat(0.0));
        assert_eq!(session.inputs().beats_per_minute, f64::INFINITY);
        assert_eq!(session.value(Field::SecondsPerBeat), 0.0);
        assert_eq!(session.value(Field::TapeLength), 0.0);
    }

    #[test]
    fn every_edit_recomputes() {
        let mut session = Session::new();
        session.apply(Edit::Bars(1.0));
        session.apply(Edit::BeatsPerMinute(60.0));
        session.apply(Edit::TapeSpeed(15.0));
        assert_eq!(*session.derived(), derive(session.inputs()));
        assert!((session.value(Field::TapeLength) - 60.0).abs() < 1e-12);

        session.apply(Edit::Beats(3.0));
        assert!((session.value(Field::TapeLength) - 45.0).abs() < 1e-12);
    }

    #[test]
    fn read_only_fields_reject_edits() {
        let mut session = Session::new();
        for field in [Field::TotalBeats, Field::TotalSeconds, Field::TapeLength] {
            let err = session.set(field, 1.0).unwrap_err();
            assert!(matches!(err, CalcError::ReadOnlyField(f) if f == field));
        }
        assert_eq!(session.snapshot(), Session::new().snapshot());
    }

    #[test]
    fn toggle_changes_visibility_only() {
        let mut session = Session::new();
        let before = session.snapshot();
        assert!(session.toggle_intermediate());
        assert_eq!(session.visible_fields(), Field::ALL.to_vec());
        assert_eq!(session.snapshot().inputs, before.inputs);
        assert_eq!(session.snapshot().derived, before.derived);
        assert!(!session.toggle_intermediate());
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn edit_maps_back_to_its_field() {
        for field in Field::ALL.into_iter().filter(|f| f.is_editable()) {
            assert_eq!(Edit::new(field, 1.0).unwrap().field(), field);
        }
    }
}
