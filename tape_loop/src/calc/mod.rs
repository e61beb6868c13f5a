pub mod formula;
pub mod parse;
pub mod session;

use crate::model::{LoopDerived, LoopInputs};

pub use parse::parse_value;
pub use session::{Edit, Session};

/// Computes every derived quantity from the independent inputs, leaves first.
pub fn derive(inputs: &LoopInputs) -> LoopDerived {
    let total_beats = formula::total_beats(inputs.bars, inputs.beats);
    let seconds_per_beat = formula::seconds_per_beat(inputs.beats_per_minute);
    let total_seconds = formula::total_seconds(total_beats, seconds_per_beat);
    let tape_length = formula::tape_length(total_seconds, inputs.tape_speed);

    LoopDerived {
        total_beats,
        seconds_per_beat,
        total_seconds,
        tape_length,
    }
}
