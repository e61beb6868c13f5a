pub mod calc;
pub mod config;
pub mod error;
pub mod form;
pub mod model;

pub use calc::{derive, Edit, Session};
pub use config::{OutputFormat, SessionConfig};
use error::CalcError;
use model::Field;

/// Starts a session from the given configuration.
pub fn start(config: &SessionConfig) -> Session {
    // 1. Initial values, already derived
    let mut session = Session::with_inputs(config.inputs);
    session.set_show_intermediate(config.show_intermediate);

    // 2. An explicit beat length overrides the tempo
    if let Some(seconds_per_beat) = config.seconds_per_beat {
        session.apply(Edit::SecondsPerBeat(seconds_per_beat));
    }

    log::debug!("Session started: {:?}", session.snapshot());
    session
}

/// Edits one field by its command name, e.g. `("bpm", "90")`.
pub fn edit_by_name(session: &mut Session, name: &str, text: &str) -> Result<(), CalcError> {
    let field =
        Field::from_command_name(name).ok_or_else(|| CalcError::UnknownField(name.to_owned()))?;
    session.set(field, calc::parse_value(text))
}
