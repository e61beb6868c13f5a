//! Line-oriented terminal rendition of the calculator form.

use std::io::{BufRead, Write};

use crate::calc::{parse_value, Session};
use crate::config::OutputFormat;
use crate::error::CalcError;
use crate::model::Field;

const TOGGLE_LABEL: &str = "Intermediate Calculations";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Set(Field, f64),
    Toggle,
    Show,
    Json,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CalcError> {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = words.collect();

    let command = match keyword.to_lowercase().as_str() {
        "toggle" => Command::Toggle,
        "show" => Command::Show,
        "json" => Command::Json,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => match Field::from_command_name(keyword) {
            Some(field) if !field.is_editable() => {
                return Err(CalcError::ReadOnlyField(field));
            }
            Some(field) => {
                if rest.is_empty() {
                    return Err(CalcError::MissingValue(field));
                }
                Command::Set(field, parse_value(&rest.join(" ")))
            }
            None if rest.is_empty() => {
                return Err(CalcError::UnknownCommand(keyword.to_owned()));
            }
            None => return Err(CalcError::UnknownField(keyword.to_owned())),
        },
    };
    Ok(Some(command))
}

/// Formats a value the way the form shows it, spelling out non-finite ones.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        }
    } else {
        value.to_string()
    }
}

pub fn render<W: Write>(session: &Session, out: &mut W) -> std::io::Result<()> {
    let button = if session.show_intermediate() { "Hide" } else { "Show" };
    writeln!(out, "{TOGGLE_LABEL} [{button}]")?;
    for field in session.visible_fields() {
        let value = session.value(field);
        write!(out, "  {}: {}", field.label(), format_value(value))?;
        if let Some(unit) = field.unit_label() {
            write!(out, " {unit}")?;
        }
        if !field.is_editable() {
            write!(out, " (calculated)")?;
        }
        if !Field::in_advisory_range(value) {
            write!(out, " (outside 0-999)")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn render_json<W: Write>(session: &Session, out: &mut W) -> Result<(), CalcError> {
    let json = serde_json::to_string_pretty(&session.snapshot())?;
    writeln!(out, "{json}")?;
    Ok(())
}

pub fn present<W: Write>(
    session: &Session,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CalcError> {
    match format {
        OutputFormat::Text => render(session, out)?,
        OutputFormat::Json => render_json(session, out)?,
    }
    Ok(())
}

fn write_help<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Commands:")?;
    for field in Field::ALL.into_iter().filter(|f| f.is_editable()) {
        writeln!(
            out,
            "  {} <value>    set {}, step {}",
            field.command_name(),
            field,
            field.step()
        )?;
    }
    writeln!(out, "  toggle         show/hide {TOGGLE_LABEL}")?;
    writeln!(out, "  show           print the form")?;
    writeln!(out, "  json           print all values as JSON")?;
    writeln!(out, "  quit           leave")
}

/// Runs the form until `quit` or end of input. Every edit is fully applied
/// and the form re-rendered before the next line is read.
pub fn run_form<R: BufRead, W: Write>(
    session: &mut Session,
    format: OutputFormat,
    input: R,
    out: &mut W,
) -> Result<(), CalcError> {
    present(session, format, out)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(Command::Set(field, value))) => {
                session.set(field, value)?;
                present(session, format, out)?;
            }
            Ok(Some(Command::Toggle)) => {
                let shown = session.toggle_intermediate();
                log::debug!("{TOGGLE_LABEL} shown: {shown}");
                present(session, format, out)?;
            }
            Ok(Some(Command::Show)) => render(session, out)?,
            Ok(Some(Command::Json)) => render_json(session, out)?,
            Ok(Some(Command::Help)) => write_help(out)?,
            Ok(Some(Command::Quit)) => break,
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => {
                log::info!("Rejected input {:?}: {}", line, err);
                writeln!(out, "{err}")?;
            }
        }
        out.flush()?;
    }
    Ok(())
}
