use crate::report::render_estimate;
use mietspiegel::error::AppError;
use mietspiegel::estimate::{
    EstimateField, EstimateInput, EstimateSession, FieldInput, PickerSelection, UnknownField,
};
use mietspiegel::tables::ReferenceTables;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::debug;

const HELP: &str = "\
commands:
  set <field> <value>            edit a field (empty value clears it)
  pick <field> <label>|<value>   picker selection; label defaults to the value
  feature <id> on|off            select or deselect a feature
  reset                          deselect all features
  show                           print the current result
  quit                           end the session
fields: strasse, hausnummer, baujahr, alternativ, groesse
";

/// One line of session input.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SessionCommand {
    Input(EstimateInput),
    Feature { id: String, selected: bool },
    Reset,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum SessionCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),
    #[error("missing argument <{0}>")]
    MissingArgument(&'static str),
    #[error(transparent)]
    UnknownField(UnknownField),
    #[error("expected 'on' or 'off', got '{0}'")]
    InvalidToggle(String),
}

pub(crate) fn parse_command(line: &str) -> Result<SessionCommand, SessionCommandError> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command.to_ascii_lowercase().as_str() {
        "" => Err(SessionCommandError::Empty),
        "set" => {
            let (field, value) = split_field(rest)?;
            Ok(SessionCommand::Input(EstimateInput::Field(FieldInput::new(
                field, value,
            ))))
        }
        "pick" => {
            let (field, value) = split_field(rest)?;
            let (label, value) = match value.split_once('|') {
                Some((label, value)) => (label.trim(), value.trim()),
                None => (value, value),
            };
            Ok(SessionCommand::Input(EstimateInput::Picker(PickerSelection {
                label: label.to_string(),
                value: value.to_string(),
                field,
            })))
        }
        "feature" => {
            let (id, toggle) = rest
                .split_once(char::is_whitespace)
                .ok_or(SessionCommandError::MissingArgument("on|off"))?;
            let selected = match toggle.trim().to_ascii_lowercase().as_str() {
                "on" | "an" | "true" => true,
                "off" | "aus" | "false" => false,
                other => return Err(SessionCommandError::InvalidToggle(other.to_string())),
            };
            Ok(SessionCommand::Feature {
                id: id.to_string(),
                selected,
            })
        }
        "reset" => Ok(SessionCommand::Reset),
        "show" => Ok(SessionCommand::Show),
        "help" => Ok(SessionCommand::Help),
        "quit" | "exit" => Ok(SessionCommand::Quit),
        other => Err(SessionCommandError::UnknownCommand(other.to_string())),
    }
}

fn split_field(rest: &str) -> Result<(EstimateField, &str), SessionCommandError> {
    if rest.is_empty() {
        return Err(SessionCommandError::MissingArgument("field"));
    }
    let (field, value) = match rest.split_once(char::is_whitespace) {
        Some((field, value)) => (field, value.trim()),
        None => (rest, ""),
    };
    let field = field
        .parse::<EstimateField>()
        .map_err(SessionCommandError::UnknownField)?;
    Ok((field, value))
}

pub(crate) fn run_interactive_session(tables: Arc<ReferenceTables>) -> Result<(), AppError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = EstimateSession::new(tables);
    drive_session(session, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Processes one event per line; each is applied completely before the next is read.
pub(crate) fn drive_session<R: BufRead, W: Write>(
    mut session: EstimateSession,
    input: R,
    mut output: W,
) -> io::Result<EstimateSession> {
    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(SessionCommandError::Empty) => continue,
            Err(err) => {
                writeln!(output, "! {err}")?;
                continue;
            }
        };
        debug!(?command, "session event");

        match command {
            SessionCommand::Input(input) => session.apply(input),
            SessionCommand::Feature { id, selected } => session.toggle_feature(&id, selected),
            SessionCommand::Reset => session.reset_features(),
            SessionCommand::Show => {}
            SessionCommand::Help => {
                write!(output, "{HELP}")?;
                continue;
            }
            SessionCommand::Quit => break,
        }

        write!(output, "{}", render_estimate(session.estimate()))?;
        output.flush()?;
    }
    Ok(session)
}
