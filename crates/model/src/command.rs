//! Session commands
//!
//! One line of input maps to one command. Input changes are the terminal
//! counterpart of moving a slider or picking from the audit risk dropdown.

use auditrisk_core::{AuditRiskLevel, FractionError, RiskFraction};
use std::str::FromStr;

use crate::error::ModelError;

/// A change to one of the three model inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChange {
    AuditRisk(AuditRiskLevel),
    InherentRisk(RiskFraction),
    ControlRisk(RiskFraction),
}

/// A parsed session line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Set(InputChange),
    Show,
    Help,
    Quit,
}

impl SessionCommand {
    /// Usage text for the `help` command
    pub const USAGE: &'static str = "\
Commands:
  audit <5|10>        set audit risk (percent)
  inherent <1-100>    set inherent risk (percent)
  control <1-100>     set control risk (percent)
  show                print the current assessment
  help                show this message
  quit                leave the session";
}

impl FromStr for SessionCommand {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let Some(verb) = parts.next() else {
            return Ok(SessionCommand::Show);
        };
        let verb = verb.to_ascii_lowercase();
        let arg = parts.next();
        if let Some(extra) = parts.next() {
            return Err(unexpected(&verb, extra));
        }

        match verb.as_str() {
            "audit" | "ar" => {
                let level: AuditRiskLevel = required(arg, "audit")?.parse()?;
                Ok(SessionCommand::Set(InputChange::AuditRisk(level)))
            }
            "inherent" | "ir" => {
                let fraction = parse_percent(required(arg, "inherent")?)?;
                Ok(SessionCommand::Set(InputChange::InherentRisk(fraction)))
            }
            "control" | "cr" => {
                let fraction = parse_percent(required(arg, "control")?)?;
                Ok(SessionCommand::Set(InputChange::ControlRisk(fraction)))
            }
            "show" => no_argument(&verb, arg).map(|_| SessionCommand::Show),
            "help" | "?" => no_argument(&verb, arg).map(|_| SessionCommand::Help),
            "quit" | "exit" | "q" => no_argument(&verb, arg).map(|_| SessionCommand::Quit),
            other => Err(ModelError::UnknownCommand(other.to_string())),
        }
    }
}

fn required<'a>(arg: Option<&'a str>, name: &str) -> Result<&'a str, ModelError> {
    arg.ok_or_else(|| ModelError::MissingValue(name.to_string()))
}

fn no_argument(verb: &str, arg: Option<&str>) -> Result<(), ModelError> {
    match arg {
        Some(extra) => Err(unexpected(verb, extra)),
        None => Ok(()),
    }
}

fn unexpected(verb: &str, extra: &str) -> ModelError {
    ModelError::UnexpectedArgument {
        command: verb.to_string(),
        argument: extra.to_string(),
    }
}

/// Parse a slider position ("40" or "40%") into a fraction
fn parse_percent(raw: &str) -> Result<RiskFraction, ModelError> {
    let digits = raw.trim().trim_end_matches('%');
    let percent: u32 = digits
        .parse()
        .map_err(|_| ModelError::InvalidPercent(raw.to_string()))?;
    let percent = u8::try_from(percent).map_err(|_| FractionError::PercentOutOfRange(percent))?;
    Ok(RiskFraction::from_percent(percent)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_input_changes() {
        assert_eq!(
            "audit 10".parse::<SessionCommand>().unwrap(),
            SessionCommand::Set(InputChange::AuditRisk(AuditRiskLevel::TenPercent))
        );
        assert_eq!(
            "IR 40%".parse::<SessionCommand>().unwrap(),
            SessionCommand::Set(InputChange::InherentRisk(
                RiskFraction::new(dec!(0.4)).unwrap()
            ))
        );
        assert_eq!(
            "control 100".parse::<SessionCommand>().unwrap(),
            SessionCommand::Set(InputChange::ControlRisk(RiskFraction::MAX))
        );
    }

    #[test]
    fn test_parse_plain_commands() {
        assert_eq!("show".parse::<SessionCommand>().unwrap(), SessionCommand::Show);
        assert_eq!("   ".parse::<SessionCommand>().unwrap(), SessionCommand::Show);
        assert_eq!("?".parse::<SessionCommand>().unwrap(), SessionCommand::Help);
        assert_eq!("exit".parse::<SessionCommand>().unwrap(), SessionCommand::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "inherent".parse::<SessionCommand>(),
            Err(ModelError::MissingValue("inherent".to_string()))
        );
        assert_eq!(
            "control 0".parse::<SessionCommand>(),
            Err(ModelError::Fraction(FractionError::PercentOutOfRange(0)))
        );
        assert!(matches!(
            "control abc".parse::<SessionCommand>(),
            Err(ModelError::InvalidPercent(_))
        ));
        assert!(matches!(
            "audit 7".parse::<SessionCommand>(),
            Err(ModelError::AuditRisk(_))
        ));
        assert!(matches!(
            "slide 40".parse::<SessionCommand>(),
            Err(ModelError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_rejects_trailing_arguments() {
        assert_eq!(
            "inherent 40 junk".parse::<SessionCommand>(),
            Err(ModelError::UnexpectedArgument {
                command: "inherent".to_string(),
                argument: "junk".to_string(),
            })
        );
        assert!(matches!(
            "show everything".parse::<SessionCommand>(),
            Err(ModelError::UnexpectedArgument { .. })
        ));
        assert!(matches!(
            "quit now".parse::<SessionCommand>(),
            Err(ModelError::UnexpectedArgument { .. })
        ));
    }

    #[test]
    fn test_large_percent_is_out_of_range() {
        assert_eq!(
            "inherent 256".parse::<SessionCommand>(),
            Err(ModelError::Fraction(FractionError::PercentOutOfRange(256)))
        );
        assert_eq!(
            "control 101".parse::<SessionCommand>(),
            Err(ModelError::Fraction(FractionError::PercentOutOfRange(101)))
        );
        assert!(matches!(
            "control -5".parse::<SessionCommand>(),
            Err(ModelError::InvalidPercent(_))
        ));
    }
}
