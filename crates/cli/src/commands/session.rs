//! Interactive session
//!
//! Each input line is a command. Input changes recompute the model and
//! re-render the assessment, the way dragging a slider re-renders the card.

use anyhow::{Context, Result};
use auditrisk_model::SessionCommand;
use std::io::{BufRead, IsTerminal, Write};

use crate::settings::Settings;

/// Run a session on stdin/stdout
pub fn run_stdio(settings: &Settings) -> Result<()> {
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    let stdout = std::io::stdout();
    run(settings, stdin.lock(), &mut stdout.lock(), interactive)
}

/// Drive a session from any line source
pub fn run<R: BufRead, W: Write>(
    settings: &Settings,
    mut input: R,
    out: &mut W,
    interactive: bool,
) -> Result<()> {
    let mut model = settings.model();
    let exporter = settings.exporter();

    writeln!(out, "{}", exporter.export(&model.assess()).trim_end())?;
    if interactive {
        writeln!(out, "\nType 'help' for commands.")?;
    }

    let mut buf = String::new();
    loop {
        if interactive {
            write!(out, "> ")?;
            out.flush()?;
        }

        buf.clear();
        let read = input
            .read_line(&mut buf)
            .context("Failed to read session input")?;
        if read == 0 {
            break;
        }
        let line = buf.trim_end_matches(['\r', '\n']);

        match line.parse::<SessionCommand>() {
            Ok(SessionCommand::Set(change)) => {
                tracing::debug!(?change, "Input changed");
                model.apply(change);
                writeln!(out, "{}", exporter.export(&model.assess()).trim_end())?;
            }
            Ok(SessionCommand::Show) => {
                writeln!(out, "{}", exporter.export(&model.assess()).trim_end())?;
            }
            Ok(SessionCommand::Help) => {
                writeln!(out, "{}", SessionCommand::USAGE)?;
            }
            Ok(SessionCommand::Quit) => break,
            Err(e) => {
                tracing::debug!(input = %line, error = %e, "Rejected session command");
                writeln!(out, "❌ {}", e)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use auditrisk_config::{AuditRiskConfig, OutputFormat};

    fn session(script: &str) -> String {
        let settings = Settings::from_config(AuditRiskConfig::default())
            .unwrap()
            .no_color(true)
            .format(Some(OutputFormat::Text));
        let mut out = Vec::new();
        run(&settings, script.as_bytes(), &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_initial_render() {
        let out = session("");
        assert!(out.contains("5.0% = 50.0% × 50.0% × 20.0%"));
    }

    #[test]
    fn test_changes_recompute() {
        let out = session("inherent 100\ncontrol 100\naudit 10\n");
        assert!(out.contains("5.0% = 100.0% × 50.0% × 10.0%"));
        assert!(out.contains("5.0% = 100.0% × 100.0% × 5.0%"));
        assert!(out.contains("10.0% = 100.0% × 100.0% × 10.0%"));
    }

    #[test]
    fn test_quit_stops_processing() {
        let out = session("quit\ninherent 100\n");
        assert!(!out.contains("100.0%"));
    }

    #[test]
    fn test_bad_command_keeps_state() {
        let out = session("inherent 0\nslide 3\nshow\n");
        assert!(out.contains("❌ Risk percent out of range [1, 100]: 0"));
        assert!(out.contains("❌ Unknown command: slide"));
        assert_eq!(out.matches("5.0% = 50.0% × 50.0% × 20.0%").count(), 2);
    }

    #[test]
    fn test_prompt_precedes_each_read() {
        let settings = Settings::from_config(AuditRiskConfig::default())
            .unwrap()
            .no_color(true)
            .format(Some(OutputFormat::Text));
        let mut out = Vec::new();
        run(&settings, "show\n".as_bytes(), &mut out, true).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Type 'help' for commands.\n> Audit Risk Model Calculator"));
        // One prompt for "show", one more before end of input
        assert_eq!(out.matches("> ").count(), 2);
        assert!(out.ends_with("> "));
    }

    #[test]
    fn test_crlf_lines() {
        let out = session("inherent 100\r\nquit\r\n");
        assert!(out.contains("5.0% = 100.0% × 50.0% × 10.0%"));
    }

    #[test]
    fn test_help() {
        let out = session("help\n");
        assert!(out.contains("inherent <1-100>"));
    }
}
