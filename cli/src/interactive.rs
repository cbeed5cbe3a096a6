use crate::formatter::Formatter;
use anyhow::{Context, Result};
use inquire::{InquireError, Text};
use labbook::{Engine, LineStatus};
use std::path::PathBuf;

const HELP: &str = ":show prints the notebook, :undo drops the last line, :save <path> writes it, :quit exits";

#[derive(Debug, PartialEq)]
pub enum ReplCommand {
    Line(String),
    Show,
    Undo,
    Save(PathBuf),
    Quit,
    Unknown(String),
}

pub fn parse_command(input: &str) -> ReplCommand {
    let trimmed = input.trim();
    let Some(command) = trimmed.strip_prefix(':') else {
        return ReplCommand::Line(input.to_string());
    };

    let (name, argument) = command
        .split_once(char::is_whitespace)
        .map(|(n, a)| (n, a.trim()))
        .unwrap_or((command, ""));

    match (name, argument) {
        ("show", _) => ReplCommand::Show,
        ("undo", _) => ReplCommand::Undo,
        ("quit" | "q" | "exit", _) => ReplCommand::Quit,
        ("save", path) if !path.is_empty() => ReplCommand::Save(PathBuf::from(path)),
        _ => ReplCommand::Unknown(trimmed.to_string()),
    }
}

/// Append a line to the notebook text, one statement per line
pub fn append_line(document: &mut String, line: &str) {
    if !document.is_empty() && !document.ends_with('\n') {
        document.push('\n');
    }
    document.push_str(line);
    document.push('\n');
}

/// Remove the last line, returning it
pub fn remove_last_line(document: &mut String) -> Option<String> {
    let body = document.strip_suffix('\n').unwrap_or(document.as_str());
    if body.is_empty() {
        return None;
    }

    let start = body.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let removed = body[start..].to_string();
    document.truncate(start);
    Some(removed)
}

/// Read lines from the terminal, re-evaluating the whole notebook after each one
pub fn run_repl(engine: &Engine, mut document: String) -> Result<()> {
    let formatter = Formatter::new();

    if !document.is_empty() {
        print!("{}", formatter.format_symbols(&engine.evaluate(&document), false));
    }

    loop {
        let input = match Text::new(">").with_help_message(HELP).prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read input"),
        };

        match parse_command(&input) {
            ReplCommand::Quit => break,
            ReplCommand::Show => {
                print!("{}", document);
                continue;
            }
            ReplCommand::Save(path) => {
                let path = crate::with_document_extension(path);
                std::fs::write(&path, &document)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("Saved {}", path.display());
                continue;
            }
            ReplCommand::Unknown(command) => {
                eprintln!("Unknown command '{}' ({})", command, HELP);
                continue;
            }
            ReplCommand::Undo => {
                if remove_last_line(&mut document).is_none() {
                    eprintln!("Nothing to undo");
                    continue;
                }
            }
            ReplCommand::Line(line) => append_line(&mut document, &line),
        }

        let evaluation = engine.evaluate_lines(&document);
        if let Some(last) = evaluation.lines.last() {
            if let LineStatus::Dropped { error, .. } = &last.status {
                eprintln!("line {} not bound: {}", last.span.line, error);
            }
        }
        print!("{}", formatter.format_symbols(&evaluation.symbols, false));
    }

    Ok(())
}
