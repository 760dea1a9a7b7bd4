use crossterm::style::Stylize;
use headphones_import::{Confirmer, ImportError, Reporter, Result, Severity};
use std::io::{self, BufRead, Write};

/// Prints report lines to stdout, colored by severity.
pub struct TerminalReporter {
    color: bool,
}

impl TerminalReporter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, severity: Severity, message: &str) {
        if !self.color {
            println!("{message}");
            return;
        }

        match severity {
            Severity::Info => println!("{message}"),
            Severity::Success => println!("{}", message.green().bold()),
            Severity::Warning => println!("{}", message.yellow().bold()),
            Severity::Error => println!("{}", message.red().bold()),
        }
    }
}

/// Asks questions on stdin. When not interactive, every question is answered
/// with yes and values cannot be prompted for.
pub struct TerminalConfirmer {
    interactive: bool,
}

impl TerminalConfirmer {
    pub fn new(interactive: bool) -> Self {
        Self { interactive }
    }

    /// Print `prompt` and read one line. `None` on end of input.
    fn ask(&self, prompt: &str) -> io::Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        if !self.interactive {
            return true;
        }

        loop {
            match self.ask(prompt) {
                Ok(Some(answer)) => match answer.to_lowercase().chars().next() {
                    Some('y') => return true,
                    Some('n') => return false,
                    _ => continue,
                },
                Ok(None) => return false,
                Err(e) => {
                    log::warn!("Could not read answer: {e}");
                    return false;
                }
            }
        }
    }

    fn prompt_value(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        if !self.interactive {
            return Err(ImportError::MissingValue(prompt.trim().to_string()));
        }

        loop {
            match self.ask(prompt)? {
                Some(answer) if !answer.is_empty() => return Ok(answer),
                Some(_) => {
                    if let Some(default) = default {
                        return Ok(default.to_string());
                    }
                }
                None => return Err(ImportError::MissingValue(prompt.trim().to_string())),
            }
        }
    }
}
