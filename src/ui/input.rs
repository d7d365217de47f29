//! Line-based terminal input: the theme-name prompt and y/N confirmations.

use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};
use std::path::Path;

use super::settings;
use crate::install::ElevationPrompt;
use crate::theme::ThemeName;

/// Prompt until the user enters a valid theme name.
///
/// Invalid entries are explained and the prompt is repeated. End of input is
/// an `UnexpectedEof` error.
pub fn read_theme_name<R, W>(input: &mut R, output: &mut W, color: bool) -> io::Result<ThemeName>
where
    R: BufRead,
    W: Write,
{
    loop {
        write_prompt(output, settings::PROMPT_THEME_NAME, color)?;
        let Some(line) = read_line(input)? else {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no theme name entered",
            ));
        };
        match ThemeName::parse(&line) {
            Ok(name) => return Ok(name),
            Err(_) => writeln!(
                output,
                "Invalid theme name. Please enter a single word containing only letters, numbers, hyphens, or underscores."
            )?,
        }
    }
}

/// Ask a y/N question; anything but `y`/`yes` (or end of input) is no.
pub fn confirm<R, W>(input: &mut R, output: &mut W, question: &str, color: bool) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    let prompt = format!("{question}{}", settings::PROMPT_CONFIRM_SUFFIX);
    write_prompt(output, &prompt, color)?;
    let answer = read_line(input)?.unwrap_or_default();
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn write_prompt<W: Write>(output: &mut W, prompt: &str, color: bool) -> io::Result<()> {
    if color {
        write!(output, "{}", prompt.with(settings::COLOR_PROMPT))?;
    } else {
        write!(output, "{prompt}")?;
    }
    output.flush()
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Asks on the controlling terminal before retrying an install with sudo.
#[derive(Debug, Clone, Copy)]
pub struct TerminalElevationPrompt {
    color: bool,
}

impl TerminalElevationPrompt {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl ElevationPrompt for TerminalElevationPrompt {
    fn confirm_elevation(&self, target: &Path) -> bool {
        let dir = target.parent().unwrap_or(target);
        let question = format!(
            "It looks like we don't have permission to write to {}. Attempt to save using sudo?",
            dir.display()
        );
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        match confirm(&mut stdin.lock(), &mut stdout, &question, self.color) {
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!(error = %err, "could not read elevation answer");
                false
            }
        }
    }
}
