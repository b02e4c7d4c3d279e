use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use super::{ConfirmationPrompt, ConfirmationPromptOptions, ConfirmationPromptResult, Interaction};

impl ConfirmationPrompt for Interaction {
    fn confirm(&self, options: ConfirmationPromptOptions) -> Result<ConfirmationPromptResult> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        confirm_with(&mut stdin.lock(), &mut stdout, &options)
    }
}

/// Render the prompt and read one line of input.
///
/// The prompt is the message followed by a `[y/N]` hint and a single space,
/// with no trailing newline; the cursor stays on the prompt line while the
/// answer is typed. EOF on the reader behaves like an empty answer.
fn confirm_with<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    options: &ConfirmationPromptOptions,
) -> Result<ConfirmationPromptResult> {
    let hint = match options.default {
        Some(true) => "[Y/n]",
        _ => "[y/N]",
    };

    write!(writer, "{} {} ", options.message, hint).context("writing confirmation prompt")?;
    writer.flush().context("flushing confirmation prompt")?;

    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("reading confirmation")?;

    let answer = line.trim();
    let confirmed = if answer.is_empty() {
        options.default.unwrap_or(false)
    } else {
        is_affirmative(answer)
    };

    Ok(if confirmed {
        ConfirmationPromptResult::Yes
    } else {
        ConfirmationPromptResult::No
    })
}

/// Only `y` and `yes` count, case-insensitively. Everything else is a no.
fn is_affirmative(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "yes")
}
