//! Line-based settings editor

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use super::{SettingsForm, SettingsOutcome, SettingsStore};
use crate::{state::Phase, utils::next_line};

/// A single line of editor input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    Set(Phase, u32),
    Increment(Phase),
    Decrement(Phase),
    Confirm,
    Cancel,
}

impl EditCommand {
    /// Parse one editor line. A blank line confirms.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(EditCommand::Confirm);
        };

        match first.to_lowercase().as_str() {
            "start" | "ok" | "confirm" => return Ok(EditCommand::Confirm),
            "cancel" | "quit" | "q" | "exit" => return Ok(EditCommand::Cancel),
            _ => {}
        }

        let phase: Phase = first.parse()?;
        let argument = words
            .next()
            .ok_or_else(|| format!("Missing value for {}", phase))?;
        if let Some(extra) = words.next() {
            return Err(format!("Unexpected input: {}", extra));
        }

        match argument {
            "+" => Ok(EditCommand::Increment(phase)),
            "-" => Ok(EditCommand::Decrement(phase)),
            value => value
                .parse()
                .map(|minutes| EditCommand::Set(phase, minutes))
                .map_err(|_| format!("Not a number of minutes: {}", value)),
        }
    }
}

/// Load the stored durations, let the user edit them, and persist them on confirm
pub async fn run_settings_editor<R, W>(
    store: &SettingsStore,
    input: &mut R,
    output: &mut W,
) -> Result<SettingsOutcome>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut form = SettingsForm::new(store.load());
    let mut buf = Vec::new();

    output
        .write_all(b"Set preferred times (e.g. `work 30`, `short +`), `start` to begin, `cancel` to quit\n")
        .await?;

    loop {
        write_form(output, &form).await?;

        let Some(line) = next_line(input, &mut buf)
            .await
            .context("Failed to read settings input")?
        else {
            info!("Settings input closed without confirmation");
            return Ok(SettingsOutcome::Cancelled);
        };

        let command = match EditCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                output.write_all(format!("  {}\n", e).as_bytes()).await?;
                continue;
            }
        };
        debug!("Settings command: {:?}", command);

        match command {
            EditCommand::Set(phase, minutes) => {
                if let Err(e) = form.field_mut(phase).set(minutes) {
                    output
                        .write_all(format!("  {}: {}\n", phase, e).as_bytes())
                        .await?;
                }
            }
            EditCommand::Increment(phase) => form.field_mut(phase).increment(),
            EditCommand::Decrement(phase) => form.field_mut(phase).decrement(),
            EditCommand::Confirm => match form.confirm() {
                Ok(durations) => {
                    store.save(&durations)?;
                    return Ok(SettingsOutcome::Confirmed(durations));
                }
                Err(e) => {
                    output.write_all(format!("  {}\n", e).as_bytes()).await?;
                }
            },
            EditCommand::Cancel => {
                info!("Settings cancelled");
                return Ok(SettingsOutcome::Cancelled);
            }
        }
    }
}

async fn write_form<W: AsyncWrite + Unpin>(output: &mut W, form: &SettingsForm) -> Result<()> {
    let mut text = String::new();
    for phase in Phase::ALL {
        let field = form.field(phase);
        let spec = field.spec();
        text.push_str(&format!(
            "  {:<12} {:>3}  ({}-{}, step {})\n",
            phase.label(),
            field.value(),
            spec.min,
            spec.max,
            spec.step
        ));
    }
    text.push_str("> ");
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
