//! Keyboard input for the terminal surface

use anyhow::{Context, Result};
use tokio::{
    io::{AsyncBufRead, AsyncWrite, AsyncWriteExt},
    sync::{mpsc, watch},
};
use tracing::{debug, info};

use crate::{
    state::{Phase, TimerSnapshot},
    tasks::Command,
    utils::next_line,
};

pub const HELP: &str = "Commands: [enter]/t toggle, s skip, r reset, 1-3 or `tab <phase>` switch tab, q quit";

/// Turn an input line into a command. Buttons act on the focused tab unless a phase is named.
pub fn parse_command(line: &str, focused: Phase) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(Command::Toggle(focused));
    };
    let target = words.next().map(str::parse::<Phase>).transpose()?;
    if let Some(extra) = words.next() {
        return Err(format!("Unexpected input: {}", extra));
    }
    let phase = target.unwrap_or(focused);

    match first.to_lowercase().as_str() {
        "t" | "toggle" | "start" | "stop" | "pause" => Ok(Command::Toggle(phase)),
        "s" | "skip" => Ok(Command::Skip(phase)),
        "r" | "reset" => Ok(Command::Reset(phase)),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "tab" => target
            .map(Command::Focus)
            .ok_or_else(|| "tab needs a phase: pomodoro, short or long".to_string()),
        tab @ ("1" | "2" | "3") if target.is_none() => tab.parse().map(Command::Focus),
        other => Err(format!("Unknown command: {}", other)),
    }
}

/// Forward input lines to the countdown task until input closes or the user quits
pub async fn input_task<R, W>(
    mut input: R,
    mut output: W,
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<TimerSnapshot>,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(format!("{}\n", HELP).as_bytes()).await?;
    output.flush().await?;

    let mut buf = Vec::new();
    loop {
        let Some(line) = next_line(&mut input, &mut buf)
            .await
            .context("Failed to read timer input")?
        else {
            info!("Input closed, stopping timer");
            let _ = commands.send(Command::Quit).await;
            return Ok(());
        };

        let focused = snapshots.borrow().focused;
        match parse_command(&line, focused) {
            Ok(command) => {
                debug!("Input command: {:?}", command);
                if commands.send(command).await.is_err() || command == Command::Quit {
                    return Ok(());
                }
            }
            Err(e) => {
                output
                    .write_all(format!("\n{}\n{}\n", e, HELP).as_bytes())
                    .await?;
                output.flush().await?;
            }
        }
    }
}
