//! Terminal rendering of timer snapshots

use anyhow::Result;
use tokio::{
    io::{AsyncWrite, AsyncWriteExt},
    sync::watch,
};

use crate::state::{Phase, TimerSnapshot};

const CLEAR_LINE: &str = "\r\x1b[2K";

/// Single status line: tabs with the focused one bracketed, its countdown and the tally
pub fn render_status(snapshot: &TimerSnapshot) -> String {
    let tabs: Vec<String> = Phase::ALL
        .iter()
        .map(|&phase| {
            if phase == snapshot.focused {
                format!("[{}]", phase.label())
            } else {
                format!(" {} ", phase.label())
            }
        })
        .collect();

    let view = snapshot.focused_view();
    let status = if view.running { "running" } else { "paused" };

    format!(
        "{} | {} {} | Pomodoros: {}",
        tabs.join(" "),
        view.display(),
        status,
        snapshot.completed_work
    )
}

/// Event line for the most recent action, if it differs from the previous snapshot's
pub fn render_event(previous: Option<&TimerSnapshot>, snapshot: &TimerSnapshot) -> Option<String> {
    let time = snapshot.last_action_time?;
    let action = snapshot.last_action?;
    if previous.and_then(|p| p.last_action_time) == Some(time) {
        return None;
    }
    Some(format!("{}  {}", time.format("%H:%M:%S"), action.describe()))
}

/// Redraw the status line whenever the countdown task publishes a change
pub async fn render_task<W>(mut snapshots: watch::Receiver<TimerSnapshot>, mut output: W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut previous: Option<TimerSnapshot> = None;

    loop {
        let snapshot = snapshots.borrow_and_update().clone();

        let mut frame = String::from(CLEAR_LINE);
        if let Some(event) = render_event(previous.as_ref(), &snapshot) {
            frame.push_str(&event);
            frame.push('\n');
        }
        frame.push_str(&render_status(&snapshot));
        output.write_all(frame.as_bytes()).await?;
        output.flush().await?;

        previous = Some(snapshot);
        if snapshots.changed().await.is_err() {
            output.write_all(b"\n").await?;
            output.flush().await?;
            return Ok(());
        }
    }
}
