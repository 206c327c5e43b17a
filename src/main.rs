//! Pomodoro Timer - a terminal timer for the Pomodoro technique
//!
//! This is the main entry point for the pomodoro-timer application.

use tokio::{
    io::BufReader,
    sync::{mpsc, watch},
};
use tracing::info;

use pomodoro_timer::{
    config::Config,
    settings::{run_settings_editor, SettingsOutcome},
    state::AppState,
    tasks::{countdown_task, Delays},
    ui::{input_task, render_task},
    utils::{report_task, shutdown_signal},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout stays free for the timer display
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomodoro_timer={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting pomodoro-timer v{}", env!("CARGO_PKG_VERSION"));
    info!("Settings file: {}", config.settings.display());

    let store = config.settings_store();
    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    // The settings form must finish before any timer exists
    let outcome = tokio::select! {
        result = run_settings_editor(&store, &mut stdin, &mut stdout) => result?,
        _ = shutdown_signal() => {
            // the editor's stdin read cannot be cancelled
            info!("Settings interrupted, exiting");
            std::process::exit(0);
        }
    };

    let durations = match outcome {
        SettingsOutcome::Confirmed(durations) => durations,
        SettingsOutcome::Cancelled => {
            info!("No durations confirmed, exiting");
            return Ok(());
        }
    };

    info!(
        "Timer durations: pomodoro={}min, short={}min, long={}min",
        durations.work(),
        durations.short_break(),
        durations.long_break()
    );

    let state = AppState::launch(durations);
    let (command_tx, command_rx) = mpsc::channel(32);
    let (update_tx, update_rx) = watch::channel(state.snapshot());

    let renderer = tokio::spawn(render_task(update_rx.clone(), tokio::io::stdout()));
    let input = tokio::spawn(input_task(stdin, tokio::io::stdout(), command_tx, update_rx));

    tokio::select! {
        state = countdown_task(state, command_rx, update_tx, Delays::default()) => {
            info!("Timer stopped after {} pomodoros", state.completed_work());
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    report_task("Renderer", renderer.await);

    // A pending stdin read cannot be cancelled and would hold the runtime open
    if !input.is_finished() {
        info!("Timer shutdown complete");
        std::process::exit(0);
    }
    report_task("Input", input.await);

    info!("Timer shutdown complete");
    Ok(())
}
