//! End-to-end countdown behavior with a paused clock

use std::time::Duration;

use pomodoro_timer::{
    state::{AppState, Phase, TimerSnapshot},
    tasks::{countdown_task, Command, Delays},
    Durations,
};
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
    time::sleep,
};

struct Harness {
    commands: mpsc::Sender<Command>,
    updates: watch::Receiver<TimerSnapshot>,
    handle: JoinHandle<AppState>,
}

impl Harness {
    fn launch(work: u32, short_break: u32, long_break: u32) -> Self {
        let durations = Durations::new(work, short_break, long_break).unwrap();
        let state = AppState::launch(durations);
        let (commands, command_rx) = mpsc::channel(16);
        let (update_tx, updates) = watch::channel(state.snapshot());
        let handle = tokio::spawn(countdown_task(
            state,
            command_rx,
            update_tx,
            Delays::default(),
        ));
        Self {
            commands,
            updates,
            handle,
        }
    }

    fn snapshot(&self) -> TimerSnapshot {
        self.updates.borrow().clone()
    }

    async fn send(&self, command: Command) {
        self.commands.send(command).await.unwrap();
    }

    async fn finish(self) -> AppState {
        self.send(Command::Quit).await;
        self.handle.await.unwrap()
    }
}

#[tokio::test(start_paused = true)]
async fn work_expiry_starts_a_fresh_short_break() {
    let harness = Harness::launch(1, 2, 3);

    sleep(Duration::from_millis(60_500)).await;
    let snapshot = harness.snapshot();
    assert_eq!(snapshot.completed_work, 1);
    assert_eq!(snapshot.focused, Phase::ShortBreak);
    assert_eq!(snapshot.running(), Some(Phase::ShortBreak));
    assert_eq!(snapshot.phase(Phase::ShortBreak).remaining_seconds, 120);
    assert_eq!(snapshot.phase(Phase::Work).remaining_seconds, 60);
    assert!(!snapshot.phase(Phase::Work).running);

    harness.finish().await;
}

#[tokio::test(start_paused = true)]
async fn fourth_pomodoro_earns_a_long_break() {
    let harness = Harness::launch(1, 1, 1);
    let mut breaks = Vec::new();

    // each work + break pair takes two minutes of ticks
    for _ in 0..4 {
        sleep(Duration::from_millis(60_500)).await;
        let snapshot = harness.snapshot();
        breaks.push((snapshot.completed_work, snapshot.running()));
        sleep(Duration::from_secs(60)).await;
        assert_eq!(harness.snapshot().running(), Some(Phase::Work));
    }

    assert_eq!(
        breaks,
        vec![
            (1, Some(Phase::ShortBreak)),
            (2, Some(Phase::ShortBreak)),
            (3, Some(Phase::ShortBreak)),
            (4, Some(Phase::LongBreak)),
        ]
    );

    let state = harness.finish().await;
    assert_eq!(state.completed_work(), 4);
}

#[tokio::test(start_paused = true)]
async fn skip_on_stopped_phase_changes_nothing() {
    let harness = Harness::launch(25, 5, 15);

    sleep(Duration::from_millis(500)).await;
    harness.send(Command::Toggle(Phase::Work)).await;
    sleep(Duration::from_millis(100)).await;
    let before = harness.snapshot();

    harness.send(Command::Skip(Phase::Work)).await;
    harness.send(Command::Skip(Phase::ShortBreak)).await;
    sleep(Duration::from_secs(3)).await;

    let after = harness.snapshot();
    assert_eq!(after.phases, before.phases);
    assert_eq!(after.completed_work, 0);
    assert_eq!(after.focused, Phase::Work);

    harness.finish().await;
}

#[tokio::test(start_paused = true)]
async fn reset_counts_from_zero_and_restarts_work() {
    let harness = Harness::launch(1, 1, 1);

    sleep(Duration::from_millis(60_500)).await;
    assert_eq!(harness.snapshot().completed_work, 1);

    harness.send(Command::Reset(Phase::ShortBreak)).await;
    sleep(Duration::from_millis(500)).await;
    let snapshot = harness.snapshot();
    assert_eq!(snapshot.completed_work, 0);
    assert_eq!(snapshot.running(), None);
    for view in &snapshot.phases {
        assert_eq!(view.remaining_seconds, 60);
    }

    sleep(Duration::from_secs(1)).await;
    let snapshot = harness.snapshot();
    assert_eq!(snapshot.running(), Some(Phase::Work));
    assert_eq!(snapshot.focused, Phase::Work);

    harness.finish().await;
}

#[tokio::test(start_paused = true)]
async fn focus_changes_only_the_visible_tab() {
    let harness = Harness::launch(25, 5, 15);

    harness.send(Command::Focus(Phase::LongBreak)).await;
    sleep(Duration::from_millis(2_500)).await;
    let snapshot = harness.snapshot();
    assert_eq!(snapshot.focused, Phase::LongBreak);
    assert_eq!(snapshot.running(), Some(Phase::Work));
    assert_eq!(snapshot.phase(Phase::Work).remaining_seconds, 25 * 60 - 2);

    harness.finish().await;
}
