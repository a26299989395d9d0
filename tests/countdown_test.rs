use alert::{
    AbortReason, AbortSource, AlertOutcome, Command, Countdown, CountdownConfig, TerminalDisplay,
};
use async_trait::async_trait;
use chrono::Local;

struct NeverAbort;

#[async_trait]
impl AbortSource for NeverAbort {
    async fn aborted(&mut self) -> AbortReason {
        std::future::pending().await
    }
}

struct ImmediateAbort;

#[async_trait]
impl AbortSource for ImmediateAbort {
    async fn aborted(&mut self) -> AbortReason {
        AbortReason::Terminate
    }
}

#[tokio::test(start_paused = true)]
async fn test_dispatched_deadline_renders_full_countdown() {
    let command = Command::parse(&["in", "3s"]).unwrap();
    let deadline = command.deadline(Local::now()).unwrap().unwrap();

    let config = CountdownConfig::default();
    let display = TerminalDisplay::new(Vec::new(), Vec::new(), config.clear_width);
    let mut countdown = Countdown::new(display, NeverAbort, config);

    let outcome = countdown.run(deadline).await.unwrap();
    assert_eq!(outcome, AlertOutcome::Fired);

    let (out, err) = countdown.into_display().into_inner();
    let out = String::from_utf8(out).unwrap();
    let blank = format!("\r{}\r", " ".repeat(60));
    let expected = format!(
        "Alerting at {}\n3s{blank}2s{blank}1s{blank}Timer elapsed\u{7}\n",
        deadline.at().format("%Y-%m-%dT%H:%M:%S")
    );
    assert_eq!(out, expected);
    assert!(err.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_shrinking_values_are_fully_blanked() {
    let command = Command::parse(&["in", "11s"]).unwrap();
    let deadline = command.deadline(Local::now()).unwrap().unwrap();

    let config = CountdownConfig {
        clear_width: 8,
        ..CountdownConfig::default()
    };
    let display = TerminalDisplay::new(Vec::new(), Vec::new(), config.clear_width);
    let mut countdown = Countdown::new(display, NeverAbort, config);

    countdown.run(deadline).await.unwrap();

    let (out, _) = countdown.into_display().into_inner();
    let out = String::from_utf8(out).unwrap();
    let countdown_line = out.split_once('\n').unwrap().1;
    let frames: Vec<&str> = countdown_line
        .split('\r')
        .filter(|frame| !frame.trim().is_empty())
        .collect();
    let first_frames: Vec<&str> = frames.iter().take(3).copied().collect();
    assert_eq!(first_frames, vec!["11s", "10s", "9s"]);
    assert!(out.contains(&format!("10s\r{}\r9s", " ".repeat(8))));
}

#[tokio::test(start_paused = true)]
async fn test_abort_prints_notice_and_no_alert() {
    let command = Command::parse(&["at", "2999-01-01T00:00:00"]).unwrap();
    let deadline = command.deadline(Local::now()).unwrap().unwrap();

    let config = CountdownConfig::default();
    let display = TerminalDisplay::new(Vec::new(), Vec::new(), config.clear_width);
    let mut countdown = Countdown::new(display, ImmediateAbort, config);

    let outcome = countdown.run(deadline).await.unwrap();
    assert_eq!(outcome, AlertOutcome::Aborted);

    let (out, err) = countdown.into_display().into_inner();
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("Alerting at 2999-01-01T00:00:00\n"));
    assert!(!out.contains("Timer elapsed"));
    assert_eq!(String::from_utf8(err).unwrap(), "\nAborted.\n");
}
