//! Tests for the scripted orchestration run.
mod common;
use bolt_lovable::orchestrator::{ARCHITECT_FRAGMENT, EMPTY_WORKFLOW_WARNING, PLAN_MARKER};
use bolt_lovable::prelude::*;
use common::*;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;
use std::task::Poll;
use std::time::Duration;
use tokio_test::{assert_pending, task};

const EXPECTED_TITLES: [&str; 6] = [
    "Starting AI orchestration...",
    "Architect produced a plan.",
    "Architect plan inserted into the document.",
    "Coder generated code updates.",
    "Debugger found minor issues.",
    "Error Handler applied fixes!",
];

#[tokio::test(start_paused = true)]
async fn test_empty_workflow_is_rejected_with_one_warning() {
    let (notifier, mut stream) = bolt_lovable::notify::notification_channel();
    let simulator = Simulator::new(STEP_DELAY);
    let document = Mutex::new(DocumentBuffer::default());

    let outcome = simulator.run(0, &document, &notifier).await;

    assert_eq!(outcome, RunOutcome::Rejected(RejectReason::EmptyWorkflow));
    assert_eq!(simulator.state(), SimulatorState::Idle);
    assert_eq!(*document.lock(), DocumentBuffer::default());
    let emitted = stream.drain();
    assert_eq!(emitted.len(), 1);
    assert_eq!(emitted[0].severity, Severity::Error);
    assert_eq!(emitted[0].title, EMPTY_WORKFLOW_WARNING);
}

#[tokio::test(start_paused = true)]
async fn test_full_run_inserts_plan_once_and_notifies_in_order() {
    let (notifier, mut stream) = bolt_lovable::notify::notification_channel();
    let simulator = Simulator::new(STEP_DELAY);
    let document = Mutex::new(DocumentBuffer::default());
    let original = document.lock().text().to_string();
    let marker_at = original.find(PLAN_MARKER).unwrap();

    let started = tokio::time::Instant::now();
    let outcome = simulator.run(4, &document, &notifier).await;

    assert_eq!(
        outcome,
        RunOutcome::Completed(RunReport {
            steps: 6,
            plan_inserted: true,
        })
    );
    assert!(started.elapsed() >= STEP_DELAY * 5);
    assert_eq!(simulator.state(), SimulatorState::Idle);

    let expected = format!(
        "{}{}{}",
        &original[..marker_at],
        ARCHITECT_FRAGMENT,
        &original[marker_at..]
    );
    let document = document.into_inner();
    assert_eq!(document.text(), expected);
    assert_eq!(document.text().matches(ARCHITECT_FRAGMENT).count(), 1);

    let emitted = stream.drain();
    assert_eq!(titles(&emitted), EXPECTED_TITLES);
    assert_eq!(emitted[0].severity, Severity::Plain);
    assert_eq!(
        emitted[0].description.as_deref(),
        Some("Architect > Coder > Debugger > Error Handler")
    );
    assert!(emitted[1..5].iter().all(|n| n.severity == Severity::Info));
    assert_eq!(emitted[5].severity, Severity::Success);
}

#[tokio::test(start_paused = true)]
async fn test_steps_are_paced_by_the_delay() {
    let (notifier, mut stream) = bolt_lovable::notify::notification_channel();
    let simulator = Simulator::new(STEP_DELAY);
    let document = Mutex::new(DocumentBuffer::default());

    {
        let mut run = task::spawn(simulator.run(4, &document, &notifier));
        assert_pending!(run.poll());
        assert_eq!(stream.drain().len(), 1);
        assert!(simulator.is_running());

        for emitted_so_far in 2..=5 {
            tokio::time::advance(STEP_DELAY).await;
            assert_pending!(run.poll());
            assert_eq!(stream.drain().len(), 1, "after step {emitted_so_far}");
        }

        tokio::time::advance(STEP_DELAY).await;
        match run.poll() {
            Poll::Ready(RunOutcome::Completed(report)) => assert_eq!(report.steps, 6),
            other => panic!("run should have completed, got {:?}", other),
        }
    }
    assert_eq!(stream.drain().len(), 1);
    assert!(!simulator.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_start_while_running_is_ignored() {
    let (notifier, mut stream) = bolt_lovable::notify::notification_channel();
    let simulator = Simulator::new(STEP_DELAY);
    let first_doc = Mutex::new(DocumentBuffer::default());
    let second_doc = Mutex::new(DocumentBuffer::default());

    let mut first = task::spawn(simulator.run(4, &first_doc, &notifier));
    assert_pending!(first.poll());
    stream.drain();

    let second = simulator.clone().run(4, &second_doc, &notifier).await;
    assert_eq!(second, RunOutcome::Rejected(RejectReason::AlreadyRunning));
    assert!(stream.drain().is_empty());
    assert_eq!(*second_doc.lock(), DocumentBuffer::default());

    // An empty workflow is not even checked while busy.
    let third = simulator.run(0, &second_doc, &notifier).await;
    assert_eq!(third, RunOutcome::Rejected(RejectReason::AlreadyRunning));
    assert!(stream.drain().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_missing_marker_still_completes() {
    let (notifier, mut stream) = bolt_lovable::notify::notification_channel();
    let simulator = Simulator::new(STEP_DELAY);
    let document = Mutex::new(DocumentBuffer::new("<div>no main here</div>"));

    let outcome = simulator.run(1, &document, &notifier).await;

    assert_eq!(
        outcome,
        RunOutcome::Completed(RunReport {
            steps: 6,
            plan_inserted: false,
        })
    );
    assert_eq!(document.lock().text(), "<div>no main here</div>");
    let emitted = stream.drain();
    assert_eq!(emitted.len(), 6);
    assert!(emitted[2].title.contains("marker not found"));
}

#[test]
fn test_zero_delay_run_on_plain_runtime() {
    let (notifier, mut stream) = bolt_lovable::notify::notification_channel();
    let simulator = Simulator::new(Duration::ZERO);
    let document = Mutex::new(DocumentBuffer::default());

    let outcome = tokio_test::block_on(simulator.run(2, &document, &notifier));

    assert!(matches!(outcome, RunOutcome::Completed(_)));
    assert_eq!(stream.drain().len(), 6);
}

#[tokio::test(start_paused = true)]
async fn test_plan_lands_in_text_edited_between_steps() {
    let (notifier, mut stream) = bolt_lovable::notify::notification_channel();
    let simulator = Simulator::new(STEP_DELAY);
    let document = Mutex::new(DocumentBuffer::default());

    let mut run = task::spawn(simulator.run(4, &document, &notifier));
    assert_pending!(run.poll());
    document.lock().set_text("<main>rewritten</main>");

    for _ in 0..4 {
        tokio::time::advance(STEP_DELAY).await;
        assert_pending!(run.poll());
    }
    tokio::time::advance(STEP_DELAY).await;
    assert!(matches!(run.poll(), Poll::Ready(RunOutcome::Completed(_))));
    drop(run);

    assert_eq!(
        document.lock().text(),
        format!("<main>rewritten{}</main>", ARCHITECT_FRAGMENT)
    );
    assert_eq!(stream.drain().len(), 6);
}

/// Collects formatted log output in memory.
struct LogSink(Arc<Mutex<Vec<u8>>>);

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_empty_workflow_logs_a_single_warning() {
    let logs = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&logs);
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || LogSink(Arc::clone(&sink)))
        .with_ansi(false)
        .finish();
    let (notifier, _stream) = bolt_lovable::notify::notification_channel();
    let simulator = Simulator::new(STEP_DELAY);
    let document = Mutex::new(DocumentBuffer::default());

    let outcome = tracing::subscriber::with_default(subscriber, || {
        tokio_test::block_on(simulator.run(0, &document, &notifier))
    });

    assert_eq!(outcome, RunOutcome::Rejected(RejectReason::EmptyWorkflow));
    let output = String::from_utf8(logs.lock().clone()).unwrap();
    assert_eq!(output.matches("WARN").count(), 1, "{output}");
    assert!(!output.contains("ERROR"), "{output}");
}
