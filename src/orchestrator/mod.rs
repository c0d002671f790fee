//! A scripted stand-in for multi-agent orchestration.
//!
//! A run walks a fixed [`OrchestrationScript`], sleeping between steps,
//! emitting a notification per step and inserting the architect's plan into the
//! document. The workflow graph is only consulted for its node count, which
//! must be non-zero for a run to start.

mod script;

pub use script::{ARCHITECT_FRAGMENT, OrchestrationScript, PLAN_MARKER, STAGE_LABELS, Step};

use crate::document::DocumentBuffer;
use parking_lot::Mutex;
use crate::notify::{Notification, Notifier, Severity};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info};

/// Message shown when a run is requested on an empty workflow.
pub const EMPTY_WORKFLOW_WARNING: &str = "Add AI modules to the workflow before running.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatorState {
    Idle,
    Running,
}

/// Why a start request did not lead to a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The workflow has no nodes. A warning notification was emitted.
    EmptyWorkflow,
    /// Another run is in progress. Nothing was emitted.
    AlreadyRunning,
}

/// What a completed run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub steps: usize,
    pub plan_inserted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(RunReport),
    Rejected(RejectReason),
}

/// Marks the simulator as running for as long as it is alive.
#[derive(Debug)]
pub struct RunGuard {
    running: Arc<AtomicBool>,
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Release);
    }
}

/// Runs the orchestration script. Clones share the same running flag.
#[derive(Debug, Clone)]
pub struct Simulator {
    running: Arc<AtomicBool>,
    delay: Duration,
    script: OrchestrationScript,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(Duration::from_millis(700))
    }
}

impl Simulator {
    pub fn new(delay: Duration) -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
            delay,
            script: OrchestrationScript::default(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn state(&self) -> SimulatorState {
        if self.running.load(Ordering::Acquire) {
            SimulatorState::Running
        } else {
            SimulatorState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == SimulatorState::Running
    }

    /// Moves the simulator to `Running`, or returns `None` if it already is.
    pub fn try_claim(&self) -> Option<RunGuard> {
        self.running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RunGuard {
                running: Arc::clone(&self.running),
            })
    }

    /// Runs the script to completion against `document`.
    ///
    /// The document is only locked while a step edits it, so it stays writable
    /// between steps. A request while another run is active is ignored. A
    /// request on an empty workflow emits one warning and leaves the simulator
    /// idle.
    pub async fn run(
        &self,
        node_count: usize,
        document: &Mutex<DocumentBuffer>,
        notifier: &Notifier,
    ) -> RunOutcome {
        if self.is_running() {
            debug!("Orchestration already running, start request ignored");
            return RunOutcome::Rejected(RejectReason::AlreadyRunning);
        }
        if node_count == 0 {
            notifier.error(EMPTY_WORKFLOW_WARNING);
            return RunOutcome::Rejected(RejectReason::EmptyWorkflow);
        }
        let Some(_guard) = self.try_claim() else {
            return RunOutcome::Rejected(RejectReason::AlreadyRunning);
        };

        info!(node_count, steps = self.script.len(), "Orchestration started");
        let mut report = RunReport {
            steps: 0,
            plan_inserted: false,
        };
        for (i, step) in self.script.steps().iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.delay).await;
            }
            self.perform(*step, document, notifier, &mut report);
            report.steps += 1;
        }
        info!(plan_inserted = report.plan_inserted, "Orchestration finished");
        RunOutcome::Completed(report)
    }

    fn perform(
        &self,
        step: Step,
        document: &Mutex<DocumentBuffer>,
        notifier: &Notifier,
        report: &mut RunReport,
    ) {
        debug!(?step, "Orchestration step");
        match step {
            Step::Announce => notifier.notify(
                Notification::new(Severity::Plain, "Starting AI orchestration...")
                    .with_description(STAGE_LABELS.join(" > ")),
            ),
            Step::ArchitectPlan => notifier.info("Architect produced a plan."),
            Step::InsertPlan => {
                report.plan_inserted = document
                    .lock()
                    .append_before_marker(PLAN_MARKER, ARCHITECT_FRAGMENT);
                if report.plan_inserted {
                    notifier.info("Architect plan inserted into the document.");
                } else {
                    notifier.info("Architect plan marker not found; document left unchanged.");
                }
            }
            Step::CoderUpdate => notifier.info("Coder generated code updates."),
            Step::DebuggerReport => notifier.info("Debugger found minor issues."),
            Step::HandlerFixed => notifier.success("Error Handler applied fixes!"),
        }
    }
}
