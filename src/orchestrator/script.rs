/// Labels of the four simulated stages, in pipeline order.
pub const STAGE_LABELS: [&str; 4] = ["Architect", "Coder", "Debugger", "Error Handler"];

/// The architect's plan is inserted right before the first occurrence of this.
pub const PLAN_MARKER: &str = "</main>";

/// Markup the architect stage "produces".
pub const ARCHITECT_FRAGMENT: &str = r#"<section style="margin-top:24px;padding:16px;border:1px dashed #93c5fd;border-radius:12px;"><h2>Architect Plan</h2><p>Generated site map and component hierarchy.</p></section>"#;

/// One scripted action of a simulated orchestration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Announce,
    ArchitectPlan,
    InsertPlan,
    CoderUpdate,
    DebuggerReport,
    HandlerFixed,
}

/// An ordered list of steps. Consecutive steps are separated by the
/// simulator's step delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestrationScript {
    steps: Vec<Step>,
}

impl Default for OrchestrationScript {
    fn default() -> Self {
        Self::new(vec![
            Step::Announce,
            Step::ArchitectPlan,
            Step::InsertPlan,
            Step::CoderUpdate,
            Step::DebuggerReport,
            Step::HandlerFixed,
        ])
    }
}

impl OrchestrationScript {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
