//! The editor session: one catalog, one workflow graph, one document and one
//! simulator, wired together the way the editor panels use them.

use crate::catalog::{TemplateCatalog, TemplateEntry};
use crate::config::ShellConfig;
use crate::document::{DocumentBuffer, Language, SharedDocument, Theme};
use crate::error::{CatalogError, ExportError, WorkflowError};
use crate::export::{PreviewHandle, TemplateDownload, publish_preview};
use crate::notify::{NotificationStream, Notifier, notification_channel};
use crate::orchestrator::{RunOutcome, Simulator};
use crate::workflow::{DEFAULT_STEP_LABEL, WorkflowGraph, WorkflowNode, WorkflowSnapshot};
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;
use tracing::info;

/// Presentation choices handed to whatever renders the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub dark_mode: bool,
    pub theme: Theme,
    pub language: Language,
}

pub struct Session {
    config: ShellConfig,
    catalog: TemplateCatalog,
    graph: WorkflowGraph,
    document: SharedDocument,
    simulator: Simulator,
    notifier: Notifier,
    selected_template: Option<String>,
    saved_workflow: WorkflowSnapshot,
    dark_mode: bool,
}

impl Session {
    /// Opens a session with the built-in catalog and the default pipeline.
    /// The returned stream receives every notification the session emits.
    pub fn new(config: ShellConfig) -> Result<(Self, NotificationStream), WorkflowError> {
        let mut builder = WorkflowGraph::builder()
            .spawn_area(config.spawn_area)
            .spacing(config.layout);
        if let Some(seed) = config.seed {
            builder = builder.seed(seed);
        }
        let graph = builder.build()?;
        Ok(Self::with_parts(config, TemplateCatalog::builtin(), graph))
    }

    /// Opens a session over an explicit catalog and graph.
    pub fn with_parts(
        config: ShellConfig,
        catalog: TemplateCatalog,
        graph: WorkflowGraph,
    ) -> (Self, NotificationStream) {
        let (notifier, stream) = notification_channel();
        let mut document = DocumentBuffer::default();
        document.set_language(config.language);
        document.set_theme(config.theme);
        let session = Self {
            simulator: Simulator::new(config.step_delay()),
            dark_mode: config.dark_mode,
            config,
            catalog,
            graph,
            document: Arc::new(Mutex::new(document)),
            notifier,
            selected_template: None,
            saved_workflow: WorkflowSnapshot::default(),
        };
        (session, stream)
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn graph(&self) -> &WorkflowGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut WorkflowGraph {
        &mut self.graph
    }

    /// Locks the document. Do not hold the guard across an `.await`.
    pub fn document(&self) -> MutexGuard<'_, DocumentBuffer> {
        self.document.lock()
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Replaces the document with a template's markup and remembers the choice.
    pub fn apply_template(&mut self, id: &str) -> Result<&TemplateEntry, CatalogError> {
        let entry = self.catalog.get(id)?;
        self.document.lock().apply_template(entry);
        self.selected_template = Some(entry.id.clone());
        info!(template = %entry.id, "Template applied");
        self.notifier.success(format!("Applied template: {}", entry.name));
        Ok(entry)
    }

    pub fn selected_template(&self) -> Option<&TemplateEntry> {
        self.selected_template
            .as_deref()
            .and_then(|id| self.catalog.get(id).ok())
    }

    pub fn download_template(&self, id: &str) -> Result<TemplateDownload, CatalogError> {
        self.catalog.get(id).map(TemplateDownload::for_template)
    }

    /// A direct edit in the code editor.
    pub fn edit_text(&mut self, text: impl Into<String>) {
        self.document.lock().set_text(text);
    }

    pub fn set_language(&mut self, language: Language) {
        self.document.lock().set_language(language);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.document.lock().set_theme(theme);
    }

    /// Flips the page-wide dark mode and returns the new value.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    pub fn presentation(&self) -> Presentation {
        let document = self.document.lock();
        Presentation {
            dark_mode: self.dark_mode,
            theme: document.theme(),
            language: document.language(),
        }
    }

    /// The "Add Step" action. `None` uses the default step label.
    pub fn add_step(&mut self, label: Option<&str>) -> WorkflowNode {
        self.graph.add_node(label.unwrap_or(DEFAULT_STEP_LABEL))
    }

    /// Stores a copy of the current workflow for later restoration.
    pub fn save_workflow(&mut self) -> &WorkflowSnapshot {
        self.saved_workflow = self.graph.serialize();
        info!(nodes = self.saved_workflow.nodes.len(), "Workflow saved");
        &self.saved_workflow
    }

    pub fn saved_workflow(&self) -> &WorkflowSnapshot {
        &self.saved_workflow
    }

    pub fn is_busy(&self) -> bool {
        self.simulator.is_running()
    }

    /// Starts the orchestration script against the document.
    ///
    /// The start request is gated on the node count at the time of the call.
    /// The returned future does not borrow the session, so edits and previews
    /// keep working while it runs.
    pub fn run_orchestration(&self) -> impl Future<Output = RunOutcome> + Send + use<> {
        let simulator = self.simulator.clone();
        let document = Arc::clone(&self.document);
        let notifier = self.notifier.clone();
        let node_count = self.graph.node_count();
        async move { simulator.run(node_count, &document, &notifier).await }
    }

    /// Stand-in for version control: only reports success.
    pub fn commit(&self) {
        self.notifier.success("Committed changes");
    }

    /// Publishes the current document as a short-lived HTML file.
    ///
    /// Returns `None` while an orchestration run is in progress.
    pub fn preview(&self) -> Result<Option<PreviewHandle>, ExportError> {
        if self.is_busy() {
            return Ok(None);
        }
        let document = self.document.lock();
        publish_preview(
            &self.config.preview_dir,
            document.text(),
            self.config.preview_ttl(),
        )
        .map(Some)
    }
}
