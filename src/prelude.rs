//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the bolt_lovable
//! crate. Import it to get the session, its parts and their error types in one
//! line.
//!
//! # Example
//!
//! ```rust,no_run
//! use bolt_lovable::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let config = ShellConfig::from_file("path/to/config.json")?;
//! let (mut session, mut notifications) = Session::new(config)?;
//!
//! session.apply_template("saas-landing")?;
//! session.commit();
//!
//! for notification in notifications.drain() {
//!     println!("{}", notification);
//! }
//! # Ok(())
//! # }
//! ```

// Session and configuration
pub use crate::config::ShellConfig;
pub use crate::shell::{Presentation, Session};

// Template library
pub use crate::catalog::{Facet, TemplateCatalog, TemplateEntry, TemplateQuery};

// Workflow graph
pub use crate::workflow::{
    LayoutMode, NodeRole, Position, WorkflowEdge, WorkflowGraph, WorkflowNode, WorkflowSnapshot,
};

// Document and orchestration
pub use crate::document::{DocumentBuffer, Language, SharedDocument, Theme};
pub use crate::orchestrator::{RejectReason, RunOutcome, RunReport, Simulator, SimulatorState};

// Notifications and export
pub use crate::export::{PreviewHandle, TemplateDownload};
pub use crate::notify::{Notification, NotificationStream, Notifier, Severity};

// Error types
pub use crate::error::{CatalogError, ConfigError, ExportError, WorkflowError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
