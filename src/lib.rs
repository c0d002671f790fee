//! # Bolt Lovable - Template and Orchestration Editor Core
//!
//! **Bolt Lovable** holds the state behind a web-page editor shell: a library of
//! page templates, the markup document being edited, a small graph describing an
//! "AI orchestration pipeline", and a scripted simulator that walks that pipeline
//! while reporting progress through a notification stream.
//!
//! ## Core Workflow
//!
//! 1.  **Open a Session**: `Session::new` builds the catalog, the default
//!     Architect → Coder → Debugger → Error Handler pipeline and the welcome
//!     document, and hands back the notification stream.
//! 2.  **Pick a Template**: filter the catalog with `TemplateCatalog::filter` and
//!     apply an entry with `Session::apply_template`.
//! 3.  **Shape the Pipeline**: add, connect, select, delete and lay out nodes on
//!     the `WorkflowGraph`.
//! 4.  **Run**: `Session::run_orchestration` plays the scripted run, inserting the
//!     architect's plan into the document.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bolt_lovable::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let (mut session, mut notifications) = Session::new(ShellConfig::default())?;
//!
//!     // Narrow the catalog down and apply the first hit.
//!     let hits: Vec<String> = session
//!         .catalog()
//!         .filter("landing", "All", "Pricing")
//!         .iter()
//!         .map(|t| t.id.clone())
//!         .collect();
//!     session.apply_template(&hits[0])?;
//!
//!     // Extend the pipeline and tidy it up.
//!     let step = session.add_step(Some("Reviewer"));
//!     session.graph_mut().connect("handler", &step.id)?;
//!     session.graph_mut().apply_layout(LayoutMode::Vertical);
//!
//!     // Play the scripted orchestration.
//!     let outcome = session.run_orchestration().await;
//!     println!("Outcome: {:?}", outcome);
//!
//!     for notification in notifications.drain() {
//!         println!("{}", notification);
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod notify;
pub mod orchestrator;
pub mod prelude;
pub mod shell;
pub mod workflow;
