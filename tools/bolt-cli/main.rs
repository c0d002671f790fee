use bolt_lovable::export::save_template;
use bolt_lovable::prelude::*;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LayoutCli {
    Horizontal,
    Vertical,
}

impl From<LayoutCli> for LayoutMode {
    fn from(value: LayoutCli) -> Self {
        match value {
            LayoutCli::Horizontal => LayoutMode::Horizontal,
            LayoutCli::Vertical => LayoutMode::Vertical,
        }
    }
}

/// Template library, workflow editing and scripted orchestration from the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a JSON shell configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the delay between orchestration steps, in milliseconds
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// Seed for node ids and placement
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List templates matching a search and facet filters
    Templates {
        #[arg(short, long, default_value = "")]
        query: String,
        #[arg(short, long, default_value = "All")]
        industry: String,
        #[arg(short, long, default_value = "All")]
        feature: String,
    },
    /// Save a template as <id>.html
    Download {
        id: String,
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
    /// Run the scripted orchestration and print the resulting document
    Run {
        /// Template to apply before running
        #[arg(short, long)]
        template: Option<String>,
        /// Extra pipeline steps appended after the Error Handler
        #[arg(long = "add-step")]
        add_steps: Vec<String>,
        /// Auto-layout to apply before running
        #[arg(short, long, value_enum)]
        layout: Option<LayoutCli>,
        /// Start from an empty workflow
        #[arg(long)]
        empty: bool,
    },
    /// Publish the document as a short-lived HTML preview
    Preview {
        #[arg(short, long)]
        template: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli);
    match cli.command {
        Command::Templates {
            query,
            industry,
            feature,
        } => list_templates(&query, &industry, &feature),
        Command::Download { id, output } => download(&id, &output),
        Command::Run {
            template,
            add_steps,
            layout,
            empty,
        } => run(config, template, add_steps, layout, empty).await,
        Command::Preview { template } => preview(config, template).await,
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(cli: &Cli) -> ShellConfig {
    let mut config = match &cli.config {
        Some(path) => ShellConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => ShellConfig::default(),
    };
    if let Some(delay) = cli.delay_ms {
        config.step_delay_ms = delay;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config
}

fn list_templates(query: &str, industry: &str, feature: &str) {
    let catalog = TemplateCatalog::builtin();
    let hits = catalog.filter(query, industry, feature);

    println!("Industries: {}", catalog.industry_options().join(" | "));
    println!("Features:   {}", catalog.feature_options().join(" | "));
    println!("\n{} of {} templates match:", hits.len(), catalog.len());
    for template in hits {
        println!(
            "  -> {:<20} {:<18} ★ {}  ({})",
            template.id,
            template.name,
            template.rating,
            template.summary()
        );
    }
}

fn download(id: &str, output: &Path) {
    let catalog = TemplateCatalog::builtin();
    let entry = catalog
        .get(id)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let link = TemplateDownload::for_template(entry);
    let path = save_template(entry, output)
        .unwrap_or_else(|e| exit_with_error(&format!("Download failed: {}", e)));
    println!("Saved '{}' to '{}'", entry.name, path.display());
    println!("  -> data URI length: {} bytes", link.href.len());
}

fn open_session(config: ShellConfig, empty: bool) -> (Session, NotificationStream) {
    if empty {
        let mut builder = WorkflowGraph::builder()
            .empty()
            .spawn_area(config.spawn_area)
            .spacing(config.layout);
        if let Some(seed) = config.seed {
            builder = builder.seed(seed);
        }
        let graph = builder
            .build()
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to build workflow: {}", e)));
        Session::with_parts(config, TemplateCatalog::builtin(), graph)
    } else {
        Session::new(config)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to open session: {}", e)))
    }
}

async fn run(
    config: ShellConfig,
    template: Option<String>,
    add_steps: Vec<String>,
    layout: Option<LayoutCli>,
    empty: bool,
) {
    let total_start = Instant::now();
    let (mut session, mut notifications) = open_session(config, empty);

    if let Some(id) = template {
        session
            .apply_template(&id)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    }

    // Chain each new step after the current last node.
    for label in add_steps {
        let previous = session.graph().nodes().last().map(|n| n.id.clone());
        let node = session.add_step(Some(&label));
        if let Some(previous) = previous {
            session
                .graph_mut()
                .connect(&previous, &node.id)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        }
    }
    if let Some(layout) = layout {
        session.graph_mut().apply_layout(layout.into());
    }

    println!("--- Workflow ---");
    for node in session.graph().nodes() {
        println!(
            "  [{}] {} at ({:.0}, {:.0})",
            node.id, node.label, node.position.x, node.position.y
        );
    }
    for edge in session.graph().edges() {
        println!("  {} -> {}", edge.source, edge.target);
    }

    println!(
        "\n--- Orchestration (step delay {:?}) ---",
        session.simulator().delay()
    );
    let run = session.run_orchestration();
    tokio::pin!(run);
    let outcome = loop {
        tokio::select! {
            outcome = &mut run => break outcome,
            Some(notification) = notifications.recv() => println!("  {}", notification),
        }
    };
    for notification in notifications.drain() {
        println!("  {}", notification);
    }

    match outcome {
        RunOutcome::Completed(report) => {
            println!("\nOrchestration finished after {} steps.", report.steps);
            println!("\n--- Document ---\n{}", session.document().text());
        }
        RunOutcome::Rejected(reason) => {
            println!("\nOrchestration did not start: {:?}", reason);
        }
    }
    println!("\nTotal Execution: {:?}", total_start.elapsed());
}

async fn preview(config: ShellConfig, template: Option<String>) {
    let ttl = config.preview_ttl();
    let (mut session, mut notifications) = open_session(config, false);
    if let Some(id) = template {
        session
            .apply_template(&id)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    }
    for notification in notifications.drain() {
        println!("  {}", notification);
    }

    let handle = match session.preview() {
        Ok(Some(handle)) => handle,
        Ok(None) => exit_with_error("Preview is unavailable while orchestration runs."),
        Err(e) => exit_with_error(&format!("Preview failed: {}", e)),
    };
    println!("Preview ({}) available at {}", handle.content_type(), handle.url());
    println!("It will be removed in {:?}.", ttl);
    tokio::time::sleep(ttl + std::time::Duration::from_millis(100)).await;
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
