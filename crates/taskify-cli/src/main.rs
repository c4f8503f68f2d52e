use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use taskify_core::app::{METHOD_UPDATE_WIDGET, WidgetApp};
use taskify_core::domain::{ClickOutcome, Intent, Language, SurfaceId, TaskKey};
use taskify_core::impls::{FileSharedStore, FileSurfaceHost, TracingEventSink};
use taskify_core::observability::SnapshotStats;
use taskify_core::{AppBuilder, SnapshotCodec, SyncConfig};

mod console_notifier;

use console_notifier::ConsoleNotificationHost;

/// Drive the widget, the app bridge and the push handler against a store directory.
#[derive(Debug, Parser)]
#[command(name = "taskify", version)]
struct Cli {
    /// Shared store directory.
    #[arg(long, default_value = ".taskify")]
    store: PathBuf,

    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Placed widget surface ids.
    #[arg(long, value_delimiter = ',', default_value = "1")]
    surfaces: Vec<i64>,

    /// Open app windows (urls) known to the notification host.
    #[arg(long = "window")]
    windows: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scheduled refresh: render every placed surface.
    Render,
    /// Widget tap: complete a task by key.
    Complete { key: i64 },
    /// App bridge: request an immediate widget refresh.
    Refresh,
    /// Push received while backgrounded (raw JSON payload).
    Push { payload: String },
    /// User clicked the notification with this tag.
    Click { tag: String },
    /// Print snapshot counts.
    Stats,
    /// App-side write of the whole snapshot, then refresh.
    SetTasks { json: String },
    /// App-side language change, then refresh.
    SetLanguage { code: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskify=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SyncConfig::from_file(path)?,
        None => SyncConfig::default(),
    };
    let surfaces: Vec<SurfaceId> = cli.surfaces.iter().copied().map(SurfaceId::new).collect();

    let app = AppBuilder::new(config)
        .store(Arc::new(FileSharedStore::new(&cli.store)))
        .surface_host(Arc::new(FileSurfaceHost::new(
            cli.store.join("surfaces"),
            surfaces,
        )))
        .notification_host(Arc::new(ConsoleNotificationHost::new(&cli.windows)))
        .event_sink(Arc::new(TracingEventSink))
        .build()?;

    run(&app, cli.command).await
}

async fn run(app: &WidgetApp, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render => {
            let count = app.renderer().render_all();
            println!("{}", serde_json::to_string_pretty(&app.renderer().current_view())?);
            println!("rendered {count} surface(s)");
        }
        Command::Complete { key } => {
            let scheme = &app.config().deep_link_scheme;
            app.relay()
                .on_receive(&Intent::complete_task(TaskKey::new(key), scheme));
        }
        Command::Refresh => {
            let result = app.trigger().handle_method_call(METHOD_UPDATE_WIDGET);
            println!("{result:?}");
        }
        Command::Push { payload } => {
            let intake = app.intake().context("notification host not configured")?;
            intake.on_background_message_json(&payload).await;
        }
        Command::Click { tag } => {
            let intake = app.intake().context("notification host not configured")?;
            match intake.on_notification_click(&tag).await {
                ClickOutcome::Focused(client) => println!("focused {}", client.id),
                ClickOutcome::Opened(url) => println!("opened {url}"),
                ClickOutcome::Nothing => println!("no window available"),
            }
        }
        Command::Stats => {
            let stats = SnapshotStats::from_snapshot(&app.read_snapshot());
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Command::SetTasks { json } => {
            let snapshot = SnapshotCodec::decode(&json).context("invalid task list")?;
            app.publish_snapshot(&snapshot)?;
            println!("stored {} task(s)", snapshot.len());
        }
        Command::SetLanguage { code } => {
            let language: Language = code.parse()?;
            app.publish_language(language)?;
            println!("language set to {language}");
        }
    }
    Ok(())
}
