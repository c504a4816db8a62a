use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hashroute::config::loader::{load_options, load_route_labels};
use hashroute::{Handler, RouteMap, Router, RouterOptions};

#[derive(Parser)]
#[command(name = "router-cli")]
#[command(about = "Drive a hashroute router against an in-process address bar", long_about = None)]
struct Cli {
    /// TOML config with mode/root and a [routes] table of pattern = label
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Addressing mode ("hash" or "history"); overrides the config file
    #[arg(short, long)]
    mode: Option<String>,

    /// Root prefix; overrides the config file
    #[arg(short, long)]
    root: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the registered route table as JSON
    Routes,
    /// Navigate through the given paths, reporting each dispatch
    Walk { paths: Vec<String> },
    /// Print the logical fragment after navigating to a path
    Fragment { path: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hashroute=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut options = match &cli.config {
        Some(path) => load_options(path)?,
        None => RouterOptions::default(),
    };
    if cli.mode.is_some() {
        options.mode = cli.mode.clone();
    }
    if cli.root.is_some() {
        options.root = cli.root.clone();
    }

    let router = if options.is_empty() {
        Router::new()
    } else {
        Router::with_options(options)?
    };

    let labels = match &cli.config {
        Some(path) => load_route_labels(path)?,
        None => Vec::new(),
    };
    if !labels.is_empty() {
        let map: RouteMap = labels
            .iter()
            .map(|(pattern, label)| (pattern.clone(), logging_handler(label)))
            .collect();
        router.dispatch_all(map)?;
    }

    match cli.command {
        Commands::Routes => {
            let routes: Vec<serde_json::Value> = router
                .routes()
                .iter()
                .map(|route| serde_json::json!({ "pattern": route.pattern }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&routes)?);
        }
        Commands::Walk { paths } => {
            for path in paths {
                router.navigate(&path);
                // Give the listener a wakeup to observe the new fragment.
                tokio::time::sleep(Duration::from_millis(80)).await;
            }
            router.stop_listening();
        }
        Commands::Fragment { path } => {
            router.navigate(&path);
            println!("{}", router.fragment());
        }
    }

    Ok(())
}

fn logging_handler(label: &str) -> Handler {
    let label = label.to_string();
    Arc::new(move |fragment: &str| {
        tracing::info!(%label, %fragment, "route hit");
    })
}
