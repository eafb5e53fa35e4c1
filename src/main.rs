//! fragment-router demo host.
//!
//! Loads a route table, mounts one in-memory text container per configured
//! router and drives them with location fragments.
//!
//! ```text
//!   fragment source          registry                 routers
//!  ┌──────────────┐   ┌────────────────────┐   ┌──────────────────────┐
//!  │ --navigate / │──▶│ fan out in order   │──▶│ main:   resolve→swap │
//!  │ stdin lines  │   │ (await each)       │   │ footer: resolve→swap │
//!  └──────────────┘   └────────────────────┘   └──────────────────────┘
//! ```
//!
//! Replay mode (`--navigate`) prints every container after each fragment.
//! Follow mode (`--follow`) reads fragments from stdin, lets the registry's
//! listener react to them and prints the final state at EOF or Ctrl-C.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use fragment_router::config::{self, RouterConfig};
use fragment_router::lifecycle::signals::shutdown_on_ctrl_c;
use fragment_router::lifecycle::startup::{self, Session};
use fragment_router::lifecycle::Shutdown;
use fragment_router::navigation::NavigationSource;
use fragment_router::observability::logging;

#[derive(Parser)]
#[command(name = "fragment-router")]
#[command(about = "Route location fragments to views across router instances", long_about = None)]
struct Cli {
    /// Route table (TOML).
    #[arg(short, long)]
    config: PathBuf,

    /// Fragments to replay in order, e.g. "#/docs/intro".
    #[arg(short, long)]
    navigate: Vec<String>,

    /// Read fragments from stdin, one per line.
    #[arg(short, long, conflicts_with = "navigate")]
    follow: bool,

    /// Print container snapshots as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config: RouterConfig = config::load_config(&cli.config)?;
    logging::init_logging(&config.observability)?;

    tracing::info!(
        config = %cli.config.display(),
        routers = config.routers.len(),
        "fragment-router v0.1.0 starting"
    );

    let session = startup::start(&config).await?;
    print_snapshot(&session, cli.json)?;

    if cli.follow {
        follow(&session, cli.json).await?;
    } else {
        for fragment in &cli.navigate {
            session.registry.navigate(fragment).await?;
            print_snapshot(&session, cli.json)?;
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn follow(session: &Session, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let shutdown = Arc::new(Shutdown::new());
    tokio::spawn(shutdown_on_ctrl_c(shutdown.clone()));

    let registry = session.registry.clone();
    let events = session.source.subscribe();
    let listener_shutdown = shutdown.subscribe();
    let listener = tokio::spawn(async move { registry.listen(events, listener_shutdown).await });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stop = shutdown.subscribe();
    // Ctrl-C may have fired before `stop` existed.
    while !shutdown.is_triggered() {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(fragment) if !fragment.trim().is_empty() => {
                    session.source.set_fragment(fragment.trim());
                }
                Some(_) => {}
                None => break,
            },
            _ = stop.recv() => break,
        }
    }

    shutdown.trigger();
    listener.await?;
    print_snapshot(session, json)?;
    Ok(())
}

fn print_snapshot(session: &Session, json: bool) -> Result<(), serde_json::Error> {
    let snapshot = session.snapshot();
    if json {
        let value = serde_json::json!({
            "fragment": session.source.current_fragment(),
            "routers": snapshot
                .iter()
                .map(|(name, children)| serde_json::json!({ "name": name, "children": children }))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string(&value)?);
    } else {
        println!("{}", session.source.current_fragment());
        for (name, children) in snapshot {
            println!("  [{}] {}", name, children.join(" | "));
        }
    }
    Ok(())
}
