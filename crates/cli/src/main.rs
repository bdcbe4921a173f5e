//! Terminal front end for the todo sync client
//!
//! Reads commands from stdin, turns them into intents and redraws the list
//! whenever the store replaces its tasks.

mod command;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_core::task::{StoreEvent, TaskListStore};
use todo_core::view::{dispatch, render};
use todo_core::{ClientConfig, SyncController};

use crate::command::{Command, HELP};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_client=info,todo_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env();
    tracing::info!("Using task store at {}", config.base_url());

    let controller = SyncController::connect(&config);
    spawn_renderer(controller.store().clone());
    controller.mount().await;

    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                if !line.trim().is_empty() {
                    println!("{}", e);
                }
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            _ => {}
        }

        let view = render(&controller.store().snapshot().await);
        let intents = match command.into_intents(&view) {
            Ok(intents) => intents,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        // Remote calls run in the background; the prompt stays responsive
        let controller = controller.clone();
        tokio::spawn(async move {
            for intent in intents {
                dispatch(&controller, intent).await;
            }
        });
    }

    Ok(())
}

/// Redraw the list every time the store replaces its tasks
fn spawn_renderer(store: TaskListStore) {
    let mut events = store.subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(StoreEvent::TasksReplaced { .. }) => {}
                Ok(StoreEvent::DraftChanged) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Renderer skipped {} store events", skipped);
                }
                Err(RecvError::Closed) => break,
            }
            println!("\n{}", render(&store.snapshot().await));
        }
    });
}
