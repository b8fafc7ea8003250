//! Walks processes through the whole lifecycle and prints the
//! canonical reports.
//!
//! ```sh
//! cargo run -p shx-process-management --example walkthrough
//! ```

use std::sync::Arc;
use std::time::Duration;

use shx_history::CommandHistory;
use shx_process_management::{ProcessManager, Result};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let history = Arc::new(CommandHistory::new());
    let manager = ProcessManager::new(Arc::clone(&history));

    let chatty = manager
        .start(&[
            "sh".to_string(),
            "-c".to_string(),
            "echo hello; echo oops 1>&2".to_string(),
        ])
        .await?;
    let slow = manager
        .start(&["sleep".to_string(), "60".to_string()])
        .await?;

    tokio::time::sleep(Duration::from_millis(300)).await;

    println!("{}\n", manager.check_status(&chatty).await?);
    println!("{}\n", manager.check_status(&slow).await?);

    println!("{}\n", manager.stop(&slow).await?);
    println!("{}\n", manager.check_status(&slow).await?);

    println!("{}", manager.list().await);

    println!("Command history:");
    for line in history.get_all() {
        println!("  {}", line);
    }

    Ok(())
}
