use anyhow::Result;
use tokio::sync::mpsc;
use tracing::info;

use odometer_core::{AppConfig, Counter, CounterConfig, ReelOutcome};
use odometer_tui::{App, Theme};

pub async fn run(
    config: &AppConfig,
    counter_config: &CounterConfig,
    from: u64,
    target: u64,
    plain: bool,
) -> Result<()> {
    let mut counter = Counter::from_config(counter_config);
    counter.update(from);

    if plain {
        return run_plain(counter, target).await;
    }

    let mut app = App::new(counter, Theme::default());
    app.quit_on_complete = true;
    app.reel_to(target);

    let app = super::run::run_app(app, config.ui.tick_rate_ms).await?;
    if let Some(msg) = &app.status_message {
        println!("{}", msg);
    } else {
        println!("Stopped at {}", app.counter.value());
    }
    Ok(())
}

/// Print every applied value on its own line
async fn run_plain(mut counter: Counter, target: u64) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    println!("{}", counter);
    counter.reel_to(target, move |outcome| {
        let _ = tx.send(outcome);
    })?;
    println!("{}", counter);

    while counter.is_reeling() {
        tokio::select! {
            _ = counter.tick() => println!("{}", counter),
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted at {}", counter.value());
                break;
            }
        }
    }

    let value = counter.value();
    // Dropping a reeling counter reports the run as aborted
    drop(counter);

    match rx.recv().await {
        Some(ReelOutcome::Completed) => println!("Reached {}", value),
        Some(ReelOutcome::Aborted) | None => println!("Aborted at {}", value),
    }
    Ok(())
}
