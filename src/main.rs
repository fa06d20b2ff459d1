use anyhow::Context;
use skypulse::configuration::get_configuration;
use skypulse::logging::init_logging;
use skypulse::services::{run_on_interval, Extractor};
use tokio::sync::watch;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().context("Failed to read configuration")?;
    init_logging(&configuration.output.log_file).context("Failed to open the log file")?;

    let extractor = Extractor::new(configuration.source, configuration.output);

    let (stop_sender, stop_receiver) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = stop_sender.send(true);
        }
    });

    log::info!("Scheduler is running. Press Ctrl+C to stop.");
    println!("Scheduler is running. Press Ctrl+C to stop.");

    run_on_interval(
        configuration.schedule.interval(),
        stop_receiver,
        move || {
            let extractor = extractor.clone();
            async move {
                extractor.run_extraction().await;
            }
        },
    )
    .await;

    Ok(())
}
