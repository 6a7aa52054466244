use anyhow::Result;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Relative root keeps logged paths relative to where the tool was run
    imgnorm::cleanup().root(".").run()?;

    info!("Normalization complete.");
    info!("Run `git status` to review changes, then commit and push.");
    Ok(())
}
