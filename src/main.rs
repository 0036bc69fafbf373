use anyhow::Result;
use log::error;
use schedule_entry::initialization::init;
use schedule_entry::worker::run;

fn main() -> Result<()> {
    // Load config and set up logging. If initialization fails, we can't even log.
    let config = init()?;

    // Build the entry, the actual time defaults to now
    if let Err(e) = run(&config, None) {
        error!("Run failed: {}", e);
        return Err(e)?;
    }

    Ok(())
}
