use anyhow::Result;
use dotenv::dotenv;

use notification_container::config::Config;
use notification_container::services::demo;

fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::from_env();
    env_logger::Builder::new()
        .filter_level(config.level_filter())
        .parse_env("RUST_LOG")
        .init();
    if let Err(e) = config.parse_level() {
        log::warn!("{:#}, falling back to warn", e);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let containers = demo::run(&mut out)?;

    log::debug!(
        "Sorted containers hold {} SMS, {} Email, {} Push notifications",
        containers.sms.len(),
        containers.email.len(),
        containers.push.len()
    );
    Ok(())
}
