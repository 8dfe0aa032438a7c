use crate::config::Config;
use crate::logger::timer::TimezoneTimer;
use tracing_subscriber::EnvFilter;

pub fn init_tracing(config: &Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(TimezoneTimer::new(config.logger_timezone))
        .with_target(false)
        .try_init()
}
