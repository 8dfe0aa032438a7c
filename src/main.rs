use clap::Parser;
use config::{Args, Config};
use fresh_lens::main::{classifier_loader, FreshLens};
use fresh_lens::render::run_window;
use image_classifier::model_cache::ModelCache;
use logger::impl_console::LoggerConsole;
use std::sync::Arc;

mod classification;
mod config;
mod error;
mod fresh_lens;
mod freshness;
mod image_classifier;
mod logger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = Config::from(args);

    logger::init::init_tracing(&config).map_err(|e| e as Box<dyn std::error::Error>)?;

    let logger = Arc::new(LoggerConsole::new());

    let loader = classifier_loader(&config, logger.clone());

    let app = FreshLens::new(config, logger, ModelCache::new(), loader);

    run_window(app)?;

    Ok(())
}
