//! Basic colored logger usage example
//!
//! Demonstrates banner blocks, caller traces, color maps, and the factory.
//!
//! Run with: cargo run --example basic_usage

use log_druid::prelude::*;
use log_druid::{info, warning};

#[inline(never)]
fn charge(logger: &ColoredLogger, amount: u32) {
    logger.info(format!("charging {} cents", amount));
}

#[inline(never)]
fn checkout(logger: &ColoredLogger) {
    charge(logger, 1250);
}

fn main() -> Result<()> {
    println!("=== Log Druid - Basic Usage Example ===\n");

    // Every level with caller frames
    println!("1. Logging at different levels:");
    let logger = ColoredLogger::builder()
        .name("demo")
        .level(LogLevel::Debug)
        .app_name("shop")
        .build();
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warning("This is a warning message");
    logger.error("This is an error message");
    logger.critical("This is a critical message");

    println!("\n2. Caller trace through nested calls:");
    checkout(&logger);

    println!("\n3. Inspection off, custom pattern:");
    let plain = ColoredLogger::builder()
        .name("demo.plain")
        .inspect_mode(false)
        .pattern('=', 40)
        .build();
    info!(plain, "Processing {} items", 100);
    warning!(plain, "Retry attempt {} of {}", 3, 5);

    println!("\n4. Replacing the color map:");
    plain.set_color_map(
        ColorMap::empty()
            .with_color(LogLevel::Info, colored::Color::Cyan)
            .with_color(LogLevel::Warning, colored::Color::Blue),
    );
    plain.info("Info is now cyan");
    plain.error("Error has no mapping and falls back to gray");

    println!("\n5. Loggers from a factory:");
    let factory = LoggerFactory::new(Some(LogLevel::Info), Some("platform".to_string()), false);
    let api = factory.get_logger("api");
    let jobs = factory.get_logger_with("jobs", LoggerOverrides::new().parent_name("scheduler"));
    api.info("request served");
    jobs.info_with_context("job finished", LogContext::new().with_field("job_id", 42));

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");
    Ok(())
}
