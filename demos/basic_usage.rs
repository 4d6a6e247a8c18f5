//! Basic facade usage example
//!
//! Demonstrates the four severities, verbosity levels and switching the
//! output format at runtime.
//!
//! Run with: cargo run --example basic_usage

use rust_tracelog::prelude::*;
use rust_tracelog::{info, warning};

fn main() -> Result<()> {
    println!("=== Rust Tracelog - Basic Usage Example ===\n");

    let facade = LoggingFacade::builder()
        .escalation(Escalation::uniform(EscalationPolicy::LogOnly))
        .build();

    println!("1. NORMAL level, plain text (DEBUG is hidden):");
    facade.debug("This is a debug message\n");
    facade.info("This is an info message\n");
    facade.warning("This is a warning message\n");
    facade.error("This is an error message\n");

    println!("\n2. DEVEL level (DEBUG goes to stdout):");
    facade.update_level("DEVEL")?;
    facade.debug("Debug message (visible)\n");
    info!(facade, "Processing {} items\n", 100);

    println!("\n3. Storage formats:");
    for kind in ["TEXT STORAGE", "CSV STORAGE", "JSON STORAGE"] {
        facade.update_writer_kind(kind)?;
        warning!(facade, "written as {}", kind);
        eprintln!();
    }

    println!("\n4. Rejected configuration keeps the current one:");
    if let Err(err) = facade.update_level("LOUD") {
        println!("   {}", err);
    }
    println!("   level is still {}", facade.level());

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
