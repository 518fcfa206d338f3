//! `read` command: one-shot readout at a cursor position.

use std::sync::Arc;

use clap::Args;
use slipstick::{CursorReadings, InstrumentProvider, SchedulerConfig, UpdateScheduler};

use crate::commands::common::{validate_position, validate_width, Layout};
use crate::error::CliError;

/// Arguments for the `read` command.
#[derive(Debug, Args)]
pub struct ReadArgs {
    /// Hairline position as a fraction of the scale width
    #[arg(long, default_value_t = 0.5)]
    pub position: f64,

    /// Instrument layout to read
    #[arg(long, value_enum, default_value = "duplex")]
    pub layout: Layout,

    /// Rendered scale width in pixels
    #[arg(long, default_value_t = 1080.0)]
    pub width: f64,

    /// Slide displacement in pixels, signed
    #[arg(long, default_value_t = 0.0)]
    pub slide: f64,

    /// Emit the snapshot as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Run the `read` command.
pub fn run(args: ReadArgs) -> Result<(), CliError> {
    let position = validate_position(args.position)?;
    let width = validate_width(args.width)?;

    let provider = Arc::new(InstrumentProvider::new(args.layout.instrument(), width));
    provider.set_slide_offset(args.slide);

    let config = SchedulerConfig::default();
    // Convert the hairline fraction back to the raw left-edge coordinate
    let raw_left_px = position * width - config.cursor_width_px / 2.0;

    let mut scheduler = UpdateScheduler::with_config(provider, config);
    scheduler.position_changed(raw_left_px);

    if args.json {
        println!("{}", serde_json::to_string_pretty(scheduler.published())?);
    } else {
        print_table(scheduler.published());
    }

    Ok(())
}

/// Render a snapshot as an aligned table.
fn print_table(snapshot: &CursorReadings) {
    println!(
        "hairline at {:.4} ({} readings)",
        snapshot.cursor_position(),
        snapshot.len()
    );
    println!();

    for (label, readings) in [
        ("front", snapshot.front_readings()),
        ("back", snapshot.back_readings()),
    ] {
        if readings.is_empty() {
            continue;
        }
        println!("[{}]", label);
        for reading in readings {
            println!(
                "  {:<4} {:<14} {:>10}",
                reading.scale_name,
                reading.component.as_str(),
                reading.display_value
            );
        }
    }
}
