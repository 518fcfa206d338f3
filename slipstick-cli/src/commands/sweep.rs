//! `sweep` command: simulate a drag and show the publish gating.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use clap::Args;
use slipstick::{InstrumentProvider, SchedulerConfig, Side, UpdateScheduler};

use crate::commands::common::{validate_position, validate_width, Layout};
use crate::error::CliError;

/// Arguments for the `sweep` command.
#[derive(Debug, Args)]
pub struct SweepArgs {
    /// Number of position events to simulate
    #[arg(long, default_value_t = 30)]
    pub steps: usize,

    /// Hairline start position, fraction of the scale width
    #[arg(long, default_value_t = 0.05)]
    pub from: f64,

    /// Hairline end position, fraction of the scale width
    #[arg(long, default_value_t = 0.95)]
    pub to: f64,

    /// Instrument layout to sweep
    #[arg(long, value_enum, default_value = "mannheim")]
    pub layout: Layout,

    /// Rendered scale width in pixels
    #[arg(long, default_value_t = 1080.0)]
    pub width: f64,

    /// Publish stride (1 disables throttling)
    #[arg(long, default_value_t = 3)]
    pub stride: u32,
}

/// Run the `sweep` command.
pub fn run(args: SweepArgs) -> Result<(), CliError> {
    let from = validate_position(args.from)?;
    let to = validate_position(args.to)?;
    let width = validate_width(args.width)?;
    if args.steps < 2 {
        return Err(CliError::InvalidArgument(
            "a sweep needs at least 2 steps".to_string(),
        ));
    }

    let provider = Arc::new(InstrumentProvider::new(args.layout.instrument(), width));
    let config = SchedulerConfig {
        publish_stride: args.stride,
        ..SchedulerConfig::default()
    };
    let cursor_width_px = config.cursor_width_px;
    let mut scheduler = UpdateScheduler::with_config(provider, config);

    let publish_count = Arc::new(AtomicUsize::new(0));
    let counter = publish_count.clone();
    scheduler.subscribe(move |snapshot| {
        counter.fetch_add(1, Ordering::SeqCst);
        let mut line = format!("pos {:.4} │", snapshot.cursor_position());
        for reading in snapshot.front_readings() {
            line.push_str(&format!(" {}={}", reading.scale_name, reading.display_value));
        }
        println!("{}", line);
    });

    for step in 0..args.steps {
        let fraction = from + (to - from) * step as f64 / (args.steps - 1) as f64;
        let raw_left_px = fraction * width - cursor_width_px / 2.0;
        scheduler.position_changed(raw_left_px);
    }

    let published = publish_count.load(Ordering::SeqCst);
    println!();
    println!(
        "{} events → {} publishes (stride {})",
        args.steps, published, args.stride
    );

    // The gate may be holding back the final snapshot; show where the
    // full-fidelity view ended up
    if let Some(reading) = scheduler.hot().reading_for("D", Side::Front) {
        println!("final D reading: {}", reading.display_value);
    }

    Ok(())
}
