//! `scales` command: list the scales of an instrument layout.

use clap::Args;

use crate::commands::common::Layout;
use crate::error::CliError;

/// Arguments for the `scales` command.
#[derive(Debug, Args)]
pub struct ScalesArgs {
    /// Instrument layout to describe
    #[arg(long, value_enum, default_value = "mannheim")]
    pub layout: Layout,
}

/// Run the `scales` command.
pub fn run(args: ScalesArgs) -> Result<(), CliError> {
    let instrument = args.layout.instrument();

    println!("{} ({} scales)", instrument.name(), instrument.scale_count());
    println!();

    let mut current_side = None;
    for definition in instrument.definitions() {
        if current_side != Some(definition.side) {
            current_side = Some(definition.side);
            println!("[{}]", definition.side);
        }
        println!(
            "  {:<4} {:<14} {}",
            definition.name,
            definition.component.as_str(),
            definition.formula
        );
    }

    Ok(())
}
