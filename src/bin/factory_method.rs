use anyhow::Result;
use clap::Parser;
use coffee_patterns::cli::{self, DemoArgs};
use coffee_patterns::creational::factory_method::create_machine;
use colored::Colorize;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "factory_method", about = "Factory Method: machines selected by an integer tag")]
struct Cli {
    #[command(flatten)]
    common: DemoArgs,

    /// Machine type to create (1 = simple, 2 = espresso, 3 = cappuccino); repeatable
    #[arg(long = "machine")]
    machines: Vec<i64>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    cli::bootstrap(&cli.common)?;

    // Without explicit tags, show the three known types plus an unknown one.
    let explicit = !cli.machines.is_empty();
    let tags = if explicit { cli.machines } else { vec![1, 2, 3, 99] };

    println!("{}", "=== Factory Method ===".bold());
    let mut all_created = true;
    for tag in tags {
        match create_machine(tag) {
            Some(machine) => println!("{}", machine.brew()),
            None => {
                all_created = false;
                println!("{} Unknown machine type ({tag}) could not be created.", "✗".red());
            }
        }
    }

    if explicit && !all_created {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
