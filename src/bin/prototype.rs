use anyhow::{bail, Result};
use clap::Parser;
use coffee_patterns::cli::{self, DemoArgs};
use coffee_patterns::creational::prototype::{CoffeeMachine, CupSize, PrototypeRegistry};
use colored::Colorize;

#[derive(Parser)]
#[command(name = "prototype", about = "Prototype: machines cloned from a registry of exemplars")]
struct Cli {
    #[command(flatten)]
    common: DemoArgs,
}

fn print_brew(machine: &CoffeeMachine) {
    for line in machine.brew() {
        println!("{line}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::bootstrap(&cli.common)?;

    let registry = PrototypeRegistry::new();
    let (Some(mut simple), Some(mut espresso), Some(mut advanced)) = (
        registry.create_machine(0),
        registry.create_machine(1),
        registry.create_machine(2),
    ) else {
        bail!("Failed to create coffee machines.");
    };

    simple.set_cup_size(CupSize::Medium).set_milk(true).set_sugar(1);
    espresso.set_cup_size(CupSize::Small).set_milk(false).set_sugar(0);
    advanced.set_cup_size(CupSize::Large).set_milk(true).set_sugar(3);

    println!("{}", "=== Customised clones ===".bold());
    let machines = vec![simple, espresso, advanced];
    for machine in &machines {
        print_brew(machine);
    }

    println!("\n{}", "Cloned and customized SimpleCoffeeMachine:".bold());
    let mut cloned = machines[0].clone();
    cloned.set_cup_size(CupSize::Small).set_milk(false).set_sugar(0);
    print_brew(&cloned);

    println!("\n{}", "=== Invalid exemplar ===".bold());
    match registry.create_machine(registry.len()) {
        Some(machine) => print_brew(&machine),
        None => println!("{} Invalid machine type.", "✗".red()),
    }

    Ok(())
}
