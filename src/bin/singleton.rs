use anyhow::Result;
use clap::Parser;
use coffee_patterns::cli::{self, DemoArgs};
use coffee_patterns::creational::singleton::AppContext;
use colored::Colorize;
use std::ptr;

#[derive(Parser)]
#[command(name = "singleton", about = "Singleton: one coffee config store per application context")]
struct Cli {
    #[command(flatten)]
    common: DemoArgs,
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn print_state(context: &AppContext) {
    let rendered = context.coffee_config().render();
    if rendered.is_empty() {
        println!("{}", "(empty)".dimmed());
    } else {
        println!("{rendered}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::bootstrap(&cli.common)?;

    let context = AppContext::new();
    let config = context.coffee_config();
    let config2 = context.coffee_config();
    println!(
        "config and config2 are the same instance: {}",
        yes_no(ptr::eq(config, config2))
    );

    config.set_state("coffeeType", "Espresso");
    config.set_state("milk", "Almond");
    config.set_state("sugar", "Brown");

    println!("{}", "Current Coffee Config:".bold());
    print_state(&context);

    println!("Has milk: {}", yes_no(config.has_state("milk")));
    println!("Sugar: {}", config.get_state_or_default("sugar", "None"));
    println!("Coffee Type: {}", config.get_state("coffeeType"));

    let removed = config.remove_state("sugar").unwrap_or_default();
    println!("Removed sugar: {removed}");
    println!("{}", "After removing sugar:".bold());
    print_state(&context);

    config.clear_state();
    println!("{}", "After clearing all settings:".bold());
    print_state(&context);

    println!("Has milk after clear: {}", yes_no(config.has_state("milk")));
    println!("Milk (default): {}", config.get_state_or_default("milk", "None"));

    Ok(())
}
