use anyhow::Result;
use clap::Parser;
use coffee_patterns::cli::{self, DemoArgs};
use coffee_patterns::structural::decorator::{Coffee, Milk, SimpleCoffee, Sugar, WhippedCream};

#[derive(Parser)]
#[command(name = "decorator", about = "Decorator: coffee add-ons stacking description and cost")]
struct Cli {
    #[command(flatten)]
    common: DemoArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::bootstrap(&cli.common)?;

    let mut coffee: Box<dyn Coffee> = Box::new(SimpleCoffee);
    coffee = Milk::wrap(coffee);
    coffee = Sugar::wrap(coffee);
    coffee = WhippedCream::wrap(coffee);

    println!("Description: {}", coffee.description());
    println!("Total Cost: ${:.2}", coffee.cost());

    Ok(())
}
