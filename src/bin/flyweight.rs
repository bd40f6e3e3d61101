use anyhow::Result;
use clap::Parser;
use coffee_patterns::cli::{self, DemoArgs};
use coffee_patterns::structural::flyweight::{CarFlyweightFactory, CarKey, Lookup};
use colored::Colorize;

#[derive(Parser)]
#[command(name = "flyweight", about = "Flyweight: shared car data keyed by intrinsic state")]
struct Cli {
    #[command(flatten)]
    common: DemoArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::bootstrap(&cli.common)?;

    let mut factory = CarFlyweightFactory::new();
    let requests = [
        ("Model S", "Tesla", "Electric", "TS1234", "Alice"),
        ("Model S", "Tesla", "Electric", "TS5678", "Bob"),
        ("Mustang", "Ford", "Gasoline", "FD1234", "Charlie"),
    ];

    for (model, brand, engine, registration, owner) in requests {
        let key = CarKey::new(model, brand, engine);
        let (car, lookup) = factory.lookup(model, brand, engine);
        match lookup {
            Lookup::Created => println!("{} {key}", "Creating new CarFlyweight:".yellow()),
            Lookup::Reused => println!("{} {key}", "Reusing existing CarFlyweight:".green()),
        }
        println!("{}", car.car_details(registration, owner));
    }

    println!("\n{} distinct flyweights for {} cars", factory.len(), requests.len());
    Ok(())
}
