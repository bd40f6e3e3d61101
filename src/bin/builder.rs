use anyhow::Result;
use clap::Parser;
use coffee_patterns::cli::{self, DemoArgs};
use coffee_patterns::creational::builder::Coffee;
use colored::Colorize;

#[derive(Parser)]
#[command(name = "builder", about = "Builder: chainable coffee orders with validation")]
struct Cli {
    #[command(flatten)]
    common: DemoArgs,

    /// Finish with an order whose cost is negative, to show validation aborting the run
    #[arg(long)]
    fail: bool,
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn print_coffee(coffee: &Coffee) {
    println!("{}", coffee.description());
    println!("Is hot: {}", yes_no(coffee.is_hot()));
    println!("Has milk: {}", yes_no(coffee.has_milk()));
    println!("Has sugar: {}", yes_no(coffee.has_sugar()));
    println!("Cost: ${:.2}", coffee.cost());
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::bootstrap(&cli.common)?;

    println!("{}", "=== Hot coffee, built in one chain ===".bold());
    let coffee = Coffee::create("John Doe").make_hot().add_milk().costs(5.0).build()?;
    print_coffee(&coffee);

    println!("\n{}", "=== Cold coffee from a named builder ===".bold());
    let mut builder = Coffee::create("Kevin Smith");
    let cold = builder.make_cold().remove_sugar().costs(4.0).build()?;
    print_coffee(&cold);

    println!("\n{}", "=== Same builder, reset and renamed ===".bold());
    builder
        .reset("Alice")
        .make_hot()
        .add_milk()
        .add_sugar()
        .costs(6.0)
        .requestor_name("Alice Smith");
    println!("{}", builder.build()?.description());

    if cli.fail {
        println!("\n{}", "=== Invalid order ===".bold());
        // Propagates out of main and ends the process with a failure code.
        let invalid = Coffee::create("Bob").costs(-1.0).build()?;
        print_coffee(&invalid);
    }

    Ok(())
}
