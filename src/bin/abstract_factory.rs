use anyhow::{Context, Result};
use clap::Parser;
use coffee_patterns::cli::{self, DemoArgs};
use coffee_patterns::creational::abstract_factory::{factory_for, serve, CoffeeFamily};
use coffee_patterns::SelectionError;
use colored::Colorize;
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "abstract_factory", about = "Abstract Factory: matching machine and coffee families")]
struct Cli {
    #[command(flatten)]
    common: DemoArgs,

    /// Coffee family (1 = simple, 2 = espresso); prompts when omitted
    #[arg(long)]
    choice: Option<i64>,
}

fn read_choice() -> Result<Result<CoffeeFamily, SelectionError>> {
    print!("{}", CoffeeFamily::PROMPT);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read coffee type from stdin")?;
    Ok(CoffeeFamily::parse(&line))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    cli::bootstrap(&cli.common)?;

    let selection = match cli.choice {
        Some(value) => CoffeeFamily::try_from(value),
        None => read_choice()?,
    };

    let family = match selection {
        Ok(family) => family,
        Err(err) => {
            println!("{} {}", "✗".red(), err);
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("{}", format!("=== {family} coffee factory ===").bold());
    let factory = factory_for(family);
    for line in serve(factory.as_ref()) {
        println!("{line}");
    }
    Ok(ExitCode::SUCCESS)
}
