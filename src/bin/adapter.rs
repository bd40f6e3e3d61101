use anyhow::Result;
use clap::Parser;
use coffee_patterns::cli::{self, DemoArgs};
use coffee_patterns::structural::adapter::{AmericanSocket, EuropeanPlug, PlugAdapter};
use colored::Colorize;

#[derive(Parser)]
#[command(name = "adapter", about = "Adapter: a European plug behind an American socket")]
struct Cli {
    #[command(flatten)]
    common: DemoArgs,
}

fn use_socket(socket: &dyn AmericanSocket) {
    match socket.provide_power() {
        Ok(lines) => lines.iter().for_each(|line| println!("{line}")),
        Err(err) => println!("{} {err}", "✗".red()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::bootstrap(&cli.common)?;

    println!("{}", "Using European plug in an American socket.".bold());
    let adapter = PlugAdapter::with_plug(EuropeanPlug);
    use_socket(&adapter);

    println!("\n{}", "Trying to use adapter with no plug:".bold());
    let empty = PlugAdapter::new(None);
    use_socket(&empty);

    Ok(())
}
