use anyhow::Result;
use clap::Parser;
use coffee_patterns::cli::{self, DemoArgs};
use coffee_patterns::structural::facade::HomeTheaterFacade;
use colored::Colorize;

#[derive(Parser)]
#[command(name = "facade", about = "Facade: one home theater call sequencing four subsystems")]
struct Cli {
    #[command(flatten)]
    common: DemoArgs,

    /// Movie to play; overrides the configured one
    #[arg(long)]
    movie: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli::bootstrap(&cli.common)?;
    let movie = cli.movie.unwrap_or(settings.theater.movie);

    let mut home_theater = HomeTheaterFacade::new(settings.theater.volume);

    for line in home_theater.watch_movie(&movie) {
        println!("{line}");
    }
    println!("{}", "Enjoy the movie!".green());

    for line in home_theater.end_movie() {
        println!("{line}");
    }
    println!("{}", "Movie ended. Home theater is now off.".green());

    Ok(())
}
