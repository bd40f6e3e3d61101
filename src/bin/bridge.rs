use anyhow::Result;
use clap::Parser;
use coffee_patterns::cli::{self, DemoArgs};
use coffee_patterns::structural::bridge::{AdvancedRemote, BasicRemote, Radio, RemoteControl, Tv};
use colored::Colorize;
use std::rc::Rc;

#[derive(Parser)]
#[command(name = "bridge", about = "Bridge: remotes and devices varying independently")]
struct Cli {
    #[command(flatten)]
    common: DemoArgs,
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::bootstrap(&cli.common)?;

    let tv = Tv::shared();
    let radio = Radio::shared();

    println!("{}", "Using Basic Remote for TV:".bold());
    let basic_for_tv = BasicRemote::new(Rc::clone(&tv));
    print_lines(basic_for_tv.press_power_button());

    println!("{}", "Using Advanced Remote for Radio:".bold());
    let advanced_for_radio = AdvancedRemote::new(Rc::clone(&radio));
    print_lines(advanced_for_radio.press_power_button());
    print_lines(advanced_for_radio.press_power_off_button());

    println!("{}", "Using Advanced Remote for TV:".bold());
    let advanced_for_tv = AdvancedRemote::new(Rc::clone(&tv));
    print_lines(advanced_for_tv.press_power_button());
    print_lines(advanced_for_tv.press_power_off_button());

    Ok(())
}
