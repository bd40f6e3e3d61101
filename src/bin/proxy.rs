use anyhow::Result;
use clap::Parser;
use coffee_patterns::cli::{self, DemoArgs};
use coffee_patterns::structural::proxy::{BankAccount, BankAccountProxy};
use coffee_patterns::AccountError;
use colored::Colorize;

#[derive(Parser)]
#[command(name = "proxy", about = "Proxy: a PIN-gated bank account")]
struct Cli {
    #[command(flatten)]
    common: DemoArgs,
}

fn report(action: &str, result: Result<f64, AccountError>) {
    match result {
        Ok(balance) => println!("{action}, New Balance: {balance}"),
        Err(err) => println!("{} {err}", "✗".red()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli::bootstrap(&cli.common)?;
    let pin = settings.bank.pin.as_str();

    let mut account = BankAccountProxy::new(settings.bank.initial_balance, pin);

    report("Deposited: 50", account.deposit(50.0, pin));
    println!("Current Balance: {}", account.balance(pin)?);

    report("Withdrew: 30", account.withdraw(30.0, pin));
    println!("Current Balance: {}", account.balance(pin)?);

    report("Withdrew: 150", account.withdraw(150.0, pin));

    println!("{}", "Attempting to use the account with the wrong pin:".bold());
    let wrong_pin = format!("{pin}-wrong");
    report("Deposited: 20", account.deposit(20.0, &wrong_pin));
    match account.balance(&wrong_pin) {
        Ok(balance) => println!("Balance with wrong pin: {balance}"),
        Err(err) => println!("{} {err}", "✗".red()),
    }
    println!("Balance with correct pin: {}", account.balance(pin)?);

    Ok(())
}
