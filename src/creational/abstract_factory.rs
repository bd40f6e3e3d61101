//! Abstract Factory: one factory hands out a machine and a coffee from the
//! same family, so the pair always matches.

use crate::error::SelectionError;
use std::fmt;

// =============================================================================
// Abstract products
// =============================================================================

pub trait CoffeeMachine {
    fn brew(&self) -> String;
}

pub trait Coffee {
    fn prepare(&self) -> String;
}

pub struct SimpleCoffeeMachine;

impl CoffeeMachine for SimpleCoffeeMachine {
    fn brew(&self) -> String {
        "Brewing coffee in a simple coffee machine.".to_string()
    }
}

pub struct EspressoMachine;

impl CoffeeMachine for EspressoMachine {
    fn brew(&self) -> String {
        "Brewing espresso in an espresso machine.".to_string()
    }
}

pub struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn prepare(&self) -> String {
        "Preparing simple coffee.".to_string()
    }
}

pub struct Espresso;

impl Coffee for Espresso {
    fn prepare(&self) -> String {
        "Preparing espresso.".to_string()
    }
}

// =============================================================================
// Factories
// =============================================================================

pub trait CoffeeFactory {
    fn create_coffee_machine(&self) -> Box<dyn CoffeeMachine>;
    fn create_coffee(&self) -> Box<dyn Coffee>;
}

pub struct SimpleCoffeeFactory;

impl CoffeeFactory for SimpleCoffeeFactory {
    fn create_coffee_machine(&self) -> Box<dyn CoffeeMachine> {
        Box::new(SimpleCoffeeMachine)
    }

    fn create_coffee(&self) -> Box<dyn Coffee> {
        Box::new(SimpleCoffee)
    }
}

pub struct EspressoFactory;

impl CoffeeFactory for EspressoFactory {
    fn create_coffee_machine(&self) -> Box<dyn CoffeeMachine> {
        Box::new(EspressoMachine)
    }

    fn create_coffee(&self) -> Box<dyn Coffee> {
        Box::new(Espresso)
    }
}

// =============================================================================
// Family selection
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoffeeFamily {
    Simple,
    Espresso,
}

impl CoffeeFamily {
    pub const PROMPT: &'static str = "Enter coffee type (simple:1 / espresso:2): ";

    /// Parses the first whitespace-separated token of a line such as `" 2 extra\n"`.
    pub fn parse(input: &str) -> Result<Self, SelectionError> {
        let token = input.split_whitespace().next().unwrap_or("");
        let value: i64 = token
            .parse()
            .map_err(|_| SelectionError::not_a_number(token))?;
        Self::try_from(value)
    }
}

impl TryFrom<i64> for CoffeeFamily {
    type Error = SelectionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(CoffeeFamily::Simple),
            2 => Ok(CoffeeFamily::Espresso),
            other => Err(SelectionError::out_of_range(other, "1 (simple) or 2 (espresso)")),
        }
    }
}

impl fmt::Display for CoffeeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoffeeFamily::Simple => write!(f, "simple"),
            CoffeeFamily::Espresso => write!(f, "espresso"),
        }
    }
}

pub fn factory_for(family: CoffeeFamily) -> Box<dyn CoffeeFactory> {
    tracing::debug!(%family, "selecting coffee factory");
    match family {
        CoffeeFamily::Simple => Box::new(SimpleCoffeeFactory),
        CoffeeFamily::Espresso => Box::new(EspressoFactory),
    }
}

/// Creates both products from `factory` and returns what they report, machine first.
pub fn serve(factory: &dyn CoffeeFactory) -> Vec<String> {
    let machine = factory.create_coffee_machine();
    let coffee = factory.create_coffee();
    vec![machine.brew(), coffee.prepare()]
}
