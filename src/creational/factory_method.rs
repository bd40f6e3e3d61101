//! Factory Method: a single creation function that switches on an integer tag.

pub trait CoffeeMachine {
    fn brew(&self) -> String;
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

pub struct CappuccinoMachine;

impl CoffeeMachine for CappuccinoMachine {
    fn brew(&self) -> String {
        "Brewing cappuccino in a cappuccino machine.".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineType {
    Simple,
    Espresso,
    Cappuccino,
}

impl MachineType {
    pub const ALL: [MachineType; 3] = [
        MachineType::Simple,
        MachineType::Espresso,
        MachineType::Cappuccino,
    ];

    pub fn from_tag(tag: i64) -> Option<Self> {
        match tag {
            1 => Some(MachineType::Simple),
            2 => Some(MachineType::Espresso),
            3 => Some(MachineType::Cappuccino),
            _ => None,
        }
    }

    pub fn tag(self) -> i64 {
        match self {
            MachineType::Simple => 1,
            MachineType::Espresso => 2,
            MachineType::Cappuccino => 3,
        }
    }

    pub fn build(self) -> Box<dyn CoffeeMachine> {
        match self {
            MachineType::Simple => Box::new(SimpleCoffeeMachine),
            MachineType::Espresso => Box::new(EspressoMachine),
            MachineType::Cappuccino => Box::new(CappuccinoMachine),
        }
    }
}

/// Returns `None` for an unknown tag; callers check before brewing.
pub fn create_machine(tag: i64) -> Option<Box<dyn CoffeeMachine>> {
    match MachineType::from_tag(tag) {
        Some(machine_type) => {
            tracing::debug!(?machine_type, "creating coffee machine");
            Some(machine_type.build())
        }
        None => {
            tracing::warn!(tag, "unknown coffee machine type");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_create_machines() {
        let brews: Vec<String> = [1, 2, 3]
            .into_iter()
            .filter_map(create_machine)
            .map(|machine| machine.brew())
            .collect();

        assert_eq!(
            brews,
            vec![
                "Brewing coffee in a simple coffee machine.",
                "Brewing espresso in an espresso machine.",
                "Brewing cappuccino in a cappuccino machine.",
            ]
        );
    }

    #[test]
    fn test_unknown_tag_returns_none() {
        assert!(create_machine(99).is_none());
        assert!(create_machine(0).is_none());
        assert!(create_machine(-1).is_none());
    }

    #[test]
    fn test_tag_round_trip() {
        for machine_type in MachineType::ALL {
            assert_eq!(MachineType::from_tag(machine_type.tag()), Some(machine_type));
        }
    }
}
