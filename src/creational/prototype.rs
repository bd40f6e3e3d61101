//! Prototype: new machines are cloned from a registry of configured exemplars.
//!
//! Machines are plain values, so cloning hands back a fresh owned copy and
//! nothing needs to be freed by hand.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineKind {
    Simple,
    Espresso,
    Advanced,
}

impl MachineKind {
    fn brew_line(self) -> &'static str {
        match self {
            MachineKind::Simple => "Brewing coffee in a simple coffee machine.",
            MachineKind::Espresso => "Brewing espresso in an espresso machine.",
            MachineKind::Advanced => "Brewing coffee in an advanced coffee machine.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CupSize {
    Small = 1,
    Medium = 2,
    Large = 3,
}

impl fmt::Display for CupSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoffeeMachine {
    kind: MachineKind,
    name: String,
    cup_size: CupSize,
    milk: bool,
    sugar: u32,
}

impl CoffeeMachine {
    pub fn new(kind: MachineKind, name: impl Into<String>, cup_size: CupSize, milk: bool, sugar: u32) -> Self {
        CoffeeMachine {
            kind,
            name: name.into(),
            cup_size,
            milk,
            sugar,
        }
    }

    pub fn simple() -> Self {
        Self::new(MachineKind::Simple, "Simple", CupSize::Small, false, 0)
    }

    pub fn espresso() -> Self {
        Self::new(MachineKind::Espresso, "Espresso", CupSize::Small, false, 0)
    }

    pub fn advanced() -> Self {
        Self::new(MachineKind::Advanced, "Advanced", CupSize::Medium, true, 2)
    }

    pub fn kind(&self) -> MachineKind {
        self.kind
    }

    pub fn cup_size(&self) -> CupSize {
        self.cup_size
    }

    pub fn milk(&self) -> bool {
        self.milk
    }

    pub fn sugar(&self) -> u32 {
        self.sugar
    }

    pub fn set_cup_size(&mut self, size: CupSize) -> &mut Self {
        self.cup_size = size;
        self
    }

    pub fn set_milk(&mut self, milk: bool) -> &mut Self {
        self.milk = milk;
        self
    }

    pub fn set_sugar(&mut self, sugar: u32) -> &mut Self {
        self.sugar = sugar;
        self
    }

    pub fn display(&self) -> String {
        format!(
            "Name: {}, Cup Size: {}, Milk: {}, Sugar: {}",
            self.name,
            self.cup_size,
            if self.milk { "Yes" } else { "No" },
            self.sugar
        )
    }

    /// The brew line followed by the machine's current settings.
    pub fn brew(&self) -> Vec<String> {
        vec![self.kind.brew_line().to_string(), self.display()]
    }
}

// =============================================================================
// Registry of exemplars
// =============================================================================

pub struct PrototypeRegistry {
    prototypes: Vec<CoffeeMachine>,
}

impl Default for PrototypeRegistry {
    fn default() -> Self {
        Self {
            prototypes: vec![
                CoffeeMachine::simple(),
                CoffeeMachine::espresso(),
                CoffeeMachine::advanced(),
            ],
        }
    }
}

impl PrototypeRegistry {
    /// Registry holding the simple, espresso and advanced exemplars (indices 0, 1, 2).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn empty() -> Self {
        Self {
            prototypes: Vec::new(),
        }
    }

    /// Adds an exemplar and returns its index.
    pub fn register(&mut self, prototype: CoffeeMachine) -> usize {
        self.prototypes.push(prototype);
        self.prototypes.len() - 1
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    /// Clones the exemplar at `index`, or `None` when there is none.
    pub fn create_machine(&self, index: usize) -> Option<CoffeeMachine> {
        match self.prototypes.get(index) {
            Some(prototype) => {
                tracing::debug!(index, kind = ?prototype.kind(), "cloning prototype");
                Some(prototype.clone())
            }
            None => {
                tracing::warn!(index, available = self.prototypes.len(), "invalid machine type");
                None
            }
        }
    }
}
