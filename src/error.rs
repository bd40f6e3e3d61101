use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Selection errors (Abstract Factory, Factory Method, Prototype)
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error("Invalid input: '{input}' is not a number")]
    NotANumber { input: String },

    #[error("Invalid choice: {value} (expected one of {expected})")]
    OutOfRange { value: i64, expected: String },
}

impl SelectionError {
    pub fn not_a_number(input: impl Into<String>) -> Self {
        Self::NotANumber {
            input: input.into(),
        }
    }

    pub fn out_of_range(value: i64, expected: impl Into<String>) -> Self {
        Self::OutOfRange {
            value,
            expected: expected.into(),
        }
    }
}

// =============================================================================
// Builder validation
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("Requestor name cannot be empty.")]
    EmptyRequestor,

    #[error("Cost cannot be negative (got {cost}).")]
    NegativeCost { cost: f64 },
}

// =============================================================================
// Adapter
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdapterError {
    #[error("No plug connected to adapter!")]
    NoPlug,
}

// =============================================================================
// Composite tree
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    #[error("Unknown node id {id}")]
    UnknownNode { id: usize },

    #[error("'{name}' is a file and cannot hold children")]
    NotADirectory { name: String },

    #[error("'{name}' already belongs to '{parent}'")]
    AlreadyAttached { name: String, parent: String },

    #[error("Cannot add '{name}' inside itself")]
    Cycle { name: String },
}

impl TreeError {
    pub fn not_a_directory(name: impl Into<String>) -> Self {
        Self::NotADirectory { name: name.into() }
    }

    pub fn already_attached(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self::AlreadyAttached {
            name: name.into(),
            parent: parent.into(),
        }
    }
}

// =============================================================================
// Proxy / bank account
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccountError {
    #[error("Authentication failed. Cannot {operation}.")]
    AuthenticationFailed { operation: &'static str },

    #[error("Deposit amount must be positive.")]
    NonPositiveDeposit { amount: f64 },

    #[error("Withdrawal amount must be positive and less than or equal to the balance.")]
    InvalidWithdrawal { amount: f64, balance: f64 },
}

// =============================================================================
// Configuration
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
