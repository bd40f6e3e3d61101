//! # Coffee-shop Design Patterns
//!
//! Each module is a small, self-contained take on one classic pattern. The
//! modules never print; they hand back values and transcripts, and the demo
//! binaries under `src/bin` turn those into console output.
//!
//! ## Patterns Covered
//!
//! 1. **Creational**
//!    - Abstract Factory: matching machine + coffee families
//!    - Builder: chainable coffee orders with validation
//!    - Factory Method: machines selected by an integer tag
//!    - Singleton: one coffee config store per application context
//!    - Prototype: machines cloned from a registry of exemplars
//!
//! 2. **Structural**
//!    - Adapter: a European plug behind an American socket
//!    - Bridge: remotes and devices varying independently
//!    - Composite: a directory/file tree
//!    - Decorator: coffee add-ons stacking description and cost
//!    - Facade: one home theater call sequencing four subsystems
//!    - Flyweight: shared car data keyed by intrinsic state
//!    - Proxy: a PIN-gated bank account
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin abstract_factory -- --choice 2
//! cargo run --bin builder
//! cargo run --bin factory_method
//! cargo run --bin singleton
//! cargo run --bin prototype
//!
//! cargo run --bin adapter
//! cargo run --bin bridge
//! cargo run --bin composite
//! cargo run --bin decorator
//! cargo run --bin facade -- --config patterns.example.toml
//! cargo run --bin flyweight
//! cargo run --bin proxy -- --verbose
//! ```

pub mod cli;
pub mod config;
pub mod creational;
pub mod error;
pub mod logging;
pub mod structural;

pub use config::Settings;
pub use error::{AccountError, AdapterError, BuildError, ConfigError, SelectionError, TreeError};
