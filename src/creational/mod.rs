//! Creational patterns: how coffee machines, coffees and shared state come to exist.

pub mod abstract_factory;
pub mod builder;
pub mod factory_method;
pub mod prototype;
pub mod singleton;
