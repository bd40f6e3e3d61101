//! Structural patterns: how plugs, remotes, trees, coffees and accounts are composed.

pub mod adapter;
pub mod bridge;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod flyweight;
pub mod proxy;
