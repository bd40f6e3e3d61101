//! Builder: a coffee order assembled step by step, validated on `build()`.
//!
//! The builder is mutable and reusable: setters take `&mut self` so a single
//! builder can be reset and used for several orders.

use crate::error::BuildError;

#[derive(Debug, Clone, PartialEq)]
pub struct Coffee {
    requestor_name: String,
    is_hot: bool,
    has_milk: bool,
    has_sugar: bool,
    cost: f64,
}

impl Coffee {
    fn new(requestor_name: impl Into<String>) -> Self {
        Coffee {
            requestor_name: requestor_name.into(),
            is_hot: false,
            has_milk: false,
            has_sugar: false,
            cost: 0.0,
        }
    }

    // Entry point to the builder.
    pub fn create(requestor_name: impl Into<String>) -> CoffeeBuilder {
        CoffeeBuilder::new(requestor_name)
    }

    pub fn requestor_name(&self) -> &str {
        &self.requestor_name
    }

    pub fn is_hot(&self) -> bool {
        self.is_hot
    }

    pub fn has_milk(&self) -> bool {
        self.has_milk
    }

    pub fn has_sugar(&self) -> bool {
        self.has_sugar
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn description(&self) -> String {
        format!(
            "{} coffee {} milk and {} for {} (${:.2})",
            if self.is_hot { "Hot" } else { "Cold" },
            if self.has_milk { "with" } else { "without" },
            if self.has_sugar { "sugar" } else { "no sugar" },
            self.requestor_name,
            self.cost
        )
    }
}

#[derive(Debug, Clone)]
pub struct CoffeeBuilder {
    coffee: Coffee,
}

impl CoffeeBuilder {
    pub fn new(requestor_name: impl Into<String>) -> Self {
        CoffeeBuilder {
            coffee: Coffee::new(requestor_name),
        }
    }

    /// Starts over with a fresh order for `requestor_name`.
    pub fn reset(&mut self, requestor_name: impl Into<String>) -> &mut Self {
        self.coffee = Coffee::new(requestor_name);
        self
    }

    pub fn requestor_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.coffee.requestor_name = name.into();
        self
    }

    pub fn make_hot(&mut self) -> &mut Self {
        self.coffee.is_hot = true;
        self
    }

    pub fn make_cold(&mut self) -> &mut Self {
        self.coffee.is_hot = false;
        self
    }

    pub fn add_milk(&mut self) -> &mut Self {
        self.coffee.has_milk = true;
        self
    }

    pub fn remove_milk(&mut self) -> &mut Self {
        self.coffee.has_milk = false;
        self
    }

    pub fn add_sugar(&mut self) -> &mut Self {
        self.coffee.has_sugar = true;
        self
    }

    pub fn remove_sugar(&mut self) -> &mut Self {
        self.coffee.has_sugar = false;
        self
    }

    pub fn costs(&mut self, cost: f64) -> &mut Self {
        self.coffee.cost = cost;
        self
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        if self.coffee.requestor_name.is_empty() {
            return Err(BuildError::EmptyRequestor);
        }
        if self.coffee.cost.is_nan() || self.coffee.cost < 0.0 {
            return Err(BuildError::NegativeCost {
                cost: self.coffee.cost,
            });
        }
        Ok(())
    }

    /// Validates and returns a copy of the current order; the builder stays usable.
    pub fn build(&self) -> Result<Coffee, BuildError> {
        self.validate()?;
        tracing::debug!(requestor = %self.coffee.requestor_name, cost = self.coffee.cost, "coffee built");
        Ok(self.coffee.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chained_build() {
        let coffee = Coffee::create("John Doe")
            .make_hot()
            .add_milk()
            .costs(5.0)
            .build()
            .unwrap();

        assert!(coffee.is_hot());
        assert!(coffee.has_milk());
        assert!(!coffee.has_sugar());
        assert_eq!(coffee.cost(), 5.0);
        assert_eq!(
            coffee.description(),
            "Hot coffee with milk and no sugar for John Doe ($5.00)"
        );
    }

    #[test]
    fn test_defaults_are_cold_and_plain() {
        let coffee = Coffee::create("Kevin Smith").build().unwrap();
        assert_eq!(
            coffee.description(),
            "Cold coffee without milk and no sugar for Kevin Smith ($0.00)"
        );
    }

    #[test]
    fn test_empty_requestor_fails() {
        let result = Coffee::create("").make_hot().costs(3.0).build();
        assert_eq!(result, Err(BuildError::EmptyRequestor));

        let result = Coffee::create("Alice").requestor_name("").build();
        assert_eq!(result, Err(BuildError::EmptyRequestor));
    }

    #[test]
    fn test_whitespace_requestor_is_not_empty() {
        let coffee = Coffee::create("   ").build().unwrap();
        assert_eq!(coffee.requestor_name(), "   ");
    }

    #[test]
    fn test_negative_cost_fails() {
        let result = Coffee::create("Alice").costs(-1.0).build();
        assert!(matches!(result, Err(BuildError::NegativeCost { .. })));
    }

    #[test]
    fn test_nan_cost_fails() {
        let result = Coffee::create("Alice").costs(f64::NAN).build();
        assert!(matches!(result, Err(BuildError::NegativeCost { .. })));
    }

    #[test]
    fn test_last_write_wins() {
        let coffee = Coffee::create("Alice")
            .make_hot()
            .make_cold()
            .add_milk()
            .remove_milk()
            .remove_sugar()
            .add_sugar()
            .costs(1.0)
            .costs(4.5)
            .build()
            .unwrap();

        assert!(!coffee.is_hot());
        assert!(!coffee.has_milk());
        assert!(coffee.has_sugar());
        assert_eq!(coffee.cost(), 4.5);
    }

    #[test]
    fn test_builder_reuse_after_reset() {
        let mut builder = Coffee::create("Kevin Smith");
        let first = builder.make_cold().remove_sugar().costs(4.0).build().unwrap();

        builder
            .reset("Alice")
            .make_hot()
            .add_milk()
            .add_sugar()
            .costs(6.0)
            .requestor_name("Alice Smith");
        let second = builder.build().unwrap();

        assert_eq!(first.requestor_name(), "Kevin Smith");
        assert_eq!(second.requestor_name(), "Alice Smith");
        assert!(second.is_hot() && second.has_milk() && second.has_sugar());
        assert_eq!(second.cost(), 6.0);
    }

    #[test]
    fn test_failed_build_leaves_builder_usable() {
        let mut builder = Coffee::create("Bob");
        builder.costs(-2.0);
        assert!(builder.build().is_err());
        builder.costs(2.0);
        assert!(builder.build().is_ok());
    }
}
