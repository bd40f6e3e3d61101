//! Decorator: add-ons wrap a coffee, each appending to its description and cost.

pub trait Coffee {
    fn description(&self) -> String;
    fn cost(&self) -> f64;
}

pub struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn description(&self) -> String {
        "Simple Coffee".to_string()
    }

    fn cost(&self) -> f64 {
        2.0
    }
}

/// Generates a wrapper that adds a fixed label and price to the coffee it decorates.
macro_rules! coffee_decorator {
    ($name:ident, $label:literal, $price:expr) => {
        pub struct $name {
            inner: Box<dyn Coffee>,
        }

        impl $name {
            pub const PRICE: f64 = $price;

            pub fn new(inner: Box<dyn Coffee>) -> Self {
                Self { inner }
            }

            pub fn wrap(inner: Box<dyn Coffee>) -> Box<dyn Coffee> {
                Box::new(Self::new(inner))
            }
        }

        impl Coffee for $name {
            fn description(&self) -> String {
                format!("{}, {}", self.inner.description(), $label)
            }

            fn cost(&self) -> f64 {
                self.inner.cost() + Self::PRICE
            }
        }
    };
}

coffee_decorator!(Milk, "Milk", 0.5);
coffee_decorator!(Sugar, "Sugar", 0.2);
coffee_decorator!(WhippedCream, "Whipped Cream", 1.0);

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_plain_coffee() {
        let coffee = SimpleCoffee;
        assert_eq!(coffee.description(), "Simple Coffee");
        assert_eq!(coffee.cost(), 2.0);
    }

    #[test]
    fn test_full_stack() {
        let mut coffee: Box<dyn Coffee> = Box::new(SimpleCoffee);
        coffee = Milk::wrap(coffee);
        coffee = Sugar::wrap(coffee);
        coffee = WhippedCream::wrap(coffee);

        assert_eq!(coffee.description(), "Simple Coffee, Milk, Sugar, Whipped Cream");
        assert!((coffee.cost() - 3.7).abs() < EPSILON);
    }

    #[test]
    fn test_cost_is_base_plus_increments_in_order() {
        let base: Box<dyn Coffee> = Box::new(SimpleCoffee);
        let once = Sugar::wrap(base);
        assert!((once.cost() - (2.0 + Sugar::PRICE)).abs() < EPSILON);

        let twice = Milk::wrap(once);
        assert!((twice.cost() - (2.0 + Sugar::PRICE + Milk::PRICE)).abs() < EPSILON);

        let thrice = Sugar::wrap(twice);
        assert!((thrice.cost() - (2.0 + 2.0 * Sugar::PRICE + Milk::PRICE)).abs() < EPSILON);
        assert_eq!(thrice.description(), "Simple Coffee, Sugar, Milk, Sugar");
    }

    #[test]
    fn test_decorators_compose_in_any_order() {
        let a = WhippedCream::wrap(Milk::wrap(Box::new(SimpleCoffee)));
        let b = Milk::wrap(WhippedCream::wrap(Box::new(SimpleCoffee)));
        assert!((a.cost() - b.cost()).abs() < EPSILON);
        assert_ne!(a.description(), b.description());
    }
}
