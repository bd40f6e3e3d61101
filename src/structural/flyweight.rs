//! Flyweight: cars share one object per (model, brand, engine type); the
//! registration number and owner are supplied per call.

use rustc_hash::FxHashMap;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, PartialEq)]
pub struct CarFlyweight {
    model: String,
    brand: String,
    engine_type: String,
}

impl CarFlyweight {
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn engine_type(&self) -> &str {
        &self.engine_type
    }

    /// Combines the shared state with the caller's registration and owner.
    pub fn car_details(&self, registration_number: &str, owner: &str) -> String {
        format!(
            "Car Details:\nModel: {}\nBrand: {}\nEngine Type: {}\nRegistration Number: {}\nOwner: {}",
            self.model, self.brand, self.engine_type, registration_number, owner
        )
    }
}

/// Structured so that e.g. ("A_B", "C") and ("A", "B_C") stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CarKey {
    model: String,
    brand: String,
    engine_type: String,
}

impl CarKey {
    pub fn new(model: &str, brand: &str, engine_type: &str) -> Self {
        Self {
            model: model.to_string(),
            brand: brand.to_string(),
            engine_type: engine_type.to_string(),
        }
    }
}

impl fmt::Display for CarKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.model, self.brand, self.engine_type)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Created,
    Reused,
}

#[derive(Debug, Default)]
pub struct CarFlyweightFactory {
    cars: FxHashMap<CarKey, Rc<CarFlyweight>>,
}

impl CarFlyweightFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_car_flyweight(&mut self, model: &str, brand: &str, engine_type: &str) -> Rc<CarFlyweight> {
        self.lookup(model, brand, engine_type).0
    }

    /// Like [`get_car_flyweight`](Self::get_car_flyweight), also reporting whether the
    /// flyweight was created by this call.
    pub fn lookup(&mut self, model: &str, brand: &str, engine_type: &str) -> (Rc<CarFlyweight>, Lookup) {
        let key = CarKey::new(model, brand, engine_type);
        if let Some(existing) = self.cars.get(&key) {
            tracing::debug!(%key, "reusing existing car flyweight");
            return (Rc::clone(existing), Lookup::Reused);
        }

        tracing::debug!(%key, "creating new car flyweight");
        let car = Rc::new(CarFlyweight {
            model: key.model.clone(),
            brand: key.brand.clone(),
            engine_type: key.engine_type.clone(),
        });
        self.cars.insert(key, Rc::clone(&car));
        (car, Lookup::Created)
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_state_shares_instance() {
        let mut factory = CarFlyweightFactory::new();
        let first = factory.get_car_flyweight("Model S", "Tesla", "Electric");
        let second = factory.get_car_flyweight("Model S", "Tesla", "Electric");

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(factory.len(), 1);
    }

    #[test]
    fn test_different_state_creates_new_instance() {
        let mut factory = CarFlyweightFactory::new();
        let tesla = factory.get_car_flyweight("Model S", "Tesla", "Electric");
        let mustang = factory.get_car_flyweight("Mustang", "Ford", "Gasoline");
        let tesla_gas = factory.get_car_flyweight("Model S", "Tesla", "Gasoline");

        assert!(!Rc::ptr_eq(&tesla, &mustang));
        assert!(!Rc::ptr_eq(&tesla, &tesla_gas));
        assert_eq!(factory.len(), 3);
    }

    #[test]
    fn test_lookup_reports_creation_then_reuse() {
        let mut factory = CarFlyweightFactory::new();
        let (_, first) = factory.lookup("Mustang", "Ford", "Gasoline");
        let (_, second) = factory.lookup("Mustang", "Ford", "Gasoline");
        assert_eq!(first, Lookup::Created);
        assert_eq!(second, Lookup::Reused);
    }

    #[test]
    fn test_underscores_do_not_collide() {
        let mut factory = CarFlyweightFactory::new();
        let a = factory.get_car_flyweight("A_B", "C", "D");
        let b = factory.get_car_flyweight("A", "B_C", "D");
        assert!(!Rc::ptr_eq(&a, &b));
        assert_eq!(CarKey::new("A_B", "C", "D").to_string(), "A_B_C_D");
    }

    #[test]
    fn test_extrinsic_state_is_per_call() {
        let mut factory = CarFlyweightFactory::new();
        let car = factory.get_car_flyweight("Model S", "Tesla", "Electric");
        let alice = car.car_details("TS1234", "Alice");
        let bob = car.car_details("TS5678", "Bob");

        assert!(alice.contains("Registration Number: TS1234"));
        assert!(alice.ends_with("Owner: Alice"));
        assert!(bob.contains("Model: Model S"));
        assert!(bob.ends_with("Owner: Bob"));
    }
}
