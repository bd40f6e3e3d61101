//! Bridge: remotes (the abstraction) and devices (the implementation) vary
//! independently. Any remote drives any device.

use std::cell::RefCell;
use std::rc::Rc;

pub trait Device {
    fn name(&self) -> &str;
    fn is_on(&self) -> bool;
    fn turn_on(&mut self) -> String;
    fn turn_off(&mut self) -> String;
}

/// Devices are shared between the remotes that point at them.
pub type SharedDevice = Rc<RefCell<dyn Device>>;

#[derive(Debug, Default)]
pub struct Tv {
    on: bool,
}

impl Tv {
    pub fn shared() -> SharedDevice {
        Rc::new(RefCell::new(Tv::default()))
    }
}

impl Device for Tv {
    fn name(&self) -> &str {
        "TV"
    }

    fn is_on(&self) -> bool {
        self.on
    }

    fn turn_on(&mut self) -> String {
        self.on = true;
        "TV is now ON.".to_string()
    }

    fn turn_off(&mut self) -> String {
        self.on = false;
        "TV is now OFF.".to_string()
    }
}

#[derive(Debug, Default)]
pub struct Radio {
    on: bool,
}

impl Radio {
    pub fn shared() -> SharedDevice {
        Rc::new(RefCell::new(Radio::default()))
    }
}

impl Device for Radio {
    fn name(&self) -> &str {
        "Radio"
    }

    fn is_on(&self) -> bool {
        self.on
    }

    fn turn_on(&mut self) -> String {
        self.on = true;
        "Radio is now ON.".to_string()
    }

    fn turn_off(&mut self) -> String {
        self.on = false;
        "Radio is now OFF.".to_string()
    }
}

// =============================================================================
// Remotes
// =============================================================================

pub trait RemoteControl {
    fn device(&self) -> &SharedDevice;
    fn press_power_button(&self) -> Vec<String>;
}

pub struct BasicRemote {
    device: SharedDevice,
}

impl BasicRemote {
    pub fn new(device: SharedDevice) -> Self {
        Self { device }
    }
}

impl RemoteControl for BasicRemote {
    fn device(&self) -> &SharedDevice {
        &self.device
    }

    fn press_power_button(&self) -> Vec<String> {
        vec!["Basic remote!".to_string(), self.device.borrow_mut().turn_on()]
    }
}

pub struct AdvancedRemote {
    device: SharedDevice,
}

impl AdvancedRemote {
    pub fn new(device: SharedDevice) -> Self {
        Self { device }
    }

    /// Only the advanced remote can switch a device off.
    pub fn press_power_off_button(&self) -> Vec<String> {
        vec!["Advanced remote!".to_string(), self.device.borrow_mut().turn_off()]
    }
}

impl RemoteControl for AdvancedRemote {
    fn device(&self) -> &SharedDevice {
        &self.device
    }

    fn press_power_button(&self) -> Vec<String> {
        vec!["Advanced remote!".to_string(), self.device.borrow_mut().turn_on()]
    }
}
