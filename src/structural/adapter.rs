//! Adapter: a European plug made usable through the American socket interface.

use crate::error::AdapterError;

/// The interface clients expect.
pub trait AmericanSocket {
    fn provide_power(&self) -> Result<Vec<String>, AdapterError>;
}

/// Works on its own, but does not speak `AmericanSocket`.
#[derive(Debug, Clone, Default)]
pub struct EuropeanPlug;

impl EuropeanPlug {
    pub fn connect(&self) -> String {
        "European plug connected to European socket.".to_string()
    }
}

#[derive(Debug, Default)]
pub struct PlugAdapter {
    plug: Option<EuropeanPlug>,
}

impl PlugAdapter {
    pub fn new(plug: Option<EuropeanPlug>) -> Self {
        Self { plug }
    }

    pub fn with_plug(plug: EuropeanPlug) -> Self {
        Self::new(Some(plug))
    }
}

impl AmericanSocket for PlugAdapter {
    fn provide_power(&self) -> Result<Vec<String>, AdapterError> {
        let plug = self.plug.as_ref().ok_or_else(|| {
            tracing::warn!("adapter used without a plug");
            AdapterError::NoPlug
        })?;

        Ok(vec![
            "Adapter converting plug...".to_string(),
            plug.connect(),
            "Power provided through adapter.".to_string(),
        ])
    }
}
