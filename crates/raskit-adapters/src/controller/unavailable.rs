use tracing::debug;

use raskit_core::application::{
    ControllerError,
    ports::{RasConnector, RasController},
};

/// Connector for hosts without an automation binding.
#[derive(Debug, Clone)]
pub struct UnavailableConnector {
    reason: String,
}

impl UnavailableConnector {
    pub fn new() -> Self {
        Self::with_reason("no automation binding is available on this platform")
    }

    pub fn with_reason(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for UnavailableConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl RasConnector for UnavailableConnector {
    fn connect(&self, prog_id: &str) -> Result<Box<dyn RasController>, ControllerError> {
        debug!(prog_id, "automation class requested without a binding");
        Err(ControllerError::Unavailable {
            prog_id: prog_id.to_string(),
            reason: self.reason.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_reports_unavailable() {
        let err = UnavailableConnector::new()
            .connect("RAS67.HECRASController")
            .err()
            .unwrap();
        assert!(matches!(
            err,
            ControllerError::Unavailable { ref prog_id, .. } if prog_id == "RAS67.HECRASController"
        ));
    }
}
