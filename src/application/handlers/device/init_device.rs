//! InitDeviceHandler - Issues an anonymous device token.

use crate::domain::foundation::{generate_fingerprint_salt, DeviceToken};

/// Command to register a device. The fingerprint is accepted but not stored.
#[derive(Debug, Clone, Default)]
pub struct InitDeviceCommand {
    pub device_fingerprint: Option<String>,
}

/// Token and salt handed back to the client.
#[derive(Debug, Clone)]
pub struct InitDeviceResult {
    pub device_token: DeviceToken,
    pub fingerprint_salt: String,
}

/// Handler for device initialization.
#[derive(Debug, Clone, Default)]
pub struct InitDeviceHandler;

impl InitDeviceHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: InitDeviceCommand) -> InitDeviceResult {
        let result = InitDeviceResult {
            device_token: DeviceToken::generate(),
            fingerprint_salt: generate_fingerprint_salt(),
        };
        tracing::info!(
            device_token = %result.device_token,
            fingerprint_supplied = cmd.device_fingerprint.is_some(),
            "Device initialized"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issues_prefixed_token_and_salt() {
        let result = InitDeviceHandler::new().handle(InitDeviceCommand::default());

        assert!(result.device_token.as_str().starts_with("device_"));
        assert_eq!(result.device_token.as_str().len(), "device_".len() + 16);
        assert!(result.fingerprint_salt.starts_with("salt_"));
        assert_eq!(result.fingerprint_salt.len(), "salt_".len() + 16);
    }

    #[test]
    fn every_call_issues_a_new_token() {
        let handler = InitDeviceHandler::new();
        let a = handler.handle(InitDeviceCommand::default());
        let b = handler.handle(InitDeviceCommand {
            device_fingerprint: Some("fp".to_string()),
        });

        assert_ne!(a.device_token, b.device_token);
        assert_ne!(a.fingerprint_salt, b.fingerprint_salt);
    }
}
