//! Device handlers.

mod init_device;

pub use init_device::{InitDeviceCommand, InitDeviceHandler, InitDeviceResult};
