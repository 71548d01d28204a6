pub mod blinds;
pub mod channels;
pub mod configuration;
pub mod error;
pub mod logging;

pub use blinds::{StatusPayload, Wevolor};
pub use channels::{Command, CommandGroup};
pub use error::{Result, WevolorError};
