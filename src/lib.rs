pub mod client;
pub mod converters;
pub mod error;
pub mod loader;
pub mod models;
pub mod telemetry;
pub mod validation;

pub use client::K6Client;
pub use converters::{Capabilities, Capability};
pub use error::{K6GenError, Result};
