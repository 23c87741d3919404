//! System orchestration, startup, and shutdown logic.

pub mod ordering_system;
pub mod telemetry;
pub mod error;
pub mod settings;
mod seed;

pub use ordering_system::*;
pub use telemetry::*;
pub use settings::*;
