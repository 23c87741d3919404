//! The checkout wizard and simulated order submission.

pub mod error;
pub mod session;
pub mod submission;

pub use error::*;
pub use session::*;
pub use submission::*;
