pub mod clock;
pub mod rfc3339;

pub use crate::domain::model::TimePair;
pub use crate::domain::ports::Clock;
pub use crate::utils::error::{ParseFailure, Result};
