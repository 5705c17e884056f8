//! Foundation utilities: math types and logging.

pub mod logging;
pub mod math;
