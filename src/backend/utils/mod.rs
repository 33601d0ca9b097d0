pub mod guards;
pub mod log;
pub mod time;
pub mod validation;
