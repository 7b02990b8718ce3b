pub mod session;
pub mod shifts;
pub mod validate;
