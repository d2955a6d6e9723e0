pub mod calc;
pub mod fields;
pub mod session;
