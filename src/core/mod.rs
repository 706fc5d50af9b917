pub mod errors;
pub mod services;
pub mod session;
pub mod utils;
pub mod validation;
