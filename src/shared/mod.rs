pub mod errors;
pub mod shutdown;
pub mod types;
pub mod utils;
pub mod validations;

pub use errors::*;
pub use types::*;
