pub mod errors;
pub mod spool_data;

pub use errors::*;
pub use spool_data::*;
