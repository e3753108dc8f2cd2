pub mod common;
pub mod spool;
