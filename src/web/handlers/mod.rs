pub mod analyze;
pub mod channel;
