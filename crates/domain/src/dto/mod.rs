pub mod athlete;
pub mod common;
pub mod competition;
pub mod ranking;
