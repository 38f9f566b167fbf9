// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;

// iteration drivers
pub mod bracket;
pub mod open;
