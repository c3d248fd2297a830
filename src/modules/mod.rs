// Declare all modules
pub mod auth;
pub mod catalog;
pub mod forms;
pub mod storage;
pub mod utils;

// No re-exports here as they're handled in lib.rs
