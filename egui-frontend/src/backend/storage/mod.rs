//! # Storage Module
//!
//! File-backed persistence for the cash counter. Each persisted record is
//! its own file in the data directory so it can be read and written
//! independently of the others.

pub mod connection;
pub mod preferences_repository;
pub mod tally_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::StorageConnection;
pub use preferences_repository::PreferencesRepository;
pub use tally_repository::TallyRepository;
