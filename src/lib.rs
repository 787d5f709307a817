//! abook - a personal address book with validated contacts and JSON persistence.
//!
//! The core is the contact data model and the in-memory index over it;
//! the interactive menu is a thin shell on top.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (names, phone numbers, birthdays)
//! - **models**: the contact `Record`
//! - **book**: the `AddressBook` index with search and persistence entry points
//! - **storage**: versioned JSON save/load
//! - **error**: custom error types for precise error handling
//! - **config**: configuration from environment variables
//! - **cli**: the interactive menu loop

pub mod book;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

pub use book::AddressBook;
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{ConfigError, RecordError, StorageError};
pub use models::Record;
