//! Data structures for address-book contacts.

pub mod record;

pub use record::Record;
