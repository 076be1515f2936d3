//! Domain models for the library.
//!
//! This module contains the core domain types: books and the catalog that
//! holds them, rentals and the ledger that tracks them, the [`Library`] that
//! enforces the rental rules, and configuration.

mod book;
pub use book::Book;

pub mod catalog;
pub use catalog::{AddOutcome, Catalog, SearchField};

mod config;
pub use config::{Config, ConfigError};

mod ledger;
pub use ledger::Ledger;

mod library;
pub use library::{Library, RentError, ReturnError, ReturnOutcome};

/// Rental records and return-date helpers.
pub mod rental;
pub use rental::Rental;
