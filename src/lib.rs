//! Library Inventory and Rentals
//!
//! Books are kept in an in-memory [`Catalog`] and active rentals in a
//! [`Ledger`]. Both are owned by a [`Library`], which is the only way to
//! mutate them.

pub mod domain;
pub use domain::{
    AddOutcome, Book, Catalog, Config, ConfigError, Ledger, Library, RentError, Rental,
    ReturnError, ReturnOutcome, SearchField,
};
