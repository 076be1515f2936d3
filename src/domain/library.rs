//! The library: a catalog, a rental ledger, and the rules that connect them.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::instrument;

use crate::domain::{AddOutcome, Book, Catalog, Ledger, Rental, rental::due_date};

/// The complete in-memory state of the library.
///
/// All mutation goes through the methods on this type, which keep the catalog
/// and the ledger consistent with one another.
#[derive(Debug, Clone)]
pub struct Library {
    catalog: Catalog,
    ledger: Ledger,
    /// Price charged per rental day.
    daily_rate: u32,
}

/// Errors that can occur when renting a book.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RentError {
    /// No book exists at the selected position.
    #[error("no book at position {0}")]
    InvalidSelection(usize),
    /// The selected book has no copies left.
    #[error("'{0}' is out of stock")]
    OutOfStock(String),
    /// The offered budget does not cover the rental cost.
    #[error("budget of {offered} does not cover the rental cost of {required}")]
    InsufficientBudget {
        /// Total cost of the rental.
        required: u64,
        /// Amount the renter offered.
        offered: u64,
    },
    /// The return date would fall outside the representable calendar.
    #[error("a rental term of {0} days is too long")]
    TermTooLong(u32),
}

/// Errors that can occur when returning a book.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReturnError {
    /// No active rental exists for the title.
    #[error("'{0}' is not rented")]
    NotRented(String),
}

/// Result of a successful return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnOutcome {
    /// The ledger entry that was closed.
    pub rental: Rental,
    /// Whether a catalog entry with the title was found and restocked.
    pub restocked: bool,
}

impl Default for Library {
    fn default() -> Self {
        Self::new(crate::Config::default().daily_rate())
    }
}

impl Library {
    /// Creates an empty library charging `daily_rate` per rental day.
    #[must_use]
    pub fn new(daily_rate: u32) -> Self {
        Self {
            catalog: Catalog::default(),
            ledger: Ledger::default(),
            daily_rate,
        }
    }

    /// Returns the catalog of books.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the ledger of active rentals.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Adds a book to the catalog.
    ///
    /// See [`Catalog::add`].
    pub fn add_book(&mut self, book: Book) -> AddOutcome {
        self.catalog.add(book)
    }

    /// Returns the book at `index` if it can be rented.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no book at `index` or it is out of stock.
    pub fn available(&self, index: usize) -> Result<&Book, RentError> {
        let book = self
            .catalog
            .get(index)
            .ok_or(RentError::InvalidSelection(index))?;
        if book.stock() == 0 {
            return Err(RentError::OutOfStock(book.title().to_string()));
        }
        Ok(book)
    }

    /// Returns the cost of renting a book for `days` days.
    #[must_use]
    pub fn quote(&self, days: u32) -> u64 {
        u64::from(days) * u64::from(self.daily_rate)
    }

    /// Checks that `budget` covers a rental of `days` days, returning the cost.
    ///
    /// # Errors
    ///
    /// Returns [`RentError::InsufficientBudget`] if the budget is too small.
    pub fn check_budget(&self, days: u32, budget: u64) -> Result<u64, RentError> {
        let required = self.quote(days);
        if budget < required {
            return Err(RentError::InsufficientBudget {
                required,
                offered: budget,
            });
        }
        Ok(required)
    }

    /// Returns the date a rental of `days` days starting at `rented_at` is due.
    ///
    /// # Errors
    ///
    /// Returns [`RentError::TermTooLong`] if that date is out of range.
    pub fn check_term(days: u32, rented_at: DateTime<Utc>) -> Result<DateTime<Utc>, RentError> {
        due_date(rented_at, days).ok_or(RentError::TermTooLong(days))
    }

    /// Rents one copy of the book at `index` to `user_name`.
    ///
    /// All checks run before anything is changed: on success exactly one copy
    /// is taken off the shelf and exactly one rental is recorded, due
    /// `days` days after `rented_at`. On error nothing changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection is invalid, the book is out of stock,
    /// the budget is insufficient or the return date is out of range.
    #[instrument(skip(self, user_name))]
    pub fn rent(
        &mut self,
        index: usize,
        days: u32,
        budget: u64,
        user_name: impl Into<String>,
        rented_at: DateTime<Utc>,
    ) -> Result<Rental, RentError> {
        self.available(index)?;
        self.check_budget(days, budget)?;
        let return_date = Self::check_term(days, rented_at)?;

        let book = self
            .catalog
            .get_mut(index)
            .ok_or(RentError::InvalidSelection(index))?;
        if !book.take_copy() {
            return Err(RentError::OutOfStock(book.title().to_string()));
        }

        let rental = Rental::new(user_name, book.title(), return_date);
        tracing::info!(
            id = %rental.id(),
            title = rental.book_title(),
            stock = book.stock(),
            %return_date,
            "rental created"
        );
        self.ledger.push(rental.clone());
        Ok(rental)
    }

    /// Returns a rented copy of the book with the given title.
    ///
    /// The oldest rental of that title is closed, and the first catalog entry
    /// with the title gets a copy back. If no catalog entry has the title the
    /// rental is still closed.
    ///
    /// # Errors
    ///
    /// Returns [`ReturnError::NotRented`] if no rental of the title exists.
    #[instrument(skip(self))]
    pub fn return_book(&mut self, title: &str) -> Result<ReturnOutcome, ReturnError> {
        let id = self
            .ledger
            .find_by_title(title)
            .map(Rental::id)
            .ok_or_else(|| ReturnError::NotRented(title.to_string()))?;

        let restocked = match self.catalog.find_by_title_mut(title) {
            Some(book) => {
                book.restock(1);
                true
            }
            None => false,
        };

        let rental = self
            .ledger
            .remove(id)
            .ok_or_else(|| ReturnError::NotRented(title.to_string()))?;

        tracing::info!(id = %rental.id(), restocked, "rental closed");
        Ok(ReturnOutcome { rental, restocked })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone};
    use test_case::test_case;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 9, 30, 0).unwrap()
    }

    fn stocked() -> Library {
        let mut library = Library::new(5);
        library.add_book(Book::new("Dune", "Herbert", 1965, 2));
        library.add_book(Book::new("Emma", "Austen", 1815, 0));
        library
    }

    fn stocks(library: &Library) -> Vec<u32> {
        library.catalog().iter().map(Book::stock).collect()
    }

    #[test]
    fn renting_takes_one_copy_and_records_the_rental() {
        let mut library = stocked();

        let rental = library.rent(0, 3, 15, "Alice", now()).unwrap();

        assert_eq!(stocks(&library), [1, 0]);
        assert_eq!(library.ledger().len(), 1);
        assert_eq!(rental.user_name(), "Alice");
        assert_eq!(rental.book_title(), "Dune");
        assert_eq!(rental.return_date(), now() + TimeDelta::hours(72));
        assert_eq!(library.ledger().iter().next(), Some(&rental));
    }

    #[test_case(2, RentError::InvalidSelection(2); "past the end")]
    #[test_case(usize::MAX, RentError::InvalidSelection(usize::MAX); "far past the end")]
    #[test_case(1, RentError::OutOfStock("Emma".to_string()); "no stock")]
    fn invalid_selection_changes_nothing(index: usize, expected: RentError) {
        let mut library = stocked();

        let error = library.rent(index, 1, 100, "Alice", now()).unwrap_err();

        assert_eq!(error, expected);
        assert_eq!(stocks(&library), [2, 0]);
        assert!(library.ledger().is_empty());
    }

    #[test]
    fn insufficient_budget_changes_nothing() {
        let mut library = stocked();

        let error = library.rent(0, 2, 9, "Alice", now()).unwrap_err();

        assert_eq!(
            error,
            RentError::InsufficientBudget {
                required: 10,
                offered: 9
            }
        );
        assert_eq!(stocks(&library), [2, 0]);
        assert!(library.ledger().is_empty());
    }

    #[test]
    fn exact_budget_is_enough() {
        let mut library = stocked();
        assert!(library.rent(0, 2, 10, "Alice", now()).is_ok());
    }

    #[test]
    fn overlong_term_changes_nothing() {
        let mut library = Library::new(0);
        library.add_book(Book::new("Dune", "Herbert", 1965, 1));

        let error = library.rent(0, u32::MAX, 0, "Alice", now()).unwrap_err();

        assert_eq!(error, RentError::TermTooLong(u32::MAX));
        assert_eq!(stocks(&library), [1]);
        assert!(library.ledger().is_empty());
    }

    #[test]
    fn check_term_returns_due_date() {
        assert_eq!(Library::check_term(3, now()), Ok(now() + TimeDelta::days(3)));
        assert_eq!(
            Library::check_term(u32::MAX, now()),
            Err(RentError::TermTooLong(u32::MAX))
        );
    }

    #[test]
    fn quote_uses_daily_rate() {
        assert_eq!(Library::new(5).quote(4), 20);
        assert_eq!(Library::new(7).quote(0), 0);
        assert_eq!(
            Library::new(u32::MAX).quote(u32::MAX),
            u64::from(u32::MAX) * u64::from(u32::MAX)
        );
    }

    #[test]
    fn returning_closes_oldest_rental_and_restocks() {
        let mut library = stocked();
        library.rent(0, 1, 5, "Alice", now()).unwrap();
        library.rent(0, 2, 10, "Bob", now()).unwrap();
        assert_eq!(stocks(&library), [0, 0]);

        let outcome = library.return_book("Dune").unwrap();

        assert_eq!(outcome.rental.user_name(), "Alice");
        assert!(outcome.restocked);
        assert_eq!(stocks(&library), [1, 0]);
        let remaining: Vec<_> = library.ledger().iter().map(Rental::user_name).collect();
        assert_eq!(remaining, ["Bob"]);
    }

    #[test]
    fn returning_unrented_title_changes_nothing() {
        let mut library = stocked();
        library.rent(0, 1, 5, "Alice", now()).unwrap();

        let error = library.return_book("dune").unwrap_err();

        assert_eq!(error, ReturnError::NotRented("dune".to_string()));
        assert_eq!(stocks(&library), [1, 0]);
        assert_eq!(library.ledger().len(), 1);
    }

    #[test]
    fn return_restocks_first_book_with_the_title() {
        let mut library = Library::new(5);
        library.add_book(Book::new("Dune", "Herbert", 1965, 1));
        library.add_book(Book::new("Dune", "Imposter", 2020, 1));

        // Rent the second "Dune"; the return goes to the first one by title.
        library.rent(1, 1, 5, "Alice", now()).unwrap();
        library.return_book("Dune").unwrap();

        assert_eq!(stocks(&library), [2, 0]);
        assert!(library.ledger().is_empty());
    }

    #[test]
    fn dune_end_to_end() {
        let mut library = Library::default();
        library.add_book(Book::new("Dune", "Herbert", 1965, 3));
        library.add_book(Book::new("Dune", "Herbert", 1965, 2));
        assert_eq!(library.catalog().len(), 1);
        assert_eq!(stocks(&library), [5]);

        let rental = library.rent(0, 2, 10, "Paul", now()).unwrap();
        assert_eq!(stocks(&library), [4]);
        assert_eq!(rental.user_name(), "Paul");
        assert_eq!(rental.return_date(), now() + TimeDelta::days(2));

        library.return_book("Dune").unwrap();
        assert_eq!(stocks(&library), [5]);
        assert!(library.ledger().is_empty());
    }
}
