use uuid::Uuid;

use crate::domain::Rental;

/// An ordered collection of active [`Rental`] records.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    rentals: Vec<Rental>,
}

impl Ledger {
    /// Returns the number of active rentals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rentals.len()
    }

    /// Returns `true` if nothing is rented out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rentals.is_empty()
    }

    /// Iterates over the rentals in the order they were taken out.
    pub fn iter(&self) -> impl Iterator<Item = &Rental> + '_ {
        self.rentals.iter()
    }

    /// Returns the oldest rental of the given title.
    ///
    /// Matching is exact and ignores who rented the copy.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<&Rental> {
        self.rentals.iter().find(|r| r.book_title() == title)
    }

    pub(crate) fn push(&mut self, rental: Rental) {
        self.rentals.push(rental);
    }

    /// Removes the rental with the given identifier, if present.
    pub(crate) fn remove(&mut self, id: Uuid) -> Option<Rental> {
        let position = self.rentals.iter().position(|r| r.id() == id)?;
        Some(self.rentals.remove(position))
    }
}
