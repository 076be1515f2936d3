//! The in-memory collection of books.
//!
//! The [`Catalog`] keeps books in insertion order and guarantees at most one
//! record per (title, author) pair.

use tracing::instrument;

use crate::domain::Book;

/// An ordered collection of [`Book`] records.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    books: Vec<Book>,
}

/// Result of adding a book to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// No book with the same (title, author) existed, so a new record was
    /// appended.
    Added,
    /// A book with the same (title, author) already existed and its stock was
    /// increased.
    StockUpdated {
        /// The stock after the update.
        stock: u32,
    },
}

/// The book field a search is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Match against the title.
    Title,
    /// Match against the author.
    Author,
}

impl SearchField {
    fn of(self, book: &Book) -> &str {
        match self {
            Self::Title => book.title(),
            Self::Author => book.author(),
        }
    }
}

impl Catalog {
    /// Adds a book, merging it into an existing record with the same title and
    /// author.
    ///
    /// When merging, the stock of `book` is added to the existing record and
    /// its publish year is ignored.
    #[instrument(skip_all, fields(title = book.title(), author = book.author()))]
    pub fn add(&mut self, book: Book) -> AddOutcome {
        if let Some(existing) = self
            .books
            .iter_mut()
            .find(|b| b.has_key(book.title(), book.author()))
        {
            existing.restock(book.stock());
            tracing::info!(stock = existing.stock(), "stock updated");
            return AddOutcome::StockUpdated {
                stock: existing.stock(),
            };
        }

        tracing::info!(stock = book.stock(), "book added");
        self.books.push(book);
        AddOutcome::Added
    }

    /// Returns the number of books.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns `true` if the catalog holds no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Returns the book at the given 0-based position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Book> {
        self.books.get_mut(index)
    }

    /// Iterates over all books in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Book> + '_ {
        self.books.iter()
    }

    /// Returns the first book with exactly the given title.
    pub(crate) fn find_by_title_mut(&mut self, title: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.title() == title)
    }

    /// Iterates over the books whose `field` contains `term`, ignoring case.
    ///
    /// An empty term matches every book.
    pub fn search<'a>(
        &'a self,
        field: SearchField,
        term: &str,
    ) -> impl Iterator<Item = &'a Book> {
        let needle = term.to_lowercase();
        self.books
            .iter()
            .filter(move |book| field.of(book).to_lowercase().contains(&needle))
    }

    /// Iterates over the books published in exactly the given year.
    pub fn by_publish_year(&self, year: i32) -> impl Iterator<Item = &Book> + '_ {
        self.books.iter().filter(move |b| b.publish_year() == year)
    }
}
