use std::fmt;

/// A catalogued title together with the number of copies on the shelf.
///
/// A book is identified by its (title, author) pair. Two records with the
/// same title but different authors are distinct books.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    title: String,
    author: String,
    publish_year: i32,
    /// Copies currently available to rent.
    stock: u32,
}

impl Book {
    /// Creates a new book record.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publish_year: i32,
        stock: u32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            publish_year,
            stock,
        }
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the year of publication.
    #[must_use]
    pub const fn publish_year(&self) -> i32 {
        self.publish_year
    }

    /// Returns the number of copies available to rent.
    #[must_use]
    pub const fn stock(&self) -> u32 {
        self.stock
    }

    /// Whether this record has the given (title, author) key.
    ///
    /// Comparison is exact and case-sensitive.
    #[must_use]
    pub fn has_key(&self, title: &str, author: &str) -> bool {
        self.title == title && self.author == author
    }

    /// Adds copies to the shelf, saturating at `u32::MAX`.
    pub(crate) const fn restock(&mut self, quantity: u32) {
        self.stock = self.stock.saturating_add(quantity);
    }

    /// Takes one copy off the shelf.
    ///
    /// Returns `false` (and leaves the stock untouched) if none are left.
    pub(crate) const fn take_copy(&mut self) -> bool {
        match self.stock.checked_sub(1) {
            Some(stock) => {
                self.stock = stock;
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} - {} ({}) [Stock: {}]",
            self.title, self.author, self.publish_year, self.stock
        )
    }
}
