use std::fmt;

use chrono::{
    DateTime, Local, TimeDelta, Utc,
    format::{DelayedFormat, StrftimeItems},
};
use uuid::Uuid;

/// An active rental of a single copy of a book.
///
/// The rented book is referenced by title only, so a rental cannot tell apart
/// two books that share a title but have different authors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rental {
    /// Identifies this ledger entry. Never shown to the user.
    id: Uuid,
    user_name: String,
    book_title: String,
    return_date: DateTime<Utc>,
}

impl Rental {
    /// Creates a new rental with a fresh random identifier.
    #[must_use]
    pub fn new(
        user_name: impl Into<String>,
        book_title: impl Into<String>,
        return_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_name: user_name.into(),
            book_title: book_title.into(),
            return_date,
        }
    }

    /// Returns the ledger identifier.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the name of the renter.
    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Returns the title of the rented book.
    #[must_use]
    pub fn book_title(&self) -> &str {
        &self.book_title
    }

    /// Returns the date the copy is due back.
    #[must_use]
    pub const fn return_date(&self) -> DateTime<Utc> {
        self.return_date
    }

    /// Returns a displayable representation using the given `strftime`
    /// pattern for the return date.
    ///
    /// The pattern must be valid (see [`Config`](crate::Config), which
    /// validates it on load).
    #[must_use]
    pub const fn display<'a>(&'a self, date_format: &'a str) -> FormattedRental<'a> {
        FormattedRental {
            rental: self,
            date_format,
        }
    }
}

/// A wrapper type that formats a rental for the report listing.
///
/// Returned by [`Rental::display`].
#[derive(Debug, Clone, Copy)]
pub struct FormattedRental<'a> {
    rental: &'a Rental,
    date_format: &'a str,
}

impl fmt::Display for FormattedRental<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} - {} (Return Date: {})",
            self.rental.book_title,
            self.rental.user_name,
            local_date(self.rental.return_date, self.date_format)
        )
    }
}

/// Computes when a rental taken out at `rented_at` for `days` days is due.
///
/// Returns `None` if the date falls outside the representable range.
#[must_use]
pub fn due_date(rented_at: DateTime<Utc>, days: u32) -> Option<DateTime<Utc>> {
    rented_at.checked_add_signed(TimeDelta::try_days(i64::from(days))?)
}

/// Formats a timestamp as a date in the local time zone.
#[must_use]
pub fn local_date<'a>(
    date: DateTime<Utc>,
    format: &'a str,
) -> DelayedFormat<StrftimeItems<'a>> {
    date.with_timezone(&Local).format(format)
}
