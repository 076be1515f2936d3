use std::io::{BufRead, Write};

use chrono::{DateTime, Utc};
use library::{Config, Library, RentError, domain::rental::local_date};
use tracing::instrument;

use crate::cli::console::Console;

const INVALID_SELECTION: &str = "Invalid selection or no stock available.";

/// Lists the catalog and walks the user through renting one copy.
///
/// Selection, stock, term and budget are checked as soon as the relevant
/// answer is known; any failure aborts the rental with nothing changed. The
/// rental itself reads `clock` once, after the last answer, and the resulting
/// return date is both stored and printed.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    library: &mut Library,
    config: &Config,
    clock: fn() -> DateTime<Utc>,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    console.say("Available Books:")?;
    for (position, book) in library.catalog().iter().enumerate() {
        console.say(format_args!(
            "{}. {} - {} (Stock: {})",
            position + 1,
            book.title(),
            book.author(),
            book.stock()
        ))?;
    }

    let answer = console.prompt("Select the book number to rent: ")?;
    let Some(index) = answer
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
    else {
        tracing::debug!(answer = %answer, "rental rejected: not a book number");
        console.warn(INVALID_SELECTION)?;
        return Ok(());
    };
    if let Err(error) = library.available(index) {
        tracing::debug!(%error, "rental rejected");
        console.warn(INVALID_SELECTION)?;
        return Ok(());
    }

    let Some(days) = console.prompt_number::<u32>("How many days to rent: ")? else {
        return Ok(());
    };
    if let Err(error) = Library::check_term(days, clock()) {
        tracing::debug!(%error, "rental rejected");
        console.warn(format_args!("Rental failed: {error}."))?;
        return Ok(());
    }
    let cost = library.quote(days);

    let Some(budget) = console
        .prompt_number::<u64>(&format!("You need to pay {cost} {} ", config.currency()))?
    else {
        return Ok(());
    };
    if let Err(error) = library.check_budget(days, budget) {
        tracing::debug!(%error, "rental rejected");
        console.warn("Insufficient budget.")?;
        return Ok(());
    }

    let user_name = console.prompt("Your name: ")?;

    match library.rent(index, days, budget, user_name, clock()) {
        Ok(rental) => console.success(format_args!(
            "Book rented successfully. Return date: {}",
            local_date(rental.return_date(), config.date_format())
        ))?,
        Err(error @ RentError::TermTooLong(_)) => {
            tracing::debug!(%error, "rental rejected");
            console.warn(format_args!("Rental failed: {error}."))?;
        }
        Err(error) => return Err(error.into()),
    }
    Ok(())
}
