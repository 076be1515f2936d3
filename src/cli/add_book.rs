use std::io::{BufRead, Write};

use library::{AddOutcome, Book, Library};
use tracing::instrument;

use crate::cli::console::Console;

/// Prompts for a book and adds it to the catalog, merging duplicates.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    library: &mut Library,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    let title = console.prompt("Book Title: ")?;
    let author = console.prompt("Author Name: ")?;
    let Some(publish_year) = console.prompt_number::<i32>("Publish Year: ")? else {
        return Ok(());
    };
    let Some(stock) = console.prompt_number::<u32>("Stock Quantity: ")? else {
        return Ok(());
    };

    match library.add_book(Book::new(title, author, publish_year, stock)) {
        AddOutcome::StockUpdated { .. } => {
            console.success("The book already exists. Stock updated.")?;
        }
        AddOutcome::Added => console.success("New book added.")?,
    }
    Ok(())
}
