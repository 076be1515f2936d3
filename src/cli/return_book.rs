use std::io::{BufRead, Write};

use library::Library;
use tracing::instrument;

use crate::cli::console::Console;

/// Prompts for a title and closes the oldest rental of it.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    library: &mut Library,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    let title = console.prompt("Enter the title of the book to return: ")?;

    match library.return_book(&title) {
        Ok(outcome) => {
            if !outcome.restocked {
                tracing::debug!(title = %title, "returned title has no catalog entry");
            }
            console.success("Book returned successfully.")?;
        }
        Err(error) => {
            tracing::debug!(%error, "return rejected");
            console.warn("This book is not rented.")?;
        }
    }
    Ok(())
}
