use std::io::{BufRead, Write};

use library::{Book, Config, Library, SearchField};
use tracing::instrument;

use crate::cli::console::Console;

/// Shows one of the catalog or rental reports.
///
/// Unlike search, an empty filtered report prints nothing at all.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    library: &Library,
    config: &Config,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    console.say("1. List all books")?;
    console.say("2. List books by a specific author")?;
    console.say("3. List books by a specific publish year")?;
    console.say("4. List rented books")?;

    let choice = console.prompt("Your choice: ")?;
    let catalog = library.catalog();

    match choice.trim() {
        "1" => list(console, catalog.iter())?,
        "2" => {
            let author = console.prompt("Author name: ")?;
            list(console, catalog.search(SearchField::Author, &author))?;
        }
        "3" => {
            let Some(year) = console.prompt_number::<i32>("Publish year: ")? else {
                return Ok(());
            };
            list(console, catalog.by_publish_year(year))?;
        }
        "4" => {
            for rental in library.ledger().iter() {
                console.say(rental.display(config.date_format()))?;
            }
        }
        _ => console.warn("Invalid choice.")?,
    }
    Ok(())
}

fn list<'a, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    books: impl Iterator<Item = &'a Book>,
) -> std::io::Result<()> {
    for book in books {
        console.say(book)?;
    }
    Ok(())
}
