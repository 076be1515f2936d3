use std::io::{BufRead, Write};

use library::{Book, Library, SearchField};
use tracing::instrument;

use crate::cli::console::Console;

/// Searches titles or authors for a case-insensitive substring.
///
/// An unknown field choice is not an error: it simply matches nothing.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    library: &Library,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    console.say("1. Search by book title")?;
    console.say("2. Search by author name")?;

    let choice = console.prompt("Your choice: ")?;
    let term = console.prompt("Search term: ")?;

    let field = match choice.trim() {
        "1" => Some(SearchField::Title),
        "2" => Some(SearchField::Author),
        _ => None,
    };
    let results: Vec<&Book> = field
        .map(|field| library.catalog().search(field, &term).collect())
        .unwrap_or_default();
    tracing::debug!(?field, matches = results.len(), "search complete");

    if results.is_empty() {
        console.say("No matching books found.")?;
        return Ok(());
    }
    for book in results {
        console.say(book)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::cli::console::Scripted;

    fn sample() -> Library {
        let mut library = Library::default();
        library.add_book(Book::new("Dog Tales", "Ann Walker", 1999, 2));
        library.add_book(Book::new("Catalog", "Bob Stone", 2005, 1));
        library
    }

    fn search(library: &Library, script: &str) -> String {
        let mut console = Scripted::scripted(script);
        run(library, &mut console).unwrap();
        console.output()
    }

    #[test]
    fn title_search_lists_all_matches() {
        let output = search(&sample(), "1\nog\n");

        assert!(output.contains("Dog Tales - Ann Walker (1999) [Stock: 2]\n"));
        assert!(output.contains("Catalog - Bob Stone (2005) [Stock: 1]\n"));
        assert!(!output.contains("No matching books found."));
    }

    #[test]
    fn author_search_ignores_case() {
        let output = search(&sample(), "2\nSTONE\n");

        assert!(output.contains("Catalog - Bob Stone"));
        assert!(!output.contains("Dog Tales"));
    }

    #[test_case("1\nzebra\n"; "no match")]
    #[test_case("3\nog\n"; "unknown field")]
    fn nothing_found_is_reported(script: &str) {
        let output = search(&sample(), script);

        assert!(output.contains("No matching books found."));
        assert!(!output.contains("Invalid choice"));
    }

    #[test]
    fn empty_catalog_finds_nothing() {
        let output = search(&Library::default(), "1\nog\n");
        assert!(output.contains("No matching books found."));
    }
}
