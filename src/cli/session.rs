use std::io::{BufRead, Write};

use chrono::{DateTime, Utc};
use library::{Config, Library};
use tracing::instrument;

use crate::cli::{add_book, console::Console, rent_book, report, return_book, search};

const MENU: &str = "
Library System
1. Add Book
2. Rent Book
3. Return Book
4. Search Book
5. Reporting
0. Exit";

/// A top-level menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    Rent,
    Return,
    Search,
    Report,
    Exit,
}

impl MenuChoice {
    fn parse(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Rent),
            "3" => Some(Self::Return),
            "4" => Some(Self::Search),
            "5" => Some(Self::Report),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The interactive command loop.
///
/// Owns the library for the lifetime of the session and lends it to one
/// operation at a time.
#[derive(Debug)]
pub struct Session<'a> {
    library: Library,
    config: &'a Config,
    clock: fn() -> DateTime<Utc>,
}

impl<'a> Session<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            library: Library::new(config.daily_rate()),
            config,
            clock: Utc::now,
        }
    }

    #[cfg(test)]
    fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    #[cfg(test)]
    const fn library(&self) -> &Library {
        &self.library
    }

    /// Runs the menu until the user chooses to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written, including
    /// when input ends before exit is chosen.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> anyhow::Result<()> {
        loop {
            console.say(MENU)?;
            let answer = console.prompt("Your choice: ")?;

            let Some(choice) = MenuChoice::parse(&answer) else {
                tracing::debug!(answer = %answer, "unknown menu choice");
                console.warn("Invalid choice, please try again.")?;
                continue;
            };
            tracing::debug!(?choice, "menu choice");

            match choice {
                MenuChoice::Add => add_book::run(&mut self.library, console)?,
                MenuChoice::Rent => {
                    rent_book::run(&mut self.library, self.config, self.clock, console)?;
                }
                MenuChoice::Return => return_book::run(&mut self.library, console)?,
                MenuChoice::Search => search::run(&self.library, console)?,
                MenuChoice::Report => report::run(&self.library, self.config, console)?,
                MenuChoice::Exit => {
                    console.say("Exiting the program...")?;
                    return Ok(());
                }
            }
        }
    }
}
