//! Line-oriented prompting over any reader and writer

use std::{
    fmt::Display,
    io::{BufRead, Write},
    str::FromStr,
};

use crate::cli::terminal::Tone;

/// The input stream ended before the session was finished.
#[derive(Debug, thiserror::Error)]
#[error("input stream closed before exit was chosen")]
pub struct InputClosed;

/// A synchronous question-and-answer channel with the user.
///
/// Every prompt writes its question, flushes, and then blocks on a single line
/// of input. Nothing else happens while a prompt is pending.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    colour: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            colour: false,
        }
    }

    /// Enables or disables coloured messages
    #[must_use]
    pub fn with_colour(mut self, colour: bool) -> Self {
        self.colour = colour;
        self
    }

    /// Asks a question and returns the answer without its line terminator.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    /// Fails with [`InputClosed`] at end of input.
    pub fn prompt(&mut self, question: &str) -> anyhow::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(InputClosed.into());
        }
        let line = String::from_utf8_lossy(&line);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Asks for a number.
    ///
    /// Surrounding whitespace is ignored. If the answer does not parse, a
    /// warning is printed and `None` is returned so the caller can abort.
    pub fn prompt_number<T: FromStr>(&mut self, question: &str) -> anyhow::Result<Option<T>> {
        let answer = self.prompt(question)?;
        if let Ok(value) = answer.trim().parse() {
            return Ok(Some(value));
        }
        tracing::debug!(answer = %answer, "rejected non-numeric input");
        self.warn(format_args!("Invalid number: '{answer}'."))?;
        Ok(None)
    }

    /// Prints a plain line
    pub fn say(&mut self, line: impl Display) -> std::io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Prints a line reporting a completed operation
    pub fn success(&mut self, line: impl Display) -> std::io::Result<()> {
        self.toned(Tone::Success, line)
    }

    /// Prints a line reporting a rejected operation
    pub fn warn(&mut self, line: impl Display) -> std::io::Result<()> {
        self.toned(Tone::Warning, line)
    }

    fn toned(&mut self, tone: Tone, line: impl Display) -> std::io::Result<()> {
        let text = tone.paint(&line.to_string(), self.colour);
        writeln!(self.output, "{text}")
    }
}

#[cfg(test)]
pub type Scripted = Console<std::io::Cursor<Vec<u8>>, Vec<u8>>;

#[cfg(test)]
impl Scripted {
    /// A console that answers prompts from `script`, one line per answer
    pub fn scripted(script: &str) -> Self {
        Self::scripted_bytes(script.as_bytes())
    }

    /// A console that answers prompts from raw bytes
    pub fn scripted_bytes(script: &[u8]) -> Self {
        Self::new(std::io::Cursor::new(script.to_vec()), Vec::new())
    }

    /// Everything written so far
    pub fn output(&self) -> String {
        String::from_utf8(self.output.clone()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_writes_question_and_strips_line_ending() {
        let mut console = Scripted::scripted("  Dune \r\nnext\n");

        assert_eq!(console.prompt("Book Title: ").unwrap(), "  Dune ");
        assert_eq!(console.prompt("Again: ").unwrap(), "next");
        assert_eq!(console.output(), "Book Title: Again: ");
    }

    #[test]
    fn prompt_at_end_of_input_is_an_error() {
        let mut console = Scripted::scripted("");

        let error = console.prompt("Your choice: ").unwrap_err();

        assert!(error.downcast_ref::<InputClosed>().is_some());
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let mut console = Scripted::scripted_bytes(b"Du\xffne\nnext\n");

        assert_eq!(console.prompt("Title: ").unwrap(), "Du\u{fffd}ne");
        assert_eq!(console.prompt("Again: ").unwrap(), "next");
    }

    #[test]
    fn last_line_without_newline_is_still_read() {
        let mut console = Scripted::scripted("0");
        assert_eq!(console.prompt("Your choice: ").unwrap(), "0");
    }

    #[test]
    fn prompt_number_parses_trimmed_input() {
        let mut console = Scripted::scripted(" 42 \n");
        assert_eq!(console.prompt_number::<u32>("Days: ").unwrap(), Some(42));
    }

    #[test]
    fn prompt_number_rejects_garbage_with_message() {
        let mut console = Scripted::scripted("abc\n-3\n");

        assert_eq!(console.prompt_number::<u32>("Days: ").unwrap(), None);
        assert_eq!(console.prompt_number::<u32>("Days: ").unwrap(), None);

        let output = console.output();
        assert!(output.contains("Invalid number: 'abc'."));
        assert!(output.contains("Invalid number: '-3'."));
    }

    #[test]
    fn messages_are_plain_without_colour() {
        let mut console = Scripted::scripted("");
        console.success("Done.").unwrap();
        console.warn("Nope.").unwrap();
        console.say("Listed").unwrap();
        assert_eq!(console.output(), "Done.\nNope.\nListed\n");
    }
}
