use std::io::{self, BufRead, Write};

/// A prompt/response channel over a line-oriented reader and a writer.
///
/// The menu talks to the user only through a `Console`, so the same code runs
/// against the terminal or against scripted input in tests.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `prompt` (without a newline), then reads one line.
    ///
    /// Returns `Ok(None)` at end of input. The returned line has its
    /// surrounding whitespace trimmed. Bytes that are not valid UTF-8 are
    /// replaced with `U+FFFD`, so the caller sees the line as ordinary
    /// (invalid) text.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while writing the prompt or reading.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            tracing::debug!("end of input");
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Writes a single line of output.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the writer.
    pub fn say(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", line.as_ref())
    }

    /// Flushes buffered output.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }

    /// Consumes the console, returning the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn prompt_writes_text_and_trims_reply() {
        let mut console = Console::new(Cursor::new("  hello \n"), Vec::new());

        let reply = console.prompt("Name: ").unwrap();

        assert_eq!(reply.as_deref(), Some("hello"));
        let (_, output) = console.into_parts();
        assert_eq!(String::from_utf8(output).unwrap(), "Name: ");
    }

    #[test]
    fn prompt_returns_none_at_end_of_input() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        assert_eq!(console.prompt("> ").unwrap(), None);
    }

    #[test]
    fn blank_line_is_not_end_of_input() {
        let mut console = Console::new(Cursor::new("\n"), Vec::new());
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let mut console = Console::new(Cursor::new("3"), Vec::new());
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("3"));
        assert_eq!(console.prompt("> ").unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_replaced_not_an_error() {
        let input = Cursor::new(b"\xff\xfe 90\nnext\n".to_vec());
        let mut console = Console::new(input, Vec::new());

        let reply = console.prompt("> ").unwrap().unwrap();

        assert_eq!(reply, "\u{fffd}\u{fffd} 90");
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("next"));
    }

    #[test]
    fn say_appends_newline() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        console.say("one").unwrap();
        console.say(String::from("two")).unwrap();

        let (_, output) = console.into_parts();
        assert_eq!(String::from_utf8(output).unwrap(), "one\ntwo\n");
    }
}
