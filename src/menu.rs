use std::io::{self, BufRead, Write};

use tracing::instrument;

use crate::{
    Config, Console, InputError, Loader, RollNo, Roster, RosterError, Student,
    domain::grade::grade_label,
    input::{self, Field},
    terminal::{self, Colorize},
};

/// Whether the menu loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Waiting for the next choice.
    Running,
    /// The user chose to exit, or input ran out.
    Terminated,
}

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Add a student record.
    Add,
    /// Display a student record by roll number.
    Display,
    /// Leave the program.
    Exit,
}

impl Choice {
    /// Parses a trimmed menu reply. Only `"1"`, `"2"` and `"3"` are valid.
    #[must_use]
    pub fn parse(reply: &str) -> Option<Self> {
        match reply {
            "1" => Some(Self::Add),
            "2" => Some(Self::Display),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Reasons an add or display operation was abandoned.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// A field failed validation.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The roster rejected the operation.
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// A lookup was attempted while no records are stored.
    #[error("No student records available.")]
    NoRecords,

    /// Input ran out part-way through the operation.
    #[error("end of input")]
    EndOfInput,

    /// Reading or writing the console failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

const MENU: [&str; 4] = [
    "--- Student Menu ---",
    "1. Add Student",
    "2. Display Student",
    "3. Exit",
];

/// How a status line is highlighted when colour is on.
#[derive(Debug, Clone, Copy)]
enum Tone {
    Success,
    Warning,
    Dim,
}

/// The interactive session: owns the roster and drives the console.
#[derive(Debug)]
pub struct Menu<R, W> {
    console: Console<R, W>,
    roster: Roster,
    loader: Option<Loader>,
    colour: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Creates a session with an empty roster.
    ///
    /// Status lines are coloured when the process's stdout supports colour;
    /// use [`with_colour`](Self::with_colour) when writing anywhere else.
    pub fn new(input: R, output: W, config: &Config) -> Self {
        Self {
            console: Console::new(input, output),
            roster: Roster::new(),
            loader: Loader::from_config(config),
            colour: terminal::supports_color(),
        }
    }

    /// Turns colouring of status lines on or off.
    #[must_use]
    pub const fn with_colour(mut self, colour: bool) -> Self {
        self.colour = colour;
        self
    }

    /// The records added so far.
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Consumes the session, returning the roster and the console's reader
    /// and writer.
    pub fn into_parts(self) -> (Roster, R, W) {
        let (input, output) = self.console.into_parts();
        (self.roster, input, output)
    }

    /// Runs the loop until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the console cannot be read or written. End of
    /// input is not an error.
    pub fn run(&mut self) -> io::Result<()> {
        while self.step()? == MenuState::Running {}
        self.console.flush()
    }

    /// Shows the menu, reads one choice and carries it out.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the console cannot be read or written.
    pub fn step(&mut self) -> io::Result<MenuState> {
        self.console.say("")?;
        for line in MENU {
            self.console.say(line)?;
        }
        let Some(reply) = self.console.prompt("Choose option (1-3): ")? else {
            return Ok(MenuState::Terminated);
        };

        if reply.is_empty() {
            self.console.say("Please enter a choice.")?;
            return Ok(MenuState::Running);
        }

        match Choice::parse(&reply) {
            Some(Choice::Add) => {
                let result = self
                    .add_student()
                    .map(|roll_no| tracing::info!(%roll_no, "student added"));
                let state = self.report(result, "Input Error: ")?;
                if state == MenuState::Running {
                    self.notify("Input process completed.", Tone::Dim)?;
                }
                Ok(state)
            }
            Some(Choice::Display) => {
                let result = self.display_student();
                self.report(result, "")
            }
            Some(Choice::Exit) => {
                self.console.say("Exiting program. Goodbye!")?;
                Ok(MenuState::Terminated)
            }
            None => {
                tracing::debug!(%reply, "unrecognised menu choice");
                self.notify("Invalid option. Enter 1, 2 or 3.", Tone::Warning)?;
                Ok(MenuState::Running)
            }
        }
    }

    /// Prints the outcome of an operation and decides whether to continue.
    fn report(
        &mut self,
        result: Result<(), FlowError>,
        input_prefix: &str,
    ) -> io::Result<MenuState> {
        match result {
            Ok(()) => Ok(MenuState::Running),
            Err(FlowError::Input(e)) => {
                tracing::debug!(error = %e, "input rejected");
                self.notify(&format!("{input_prefix}{e}"), Tone::Warning)?;
                Ok(MenuState::Running)
            }
            Err(e @ (FlowError::Roster(_) | FlowError::NoRecords)) => {
                self.notify(&e.to_string(), Tone::Warning)?;
                Ok(MenuState::Running)
            }
            Err(FlowError::EndOfInput) => Ok(MenuState::Terminated),
            Err(FlowError::Io(e)) => Err(e),
        }
    }

    fn notify(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        if !self.colour {
            return self.console.say(text);
        }
        let line = match tone {
            Tone::Success => text.success(),
            Tone::Warning => text.warning(),
            Tone::Dim => text.dim(),
        };
        self.console.say(line)
    }

    fn read(&mut self, prompt: &str) -> Result<String, FlowError> {
        self.console.prompt(prompt)?.ok_or(FlowError::EndOfInput)
    }

    /// Reads a full record, field by field, and stores it.
    ///
    /// The roll number is checked for duplicates as soon as it is read.
    #[instrument(level = "debug", skip(self))]
    fn add_student(&mut self) -> Result<RollNo, FlowError> {
        let roll_no = input::parse_roll_no(&self.read("Enter Roll No (Integer): ")?)?;
        if self.roster.contains(roll_no) {
            return Err(RosterError::DuplicateKey(roll_no).into());
        }

        let name = input::parse_text(Field::Name, &self.read("Enter Name: ")?)?;
        let email = input::parse_text(Field::Email, &self.read("Enter Email: ")?)?;
        let course = input::parse_text(Field::Course, &self.read("Enter Course: ")?)?;
        let marks = input::parse_marks(&self.read("Enter Marks: ")?)?;

        if let Some(loader) = &self.loader {
            self.console.flush()?;
            loader.run();
        }

        self.roster.add(Student {
            roll_no,
            name,
            email,
            course,
            marks,
        })?;
        self.notify("Student added successfully.", Tone::Success)?;

        Ok(roll_no)
    }

    #[instrument(level = "debug", skip(self))]
    fn display_student(&mut self) -> Result<(), FlowError> {
        if self.roster.is_empty() {
            return Err(FlowError::NoRecords);
        }
        let roll_no = input::parse_roll_no(&self.read("Enter Roll No to display: ")?)?;

        let student = self.roster.get(roll_no)?;
        let lines = [
            format!("Roll No: {}", student.roll_no),
            format!("Name: {}", student.name),
            format!("Email: {}", student.email),
            format!("Course: {}", student.course),
            format!("Marks: {}", student.marks),
            format!("Grade: {}", grade_label(Some(student.marks))),
        ];
        for line in lines {
            self.console.say(line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn session(script: &str) -> Menu<Cursor<String>, Vec<u8>> {
        Menu::new(
            Cursor::new(script.to_string()),
            Vec::new(),
            &Config::without_loading(),
        )
        .with_colour(false)
    }

    fn transcript(menu: Menu<Cursor<String>, Vec<u8>>) -> String {
        let (_, _, output) = menu.into_parts();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn choice_parsing() {
        assert_eq!(Choice::parse("1"), Some(Choice::Add));
        assert_eq!(Choice::parse("2"), Some(Choice::Display));
        assert_eq!(Choice::parse("3"), Some(Choice::Exit));
        assert_eq!(Choice::parse("4"), None);
        assert_eq!(Choice::parse("01"), None);
        assert_eq!(Choice::parse(""), None);
    }

    #[test]
    fn exit_choice_terminates() {
        let mut menu = session("3\n");
        assert_eq!(menu.step().unwrap(), MenuState::Terminated);
        assert!(transcript(menu).contains("Exiting program. Goodbye!"));
    }

    #[test]
    fn end_of_input_terminates() {
        let mut menu = session("");
        assert_eq!(menu.step().unwrap(), MenuState::Terminated);
    }

    #[test]
    fn empty_choice_reprompts() {
        let mut menu = session("\n");
        assert_eq!(menu.step().unwrap(), MenuState::Running);
        assert!(transcript(menu).contains("Please enter a choice."));
    }

    #[test]
    fn unknown_choice_reprompts() {
        let mut menu = session("9\n");
        assert_eq!(menu.step().unwrap(), MenuState::Running);
        assert!(transcript(menu).contains("Invalid option. Enter 1, 2 or 3."));
    }

    #[test]
    fn add_flow_stores_record() {
        let mut menu = session("1\n12\nAda\nada@example.com\nMaths\n88.5\n");
        assert_eq!(menu.step().unwrap(), MenuState::Running);

        let student = menu.roster().find_by_roll(12.into()).unwrap();
        assert_eq!(student.name.as_str(), "Ada");
        assert_eq!(student.marks.get(), 88.5);

        let out = transcript(menu);
        assert!(out.contains("Student added successfully."));
        assert!(out.contains("Input process completed."));
    }

    #[test]
    fn duplicate_roll_aborts_before_other_fields() {
        let mut menu = session("1\n5\nAda\na@b\nX\n50\n1\n5\n2\n");
        menu.step().unwrap();
        assert_eq!(menu.step().unwrap(), MenuState::Running);
        assert_eq!(menu.roster().len(), 1);

        // The line after the duplicate roll number is read as the next choice.
        menu.step().unwrap();
        let out = transcript(menu);
        assert!(out.contains("A student with Roll No 5 already exists."));
        assert!(out.contains("Enter Roll No to display: "));
    }

    #[test]
    fn end_of_input_mid_add_discards_record() {
        let mut menu = session("1\n5\nAda\n");
        assert_eq!(menu.step().unwrap(), MenuState::Terminated);
        assert!(menu.roster().is_empty());
        assert!(!transcript(menu).contains("Input process completed."));
    }

    #[test]
    fn display_on_empty_roster_reads_no_roll_number() {
        let mut menu = session("2\n3\n");
        assert_eq!(menu.step().unwrap(), MenuState::Running);
        assert_eq!(menu.step().unwrap(), MenuState::Terminated);

        let out = transcript(menu);
        assert!(out.contains("No student records available."));
        assert!(!out.contains("Enter Roll No to display: "));
        assert!(out.contains("Exiting program. Goodbye!"));
    }

    #[test]
    fn display_invalid_roll_reports_number_format() {
        let mut menu = session("1\n4\nAda\na@b\nX\n50\n2\nabc\n");
        menu.step().unwrap();
        assert_eq!(menu.step().unwrap(), MenuState::Running);
        assert!(transcript(menu).contains("Invalid number format for Roll No: 'abc'."));
    }

    #[test]
    fn display_shows_grade_letter() {
        let mut menu = session("1\n4\nAda\na@b\nX\n39.5\n2\n4\n");
        menu.step().unwrap();
        menu.step().unwrap();

        let out = transcript(menu);
        assert!(out.contains("Marks: 39.5\n"));
        assert!(out.contains("Grade: F\n"));
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let mut menu = session("9\n2\n1\n\n");
        menu.run().unwrap();
        assert!(!transcript(menu).contains('\u{1b}'));
    }

    #[test]
    fn coloured_output_wraps_status_lines() {
        let mut menu = session("9\n").with_colour(true);
        menu.step().unwrap();

        let out = transcript(menu);
        assert!(out.contains('\u{1b}'));
        assert!(out.contains("Invalid option. Enter 1, 2 or 3."));
    }

    #[test]
    fn invalid_utf8_is_rejected_input_not_a_fatal_error() {
        let script = b"1\n1\nAda\na@b\nCS\n\xff\xfe\n2\n3\n".to_vec();
        let mut menu = Menu::new(Cursor::new(script), Vec::new(), &Config::without_loading())
            .with_colour(false);

        menu.run().unwrap();

        let (roster, _, output) = menu.into_parts();
        let out = String::from_utf8(output).unwrap();
        assert!(roster.is_empty());
        assert!(out.contains("Input Error: Invalid number format for Marks:"));
        assert!(out.contains("No student records available."));
        assert!(out.contains("Exiting program. Goodbye!"));
    }

    #[test]
    fn run_stops_at_exit() {
        let mut menu = session("\nx\n3\n1\n");
        menu.run().unwrap();
        let (roster, mut input, _) = menu.into_parts();
        assert!(roster.is_empty());

        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "1\n");
    }
}
