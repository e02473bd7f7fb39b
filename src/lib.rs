//! Student Records
//!
//! Student records are kept in memory for the lifetime of an interactive
//! menu session.

pub mod domain;
pub use domain::{Config, Grade, Marks, RollNo, Roster, RosterError, Student};

/// Parsing and validation of raw console input.
pub mod input;
pub use input::{Field, InputError};

/// Line-oriented prompting over arbitrary readers and writers.
pub mod console;
pub use console::Console;

pub mod loading;
pub use loading::Loader;

pub mod terminal;

/// The interactive menu loop.
pub mod menu;
pub use menu::{FlowError, Menu, MenuState};
