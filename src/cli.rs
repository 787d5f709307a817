//! Interactive menu loop.
//!
//! The session is generic over its input and output streams, so tests can
//! drive it with in-memory buffers while `main` wires up stdin/stdout.
//! Every user-facing message goes to the output stream; logging goes to
//! `tracing` and stays on stderr.

use crate::book::AddressBook;
use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::models::Record;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// One interactive session over an address book.
pub struct MenuSession<R, W> {
    book: AddressBook,
    input: R,
    output: W,
    default_path: PathBuf,
}

impl<R: BufRead, W: Write> MenuSession<R, W> {
    /// Create a session. `default_path` is used when the user enters a
    /// blank filename at the save/load prompts.
    pub fn new(book: AddressBook, input: R, output: W, default_path: impl Into<PathBuf>) -> Self {
        Self {
            book,
            input,
            output,
            default_path: default_path.into(),
        }
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "1. Add a new contact")?;
            writeln!(self.output, "2. List contacts")?;
            writeln!(self.output, "3. Search contacts")?;
            writeln!(self.output, "4. Save to file")?;
            writeln!(self.output, "5. Load from file")?;
            writeln!(self.output, "6. Exit")?;

            let choice = match self.prompt("Enter your choice: ")? {
                Some(choice) => choice,
                None => break, // EOF
            };

            match choice.as_str() {
                "1" => self.add_contact()?,
                "2" => self.list_contacts()?,
                "3" => self.search_contacts()?,
                "4" => self.save_book()?,
                "5" => self.load_book()?,
                "6" => {
                    writeln!(self.output, "Exiting program.")?;
                    break;
                }
                _ => {} // unrecognized choice, menu re-prompts
            }
        }
        Ok(())
    }

    /// Consume the session, yielding the book it operated on.
    pub fn into_book(self) -> AddressBook {
        self.book
    }

    fn add_contact(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter contact name: ")? else {
            return Ok(());
        };
        let Some(phone) = self.prompt("Enter contact phone: ")? else {
            return Ok(());
        };
        let Some(birthday) = self.prompt("Enter contact birthday (ddmmyyyy, blank to skip): ")?
        else {
            return Ok(());
        };

        match build_record(&name, &phone, &birthday) {
            Ok(record) => {
                info!(contact = %name, "contact added");
                self.book.add_record(record);
                writeln!(self.output, "Contact added successfully!")
            }
            Err(e) => {
                warn!(error = %e, "rejected contact input");
                writeln!(self.output, "Error: {}. Please try again.", e)
            }
        }
    }

    fn list_contacts(&mut self) -> io::Result<()> {
        for record in self.book.records() {
            writeln!(self.output, "{}", record)?;
        }
        Ok(())
    }

    fn search_contacts(&mut self) -> io::Result<()> {
        let Some(query) = self.prompt("Enter search query: ")? else {
            return Ok(());
        };

        let results = self.book.find(&query);
        if results.is_empty() {
            writeln!(self.output, "No matching contacts found.")
        } else {
            writeln!(self.output, "Search results:")?;
            for record in results {
                writeln!(self.output, "{}", record)?;
            }
            Ok(())
        }
    }

    fn save_book(&mut self) -> io::Result<()> {
        let Some(path) = self.prompt_path("Enter the filename to save to: ")? else {
            return Ok(());
        };

        match self.book.save_to_file(&path) {
            Ok(()) => writeln!(self.output, "Address book saved successfully!"),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "save failed");
                writeln!(self.output, "Error: {}", e)
            }
        }
    }

    fn load_book(&mut self) -> io::Result<()> {
        let Some(path) = self.prompt_path("Enter the filename to load from: ")? else {
            return Ok(());
        };

        match self.book.load_from_file(&path) {
            Ok(()) => writeln!(self.output, "Address book loaded successfully!"),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "load failed");
                writeln!(self.output, "Error: {}", e)
            }
        }
    }

    /// Print a prompt and read one trimmed line. None means EOF.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Filename prompt; a blank entry falls back to the configured default.
    fn prompt_path(&mut self, text: &str) -> io::Result<Option<PathBuf>> {
        Ok(self.prompt(text)?.map(|entered| {
            if entered.is_empty() {
                self.default_path.clone()
            } else {
                PathBuf::from(entered)
            }
        }))
    }
}

/// Validate raw prompt input into a record. A blank birthday stores none.
fn build_record(name: &str, phone: &str, birthday: &str) -> Result<Record, ValidationError> {
    let record = Record::new(ContactName::new(name), PhoneNumber::new(phone)?);
    if birthday.is_empty() {
        Ok(record)
    } else {
        Ok(record.with_birthday(Birthday::new(birthday)?))
    }
}

/// Convenience entry point used by `main`: a session over stdin/stdout.
pub fn run_interactive(book: AddressBook, default_path: &Path) -> io::Result<AddressBook> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = MenuSession::new(book, stdin.lock(), stdout.lock(), default_path);
    session.run()?;
    Ok(session.into_book())
}
