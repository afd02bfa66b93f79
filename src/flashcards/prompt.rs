//! Interactive surface used by drills
//!
//! Drills and the scheduler only talk to a [`Prompter`]. The terminal
//! implementation lives in the CLI binary.

use std::io;

pub trait Prompter {
    /// Ask a yes/no question
    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;

    /// Ask for a line of text, returned without the line terminator
    fn ask_text(&mut self, prompt: &str) -> io::Result<String>;

    /// Show one line of output
    fn render_line(&mut self, line: &str) -> io::Result<()>;

    /// Wait until the user is ready to continue
    fn pause(&mut self, prompt: &str) -> io::Result<()> {
        self.ask_text(prompt).map(|_| ())
    }
}
