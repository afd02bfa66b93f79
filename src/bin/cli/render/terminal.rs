use std::io::{self, BufRead, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use kanji_lib::flashcards::Prompter;

/// ANSI color codes
#[allow(dead_code)]
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Wrap `text` in a color when colors are on
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Keeps the terminal in raw mode while alive
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Read one key press. Ctrl-C is reported as an interrupted error.
fn read_key() -> io::Result<KeyCode> {
    let _raw = RawMode::enable()?;
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"));
            }
            return Ok(key.code);
        }
    }
}

/// Prompter on stdin/stdout: single key presses for confirmations, whole
/// lines for typed answers
pub struct TerminalPrompter {
    use_color: bool,
}

impl TerminalPrompter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn show_prompt(&self, prompt: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", paint(prompt, Color::BOLD, self.use_color))?;
        stdout.flush()
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        self.show_prompt(&format!("{} ", prompt))?;
        let answer = loop {
            match read_key()? {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => break true,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => break false,
                _ => {}
            }
        };
        println!("{}", if answer { "y" } else { "n" });
        Ok(answer)
    }

    fn ask_text(&mut self, prompt: &str) -> io::Result<String> {
        self.show_prompt(prompt)?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn render_line(&mut self, line: &str) -> io::Result<()> {
        let styled = if line.starts_with("Correct") {
            paint(line, Color::GREEN, self.use_color)
        } else if line.starts_with("Wrong") {
            paint(line, Color::RED, self.use_color)
        } else if line.starts_with('[') {
            paint(line, Color::DIM, self.use_color)
        } else {
            line.to_string()
        };
        writeln!(io::stdout(), "{}", styled)
    }

    fn pause(&mut self, prompt: &str) -> io::Result<()> {
        self.show_prompt(prompt)?;
        read_key()?;
        println!();
        Ok(())
    }
}

/// Pad to `width` columns, counting CJK characters as two columns
pub fn pad(text: &str, width: usize) -> String {
    let columns: usize = text
        .chars()
        .map(|c| if (c as u32) >= 0x1100 { 2 } else { 1 })
        .sum();
    format!("{}{}", text, " ".repeat(width.saturating_sub(columns)))
}
