use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    style::{Attribute, SetAttribute},
    terminal::{self, ClearType},
    ExecutableCommand,
};

const NAV_HINT: &str = "Use ↑/↓ to navigate · Enter to select · ESC to go back";

/// Navigation-level failures raised by the raw-mode menu loop.
#[derive(Debug)]
pub enum NavError {
    Interrupted,
    EndOfInput,
    Io(io::Error),
}

impl From<io::Error> for NavError {
    fn from(err: io::Error) -> Self {
        NavError::Io(err)
    }
}

/// One selectable row of a navigator menu.
#[derive(Clone)]
pub struct NavItem {
    pub label: String,
    pub description: String,
}

impl NavItem {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
        }
    }
}

/// Arrow-key menu rendered in raw mode.
///
/// `show` returns the selected row index, or `None` when the user backs out
/// with ESC.
pub struct Navigator {
    title: String,
    items: Vec<NavItem>,
    selected: usize,
    label_width: usize,
}

impl Navigator {
    pub fn new(title: impl Into<String>, items: Vec<NavItem>) -> Self {
        let label_width = items.iter().map(|item| item.label.len()).max().unwrap_or(0);
        Self {
            title: title.into(),
            items,
            selected: 0,
            label_width,
        }
    }

    pub fn show(&mut self) -> Result<Option<usize>, NavError> {
        if self.items.is_empty() {
            return Ok(None);
        }

        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        stdout.execute(cursor::Hide)?;

        let outcome = loop {
            self.render(&mut stdout)?;
            let event = event::read()?;
            let Event::Key(key) = event else { continue };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match key.code {
                    KeyCode::Char('c') | KeyCode::Char('C') => break Err(NavError::Interrupted),
                    KeyCode::Char('d') | KeyCode::Char('D') => break Err(NavError::EndOfInput),
                    _ => continue,
                }
            }
            match key.code {
                KeyCode::Up => self.step(-1),
                KeyCode::Down => self.step(1),
                KeyCode::Home => self.selected = 0,
                KeyCode::End => self.selected = self.items.len() - 1,
                KeyCode::PageUp => self.jump(-3),
                KeyCode::PageDown => self.jump(3),
                KeyCode::Enter => break Ok(Some(self.selected)),
                KeyCode::Esc => break Ok(None),
                _ => continue,
            }
        };

        let cleared = self.clear_screen(&mut stdout);
        stdout.execute(cursor::Show).ok();
        terminal::disable_raw_mode().ok();
        cleared?;

        outcome
    }

    fn step(&mut self, delta: isize) {
        let len = self.items.len() as isize;
        self.selected = ((self.selected as isize + delta).rem_euclid(len)) as usize;
    }

    fn jump(&mut self, delta: isize) {
        let len = self.items.len() as isize;
        let next = (self.selected as isize + delta).clamp(0, len - 1);
        self.selected = next as usize;
    }

    fn render(&self, stdout: &mut Stdout) -> Result<(), io::Error> {
        self.clear_screen(stdout)?;
        writeln!(stdout, "{}", self.title)?;
        writeln!(stdout, "{NAV_HINT}")?;
        writeln!(stdout)?;

        for (index, item) in self.items.iter().enumerate() {
            if index == self.selected {
                stdout.execute(SetAttribute(Attribute::Reverse))?;
            }
            write!(
                stdout,
                "  {:<width$}  {}",
                item.label,
                item.description,
                width = self.label_width + 2
            )?;
            stdout.execute(SetAttribute(Attribute::Reset))?;
            writeln!(stdout)?;
        }

        stdout.flush()?;
        Ok(())
    }

    fn clear_screen(&self, stdout: &mut Stdout) -> Result<(), io::Error> {
        stdout.execute(terminal::Clear(ClearType::All))?;
        stdout.execute(cursor::MoveTo(0, 0))?;
        Ok(())
    }
}
