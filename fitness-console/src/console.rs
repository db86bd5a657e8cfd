use std::io::{self, BufRead, IsTerminal, Stdin, Stdout, Write};

use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Terminal the application talks to.
#[mockall::automock]
pub trait Console {
    fn print(&mut self, text: &str) -> Result<()>;
    /// Reads one line without its terminator. `None` means the input is closed.
    fn read_line(&mut self) -> Result<Option<String>>;
    fn clear_screen(&mut self) -> Result<()>;
    fn pause(&mut self, message: &str) -> Result<()>;
}

pub struct StdConsole {
    stdin: Stdin,
    stdout: Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }

    fn wait_for_key() -> Result<()> {
        enable_raw_mode()?;
        let pressed = loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(()),
                Ok(_) => continue,
                Err(e) => break Err(e),
            }
        };
        disable_raw_mode()?;
        pressed?;
        Ok(())
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn print(&mut self, text: &str) -> Result<()> {
        self.stdout.write_all(text.as_bytes())?;
        self.stdout.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    fn clear_screen(&mut self) -> Result<()> {
        execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn pause(&mut self, message: &str) -> Result<()> {
        self.print(message)?;
        // Piped input has no key presses to wait for.
        if self.stdin.is_terminal() {
            Self::wait_for_key()?;
        }
        self.print("\n")
    }
}
