use super::canvas::{Canvas, Cell, Style, CONTINUATION};
use crate::error::{DeskfolioError, ErrorType};
use crate::geometry::Size;
use crossterm::style::Attribute;
use crossterm::terminal::ClearType;
use crossterm::{cursor, queue, style, terminal};
use std::io::{stdout, Stdout, Write};

macro_rules! queue_map_err {
    ($($v:expr),*) => {
        queue!($($v),*).map_err(|e| {
            ErrorType::QueueExecuteError {
                reason: e.to_string(),
            }
            .into_error()
        })
    };
}

/// Writes composed frames to the terminal. Only rows that differ from the previously written
/// frame are sent.
pub struct Display {
    previous: Option<Canvas>,
    completed_initialization: bool,
}

impl Display {
    pub fn new() -> Self {
        return Self {
            previous: None,
            completed_initialization: false,
        };
    }

    /// Takes control of stdout by clearing the terminal and hiding the cursor. This must be run
    /// before anything is rendered.
    pub fn init(mut self) -> Result<Self, DeskfolioError> {
        let mut stdout = stdout();

        queue_map_err!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;

        Self::flush(&mut stdout)?;

        self.completed_initialization = true;
        return Ok(self);
    }

    /// Forget the last frame so the next render redraws every row.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Render `canvas` to stdout.
    pub fn render(&mut self, canvas: &Canvas) -> Result<(), DeskfolioError> {
        if !self.completed_initialization {
            return Ok(());
        }

        let mut stdout = stdout();

        let previous = match self.previous.take() {
            Some(previous) if previous.size() == canvas.size() => Some(previous),
            _ => {
                queue_map_err!(stdout, style::ResetColor, terminal::Clear(ClearType::All))?;
                None
            }
        };

        for row in 0..canvas.size().get_rows() {
            if let Some(previous) = previous.as_ref() {
                if previous.row(row) == canvas.row(row) {
                    continue;
                }
            }

            queue_map_err!(stdout, cursor::MoveTo(0, row))?;

            for (run_style, text) in runs(canvas.row(row)) {
                Self::queue_style(&mut stdout, run_style)?;
                queue_map_err!(stdout, style::Print(text))?;
            }
        }

        queue_map_err!(
            stdout,
            style::SetAttribute(Attribute::Reset),
            style::ResetColor
        )?;

        Self::flush(&mut stdout)?;

        self.previous = Some(canvas.clone());

        return Ok(());
    }

    /// Give the terminal back: show the cursor and clear the screen.
    pub fn restore(&mut self) -> Result<(), DeskfolioError> {
        let mut stdout = stdout();

        queue_map_err!(
            stdout,
            style::SetAttribute(Attribute::Reset),
            style::ResetColor,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            cursor::Show
        )?;

        self.previous = None;
        self.completed_initialization = false;

        return Self::flush(&mut stdout);
    }

    pub fn get_terminal_size() -> Result<Size, DeskfolioError> {
        let (cols, rows) = match terminal::size() {
            Ok(t) => t,
            Err(e) => {
                return Err(ErrorType::DetermineTerminalSizeError {
                    reason: e.to_string(),
                }
                .into_error());
            }
        };

        return Ok(Size::new(rows, cols));
    }

    fn queue_style(stdout: &mut Stdout, cell_style: Style) -> Result<(), DeskfolioError> {
        queue_map_err!(
            stdout,
            style::SetAttribute(Attribute::Reset),
            style::SetForegroundColor(cell_style.fg.crossterm_color()),
            style::SetBackgroundColor(cell_style.bg.crossterm_color())
        )?;

        if cell_style.bold {
            queue_map_err!(stdout, style::SetAttribute(Attribute::Bold))?;
        }

        if cell_style.underline {
            queue_map_err!(stdout, style::SetAttribute(Attribute::Underlined))?;
        }

        return Ok(());
    }

    fn flush(stdout: &mut Stdout) -> Result<(), DeskfolioError> {
        return stdout.flush().map_err(|e| {
            ErrorType::StdoutFlushError {
                reason: format!("{}", e),
            }
            .into_error()
        });
    }
}

impl Default for Display {
    fn default() -> Self {
        return Self::new();
    }
}

/// Split a row into runs of equally styled text. Wide glyph continuations are skipped since the
/// terminal advances past them on its own.
fn runs(cells: &[Cell]) -> Vec<(Style, String)> {
    let mut runs: Vec<(Style, String)> = Vec::new();

    for cell in cells.iter().filter(|c| c.ch != CONTINUATION) {
        match runs.last_mut() {
            Some((style, text)) if *style == cell.style => text.push(cell.ch),
            _ => runs.push((cell.style, cell.ch.to_string())),
        }
    }

    return runs;
}
