//! ANSI terminal renderer.

use std::io::{self, Write};

use super::{Display, Frame};

pub const LIVE_CELL_SYMBOL: char = 'o';
pub const DEAD_CELL_SYMBOL: char = ' ';

const CLEAR_SCREEN: &str = "\x1b[2J";
const CURSOR_HOME: &str = "\x1b[1;1H";

/// Draws each frame to a writer, clearing the screen first.
///
/// Every cell is printed as its glyph followed by a space, one board row
/// per line, under the frame title.
pub struct TerminalDisplay<W: Write> {
    out: W,
    clear: bool,
    /// Reused line buffer so each frame is written in one call.
    buffer: String,
}

impl TerminalDisplay<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            clear: true,
            buffer: String::new(),
        }
    }

    /// Skip the clear/home escape sequences (useful when output is piped).
    pub fn without_clear(mut self) -> Self {
        self.clear = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Display for TerminalDisplay<W> {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        let grid = frame.grid;
        self.buffer.clear();
        self.buffer.reserve((grid.width() * 2 + 1) * grid.height() + 64);

        if self.clear {
            self.buffer.push_str(CLEAR_SCREEN);
            self.buffer.push_str(CURSOR_HOME);
        }
        self.buffer.push_str(&frame.title());
        self.buffer.push('\n');

        for row in grid.rows() {
            for &alive in row {
                self.buffer.push(if alive {
                    LIVE_CELL_SYMBOL
                } else {
                    DEAD_CELL_SYMBOL
                });
                self.buffer.push(' ');
            }
            self.buffer.push('\n');
        }

        self.out.write_all(self.buffer.as_bytes())?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::Grid;

    #[test]
    fn test_renders_glyphs_row_major() {
        let grid = Grid::from_cells(3, 2, &[(0, 0), (1, 2)]).unwrap();
        let mut display = TerminalDisplay::new(Vec::new()).without_clear();
        display
            .render(&Frame {
                generation: 4,
                grid: &grid,
            })
            .unwrap();

        let text = String::from_utf8(display.into_inner()).unwrap();
        assert_eq!(text, "-- Generation: 4 --\no     \n    o \n");
    }

    #[test]
    fn test_clears_screen_by_default() {
        let grid = Grid::dead(1, 1).unwrap();
        let mut display = TerminalDisplay::new(Vec::new());
        display
            .render(&Frame {
                generation: 0,
                grid: &grid,
            })
            .unwrap();

        let text = String::from_utf8(display.into_inner()).unwrap();
        assert!(text.starts_with("\x1b[2J\x1b[1;1H-- Initial board --\n"));
    }

    #[test]
    fn test_propagates_write_errors() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let grid = Grid::dead(2, 2).unwrap();
        let mut display = TerminalDisplay::new(Broken);
        let err = display
            .render(&Frame {
                generation: 0,
                grid: &grid,
            })
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
