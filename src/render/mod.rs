//! Output collaborators for the run loop.
//!
//! The simulator only sees two traits: [`Display`] receives a read-only
//! [`Frame`] per generation and [`Pause`] blocks between generations.
//! [`TerminalDisplay`] and [`ThreadSleep`] are the implementations the
//! binary uses.

mod terminal;

use std::io;
use std::time::Duration;

use crate::compute::Grid;

pub use terminal::{DEAD_CELL_SYMBOL, LIVE_CELL_SYMBOL, TerminalDisplay};

/// Read-only snapshot handed to a [`Display`].
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Generation index, 0 for the initial board.
    pub generation: u64,
    /// Board state at `generation`.
    pub grid: &'a Grid,
}

impl Frame<'_> {
    /// Heading shown above the board.
    pub fn title(&self) -> String {
        if self.generation == 0 {
            "-- Initial board --".to_string()
        } else {
            format!("-- Generation: {} --", self.generation)
        }
    }
}

/// Receives each generation for display.
pub trait Display {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()>;
}

/// Blocks the calling thread between generations.
pub trait Pause {
    fn pause(&mut self, delay: Duration);
}

/// [`Pause`] backed by [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Pause for ThreadSleep {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

impl<D: Display + ?Sized> Display for &mut D {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        (**self).render(frame)
    }
}

impl<P: Pause + ?Sized> Pause for &mut P {
    fn pause(&mut self, delay: Duration) {
        (**self).pause(delay)
    }
}
