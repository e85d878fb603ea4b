//! # Console Front-end
//!
//! Plain-text rendering to a writer and direction prompts read from a reader.

use crate::{parse_direction, Coord, Direction, InputSource, ReadOnlyWorld, UserInterface};
use crate::DIRECTION_HELP;
use log::warn;
use std::fmt;
use std::io::{self, BufRead, Write};

/// Text renderer.
///
/// Empty cells show as `...`, occupied ones as the agent label. Errors go to
/// a separate writer, standard error by default. Write failures are logged
/// and otherwise ignored.
pub struct ConsoleUi<W: Write, E: Write = io::Stderr> {
    out: W,
    err: E,
    /// Width of one rendered cell, label included
    cell_width: usize,
}

impl ConsoleUi<io::Stdout> {
    /// Renderer writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleUi<W> {
    pub fn new(out: W) -> Self {
        Self::with_error_writer(out, io::stderr())
    }
}

impl<W: Write, E: Write> ConsoleUi<W, E> {
    /// Renderer sending errors to `err` instead of standard error.
    pub fn with_error_writer(out: W, err: E) -> Self {
        Self {
            out,
            err,
            cell_width: 3,
        }
    }

    /// Gives back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Gives back both writers.
    pub fn into_parts(self) -> (W, E) {
        (self.out, self.err)
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = write_flushed(&mut self.out, args) {
            warn!("console write failed: {}", e);
        }
    }
}

fn write_flushed(target: &mut impl Write, args: fmt::Arguments<'_>) -> io::Result<()> {
    target.write_fmt(args)?;
    target.flush()
}

impl<W: Write, E: Write> UserInterface for ConsoleUi<W, E> {
    fn initialize(&mut self, x_dim: u32, y_dim: u32) {
        // Labels grow with the largest ID, which is bounded by the cell count
        let max_id = (x_dim as u64 * y_dim as u64).saturating_sub(1);
        self.cell_width = self.cell_width.max(max_id.to_string().len() + 1);
        self.emit(format_args!("World of {}x{} cells\n", x_dim, y_dim));
    }

    fn render_world(&mut self, world: &dyn ReadOnlyWorld) {
        let mut frame = String::new();
        for y in 0..world.y_dim() {
            for x in 0..world.x_dim() {
                let cell = match world.get_agent_at(Coord::new(x, y)) {
                    Some(agent) => agent.label(),
                    None => "...".to_string(),
                };
                frame.push_str(&format!("{:<width$} ", cell, width = self.cell_width));
            }
            frame.push('\n');
        }
        self.emit(format_args!("{}\n", frame));
    }

    fn render_message(&mut self, message: &str) {
        self.emit(format_args!("{}\n", message));
    }

    fn render_info(&mut self, info: &[(String, usize)]) {
        let line = info
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join(" | ");
        self.emit(format_args!("[ {} ]\n", line));
    }

    fn render_error(&mut self, message: &str) {
        if let Err(e) = write_flushed(&mut self.err, format_args!("{}\n", message)) {
            warn!("console error write failed: {}", e);
        }
    }

    fn render_finish(&mut self) {
        self.emit(format_args!("Game over\n"));
    }
}

/// Reads player directions line by line.
///
/// Unrecognized lines are answered with the key help and a new prompt. End
/// of input, or a read error, makes the agent stay put.
pub struct ConsoleInput<R: BufRead, W: Write> {
    input: R,
    prompt_out: W,
}

impl ConsoleInput<io::StdinLock<'static>, io::Stdout> {
    /// Reads from standard input, prompting on standard output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(input: R, prompt_out: W) -> Self {
        Self { input, prompt_out }
    }

    fn prompt(&mut self, agent_label: &str) -> io::Result<()> {
        writeln!(self.prompt_out, "Where to move {}?", agent_label)?;
        for line in DIRECTION_HELP {
            writeln!(self.prompt_out, "{}", line)?;
        }
        write!(self.prompt_out, ">> ")?;
        self.prompt_out.flush()
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    fn input_direction(&mut self, agent_label: &str) -> Direction {
        loop {
            if let Err(e) = self.prompt(agent_label) {
                warn!("could not prompt for {}: {}", agent_label, e);
            }

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return Direction::None,
                Ok(_) => {
                    if let Some(direction) = parse_direction(&line) {
                        return direction;
                    }
                }
                Err(e) => {
                    warn!("could not read a direction for {}: {}", agent_label, e);
                    return Direction::None;
                }
            }
        }
    }
}
