//! Console walkthroughs of the collection API.
//!
//! Each scenario runs a fixed script against literal data and records what it
//! would print as a [`Transcript`]:
//!
//! - [`numbers`]: positional editing of a `Sequence<i32>`
//! - [`points`]: the same edits on a `Sequence<Point>`
//! - [`filtering`]: sorting, range search and the ordered-unique projection
//!
//! # Examples
//!
//! ```rust
//! use seqlab::scenario;
//!
//! let transcript = scenario::numbers();
//! assert_eq!(transcript.lines()[0], "1\t6\t2\t8\t2\t0\t");
//! ```

mod filtering;
mod numbers;
mod points;

pub use filtering::filtering;
pub use numbers::numbers;
pub use points::points;

use std::fmt;
use std::io;

use crate::show::render_line;

/// The ordered output lines produced by one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    name: &'static str,
    lines: Vec<String>,
}

impl Transcript {
    /// Creates an empty transcript for the scenario called `name`.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            lines: Vec::new(),
        }
    }

    /// Returns the scenario name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the recorded lines, without their trailing newlines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Records a tab-separated line of items, as [`show`](crate::show::show)
    /// would print it.
    pub fn push_line<I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.lines.push(render_line(items));
    }

    /// Records a single value on its own line.
    pub fn push_value<V: fmt::Display>(&mut self, value: V) {
        self.lines.push(value.to_string());
    }

    /// Writes every line followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns any error reported by the underlying writer.
    pub fn write_to<W: io::Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.lines
            .iter()
            .try_for_each(|line| writeln!(writer, "{line}"))
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.lines
            .iter()
            .try_for_each(|line| writeln!(formatter, "{line}"))
    }
}

/// Runs every scenario in order.
#[must_use]
pub fn all() -> Vec<Transcript> {
    vec![numbers(), points(), filtering()]
}
