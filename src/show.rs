//! Console rendering helpers.
//!
//! Every element is written with its `Display` form followed by a tab, and a
//! finished line ends with a newline.

use std::fmt::{Display, Write as _};
use std::io;

/// Renders each item followed by a tab character, without a trailing newline.
///
/// # Examples
///
/// ```rust
/// use seqlab::show::render_line;
///
/// assert_eq!(render_line([1, 6, 2]), "1\t6\t2\t");
/// assert_eq!(render_line(Vec::<i32>::new()), "");
/// ```
pub fn render_line<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    items.into_iter().fold(String::new(), |mut line, item| {
        // Writing into a String cannot fail.
        let _ = write!(line, "{item}\t");
        line
    })
}

/// Writes [`render_line`] followed by a newline to `writer`.
///
/// # Errors
///
/// Returns any error reported by the underlying writer.
///
/// # Examples
///
/// ```rust
/// use seqlab::show::show;
///
/// let mut buffer = Vec::new();
/// show(&mut buffer, [15, 42, 64]).unwrap();
/// assert_eq!(buffer, b"15\t42\t64\t\n");
/// ```
pub fn show<W, I>(writer: &mut W, items: I) -> io::Result<()>
where
    W: io::Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    writeln!(writer, "{}", render_line(items))
}
