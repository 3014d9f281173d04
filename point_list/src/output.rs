//! Formatted emission of a list through a point's own formatting routine.

use std::io::{self, Write};

/// A point that knows how to render itself through a runtime format string.
///
/// What `fmt` means is up to the implementor; the list only hands it over
/// unchanged (minus a trailing line terminator, see [`write_points`]).
pub trait FormatPoint {
    fn write_point(&self, out: &mut dyn Write, fmt: &str) -> io::Result<()>;
}

/// Line terminators recognised at the end of a format, longest first.
const TERMINATORS: [&str; 2] = ["\r\n", "\n"];

/// Split a trailing line terminator off `fmt`.
pub(crate) fn split_terminator(fmt: &str) -> (&str, Option<&str>) {
    TERMINATORS
        .iter()
        .find_map(|&t| fmt.strip_suffix(t).map(|body| (body, Some(t))))
        .unwrap_or((fmt, None))
}

/// Writes every point with `fmt`.
///
/// A terminator at the end of `fmt` is not repeated per point: it is written
/// once, after the last point (and on its own for an empty slice).
pub fn write_points<T, W>(out: &mut W, fmt: &str, points: &[T]) -> io::Result<()>
where
    T: FormatPoint,
    W: Write,
{
    let (body, terminator) = split_terminator(fmt);

    for point in points {
        point.write_point(&mut *out, body)?;
    }

    if let Some(terminator) = terminator {
        out.write_all(terminator.as_bytes())?;
    }

    Ok(())
}
