use std::io;
use std::io::BufRead;
use std::num::ParseIntError;

use thiserror::Error;

use crate::common::LP;
use crate::grid_loop::{Edge, GridLoop, GridLoopField};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Format error")]
    Format,
}

impl From<ParseIntError> for Error {
    fn from(_: ParseIntError) -> Error {
        Error::Format
    }
}

fn is_comment(s: &str) -> bool {
    s.starts_with('#')
}

/// Reads the next line which is neither blank nor a `#` comment into `buf`.
pub fn next_valid_line<R: BufRead + ?Sized>(reader: &mut R, buf: &mut String) -> io::Result<usize> {
    loop {
        buf.clear();
        let len = reader.read_line(buf)?;
        if len == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no valid line before end of input",
            ));
        }

        if !buf.trim().is_empty() && !is_comment(buf) {
            return Ok(len);
        }
    }
}

fn edge_of_char(c: char) -> Result<Option<Edge>, Error> {
    match c {
        '-' | '|' => Ok(Some(Edge::Line)),
        'x' => Ok(Some(Edge::Blank)),
        ' ' => Ok(None),
        _ => Err(Error::Format),
    }
}

/// Decides the edges drawn in an edge diagram, one at a time in row-major order.
///
/// Row `y` holds the characters at `LP(y, 0), LP(y, 1), ...`. At edge positions
/// `-` and `|` are lines, `x` is a blank and a space is undecided; characters at
/// vertices and cells are ignored. Nothing is decided if the diagram is malformed.
pub fn apply_edge_diagram<T, S>(field: &mut T, rows: &[S]) -> Result<(), Error>
where
    T: GridLoopField,
    S: AsRef<str>,
{
    let height = field.grid_loop().height() * 2 + 1;
    let width = field.grid_loop().width() * 2 + 1;

    if rows.len() > height as usize {
        return Err(Error::Format);
    }

    let mut decisions = vec![];
    for (y, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.chars().count() > width as usize {
            return Err(Error::Format);
        }
        for (x, c) in row.chars().enumerate() {
            let pos = LP(y as i32, x as i32);
            if !pos.is_edge() {
                continue;
            }
            if let Some(status) = edge_of_char(c)? {
                decisions.push((pos, status));
            }
        }
    }

    for (pos, status) in decisions {
        GridLoop::decide_edge(field, pos, status);
    }
    Ok(())
}

/// Reads a field from a header line `height width` followed by its edge diagram.
pub fn read_edge_diagram<R: BufRead + ?Sized>(reader: &mut R) -> Result<GridLoop, Error> {
    let mut buffer = String::new();

    next_valid_line(reader, &mut buffer)?;
    let mut header = buffer.split_whitespace();
    let height = header.next().ok_or(Error::Format)?.parse::<i32>()?;
    let width = header.next().ok_or(Error::Format)?.parse::<i32>()?;
    if header.next().is_some() || height <= 0 || width <= 0 {
        return Err(Error::Format);
    }

    let mut rows = vec![];
    for _ in 0..(height * 2 + 1) {
        buffer.clear();
        if reader.read_line(&mut buffer)? == 0 {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "edge diagram is truncated",
            )));
        }
        rows.push(buffer.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string());
    }

    let mut ret = GridLoop::new(height, width);
    apply_edge_diagram(&mut ret, &rows[..])?;
    Ok(ret)
}
