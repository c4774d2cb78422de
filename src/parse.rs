//! Puzzle file parsing.
//!
//! The input is a shape catalogue followed by a region list:
//! - a shape block is a header line `<id>:` followed by rows of `#`
//!   (occupied) and `.` (empty), ended by a blank line or the next header
//! - a region line is `<width>x<height>: <count_0> <count_1> ...`, one
//!   count per catalogue shape
//!
//! Everything past this layer assumes validated input: shapes are
//! non-empty, region dimensions are positive, and every requirement vector
//! matches the catalogue length.

use std::num::ParseIntError;

use thiserror::Error;

use crate::pieces::{Coord, Puzzle, Region, Shape};

/// Errors produced while reading a puzzle file.
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: unexpected character '{found}' in shape row")]
    BadShapeCell { line: usize, found: char },
    #[error("line {line}: shape {id} has no occupied cells")]
    EmptyShape { line: usize, id: usize },
    #[error("line {line}: shape header '{id}:' out of order, expected '{expected}:'")]
    ShapeIdOutOfOrder {
        line: usize,
        id: usize,
        expected: usize,
    },
    #[error("line {line}: expected '<width>x<height>: <counts>'")]
    BadRegionHeader { line: usize },
    #[error("line {line}: region dimensions must be positive")]
    EmptyRegion { line: usize },
    #[error("line {line}: invalid number")]
    BadNumber {
        line: usize,
        #[source]
        source: ParseIntError,
    },
    #[error("line {line}: region lists {got} counts but the catalogue has {expected} shapes")]
    CountMismatch {
        line: usize,
        got: usize,
        expected: usize,
    },
    #[error("line {line}: expected a shape header, region line, or blank line")]
    UnexpectedLine { line: usize },
}

/// Parses a complete puzzle file into the shape catalogue and region list.
pub fn parse_puzzle(input: &str) -> Result<Puzzle, ParseError> {
    let mut shapes: Vec<Shape> = Vec::new();
    let mut regions: Vec<Region> = Vec::new();

    let mut lines = input.lines().enumerate().peekable();
    while let Some((index, raw)) = lines.next() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some((size, counts)) = split_region_line(line) {
            regions.push(parse_region(size, counts, line_no, shapes.len())?);
        } else if let Some(id) = line.strip_suffix(':') {
            let id: usize = id
                .trim()
                .parse()
                .map_err(|source| ParseError::BadNumber {
                    line: line_no,
                    source,
                })?;
            // ids double as requirement-vector indices, so order matters
            if id != shapes.len() {
                return Err(ParseError::ShapeIdOutOfOrder {
                    line: line_no,
                    id,
                    expected: shapes.len(),
                });
            }
            shapes.push(parse_shape_rows(&mut lines, line_no, id)?);
        } else {
            return Err(ParseError::UnexpectedLine { line: line_no });
        }
    }

    Ok(Puzzle { shapes, regions })
}

/// Splits a region line into its size and count parts.
///
/// Returns `None` for shape headers: a region header always has an `x`
/// before the colon, a shape header never does.
fn split_region_line(line: &str) -> Option<(&str, &str)> {
    let (size, counts) = line.split_once(':')?;
    size.contains('x').then_some((size, counts))
}

/// Consumes the `#`/`.` rows following a shape header.
///
/// Stops at a blank line, the next header, or end of input, leaving the
/// terminator for the caller.
fn parse_shape_rows<'a, I>(
    lines: &mut std::iter::Peekable<I>,
    header_line: usize,
    id: usize,
) -> Result<Shape, ParseError>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let mut cells: Vec<Coord> = Vec::new();
    let mut row = 0i32;

    while let Some(&(index, raw)) = lines.peek() {
        let line = raw.trim();
        if line.is_empty() || line.contains(':') {
            break;
        }
        for (col, ch) in line.chars().enumerate() {
            match ch {
                '#' => cells.push((row, col as i32)),
                '.' => {}
                found => {
                    return Err(ParseError::BadShapeCell {
                        line: index + 1,
                        found,
                    })
                }
            }
        }
        row += 1;
        lines.next();
    }

    if cells.is_empty() {
        return Err(ParseError::EmptyShape {
            line: header_line,
            id,
        });
    }
    Ok(Shape::new(cells))
}

fn parse_region(
    size: &str,
    counts: &str,
    line_no: usize,
    catalogue_len: usize,
) -> Result<Region, ParseError> {
    let (width, height) = size
        .split_once('x')
        .ok_or(ParseError::BadRegionHeader { line: line_no })?;
    let number = |text: &str| {
        text.trim().parse().map_err(|source| ParseError::BadNumber {
            line: line_no,
            source,
        })
    };
    let width: usize = number(width)?;
    let height: usize = number(height)?;
    if width == 0 || height == 0 {
        return Err(ParseError::EmptyRegion { line: line_no });
    }

    let counts: Vec<usize> = counts
        .split_whitespace()
        .map(number)
        .collect::<Result<_, _>>()?;
    if counts.len() != catalogue_len {
        return Err(ParseError::CountMismatch {
            line: line_no,
            got: counts.len(),
            expected: catalogue_len,
        });
    }

    Ok(Region {
        width,
        height,
        counts,
    })
}
