use std::fmt::{Display, Write};

use itertools::Itertools;

use super::alignment::Alignment;
use super::matrix::DpMatrix;

/// Truncate a displayed element to at most `width` characters
fn fit_width(s: String, width: usize) -> String {
    if s.chars().count() > width {
        s.chars().take(width).collect()
    } else {
        s
    }
}

/// Symbol describing an aligned pair: `=` equal elements, `-` deletion (top has a gap), `+`
/// insertion (left has a gap), `!` mismatch.
fn pair_delimiter(equal: bool, left_is_gap: bool, top_is_gap: bool) -> char {
    if equal {
        '='
    } else if top_is_gap {
        '-'
    } else if left_is_gap {
        '+'
    } else {
        '!'
    }
}

/// Render an alignment in two columns, one aligned pair per line.
///
/// The left sequence is right-justified, the top sequence left-justified, both truncated to
/// `col_width` characters. Elements are compared with `==` to pick the delimiter, see
/// [`print_alignment_by`] to customize this.
pub fn print_alignment<E, S, F>(aln: &Alignment<E, S>, col_width: usize, display: F) -> String
where
    E: PartialEq,
    S: Copy,
    F: Fn(&E) -> String,
{
    print_alignment_by(aln, col_width, display, |left, top| left == top)
}

/// Same as [`print_alignment`], with `eq` deciding whether an aligned pair is printed as equal.
pub fn print_alignment_by<E, S, F, Q>(aln: &Alignment<E, S>, col_width: usize, display: F, eq: Q) -> String
where
    S: Copy,
    F: Fn(&E) -> String,
    Q: Fn(&E, &E) -> bool,
{
    aln.aligned_left().iter()
        .zip_eq(aln.aligned_top())
        .zip_eq(aln.pairs())
        .map(|((left, top), pair)| {
            let delim = pair_delimiter(eq(left, top), pair.is_insertion(), pair.is_deletion());

            format!(
                "{:>w$}  {delim}  {:<w$}",
                fit_width(display(left), col_width),
                fit_width(display(top), col_width),
                w = col_width
            )
        })
        .join("\n")
}

/// Render a score or traceback matrix with the sequence elements as row and column labels.
pub fn print_matrix<E, T, F>(left: &[E], top: &[E], matrix: &DpMatrix<T>, col_width: usize, display: F) -> String
where
    T: Display,
    F: Fn(&E) -> String,
{
    let mut s = String::new();

    // Writing to a String can't fail
    let _ = writeln!(s, "left_seq = {}", left.iter().map(&display).join(""));
    let _ = writeln!(s, "top_seq = {}", top.iter().map(&display).join(""));
    s.push('\n');

    s.push_str(&" ".repeat(2 * col_width));
    for elem in top {
        let _ = write!(s, "{:>w$}", display(elem), w = col_width);
    }
    s.push('\n');

    for (row, cells) in matrix.iter_rows().enumerate() {
        let label = if row == 0 { String::new() } else { display(&left[row - 1]) };
        let _ = write!(s, "{:>w$}", label, w = col_width);

        for cell in cells {
            let _ = write!(s, "{:>w$}", cell.to_string(), w = col_width);
        }
        s.push('\n');
    }

    s
}
