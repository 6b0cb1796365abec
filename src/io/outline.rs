//! Outline files describe the paragraph and sentence structure of a text, one element per line:
//!
//! ```text
//! # comment
//! p intro
//! s
//! s s1
//! paragraph
//! sentence s2
//! ```
//!
//! The first word gives the kind of element (`p`/`paragraph` or `s`/`sentence`), the optional
//! second word its identifier. Blank lines and lines starting with `#` are ignored.

use std::io::BufRead;
use std::path::Path;

use crate::aligner::scoring::TextElement;
use crate::errors::NwError;
use super::open_input;

impl TryFrom<&str> for TextElement<String> {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut parts = value.split_whitespace();

        let kind = parts.next().ok_or("Empty line")?;
        let id = parts.next().map(str::to_string);
        if parts.next().is_some() {
            return Err("Too many fields, expected a kind and an optional identifier");
        }

        match kind.to_ascii_lowercase().as_str() {
            "p" | "paragraph" => Ok(TextElement::Paragraph { id }),
            "s" | "sentence" => Ok(TextElement::Sentence { id }),
            _ => Err("Invalid element kind, expected 'p', 'paragraph', 's' or 'sentence'")
        }
    }
}

pub fn parse_outline(reader: impl BufRead) -> Result<Vec<TextElement<String>>, NwError> {
    let mut elements = Vec::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let element = TextElement::try_from(trimmed)
            .map_err(|msg| NwError::ParseError { line: lineno + 1, message: msg.to_string() })?;

        elements.push(element);
    }

    Ok(elements)
}

pub fn load_outline(path: impl AsRef<Path>) -> Result<Vec<TextElement<String>>, NwError> {
    let reader = open_input(path)?;

    parse_outline(reader)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::PathBuf;

    use crate::aligner::align;
    use crate::aligner::scoring::{ParagraphSentenceScoring, TextElement};
    use crate::errors::NwError;

    use super::{load_outline, parse_outline};

    #[test]
    fn test_parse_outline() {
        let text = "# intro\np 1\n  s\n\nSentence a\nparagraph\n";
        let elements = parse_outline(Cursor::new(text)).unwrap();

        assert_eq!(elements, vec![
            TextElement::Paragraph { id: Some("1".to_string()) },
            TextElement::Sentence { id: None },
            TextElement::Sentence { id: Some("a".to_string()) },
            TextElement::Paragraph { id: None },
        ]);
    }

    #[test]
    fn test_align_outline_files() {
        let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data");
        let left = load_outline(data_dir.join("outline_a.txt")).unwrap();
        let top = load_outline(data_dir.join("outline_b.txt")).unwrap();
        assert_eq!(left.len(), 12);
        assert_eq!(top.len(), 14);

        let aln = align(left, top, ParagraphSentenceScoring).unwrap();
        assert_eq!(aln.score(), 85);

        let gaps_left: Vec<_> = aln.pairs().iter()
            .enumerate()
            .filter(|(_, pair)| pair.is_insertion())
            .map(|(i, _)| i)
            .collect();
        let gaps_top: Vec<_> = aln.pairs().iter()
            .enumerate()
            .filter(|(_, pair)| pair.is_deletion())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(gaps_left, vec![0, 1, 7, 8]);
        assert_eq!(gaps_top, vec![3, 12]);

        for (l, t) in aln.aligned_left().iter().zip(aln.aligned_top()) {
            if let TextElement::Paragraph { id: Some(_) } = l {
                assert_eq!(l, t);
            }
        }
    }

    #[test]
    fn test_parse_outline_invalid_kind() {
        let result = parse_outline(Cursor::new("p 1\nheading 2\n"));

        assert!(matches!(result, Err(NwError::ParseError { line: 2, .. })));
    }

    #[test]
    fn test_parse_outline_too_many_fields() {
        let result = parse_outline(Cursor::new("s a b"));

        assert!(matches!(result, Err(NwError::ParseError { line: 1, .. })));
    }
}
