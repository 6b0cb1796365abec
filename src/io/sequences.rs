use std::io::BufRead;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::NwError;
use super::open_input;

/// How a text is split into sequence elements
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tokenization {
    /// Every character is an element. Line breaks are skipped.
    #[default]
    Chars,

    /// Whitespace separated words
    Words,

    /// Every line is an element
    Lines,
}

pub fn tokenize(reader: impl BufRead, mode: Tokenization) -> Result<Vec<String>, NwError> {
    let mut tokens = Vec::new();

    for line in reader.lines() {
        let line = line?;

        match mode {
            Tokenization::Chars => tokens.extend(line.chars().map(String::from)),
            Tokenization::Words => tokens.extend(line.split_whitespace().map(str::to_string)),
            Tokenization::Lines => tokens.push(line),
        }
    }

    Ok(tokens)
}

pub fn load_tokens(path: impl AsRef<Path>, mode: Tokenization) -> Result<Vec<String>, NwError> {
    let reader = open_input(path)?;

    tokenize(reader, mode)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{tokenize, Tokenization};

    const TEXT: &str = "the quick\r\nbrown  fox\n\njumps";

    #[test]
    fn test_tokenize_chars() {
        let tokens = tokenize(Cursor::new("ab\nc"), Tokenization::Chars).unwrap();
        assert_eq!(tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tokenize_words() {
        let tokens = tokenize(Cursor::new(TEXT), Tokenization::Words).unwrap();
        assert_eq!(tokens, vec!["the", "quick", "brown", "fox", "jumps"]);
    }

    #[test]
    fn test_tokenize_lines() {
        let tokens = tokenize(Cursor::new(TEXT), Tokenization::Lines).unwrap();
        assert_eq!(tokens, vec!["the quick", "brown  fox", "", "jumps"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize(Cursor::new(""), Tokenization::Chars).unwrap().is_empty());
    }
}
