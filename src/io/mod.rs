use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::NwError;

pub mod outline;
pub mod sequences;

pub use outline::{load_outline, parse_outline};
pub use sequences::{load_tokens, tokenize, Tokenization};

/// Open a text file for reading, transparently decompressing files ending in `.gz`.
pub fn open_input(path: impl AsRef<Path>) -> Result<Box<dyn BufRead>, NwError> {
    let p = path.as_ref();
    let is_gzipped = p
        .file_name()
        .map(|v| v.to_string_lossy().ends_with(".gz"))
        .unwrap_or(false);

    let file = File::open(p).map_err(|source| NwError::FileReadError { source })?;

    let reader: Box<dyn BufRead> = if is_gzipped {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    Ok(reader)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::errors::NwError;

    use super::{load_tokens, Tokenization};

    fn data_path(fname: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(fname)
    }

    #[test]
    fn test_load_gzipped() {
        let tokens = load_tokens(data_path("words.txt.gz"), Tokenization::Words).unwrap();
        assert_eq!(tokens, vec!["the", "quick", "brown", "fox", "jumps"]);
    }

    #[test]
    fn test_missing_file() {
        let result = load_tokens(data_path("does_not_exist.txt"), Tokenization::Chars);
        assert!(matches!(result, Err(NwError::FileReadError { .. })));
    }
}
