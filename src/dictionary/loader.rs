//! Dictionary loading utilities
//!
//! Reads newline-delimited word lists from disk.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file
///
/// Lines are trimmed and lowercased; blank lines, non-alphabetic entries and
/// words whose length is not `word_length` are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("valid-wordle-words.txt", 5).unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dictionary = Dictionary::from_text(&content, word_length);

    log::info!(
        "Loaded {} {word_length}-letter words from {}",
        dictionary.len(),
        path.display()
    );

    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use std::io::Write;

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wordle_game_{name}_{}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn load_normalizes_and_filters() {
        let path = temp_file("load", "Crane\r\n  slate \n\ntoolong\nabc\nsh0rt\nCRANE\n");
        let dictionary = load_from_file(&path, 5).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains(&Word::new("crane").unwrap()));
        assert!(dictionary.contains(&Word::new("slate").unwrap()));
    }

    #[test]
    fn load_respects_word_length() {
        let path = temp_file("length", "crane\ncranes\nstone\nstones\n");
        let dictionary = load_from_file(&path, 6).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dictionary.word_length(), 6);
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains(&Word::new("stones").unwrap()));
    }

    #[test]
    fn load_missing_file_errors() {
        let result = load_from_file("/definitely/not/a/real/path.txt", 5);
        assert!(result.is_err());
    }
}
