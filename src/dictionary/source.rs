use log::debug;
use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Supplies the words the prefix index is built from.
pub trait WordSource {
    /// Load every word, in order.
    fn words(&self) -> Result<Vec<String>, WordSourceError>;
}

/// Failure modes when loading words. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("Fatal error while reading file: file not found")]
    NotFound(PathBuf),
    #[error("Fatal error while reading file")]
    Read { path: PathBuf, source: io::Error },
    #[error("Fatal error while reading file: could not locate the executable")]
    Locate(#[source] io::Error),
}

impl WordSourceError {
    /// The word list that couldn't be read, if it got as far as having a path.
    pub fn path(&self) -> Option<&Path> {
        match self {
            WordSourceError::NotFound(path) | WordSourceError::Read { path, .. } => Some(path),
            WordSourceError::Locate(_) => None,
        }
    }
}

/// A plain text word list with one lowercase word per line.
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileWordSource { path: path.into() }
    }

    /// A word list stored alongside the running executable, regardless of the working
    /// directory.
    pub fn beside_executable(filename: impl AsRef<Path>) -> Result<Self, WordSourceError> {
        Ok(FileWordSource::new(
            executable_dir()
                .map_err(WordSourceError::Locate)?
                .join(filename),
        ))
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileWordSource {
    fn words(&self) -> Result<Vec<String>, WordSourceError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => WordSourceError::NotFound(self.path.clone()),
            _ => WordSourceError::Read {
                path: self.path.clone(),
                source: e,
            },
        })?;
        let words = parse_words(&contents);
        debug!("Read {} words from {:?}", words.len(), self.path);
        Ok(words)
    }
}

/// Split a word list into lines, dropping only the line terminators.
pub fn parse_words(contents: &str) -> Vec<String> {
    contents.lines().map(str::to_owned).collect()
}

/// Directory containing the running executable.
pub fn executable_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "executable path has no parent directory",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_words, FileWordSource, WordSource, WordSourceError};
    use std::io::Write;

    #[test]
    fn parsing_words() {
        assert_eq!(parse_words("cat\ncar\ndog\n"), vec!["cat", "car", "dog"]);
        // Windows line endings
        assert_eq!(parse_words("cat\r\ncar\r\n"), vec!["cat", "car"]);
        // No trailing newline
        assert_eq!(parse_words("cat\ndog"), vec!["cat", "dog"]);
        assert!(parse_words("").is_empty());
    }

    #[test]
    fn reading_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "cat\ncar\ndog").unwrap();

        let source = FileWordSource::new(&path);
        assert_eq!(source.path(), path);
        assert_eq!(source.words().unwrap(), vec!["cat", "car", "dog"]);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileWordSource::new(dir.path().join("nope.txt"));
        let err = source.words().unwrap_err();
        assert!(matches!(err, WordSourceError::NotFound(_)));
        assert_eq!(
            err.to_string(),
            "Fatal error while reading file: file not found"
        );
    }

    #[test]
    fn unreadable_file() {
        // A directory can't be read as a string
        let dir = tempfile::tempdir().unwrap();
        let source = FileWordSource::new(dir.path());
        let err = source.words().unwrap_err();
        assert!(matches!(err, WordSourceError::Read { .. }));
        assert_eq!(err.to_string(), "Fatal error while reading file");
    }

    #[test]
    fn beside_executable() {
        let source = FileWordSource::beside_executable("words.txt").unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(source.path(), exe.parent().unwrap().join("words.txt"));
    }
}
