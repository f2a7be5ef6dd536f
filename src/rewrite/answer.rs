//! Speech answers and the append-only answer log.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::extract::NumericContext;

// ---------------------------------------------------------------------------
// SpeechAnswer
// ---------------------------------------------------------------------------

/// The spoken phrase chosen for one number, with the context it came from.
///
/// Renders as `Number: {number}, Context: {context}, Answer: {phrase}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechAnswer {
    /// Surface text of the number, as extracted.
    pub number: String,
    /// Space-joined window the number was phrased from.
    pub context: String,
    /// Spoken form returned by the service, on a single line.
    pub phrase: String,
}

impl SpeechAnswer {
    /// Line breaks inside `phrase` are collapsed so a record always fits on
    /// one log line.
    pub fn new(source: &NumericContext, phrase: &str) -> Self {
        Self {
            number: source.number.clone(),
            context: source.context.clone(),
            phrase: phrase.split_whitespace().collect::<Vec<_>>().join(" "),
        }
    }
}

impl fmt::Display for SpeechAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Number: {}, Context: {}, Answer: {}",
            self.number, self.context, self.phrase
        )
    }
}

// ---------------------------------------------------------------------------
// AnswerLog
// ---------------------------------------------------------------------------

/// Append-only writer for [`SpeechAnswer`] records, one per line.
///
/// The file is opened once per batch.  Dropping the log flushes whatever
/// was buffered, so records written before an early return are kept.
pub struct AnswerLog {
    writer: BufWriter<File>,
    path: PathBuf,
    written: usize,
}

impl AnswerLog {
    /// Open `path` for appending, creating it (and its parent directory) if
    /// needed.
    pub fn open(path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
            written: 0,
        })
    }

    pub fn append(&mut self, answer: &SpeechAnswer) -> io::Result<()> {
        writeln!(self.writer, "{answer}")?;
        self.written += 1;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and close, returning how many records this batch appended.
    pub fn finish(mut self) -> io::Result<usize> {
        self.writer.flush()?;
        Ok(self.written)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn context(number: &str, context: &str) -> NumericContext {
        NumericContext {
            number: number.into(),
            context: context.into(),
        }
    }

    #[test]
    fn renders_record_format() {
        let answer = SpeechAnswer::new(&context("100", "price is $ 100 , and"), "one hundred dollars");
        assert_eq!(
            answer.to_string(),
            "Number: 100, Context: price is $ 100 , and, Answer: one hundred dollars"
        );
    }

    #[test]
    fn multiline_phrase_is_collapsed() {
        let answer = SpeechAnswer::new(&context("3", "bought 3 items"), "  three\n\nitems ");
        assert_eq!(answer.phrase, "three items");
        assert_eq!(answer.to_string().lines().count(), 1);
    }

    #[test]
    fn appends_after_existing_content() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("answer.txt");
        std::fs::write(&path, "earlier run\n").expect("seed");

        let mut log = AnswerLog::open(&path).expect("open");
        log.append(&SpeechAnswer::new(&context("1", "a 1 b"), "one")).unwrap();
        log.append(&SpeechAnswer::new(&context("2", "c 2 d"), "two")).unwrap();
        assert_eq!(log.finish().unwrap(), 2);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, [
            "earlier run",
            "Number: 1, Context: a 1 b, Answer: one",
            "Number: 2, Context: c 2 d, Answer: two",
        ]);
    }

    #[test]
    fn creates_missing_parent_directory() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("logs").join("answer.txt");

        let log = AnswerLog::open(&path).expect("open");
        assert_eq!(log.path(), path.as_path());
        assert_eq!(log.finish().unwrap(), 0);
        assert!(path.exists());
    }

    #[test]
    fn dropping_without_finish_still_flushes() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("answer.txt");

        {
            let mut log = AnswerLog::open(&path).expect("open");
            log.append(&SpeechAnswer::new(&context("5", "x 5"), "five")).unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Number: 5, Context: x 5, Answer: five\n");
    }

    #[test]
    fn opening_a_directory_fails() {
        let dir = tempdir().expect("temp dir");
        assert!(AnswerLog::open(dir.path()).is_err());
    }
}
