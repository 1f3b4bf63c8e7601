//! Destinations for extracted manifest content

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Error, Result};

/// Staged output for one content file.
///
/// Nothing is visible at the destination until [`commit`](Self::commit)
/// succeeds. Dropping an uncommitted writer discards the staged bytes.
pub trait ManifestWriter: Write + Send {
    /// Publish the staged content, returning where it landed.
    fn commit(self: Box<Self>) -> Result<PathBuf>;
}

/// Where extracted manifest content goes.
pub trait ManifestSink: Send + Sync {
    /// Whether a complete file with this name is already present.
    fn contains(&self, file_name: &str) -> Result<bool>;

    /// Final location of a file with this name.
    fn location(&self, file_name: &str) -> PathBuf;

    /// Start staging a new file.
    fn begin(&self, file_name: &str) -> Result<Box<dyn ManifestWriter>>;

    /// Human readable description for logs.
    fn describe(&self) -> String;
}

/// Writes content files into a directory with atomic renames.
#[derive(Debug, Clone)]
pub struct FilesystemSink {
    dir: PathBuf,
}

impl FilesystemSink {
    /// Create the sink, creating `dir` if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            Error::configuration(format!(
                "cannot create manifest directory {}: {e}",
                dir.display()
            ))
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ManifestSink for FilesystemSink {
    fn contains(&self, file_name: &str) -> Result<bool> {
        check_file_name(file_name)?;
        match fs::metadata(self.dir.join(file_name)) {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn location(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    fn begin(&self, file_name: &str) -> Result<Box<dyn ManifestWriter>> {
        check_file_name(file_name)?;
        // Staging in the destination directory keeps the rename on one filesystem
        let staged = NamedTempFile::new_in(&self.dir)?;
        debug!(staging = %staged.path().display(), target = file_name, "Staging manifest file");
        Ok(Box::new(StagedFile {
            inner: BufWriter::new(staged),
            target: self.dir.join(file_name),
        }))
    }

    fn describe(&self) -> String {
        format!("directory {}", self.dir.display())
    }
}

struct StagedFile {
    inner: BufWriter<NamedTempFile>,
    target: PathBuf,
}

impl Write for StagedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl ManifestWriter for StagedFile {
    fn commit(self: Box<Self>) -> Result<PathBuf> {
        let Self { inner, target } = *self;
        let staged = inner.into_inner().map_err(|e| Error::Io(e.into_error()))?;
        staged.as_file().sync_all()?;
        staged.persist(&target).map_err(|e| Error::Io(e.error))?;
        Ok(target)
    }
}

fn check_file_name(file_name: &str) -> Result<()> {
    let plain = Path::new(file_name)
        .file_name()
        .is_some_and(|n| n == file_name);
    if plain && !file_name.is_empty() {
        Ok(())
    } else {
        Err(Error::invalid_request(format!(
            "manifest file name must be a plain file name: {file_name:?}"
        )))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .expect("Operation should succeed")
            .map(|e| {
                e.expect("Operation should succeed")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_commit_publishes_file() {
        let temp = TempDir::new().expect("Operation should succeed");
        let sink = FilesystemSink::new(temp.path().join("manifest")).expect("Operation should succeed");

        assert!(!sink.contains("abc.content").expect("Operation should succeed"));
        let mut writer = sink.begin("abc.content").expect("Operation should succeed");
        writer.write_all(b"hello").expect("Operation should succeed");
        let path = writer.commit().expect("Operation should succeed");

        assert_eq!(path, sink.location("abc.content"));
        assert_eq!(fs::read(&path).expect("Operation should succeed"), b"hello");
        assert!(sink.contains("abc.content").expect("Operation should succeed"));
        assert_eq!(entries(sink.dir()), vec!["abc.content".to_string()]);
    }

    #[test]
    fn test_dropped_writer_leaves_previous_content() {
        let temp = TempDir::new().expect("Operation should succeed");
        let sink = FilesystemSink::new(temp.path()).expect("Operation should succeed");
        fs::write(temp.path().join("abc.content"), b"complete").expect("Operation should succeed");

        {
            let mut writer = sink.begin("abc.content").expect("Operation should succeed");
            writer.write_all(b"partial").expect("Operation should succeed");
        }

        assert_eq!(
            fs::read(temp.path().join("abc.content")).expect("Operation should succeed"),
            b"complete"
        );
        assert_eq!(entries(temp.path()), vec!["abc.content".to_string()]);
    }

    #[test]
    fn test_rejects_path_like_names() {
        let temp = TempDir::new().expect("Operation should succeed");
        let sink = FilesystemSink::new(temp.path()).expect("Operation should succeed");
        for name in ["", "..", "a/b", "../escape"] {
            assert!(sink.begin(name).is_err(), "{name:?} should be rejected");
        }
    }

    #[test]
    fn test_uncreatable_directory_is_configuration_error() {
        let temp = TempDir::new().expect("Operation should succeed");
        let blocker = temp.path().join("file");
        fs::write(&blocker, b"x").expect("Operation should succeed");

        let err = FilesystemSink::new(blocker.join("sub")).expect_err("should fail");
        assert!(matches!(err, Error::Configuration(_)));
    }
}
