//! Manifest download pipeline
//!
//! Fetches the manifest metadata, downloads the content archive for one
//! locale into a temporary file, unpacks it on the blocking pool and hands
//! the bytes to a [`ManifestSink`]. Each failure is tagged with the
//! [`ManifestStep`] that produced it.

pub mod database;
pub mod metadata;
pub mod sink;

pub use database::{DefinitionKey, ManifestDatabase};
pub use metadata::{ManifestMetadata, file_name_from_url};
pub use sink::{FilesystemSink, ManifestSink, ManifestWriter};

use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::endpoints::Destiny2;
use crate::error::{Error, ManifestStep, Result};
use crate::transport::Transport;
use crate::types::{ContentKind, Locale};

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// What to fetch and whether to refetch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ManifestOptions {
    pub locale: Locale,
    pub kind: ContentKind,
    /// Download even when the sink already holds the file
    pub force: bool,
}

impl ManifestOptions {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ContentKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestUpdate {
    pub path: PathBuf,
    pub file_name: String,
    pub version: String,
    pub locale: Locale,
    pub kind: ContentKind,
    /// The file was already present and nothing was downloaded
    pub skipped: bool,
    /// Bytes written to the sink, zero when skipped
    pub bytes: u64,
}

/// Downloads manifest content through a transport into a sink.
#[derive(Clone)]
pub struct ManifestPipeline<'a> {
    transport: &'a Transport,
    sink: Arc<dyn ManifestSink>,
}

impl std::fmt::Debug for ManifestPipeline<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManifestPipeline")
            .field("sink", &self.sink.describe())
            .finish_non_exhaustive()
    }
}

impl<'a> ManifestPipeline<'a> {
    pub fn new(transport: &'a Transport, sink: Arc<dyn ManifestSink>) -> Self {
        Self { transport, sink }
    }

    pub fn sink(&self) -> &dyn ManifestSink {
        self.sink.as_ref()
    }

    /// Fetch and parse the current manifest metadata.
    pub async fn fetch_metadata(&self) -> Result<ManifestMetadata> {
        let envelope = Destiny2::new(self.transport)
            .get_destiny_manifest()
            .await
            .map_err(|e| e.at_step(ManifestStep::Metadata))?;
        ManifestMetadata::from_envelope(&envelope).map_err(|e| e.at_step(ManifestStep::Metadata))
    }

    /// Bring the sink up to date for one locale and content kind.
    pub async fn run(&self, options: ManifestOptions) -> Result<ManifestUpdate> {
        let started = Instant::now();
        let metadata = self.fetch_metadata().await?;

        let path = metadata
            .content_path(options.locale, options.kind)
            .ok_or_else(|| {
                Error::unexpected_response(format!(
                    "manifest has no {} path for locale {}",
                    options.kind, options.locale
                ))
                .at_step(ManifestStep::Metadata)
            })?;
        let url = self
            .transport
            .content_url_for(path)
            .map_err(|e| e.at_step(ManifestStep::Metadata))?;
        let file_name = file_name_from_url(&url).map_err(|e| e.at_step(ManifestStep::Metadata))?;

        let mut update = ManifestUpdate {
            path: self.sink.location(&file_name),
            file_name,
            version: metadata.version.clone(),
            locale: options.locale,
            kind: options.kind,
            skipped: false,
            bytes: 0,
        };

        let present = self
            .sink
            .contains(&update.file_name)
            .map_err(|e| e.at_step(ManifestStep::Write))?;
        if present && !options.force {
            debug!(
                file = %update.file_name,
                version = %update.version,
                "Manifest content already present, skipping download"
            );
            update.skipped = true;
            return Ok(update);
        }

        let archive = self
            .download(url.as_str())
            .await
            .map_err(|e| e.at_step(ManifestStep::Download))?;

        let sink = Arc::clone(&self.sink);
        let file_name = update.file_name.clone();
        let kind = options.kind;
        let (path, bytes) =
            tokio::task::spawn_blocking(move || unpack(archive, kind, sink.as_ref(), &file_name))
                .await
                .map_err(|e| Error::Io(io::Error::other(e)).at_step(ManifestStep::Decompress))??;

        update.path = path;
        update.bytes = bytes;
        info!(
            file = %update.path.display(),
            version = %update.version,
            locale = %update.locale,
            bytes = update.bytes,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Manifest content updated"
        );
        Ok(update)
    }

    /// Stream the archive into an anonymous temporary file.
    async fn download(&self, url: &str) -> Result<File> {
        let mut file = tokio::fs::File::from_std(tempfile::tempfile()?);
        let bytes = self.transport.download(url, &mut file).await?;
        debug!(url, bytes, "Manifest archive downloaded");
        Ok(file.into_std().await)
    }
}

/// Move archive content into the sink. Runs on the blocking pool.
fn unpack(
    mut archive: File,
    kind: ContentKind,
    sink: &dyn ManifestSink,
    file_name: &str,
) -> Result<(PathBuf, u64)> {
    archive
        .seek(SeekFrom::Start(0))
        .map_err(|e| Error::Io(e).at_step(ManifestStep::Decompress))?;

    let mut writer = sink
        .begin(file_name)
        .map_err(|e| e.at_step(ManifestStep::Write))?;

    let bytes = if kind.is_compressed() {
        let mut zip = zip::ZipArchive::new(BufReader::new(archive))
            .map_err(|e| Error::Archive(e).at_step(ManifestStep::Decompress))?;
        let index = (0..zip.len())
            .find(|&i| zip.by_index(i).is_ok_and(|entry| !entry.is_dir()))
            .ok_or_else(|| {
                Error::Archive(zip::result::ZipError::FileNotFound).at_step(ManifestStep::Decompress)
            })?;
        let mut entry = zip
            .by_index(index)
            .map_err(|e| Error::Archive(e).at_step(ManifestStep::Decompress))?;
        debug!(entry = entry.name(), size = entry.size(), "Unpacking manifest entry");
        pump(&mut entry, &mut writer)?
    } else {
        pump(&mut BufReader::new(archive), &mut writer)?
    };

    writer
        .flush()
        .map_err(|e| Error::Io(e).at_step(ManifestStep::Write))?;
    let path = writer.commit().map_err(|e| e.at_step(ManifestStep::Write))?;
    Ok((path, bytes))
}

/// Copy until EOF, attributing read failures to decompression and write
/// failures to the sink.
fn pump<R, W>(reader: &mut R, writer: &mut W) -> Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buf = vec![0u8; COPY_BUFFER_SIZE];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => return Ok(total),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::Io(e).at_step(ManifestStep::Decompress)),
        };
        writer
            .write_all(&buf[..n])
            .map_err(|e| Error::Io(e).at_step(ManifestStep::Write))?;
        total += n as u64;
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::InvalidData, "Invalid checksum"))
        }
    }

    #[test]
    fn test_pump_copies_everything() {
        let data = vec![7u8; COPY_BUFFER_SIZE * 2 + 13];
        let mut out = Vec::new();
        let copied = pump(&mut Cursor::new(&data), &mut out).expect("Operation should succeed");
        assert_eq!(copied, data.len() as u64);
        assert_eq!(out, data);
    }

    #[test]
    fn test_pump_attributes_failures_to_steps() {
        let err = pump(&mut Cursor::new(b"abc"), &mut FailingWriter).expect_err("should fail");
        assert_eq!(err.manifest_step(), Some(ManifestStep::Write));

        let err = pump(&mut FailingReader, &mut Vec::new()).expect_err("should fail");
        assert_eq!(err.manifest_step(), Some(ManifestStep::Decompress));
    }

    #[test]
    fn test_options_builder() {
        let options = ManifestOptions::new(Locale::German)
            .with_kind(ContentKind::JsonWorldContent)
            .with_force(true);
        assert_eq!(options.locale, Locale::German);
        assert_eq!(options.kind, ContentKind::JsonWorldContent);
        assert!(options.force);
        assert_eq!(ManifestOptions::default().locale, Locale::English);
    }
}
