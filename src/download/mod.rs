//! Delivery of exported content as local downloads.
//!
//! The backend compiles the export; this module only places the returned text
//! on disk under the conventional `approved_content.<format>` name. Writes go
//! to a hidden `.part` sibling first and are renamed into place, so a failed
//! delivery never leaves a partial file behind.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::api::ReviewError;

/// Destination for exported downloads.
#[cfg_attr(test, mockall::automock)]
pub trait DownloadSink: Send + Sync {
    /// Stores `contents` under `file_name` and returns where it landed.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Io`] when the file cannot be written, or
    /// [`ReviewError::LocalPrecondition`] when `file_name` is not a plain
    /// file name.
    fn deliver(&self, file_name: &str, contents: &str) -> Result<Utf8PathBuf, ReviewError>;
}

/// Writes downloads into a directory on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryDownloads {
    directory: Utf8PathBuf,
}

impl DirectoryDownloads {
    /// Creates a sink writing into `directory`, created on first delivery.
    #[must_use]
    pub fn new(directory: impl Into<Utf8PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Returns the target directory.
    #[must_use]
    pub fn directory(&self) -> &Utf8Path {
        &self.directory
    }
}

impl Default for DirectoryDownloads {
    fn default() -> Self {
        Self::new(".")
    }
}

impl DownloadSink for DirectoryDownloads {
    fn deliver(&self, file_name: &str, contents: &str) -> Result<Utf8PathBuf, ReviewError> {
        ensure_plain_file_name(file_name)?;
        let dir = open_or_create_dir(&self.directory)?;
        let partial_name = format!(".{file_name}.part");

        let written = dir
            .write(&partial_name, contents.as_bytes())
            .and_then(|()| dir.rename(&partial_name, &dir, file_name));

        if let Err(error) = written {
            if let Err(cleanup_error) = dir.remove_file(&partial_name) {
                tracing::trace!("no partial download to remove: {cleanup_error}");
            }
            return Err(ReviewError::Io {
                message: format!("failed to write download '{file_name}': {error}"),
            });
        }

        let path = self.directory.join(file_name);
        tracing::info!("download written to {path}");
        Ok(path)
    }
}

/// Opens `directory` as a capability handle, creating it when missing.
pub(crate) fn open_or_create_dir(directory: &Utf8Path) -> Result<Dir, ReviewError> {
    let (root, relative) = if directory.is_absolute() {
        let relative = directory.strip_prefix("/").map_err(|_| ReviewError::Io {
            message: format!("failed to normalise directory '{directory}'"),
        })?;
        (open_ambient("/")?, relative)
    } else {
        (open_ambient(".")?, directory)
    };

    if relative.as_str().is_empty() || relative == Utf8Path::new(".") {
        return Ok(root);
    }

    root.create_dir_all(relative)
        .map_err(|error| ReviewError::Io {
            message: format!("failed to create directory '{directory}': {error}"),
        })?;
    root.open_dir(relative).map_err(|error| ReviewError::Io {
        message: format!("failed to open directory '{directory}': {error}"),
    })
}

fn open_ambient(path: &str) -> Result<Dir, ReviewError> {
    Dir::open_ambient_dir(path, ambient_authority()).map_err(|error| ReviewError::Io {
        message: format!("failed to open directory '{path}': {error}"),
    })
}

fn ensure_plain_file_name(file_name: &str) -> Result<(), ReviewError> {
    let is_plain = !file_name.is_empty()
        && file_name != "."
        && file_name != ".."
        && !file_name.contains(['/', '\\']);
    if is_plain {
        Ok(())
    } else {
        Err(ReviewError::precondition(format!(
            "download name '{file_name}' must be a plain file name"
        )))
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    use super::{DirectoryDownloads, DownloadSink};
    use crate::api::ReviewError;

    #[fixture]
    fn temp_dir() -> TempDir {
        TempDir::new().expect("temporary directory should be created")
    }

    fn utf8_path(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("temp path should be UTF-8")
    }

    #[rstest]
    fn deliver_writes_named_file(temp_dir: TempDir) {
        let root = utf8_path(&temp_dir);
        let sink = DirectoryDownloads::new(root.clone());

        let path = sink
            .deliver("approved_content.csv", "id,content\n")
            .expect("delivery should succeed");

        assert_eq!(path, root.join("approved_content.csv"));
        let written = std::fs::read_to_string(&path).expect("download should exist");
        assert_eq!(written, "id,content\n");
        assert!(!root.join(".approved_content.csv.part").exists());
    }

    #[rstest]
    fn deliver_creates_missing_directories(temp_dir: TempDir) {
        let target = utf8_path(&temp_dir).join("exports/today");
        let sink = DirectoryDownloads::new(target.clone());

        sink.deliver("approved_content.json", "[]")
            .expect("delivery should succeed");

        assert!(target.join("approved_content.json").exists());
    }

    #[rstest]
    fn deliver_replaces_previous_download(temp_dir: TempDir) {
        let root = utf8_path(&temp_dir);
        let sink = DirectoryDownloads::new(root.clone());

        sink.deliver("approved_content.text", "old")
            .expect("first delivery should succeed");
        sink.deliver("approved_content.text", "new")
            .expect("second delivery should succeed");

        let written =
            std::fs::read_to_string(root.join("approved_content.text")).expect("file should exist");
        assert_eq!(written, "new");
    }

    #[rstest]
    #[case::separator("../approved_content.csv")]
    #[case::empty("")]
    #[case::parent("..")]
    fn deliver_rejects_non_plain_names(temp_dir: TempDir, #[case] file_name: &str) {
        let sink = DirectoryDownloads::new(utf8_path(&temp_dir));

        let result = sink.deliver(file_name, "data");

        assert!(matches!(result, Err(ReviewError::LocalPrecondition { .. })));
    }
}
