// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use file_pairs_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create every missing directory above `path`; no-op when they exist.
    pub fn ensure_parent_dir(path: &Path) -> InfraResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|source| write_failure(parent, source))
            }
            _ => Ok(()),
        }
    }

    /// Atomically replace `path` with `data` via a temp file in the same directory and a rename.
    ///
    /// Readers never observe a half-written file; on failure the previous content stays in place.
    pub fn atomic_write(path: &Path, data: &[u8]) -> InfraResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let file_name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{file_name}.{}.{nanos}.tmp", std::process::id()));

        let written = Self::write_synced(&tmp, data).and_then(|()| fs::rename(&tmp, path));
        if let Err(source) = written {
            let _ = fs::remove_file(&tmp);
            return Err(write_failure(path, source));
        }

        // Make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }

    fn write_synced(path: &Path, data: &[u8]) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(data)?;
        writer.flush()?;
        let _ = writer.get_ref().sync_all();
        Ok(())
    }
}

fn write_failure(path: &Path, source: std::io::Error) -> InfrastructureError {
    InfrastructureError::OutputWriteFailure { path: path.to_path_buf(), source }
}
