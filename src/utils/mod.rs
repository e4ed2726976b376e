use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub(crate) mod fasta;

pub(crate) fn create_output_dir(output_path: &Path) -> Result<()> {
    if !output_path.exists() {
        fs::create_dir_all(output_path)
            .with_context(|| format!("Failed to create directory {}", output_path.display()))?;
    }
    Ok(())
}

/// Directory a file at `path` lives in, `.` for a bare file name
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// A staged output file that only replaces its target once committed.
///
/// Creating a sink creates the target's parent directory and a temporary file next to the
/// target. Dropping a sink that was never committed deletes the temporary file and leaves the
/// target untouched.
pub(crate) struct OutputSink {
    target: PathBuf,
    staged: NamedTempFile,
}

impl OutputSink {
    pub(crate) fn create(target: &Path) -> Result<OutputSink> {
        let dir = parent_dir(target);
        create_output_dir(dir)?;
        let staged = tempfile::Builder::new()
            .prefix(".gc-report")
            .tempfile_in(dir)
            .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
        Ok(OutputSink {
            target: target.to_path_buf(),
            staged,
        })
    }

    /// Flushes the staged file and moves it onto the target path.
    pub(crate) fn commit(mut self) -> Result<PathBuf> {
        self.staged.flush()?;
        self.staged
            .persist(&self.target)
            .with_context(|| format!("Failed to write {}", self.target.display()))?;
        debug!("Committed {}", self.target.display());
        Ok(self.target)
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.staged.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.staged.flush()
    }
}
