use bio::io::fasta;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The input FASTA file could not be opened or is not a regular file
#[derive(Debug, Error)]
#[error("cannot open FASTA file {}: {source}", path.display())]
pub(crate) struct InputUnavailable {
    pub(crate) path: PathBuf,
    #[source]
    pub(crate) source: io::Error,
}

/// Opens a FASTA file for record-by-record reading.
///
/// Multi-line records are joined by the reader. Fails with [`InputUnavailable`] when the path
/// is missing, unreadable, or names a directory or other non-file.
pub(crate) fn open_reader(
    fasta_path: &Path,
) -> Result<fasta::Records<BufReader<File>>, InputUnavailable> {
    let unavailable = |source| InputUnavailable {
        path: fasta_path.to_path_buf(),
        source,
    };
    let file = File::open(fasta_path).map_err(unavailable)?;
    let metadata = file.metadata().map_err(unavailable)?;
    if !metadata.is_file() {
        return Err(unavailable(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }
    Ok(fasta::Reader::new(file).records())
}
