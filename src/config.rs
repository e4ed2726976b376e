use crate::cli::GcReport;
use std::path::{Path, PathBuf};

/// Directory a bare table file name is placed in
const TABLE_DIR: &str = "Resultados";

/// Resolved input and output locations of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) input: PathBuf,
    pub(crate) table: PathBuf,
    pub(crate) chart: PathBuf,
}

impl Config {
    pub(crate) fn new(input: PathBuf, table: PathBuf, chart: PathBuf) -> Config {
        Config {
            input,
            table,
            chart,
        }
    }

    /// Resolves the command line paths.
    ///
    /// The input is joined onto `--input-dir` when given. Outputs are joined onto
    /// `--output-dir`; a table path without a directory component goes into `Resultados/`.
    /// Absolute paths are kept as they are.
    pub(crate) fn from_args(args: &GcReport) -> Config {
        let input = match &args.input_dir {
            Some(dir) => dir.join(&args.input),
            None => args.input.clone(),
        };
        let table = if is_bare_file_name(&args.output_csv) {
            args.output_dir.join(TABLE_DIR).join(&args.output_csv)
        } else {
            args.output_dir.join(&args.output_csv)
        };
        Config::new(input, table, args.output_dir.join(&args.output_image))
    }
}

fn is_bare_file_name(path: &Path) -> bool {
    path.parent().is_some_and(|parent| parent.as_os_str().is_empty())
}
