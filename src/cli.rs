use clap_derive::Parser;
use std::path::PathBuf;

/// GC content, codon counts and protein translation for every sequence of a FASTA file
#[derive(Parser, Debug)]
#[clap(version, about)]
pub(crate) struct GcReport {
    /// Path to the input FASTA file
    pub(crate) input: PathBuf,

    /// Directory the input path is resolved against
    #[clap(long)]
    pub(crate) input_dir: Option<PathBuf>,

    /// Directory all output paths are resolved against
    #[clap(long, default_value = ".")]
    pub(crate) output_dir: PathBuf,

    /// Path to the output CSV file. A bare file name is placed in `Resultados/`.
    #[clap(long, default_value = "Resultados/analisis.csv")]
    pub(crate) output_csv: PathBuf,

    /// Path to the output PNG chart
    #[clap(long, default_value = "imagenes/grafica_gc.png")]
    pub(crate) output_image: PathBuf,
}
