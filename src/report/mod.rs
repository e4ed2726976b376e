use crate::analysis::{AnalysisRun, REPORT_HEADER};
use crate::utils::OutputSink;
use anyhow::{anyhow, Result};
use csv::{Terminator, WriterBuilder};
use log::info;
use resvg::{tiny_skia, usvg};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tera::Tera;

const CHART_TITLE: &str = "GC content per sequence";
const CHART_X_LABEL: &str = "Sequence";
const CHART_Y_LABEL: &str = "% GC";

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 80.0;
const PLOT_HEIGHT: f64 = 220.0;
const BAR_SLOT: f64 = 48.0;
const MIN_PLOT_WIDTH: f64 = 400.0;
const MAX_PLOT_WIDTH: f64 = 1600.0;
/// Narrowest slot that still gets an identifier and value label
const MIN_LABELED_SLOT: f64 = 14.0;

/// Writes the run as a comma separated table with a header row, one row per record.
///
/// Nothing is written to `output_path` unless every row could be written.
pub(crate) fn render_table(output_path: &Path, run: &AnalysisRun) -> Result<PathBuf> {
    let mut sink = OutputSink::create(output_path)?;
    {
        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut sink);
        wtr.write_record(REPORT_HEADER)?;
        for record in run.records() {
            wtr.serialize(record)?;
        }
        wtr.flush()?;
    }
    let written = sink.commit()?;
    info!("Wrote {} records to {}", run.len(), written.display());
    Ok(written)
}

#[derive(Debug, Serialize)]
struct Tick {
    y: f64,
    label: String,
}

#[derive(Debug, Serialize)]
struct Bar {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    center: f64,
    label: String,
    value: String,
}

#[derive(Debug, Serialize)]
struct Chart {
    width: f64,
    height: f64,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    plot_width: f64,
    plot_height: f64,
    center_x: f64,
    center_y: f64,
    show_labels: bool,
    title: &'static str,
    x_label: &'static str,
    y_label: &'static str,
    ticks: Vec<Tick>,
    bars: Vec<Bar>,
}

impl Chart {
    /// Lays out one bar per record on a fixed 0-100 % axis.
    ///
    /// The plot never grows past `MAX_PLOT_WIDTH`; bars narrow instead and lose their text labels
    /// once they are too thin to carry them.
    fn gc_content(run: &AnalysisRun) -> Chart {
        let plot_width = (run.len() as f64 * BAR_SLOT).clamp(MIN_PLOT_WIDTH, MAX_PLOT_WIDTH);
        let slot = plot_width / run.len().max(1) as f64;
        let bottom = MARGIN_TOP + PLOT_HEIGHT;
        let ticks = (0..=4)
            .map(|i| {
                let value = i as f64 * 25.0;
                Tick {
                    y: bottom - value / 100.0 * PLOT_HEIGHT,
                    label: format!("{value}"),
                }
            })
            .collect();
        let bars = run
            .records()
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let height = record.gc_percent / 100.0 * PLOT_HEIGHT;
                let x = MARGIN_LEFT + i as f64 * slot + slot * 0.15;
                let width = slot * 0.7;
                Bar {
                    x,
                    y: bottom - height,
                    width,
                    height,
                    center: x + width / 2.0,
                    label: record.id.clone(),
                    value: record.gc_percent.to_string(),
                }
            })
            .collect();
        let width = MARGIN_LEFT + plot_width + MARGIN_RIGHT;
        let height = bottom + MARGIN_BOTTOM;
        Chart {
            width,
            height,
            left: MARGIN_LEFT,
            right: MARGIN_LEFT + plot_width,
            top: MARGIN_TOP,
            bottom,
            plot_width,
            plot_height: PLOT_HEIGHT,
            center_x: MARGIN_LEFT + plot_width / 2.0,
            center_y: MARGIN_TOP + PLOT_HEIGHT / 2.0,
            show_labels: slot >= MIN_LABELED_SLOT,
            title: CHART_TITLE,
            x_label: CHART_X_LABEL,
            y_label: CHART_Y_LABEL,
            ticks,
            bars,
        }
    }
}

/// Renders the SVG bar chart of GC content per record.
pub(crate) fn render_svg_chart(run: &AnalysisRun) -> Result<String> {
    let template = include_str!("../../resources/templates/gc_chart.svg.tera");
    let context = tera::Context::from_serialize(Chart::gc_content(run))?;
    Ok(Tera::one_off(template, &context, true)?)
}

fn svg_to_png(svg: &str) -> Result<Vec<u8>> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    let tree =
        usvg::Tree::from_str(svg, &opt).map_err(|e| anyhow!("usvg parse failed: {e}"))?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow!("cannot allocate a {}x{} image", size.width(), size.height()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    pixmap
        .encode_png()
        .map_err(|e| anyhow!("PNG encoding failed: {e}"))
}

/// Renders the GC content bar chart to a PNG file.
///
/// Returns `None` without touching `output_path` when the run has no records.
pub(crate) fn render_png_chart(output_path: &Path, run: &AnalysisRun) -> Result<Option<PathBuf>> {
    if run.is_empty() {
        return Ok(None);
    }
    let png = svg_to_png(&render_svg_chart(run)?)?;
    let mut sink = OutputSink::create(output_path)?;
    sink.write_all(&png)?;
    let written = sink.commit()?;
    info!("Saved GC content chart to {}", written.display());
    Ok(Some(written))
}
