// File: crates/stripchart-examples/src/bin/scroll.rs
// Summary: Demo loads a value series from CSV (or generates one) and writes
//          full, trailing-window, and zero-baseline SVG frames.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use stripchart_core::{layout, GraphOptions, Rgba, ViewWindow};
use stripchart_render_svg::SvgRenderer;

fn main() -> Result<()> {
    let values = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            println!("Using input file: {}", path.display());
            load_values_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => sample_wave(48),
    };
    println!("Loaded {} samples", values.len());

    if values.is_empty() {
        anyhow::bail!("no samples loaded -- expected one numeric value per row.");
    }

    let renderer = SvgRenderer::default();
    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir)?;

    // 1) Full series
    let window = ViewWindow::unbounded(320.0, 180.0);
    let opts = GraphOptions::default();
    let full = layout(&values, &window, &opts)?;
    let out = out_dir.join("scroll_full.svg");
    std::fs::write(&out, renderer.render(&full, &window))?;
    println!("Wrote {}", out.display());

    // 2) Trailing window of 12, as a live scrolling view would show it
    let window_tail = ViewWindow::new(320.0, 180.0, 12);
    let tail = layout(&values, &window_tail, &opts)?;
    let out = out_dir.join("scroll_tail.svg");
    std::fs::write(&out, renderer.render(&tail, &window_tail))?;
    println!("Wrote {}", out.display());

    // 3) Zero-baseline variant with a tinted line and fractional labels
    let opts_zero = GraphOptions {
        zero_baseline: true,
        link_color: Some(Rgba::opaque(0.25, 0.63, 1.0)),
        y_label: Box::new(|v| format!("{v:.1}")),
        ..GraphOptions::default()
    };
    let zero = layout(&values, &window, &opts_zero)?;
    let out = out_dir.join("scroll_zero.svg");
    std::fs::write(&out, renderer.render(&zero, &window))?;
    println!("Wrote {}", out.display());

    Ok(())
}

/// Generated waveform used when no CSV is supplied.
fn sample_wave(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| (i as f64 * 0.35).sin() * 4.0 + 6.0 + i as f64 * 0.05)
        .collect()
}

/// Load one value per record from the first column; expects a header row.
fn load_values_csv(path: &Path) -> Result<Vec<f64>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let field = rec.get(0).context("empty record")?;
        let value = field
            .trim()
            .parse::<f64>()
            .with_context(|| format!("bad value '{field}'"))?;
        out.push(value);
    }
    Ok(out)
}
