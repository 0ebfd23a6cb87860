//! AQI trend chart rendering (SVG via plotters)

use plotters::prelude::*;
use plotters::style::FontTransform;
use std::path::{Path, PathBuf};

use crate::air::stats::CityTrend;
use crate::errors::{RecordError, Result};

const CHART_SIZE: (u32, u32) = (960, 540);

/// Writes trend charts into a directory and optionally opens them
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    out_dir: PathBuf,
    open: bool,
}

impl ChartRenderer {
    pub fn new(out_dir: impl Into<PathBuf>, open: bool) -> Self {
        ChartRenderer {
            out_dir: out_dir.into(),
            open,
        }
    }

    /// Render `trend` to `<out_dir>/aqi_trend_<city>.svg` and return the path
    pub fn render(&self, trend: &CityTrend) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join(chart_file_name(&trend.city));

        draw_trend(&path, trend)?;
        log::info!("Rendered {} point(s) to {}", trend.values.len(), path.display());

        if self.open {
            if let Err(e) = opener::open(&path) {
                log::warn!("Could not open {}: {}", path.display(), e);
            }
        }

        Ok(path)
    }
}

/// File name for a city's chart; anything but alphanumerics becomes `_`
pub fn chart_file_name(city: &str) -> String {
    let slug: String = city
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    format!("aqi_trend_{}.svg", slug)
}

fn chart_err<E: std::fmt::Display>(err: E) -> RecordError {
    RecordError::Chart(err.to_string())
}

fn draw_trend(path: &Path, trend: &CityTrend) -> Result<()> {
    let (Some(&lo), Some(&hi)) = (trend.values.iter().min(), trend.values.iter().max()) else {
        return Err(RecordError::Chart("nothing to plot".to_string()));
    };
    let (lo, hi) = (lo as f64, hi as f64);
    let pad = ((hi - lo) / 10.0).max(hi.abs().max(lo.abs()) / 1000.0).max(1.0);
    let points = trend.values.len();

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("AQI Trend for {}", trend.city), ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(90)
        .y_label_area_size(50)
        .build_cartesian_2d(0..points, (lo - pad)..(hi + pad))
        .map_err(chart_err)?;

    let date_label = |idx: &usize| trend.dates.get(*idx).cloned().unwrap_or_default();
    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("AQI")
        .x_labels(points.min(30))
        .x_label_formatter(&date_label)
        .x_label_style(("sans-serif", 12).into_font().transform(FontTransform::Rotate90))
        .y_label_formatter(&|aqi: &f64| format!("{:.0}", aqi))
        .draw()
        .map_err(chart_err)?;

    let series = || trend.values.iter().enumerate().map(|(i, v)| (i, *v as f64));
    chart
        .draw_series(LineSeries::new(series(), &BLUE))
        .map_err(chart_err)?;
    chart
        .draw_series(series().map(|point| Circle::new(point, 4, BLUE.filled())))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}
