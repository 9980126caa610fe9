//! Heatmap rendering of the rate matrix.
//!
//! Draws the grid as one filled rectangle per cell with a viridis color
//! scale, a color bar on the right mapping rate to color, and the axis
//! labeling of the upstream report: x `Predictions`, y `Ground Truth`.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::{Result, TrazarError};
use crate::matrix::RateMatrix;

const IMAGE_WIDTH: u32 = 1080;
const IMAGE_HEIGHT: u32 = 960;
const COLOR_BAR_WIDTH: u32 = 150;
const COLOR_BAR_STEPS: usize = 256;

/// Render the rate matrix to a PNG at `path`, overwriting any existing file.
///
/// Row 0 is drawn at the top, matching the orientation of the dumped matrix.
/// Cells are square: the grid pane is sized so both axes span the same pixel
/// extent per class.
pub fn render_heatmap(rates: &RateMatrix, path: &Path) -> Result<()> {
    let max_rate = positive_max(rates);

    let root = BitMapBackend::new(path, (IMAGE_WIDTH, IMAGE_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| TrazarError::render(e.to_string()))?;

    let (grid_pane, bar_pane) = root.split_horizontally((IMAGE_WIDTH - COLOR_BAR_WIDTH) as i32);
    draw_grid(&grid_pane, rates, max_rate)?;
    draw_color_bar(&bar_pane, max_rate)?;

    root.present().map_err(|e| TrazarError::render(e.to_string()))?;
    Ok(())
}

fn draw_grid(
    pane: &DrawingArea<BitMapBackend<'_>, Shift>,
    rates: &RateMatrix,
    max_rate: f64,
) -> Result<()> {
    let n = rates.n_classes() as i32;

    let mut chart = ChartBuilder::on(pane)
        .caption("Rates", ("sans-serif", 30))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d(0..n, 0..n)
        .map_err(|e| TrazarError::render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Predictions")
        .y_desc("Ground Truth")
        .y_label_formatter(&|y| format!("{}", (n - 1 - *y).max(0)))
        .draw()
        .map_err(|e| TrazarError::render(e.to_string()))?;

    for i in 0..n {
        for j in 0..n {
            let rate = rates.get(i as usize, j as usize);
            let color = viridis_color((rate / max_rate).clamp(0.0, 1.0));
            // Flip rows so row 0 lands at the top of the image
            let y = n - 1 - i;
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [(j, y), (j + 1, y + 1)],
                    color.filled(),
                )))
                .map_err(|e| TrazarError::render(e.to_string()))?;
        }
    }

    Ok(())
}

fn draw_color_bar(pane: &DrawingArea<BitMapBackend<'_>, Shift>, max_rate: f64) -> Result<()> {
    let mut chart = ChartBuilder::on(pane)
        .margin(16)
        .margin_top(62)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d(0..1, 0.0..max_rate)
        .map_err(|e| TrazarError::render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .draw()
        .map_err(|e| TrazarError::render(e.to_string()))?;

    let step = max_rate / COLOR_BAR_STEPS as f64;
    for k in 0..COLOR_BAR_STEPS {
        let lo = k as f64 * step;
        let color = viridis_color((k as f64 + 0.5) / COLOR_BAR_STEPS as f64);
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(0, lo), (1, lo + step)],
                color.filled(),
            )))
            .map_err(|e| TrazarError::render(e.to_string()))?;
    }

    Ok(())
}

/// Largest rate, floored so an all-zero matrix still gets a valid color axis.
fn positive_max(rates: &RateMatrix) -> f64 {
    let max = rates.max_rate();
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

/// Viridis colormap, linear interpolation between sampled anchor points.
/// Maps t in [0, 1] to RGB, dark purple through teal to yellow.
fn viridis_color(t: f64) -> RGBColor {
    const ANCHORS: [[f64; 3]; 5] = [
        [0.267, 0.005, 0.329],
        [0.229, 0.322, 0.546],
        [0.128, 0.567, 0.551],
        [0.369, 0.789, 0.383],
        [0.993, 0.906, 0.144],
    ];

    let t = t.clamp(0.0, 1.0);
    let pos = t * (ANCHORS.len() - 1) as f64;
    let idx = (pos.floor() as usize).min(ANCHORS.len() - 2);
    let frac = pos - idx as f64;

    let channel = |c: usize| {
        let v = ANCHORS[idx][c] + (ANCHORS[idx + 1][c] - ANCHORS[idx][c]) * frac;
        (v * 255.0).round().clamp(0.0, 255.0) as u8
    };

    RGBColor(channel(0), channel(1), channel(2))
}
