//! ASCII plotting of a chart series for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! All three series share one y-axis, matching how the original chart drew
//! them. Markers: sold `#`, efficiency `*`, quality `+`.

use crate::domain::ChartSeries;

const SOLD_CH: char = '#';
const EFFICIENCY_CH: char = '*';
const QUALITY_CH: char = '+';

/// Render the series as three polylines over the brand axis.
///
/// Returns a short placeholder for an empty series.
pub fn render_ascii_plot(series: &ChartSeries, width: usize, height: usize) -> String {
    if series.is_empty() {
        return "(no plot: empty series)\n".to_string();
    }

    let width = width.max(10);
    let height = height.max(5);

    let (y_min, y_max) = y_range(series).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Lines first, then vertex markers, so vertices stay visible where lines
    // cross.
    for (values, ch) in [
        (&series.sold, SOLD_CH),
        (&series.efficiency, EFFICIENCY_CH),
        (&series.quality, QUALITY_CH),
    ] {
        draw_polyline(&mut grid, values, y_min, y_max, ch);
    }
    for (values, ch) in [
        (&series.sold, SOLD_CH),
        (&series.efficiency, EFFICIENCY_CH),
        (&series.quality, QUALITY_CH),
    ] {
        for (i, &v) in values.iter().enumerate() {
            let x = map_x(i, values.len(), width);
            let y = map_y(v, y_min, y_max, height);
            grid[y][x] = ch;
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: y=[{y_min:.2}, {y_max:.2}] | sold '{SOLD_CH}'  efficiency '{EFFICIENCY_CH}'  quality '{QUALITY_CH}'\n"
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out.push_str(&format!("x: {}\n", series.labels.join(", ")));

    out
}

fn y_range(series: &ChartSeries) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for values in [&series.sold, &series.efficiency, &series.quality] {
        for &v in values.iter() {
            min_y = min_y.min(v);
            max_y = max_y.max(v);
        }
    }

    if min_y.is_finite() && max_y.is_finite() {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(i: usize, n: usize, width: usize) -> usize {
    if n <= 1 {
        return width / 2;
    }
    let u = i as f64 / (n as f64 - 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_polyline(grid: &mut [Vec<char>], values: &[f64], y_min: f64, y_max: f64, ch: char) {
    let height = grid.len();
    let width = grid[0].len();
    let n = values.len();

    let mut prev: Option<(usize, usize)> = None;
    for (i, &v) in values.iter().enumerate() {
        let x = map_x(i, n, width);
        let y = map_y(v, y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, x, y, ch);
        } else if grid[y][x] == ' ' {
            grid[y][x] = ch;
        }
        prev = Some((x, y));
    }
}

/// Integer line drawing (Bresenham-ish). Only writes into empty cells.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_golden_snapshot_small() {
        let series = ChartSeries {
            labels: vec!["A".to_string(), "B".to_string()],
            sold: vec![0.0, 10.0],
            efficiency: vec![5.0, 5.0],
            quality: vec![10.0, 0.0],
        };

        let txt = render_ascii_plot(&series, 10, 5);
        let expected = concat!(
            "Plot: y=[-0.50, 10.50] | sold '#'  efficiency '*'  quality '+'\n",
            "++      ##\n",
            "  ++  ##  \n",
            "****##****\n",
            "  ##  ++  \n",
            "##      ++\n",
            "x: A, B\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn empty_series_renders_placeholder() {
        let txt = render_ascii_plot(&ChartSeries::default(), 40, 10);
        assert_eq!(txt, "(no plot: empty series)\n");
    }

    #[test]
    fn single_brand_plots_without_panic() {
        let series = ChartSeries {
            labels: vec!["Solo".to_string()],
            sold: vec![12.0],
            efficiency: vec![0.8],
            quality: vec![0.9],
        };
        let txt = render_ascii_plot(&series, 20, 8);
        assert!(txt.contains('#'));
        assert!(txt.ends_with("x: Solo\n"));
    }
}
