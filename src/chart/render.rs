use super::layout::{Corner, QUADRANT_LABELS};
use super::{ChartModel, ChartRenderer, PointMarker, Rgb, WinPctScale, rd_yl_bu_r};
use crate::constants::chart::{
    COLORBAR_AREA_PX, COLORBAR_LABEL, FIGURE_BACKGROUND, HEIGHT_PX, LABEL_OFFSET_PX,
    MARKER_RADIUS_PX, PLOT_BACKGROUND, REFERENCE_LINE, TITLE, WIDTH_PX, X_LABEL, Y_LABEL,
};
use crate::error::AppError;
use image::RgbaImage;
use plotters::element::BitMapElement;
use plotters::prelude::*;
use plotters::style::FontTransform;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

const FONT: &str = "sans-serif";
const ANNOTATION_MARGIN_PX: i32 = 10;
const ANNOTATION_PADDING_PX: i32 = 6;
const COLORBAR_OFFSET_PX: i32 = 25;
const COLORBAR_WIDTH_PX: i32 = 22;
const TICK_LENGTH_PX: i32 = 4;

/// Writes the chart as a PNG file.
#[derive(Debug, Clone)]
pub struct PngRenderer {
    output_path: PathBuf,
}

impl PngRenderer {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }
}

fn color((r, g, b): Rgb) -> RGBColor {
    RGBColor(r, g, b)
}

impl ChartRenderer for PngRenderer {
    #[instrument(skip(self, model), fields(path = %self.output_path.display()))]
    fn render(&self, model: &ChartModel) -> Result<(), AppError> {
        let layout = &model.layout;
        let root = BitMapBackend::new(&self.output_path, (WIDTH_PX, HEIGHT_PX)).into_drawing_area();
        root.fill(&color(FIGURE_BACKGROUND))
            .map_err(AppError::render_error)?;

        let plot_area = if model.colorbar.is_some() {
            root.split_horizontally((WIDTH_PX - COLORBAR_AREA_PX) as i32).0
        } else {
            root.clone()
        };

        // The defensive axis is inverted by plotting negated ratings, so the
        // start limit (the larger value) lands at the bottom.
        let x_range = layout.x_limits.start..layout.x_limits.end;
        let y_range = -layout.y_limits.start..-layout.y_limits.end;

        let mut chart = ChartBuilder::on(&plot_area)
            .caption(TITLE, (FONT, 24))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)
            .map_err(AppError::render_error)?;

        chart
            .plotting_area()
            .fill(&color(PLOT_BACKGROUND))
            .map_err(AppError::render_error)?;

        // Tick labels are drawn by hand at the layout's ticks
        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(0)
            .y_labels(0)
            .x_desc(X_LABEL)
            .y_desc(Y_LABEL)
            .axis_desc_style((FONT, 16))
            .draw()
            .map_err(AppError::render_error)?;

        let (x_lo, x_hi) = (layout.x_limits.start, layout.x_limits.end);
        let (y_lo, y_hi) = (-layout.y_limits.start, -layout.y_limits.end);
        let (plot_x, plot_y) = chart.plotting_area().get_pixel_range();

        let x_tick_px: Vec<(i32, f64)> = layout
            .x_ticks
            .iter()
            .map(|&x| (chart.backend_coord(&(x, y_lo)).0, x))
            .collect();
        let y_tick_px: Vec<(i32, f64)> = layout
            .y_ticks
            .iter()
            .map(|&y| (chart.backend_coord(&(x_lo, -y)).1, y))
            .collect();
        draw_tick_labels(&root, &x_tick_px, &y_tick_px, &plot_x, &plot_y)?;

        // Grid
        let grid_style = BLACK.mix(0.15).stroke_width(1);
        for &x in &layout.x_ticks {
            chart
                .draw_series(DashedLineSeries::new(
                    vec![(x, y_lo), (x, y_hi)],
                    4,
                    4,
                    grid_style,
                ))
                .map_err(AppError::render_error)?;
        }
        for &y in &layout.y_ticks {
            chart
                .draw_series(DashedLineSeries::new(
                    vec![(x_lo, -y), (x_hi, -y)],
                    4,
                    4,
                    grid_style,
                ))
                .map_err(AppError::render_error)?;
        }

        // An average outside the limits would be clamped onto the border
        let reference_style = color(REFERENCE_LINE).stroke_width(2);
        if let Some(offense) = layout.offense_reference() {
            chart
                .draw_series(DashedLineSeries::new(
                    vec![(offense, y_lo), (offense, y_hi)],
                    8,
                    5,
                    reference_style,
                ))
                .map_err(AppError::render_error)?;
        } else {
            debug!("Offensive average {:.1} is off the chart", layout.averages.offense);
        }
        if let Some(defense) = layout.defense_reference() {
            chart
                .draw_series(DashedLineSeries::new(
                    vec![(x_lo, -defense), (x_hi, -defense)],
                    8,
                    5,
                    reference_style,
                ))
                .map_err(AppError::render_error)?;
        } else {
            debug!("Defensive average {:.1} is off the chart", layout.averages.defense);
        }

        chart
            .draw_series(model.points.iter().filter_map(|point| match point.marker {
                PointMarker::Colored(Some(rgb)) => Some(Circle::new(
                    (point.x, -point.y),
                    MARKER_RADIUS_PX,
                    color(rgb).filled(),
                )),
                _ => None,
            }))
            .map_err(AppError::render_error)?;

        let label_style = (FONT, 13).into_font().color(&BLACK);
        chart
            .draw_series(model.points.iter().filter_map(|point| {
                point.label.as_ref().map(|label| {
                    EmptyElement::at((point.x, -point.y))
                        + Text::new(label.clone(), LABEL_OFFSET_PX, label_style.clone())
                })
            }))
            .map_err(AppError::render_error)?;

        let mut logos_drawn = 0;
        for point in &model.points {
            if let PointMarker::Logo(Some(logo)) = &point.marker {
                let (px, py) = chart.backend_coord(&(point.x, -point.y));
                let (w, h) = logo.dimensions();
                let origin = (px - w as i32 / 2, py - h as i32 / 2);
                let element =
                    BitMapElement::with_owned_buffer(origin, (w, h), flatten_onto(logo, PLOT_BACKGROUND))
                        .ok_or_else(|| AppError::render_error("Logo buffer size mismatch"))?;
                root.draw(&element).map_err(AppError::render_error)?;
                logos_drawn += 1;
            }
        }
        debug!("Drew {logos_drawn} logos");

        draw_quadrant_labels(&root, &plot_x, &plot_y)?;

        if let Some(scale) = model.colorbar {
            draw_colorbar(&root, scale, &plot_y)?;
        }

        root.present().map_err(AppError::render_error)?;
        info!("Chart written to {}", self.output_path.display());
        Ok(())
    }
}

/// Draws tick marks and whole-number labels below the x axis and left of the
/// y axis. Ticks are `(pixel, value)` pairs.
fn draw_tick_labels<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    x_ticks: &[(i32, f64)],
    y_ticks: &[(i32, f64)],
    plot_x: &Range<i32>,
    plot_y: &Range<i32>,
) -> Result<(), AppError> {
    let font = (FONT, 13).into_font().color(&BLACK);

    let x_style = font.pos(Pos::new(HPos::Center, VPos::Top));
    for &(px, value) in x_ticks {
        root.draw(&PathElement::new(
            vec![(px, plot_y.end), (px, plot_y.end + TICK_LENGTH_PX)],
            BLACK,
        ))
        .map_err(AppError::render_error)?;
        root.draw_text(
            &format!("{value:.0}"),
            &x_style,
            (px, plot_y.end + TICK_LENGTH_PX + 2),
        )
        .map_err(AppError::render_error)?;
    }

    let y_style = font.pos(Pos::new(HPos::Right, VPos::Center));
    for &(py, value) in y_ticks {
        root.draw(&PathElement::new(
            vec![(plot_x.start - TICK_LENGTH_PX, py), (plot_x.start, py)],
            BLACK,
        ))
        .map_err(AppError::render_error)?;
        root.draw_text(
            &format!("{value:.0}"),
            &y_style,
            (plot_x.start - TICK_LENGTH_PX - 2, py),
        )
        .map_err(AppError::render_error)?;
    }

    Ok(())
}

fn draw_quadrant_labels<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    plot_x: &Range<i32>,
    plot_y: &Range<i32>,
) -> Result<(), AppError> {
    let style = (FONT, 14).into_font().color(&BLACK);

    for quadrant in &QUADRANT_LABELS {
        let mut width = 0;
        let mut line_height = 0;
        for line in quadrant.lines {
            let (w, h) = root
                .estimate_text_size(line, &style)
                .map_err(AppError::render_error)?;
            width = width.max(w as i32);
            line_height = line_height.max(h as i32);
        }
        let size = (
            width + 2 * ANNOTATION_PADDING_PX,
            line_height * quadrant.lines.len() as i32 + 2 * ANNOTATION_PADDING_PX,
        );
        let (x, y) = annotation_origin(quadrant.corner, plot_x, plot_y, size);

        root.draw(&Rectangle::new(
            [(x, y), (x + size.0, y + size.1)],
            WHITE.mix(0.85).filled(),
        ))
        .map_err(AppError::render_error)?;
        root.draw(&Rectangle::new(
            [(x, y), (x + size.0, y + size.1)],
            BLACK.mix(0.6).stroke_width(1),
        ))
        .map_err(AppError::render_error)?;

        for (i, line) in quadrant.lines.iter().enumerate() {
            let text_y = y + ANNOTATION_PADDING_PX + i as i32 * line_height;
            root.draw_text(line, &style, (x + ANNOTATION_PADDING_PX, text_y))
                .map_err(AppError::render_error)?;
        }
    }

    Ok(())
}

/// Top-left pixel of an annotation box of `size` pinned inside a corner of
/// the plotting area.
pub fn annotation_origin(
    corner: Corner,
    plot_x: &Range<i32>,
    plot_y: &Range<i32>,
    (width, height): (i32, i32),
) -> (i32, i32) {
    let left = plot_x.start + ANNOTATION_MARGIN_PX;
    let right = plot_x.end - ANNOTATION_MARGIN_PX - width;
    let top = plot_y.start + ANNOTATION_MARGIN_PX;
    let bottom = plot_y.end - ANNOTATION_MARGIN_PX - height;

    match corner {
        Corner::TopLeft => (left, top),
        Corner::TopRight => (right, top),
        Corner::BottomLeft => (left, bottom),
        Corner::BottomRight => (right, bottom),
    }
}

fn draw_colorbar<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    scale: WinPctScale,
    plot_y: &Range<i32>,
) -> Result<(), AppError> {
    let left = (WIDTH_PX - COLORBAR_AREA_PX) as i32 + COLORBAR_OFFSET_PX;
    let right = left + COLORBAR_WIDTH_PX;
    let height = (plot_y.end - plot_y.start).max(1);

    // One row per pixel, high values on top
    for row in 0..height {
        let t = 1.0 - f64::from(row) / f64::from((height - 1).max(1));
        let y = plot_y.start + row;
        root.draw(&Rectangle::new(
            [(left, y), (right, y + 1)],
            color(rd_yl_bu_r(t)).filled(),
        ))
        .map_err(AppError::render_error)?;
    }
    root.draw(&Rectangle::new(
        [(left, plot_y.start), (right, plot_y.end)],
        BLACK.stroke_width(1),
    ))
    .map_err(AppError::render_error)?;

    let tick_style = (FONT, 12)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    let mid = (scale.min + scale.max) / 2.0;
    for (value, y) in [
        (scale.max, plot_y.start),
        (mid, plot_y.start + height / 2),
        (scale.min, plot_y.end),
    ] {
        root.draw_text(&format!("{value:.2}"), &tick_style, (right + 4, y))
            .map_err(AppError::render_error)?;
    }

    let label_style = (FONT, 14)
        .into_font()
        .transform(FontTransform::Rotate90)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw_text(
        COLORBAR_LABEL,
        &label_style,
        (right + 50, plot_y.start + height / 2),
    )
    .map_err(AppError::render_error)?;

    Ok(())
}

/// Alpha-composites a logo onto a solid background and returns packed RGB
/// bytes, the pixel format of the bitmap backend.
pub fn flatten_onto(logo: &RgbaImage, background: Rgb) -> Vec<u8> {
    let (bg_r, bg_g, bg_b) = background;
    let blend = |fg: u8, bg: u8, alpha: f64| {
        (f64::from(fg) * alpha + f64::from(bg) * (1.0 - alpha)).round() as u8
    };

    logo.pixels()
        .flat_map(|pixel| {
            let [r, g, b, a] = pixel.0;
            let alpha = f64::from(a) / 255.0;
            [blend(r, bg_r, alpha), blend(g, bg_g, alpha), blend(b, bg_b, alpha)]
        })
        .collect()
}
