//! Canvas2D renderer for the radar chart.

use super::markup::label_align;
use crate::AppError;
use sportscope_core::{Point, RadarChart, RadarStyle};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Space kept between the outer ring and the canvas edge for axis labels.
const LABEL_MARGIN: f64 = 28.0;

/// Draws a [`RadarChart`] onto an HTML5 canvas.
pub struct RadarRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    style: RadarStyle,
}

impl RadarRenderer {
    /// Create a renderer for the given canvas element.
    pub fn new(canvas: HtmlCanvasElement, style: RadarStyle) -> Result<Self, AppError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| AppError::Dom(format!("failed to get 2d context: {e:?}")))?
            .ok_or_else(|| AppError::Dom("no 2d context available".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::Dom("failed to cast to CanvasRenderingContext2d".to_string()))?;

        Ok(Self { canvas, ctx, style })
    }

    /// Clear the canvas.
    pub fn clear(&self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    /// Draw `chart`, or leave the canvas blank when there is none.
    pub fn draw(&self, chart: Option<&RadarChart>) -> Result<(), JsValue> {
        self.clear();
        let Some(chart) = chart else {
            return Ok(());
        };

        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        let center = Point::new(width / 2.0, height / 2.0);
        let radius = (width.min(height) / 2.0 - LABEL_MARGIN).max(0.0);
        let layout = chart.layout(center, radius);

        self.ctx.set_line_width(1.0);
        self.ctx.set_stroke_style_str(&self.style.grid_color);
        for ring in &layout.rings {
            self.trace_path(ring, true);
            self.ctx.stroke();
        }

        self.ctx.set_stroke_style_str(&self.style.angle_line_color);
        for axis in &layout.axes {
            self.trace_path(&[layout.center, axis.end], false);
            self.ctx.stroke();
        }

        self.trace_path(&layout.polygon, true);
        self.ctx.set_fill_style_str(&self.style.fill_color);
        self.ctx.fill();
        self.ctx.set_stroke_style_str(&self.style.border_color);
        self.ctx.set_line_width(self.style.border_width);
        self.ctx.stroke();

        self.ctx.set_fill_style_str(&self.style.point_fill);
        self.ctx.set_stroke_style_str(&self.style.point_stroke);
        self.ctx.set_line_width(1.0);
        for vertex in &layout.polygon {
            self.ctx.begin_path();
            self.ctx.arc(
                vertex.x,
                vertex.y,
                self.style.point_radius,
                0.0,
                std::f64::consts::TAU,
            )?;
            self.ctx.fill();
            self.ctx.stroke();
        }

        self.ctx.set_font(&self.style.label_font);
        self.ctx.set_fill_style_str(&self.style.label_color);
        self.ctx.set_text_baseline("middle");
        for axis in &layout.axes {
            self.ctx
                .set_text_align(label_align(axis.label_anchor.x, layout.center.x));
            self.ctx
                .fill_text(&axis.label, axis.label_anchor.x, axis.label_anchor.y)?;
        }
        Ok(())
    }

    fn trace_path(&self, points: &[Point], closed: bool) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        if closed {
            self.ctx.close_path();
        }
    }
}
