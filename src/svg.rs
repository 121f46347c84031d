//! SVG document surface.

use map_canvas::camera::{Point, Rect};
use map_canvas::render::Surface;
use map_canvas::zone::Color;

#[cfg(test)]
#[path = "svg_test.rs"]
mod tests;

/// A [`Surface`] that builds a standalone SVG document.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
}

impl SvgSurface {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, body: String::new() }
    }

    /// Close the document and return it.
    #[must_use]
    pub fn finish(self) -> String {
        let (w, h) = (self.width, self.height);
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

fn paint(attr: &str, color: Color) -> String {
    let hex = format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b);
    if color.a == 0xFF {
        format!("{attr}=\"{hex}\"")
    } else {
        let opacity = f64::from(color.a) / 255.0;
        format!("{attr}=\"{hex}\" {attr}-opacity=\"{opacity:.3}\"")
    }
}

impl Surface for SvgSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.body.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}/>\n",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            paint("fill", color)
        ));
    }

    fn fill_oval(&mut self, rect: Rect, color: Color) {
        let mid = rect.mid();
        self.body.push_str(&format!(
            "  <ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" {}/>\n",
            mid.x,
            mid.y,
            rect.width / 2.0,
            rect.height / 2.0,
            paint("fill", color)
        ));
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color) {
        self.body.push_str(&format!(
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {}/>\n",
            from.x,
            from.y,
            to.x,
            to.y,
            paint("stroke", color)
        ));
    }
}
