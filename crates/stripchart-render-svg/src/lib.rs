// File: crates/stripchart-render-svg/src/lib.rs
// Summary: SVG renderer; reconciles a LayoutResult into a standalone SVG document.

use stripchart_core::{LayoutResult, Rgba, ViewWindow};

/// Renders layout geometry as an SVG document.
///
/// The layout's coordinate space has its origin at the bottom-left of the
/// container with y growing upward; SVG is top-left/y-down, so every y is
/// flipped against the container height. Margins reserve room for the axis
/// labels and dashes that sit outside the container edges. Elements whose
/// visibility flag is off are omitted from the document.
pub struct SvgRenderer {
    pub dot_radius: f32,
    pub link_width: f32,
    pub dash_size: f32,
    pub font_size: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub background: Rgba,
    pub dot_color: Rgba,
    pub label_color: Rgba,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            dot_radius: 4.0,
            link_width: 2.0,
            dash_size: 4.0,
            font_size: 8.0,
            margin_left: 36.0,
            margin_right: 12.0,
            margin_top: 12.0,
            margin_bottom: 24.0,
            background: Rgba::opaque(0.07, 0.07, 0.08),
            dot_color: Rgba::opaque(1.0, 1.0, 1.0),
            label_color: Rgba::opaque(0.82, 0.82, 0.86),
        }
    }
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, layout: &LayoutResult, window: &ViewWindow) -> String {
        let total_w = window.width + self.margin_left + self.margin_right;
        let total_h = window.height + self.margin_top + self.margin_bottom;
        // SVG y for a container-space y.
        let flip = |y: f32| window.height - y;

        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{total_w}\" height=\"{total_h}\" \
             viewBox=\"0 0 {total_w} {total_h}\">\n"
        ));
        out.push_str(&format!(
            "<rect width=\"{total_w}\" height=\"{total_h}\" fill=\"{}\"/>\n",
            css_color(self.background)
        ));
        out.push_str(&format!(
            "<g transform=\"translate({} {})\" font-family=\"sans-serif\" font-size=\"{}\">\n",
            self.margin_left, self.margin_top, self.font_size
        ));

        for link in layout.links.iter().filter(|l| l.visible) {
            out.push_str(&format!(
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
                link.from.x,
                flip(link.from.y),
                link.to.x,
                flip(link.to.y),
                css_color(link.color),
                self.link_width
            ));
        }

        for dot in layout.dots.iter().filter(|d| d.visible) {
            out.push_str(&format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>\n",
                dot.position.x,
                flip(dot.position.y),
                self.dot_radius,
                css_color(self.dot_color)
            ));
        }

        let half = self.dash_size * 0.5;
        for dash in &layout.x_dashes {
            let (x, y) = (dash.position.x, flip(dash.position.y));
            out.push_str(&format!(
                "<line x1=\"{x}\" y1=\"{}\" x2=\"{x}\" y2=\"{}\" stroke=\"{}\"/>\n",
                y - half,
                y + half,
                css_color(self.label_color)
            ));
        }
        for dash in &layout.y_dashes {
            let (x, y) = (dash.position.x, flip(dash.position.y));
            out.push_str(&format!(
                "<line x1=\"{}\" y1=\"{y}\" x2=\"{}\" y2=\"{y}\" stroke=\"{}\"/>\n",
                x - half,
                x + half,
                css_color(self.label_color)
            ));
        }

        for label in &layout.x_labels {
            out.push_str(&format!(
                "<text x=\"{}\" y=\"{}\" fill=\"{}\" text-anchor=\"middle\" \
                 dominant-baseline=\"hanging\">{}</text>\n",
                label.position.x,
                flip(label.position.y),
                css_color(self.label_color),
                escape_text(&label.text)
            ));
        }
        for label in &layout.y_labels {
            out.push_str(&format!(
                "<text x=\"{}\" y=\"{}\" fill=\"{}\" text-anchor=\"end\" \
                 dominant-baseline=\"middle\">{}</text>\n",
                label.position.x,
                flip(label.position.y),
                css_color(self.label_color),
                escape_text(&label.text)
            ));
        }

        out.push_str("</g>\n</svg>\n");
        out
    }
}

fn css_color(c: Rgba) -> String {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("rgba({},{},{},{})", channel(c.r), channel(c.g), channel(c.b), c.a)
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
