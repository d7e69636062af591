// File: crates/stripchart-core/src/options.rs
// Summary: Layout configuration: visibility flags, baseline mode, label formatters.

use crate::types::{Rgba, DEFAULT_LINK_COLOR, LINK_ALPHA};

/// Formats an x-axis label from the sample's window-relative slot and its
/// original series index.
pub type XLabelFormatter = Box<dyn Fn(usize, usize) -> String>;

/// Formats a y-axis label from the axis value at that tick.
pub type YLabelFormatter = Box<dyn Fn(f64) -> String>;

/// Per-call layout configuration. Every field has a documented default, so
/// `GraphOptions { zero_baseline: true, ..GraphOptions::default() }` is the
/// expected way to override a subset.
pub struct GraphOptions {
    /// Visibility flag carried on emitted dots; does not filter data.
    pub show_dots: bool,
    /// Visibility flag carried on emitted links.
    pub show_links: bool,
    /// Force the y-scale minimum to 0 after padding.
    pub zero_baseline: bool,
    /// Link color; `None` uses translucent white. The alpha channel of a
    /// supplied color is always overridden to 0.5.
    pub link_color: Option<Rgba>,
    /// X-axis label formatter. Default renders the original series index as
    /// plain decimal digits, locale-invariant.
    pub x_label: XLabelFormatter,
    /// Y-axis label formatter. Default rounds half-away-from-zero to the
    /// nearest integer and renders plain decimal digits.
    pub y_label: YLabelFormatter,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            show_dots: true,
            show_links: true,
            zero_baseline: false,
            link_color: None,
            x_label: Box::new(|_, series_index| series_index.to_string()),
            y_label: Box::new(|v| (v.round() as i64).to_string()),
        }
    }
}

impl GraphOptions {
    /// Link color with the alpha override applied.
    pub fn effective_link_color(&self) -> Rgba {
        match self.link_color {
            None => DEFAULT_LINK_COLOR,
            Some(c) => c.with_alpha(LINK_ALPHA),
        }
    }
}
