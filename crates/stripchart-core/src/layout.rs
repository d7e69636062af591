// File: crates/stripchart-core/src/layout.rs
// Summary: Scrolling line chart layout: dot/link placement and axis label/dash geometry.

use crate::error::LayoutError;
use crate::geometry::Vec2;
use crate::options::GraphOptions;
use crate::scale::{IndexScale, ValueRange, ValueScale};
use crate::series::trailing_window;
use crate::types::{
    Rgba, X_DASH_OFFSET, X_LABEL_OFFSET, Y_DASH_OFFSET, Y_LABEL_OFFSET, Y_SEPARATOR_COUNT,
};
use crate::view::ViewWindow;

/// One visible sample, placed in container space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    /// Index of the sample in the original series.
    pub series_index: usize,
    pub position: Vec2,
    pub visible: bool,
}

/// Segment connecting two temporally adjacent visible samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Rgba,
    pub visible: bool,
}

impl Link {
    /// Midpoint of the segment, where a rotated-quad adapter anchors it.
    pub fn center(&self) -> Vec2 {
        self.from.midpoint(self.to)
    }

    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }

    /// Orientation in degrees, counter-clockwise from the +x axis.
    pub fn angle_deg(&self) -> f32 {
        self.from.angle_deg_to(self.to)
    }
}

/// Axis tick label below the baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct XLabel {
    pub position: Vec2,
    pub text: String,
}

/// Axis tick label left of the container edge.
#[derive(Clone, Debug, PartialEq)]
pub struct YLabel {
    pub position: Vec2,
    pub text: String,
}

/// Tick mark marking a grid line position alongside an axis label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dash {
    pub position: Vec2,
}

/// Complete chart geometry for one layout call. Positions are in container
/// space: origin at the bottom-left corner, y growing upward; axis labels
/// and dashes sit at small fixed negative offsets outside the edges.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutResult {
    pub dots: Vec<Dot>,
    pub links: Vec<Link>,
    pub x_labels: Vec<XLabel>,
    pub y_labels: Vec<YLabel>,
    pub x_dashes: Vec<Dash>,
    pub y_dashes: Vec<Dash>,
}

/// Lay out the trailing visible window of `values` inside `window`.
///
/// The vertical range is taken over the visible samples only, padded by 20%
/// of the span on each side; a flat window falls back to a fixed span of 5.0
/// before padding. With `zero_baseline` the minimum is forced to 0 after
/// padding, which intentionally leaves the top and bottom margins asymmetric.
///
/// Every call is an independent computation: the engine keeps no state and
/// identical inputs produce identical results.
pub fn layout(
    values: &[f64],
    window: &ViewWindow,
    options: &GraphOptions,
) -> Result<LayoutResult, LayoutError> {
    window.validate()?;

    let (first_index, visible) = trailing_window(values, window.max_visible);
    let mut range = ValueRange::of(visible).ok_or(LayoutError::EmptySeries)?.padded();
    if options.zero_baseline {
        range = range.with_zero_min();
    }
    let y_scale = ValueScale::new(range, window.height);
    let x_scale = IndexScale::new(window.width, visible.len());
    let link_color = options.effective_link_color();

    let mut result = LayoutResult {
        dots: Vec::with_capacity(visible.len()),
        links: Vec::with_capacity(visible.len().saturating_sub(1)),
        x_labels: Vec::with_capacity(visible.len()),
        y_labels: Vec::with_capacity(Y_SEPARATOR_COUNT + 1),
        x_dashes: Vec::with_capacity(visible.len()),
        y_dashes: Vec::with_capacity(Y_SEPARATOR_COUNT + 1),
    };

    let mut last_position: Option<Vec2> = None;
    for (slot, &value) in visible.iter().enumerate() {
        let position = Vec2::new(x_scale.to_px(slot), y_scale.to_px(value));
        if let Some(from) = last_position {
            result.links.push(Link {
                from,
                to: position,
                color: link_color,
                visible: options.show_links,
            });
        }
        result.dots.push(Dot {
            series_index: first_index + slot,
            position,
            visible: options.show_dots,
        });

        result.x_labels.push(XLabel {
            position: Vec2::new(position.x, X_LABEL_OFFSET),
            text: (options.x_label)(slot, first_index + slot),
        });
        result.x_dashes.push(Dash { position: Vec2::new(position.x, X_DASH_OFFSET) });

        last_position = Some(position);
    }

    for k in 0..=Y_SEPARATOR_COUNT {
        let normalized = k as f64 / Y_SEPARATOR_COUNT as f64;
        let py = normalized as f32 * window.height;
        result.y_labels.push(YLabel {
            position: Vec2::new(Y_LABEL_OFFSET, py),
            text: (options.y_label)(y_scale.value_at(normalized)),
        });
        result.y_dashes.push(Dash { position: Vec2::new(Y_DASH_OFFSET, py) });
    }

    Ok(result)
}
