// File: crates/stripchart-core/src/series.rs
// Summary: Visible-window selection over a value series.

/// Select the trailing visible window of `values`.
///
/// `max_visible <= 0` selects the whole series; otherwise the window holds
/// the last `min(max_visible, len)` samples. Returns the original index of
/// the first visible sample together with the visible slice, so callers can
/// recover original series indices for labeling.
pub fn trailing_window(values: &[f64], max_visible: i32) -> (usize, &[f64]) {
    let count = if max_visible <= 0 {
        values.len()
    } else {
        (max_visible as usize).min(values.len())
    };
    let first = values.len() - count;
    (first, &values[first..])
}
