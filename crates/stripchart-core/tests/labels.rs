// File: crates/stripchart-core/tests/labels.rs
// Purpose: Validate axis label/dash emission, formatters, and link colors.

use stripchart_core::types::{
    DEFAULT_LINK_COLOR, LINK_ALPHA, X_DASH_OFFSET, X_LABEL_OFFSET, Y_DASH_OFFSET, Y_LABEL_OFFSET,
};
use stripchart_core::{layout, GraphOptions, Rgba, ViewWindow};

const EPS: f32 = 1e-4;

#[test]
fn y_axis_always_has_eleven_labels_and_dashes() {
    let window = ViewWindow::unbounded(300.0, 150.0);
    for values in [vec![1.0], vec![1.0, 2.0, 3.0], (0..100).map(|i| i as f64).collect()] {
        let result = layout(&values, &window, &GraphOptions::default()).expect("layout");
        assert_eq!(result.y_labels.len(), 11);
        assert_eq!(result.y_dashes.len(), 11);
    }
}

#[test]
fn y_labels_span_the_container_evenly() {
    let values = [2.0, 8.0];
    let window = ViewWindow::unbounded(100.0, 220.0);
    let result = layout(&values, &window, &GraphOptions::default()).expect("layout");

    for (k, (label, dash)) in result.y_labels.iter().zip(&result.y_dashes).enumerate() {
        let expected_y = 220.0 * k as f32 / 10.0;
        assert!((label.position.y - expected_y).abs() < EPS);
        assert!((dash.position.y - expected_y).abs() < EPS);
        assert!((label.position.x - Y_LABEL_OFFSET).abs() < EPS);
        assert!((dash.position.x - Y_DASH_OFFSET).abs() < EPS);
    }
}

#[test]
fn x_labels_and_dashes_follow_samples() {
    let values = [1.0, 2.0, 3.0, 4.0];
    let window = ViewWindow::unbounded(100.0, 100.0);
    let result = layout(&values, &window, &GraphOptions::default()).expect("layout");

    assert_eq!(result.x_labels.len(), 4);
    assert_eq!(result.x_dashes.len(), 4);
    for ((label, dash), dot) in result.x_labels.iter().zip(&result.x_dashes).zip(&result.dots) {
        assert!((label.position.x - dot.position.x).abs() < EPS);
        assert!((dash.position.x - dot.position.x).abs() < EPS);
        assert!((label.position.y - X_LABEL_OFFSET).abs() < EPS);
        assert!((dash.position.y - X_DASH_OFFSET).abs() < EPS);
    }
}

#[test]
fn default_y_formatter_rounds_to_integers() {
    // Range [1, 3] pads to [0.6, 3.4]; the k=5 label value is exactly 2.0.
    let values = [1.0, 3.0];
    let window = ViewWindow::unbounded(100.0, 100.0);
    let result = layout(&values, &window, &GraphOptions::default()).expect("layout");

    assert_eq!(result.y_labels[0].text, "1");
    assert_eq!(result.y_labels[5].text, "2");
    assert_eq!(result.y_labels[10].text, "3");
}

#[test]
fn custom_y_formatter_is_applied() {
    let values = [0.0, 1.0];
    let window = ViewWindow::unbounded(100.0, 100.0);
    let opts = GraphOptions {
        y_label: Box::new(|v| format!("{v:.2}s")),
        ..GraphOptions::default()
    };
    let result = layout(&values, &window, &opts).expect("layout");
    assert_eq!(result.y_labels[0].text, "-0.20s");
    assert_eq!(result.y_labels[10].text, "1.20s");
}

#[test]
fn default_link_color_is_translucent_white() {
    let values = [1.0, 2.0];
    let window = ViewWindow::unbounded(100.0, 100.0);
    let result = layout(&values, &window, &GraphOptions::default()).expect("layout");
    assert_eq!(result.links[0].color, DEFAULT_LINK_COLOR);
}

#[test]
fn supplied_link_color_gets_alpha_override() {
    let values = [1.0, 2.0];
    let window = ViewWindow::unbounded(100.0, 100.0);
    let opts = GraphOptions {
        link_color: Some(Rgba::new(0.8, 0.1, 0.1, 1.0)),
        ..GraphOptions::default()
    };
    let result = layout(&values, &window, &opts).expect("layout");
    let color = result.links[0].color;
    assert_eq!(color, Rgba::new(0.8, 0.1, 0.1, LINK_ALPHA));
}

#[test]
fn visibility_flags_are_carried_not_filtered() {
    let values = [1.0, 2.0, 3.0];
    let window = ViewWindow::unbounded(100.0, 100.0);
    let opts = GraphOptions { show_dots: false, show_links: false, ..GraphOptions::default() };
    let result = layout(&values, &window, &opts).expect("layout");

    assert_eq!(result.dots.len(), 3);
    assert_eq!(result.links.len(), 2);
    assert!(result.dots.iter().all(|d| !d.visible));
    assert!(result.links.iter().all(|l| !l.visible));
}
