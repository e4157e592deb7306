// Copyright 2026 the ScatterGL Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives a headless scatter plot and prints the specifications it produces.
//!
//! Run with `RUST_LOG=scattergl=debug` to watch the adapter's lifecycle.

use std::time::Duration;

use kurbo::Size;
use scattergl::headless::{RecordingEngine, StaticElement, StaticSurface};
use scattergl::{EncodingPatch, LoggingHandler, PlotAdapter, PlotConfig, Specification};
use tracing_subscriber::EnvFilter;
use web_time::Instant;

fn print_spec(label: &str, spec: Option<&Specification>) -> scattergl::Result<()> {
    if let Some(spec) = spec {
        println!("== {label} ==");
        println!("{}", serde_json::to_string_pretty(spec)?);
    }
    Ok(())
}

fn main() -> scattergl::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let element = StaticElement::new(Size::new(480.0, 320.0));
    let layout = element.clone();
    let surface = StaticSurface::new().with_element("#scatter", element);

    let config = PlotConfig::from_json(r#"{"resize_debounce_ms": 250}"#)?;
    let mut plot = PlotAdapter::bind_with_config(
        &surface,
        "#scatter",
        RecordingEngine::default(),
        LoggingHandler,
        config,
    )?;

    plot.set_input_json(r#"{"x": [0, 1.5, 3, 4.5, 6], "y": [2, -1, 0.5, 3, 1]}"#)?;
    plot.render(None)?;
    print_spec("initial", plot.engine().current_specification())?;

    plot.set_state(
        EncodingPatch::new()
            .with_color(vec![0.1, 0.3, 0.5, 0.7, 0.9])
            .with_size(6.0),
    );
    plot.set_interaction("lasso")?;
    plot.render(None)?;
    print_spec("colored", plot.engine().current_specification())?;

    plot.dispatch_json(r#"{"type": "pointHovered", "data": {"index": 2, "distance": 0.3}}"#)?;
    plot.dispatch_json(r#"{"type": "pointClicked", "data": {"index": 4, "distance": 7.5}}"#)?;
    plot.dispatch_json(r#"{"type": "onSelectionEnd", "data": [1, 2]}"#)?;

    // A burst of window resizes settles into one update.
    layout.set_client_size(Size::new(960.0, 320.0));
    layout.set_parent_size(Some(Size::new(1000.0, 340.0)));
    let start = Instant::now();
    for step in 0..5 {
        plot.notify_window_resize(start + Duration::from_millis(step * 50));
    }
    if let Some(deadline) = plot.next_deadline() {
        plot.poll(deadline);
    }
    print_spec("resized", plot.engine().current_specification())?;

    tracing::info!(
        renders = plot.render_count(),
        engine_calls = plot.engine().calls().len(),
        "demo finished"
    );
    plot.dispose();
    Ok(())
}
