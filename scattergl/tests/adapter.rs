// Copyright 2026 the ScatterGL Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end behavior of `PlotAdapter` against the headless engine.

use std::time::Duration;

use scattergl::headless::{EngineCall, RecordingEngine, StaticElement, StaticSurface};
use scattergl::{
    BindingError, Channel, ChannelEncoding, Domain, EncodingPatch, EngineEvent, Error, EventKind,
    HoverFilter, InputData, InteractionHandler, InteractionMode, Lifecycle, LoggingHandler,
    PlotAdapter, PlotConfig, PointPayload, Scalar, Size, ValidationError, ViewOptions,
};
use web_time::Instant;

type Plot = PlotAdapter<RecordingEngine, StaticElement, LoggingHandler>;

fn plot() -> Plot {
    let element = StaticElement::new(Size::new(200.0, 200.0));
    PlotAdapter::new(element, RecordingEngine::default(), LoggingHandler).unwrap()
}

fn plot_with_points() -> Plot {
    let mut plot = plot();
    plot.set_coordinates(vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0])
        .unwrap();
    plot
}

#[derive(Debug, Default)]
struct Recorder {
    selections: Vec<Vec<usize>>,
    hovers: Vec<Option<PointPayload>>,
    clicks: Vec<Option<PointPayload>>,
}

impl InteractionHandler for Recorder {
    fn on_select(&mut self, indices: &[usize]) {
        self.selections.push(indices.to_vec());
    }

    fn on_click(&mut self, point: Option<&PointPayload>) {
        self.clicks.push(point.cloned());
    }

    fn on_hover(&mut self, point: Option<&PointPayload>) {
        self.hovers.push(point.cloned());
    }
}

#[test]
fn construction_attaches_and_subscribes_to_selection() {
    let plot = plot();
    assert_eq!(
        plot.engine().calls(),
        &[
            EngineCall::AddToDom,
            EngineCall::Subscribe(EventKind::SelectionEnd)
        ]
    );
    assert_eq!(plot.lifecycle(), Lifecycle::Uninitialized);
    assert!(!plot.is_listening_for_resize());
}

#[test]
fn binding_fails_for_unknown_selector_or_non_element() {
    let surface = StaticSurface::new()
        .with_element("#plot", StaticElement::new(Size::new(100.0, 100.0)))
        .with_element("#label", StaticElement::non_element());

    let missing = Plot::bind(&surface, "#nope", RecordingEngine::default(), LoggingHandler);
    assert_eq!(
        missing.unwrap_err(),
        BindingError::Unresolved("#nope".into())
    );

    let text = Plot::bind(&surface, "#label", RecordingEngine::default(), LoggingHandler);
    assert_eq!(
        text.unwrap_err(),
        BindingError::NotAnElement("#label".into())
    );

    let plot = Plot::bind(&surface, "#plot", RecordingEngine::default(), LoggingHandler).unwrap();
    assert_eq!(plot.engine().calls().first(), Some(&EngineCall::AddToDom));
}

#[test]
fn first_render_sets_and_later_renders_update() {
    let mut plot = plot_with_points();

    plot.render(None).unwrap();
    assert_eq!(plot.lifecycle(), Lifecycle::Initialized);
    assert_eq!(plot.engine().set_count(), 1);
    assert_eq!(plot.engine().update_count(), 0);
    assert!(plot.is_listening_for_resize());

    plot.render(None).unwrap();
    plot.render(None).unwrap();
    assert_eq!(plot.lifecycle(), Lifecycle::Updated);
    assert_eq!(plot.render_count(), 3);
    assert_eq!(plot.engine().set_count(), 1);
    assert_eq!(plot.engine().update_count(), 2);
}

#[test]
fn rendered_specification_carries_input_and_covering_domains() {
    let mut plot = plot_with_points();
    plot.render(None).unwrap();

    let spec = plot.engine().current_specification().unwrap();
    assert_eq!(spec.default_data.x, vec![1.0, 2.0, 3.0]);
    assert_eq!(spec.default_data.y, vec![1.0, 2.0, 3.0]);

    let (x, y) = plot.domains().unwrap();
    let track = spec.track().unwrap();
    assert!(track.x.domain.covers(&x), "{:?} vs {x:?}", track.x.domain);
    assert!(track.y.domain.covers(&y), "{:?} vs {y:?}", track.y.domain);
    assert!(x.covers(&Domain::new(1.0, 3.0)));
}

#[test]
fn hover_and_click_subscriptions_are_not_duplicated_across_renders() {
    let mut plot = plot_with_points();
    plot.render(None).unwrap();
    plot.render(None).unwrap();

    let hovers = plot
        .engine()
        .calls()
        .iter()
        .filter(|call| **call == EngineCall::Subscribe(EventKind::PointHovered))
        .count();
    assert_eq!(hovers, 1);
    assert!(plot.is_subscribed(EventKind::PointClicked));
}

#[test]
fn mismatched_input_is_rejected_without_touching_domains() {
    let mut plot = plot_with_points();
    let before = plot.domains();

    let err = plot
        .set_coordinates(vec![1.0, 2.0, 3.0], vec![1.0, 2.0])
        .unwrap_err();
    assert_eq!(err, ValidationError::CoordinateLength { x: 3, y: 2 });
    assert_eq!(plot.domains(), before);

    let err = plot.set_input_json(r#"{"x": [1, 2]}"#).unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::MissingCoordinate("y"))
    ));
    assert_eq!(plot.domains(), before);

    let err = plot.set_input_json("not json").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn set_input_recomputes_domains_from_scratch() {
    let mut plot = plot_with_points();
    plot.set_input(InputData::new(vec![-10.0, 0.0], vec![5.0, 6.0]).unwrap());
    let (x, _) = plot.domains().unwrap();
    assert!(x.covers(&Domain::new(-10.0, 0.0)));
    assert!(x.max < 1.0, "old input leaked into {x:?}");
}

#[test]
fn short_encoding_array_fails_at_render_and_keeps_engine_state() {
    let mut plot = plot_with_points();
    plot.render(None).unwrap();
    let calls_before = plot.engine().calls().len();

    plot.set_state(EncodingPatch::new().with_color(vec![1.0, 2.0]));
    let err = plot.render(None).unwrap_err();
    assert_eq!(
        err,
        ValidationError::EncodingLength {
            channel: Channel::Color,
            len: 2,
            expected: 3,
        }
    );
    assert_eq!(plot.render_count(), 1);
    assert_eq!(plot.engine().calls().len(), calls_before);
}

#[test]
fn render_without_input_is_a_validation_error() {
    let mut plot = plot();
    assert_eq!(
        plot.render(None),
        Err(ValidationError::MissingCoordinate("x"))
    );
    assert_eq!(plot.engine().set_count(), 0);
}

#[test]
fn json_state_patch_ignores_unknown_keys() {
    let mut plot = plot_with_points();
    plot.set_state_json(r#"{"size": [1, 2, 3], "tooltip": true}"#)
        .unwrap();
    plot.render(None).unwrap();

    let spec = plot.engine().current_specification().unwrap();
    assert!(spec.track().unwrap().size.as_ref().unwrap().is_inline());
    assert_eq!(
        spec.default_data.channel(Channel::Size).map(<[_]>::len),
        Some(3)
    );
}

#[test]
fn interaction_modes_are_validated_and_forwarded() {
    let mut plot = plot();
    assert_eq!(
        plot.set_interaction("zoom"),
        Err(ValidationError::InteractionMode("zoom".into()))
    );
    assert_eq!(plot.interaction(), None);

    plot.set_interaction("lasso").unwrap();
    assert_eq!(plot.interaction(), Some(InteractionMode::Lasso));
    assert_eq!(
        plot.engine().calls().last(),
        Some(&EngineCall::SetViewOptions(ViewOptions {
            tool: InteractionMode::Lasso
        }))
    );
}

#[test]
fn explicit_canvas_size_resizes_and_drives_bounds() {
    let mut plot = plot_with_points();
    plot.render(Some(Size::new(400.0, 100.0))).unwrap();

    let calls = plot.engine().calls();
    assert!(calls.contains(&EngineCall::SetCanvasSize {
        width: 400.0,
        height: 100.0
    }));

    let spec = plot.engine().current_specification().unwrap();
    let track = spec.track().unwrap();
    let ratio = track.x.domain.max / track.y.domain.max;
    assert!((ratio - 4.0).abs() < 1e-9, "ratio was {ratio}");
}

#[test]
fn resize_forwards_to_engine() {
    let mut plot = plot();
    plot.resize(320.0, 240.0);
    assert_eq!(
        plot.engine().calls().last(),
        Some(&EngineCall::SetCanvasSize {
            width: 320.0,
            height: 240.0
        })
    );
}

#[test]
fn events_reach_the_handler_through_the_distance_gate() {
    let element = StaticElement::new(Size::new(100.0, 100.0));
    let mut plot =
        PlotAdapter::new(element, RecordingEngine::default(), Recorder::default()).unwrap();
    plot.set_coordinates(vec![0.0, 1.0], vec![0.0, 1.0]).unwrap();

    // Hover/click are only subscribed by the first render.
    assert!(!plot.dispatch(EngineEvent::PointHovered(PointPayload::new(0, 0.1))));
    plot.render(None).unwrap();

    assert!(plot.dispatch(EngineEvent::PointHovered(PointPayload::new(0, 0.1))));
    assert!(plot.dispatch(EngineEvent::PointClicked(PointPayload::new(1, 9.0))));
    assert!(
        plot.dispatch_json(r#"{"type": "onSelectionEnd", "data": [0, 1]}"#)
            .unwrap()
    );

    let recorder = plot.handler();
    assert_eq!(recorder.hovers, vec![Some(PointPayload::new(0, 0.1))]);
    assert_eq!(recorder.clicks, vec![None]);
    assert_eq!(recorder.selections, vec![vec![0, 1]]);
}

#[test]
fn passthrough_filter_forwards_far_clicks() {
    let element = StaticElement::new(Size::new(100.0, 100.0));
    let config = PlotConfig::default().with_hover_filter(HoverFilter::Passthrough);
    let mut plot = PlotAdapter::with_config(
        element,
        RecordingEngine::default(),
        Recorder::default(),
        config,
    )
    .unwrap();
    plot.set_coordinates(vec![0.0], vec![0.0]).unwrap();
    plot.render(None).unwrap();

    plot.dispatch(EngineEvent::PointClicked(PointPayload::new(0, 9.0)));
    assert_eq!(plot.handler().clicks, vec![Some(PointPayload::new(0, 9.0))]);
}

#[test]
fn window_resizes_are_debounced_into_one_update() {
    let element = StaticElement::new(Size::new(200.0, 200.0));
    let handle = element.clone();
    let mut plot = PlotAdapter::new(element, RecordingEngine::default(), LoggingHandler).unwrap();
    plot.set_coordinates(vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0])
        .unwrap();

    let t0 = Instant::now();
    assert!(
        !plot.notify_window_resize(t0),
        "no listener before the first render"
    );

    plot.render(None).unwrap();
    plot.engine_mut().clear();

    handle.set_client_size(Size::new(600.0, 200.0));
    handle.set_parent_size(Some(Size::new(640.0, 220.0)));
    let ms = Duration::from_millis(1);
    assert!(plot.notify_window_resize(t0));
    assert!(plot.notify_window_resize(t0 + 200 * ms));
    assert!(plot.notify_window_resize(t0 + 400 * ms));
    assert_eq!(plot.next_deadline(), Some(t0 + 900 * ms));

    assert!(!plot.poll(t0 + 800 * ms));
    assert!(plot.engine().calls().is_empty());

    assert!(plot.poll(t0 + 900 * ms));
    assert!(!plot.poll(t0 + 2000 * ms));

    let calls = plot.engine().calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0],
        EngineCall::SetCanvasSize {
            width: 640.0,
            height: 220.0
        }
    );
    let EngineCall::UpdateSpecification(spec) = &calls[1] else {
        panic!("expected an update, got {:?}", calls[1]);
    };
    let track = spec.track().unwrap();
    let ratio = track.x.domain.max / track.y.domain.max;
    assert!((ratio - 3.0).abs() < 1e-9, "ratio was {ratio}");

    // Resizes do not count as renders.
    assert_eq!(plot.render_count(), 1);
}

#[test]
fn dispose_tears_down_listeners_and_subscriptions() {
    let mut plot = plot_with_points();
    plot.render(None).unwrap();
    plot.dispose();
    plot.dispose();

    assert!(!plot.is_listening_for_resize());
    assert!(!plot.notify_window_resize(Instant::now()));
    assert!(!plot.dispatch(EngineEvent::SelectionEnd(vec![0])));

    let unsubscribed = plot
        .engine()
        .calls()
        .iter()
        .filter(|call| matches!(call, EngineCall::Unsubscribe(_)))
        .count();
    assert_eq!(unsubscribed, 3);

    // Rendering after dispose still reaches the engine but does not re-subscribe.
    plot.render(None).unwrap();
    assert!(!plot.is_subscribed(EventKind::PointHovered));
    assert!(!plot.is_listening_for_resize());
}

#[test]
fn failed_rebuild_after_resize_leaves_the_engine_alone() {
    let element = StaticElement::new(Size::new(200.0, 200.0));
    let handle = element.clone();
    let mut plot = PlotAdapter::new(element, RecordingEngine::default(), LoggingHandler).unwrap();
    plot.set_coordinates(vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0])
        .unwrap();
    plot.render(None).unwrap();
    plot.engine_mut().clear();

    plot.set_state(EncodingPatch::new().with_color(vec![1.0]));
    handle.set_parent_size(Some(Size::new(640.0, 480.0)));
    let t0 = Instant::now();
    assert!(plot.notify_window_resize(t0));
    assert!(plot.notify_window_resize(t0 + Duration::from_millis(100)));

    let deadline = plot.next_deadline().unwrap();
    assert!(plot.poll(deadline));
    assert!(
        plot.engine().calls().is_empty(),
        "engine touched: {:?}",
        plot.engine().calls()
    );
    assert_eq!(plot.render_count(), 1);
    assert!(plot.is_listening_for_resize());

    // Once the encoding is fixed, the next settled resize goes through.
    plot.set_state(EncodingPatch::new().with_color("red"));
    assert!(plot.notify_window_resize(deadline));
    assert!(plot.poll(deadline + Duration::from_secs(1)));
    assert_eq!(plot.engine().update_count(), 1);
}

#[test]
fn json_state_carries_booleans_and_nulls() {
    let mut plot = plot_with_points();
    plot.set_state_json(r#"{"color": ["red", null, "blue"], "size": true}"#)
        .unwrap();
    plot.render(None).unwrap();

    let spec = plot.engine().current_specification().unwrap();
    assert_eq!(
        spec.default_data.channel(Channel::Color),
        Some(&[Scalar::from("red"), Scalar::Null, Scalar::from("blue")][..])
    );
    assert_eq!(
        spec.track().unwrap().channel(Channel::Size),
        Some(&ChannelEncoding::value(Scalar::Bool(true)))
    );
}

#[test]
fn configured_zero_remap_shapes_the_domain() {
    let element = StaticElement::new(Size::new(100.0, 100.0));
    let config = PlotConfig::default().with_zero_remap(0.5);
    let mut plot =
        PlotAdapter::with_config(element, RecordingEngine::default(), LoggingHandler, config)
            .unwrap();
    plot.set_coordinates(vec![0.0, 10.0], vec![1.0, 2.0]).unwrap();

    let (x, _) = plot.domains().unwrap();
    // -0.5 * 10, then padded by 5%.
    assert!((x.min + 5.25).abs() < 1e-9, "{x:?}");
    assert!((x.max - 10.5).abs() < 1e-9, "{x:?}");
}
