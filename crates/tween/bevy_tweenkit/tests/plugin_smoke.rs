use bevy::prelude::*;
use bevy_tweenkit::{
    Tween, TweenBundle, TweenCompleted, TweenFinished, TweenPlugin, TweenSettings, TweenTime,
    TweenValue,
};
use tweenkit_core::{EasingSpec, InterpolationRequest};

fn init_tracing() {
    let default_filter = "bevy_tweenkit=debug,tweenkit_core=debug";
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(TweenPlugin::manual_time());
    app
}

/// Set the tween clock and run one frame.
fn step(app: &mut App, now: f32) {
    app.world_mut().resource_mut::<TweenTime>().0 = now;
    app.update();
}

fn completed_events(app: &App) -> Vec<TweenCompleted> {
    let events = app.world().resource::<Events<TweenCompleted>>();
    let mut reader = events.get_reader();
    reader.read(events).copied().collect()
}

#[test]
fn plugin_inserts_resources() {
    let app = test_app();
    assert!(app.world().get_resource::<TweenTime>().is_some());
    let settings = app.world().resource::<TweenSettings>();
    assert!(!settings.follow_bevy_time);
}

#[test]
fn tween_writes_value_each_frame_and_finishes_on_target() {
    init_tracing();
    let mut app = test_app();
    let entity = app
        .world_mut()
        .spawn(TweenBundle::new(
            InterpolationRequest::new(0.0, 10.0, 0.1).with_curve(EasingSpec::linear()),
        ))
        .id();

    // first frame only starts the run
    step(&mut app, 0.0);
    assert_eq!(app.world().get::<TweenValue>(entity), Some(&TweenValue(0.0)));
    assert_eq!(
        app.world().get::<Tween>(entity).and_then(Tween::progress),
        Some(0.0)
    );

    step(&mut app, 0.5);
    assert_eq!(app.world().get::<TweenValue>(entity), Some(&TweenValue(5.0)));

    step(&mut app, 1.25);
    assert_eq!(app.world().get::<TweenValue>(entity), Some(&TweenValue(10.0)));
    assert!(app.world().get::<Tween>(entity).is_none());
    assert!(app.world().get::<TweenFinished>(entity).is_some());
    assert_eq!(
        completed_events(&app),
        vec![TweenCompleted {
            entity,
            value: 10.0
        }]
    );
}

#[test]
fn degenerate_tween_finishes_on_first_frame() {
    let mut app = test_app();
    let entity = app
        .world_mut()
        .spawn(TweenBundle::new(
            InterpolationRequest::new(3.0, 10.0, 0.0).with_curve(EasingSpec::bounce()),
        ))
        .id();
    step(&mut app, 7.0);
    assert_eq!(app.world().get::<TweenValue>(entity), Some(&TweenValue(10.0)));
    assert!(app.world().get::<Tween>(entity).is_none());
    assert_eq!(completed_events(&app).len(), 1);
}

#[test]
fn tweens_on_different_entities_advance_independently() {
    let mut app = test_app();
    let short = app
        .world_mut()
        .spawn(TweenBundle::new(
            InterpolationRequest::new(0.0, 1.0, 1.0).with_curve(EasingSpec::elastic()),
        ))
        .id();
    let long = app
        .world_mut()
        .spawn(TweenBundle::new(
            InterpolationRequest::new(0.0, 4.0, 1.0).with_curve(EasingSpec::linear()),
        ))
        .id();

    step(&mut app, 0.0);
    step(&mut app, 2.0);
    assert!(app.world().get::<TweenFinished>(short).is_some());
    assert!(app.world().get::<TweenFinished>(long).is_none());
    assert_eq!(app.world().get::<TweenValue>(long), Some(&TweenValue(2.0)));

    step(&mut app, 4.0);
    assert_eq!(app.world().get::<TweenValue>(short), Some(&TweenValue(1.0)));
    assert_eq!(app.world().get::<TweenValue>(long), Some(&TweenValue(4.0)));
    assert!(app.world().get::<TweenFinished>(long).is_some());
}
