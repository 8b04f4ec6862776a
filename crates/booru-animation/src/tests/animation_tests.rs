use super::*;

const FRAME_NANOS: u64 = 16_000_000;

#[test]
fn linear_tween_interpolates_over_frames() {
    let mut animatable = Animatable::new(0.0f32);
    animatable.animateTo(100.0, AnimationType::Tween(AnimationSpec::linear(100)));
    assert!(animatable.is_running());

    // First frame only establishes the start time.
    assert!(animatable.advance(1_000_000_000));
    assert_eq!(animatable.value(), 0.0);

    assert!(animatable.advance(1_050_000_000));
    assert!((animatable.value() - 50.0).abs() < 0.01);

    assert!(!animatable.advance(1_100_000_000));
    assert_eq!(animatable.value(), 100.0);
    assert!(!animatable.is_running());
}

#[test]
fn tween_honours_delay() {
    let mut animatable = Animatable::new(0.0f32);
    animatable.animateTo(
        10.0,
        AnimationType::Tween(AnimationSpec::linear(100).with_delay(50)),
    );
    animatable.advance(0);
    animatable.advance(40_000_000);
    assert_eq!(animatable.value(), 0.0);
    animatable.advance(100_000_000);
    assert!((animatable.value() - 5.0).abs() < 0.01);
}

#[test]
fn snap_to_stops_running_animation() {
    let mut animatable = Animatable::new(1.0f32);
    animatable.animateTo(4.0, AnimationType::default());
    animatable.advance(0);
    animatable.advance(FRAME_NANOS);
    animatable.snapTo(2.0);
    assert!(!animatable.is_running());
    assert_eq!(animatable.value(), 2.0);
    assert_eq!(animatable.target(), 2.0);
    assert!(!animatable.advance(FRAME_NANOS * 2));
}

#[test]
fn retargeting_to_same_value_keeps_progress() {
    let mut animatable = Animatable::new(0.0f32);
    let spec = AnimationType::Tween(AnimationSpec::linear(100));
    animatable.animateTo(100.0, spec);
    animatable.advance(0);
    animatable.advance(50_000_000);
    let midway = animatable.value();

    animatable.animateTo(100.0, spec);
    animatable.advance(75_000_000);
    assert!(animatable.value() > midway);
}

#[test]
fn animating_to_current_value_is_idle() {
    let mut animatable = Animatable::new(3.0f32);
    animatable.animateTo(3.0, AnimationType::Spring(SpringSpec::default()));
    assert!(!animatable.is_running());
}

#[test]
fn spring_settles_on_target() {
    let mut animatable = Animatable::new(0.0f32);
    animatable.animateTo(1.0, AnimationType::Spring(SpringSpec::stiff()));

    let mut time = 0;
    let mut frames = 0;
    while animatable.advance(time) {
        time += FRAME_NANOS;
        frames += 1;
        assert!(frames < 600, "spring never settled");
    }
    assert_eq!(animatable.value(), 1.0);
}

#[test]
fn point_tween_moves_both_axes() {
    let mut animatable = Animatable::new(Point::new(0.0, 0.0));
    animatable.animateTo(
        Point::new(-40.0, 80.0),
        AnimationType::Tween(AnimationSpec::linear(100)),
    );
    animatable.advance(0);
    animatable.advance(25_000_000);
    let value = animatable.value();
    assert!((value.x + 10.0).abs() < 0.01);
    assert!((value.y - 20.0).abs() < 0.01);
}

#[test]
fn point_spring_progress_projects_onto_path() {
    let start = Point::new(0.0, 0.0);
    let target = Point::new(10.0, 0.0);
    let current = Point::new(5.0, 3.0);
    assert!((Point::spring_progress(&start, &target, &current) - 0.5).abs() < 1e-6);
    assert_eq!(Point::spring_progress(&start, &start, &current), 1.0);
}

#[test]
fn easing_endpoints_are_fixed() {
    for easing in [
        Easing::LinearEasing,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowInEasing,
        Easing::LinearOutSlowInEasing,
        Easing::FastOutLinearEasing,
    ] {
        assert_eq!(easing.transform(0.0), 0.0);
        assert_eq!(easing.transform(1.0), 1.0);
        let mid = easing.transform(0.5);
        assert!((0.0..=1.0).contains(&mid), "{easing:?} -> {mid}");
    }
}
