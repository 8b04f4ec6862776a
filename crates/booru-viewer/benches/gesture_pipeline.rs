use booru_foundation::{
    clamp_offset, resolve, Contact, ContentGeometry, PointerEvent, PointerTracker, ResolverInput,
};
use booru_ui_graphics::{Point, Size};
use booru_viewer::{GestureLoop, ImageViewer, NoopHost, ViewerConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const VIEWPORT: Size = Size {
    width: 1080.0,
    height: 1920.0,
};
const FRAME_MS: u64 = 8;
const PINCH_FRAME_SAMPLES: &[usize] = &[32, 256];

fn geometry() -> ContentGeometry {
    ContentGeometry::fit(Size::new(3000.0, 4000.0), VIEWPORT)
}

/// Pre-recorded pinch: two fingers spreading and drifting for `frames` frames.
fn pinch_events(frames: usize) -> Vec<PointerEvent> {
    let mut tracker = PointerTracker::new();
    let center = Point::new(540.0, 960.0);
    let mut events = Vec::with_capacity(frames + 2);
    let mut time = 0;

    for frame in 0..frames {
        let t = frame as f32 / frames as f32;
        let half_span = 60.0 + 240.0 * t;
        let drift = Point::new(40.0 * t, -80.0 * t);
        let contacts = [
            Contact::pressed(1, center + drift - Point::new(half_span, 0.0)),
            Contact::pressed(2, center + drift + Point::new(half_span, 0.0)),
        ];
        if let Some(event) = tracker.process(time, &contacts) {
            events.push(event);
        }
        time += FRAME_MS;
    }
    if let Some(event) = tracker.cancel_all(time) {
        events.push(event);
    }
    events
}

/// Single-finger drag down the screen.
fn drag_events(frames: usize) -> Vec<PointerEvent> {
    let mut tracker = PointerTracker::new();
    let mut events = Vec::with_capacity(frames + 1);
    let mut position = Point::new(540.0, 400.0);
    for frame in 0..frames {
        let contacts = [Contact::pressed(1, position)];
        if let Some(event) = tracker.process(frame as u64 * FRAME_MS, &contacts) {
            events.push(event);
        }
        position += Point::new(0.0, 3.0);
    }
    let contacts = [Contact::released(1, position)];
    if let Some(event) = tracker.process(frames as u64 * FRAME_MS, &contacts) {
        events.push(event);
    }
    events
}

fn bench_resolver(c: &mut Criterion) {
    let geometry = geometry();
    let mut group = c.benchmark_group("resolve_and_clamp");
    for &frames in PINCH_FRAME_SAMPLES {
        let events = pinch_events(frames);
        group.bench_with_input(BenchmarkId::new("pinch_frames", frames), &events, |b, events| {
            b.iter(|| {
                let mut scale = 1.0f32;
                let mut offset = Point::ZERO;
                for event in events {
                    let resolution = resolve(
                        event,
                        ResolverInput {
                            scale,
                            offset,
                            max_scale: 4.0,
                            max_drag_to_top: VIEWPORT.height * 0.25,
                            content_origin: geometry.content_origin,
                        },
                    );
                    scale = resolution.scale;
                    offset = clamp_offset(scale, resolution.offset, &geometry);
                }
                black_box((scale, offset))
            });
        });
    }
    group.finish();
}

fn bench_gesture_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_loop");
    for &frames in PINCH_FRAME_SAMPLES {
        let pinch = pinch_events(frames);
        group.bench_with_input(BenchmarkId::new("pinch_frames", frames), &pinch, |b, events| {
            b.iter(|| {
                let mut gestures = GestureLoop::new(ViewerConfig::default(), geometry());
                for event in events {
                    black_box(gestures.on_pointer_event(event));
                }
                black_box(gestures.transform())
            });
        });

        let drag = drag_events(frames);
        group.bench_with_input(BenchmarkId::new("drag_frames", frames), &drag, |b, events| {
            b.iter(|| {
                let mut viewer = ImageViewer::new(ViewerConfig::default(), geometry(), NoopHost);
                for event in events {
                    black_box(viewer.on_pointer_event(event));
                }
                let mut frame = 0u64;
                while viewer.on_frame(frame) {
                    frame += 16_000_000;
                }
                black_box(viewer.presented_transform())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolver, bench_gesture_loop);
criterion_main!(benches);
