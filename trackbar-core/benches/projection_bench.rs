//! Criterion benchmarks for the slider hot paths.
//!
//! Benchmarks:
//! 1. Pointer projection (the per-move coordinate math)
//! 2. A full drag session (down, many moves with emissions, up)
//! 3. Nearest-thumb resolution over a large thumb set

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use trackbar_core::{
    geometry, PointerId, PointerPosition, Slider, SliderConfig, SliderHost, ThumbSet, TrackRect,
};

struct NullHost {
    track: TrackRect,
    emissions: usize,
}

impl SliderHost for NullHost {
    fn track_rect(&self) -> TrackRect {
        self.track
    }

    fn values_changed(&mut self, values: &[f64], _percents: &[f64]) {
        self.emissions += 1;
        black_box(values);
    }

    fn capture_pointer(&mut self, _pointer: PointerId) {}

    fn release_pointer(&mut self, _pointer: PointerId) {}
}

fn bench_projection(c: &mut Criterion) {
    let config = SliderConfig {
        step: 0.5,
        ..SliderConfig::default()
    };
    let track = TrackRect::new(12.0, 48.0, 960.0, 24.0);

    c.bench_function("projection_value_at", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..1000 {
                let pointer = PointerPosition::new(f64::from(i), 52.0);
                acc += geometry::value_at(black_box(pointer), track, &config);
            }
            acc
        })
    });
}

fn bench_drag_session(c: &mut Criterion) {
    let config = SliderConfig {
        step: 1.0,
        ..SliderConfig::default()
    };
    let track = TrackRect::new(0.0, 0.0, 1000.0, 24.0);

    c.bench_function("drag_session_1000_moves", |b| {
        b.iter(|| {
            let mut slider = Slider::new(config, &[20.0, 80.0]).unwrap();
            let mut host = NullHost {
                track,
                emissions: 0,
            };
            let p = PointerId(1);
            slider.pointer_down_on_thumb(&mut host, 0, p, PointerPosition::new(200.0, 12.0));
            for i in 0..1000 {
                slider.pointer_move(&mut host, p, PointerPosition::new(f64::from(i), 12.0));
            }
            slider.pointer_up(&mut host, p);
            host.emissions
        })
    });
}

fn bench_nearest(c: &mut Criterion) {
    let config = SliderConfig {
        step: 0.1,
        ..SliderConfig::default()
    };
    let values: Vec<f64> = (0..64).map(|i| f64::from(i) * 1.5).collect();
    let set = ThumbSet::new(&values, &config).unwrap();

    c.bench_function("nearest_thumb_64", |b| {
        b.iter(|| {
            let mut acc = 0;
            for i in 0..100 {
                acc += set.nearest(black_box(f64::from(i)));
            }
            acc
        })
    });
}

criterion_group!(benches, bench_projection, bench_drag_session, bench_nearest);
criterion_main!(benches);
