use std::f64::consts::TAU;

use particle_wave::particle::MIN_DURATION_MS;
use particle_wave::random::seeded;
use particle_wave::{create_particle, InstanceBuffer, RandomSource, BASE_SPEED};

const NOW: f64 = 50_000.0;
const SAMPLES: usize = 4000;

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    sum / n as f64
}

fn std_dev(values: &[f64]) -> f64 {
    let m = mean(values.iter().copied());
    mean(values.iter().map(|v| (v - m) * (v - m))).sqrt()
}

#[test]
fn sampled_parameters_follow_their_distributions() {
    let mut rng = seeded(7);
    let mut scene = InstanceBuffer::default();
    let particles: Vec<_> = (0..SAMPLES)
        .map(|_| create_particle(&mut rng, NOW, BASE_SPEED, &mut scene))
        .collect();

    let durations: Vec<f64> = particles.iter().map(|p| p.duration).collect();
    assert!((mean(durations.iter().copied()) - BASE_SPEED).abs() < 150.0);
    assert!((std_dev(&durations) - BASE_SPEED / 10.0).abs() < 150.0);

    let amplitudes: Vec<f64> = particles.iter().map(|p| p.amplitude).collect();
    assert!((mean(amplitudes.iter().copied()) - 25.0).abs() < 0.1);
    assert!((std_dev(&amplitudes) - 1.0).abs() < 0.1);

    let offsets: Vec<f64> = particles.iter().map(|p| p.offset_y).collect();
    assert!(mean(offsets.iter().copied()).abs() < 1.0);
    assert!((std_dev(&offsets) - 12.0).abs() < 1.0);

    let arcs: Vec<f64> = particles.iter().map(|p| p.arc).collect();
    assert!((mean(arcs.iter().copied()) - TAU).abs() < 0.01);
    assert!((std_dev(&arcs) - 0.1).abs() < 0.01);

    let depths: Vec<f64> = particles.iter().map(|p| p.z).collect();
    assert!(mean(depths.iter().copied()).abs() < 0.75);
    assert!((std_dev(&depths) - 8.0).abs() < 0.75);

    let scales: Vec<f64> = particles
        .iter()
        .map(|p| scene.scale(p.visual) as f64)
        .collect();
    assert!((mean(scales.iter().copied()) - 0.7).abs() < 0.05);
    assert!((std_dev(&scales) - 0.4).abs() < 0.05);
}

#[test]
fn start_times_are_staggered_into_the_past() {
    let mut rng = seeded(11);
    let mut scene = InstanceBuffer::default();
    let starts: Vec<f64> = (0..SAMPLES)
        .map(|_| create_particle(&mut rng, NOW, BASE_SPEED, &mut scene).start_time)
        .collect();

    for &s in &starts {
        assert!(s <= NOW && s > NOW - BASE_SPEED, "start {s}");
    }
    let lag = mean(starts.iter().map(|s| NOW - s));
    assert!((lag - BASE_SPEED / 2.0).abs() < 500.0);
}

#[test]
fn each_particle_registers_one_visual() {
    let mut rng = seeded(3);
    let mut scene = InstanceBuffer::default();
    for i in 0..10 {
        let p = create_particle(&mut rng, NOW, BASE_SPEED, &mut scene);
        assert_eq!(p.visual.index(), i);
        assert_eq!(scene.len(), i + 1);
    }
}

#[test]
fn same_seed_same_particle() {
    let mut scene_a = InstanceBuffer::default();
    let mut scene_b = InstanceBuffer::default();
    let a = create_particle(&mut seeded(99), NOW, BASE_SPEED, &mut scene_a);
    let b = create_particle(&mut seeded(99), NOW, BASE_SPEED, &mut scene_b);
    assert_eq!(a, b);
    assert_eq!(scene_a.as_slice(), scene_b.as_slice());
}

/// Always answers with the far tail of whatever is asked.
struct Hostile;

impl RandomSource for Hostile {
    fn uniform(&mut self, low: f64, _high: f64) -> f64 {
        low
    }

    fn normal(&mut self, _mean: f64, _deviation: f64) -> f64 {
        -1.0e9
    }
}

#[test]
fn duration_never_drops_below_floor() {
    let mut scene = InstanceBuffer::default();
    let p = create_particle(&mut Hostile, NOW, BASE_SPEED, &mut scene);
    assert_eq!(p.duration, MIN_DURATION_MS);
    assert_eq!(p.start_time, NOW);

    // still evaluates without dividing by zero
    let pos = particle_wave::move_position(&p, NOW + 0.25);
    assert!(pos.x.is_finite());
}
