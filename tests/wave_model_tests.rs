use approx::assert_relative_eq;
use debroglie::physics::{de_broglie_wavelength, Particle, WaveModel, PHASE_STEP, SAMPLE_COUNT};

#[test]
fn snapshot_is_deterministic_for_identical_state() {
    let mut a = WaveModel::new();
    let mut b = WaveModel::new();

    for model in [&mut a, &mut b] {
        model.set_velocity(Particle::Electron, 2.5e6);
        model.set_velocity(Particle::Proton, 4e5);
        for _ in 0..7 {
            model.advance_phase();
        }
    }

    let snap_a = a.snapshot();
    let snap_b = b.snapshot();

    for (ta, tb) in snap_a.traces.iter().zip(&snap_b.traces) {
        assert_eq!(ta.wavelength.to_bits(), tb.wavelength.to_bits());
        assert_eq!(ta.amplitudes, tb.amplitudes, "wave samples should be bit-identical");
    }
    assert_eq!(snap_a.summary, snap_b.summary);
}

#[test]
fn repeated_snapshots_do_not_mutate_state() {
    let model = WaveModel::new();
    let first = model.snapshot();
    let second = model.snapshot();

    for (a, b) in first.traces.iter().zip(&second.traces) {
        assert_eq!(a.amplitudes, b.amplitudes);
    }
}

#[test]
fn velocities_clamp_to_slider_ranges() {
    let mut model = WaveModel::new();

    model.set_velocity(Particle::Electron, 1e12);
    assert_eq!(model.velocity(Particle::Electron), 3e8);

    model.set_velocity(Particle::Proton, -5.0);
    assert_eq!(model.velocity(Particle::Proton), 100.0);

    model.set_velocity(Particle::Proton, 1e6);
    assert_eq!(model.velocity(Particle::Proton), 1e6);
}

#[test]
fn reset_restores_defaults_but_keeps_phase_running() {
    let mut model = WaveModel::new();
    model.set_velocity(Particle::Electron, 9e7);
    model.advance_phase();

    model.reset();

    assert_eq!(
        model.velocity(Particle::Electron),
        Particle::Electron.default_velocity()
    );
    assert_eq!(
        model.velocity(Particle::Proton),
        Particle::Proton.default_velocity()
    );
    assert_relative_eq!(model.phase(), PHASE_STEP);
}

#[test]
fn phase_advances_by_fixed_step() {
    let mut model = WaveModel::new();
    for _ in 0..3 {
        model.advance_phase();
    }
    assert_relative_eq!(model.phase(), 3.0 * PHASE_STEP, max_relative = 1e-12);
}

#[test]
fn trace_wavelengths_match_the_calculator() {
    let model = WaveModel::new();
    let snapshot = model.snapshot();

    for trace in &snapshot.traces {
        let expected =
            de_broglie_wavelength(trace.particle.mass(), model.velocity(trace.particle));
        assert_eq!(trace.wavelength.to_bits(), expected.to_bits());
        assert_eq!(trace.amplitudes.len(), SAMPLE_COUNT);
    }
}

#[test]
fn summary_reports_both_default_wavelengths() {
    let model = WaveModel::new();
    let summary = model.summary();

    assert!(summary.contains("λ = h / (m·v)"));
    assert!(summary.contains("Electron"), "summary: {}", summary);
    assert!(summary.contains("Proton"), "summary: {}", summary);
    // Defaults: electron at 1e6 m/s, proton at 1e5 m/s
    assert!(summary.contains("7.27e-13"), "summary: {}", summary);
    assert!(summary.contains("3.96e-12"), "summary: {}", summary);
}

#[test]
fn faster_particle_shows_more_oscillations() {
    // Velocities chosen so both waves stay well below the sampling limit
    // of the 1000-point grid (a few dozen cycles across the chart at most)
    let mut slow = WaveModel::new();
    let mut fast = WaveModel::new();
    slow.set_velocity(Particle::Electron, 400.0);
    fast.set_velocity(Particle::Electron, 4000.0);

    // Shorter wavelength means more zero crossings over the same extent
    let crossings = |amplitudes: &[f64]| {
        amplitudes
            .windows(2)
            .filter(|w| (w[0] <= 0.0) != (w[1] <= 0.0))
            .count()
    };

    let slow_trace = &slow.snapshot().traces[0];
    let fast_trace = &fast.snapshot().traces[0];

    assert!(fast_trace.wavelength < slow_trace.wavelength);
    assert!(
        crossings(&fast_trace.amplitudes) > crossings(&slow_trace.amplitudes),
        "expected denser oscillations at higher velocity"
    );
}
