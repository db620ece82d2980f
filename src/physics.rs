//! Matter wave physics
//!
//! Computes de Broglie wavelengths and the sinusoidal wavefunction samples
//! drawn by the charts. Everything here is pure f64 arithmetic; the model
//! struct at the bottom owns the mutable state driven by the UI.

use crate::constants::{ELECTRON_MASS, EPSILON_MOMENTUM, PLANCK_CONSTANT, PROTON_MASS};
use std::f64::consts::PI;

/// Number of position samples per wave trace
pub const SAMPLE_COUNT: usize = 1000;

/// Spatial extent of the charts (m)
pub const X_MAX: f64 = 1e-8;

/// Phase advance per animation tick (rad)
pub const PHASE_STEP: f64 = 0.2;

/// The two particle kinds being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Particle {
    Electron,
    Proton,
}

impl Particle {
    pub const ALL: [Particle; 2] = [Particle::Electron, Particle::Proton];

    pub fn mass(&self) -> f64 {
        match self {
            Particle::Electron => ELECTRON_MASS,
            Particle::Proton => PROTON_MASS,
        }
    }

    /// Slider range for this particle's velocity (m/s)
    pub fn velocity_range(&self) -> (f64, f64) {
        match self {
            Particle::Electron => (100.0, 3e8),
            Particle::Proton => (100.0, 3e7),
        }
    }

    pub fn default_velocity(&self) -> f64 {
        match self {
            Particle::Electron => 1e6,
            Particle::Proton => 1e5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Particle::Electron => "Electron",
            Particle::Proton => "Proton",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Particle::Electron => "λₑ",
            Particle::Proton => "λₚ",
        }
    }

    pub fn color(&self) -> [f32; 4] {
        match self {
            Particle::Electron => [0.35, 0.65, 1.0, 1.0], // Blue
            Particle::Proton => [1.0, 0.6, 0.15, 1.0],    // Orange
        }
    }

    fn index(&self) -> usize {
        match self {
            Particle::Electron => 0,
            Particle::Proton => 1,
        }
    }
}

/// de Broglie wavelength λ = h / (m·v)
///
/// Zero momentum is replaced by a tiny epsilon so the result stays finite
/// and strictly positive for any slider position.
pub fn de_broglie_wavelength(mass: f64, velocity: f64) -> f64 {
    let momentum = mass * velocity;
    let momentum = if momentum == 0.0 {
        EPSILON_MOMENTUM
    } else {
        momentum
    };
    PLANCK_CONSTANT / momentum
}

/// Sample ψ(x) = sin(kx + φ) with k = 2π/λ over the given positions
pub fn wave_amplitudes(wavelength: f64, phase: f64, positions: &[f64]) -> Vec<f64> {
    let k = 2.0 * PI / wavelength;
    positions.iter().map(|&x| (k * x + phase).sin()).collect()
}

/// Evenly spaced positions from 0 to `X_MAX`
pub fn position_grid() -> Vec<f64> {
    (0..SAMPLE_COUNT)
        .map(|i| X_MAX * i as f64 / (SAMPLE_COUNT - 1) as f64)
        .collect()
}

/// One particle's wave, ready for display
pub struct WaveTrace {
    pub particle: Particle,
    pub wavelength: f64,
    pub amplitudes: Vec<f64>,
}

/// Everything a single redraw needs: both traces plus the formatted summary
pub struct DisplaySnapshot {
    pub traces: [WaveTrace; 2],
    pub summary: String,
}

/// The model behind the UI: per-particle velocities and the shared
/// animation phase
pub struct WaveModel {
    velocities: [f64; 2],
    phase: f64,
    positions: Vec<f64>,
}

impl WaveModel {
    pub fn new() -> Self {
        Self {
            velocities: [
                Particle::Electron.default_velocity(),
                Particle::Proton.default_velocity(),
            ],
            phase: 0.0,
            positions: position_grid(),
        }
    }

    pub fn velocity(&self, particle: Particle) -> f64 {
        self.velocities[particle.index()]
    }

    /// Set a particle's velocity, clamped to its slider range
    pub fn set_velocity(&mut self, particle: Particle, velocity: f64) {
        let (min, max) = particle.velocity_range();
        self.velocities[particle.index()] = velocity.clamp(min, max);
    }

    /// Restore default velocities; the phase keeps running
    pub fn reset(&mut self) {
        for particle in Particle::ALL {
            self.velocities[particle.index()] = particle.default_velocity();
        }
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Advance the animation by one fixed tick
    pub fn advance_phase(&mut self) {
        self.phase += PHASE_STEP;
    }

    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    pub fn wavelength(&self, particle: Particle) -> f64 {
        de_broglie_wavelength(particle.mass(), self.velocity(particle))
    }

    /// Recompute both wavelengths, both wave traces and the summary text.
    /// Deterministic: identical velocities and phase give identical output.
    pub fn snapshot(&self) -> DisplaySnapshot {
        let traces = Particle::ALL.map(|particle| {
            let wavelength = self.wavelength(particle);
            WaveTrace {
                particle,
                wavelength,
                amplitudes: wave_amplitudes(wavelength, self.phase, &self.positions),
            }
        });

        DisplaySnapshot {
            traces,
            summary: self.summary(),
        }
    }

    /// Human-readable formula breakdown with both numeric results
    pub fn summary(&self) -> String {
        let mut lines = vec!["Formula: λ = h / (m·v)".to_string()];

        for particle in Particle::ALL {
            let wavelength = self.wavelength(particle);
            lines.push(format!(
                "{:<9} {} = {:.2e} / ({:.2e} × {:.2e}) = {:.2e} m ≈ {:.2} pm",
                format!("{}:", particle.label()),
                particle.symbol(),
                PLANCK_CONSTANT,
                particle.mass(),
                self.velocity(particle),
                wavelength,
                wavelength * 1e12,
            ));
        }

        lines.join("\n")
    }
}

impl Default for WaveModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn wavelength_matches_de_broglie_relation() {
        let wavelength = de_broglie_wavelength(ELECTRON_MASS, 1e6);
        assert_relative_eq!(
            wavelength,
            PLANCK_CONSTANT / (ELECTRON_MASS * 1e6),
            max_relative = 1e-12
        );
        assert!(wavelength > 0.0 && wavelength.is_finite());
    }

    #[test]
    fn electron_at_1e6_is_about_0_73_pm() {
        let wavelength = de_broglie_wavelength(ELECTRON_MASS, 1e6);
        assert_relative_eq!(wavelength, 7.27e-13, max_relative = 1e-3);
    }

    #[test]
    fn proton_at_1e5_is_about_3_96_pm() {
        let wavelength = de_broglie_wavelength(PROTON_MASS, 1e5);
        assert_relative_eq!(wavelength, 3.96e-12, max_relative = 1e-3);
    }

    #[test]
    fn doubling_velocity_halves_wavelength() {
        let base = de_broglie_wavelength(ELECTRON_MASS, 1e6);
        let doubled = de_broglie_wavelength(ELECTRON_MASS, 2e6);
        assert_relative_eq!(doubled, base / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn wavelength_decreases_with_velocity() {
        let mut previous = f64::INFINITY;
        for velocity in [1e2, 1e4, 1e6, 1e8] {
            let wavelength = de_broglie_wavelength(ELECTRON_MASS, velocity);
            assert!(
                wavelength < previous,
                "λ should shrink as v grows, got {} at v = {}",
                wavelength,
                velocity
            );
            previous = wavelength;
        }
    }

    #[test]
    fn zero_momentum_stays_finite() {
        let wavelength = de_broglie_wavelength(ELECTRON_MASS, 0.0);
        assert!(wavelength.is_finite());
        assert!(wavelength > 0.0);
        assert_relative_eq!(wavelength, PLANCK_CONSTANT / EPSILON_MOMENTUM);
    }

    #[test]
    fn amplitudes_stay_within_unit_bounds() {
        let positions = position_grid();
        for phase in [0.0, 1.7, 100.0, 12345.6] {
            let amplitudes = wave_amplitudes(7.27e-13, phase, &positions);
            assert_eq!(amplitudes.len(), positions.len());
            for &a in &amplitudes {
                assert!((-1.0..=1.0).contains(&a), "amplitude {} out of bounds", a);
            }
        }
    }

    #[test]
    fn position_grid_spans_chart_extent() {
        let positions = position_grid();
        assert_eq!(positions.len(), SAMPLE_COUNT);
        assert_eq!(positions[0], 0.0);
        assert_relative_eq!(positions[SAMPLE_COUNT - 1], X_MAX);
    }
}
