//! de Broglie Wavelength Visualizer
//!
//! Interactive visualization of matter waves for an electron and a proton.
//! Each particle's wavefunction is drawn as a traveling sine wave whose
//! spatial frequency follows the de Broglie relation:
//!
//! - **Wavelength**: λ = h / (m·v), recomputed live from the velocity sliders
//! - **Wavefunction**: ψ(x, t) = sin(kx + φ) with k = 2π/λ
//! - **Animation**: a fixed-step phase accumulator makes both waves propagate
//!
//! The electron, being far lighter, shows a visibly longer wavelength than
//! the proton at comparable velocities.

pub mod equations_ui;
pub mod graphics;
pub mod physics;
pub mod renderer;

/// Physical constants in SI units
pub mod constants {
    /// Planck constant (J·s)
    pub const PLANCK_CONSTANT: f64 = 6.62607015e-34;

    /// Electron rest mass (kg)
    pub const ELECTRON_MASS: f64 = 9.10938356e-31;

    /// Proton rest mass (kg)
    pub const PROTON_MASS: f64 = 1.6726219e-27;

    /// Substituted for momentum when it is exactly zero, keeping the
    /// wavelength finite (kg·m/s)
    pub const EPSILON_MOMENTUM: f64 = 1e-40;
}
