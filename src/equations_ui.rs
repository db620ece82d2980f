//! egui panels around the charts
//!
//! Velocity sliders and the live formula summary on top, the explanatory
//! text below, and an equations/variables sidebar on the right.

use crate::physics::{Particle, WaveModel};
use egui::{Color32, Context, FontFamily, FontId, RichText};

/// Equation entry with label and formula
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

pub const DE_BROGLIE_EQUATIONS: &[Equation] = &[
    Equation {
        name: "de Broglie Relation",
        formula: "λ = h / (m·v)",
        description: "Wavelength of a massive particle",
    },
    Equation {
        name: "Momentum",
        formula: "p = m·v",
        description: "Mass times velocity",
    },
    Equation {
        name: "Wavenumber",
        formula: "k = 2π / λ",
        description: "Spatial frequency of the wave",
    },
    Equation {
        name: "Wavefunction",
        formula: "ψ(x, t) = sin(kx + φ)",
        description: "Plotted in both charts",
    },
    Equation {
        name: "Phase Advance",
        formula: "φ → φ + 0.2 rad / tick",
        description: "Drives the traveling-wave animation",
    },
];

pub const DE_BROGLIE_VARIABLES: &[(&str, &str)] = &[
    ("h", "Planck constant, 6.626e-34 J·s"),
    ("m", "Particle rest mass"),
    ("v", "Velocity from the slider"),
    ("λ", "de Broglie wavelength"),
    ("k", "Wavenumber"),
    ("φ", "Animation phase"),
    ("ψ", "Wavefunction amplitude"),
];

const DESCRIPTION: &str = "\
Both the electron and the proton are treated here as quantum waves. Their \
wavefunctions are drawn as sine curves evolving in time, ψ(x, t) = sin(kx + φ) \
with k = 2π/λ. The electron has a much smaller mass, so at a given velocity \
its wavelength is longer: the wave looks stretched, with sparse oscillations. \
The proton is far heavier, so at the same velocity its wavelength is much \
shorter and the chart shows dense, compressed oscillations. This is de \
Broglie's principle at work: the larger the mass or the velocity, the shorter \
the wavelength (λ = h/mv).";

/// Draw the styled equation sidebar
pub fn draw_equations_sidebar(
    ctx: &Context,
    title: &str,
    equations: &[Equation],
    variables: &[(&str, &str)],
) {
    egui::SidePanel::right("equations_panel")
        .min_width(280.0)
        .max_width(350.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new(title).color(Color32::from_rgb(100, 200, 255)));
            });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(5.0);

            ui.label(
                RichText::new("Equations")
                    .strong()
                    .color(Color32::from_rgb(255, 200, 100)),
            );
            ui.add_space(5.0);

            for eq in equations {
                draw_equation(ui, eq);
                ui.add_space(8.0);
            }

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(5.0);

            ui.label(
                RichText::new("Variables")
                    .strong()
                    .color(Color32::from_rgb(255, 200, 100)),
            );
            ui.add_space(5.0);

            for (symbol, meaning) in variables {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(*symbol)
                            .color(Color32::from_rgb(150, 255, 150))
                            .font(FontId::new(14.0, FontFamily::Monospace)),
                    );
                    ui.label(RichText::new("=").color(Color32::GRAY));
                    ui.label(RichText::new(*meaning).color(Color32::LIGHT_GRAY));
                });
            }
        });
}

fn draw_equation(ui: &mut egui::Ui, eq: &Equation) {
    ui.group(|ui| {
        ui.label(RichText::new(eq.name).strong().color(Color32::WHITE));
        ui.label(
            RichText::new(eq.formula)
                .font(FontId::new(16.0, FontFamily::Monospace))
                .color(Color32::from_rgb(200, 220, 255)),
        );
        ui.label(RichText::new(eq.description).small().color(Color32::GRAY));
    });
}

/// Draw the velocity sliders and live formula summary.
/// Returns true if either slider changed this frame.
pub fn draw_control_panel(ctx: &Context, model: &mut WaveModel, paused: bool) -> bool {
    let mut changed = false;

    egui::TopBottomPanel::top("controls").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.heading(
                RichText::new("de Broglie Wavelength — Electron and Proton")
                    .color(Color32::from_rgb(100, 200, 255)),
            );
            if paused {
                ui.add_space(12.0);
                ui.label(RichText::new("PAUSED").color(Color32::YELLOW));
            }
        });
        ui.add_space(6.0);

        for particle in Particle::ALL {
            let (min, max) = particle.velocity_range();
            let mut velocity = model.velocity(particle);
            let slider = egui::Slider::new(&mut velocity, min..=max)
                .logarithmic(true)
                .custom_formatter(|v, _| format!("{v:.0}"))
                .text(format!("{} velocity (m/s)", particle.label()));
            if ui.add(slider).changed() {
                model.set_velocity(particle, velocity);
                changed = true;
            }
        }

        ui.add_space(8.0);
        ui.label(
            RichText::new(model.summary())
                .font(FontId::new(13.0, FontFamily::Monospace))
                .color(Color32::LIGHT_GRAY),
        );
        ui.add_space(6.0);
    });

    changed
}

/// Draw the static explanatory text along the bottom
pub fn draw_description_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("description").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.label(
            RichText::new("How to read the charts")
                .strong()
                .color(Color32::from_rgb(255, 200, 100)),
        );
        ui.add_space(4.0);
        ui.label(RichText::new(DESCRIPTION).color(Color32::LIGHT_GRAY));
        ui.add_space(6.0);
    });
}

/// Title above each chart panel plus the shared axis caption.
/// Positions are the chart viewports converted to egui points.
pub fn draw_chart_titles(ctx: &Context, chart_rects: &[egui::Rect; 2]) {
    for (rect, particle) in chart_rects.iter().zip(Particle::ALL) {
        let color = particle.color();
        let title_color = Color32::from_rgb(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
        );

        egui::Area::new(egui::Id::new(("chart_title", particle.label())))
            .fixed_pos(egui::pos2(rect.left(), rect.top() - 24.0))
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(format!("{} wavefunction", particle.label()))
                        .strong()
                        .color(title_color),
                );
            });

        egui::Area::new(egui::Id::new(("chart_axis", particle.label())))
            .fixed_pos(egui::pos2(rect.center().x - 48.0, rect.bottom() + 4.0))
            .show(ctx, |ui| {
                ui.label(
                    RichText::new("Position (nm)")
                        .small()
                        .color(Color32::GRAY),
                );
            });
    }
}
