//! Canvas rendering for the particle field.
//!
//! Each particle is a soft radial glow: the gradient fades from the inner
//! accent color (at the particle's own opacity) to a transparent outer color,
//! and is filled over a circle smaller than the gradient's full extent.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::{Particle, ParticleField};
use crate::config::ParticleConfig;

/// Clears the surface and draws every particle in collection order.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	for p in field.particles() {
		draw_particle(ctx, p, field.config());
	}
}

fn draw_particle(ctx: &CanvasRenderingContext2d, p: &Particle, config: &ParticleConfig) {
	let Ok(gradient) =
		ctx.create_radial_gradient(p.x, p.y, 0.0, p.x, p.y, p.radius * config.glow_scale)
	else {
		return;
	};

	let _ = gradient.add_color_stop(0.0, &config.inner_color.with_alpha(p.alpha).to_css());
	let _ = gradient.add_color_stop(1.0, &config.outer_color.to_css());

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.begin_path();
	let _ = ctx.arc(p.x, p.y, p.radius * config.fill_scale, 0.0, PI * 2.0);
	ctx.fill();
}
