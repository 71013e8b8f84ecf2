//! Ambient particle backdrop.
//!
//! A fixed-size batch of soft point-lights drifts across a full-viewport,
//! input-transparent canvas:
//! - Batch size scales with viewport area, with a floor of `min_count`
//! - The whole batch is regenerated on every window resize
//! - Positions wrap around a margin past each edge (torus, not bounce)
//!
//! # Example
//!
//! ```ignore
//! use portfolio_fx::components::particles::ParticleCanvas;
//!
//! mount_to_body(|| view! { <ParticleCanvas /> });
//! ```

mod color;
mod component;
mod field;
mod render;

pub use color::Color;
pub use component::ParticleCanvas;
pub use field::{Particle, ParticleField, RandomSource, particle_count, wrap};
