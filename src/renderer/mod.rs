//! Rendering module
//!
//! The simulation draws through the `Surface` trait: filled rectangles,
//! rounded rectangles and lines in logical pixels. The browser build backs it
//! with a Canvas 2D context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::draw;

use glam::Vec2;

use crate::sim::Aabb;

/// RGBA color, components in 0-1
pub type Color = [f32; 4];

/// Drawing primitives the scene needs
pub trait Surface {
    /// Viewport size in logical units
    fn size(&self) -> Vec2;
    fn fill_rect(&mut self, rect: Aabb, color: Color);
    fn fill_round_rect(&mut self, rect: Aabb, radius: f32, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
}

/// Surface that draws nothing (headless runs)
#[derive(Debug, Clone, Copy)]
pub struct NullSurface {
    pub size: Vec2,
}

impl Surface for NullSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fill_rect(&mut self, _rect: Aabb, _color: Color) {}

    fn fill_round_rect(&mut self, _rect: Aabb, _radius: f32, _color: Color) {}

    fn line(&mut self, _from: Vec2, _to: Vec2, _width: f32, _color: Color) {}
}

/// CSS color string for a `Color`
pub fn css_color(color: Color) -> String {
    let [r, g, b, a] = color;
    format!(
        "rgba({}, {}, {}, {})",
        (r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (b.clamp(0.0, 1.0) * 255.0).round() as u8,
        a.clamp(0.0, 1.0)
    )
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    const fn rgb(r: u8, g: u8, b: u8) -> Color {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const BACKGROUND: Color = rgb(0xff, 0xff, 0xff);
    pub const GROUND: Color = rgb(0xcb, 0xd5, 0xe1);
    pub const PLAYER: Color = rgb(0x1f, 0x29, 0x37);
    pub const PLAYER_EYE: Color = rgb(0xff, 0xff, 0xff);
    pub const OBSTACLE: Color = rgb(0x0f, 0x17, 0x2a);
}
