//! Scene composition.
//!
//! The scene is an ordered, back-to-front list of layers. Composition
//! turns the animation state into a draw-command list (pure), and
//! rendering executes that list against a framebuffer.

mod command;
mod execute;
mod layers;

pub use command::DrawCommand;
pub use execute::execute;
pub use layers::{Airplane, Banner, Buildings, ControlTower, Ground, Layer, Runway, Sky, Sun};

use crate::anim::SceneState;
use crate::color::Rgba;
use crate::framebuffer::Framebuffer;

/// Logical canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 800;
/// Logical canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 600;

/// An ordered stack of scene layers.
pub struct Scene {
    layers: Vec<Box<dyn Layer>>,
}

impl Scene {
    /// The airport scene in its fixed back-to-front order.
    #[must_use]
    pub fn airport() -> Self {
        Self {
            layers: vec![
                Box::new(Sky),
                Box::new(Sun),
                Box::new(Buildings),
                Box::new(ControlTower),
                Box::new(Airplane),
                Box::new(Runway),
                Box::new(Ground),
                Box::new(Banner),
            ],
        }
    }

    /// Build a scene from an explicit layer stack.
    #[must_use]
    pub fn from_layers(layers: Vec<Box<dyn Layer>>) -> Self {
        Self { layers }
    }

    /// Number of layers in the stack.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Compose the frame for a state: a clear followed by every layer's
    /// commands, in stack order. Pure in the state — identical states
    /// produce identical command lists.
    #[must_use]
    pub fn compose(&self, state: &SceneState) -> Vec<DrawCommand> {
        let mut commands = vec![DrawCommand::Clear(Rgba::BLACK)];
        for layer in &self.layers {
            layer.emit(state, &mut commands);
        }
        commands
    }

    /// Compose and rasterize one frame into the framebuffer.
    pub fn render(&self, state: &SceneState, fb: &mut Framebuffer) {
        execute(&self.compose(state), fb);
    }
}
