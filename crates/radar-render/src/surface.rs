//! Drawing surfaces.
//!
//! A `Surface` is anything that can take `DrawCommand`s. The renderer only
//! ever talks to this trait, so the same frame can be rasterized into
//! pixels or recorded for inspection.

use crate::command::DrawCommand;

pub trait Surface {
    /// Size in logical pixels `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Composite one command over the current contents.
    fn draw(&mut self, command: &DrawCommand);
}

/// Surface that records commands instead of drawing them.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for DrawList {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw(&mut self, command: &DrawCommand) {
        self.commands.push(*command);
    }
}
