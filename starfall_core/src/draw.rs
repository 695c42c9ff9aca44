//! Retained draw layers.
//!
//! The core never touches a GPU or a widget tree. Each animated element
//! rebuilds a [`DrawLayer`] of primitive commands that the host paints in
//! order: background image (from [`crate::background::BackgroundTransform`]),
//! particles, host content, then the glow overlay.

use crate::color::Rgba;
use crate::geometry::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// A filled circle.
    Disk {
        center: Point,
        radius: f32,
        color: Rgba,
    },
    /// A filled rectangle with uniformly rounded corners.
    RoundedRect { rect: Rect, radius: f32, color: Rgba },
}

/// Ordered list of draw commands, rebuilt in place every frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawLayer {
    commands: Vec<DrawCommand>,
}

impl DrawLayer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    /// Drops every command but keeps the allocation for the next rebuild.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.commands.capacity()
    }
}

impl<'a> IntoIterator for &'a DrawLayer {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
