use super::paint::paint_layer;
use iced::mouse;
use iced::widget::canvas::{self, Geometry};
use iced::{Rectangle, Theme};
use starfall_core::draw::DrawLayer;
use std::marker::PhantomData;

/// Canvas program painting the selection glow above the app list.
pub struct GlowOverlay<'a, Message> {
    pub layer: &'a DrawLayer,
    pub cache: &'a canvas::Cache,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> GlowOverlay<'a, Message> {
    pub fn new(layer: &'a DrawLayer, cache: &'a canvas::Cache) -> Self {
        Self {
            layer,
            cache,
            _marker: PhantomData,
        }
    }
}

impl<'a, Message> canvas::Program<Message> for GlowOverlay<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        if self.layer.is_empty() {
            return Vec::new();
        }
        let glow = self.cache.draw(renderer, bounds.size(), |frame| {
            paint_layer(frame, self.layer);
        });
        vec![glow]
    }
}
