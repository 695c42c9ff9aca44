use super::paint::{paint_layer, to_rectangle};
use crate::theme::PaletteColors;
use iced::mouse;
use iced::widget::canvas::{self, Geometry};
use iced::widget::image;
use iced::{Rectangle, Theme};
use starfall_core::LauncherScene;
use std::marker::PhantomData;

/// Canvas program for the breathing background image and the particle field.
pub struct Backdrop<'a, Message> {
    pub scene: &'a LauncherScene,
    pub image: Option<&'a image::Handle>,
    pub cache: &'a canvas::Cache,
    pub palette: PaletteColors,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> Backdrop<'a, Message> {
    pub fn new(
        scene: &'a LauncherScene,
        image: Option<&'a image::Handle>,
        cache: &'a canvas::Cache,
        palette: PaletteColors,
    ) -> Self {
        Self {
            scene,
            image,
            cache,
            palette,
            _marker: PhantomData,
        }
    }
}

impl<'a, Message> canvas::Program<Message> for Backdrop<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let backdrop = self.cache.draw(renderer, bounds.size(), |frame| {
            frame.fill_rectangle(
                iced::Point::ORIGIN,
                bounds.size(),
                canvas::Fill::from(self.palette.background),
            );

            // Without an image the plain fill stays as the backdrop.
            if let Some(handle) = self.image {
                frame.draw_image(
                    to_rectangle(self.scene.image_rect()),
                    canvas::Image::new(handle.clone()),
                );
            }

            paint_layer(frame, self.scene.particle_layer());
        });
        vec![backdrop]
    }
}
