//! Starfall Desktop - Entry point for the Iced launcher window.

use starfall_core::catalog::{load_entries, ConfiguredCatalog, LaunchEntry};
use starfall_core::config::Config;
use starfall_core::geometry::{Point, Size};
use starfall_core::LauncherScene;
use starfall_desktop::canvas::{Backdrop, GlowOverlay};
use starfall_desktop::logging::init_logging;
use starfall_desktop::styles::{app_row_style, header_style, transparent_style};
use starfall_desktop::{
    desktop_services, ListGeometry, PaletteColors, HEADER_HEIGHT, ITEM_HEIGHT, ITEM_SPACING,
    ITEM_TEXT_SIZE, LIST_PADDING, SUBTITLE, SUBTITLE_SIZE, TITLE, TITLE_SIZE,
    UI_PADDING_HORIZONTAL, UI_PADDING_VERTICAL, WINDOW_HEIGHT, WINDOW_WIDTH,
};

use iced::alignment::Vertical;
use iced::time::{self, Duration, Instant};
use iced::widget::canvas::{self, Canvas};
use iced::widget::{column, container, image, scrollable, stack, text};
use iced::{event, mouse, touch, window, Color, Element, Event, Length, Subscription, Task};

/// Application state.
struct App {
    config: Config,
    scene: LauncherScene,
    entries: Vec<LaunchEntry>,
    palette: PaletteColors,
    /// Current window size in logical pixels
    window: Size,
    /// Vertical scroll of the app list
    scroll_offset: f32,
    /// Last known pointer position; mouse presses carry no position of their own
    cursor: Option<iced::Point>,
    last_tick: Option<Instant>,
    background_image: Option<image::Handle>,
    backdrop_cache: canvas::Cache,
    glow_cache: canvas::Cache,
}

/// Application messages.
#[derive(Debug, Clone)]
enum Message {
    Tick(Instant),
    Resized(iced::Size),
    CursorMoved(iced::Point),
    Pressed,
    Touch(iced::Point),
    Scrolled(scrollable::Viewport),
}

impl App {
    fn init() -> (Self, Task<Message>) {
        init_logging();

        let config = Config::load_or_default();
        let entries = load_entries(&ConfiguredCatalog::new(config.apps.clone()));
        let window = Size::new(WINDOW_WIDTH, WINDOW_HEIGHT);
        let scene = LauncherScene::new(&config, window, desktop_services(&config));
        let palette = PaletteColors::night().with_glow(config.glow.color);

        let image_path = config.asset_path(&config.background.image);
        let background_image = if image_path.is_file() {
            Some(image::Handle::from_path(&image_path))
        } else {
            tracing::warn!(path = %image_path.display(), "background image not found, using plain fill");
            None
        };

        tracing::info!(entries = entries.len(), "launcher ready");
        let app = Self {
            config,
            scene,
            entries,
            palette,
            window,
            scroll_offset: 0.0,
            cursor: None,
            last_tick: None,
            background_image,
            backdrop_cache: canvas::Cache::default(),
            glow_cache: canvas::Cache::default(),
        };
        (app, Task::none())
    }

    fn layout(&self) -> ListGeometry {
        ListGeometry::new(self.window, self.scroll_offset, self.entries.len())
    }

    fn touch(&mut self, position: iced::Point) {
        let layout = self.layout();
        let point = Point::new(position.x, position.y);
        if let Some(item) = self.scene.touch_down(point, &layout, &self.entries) {
            tracing::debug!(item = item.0, "row selected");
            self.glow_cache.clear();
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => {
                let dt = self
                    .last_tick
                    .map(|last| now.saturating_duration_since(last).as_secs_f32())
                    .unwrap_or_else(|| self.config.background.tick_period());
                self.last_tick = Some(now);
                self.scene.tick(dt);
                self.backdrop_cache.clear();
                self.glow_cache.clear();
            }
            Message::Resized(size) => {
                self.window = Size::new(size.width, size.height);
                self.scene.resize(self.window);
                self.backdrop_cache.clear();
                self.glow_cache.clear();
            }
            Message::CursorMoved(position) => {
                self.cursor = Some(position);
                let layout = self.layout();
                self.scene.hover(Point::new(position.x, position.y), &layout);
            }
            Message::Pressed => {
                if let Some(position) = self.cursor {
                    self.touch(position);
                }
            }
            Message::Touch(position) => self.touch(position),
            Message::Scrolled(viewport) => {
                self.scroll_offset = viewport.absolute_offset().y;
            }
        }
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        let period = Duration::from_secs_f32(self.config.background.tick_period());
        let ticks = time::every(period).map(Message::Tick);
        let resizes = window::resize_events().map(|(_id, size)| Message::Resized(size));
        let input = event::listen_with(input_event);
        Subscription::batch(vec![ticks, resizes, input])
    }

    fn view(&self) -> Element<'_, Message> {
        let pal = self.palette;

        let backdrop = Canvas::new(Backdrop::<Message>::new(
            &self.scene,
            self.background_image.as_ref(),
            &self.backdrop_cache,
            pal,
        ))
        .width(Length::Fill)
        .height(Length::Fill);

        let header = container(
            column![
                text(TITLE).size(TITLE_SIZE),
                text(SUBTITLE)
                    .size(SUBTITLE_SIZE)
                    .color(Color { a: 0.8, ..pal.muted }),
            ]
            .spacing(4),
        )
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .style(header_style(pal));

        let rows = self.entries.iter().map(|entry| {
            container(text(entry.label.as_str()).size(ITEM_TEXT_SIZE))
                .width(Length::Fill)
                .height(Length::Fixed(ITEM_HEIGHT))
                .padding([0.0, 16.0])
                .align_y(Vertical::Center)
                .style(app_row_style(pal))
                .into()
        });

        let list = scrollable(column(rows).spacing(ITEM_SPACING).padding(LIST_PADDING))
            .on_scroll(Message::Scrolled)
            .width(Length::Fill)
            .height(Length::Fill);

        let ui = container(column![header, list])
            .padding([UI_PADDING_VERTICAL, UI_PADDING_HORIZONTAL])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(transparent_style());

        let glow = Canvas::new(GlowOverlay::<Message>::new(
            self.scene.glow_layer(),
            &self.glow_cache,
        ))
        .width(Length::Fill)
        .height(Length::Fill);

        stack![backdrop, ui, glow].into()
    }
}

/// Pointer and touch input, observed whether or not a widget captured it.
fn input_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Message::CursorMoved(position)),
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => Some(Message::Pressed),
        Event::Touch(touch::Event::FingerPressed { position, .. }) => Some(Message::Touch(position)),
        _ => None,
    }
}

fn main() -> iced::Result {
    fn get_theme(app: &App) -> iced::Theme {
        app.palette.theme()
    }

    iced::application(App::init, App::update, App::view)
        .title("Starfall Launcher")
        .subscription(App::subscription)
        .theme(get_theme)
        .window_size((WINDOW_WIDTH, WINDOW_HEIGHT))
        .run()
}
