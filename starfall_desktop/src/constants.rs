// Window
pub const WINDOW_WIDTH: f32 = 420.0;
pub const WINDOW_HEIGHT: f32 = 860.0;

// Screen layout
pub const UI_PADDING_VERTICAL: f32 = 24.0;
pub const UI_PADDING_HORIZONTAL: f32 = 12.0;
pub const HEADER_HEIGHT: f32 = 80.0;
pub const TITLE_SIZE: f32 = 26.0;
pub const SUBTITLE_SIZE: f32 = 14.0;

// App list
pub const LIST_PADDING: f32 = 12.0;
pub const ITEM_HEIGHT: f32 = 56.0;
pub const ITEM_SPACING: f32 = 6.0;
pub const ITEM_TEXT_SIZE: f32 = 17.0;
pub const ITEM_BORDER_RADIUS: f32 = 8.0;

// Copy
pub const TITLE: &str = "BLACK\u{2605}ROCK SHOOTER";
pub const SUBTITLE: &str = "Launcher Mode";
