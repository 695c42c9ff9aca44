//! Window-space placement of the app rows.
//!
//! Mirrors the widget tree built in `main.rs`: outer padding, a fixed-height
//! header, then a scrollable column of fixed-height rows.

use crate::constants::*;
use starfall_core::catalog::{ItemBounds, ItemId};
use starfall_core::geometry::{Point, Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListGeometry {
    window: Size,
    scroll_offset: f32,
    item_count: usize,
}

impl ListGeometry {
    pub fn new(window: Size, scroll_offset: f32, item_count: usize) -> Self {
        Self {
            window,
            scroll_offset: scroll_offset.max(0.0),
            item_count,
        }
    }

    /// Visible region of the scrollable list. Rows outside it are clipped.
    pub fn list_viewport(&self) -> Rect {
        Rect::new(
            UI_PADDING_HORIZONTAL,
            UI_PADDING_VERTICAL + HEADER_HEIGHT,
            self.window.width - 2.0 * UI_PADDING_HORIZONTAL,
            self.window.height - 2.0 * UI_PADDING_VERTICAL - HEADER_HEIGHT,
        )
        .non_negative()
    }

    fn row_pitch() -> f32 {
        ITEM_HEIGHT + ITEM_SPACING
    }

    fn first_row_top(&self) -> f32 {
        self.list_viewport().y + LIST_PADDING - self.scroll_offset
    }
}

impl ItemBounds for ListGeometry {
    fn item_count(&self) -> usize {
        self.item_count
    }

    fn bounds_of(&self, item: ItemId) -> Option<Rect> {
        if item.0 >= self.item_count {
            return None;
        }
        let viewport = self.list_viewport();
        Some(Rect::new(
            viewport.x + LIST_PADDING,
            self.first_row_top() + item.0 as f32 * Self::row_pitch(),
            (viewport.width - 2.0 * LIST_PADDING).max(0.0),
            ITEM_HEIGHT,
        ))
    }

    fn hit_test(&self, point: Point) -> Option<ItemId> {
        if !self.list_viewport().contains(point) {
            return None;
        }
        let local = point.y - self.first_row_top();
        if local < 0.0 {
            return None;
        }
        let item = ItemId((local / Self::row_pitch()).floor() as usize);
        self.bounds_of(item)
            .filter(|rect| rect.contains(point))
            .map(|_| item)
    }
}
