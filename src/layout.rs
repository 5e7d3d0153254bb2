use raylib::prelude::{Rectangle, Vector2};

use crate::constants::*;

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Previous,
    Next,
    Indicator(usize),
}

/// Screen geometry of the hero carousel for one window size.
#[derive(Debug, Clone)]
pub struct Layout {
    pub hero: Rectangle,
    pub previous_button: Rectangle,
    pub next_button: Rectangle,
    pub indicators: Vec<Vector2>,
    pub caption: Vector2,
}

impl Layout {
    pub fn new(width: f32, height: f32, slide_count: usize) -> Self {
        let hero = Rectangle::new(0.0, 0.0, width, height);

        let button_y = (height - NAV_BUTTON_SIZE) * 0.5;
        let previous_button =
            Rectangle::new(NAV_BUTTON_MARGIN, button_y, NAV_BUTTON_SIZE, NAV_BUTTON_SIZE);
        let next_button = Rectangle::new(
            width - NAV_BUTTON_MARGIN - NAV_BUTTON_SIZE,
            button_y,
            NAV_BUTTON_SIZE,
            NAV_BUTTON_SIZE,
        );

        // Dots are centred as a row on the horizontal middle
        let row_width = INDICATOR_SPACING * slide_count.saturating_sub(1) as f32;
        let first_x = (width - row_width) * 0.5;
        let row_y = height - INDICATOR_BOTTOM_OFFSET;
        let indicators = (0..slide_count)
            .map(|i| Vector2::new(first_x + INDICATOR_SPACING * i as f32, row_y))
            .collect();

        let caption = Vector2::new(width * CAPTION_LEFT_MARGIN, height * CAPTION_BASELINE);

        Self {
            hero,
            previous_button,
            next_button,
            indicators,
            caption,
        }
    }

    pub fn contains_hero(&self, point: Vector2) -> bool {
        rect_contains(&self.hero, point)
    }

    pub fn hit_test(&self, point: Vector2) -> Option<Hit> {
        if rect_contains(&self.previous_button, point) {
            return Some(Hit::Previous);
        }
        if rect_contains(&self.next_button, point) {
            return Some(Hit::Next);
        }

        let reach = INDICATOR_RADIUS + INDICATOR_HIT_SLOP;
        self.indicators
            .iter()
            .position(|centre| {
                let dx = point.x - centre.x;
                let dy = point.y - centre.y;
                dx * dx + dy * dy <= reach * reach
            })
            .map(Hit::Indicator)
    }
}

/// Part of a `texture_width` x `texture_height` image that covers the target
/// area without distortion, cropping the overflow evenly on both sides.
pub fn cover_source(
    texture_width: f32,
    texture_height: f32,
    target_width: f32,
    target_height: f32,
) -> Rectangle {
    if texture_width <= 0.0 || texture_height <= 0.0 || target_width <= 0.0 || target_height <= 0.0 {
        return Rectangle::new(0.0, 0.0, texture_width.max(0.0), texture_height.max(0.0));
    }
    let scale = (target_width / texture_width).max(target_height / texture_height);
    let width = target_width / scale;
    let height = target_height / scale;
    Rectangle::new(
        (texture_width - width) * 0.5,
        (texture_height - height) * 0.5,
        width,
        height,
    )
}

fn rect_contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x < rect.x + rect.width
        && point.y >= rect.y
        && point.y < rect.y + rect.height
}
