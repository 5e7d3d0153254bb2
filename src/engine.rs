//! raylib host for the carousel: wiring, input polling and drawing.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use raylib::prelude::*;
use tracing::{info, warn};

use crate::config::Settings;
use crate::constants::*;
use crate::controller::SlideshowController;
use crate::input::{Interaction, PointerTracker, dispatch};
use crate::layout::{Hit, Layout, cover_source};
use crate::stage::Stage;
use crate::texture_loader::load_texture_with_exif_rotation;
use crate::timer::FrameTimers;

const DIGIT_KEYS: [KeyboardKey; 9] = [
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

const BACKDROP: Color = Color::new(18, 20, 28, 255);
const CONTROL_FILL: Color = Color::new(255, 255, 255, 60);
const CONTROL_TEXT: Color = Color::new(255, 255, 255, 230);
const DOT_IDLE: Color = Color::new(255, 255, 255, 110);
const CAPTION_SHADOW: Color = Color::new(0, 0, 0, 160);

pub struct HeroEngine {
    controller: SlideshowController<FrameTimers>,
    textures: HashMap<PathBuf, Texture2D>,
    layout: Layout,
    pointer: PointerTracker,
}

impl HeroEngine {
    /// Composition root: loads every background, builds the stage and
    /// starts the controller.
    ///
    /// A background that fails to load is dropped from its slide, which then
    /// keeps its previous (empty) background while staying in the rotation.
    pub fn initialize(rl: &mut RaylibHandle, thread: &RaylibThread, settings: &Settings) -> Self {
        let mut slides = settings.build_slides();
        let mut textures = HashMap::new();

        for slide in slides.iter_mut() {
            let Some(path) = slide.background().map(|p| p.to_path_buf()) else {
                continue;
            };
            if textures.contains_key(&path) {
                continue;
            }
            match load_texture_with_exif_rotation(rl, thread, &path) {
                Ok(texture) => {
                    textures.insert(path, texture);
                }
                Err(e) => {
                    warn!("Skipping background: {}", e);
                    slide.forget_background();
                }
            }
        }

        let stage = Stage::from_slides(slides);
        let layout = Layout::new(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
            stage.len(),
        );
        info!(
            slides = stage.len(),
            backgrounds = textures.len(),
            interval_ms = settings.interval.as_millis() as u64,
            "Carousel ready"
        );

        Self {
            controller: SlideshowController::new(stage, FrameTimers::new(), settings.interval),
            textures,
            layout,
            pointer: PointerTracker::new(),
        }
    }

    pub fn controller(&self) -> &SlideshowController<FrameTimers> {
        &self.controller
    }

    /// Handles this frame's input, then advances the timers by the frame time.
    pub fn update(&mut self, rl: &RaylibHandle) {
        let width = rl.get_screen_width() as f32;
        let height = rl.get_screen_height() as f32;
        if width != self.layout.hero.width || height != self.layout.hero.height {
            self.layout = Layout::new(width, height, self.controller.len());
        }

        for interaction in self.poll_interactions(rl) {
            dispatch(&mut self.controller, interaction);
        }

        self.controller
            .tick(Duration::from_secs_f32(rl.get_frame_time().max(0.0)));
    }

    fn poll_interactions(&mut self, rl: &RaylibHandle) -> Vec<Interaction> {
        let mut interactions = Vec::new();
        let mouse = rl.get_mouse_position();

        let inside = rl.is_cursor_on_screen() && self.layout.contains_hero(mouse);
        if let Some(edge) = self.pointer.update(inside) {
            interactions.push(edge);
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            match self.layout.hit_test(mouse) {
                Some(Hit::Previous) => interactions.push(Interaction::Previous),
                Some(Hit::Next) => interactions.push(Interaction::Next),
                Some(Hit::Indicator(index)) => interactions.push(Interaction::JumpTo(index)),
                None => {}
            }
        }

        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            interactions.push(Interaction::Next);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            interactions.push(Interaction::Previous);
        }
        for (index, key) in DIGIT_KEYS.iter().enumerate() {
            if rl.is_key_pressed(*key) {
                interactions.push(Interaction::JumpTo(index));
            }
        }

        interactions
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(BACKDROP);

        let stage = self.controller.stage();
        if stage.is_empty() {
            d.draw_text("No slides loaded.", 20, 20, 20, Color::RED);
            return;
        }

        if let Some(slide) = stage.active_slide() {
            let texture = slide
                .background_style()
                .and_then(|path| self.textures.get(path));
            if let Some(texture) = texture {
                self.draw_background(d, texture);
            }
            if let Some(caption) = slide.caption() {
                let x = self.layout.caption.x as i32;
                let y = self.layout.caption.y as i32;
                d.draw_text(caption, x + 2, y + 2, CAPTION_FONT_SIZE, CAPTION_SHADOW);
                d.draw_text(caption, x, y, CAPTION_FONT_SIZE, Color::WHITE);
            }
        }

        self.draw_button(d, self.layout.previous_button, "<");
        self.draw_button(d, self.layout.next_button, ">");

        for (indicator, centre) in stage.indicators().iter().zip(&self.layout.indicators) {
            let color = if indicator.active { Color::WHITE } else { DOT_IDLE };
            d.draw_circle_v(*centre, INDICATOR_RADIUS, color);
        }

        if !self.controller.is_auto_running() {
            d.draw_text("paused", self.layout.hero.width as i32 - 90, 16, 20, CONTROL_TEXT);
        }
    }

    fn draw_background(&self, d: &mut RaylibDrawHandle, texture: &Texture2D) {
        let source = cover_source(
            texture.width() as f32,
            texture.height() as f32,
            self.layout.hero.width,
            self.layout.hero.height,
        );
        d.draw_texture_pro(
            texture,
            source,
            self.layout.hero,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    fn draw_button(&self, d: &mut RaylibDrawHandle, rect: Rectangle, label: &str) {
        d.draw_rectangle_rec(rect, CONTROL_FILL);
        let font_size = (NAV_BUTTON_SIZE * 0.6) as i32;
        d.draw_text(
            label,
            (rect.x + rect.width * 0.35) as i32,
            (rect.y + (rect.height - font_size as f32) * 0.5) as i32,
            font_size,
            CONTROL_TEXT,
        );
    }
}
