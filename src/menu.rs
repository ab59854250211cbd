//! The three difficulty buttons shown while no game is running.

use crate::entities::Rect;
use crate::settings::{Difficulty, Settings};

pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 60.0;
pub const BUTTON_GAP: f32 = 20.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub difficulty: Difficulty,
    pub rect: Rect,
}

impl Button {
    pub fn label(&self) -> &'static str {
        self.difficulty.label()
    }
}

/// Buttons stacked in the middle of the screen, easiest on top.
pub fn layout_buttons(settings: &Settings) -> Vec<Button> {
    let count = Difficulty::ALL.len() as f32;
    let stack_height = count * BUTTON_HEIGHT + (count - 1.0) * BUTTON_GAP;
    let x = (settings.screen_width - BUTTON_WIDTH) / 2.0;
    let top = (settings.screen_height - stack_height) / 2.0;

    Difficulty::ALL
        .iter()
        .enumerate()
        .map(|(i, &difficulty)| Button {
            difficulty,
            rect: Rect::new(
                x,
                top + i as f32 * (BUTTON_HEIGHT + BUTTON_GAP),
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
        })
        .collect()
}

/// Which button, if any, sits under a click.
pub fn button_at(buttons: &[Button], x: f32, y: f32) -> Option<Difficulty> {
    buttons
        .iter()
        .find(|b| b.rect.contains(x, y))
        .map(|b| b.difficulty)
}
