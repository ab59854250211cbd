//! HUD text and life icons derived from `GameStats`.
//!
//! Nothing is recomputed per frame; the game calls the matching `prep_*`
//! method when the underlying stat changes.

use crate::entities::{GameStats, Rect};
use crate::settings::Settings;

/// Gap between the screen corner and the first life icon.
const SHIP_ICON_MARGIN: f32 = 10.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scoreboard {
    pub score_text: String,
    pub high_score_text: String,
    pub level_text: String,
    /// One box per remaining life, laid out left to right.
    pub ship_icons: Vec<Rect>,
}

impl Scoreboard {
    pub fn new(stats: &GameStats, settings: &Settings) -> Self {
        let mut board = Scoreboard::default();
        board.prep_all(stats, settings);
        board
    }

    pub fn prep_all(&mut self, stats: &GameStats, settings: &Settings) {
        self.prep_score(stats);
        self.prep_high_score(stats);
        self.prep_level(stats);
        self.prep_ships(stats, settings);
    }

    pub fn prep_score(&mut self, stats: &GameStats) {
        self.score_text = format_score(stats.score);
    }

    pub fn prep_high_score(&mut self, stats: &GameStats) {
        self.high_score_text = format_score(stats.high_score);
    }

    pub fn prep_level(&mut self, stats: &GameStats) {
        self.level_text = stats.level.to_string();
    }

    pub fn prep_ships(&mut self, stats: &GameStats, settings: &Settings) {
        self.ship_icons = (0..stats.ships_left)
            .map(|i| {
                Rect::new(
                    SHIP_ICON_MARGIN + i as f32 * settings.ship_width,
                    SHIP_ICON_MARGIN,
                    settings.ship_width,
                    settings.ship_height,
                )
            })
            .collect();
    }

    /// Raise the high score if the current score beats it. Returns whether it
    /// changed.
    pub fn check_high_score(&mut self, stats: &mut GameStats) -> bool {
        if stats.score > stats.high_score {
            stats.high_score = stats.score;
            self.prep_high_score(stats);
            true
        } else {
            false
        }
    }
}

/// Round down to the nearest ten and group thousands with commas.
pub fn format_score(score: u32) -> String {
    let digits = (score / 10 * 10).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
