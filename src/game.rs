//! The game context and its state machine.
//!
//! `Game` owns every piece of mutable state. The binary feeds it commands
//! and movement intent, calls `tick` once per frame, and renders whatever it
//! exposes.

use crate::compute::{self, ShipHitCause};
use crate::entities::{Bullet, GameStats, Ship};
use crate::error::{GameError, Result};
use crate::fleet::Fleet;
use crate::menu::{self, Button};
use crate::scoreboard::Scoreboard;
use crate::settings::{Difficulty, Settings};

pub const TICKS_PER_SECOND: u32 = 60;

/// Freeze after losing a life: half a second of ticks.
pub const LIFE_LOST_PAUSE_TICKS: u32 = TICKS_PER_SECOND / 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Buttons shown, nothing moves.
    Menu,
    Playing,
    /// Fleet already rebuilt; play resumes when the countdown runs out.
    LifeLostPause { ticks_left: u32 },
    /// Out of ships. Buttons shown again.
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    SelectDifficulty(Difficulty),
    /// Pointer click in world coordinates.
    Click { x: f32, y: f32 },
    Fire,
    Pause,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Clone, Debug)]
pub struct Game {
    pub settings: Settings,
    pub stats: GameStats,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub fleet: Fleet,
    pub scoreboard: Scoreboard,
    pub buttons: Vec<Button>,
    status: GameStatus,
    pointer_visible: bool,
}

impl Game {
    /// Fails when the screen is too small for even one alien.
    pub fn new(settings: Settings, high_score: u32) -> Result<Self> {
        let fleet = Fleet::create(&settings);
        if fleet.is_empty() {
            return Err(GameError::ScreenTooSmall {
                width: settings.screen_width,
                height: settings.screen_height,
            });
        }

        let stats = GameStats::new(&settings, high_score);
        Ok(Game {
            ship: Ship::new(&settings),
            scoreboard: Scoreboard::new(&stats, &settings),
            buttons: menu::layout_buttons(&settings),
            bullets: Vec::new(),
            fleet,
            stats,
            settings,
            status: GameStatus::Menu,
            pointer_visible: true,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Playing or briefly paused after a lost life.
    pub fn is_active(&self) -> bool {
        matches!(
            self.status,
            GameStatus::Playing | GameStatus::LifeLostPause { .. }
        )
    }

    pub fn pointer_visible(&self) -> bool {
        self.pointer_visible
    }

    /// Buttons are drawn whenever no game is running.
    pub fn buttons_visible(&self) -> bool {
        !self.is_active()
    }

    pub fn set_movement(&mut self, left: bool, right: bool) {
        self.ship.moving_left = left;
        self.ship.moving_right = right;
    }

    // ── Input ────────────────────────────────────────────────────────────────

    pub fn handle(&mut self, command: Command) -> Flow {
        match (command, self.status) {
            (Command::Quit, _) => return Flow::Quit,

            (Command::SelectDifficulty(difficulty), GameStatus::Menu | GameStatus::GameOver) => {
                self.start_game(difficulty);
            }
            (Command::Click { x, y }, GameStatus::Menu | GameStatus::GameOver) => {
                if let Some(difficulty) = menu::button_at(&self.buttons, x, y) {
                    self.start_game(difficulty);
                }
            }

            (Command::Fire, GameStatus::Playing) => {
                compute::fire_bullet(&mut self.bullets, &self.ship, &self.settings);
            }
            (Command::Pause, GameStatus::Playing) => {
                tracing::info!(score = self.stats.score, "game paused");
                self.status = GameStatus::Menu;
                self.pointer_visible = true;
            }

            _ => {}
        }
        Flow::Continue
    }

    /// Fresh game at the given difficulty. The high score is kept.
    pub fn start_game(&mut self, difficulty: Difficulty) {
        self.settings.initialize_dynamic();
        self.settings.apply_difficulty(difficulty);

        self.stats.reset(&self.settings);
        self.scoreboard.prep_all(&self.stats, &self.settings);

        self.bullets.clear();
        self.fleet.rebuild(&self.settings);
        self.ship.center(&self.settings);

        self.status = GameStatus::Playing;
        self.pointer_visible = false;
        tracing::info!(
            ?difficulty,
            speedup_scale = self.settings.speedup_scale,
            "game started"
        );
    }

    // ── Frame update ─────────────────────────────────────────────────────────

    pub fn tick(&mut self) {
        match self.status {
            GameStatus::Menu | GameStatus::GameOver => {}
            GameStatus::LifeLostPause { ticks_left } => {
                self.status = if ticks_left <= 1 {
                    GameStatus::Playing
                } else {
                    GameStatus::LifeLostPause {
                        ticks_left: ticks_left - 1,
                    }
                };
            }
            GameStatus::Playing => {
                self.ship.update(&self.settings);
                if self.update_aliens() {
                    return;
                }
                self.update_bullets();
            }
        }
    }

    /// Move the fleet and look for a ship-hit. Returns true when one was
    /// handled, which ends the tick.
    fn update_aliens(&mut self) -> bool {
        self.fleet.check_edges(&mut self.settings);
        self.fleet.update(&self.settings);

        match compute::detect_ship_hit(&self.ship, &self.fleet, &self.settings) {
            Some(cause) => {
                self.ship_hit(cause);
                true
            }
            None => false,
        }
    }

    fn update_bullets(&mut self) {
        compute::update_bullets(&mut self.bullets, &self.settings);
        let report = compute::check_bullet_alien_collisions(
            &mut self.bullets,
            &mut self.fleet,
            &mut self.settings,
            &mut self.stats,
        );

        if report.aliens_destroyed > 0 {
            self.scoreboard.prep_score(&self.stats);
            self.scoreboard.check_high_score(&mut self.stats);
        }
        if report.level_up {
            self.scoreboard.prep_level(&self.stats);
        }
    }

    fn ship_hit(&mut self, cause: ShipHitCause) {
        if self.stats.ships_left > 0 {
            self.stats.ships_left -= 1;
            self.scoreboard.prep_ships(&self.stats, &self.settings);

            self.bullets.clear();
            self.fleet.rebuild(&self.settings);
            self.ship.center(&self.settings);

            self.status = GameStatus::LifeLostPause {
                ticks_left: LIFE_LOST_PAUSE_TICKS,
            };
            tracing::debug!(?cause, ships_left = self.stats.ships_left, "ship hit");
        } else {
            self.status = GameStatus::GameOver;
            self.pointer_visible = true;
            tracing::info!(
                ?cause,
                score = self.stats.score,
                level = self.stats.level,
                "game over"
            );
        }
    }
}
