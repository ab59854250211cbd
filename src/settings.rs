//! Tunable game parameters.
//!
//! Static values (screen, sprite sizes, bullet shape) are fixed once at
//! construction. Dynamic values (speeds, points, scaling) are reset at every
//! new game and scaled up on each level.

// ── Difficulty ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Added to `speedup_scale` when a game starts at this difficulty.
    pub fn speed_bonus(self) -> f32 {
        match self {
            Difficulty::Easy => 0.1,
            Difficulty::Medium => 0.2,
            Difficulty::Hard => 0.3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

// ── Base values ──────────────────────────────────────────────────────────────

pub const BASE_SHIP_SPEED: f32 = 1.5;
pub const BASE_BULLET_SPEED: f32 = 3.0;
pub const BASE_ALIEN_SPEED: f32 = 1.0;
pub const BASE_ALIEN_POINTS: u32 = 50;
pub const BASE_SPEEDUP_SCALE: f32 = 1.1;
pub const DEFAULT_SHIP_LIMIT: u32 = 3;

pub type Rgb = (u8, u8, u8);

#[derive(Clone, Debug)]
pub struct Settings {
    // Screen
    pub screen_width: f32,
    pub screen_height: f32,
    pub bg_color: Rgb,

    // Ship
    pub ship_width: f32,
    pub ship_height: f32,
    pub ship_limit: u32,

    // Bullets
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_color: Rgb,
    pub bullets_allowed: usize,

    // Aliens
    pub alien_width: f32,
    pub alien_height: f32,
    pub fleet_drop_speed: f32,

    // Level scaling
    pub score_scale: f32,

    // Dynamic
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    /// 1 moves the fleet right, -1 left.
    pub fleet_direction: f32,
    pub alien_points: u32,
    pub speedup_scale: f32,
}

impl Settings {
    /// Static initialisation for a screen of the given world size.
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        let mut settings = Settings {
            screen_width,
            screen_height,
            bg_color: (230, 230, 230),

            ship_width: 30.0,
            ship_height: 40.0,
            ship_limit: DEFAULT_SHIP_LIMIT,

            bullet_width: 3.0,
            bullet_height: 15.0,
            bullet_color: (60, 60, 60),
            bullets_allowed: 3,

            alien_width: 30.0,
            alien_height: 40.0,
            fleet_drop_speed: 10.0,

            score_scale: 1.5,

            ship_speed: 0.0,
            bullet_speed: 0.0,
            alien_speed: 0.0,
            fleet_direction: 1.0,
            alien_points: 0,
            speedup_scale: 0.0,
        };
        settings.initialize_dynamic();
        settings
    }

    pub fn with_ship_limit(mut self, ship_limit: u32) -> Self {
        self.ship_limit = ship_limit;
        self
    }

    /// Reset everything that changes during a game back to base values.
    pub fn initialize_dynamic(&mut self) {
        self.ship_speed = BASE_SHIP_SPEED;
        self.bullet_speed = BASE_BULLET_SPEED;
        self.alien_speed = BASE_ALIEN_SPEED;
        self.fleet_direction = 1.0;
        self.alien_points = BASE_ALIEN_POINTS;
        self.speedup_scale = BASE_SPEEDUP_SCALE;
    }

    pub fn apply_difficulty(&mut self, difficulty: Difficulty) {
        self.speedup_scale += difficulty.speed_bonus();
    }

    /// Level-up scaling: speeds by `speedup_scale`, points by `score_scale`.
    pub fn increase_speed(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.bullet_speed *= self.speedup_scale;
        self.alien_speed *= self.speedup_scale;
        self.alien_points = (self.alien_points as f32 * self.score_scale) as u32;
    }
}
