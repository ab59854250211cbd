//! Game entity types and their per-frame movement rules.
//!
//! Positions are in world units with the origin at the top-left corner and
//! `y` growing downward.

use crate::settings::Settings;

// ── Bounding boxes ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Overlap test. Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Point test, inclusive of the top-left edges and exclusive of the
    /// bottom-right ones.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }
}

/// Anything that occupies a box on screen and can take part in collisions.
pub trait Bounded {
    fn rect(&self) -> Rect;
}

// ── Ship ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Ship {
    /// Left edge; the ship only ever moves horizontally.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    /// A new ship sitting at the bottom-centre of the screen.
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Ship {
            x: 0.0,
            y: 0.0,
            width: settings.ship_width,
            height: settings.ship_height,
            moving_left: false,
            moving_right: false,
        };
        ship.center(settings);
        ship
    }

    /// Move according to the intent flags. A flag pointing into a screen edge
    /// is ignored, not cleared.
    pub fn update(&mut self, settings: &Settings) {
        if self.moving_right && self.rect().right() < settings.screen_width {
            self.x += settings.ship_speed;
        }
        if self.moving_left && self.rect().left() > 0.0 {
            self.x -= settings.ship_speed;
        }
    }

    pub fn center(&mut self, settings: &Settings) {
        self.x = (settings.screen_width - self.width) / 2.0;
        self.y = settings.screen_height - self.height;
    }
}

impl Bounded for Ship {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    /// Top edge.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bullet {
    /// A bullet leaving the nose (mid-top) of the ship.
    pub fn from_ship(ship: &Ship, settings: &Settings) -> Self {
        Bullet {
            x: ship.rect().center_x() - settings.bullet_width / 2.0,
            y: ship.y,
            width: settings.bullet_width,
            height: settings.bullet_height,
        }
    }

    pub fn update(&mut self, settings: &Settings) {
        self.y -= settings.bullet_speed;
    }

    pub fn is_off_screen(&self) -> bool {
        self.rect().bottom() <= 0.0
    }
}

impl Bounded for Bullet {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Alien ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Alien {
    pub fn new(x: f32, y: f32, settings: &Settings) -> Self {
        Alien {
            x,
            y,
            width: settings.alien_width,
            height: settings.alien_height,
        }
    }

    /// True when touching or past the left or right screen edge.
    pub fn check_edges(&self, settings: &Settings) -> bool {
        let rect = self.rect();
        rect.right() >= settings.screen_width || rect.left() <= 0.0
    }

    pub fn update(&mut self, settings: &Settings) {
        self.x += settings.alien_speed * settings.fleet_direction;
    }
}

impl Bounded for Alien {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Stats ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct GameStats {
    pub score: u32,
    /// Survives `reset`; loaded from and saved to the record file.
    pub high_score: u32,
    pub level: u32,
    pub ships_left: u32,
}

impl GameStats {
    pub fn new(settings: &Settings, high_score: u32) -> Self {
        let mut stats = GameStats {
            score: 0,
            high_score,
            level: 1,
            ships_left: 0,
        };
        stats.reset(settings);
        stats
    }

    pub fn reset(&mut self, settings: &Settings) {
        self.score = 0;
        self.level = 1;
        self.ships_left = settings.ship_limit;
    }
}
