//! Collision and scoring.
//!
//! Every function takes the pieces of game state it touches by reference.
//! Nothing here renders or reads input; the `game` module decides when each
//! step runs.

use crate::entities::{Bounded, Bullet, GameStats, Ship};
use crate::fleet::Fleet;
use crate::settings::Settings;

// ── Generic pairwise collision ───────────────────────────────────────────────

/// Pairwise collision with removal from both sides.
///
/// Walks `a` in order; each item is tested against what is still left in `b`.
/// Every `b` item it overlaps is removed from `b`, and the `a` item itself is
/// removed when it hit anything. A `b` item is therefore matched at most once.
pub fn group_collide<A, B>(a: &mut Vec<A>, b: &mut Vec<B>) -> Vec<(A, Vec<B>)>
where
    A: Bounded,
    B: Bounded,
{
    let mut matches = Vec::new();
    let mut survivors = Vec::with_capacity(a.len());

    for item in a.drain(..) {
        let rect = item.rect();
        let (hit, missed): (Vec<B>, Vec<B>) =
            b.drain(..).partition(|other| rect.intersects(&other.rect()));
        *b = missed;

        if hit.is_empty() {
            survivors.push(item);
        } else {
            matches.push((item, hit));
        }
    }

    *a = survivors;
    matches
}

// ── Bullets ──────────────────────────────────────────────────────────────────

/// Fire from the ship's nose. Returns `false` (and does nothing) at the cap.
pub fn fire_bullet(bullets: &mut Vec<Bullet>, ship: &Ship, settings: &Settings) -> bool {
    if bullets.len() >= settings.bullets_allowed {
        return false;
    }
    bullets.push(Bullet::from_ship(ship, settings));
    true
}

/// Move every bullet up and drop the ones that have left the top.
pub fn update_bullets(bullets: &mut Vec<Bullet>, settings: &Settings) {
    for bullet in bullets.iter_mut() {
        bullet.update(settings);
    }
    bullets.retain(|b| !b.is_off_screen());
}

// ── Bullet ↔ alien ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollisionReport {
    pub aliens_destroyed: usize,
    pub points: u32,
    /// The wave was wiped out and a new level started.
    pub level_up: bool,
}

/// Resolve bullet hits, score them, and start a new level when the fleet is
/// gone. Points use the alien value in effect before any level-up.
pub fn check_bullet_alien_collisions(
    bullets: &mut Vec<Bullet>,
    fleet: &mut Fleet,
    settings: &mut Settings,
    stats: &mut GameStats,
) -> CollisionReport {
    let mut report = CollisionReport::default();

    for (_, aliens) in group_collide(bullets, &mut fleet.aliens) {
        let points = settings.alien_points.saturating_mul(aliens.len() as u32);
        report.aliens_destroyed += aliens.len();
        report.points = report.points.saturating_add(points);
    }
    stats.score = stats.score.saturating_add(report.points);

    if fleet.is_empty() {
        start_new_level(bullets, fleet, settings, stats);
        report.level_up = true;
    }

    report
}

fn start_new_level(
    bullets: &mut Vec<Bullet>,
    fleet: &mut Fleet,
    settings: &mut Settings,
    stats: &mut GameStats,
) {
    bullets.clear();
    fleet.rebuild(settings);
    settings.increase_speed();
    stats.level += 1;
    tracing::debug!(
        level = stats.level,
        alien_speed = settings.alien_speed,
        alien_points = settings.alien_points,
        "level up"
    );
}

// ── Ship impact ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShipHitCause {
    /// An alien overlaps the ship.
    Collision,
    /// An alien got to the bottom of the screen.
    ReachedBottom,
}

/// Detect a ship-hit event. Direct contact wins over the bottom check when
/// both hold in the same tick.
pub fn detect_ship_hit(ship: &Ship, fleet: &Fleet, settings: &Settings) -> Option<ShipHitCause> {
    let ship_rect = ship.rect();
    if fleet.aliens.iter().any(|a| a.rect().intersects(&ship_rect)) {
        Some(ShipHitCause::Collision)
    } else if fleet.reached_bottom(settings) {
        Some(ShipHitCause::ReachedBottom)
    } else {
        None
    }
}
