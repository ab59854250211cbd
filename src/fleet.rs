//! The alien fleet: grid layout, lock-step movement and edge bounce.

use crate::entities::{Alien, Bounded};
use crate::settings::Settings;

#[derive(Clone, Debug, Default)]
pub struct Fleet {
    pub aliens: Vec<Alien>,
}

impl Fleet {
    /// Lay out a full grid. Each alien is followed by one alien-width of
    /// spacing and each row by one alien-height; the bottom four rows' worth
    /// of height stay clear for the ship.
    pub fn create(settings: &Settings) -> Self {
        let (alien_width, alien_height) = (settings.alien_width, settings.alien_height);
        let mut aliens = Vec::new();

        let mut y = alien_height;
        while y < settings.screen_height - 4.0 * alien_height {
            let mut x = alien_width;
            while x < settings.screen_width - 2.0 * alien_width {
                aliens.push(Alien::new(x, y, settings));
                x += 2.0 * alien_width;
            }
            y += 2.0 * alien_height;
        }

        tracing::debug!(aliens = aliens.len(), "fleet created");
        Fleet { aliens }
    }

    pub fn rebuild(&mut self, settings: &Settings) {
        *self = Fleet::create(settings);
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.aliens.len()
    }

    /// Bounce the whole fleet if any alien has reached a side edge.
    pub fn check_edges(&mut self, settings: &mut Settings) {
        if self.aliens.iter().any(|a| a.check_edges(settings)) {
            self.change_direction(settings);
        }
    }

    /// Drop every alien one step and reverse the shared direction.
    pub fn change_direction(&mut self, settings: &mut Settings) {
        for alien in &mut self.aliens {
            alien.y += settings.fleet_drop_speed;
        }
        settings.fleet_direction *= -1.0;
    }

    pub fn update(&mut self, settings: &Settings) {
        for alien in &mut self.aliens {
            alien.update(settings);
        }
    }

    /// True when any alien's bottom edge has reached the bottom of the screen.
    pub fn reached_bottom(&self, settings: &Settings) -> bool {
        self.aliens
            .iter()
            .any(|a| a.rect().bottom() >= settings.screen_height)
    }
}
