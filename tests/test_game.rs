use alien_invasion::entities::*;
use alien_invasion::error::GameError;
use alien_invasion::fleet::Fleet;
use alien_invasion::game::*;
use alien_invasion::settings::{Difficulty, Settings, BASE_SPEEDUP_SCALE};

use approx::assert_relative_eq;

fn make_game() -> Game {
    Game::new(Settings::new(800.0, 480.0), 0).expect("80x24 terminal fits a fleet")
}

fn playing_game() -> Game {
    let mut game = make_game();
    game.start_game(Difficulty::Easy);
    game
}

/// Replace the fleet with a single alien sitting on the ship.
fn put_alien_on_ship(game: &mut Game) {
    let alien = Alien::new(game.ship.x, game.ship.y, &game.settings);
    game.fleet = Fleet { aliens: vec![alien] };
}

// ── construction ──────────────────────────────────────────────────────────────

#[test]
fn new_game_waits_in_menu() {
    let game = make_game();
    assert_eq!(game.status(), GameStatus::Menu);
    assert!(!game.is_active());
    assert!(game.buttons_visible());
    assert!(game.pointer_visible());
    assert_eq!(game.buttons.len(), 3);
    assert!(!game.fleet.is_empty());
}

#[test]
fn new_game_rejects_tiny_screen() {
    let err = Game::new(Settings::new(80.0, 160.0), 0).unwrap_err();
    assert!(matches!(err, GameError::ScreenTooSmall { .. }));
}

#[test]
fn new_game_shows_loaded_high_score() {
    let game = Game::new(Settings::new(800.0, 480.0), 12345).unwrap();
    assert_eq!(game.stats.high_score, 12345);
    assert_eq!(game.scoreboard.high_score_text, "12,340");
}

#[test]
fn menu_tick_moves_nothing() {
    let mut game = make_game();
    let before = game.fleet.aliens.clone();
    game.tick();
    assert_eq!(game.fleet.aliens, before);
}

// ── starting a game ───────────────────────────────────────────────────────────

#[test]
fn easy_start_resets_everything() {
    let mut game = make_game();
    game.stats.score = 700;
    game.stats.level = 3;
    game.bullets.push(Bullet::from_ship(&game.ship, &game.settings));
    game.ship.x = 10.0;

    assert_eq!(
        game.handle(Command::SelectDifficulty(Difficulty::Easy)),
        Flow::Continue
    );

    assert_eq!(game.status(), GameStatus::Playing);
    assert!(!game.pointer_visible());
    assert!(!game.buttons_visible());
    assert_relative_eq!(game.settings.speedup_scale, BASE_SPEEDUP_SCALE + 0.1);
    assert_eq!(game.stats.score, 0);
    assert_eq!(game.stats.level, 1);
    assert_eq!(game.stats.ships_left, 3);
    assert!(game.bullets.is_empty());
    assert_eq!(game.fleet.len(), 48);
    assert_relative_eq!(game.ship.x, 385.0);
    assert_relative_eq!(game.ship.rect().bottom(), 480.0);
    assert_eq!(game.scoreboard.ship_icons.len(), 3);
}

#[test]
fn restart_does_not_stack_difficulty_bonus() {
    let mut game = make_game();
    game.start_game(Difficulty::Hard);
    game.start_game(Difficulty::Hard);
    assert_relative_eq!(game.settings.speedup_scale, BASE_SPEEDUP_SCALE + 0.3);
}

#[test]
fn click_on_button_starts_game() {
    let mut game = make_game();
    let medium = game.buttons[1].rect;
    game.handle(Command::Click {
        x: medium.center_x(),
        y: medium.y + 1.0,
    });
    assert_eq!(game.status(), GameStatus::Playing);
    assert_relative_eq!(game.settings.speedup_scale, BASE_SPEEDUP_SCALE + 0.2);
}

#[test]
fn click_outside_buttons_is_ignored() {
    let mut game = make_game();
    game.handle(Command::Click { x: 5.0, y: 5.0 });
    assert_eq!(game.status(), GameStatus::Menu);
}

#[test]
fn difficulty_ignored_while_playing() {
    let mut game = playing_game();
    game.stats.score = 120;
    game.handle(Command::SelectDifficulty(Difficulty::Hard));
    assert_eq!(game.stats.score, 120);
    assert_relative_eq!(game.settings.speedup_scale, BASE_SPEEDUP_SCALE + 0.1);
}

// ── firing and scoring ────────────────────────────────────────────────────────

#[test]
fn fire_only_while_playing() {
    let mut game = make_game();
    game.handle(Command::Fire);
    assert!(game.bullets.is_empty());

    game.start_game(Difficulty::Easy);
    for _ in 0..5 {
        game.handle(Command::Fire);
    }
    assert_eq!(game.bullets.len(), game.settings.bullets_allowed);
}

#[test]
fn hit_updates_score_and_high_score_text() {
    let mut game = playing_game();
    let s = game.settings.clone();
    game.fleet = Fleet {
        aliens: vec![Alien::new(100.0, 100.0, &s), Alien::new(300.0, 100.0, &s)],
    };
    game.bullets = vec![Bullet {
        x: 110.0,
        y: 130.0,
        width: s.bullet_width,
        height: s.bullet_height,
    }];

    game.tick();

    assert_eq!(game.stats.score, 50);
    assert_eq!(game.stats.high_score, 50);
    assert_eq!(game.scoreboard.score_text, "50");
    assert_eq!(game.scoreboard.high_score_text, "50");
    assert_eq!(game.fleet.len(), 1);
}

#[test]
fn high_score_not_lowered_by_smaller_score() {
    let mut game = Game::new(Settings::new(800.0, 480.0), 1000).unwrap();
    game.start_game(Difficulty::Easy);
    let s = game.settings.clone();
    game.fleet = Fleet {
        aliens: vec![Alien::new(100.0, 100.0, &s), Alien::new(300.0, 100.0, &s)],
    };
    game.bullets = vec![Bullet {
        x: 110.0,
        y: 130.0,
        width: s.bullet_width,
        height: s.bullet_height,
    }];
    game.tick();
    assert_eq!(game.stats.score, 50);
    assert_eq!(game.stats.high_score, 1000);
}

#[test]
fn wiping_the_fleet_levels_up() {
    let mut game = playing_game();
    let s = game.settings.clone();
    game.fleet = Fleet {
        aliens: vec![Alien::new(100.0, 100.0, &s)],
    };
    game.bullets = vec![Bullet {
        x: 110.0,
        y: 130.0,
        width: s.bullet_width,
        height: s.bullet_height,
    }];

    game.tick();

    assert_eq!(game.stats.level, 2);
    assert_eq!(game.scoreboard.level_text, "2");
    assert_eq!(game.fleet.len(), 48);
    assert!(game.bullets.is_empty());
    assert_relative_eq!(game.settings.alien_speed, 1.0 * (BASE_SPEEDUP_SCALE + 0.1));
}

// ── ship hits ─────────────────────────────────────────────────────────────────

#[test]
fn ship_hit_with_spare_ships_pauses_and_resets_wave() {
    let mut game = playing_game();
    game.handle(Command::Fire);
    game.ship.x = 10.0;
    put_alien_on_ship(&mut game);

    game.tick();

    assert_eq!(
        game.status(),
        GameStatus::LifeLostPause {
            ticks_left: LIFE_LOST_PAUSE_TICKS
        }
    );
    assert!(game.is_active());
    assert_eq!(game.stats.ships_left, 2);
    assert_eq!(game.scoreboard.ship_icons.len(), 2);
    assert!(game.bullets.is_empty());
    assert_eq!(game.fleet.len(), 48);
    assert_relative_eq!(game.ship.x, 385.0);
}

#[test]
fn life_lost_pause_lasts_half_a_second() {
    let mut game = playing_game();
    put_alien_on_ship(&mut game);
    game.tick();

    let before = game.fleet.aliens.clone();
    for _ in 0..LIFE_LOST_PAUSE_TICKS - 1 {
        game.tick();
        assert!(matches!(game.status(), GameStatus::LifeLostPause { .. }));
    }
    // Nothing moved while frozen
    assert_eq!(game.fleet.aliens, before);

    game.tick();
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(LIFE_LOST_PAUSE_TICKS, 30);
}

#[test]
fn input_ignored_during_pause_except_quit() {
    let mut game = playing_game();
    put_alien_on_ship(&mut game);
    game.tick();

    game.handle(Command::Fire);
    game.handle(Command::Pause);
    assert!(game.bullets.is_empty());
    assert!(matches!(game.status(), GameStatus::LifeLostPause { .. }));
    assert_eq!(game.handle(Command::Quit), Flow::Quit);
}

#[test]
fn ship_hit_on_last_ship_ends_game() {
    let mut game = playing_game();
    game.stats.ships_left = 0;
    put_alien_on_ship(&mut game);

    game.tick();

    assert_eq!(game.status(), GameStatus::GameOver);
    assert!(!game.is_active());
    assert!(game.pointer_visible());
    assert!(game.buttons_visible());
    assert_eq!(game.stats.ships_left, 0);

    // Stays over; a second tick does not touch ships_left
    game.tick();
    assert_eq!(game.stats.ships_left, 0);
}

#[test]
fn alien_reaching_bottom_costs_a_life() {
    let mut game = playing_game();
    let s = game.settings.clone();
    game.fleet = Fleet {
        aliens: vec![Alien::new(100.0, 440.0, &s)],
    };
    game.tick();
    assert_eq!(game.stats.ships_left, 2);
}

#[test]
fn one_ship_hit_per_tick() {
    // Overlapping the ship and at the bottom at once
    let mut game = playing_game();
    let s = game.settings.clone();
    game.fleet = Fleet {
        aliens: vec![
            Alien::new(game.ship.x, game.ship.y, &s),
            Alien::new(100.0, 440.0, &s),
        ],
    };
    game.tick();
    assert_eq!(game.stats.ships_left, 2);
}

#[test]
fn game_over_then_new_game() {
    let mut game = playing_game();
    game.stats.ships_left = 0;
    game.stats.score = 300;
    put_alien_on_ship(&mut game);
    game.tick();
    assert_eq!(game.status(), GameStatus::GameOver);

    game.handle(Command::SelectDifficulty(Difficulty::Medium));
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.stats.score, 0);
    assert_eq!(game.stats.ships_left, 3);
}

// ── pause and quit ────────────────────────────────────────────────────────────

#[test]
fn pause_returns_to_menu_without_reset() {
    let mut game = playing_game();
    game.stats.score = 250;
    game.stats.ships_left = 1;

    game.handle(Command::Pause);

    assert_eq!(game.status(), GameStatus::Menu);
    assert!(game.pointer_visible());
    assert_eq!(game.stats.score, 250);
    assert_eq!(game.stats.ships_left, 1);
}

#[test]
fn quit_from_any_state() {
    let mut game = make_game();
    assert_eq!(game.handle(Command::Quit), Flow::Quit);
    game.start_game(Difficulty::Easy);
    assert_eq!(game.handle(Command::Quit), Flow::Quit);
}

// ── movement ──────────────────────────────────────────────────────────────────

#[test]
fn movement_applies_only_while_playing() {
    let mut game = make_game();
    game.set_movement(false, true);
    game.tick();
    assert_relative_eq!(game.ship.x, 385.0);

    game.start_game(Difficulty::Easy);
    game.set_movement(false, true);
    game.tick();
    assert_relative_eq!(game.ship.x, 386.5);
}
