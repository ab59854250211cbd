//! Rendering layer: all terminal output lives here.
//!
//! The game simulates in world units; one terminal cell covers
//! `CELL_WIDTH × CELL_HEIGHT` of them. Nothing in here changes game state.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use alien_invasion::entities::{Alien, Bounded, Bullet, Rect};
use alien_invasion::game::{Game, GameStatus};
use alien_invasion::menu::Button;
use alien_invasion::settings::{Difficulty, Rgb};

pub const CELL_WIDTH: f32 = 10.0;
pub const CELL_HEIGHT: f32 = 20.0;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_TEXT: Color = Color::Rgb { r: 30, g: 30, b: 30 };
const C_SHIP: Color = Color::DarkBlue;
const C_ALIEN: Color = Color::DarkGreen;
const C_HINT: Color = Color::DarkGrey;
const C_GAME_OVER: Color = Color::DarkRed;

fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

/// Top-left cell of a world-space point.
pub fn to_cell(x: f32, y: f32) -> (u16, u16) {
    (
        (x / CELL_WIDTH).floor().max(0.0) as u16,
        (y / CELL_HEIGHT).floor().max(0.0) as u16,
    )
}

/// Centre of a cell in world space, used for mouse clicks.
pub fn from_cell(col: u16, row: u16) -> (f32, f32) {
    (
        col as f32 * CELL_WIDTH + CELL_WIDTH / 2.0,
        row as f32 * CELL_HEIGHT + CELL_HEIGHT / 2.0,
    )
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, game: &Game) -> std::io::Result<()> {
    let (cols, rows) = to_cell(game.settings.screen_width, game.settings.screen_height);
    let mut screen = Screen { out, cols, rows };

    screen.out.queue(style::SetBackgroundColor(rgb(game.settings.bg_color)))?;
    screen.out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_ship(&mut screen, game.ship.rect())?;
    for bullet in &game.bullets {
        draw_bullet(&mut screen, bullet, game.settings.bullet_color)?;
    }
    for alien in &game.fleet.aliens {
        draw_alien(&mut screen, alien)?;
    }
    draw_hud(&mut screen, game)?;

    if game.buttons_visible() {
        if game.status() == GameStatus::GameOver {
            draw_game_over(&mut screen, game)?;
        }
        for button in &game.buttons {
            draw_button(&mut screen, button)?;
        }
        draw_controls_hint(&mut screen, game)?;
    }

    // Park cursor in a harmless spot and flush
    screen.out.queue(style::ResetColor)?;
    screen.out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    screen.out.flush()?;
    Ok(())
}

/// Writer plus the visible cell grid, so nothing is printed off-screen.
struct Screen<'a, W: Write> {
    out: &'a mut W,
    cols: u16,
    rows: u16,
}

impl<W: Write> Screen<'_, W> {
    fn put(&mut self, col: u16, row: u16, color: Color, text: &str) -> std::io::Result<()> {
        if col >= self.cols || row >= self.rows {
            return Ok(());
        }
        let room = (self.cols - col) as usize;
        let clipped: String = text.chars().take(room).collect();
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetForegroundColor(color))?;
        self.out.queue(Print(clipped))?;
        Ok(())
    }

    fn put_world(&mut self, x: f32, y: f32, color: Color, text: &str) -> std::io::Result<()> {
        let (col, row) = to_cell(x, y);
        self.put(col, row, color, text)
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_ship<W: Write>(screen: &mut Screen<'_, W>, rect: Rect) -> std::io::Result<()> {
    //   ▲
    //  /█\
    screen.put_world(rect.x, rect.y, C_SHIP, " ▲ ")?;
    screen.put_world(rect.x, rect.y + CELL_HEIGHT, C_SHIP, "/█\\")
}

fn draw_alien<W: Write>(screen: &mut Screen<'_, W>, alien: &Alien) -> std::io::Result<()> {
    //  «▼»
    //  ╚═╝
    screen.put_world(alien.x, alien.y, C_ALIEN, "«▼»")?;
    screen.put_world(alien.x, alien.y + CELL_HEIGHT, C_ALIEN, "╚═╝")
}

fn draw_bullet<W: Write>(
    screen: &mut Screen<'_, W>,
    bullet: &Bullet,
    color: Rgb,
) -> std::io::Result<()> {
    let rect = bullet.rect();
    screen.put_world(rect.center_x(), rect.y, rgb(color), "║")
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(screen: &mut Screen<'_, W>, game: &Game) -> std::io::Result<()> {
    let board = &game.scoreboard;
    let cols = screen.cols;

    // Lives, top left
    for icon in &board.ship_icons {
        screen.put_world(icon.x, icon.y, C_SHIP, " ▲ ")?;
    }

    // High score, centre
    let hi = format!("Hi {}", board.high_score_text);
    let hx = (cols / 2).saturating_sub(hi.chars().count() as u16 / 2);
    screen.put(hx, 1, C_TEXT, &hi)?;

    // Score on the right, level under it
    let sx = cols.saturating_sub(board.score_text.chars().count() as u16 + 2);
    screen.put(sx, 1, C_TEXT, &board.score_text)?;
    let level = format!("L{}", board.level_text);
    let lx = cols.saturating_sub(level.chars().count() as u16 + 2);
    screen.put(lx, 2, C_TEXT, &level)?;

    Ok(())
}

// ── Menu ──────────────────────────────────────────────────────────────────────

fn button_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::DarkGreen,
        Difficulty::Medium => Color::DarkYellow,
        Difficulty::Hard => Color::DarkRed,
    }
}

fn draw_button<W: Write>(screen: &mut Screen<'_, W>, button: &Button) -> std::io::Result<()> {
    let (col, row) = to_cell(button.rect.x, button.rect.y);
    let inner = (button.rect.width / CELL_WIDTH) as usize;
    let inner = inner.saturating_sub(2);
    let color = button_color(button.difficulty);

    screen.put(col, row, color, &format!("┌{}┐", "─".repeat(inner)))?;
    screen.put(col, row + 1, color, &format!("│{:^inner$}│", button.label()))?;
    screen.put(col, row + 2, color, &format!("└{}┘", "─".repeat(inner)))
}

fn draw_game_over<W: Write>(screen: &mut Screen<'_, W>, game: &Game) -> std::io::Result<()> {
    let Some(first) = game.buttons.first() else {
        return Ok(());
    };
    let (_, top) = to_cell(first.rect.x, first.rect.y);
    let line = format!("GAME OVER  {}", game.scoreboard.score_text);
    let col = (screen.cols / 2).saturating_sub(line.chars().count() as u16 / 2);
    screen.put(col, top.saturating_sub(2), C_GAME_OVER, &line)
}

fn draw_controls_hint<W: Write>(screen: &mut Screen<'_, W>, game: &Game) -> std::io::Result<()> {
    let Some(last) = game.buttons.last() else {
        return Ok(());
    };
    let (_, row) = to_cell(last.rect.x, last.rect.bottom());
    let hint = "1/2/3 or click : Start   A D / ← → : Move   SPACE : Shoot   P : Pause   Q : Quit";
    let col = (screen.cols / 2).saturating_sub(hint.chars().count() as u16 / 2);
    screen.put(col, row + 1, C_HINT, hint)
}
