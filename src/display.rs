/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// frame state.  No game logic is performed; this module only translates
/// state into terminal commands.  Field coordinates (800×600) are scaled onto
/// whatever terminal size the caller reports.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use yars_revenge::barrier::BarrierGrid;
use yars_revenge::collision::Rect;
use yars_revenge::consts::{FIELD_HEIGHT, FIELD_WIDTH, NEUTRAL_ZONE_X};
use yars_revenge::entities::{FrameState, GamePhase};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkGreen;
const C_HUD: Color = Color::Green;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::Green;
const C_TARGET: Color = Color::DarkYellow;
const C_BARRIER: Color = Color::DarkYellow;
const C_NEUTRAL: Color = Color::DarkGrey;
const C_PROJECTILE: Color = Color::Yellow;
const C_HAZARD: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;
const C_TITLE: Color = Color::Green;
const C_GAME_OVER: Color = Color::DarkYellow;

// ── Screen geometry ───────────────────────────────────────────────────────────

/// Terminal size in cells.  Row 0 is the HUD, rows 1 and `height-2` are the
/// border, the last row is the controls hint.
#[derive(Clone, Copy, Debug)]
pub struct Screen {
    pub width: u16,
    pub height: u16,
}

impl Screen {
    fn inner_width(&self) -> u16 {
        self.width.saturating_sub(2).max(1)
    }

    fn inner_height(&self) -> u16 {
        self.height.saturating_sub(4).max(1)
    }

    fn col(&self, x: f32) -> u16 {
        let c = (x / FIELD_WIDTH * self.inner_width() as f32).floor();
        1 + (c.max(0.0) as u16).min(self.inner_width() - 1)
    }

    fn row(&self, y: f32) -> u16 {
        let r = (y / FIELD_HEIGHT * self.inner_height() as f32).floor();
        2 + (r.max(0.0) as u16).min(self.inner_height() - 1)
    }

    /// Field coordinates at the centre of a play-area cell.
    fn field_at(&self, col: u16, row: u16) -> (f32, f32) {
        let x = (col - 1) as f32 + 0.5;
        let y = (row - 2) as f32 + 0.5;
        (
            x * FIELD_WIDTH / self.inner_width() as f32,
            y * FIELD_HEIGHT / self.inner_height() as f32,
        )
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.  `best_score` is the best earlier run this
/// session and only shows on the game-over screen.
pub fn render<W: Write>(
    out: &mut W,
    state: &FrameState,
    screen: Screen,
    best_score: u32,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, screen)?;
    draw_hud(out, state, screen)?;

    match state.phase {
        GamePhase::Start => draw_title(out, screen)?,
        GamePhase::Playing => {
            draw_field(out, state, screen)?;
            draw_box(out, state.player.rect(), "█", C_PLAYER, screen)?;
            if !state.target.destroyed {
                draw_box(out, state.target.rect(), "▒", C_TARGET, screen)?;
            }
            for p in &state.projectiles {
                draw_box(out, p.rect(), "-", C_PROJECTILE, screen)?;
            }
            if state.hazard.active {
                draw_box(out, state.hazard.rect(), "◆", C_HAZARD, screen)?;
            }
        }
        GamePhase::GameOver => draw_game_over(out, state, screen, best_score)?,
    }

    draw_controls_hint(out, state, screen)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, screen.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, screen: Screen) -> std::io::Result<()> {
    let w = screen.width as usize;
    let h = screen.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(screen.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &FrameState, screen: Screen) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!("Score:{:>7}", state.score)))?;

    let lives_str = format!("Lives:{}", "♥".repeat(state.lives as usize));
    let rx = screen
        .width
        .saturating_sub(lives_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

// ── Playfield ─────────────────────────────────────────────────────────────────

/// Barrier and neutral zone, sampled at each cell centre so any terminal
/// size shows the same layout.
fn draw_field<W: Write>(out: &mut W, state: &FrameState, screen: Screen) -> std::io::Result<()> {
    let first_row = 2;
    let last_row = first_row + screen.inner_height();
    let neutral_col = screen.col(NEUTRAL_ZONE_X);

    for row in first_row..last_row {
        let mut line = String::with_capacity(screen.inner_width() as usize);
        for col in 1..neutral_col {
            let (x, y) = screen.field_at(col, row);
            let occupied = BarrierGrid::cell_at(x, y)
                .map(|(r, c)| state.barrier.is_occupied(r, c))
                .unwrap_or(false);
            line.push(if occupied { '▓' } else { ' ' });
        }
        out.queue(cursor::MoveTo(1, row))?;
        out.queue(style::SetForegroundColor(C_BARRIER))?;
        out.queue(Print(&line))?;

        let neutral = "░".repeat((1 + screen.inner_width()).saturating_sub(neutral_col) as usize);
        out.queue(cursor::MoveTo(neutral_col, row))?;
        out.queue(style::SetForegroundColor(C_NEUTRAL))?;
        out.queue(Print(neutral))?;
    }
    Ok(())
}

/// Fill every cell a box covers, at least one.
fn draw_box<W: Write>(
    out: &mut W,
    rect: Rect,
    glyph: &str,
    color: Color,
    screen: Screen,
) -> std::io::Result<()> {
    let left = screen.col(rect.x);
    let right = screen.col(rect.x + rect.width - 1.0).max(left);
    let top = screen.row(rect.y);
    let bottom = screen.row(rect.y + rect.height - 1.0).max(top);

    out.queue(style::SetForegroundColor(color))?;
    let span = glyph.repeat((right - left + 1) as usize);
    for row in top..=bottom {
        out.queue(cursor::MoveTo(left, row))?;
        out.queue(Print(&span))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(
    out: &mut W,
    state: &FrameState,
    screen: Screen,
) -> std::io::Result<()> {
    let hint = match state.phase {
        GamePhase::Start => "SPACE : Start   Q : Quit",
        GamePhase::Playing => "WASD / Arrows : Move   SPACE : Fire   Q : Quit",
        GamePhase::GameOver => "SPACE : Restart   Q : Quit",
    };
    out.queue(cursor::MoveTo(1, screen.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    screen: Screen,
    start_row: u16,
    lines: &[(String, Color)],
) -> std::io::Result<()> {
    let cx = screen.width / 2;
    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }
    Ok(())
}

fn draw_title<W: Write>(out: &mut W, screen: Screen) -> std::io::Result<()> {
    let lines = [
        ("YARS' REVENGE".to_string(), C_TITLE),
        (String::new(), C_TITLE),
        ("Press SPACE to Start".to_string(), C_TITLE),
        ("WASD or Arrow Keys to Move".to_string(), C_TITLE),
        ("SPACE to Fire".to_string(), C_TITLE),
        (String::new(), C_TITLE),
        ("Eat or shoot through the shield, destroy the target,".to_string(), C_HINT),
        ("and dodge the missile.".to_string(), C_HINT),
    ];
    let start_row = (screen.height / 2).saturating_sub(lines.len() as u16 / 2);
    draw_centered(out, screen, start_row, &lines)
}

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &FrameState,
    screen: Screen,
    best_score: u32,
) -> std::io::Result<()> {
    let new_best = state.score > best_score;
    let best_line = if new_best {
        format!("★ NEW BEST: {:>6} ★", state.score)
    } else {
        format!("Best Score:  {:>6}", best_score)
    };

    let lines = [
        ("╔════════════════════╗".to_string(), C_GAME_OVER),
        ("║     GAME  OVER     ║".to_string(), C_GAME_OVER),
        ("╚════════════════════╝".to_string(), C_GAME_OVER),
        (format!("Final Score: {:>6}", state.score), C_HUD),
        (best_line, if new_best { Color::Yellow } else { Color::DarkGrey }),
        ("Press SPACE to Restart".to_string(), Color::White),
    ];
    let start_row = (screen.height / 2).saturating_sub(lines.len() as u16 / 2);
    draw_centered(out, screen, start_row, &lines)
}
