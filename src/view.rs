//! Macroquad presentation of the retained canvas, the HUD and the on-screen controls.

use macroquad::prelude::*;

use crate::controls::{ButtonKind, Controls};
use crate::hud::Hud;
use crate::render::{Canvas, Paint};

/// Height of the score strip above the board.
pub const HUD_HEIGHT: f32 = 40.0;

const HUD_TEXT: Color = Color::new(0.15, 0.15, 0.15, 1.0);
const BUTTON_FILL: Color = Color::new(0.25, 0.6, 0.3, 1.0);
const OVERLAY: Color = Color::new(0.0, 0.0, 0.0, 0.6);

fn paint_color(paint: Paint) -> Color {
    match paint {
        Paint::Background => WHITE,
        Paint::Snake => GREEN,
        Paint::Food => RED,
    }
}

/// Screen-space placement of the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub board_x: f32,
    pub board_y: f32,
    pub board_size: f32,
}

impl Layout {
    pub fn new(board_size: f32) -> Self {
        Self {
            board_x: 0.0,
            board_y: HUD_HEIGHT,
            board_size,
        }
    }

    pub fn board_bottom(&self) -> f32 {
        self.board_y + self.board_size
    }

    pub fn board_contains(&self, x: f32, y: f32) -> bool {
        x >= self.board_x
            && x < self.board_x + self.board_size
            && y >= self.board_y
            && y < self.board_bottom()
    }
}

pub fn draw_canvas(canvas: &Canvas, layout: Layout) {
    if let Some(paint) = canvas.background() {
        draw_rectangle(
            layout.board_x,
            layout.board_y,
            layout.board_size,
            layout.board_size,
            paint_color(paint),
        );
    }
    for (square, paint) in canvas.squares() {
        draw_rectangle(
            layout.board_x + square.x,
            layout.board_y + square.y,
            square.size,
            square.size,
            paint_color(*paint),
        );
    }
}

pub fn draw_hud(hud: &Hud, difficulty_label: &str) {
    let score = format!("Score: {}", hud.score);
    let best = format!("Best: {}", hud.high_score);
    draw_text(&score, 8.0, 26.0, 24.0, HUD_TEXT);
    let m = measure_text(&best, None, 24, 1.0);
    draw_text(&best, screen_width() - m.width - 8.0, 26.0, 24.0, HUD_TEXT);
    let d = measure_text(difficulty_label, None, 18, 1.0);
    draw_text(
        difficulty_label,
        (screen_width() - d.width) * 0.5,
        26.0,
        18.0,
        GRAY,
    );
}

pub fn draw_controls(controls: &Controls, hud: &Hud) {
    for button in controls.buttons() {
        let b = button.bounds;
        draw_rectangle(b.x, b.y, b.w, b.h, BUTTON_FILL);
        let caption = match button.kind {
            ButtonKind::Pause => hud.pause_label,
            kind => kind.caption(),
        };
        let m = measure_text(caption, None, 22, 1.0);
        draw_text(
            caption,
            b.x + (b.w - m.width) * 0.5,
            b.y + (b.h + m.height) * 0.5,
            22.0,
            WHITE,
        );
    }
}

pub fn draw_game_over(hud: &Hud, layout: Layout) {
    if !hud.game_over_visible {
        return;
    }
    draw_rectangle(
        layout.board_x,
        layout.board_y,
        layout.board_size,
        layout.board_size,
        OVERLAY,
    );
    let centre_x = layout.board_x + layout.board_size * 0.5;
    let centre_y = layout.board_y + layout.board_size * 0.4;

    let title = "GAME OVER";
    let tm = measure_text(title, None, 36, 1.0);
    draw_text(title, centre_x - tm.width * 0.5, centre_y, 36.0, WHITE);

    let score = format!("Final score: {}", hud.final_score);
    let sm = measure_text(&score, None, 22, 1.0);
    draw_text(&score, centre_x - sm.width * 0.5, centre_y + 36.0, 22.0, WHITE);

    let hint = "R: Restart  Esc: Quit";
    let hm = measure_text(hint, None, 18, 1.0);
    draw_text(hint, centre_x - hm.width * 0.5, centre_y + 64.0, 18.0, LIGHTGRAY);
}
