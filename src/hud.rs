//! Score and overlay display.

pub const PAUSE_LABEL: &str = "Pause";
pub const RESUME_LABEL: &str = "Resume";

/// Text outputs the engine pushes to the host's display layer.
pub trait ScoreDisplay {
    fn set_score(&mut self, score: u32);
    fn set_high_score(&mut self, high_score: u32);
    /// Switches the pause button between its two labels.
    fn set_paused(&mut self, paused: bool);
    fn show_game_over(&mut self, final_score: u32, difficulty_label: &str);
    fn hide_game_over(&mut self);
}

/// Headless display state, drawn by the macroquad view every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub score: String,
    pub high_score: String,
    pub pause_label: &'static str,
    pub final_score: String,
    pub game_over_visible: bool,
}

impl Default for Hud {
    fn default() -> Self {
        Self {
            score: "0".to_owned(),
            high_score: "0".to_owned(),
            pause_label: PAUSE_LABEL,
            final_score: String::new(),
            game_over_visible: false,
        }
    }
}

impl ScoreDisplay for Hud {
    fn set_score(&mut self, score: u32) {
        self.score = score.to_string();
    }

    fn set_high_score(&mut self, high_score: u32) {
        self.high_score = high_score.to_string();
    }

    fn set_paused(&mut self, paused: bool) {
        self.pause_label = if paused { RESUME_LABEL } else { PAUSE_LABEL };
    }

    fn show_game_over(&mut self, final_score: u32, difficulty_label: &str) {
        self.final_score = format!("{final_score} ({difficulty_label})");
        self.game_over_visible = true;
    }

    fn hide_game_over(&mut self) {
        self.game_over_visible = false;
    }
}
