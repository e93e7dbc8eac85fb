//! On-screen buttons and swipe gestures.

use crate::engine::Direction;
use crate::input::InputEvent;

/// Minimum travel, in pixels, along the dominant axis for a touch to count as a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

const BUTTON_GAP: f32 = 8.0;
const BAR_BUTTON_HEIGHT: f32 = 36.0;
const PAD_BUTTON_SIZE: f32 = 56.0;

pub fn swipe_direction(dx: f32, dy: f32) -> Option<Direction> {
    if dx.abs() > dy.abs() {
        if dx > SWIPE_THRESHOLD {
            Some(Direction::Right)
        } else if dx < -SWIPE_THRESHOLD {
            Some(Direction::Left)
        } else {
            None
        }
    } else if dy > SWIPE_THRESHOLD {
        Some(Direction::Down)
    } else if dy < -SWIPE_THRESHOLD {
        Some(Direction::Up)
    } else {
        None
    }
}

/// Follows one touch from start to end.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    origin: Option<(f32, f32)>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32, y: f32) {
        self.origin = Some((x, y));
    }

    pub fn finish(&mut self, x: f32, y: f32) -> Option<Direction> {
        let (start_x, start_y) = self.origin.take()?;
        swipe_direction(x - start_x, y - start_y)
    }

    pub fn cancel(&mut self) {
        self.origin = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Bounds {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Start,
    Pause,
    Restart,
    Up,
    Down,
    Left,
    Right,
}

impl ButtonKind {
    pub fn event(self) -> InputEvent {
        match self {
            ButtonKind::Start => InputEvent::Start,
            ButtonKind::Pause => InputEvent::TogglePause,
            ButtonKind::Restart => InputEvent::Restart,
            ButtonKind::Up => InputEvent::Steer(Direction::Up),
            ButtonKind::Down => InputEvent::Steer(Direction::Down),
            ButtonKind::Left => InputEvent::Steer(Direction::Left),
            ButtonKind::Right => InputEvent::Steer(Direction::Right),
        }
    }

    /// Fixed caption; the pause button's caption comes from the HUD instead.
    pub fn caption(self) -> &'static str {
        match self {
            ButtonKind::Start => "Start",
            ButtonKind::Pause => "Pause",
            ButtonKind::Restart => "Restart",
            ButtonKind::Up => "^",
            ButtonKind::Down => "v",
            ButtonKind::Left => "<",
            ButtonKind::Right => ">",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub kind: ButtonKind,
    pub bounds: Bounds,
}

/// Button layout below the board: a Start/Pause/Restart bar, then a direction pad when
/// the host is touch capable.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    buttons: Vec<Button>,
    height: f32,
}

impl Controls {
    pub fn layout(top: f32, width: f32, with_pad: bool) -> Self {
        let mut buttons = Vec::with_capacity(7);

        let bar = [ButtonKind::Start, ButtonKind::Pause, ButtonKind::Restart];
        let bar_w = (width - BUTTON_GAP * (bar.len() as f32 + 1.0)) / bar.len() as f32;
        let bar_y = top + BUTTON_GAP;
        for (i, kind) in bar.into_iter().enumerate() {
            buttons.push(Button {
                kind,
                bounds: Bounds {
                    x: BUTTON_GAP + i as f32 * (bar_w + BUTTON_GAP),
                    y: bar_y,
                    w: bar_w,
                    h: BAR_BUTTON_HEIGHT,
                },
            });
        }
        let mut height = BUTTON_GAP * 2.0 + BAR_BUTTON_HEIGHT;

        if with_pad {
            let s = PAD_BUTTON_SIZE;
            let cx = width * 0.5 - s * 0.5;
            let pad_top = top + height;
            let pad = [
                (ButtonKind::Up, cx, pad_top),
                (ButtonKind::Left, cx - s - BUTTON_GAP, pad_top + s + BUTTON_GAP),
                (ButtonKind::Right, cx + s + BUTTON_GAP, pad_top + s + BUTTON_GAP),
                (ButtonKind::Down, cx, pad_top + 2.0 * (s + BUTTON_GAP)),
            ];
            for (kind, x, y) in pad {
                buttons.push(Button {
                    kind,
                    bounds: Bounds { x, y, w: s, h: s },
                });
            }
            height += 3.0 * s + 3.0 * BUTTON_GAP;
        }

        Self { buttons, height }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Vertical space taken by the controls.
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn hit(&self, x: f32, y: f32) -> Option<InputEvent> {
        self.buttons
            .iter()
            .find(|b| b.bounds.contains(x, y))
            .map(|b| b.kind.event())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_swipes_are_ignored() {
        assert_eq!(swipe_direction(30.0, 10.0), None);
        assert_eq!(swipe_direction(-50.0, 0.0), None);
        assert_eq!(swipe_direction(0.0, 0.0), None);
    }

    #[test]
    fn dominant_axis_wins() {
        assert_eq!(swipe_direction(80.0, 60.0), Some(Direction::Right));
        assert_eq!(swipe_direction(-80.0, 60.0), Some(Direction::Left));
        assert_eq!(swipe_direction(20.0, 90.0), Some(Direction::Down));
        assert_eq!(swipe_direction(20.0, -90.0), Some(Direction::Up));
    }

    #[test]
    fn tracker_needs_a_start() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.finish(200.0, 0.0), None);

        tracker.begin(100.0, 100.0);
        assert_eq!(tracker.finish(100.0, 20.0), Some(Direction::Up));
        assert_eq!(tracker.finish(100.0, 300.0), None);

        tracker.begin(0.0, 0.0);
        tracker.cancel();
        assert_eq!(tracker.finish(300.0, 0.0), None);
    }

    #[test]
    fn pad_only_on_touch_hosts() {
        let desktop = Controls::layout(400.0, 400.0, false);
        let touch = Controls::layout(400.0, 400.0, true);
        assert_eq!(desktop.buttons().len(), 3);
        assert_eq!(touch.buttons().len(), 7);
        assert!(touch.height() > desktop.height());
    }

    #[test]
    fn hit_testing_maps_buttons_to_events() {
        let controls = Controls::layout(400.0, 400.0, true);
        for button in controls.buttons() {
            let b = button.bounds;
            assert_eq!(
                controls.hit(b.x + b.w * 0.5, b.y + b.h * 0.5),
                Some(button.kind.event())
            );
        }
        assert_eq!(controls.hit(1.0, 1.0), None);
    }
}
