//! Game engine: board state, the tick step, scoring and the session timer.

use std::collections::VecDeque;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::difficulty::Difficulty;
use crate::hud::ScoreDisplay;
use crate::input::InputEvent;
use crate::render::{Paint, RenderSurface, Square};
use crate::store::ScoreStore;
use crate::timer::{TickTimer, TimerState};

pub const DEFAULT_TILE_COUNT: i32 = 20;
pub const DEFAULT_BOARD_PIXELS: f32 = 400.0;
/// Smallest board that fits the starting snake with room to turn.
pub const MIN_TILE_COUNT: i32 = 5;
/// Gap left between neighbouring squares.
const TILE_GAP: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub const fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Paused,
    Over,
}

/// What a single call to [`GameEngine::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The engine was not running; nothing changed.
    Idle,
    Moved,
    Ate,
    Collided,
}

/// Board geometry and host capabilities, fixed for the lifetime of the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub board_pixel_size: f32,
    pub tile_count: i32,
    pub is_touch_capable: bool,
    /// Place food only on cells the snake does not occupy.
    pub food_avoids_snake: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_pixel_size: DEFAULT_BOARD_PIXELS,
            tile_count: DEFAULT_TILE_COUNT,
            is_touch_capable: false,
            food_avoids_snake: false,
        }
    }
}

impl EngineConfig {
    /// Raises `tile_count` to [`MIN_TILE_COUNT`] and falls back to the default board size
    /// when `board_pixel_size` is not a positive number.
    pub fn sanitized(self) -> Self {
        let board_pixel_size = if self.board_pixel_size.is_finite() && self.board_pixel_size > 0.0 {
            self.board_pixel_size
        } else {
            DEFAULT_BOARD_PIXELS
        };
        Self {
            board_pixel_size,
            tile_count: self.tile_count.max(MIN_TILE_COUNT),
            ..self
        }
    }

    pub fn tile_size(&self) -> f32 {
        self.board_pixel_size / self.tile_count as f32
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.tile_count).contains(&cell.x) && (0..self.tile_count).contains(&cell.y)
    }
}

#[derive(Debug, Clone)]
pub struct Snake {
    cells: VecDeque<Cell>,
    /// Direction of the last completed step.
    heading: Direction,
    /// Direction the next step will take.
    pending: Direction,
    target_len: usize,
}

impl Snake {
    pub const START_LEN: usize = 3;

    /// Three cells in the middle of the board, head on the right, moving right.
    fn spawn(tile_count: i32) -> Self {
        let centre = tile_count / 2;
        let cells = (0..Self::START_LEN as i32)
            .map(|i| Cell::new(centre - i, centre))
            .collect();
        Self {
            cells,
            heading: Direction::Right,
            pending: Direction::Right,
            target_len: Self::START_LEN,
        }
    }

    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn target_len(&self) -> usize {
        self.target_len
    }

    /// The direction the snake will move on its next step.
    pub fn direction(&self) -> Direction {
        self.pending
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    // Rejects turning back onto the neck, whether or not a turn is already queued.
    fn steer(&mut self, direction: Direction) -> bool {
        if direction == self.heading.opposite() || direction == self.pending.opposite() {
            return false;
        }
        self.pending = direction;
        true
    }

    fn next_head(&self) -> Cell {
        self.head().step(self.pending)
    }

    fn advance(&mut self, head: Cell) {
        self.heading = self.pending;
        self.cells.push_front(head);
    }

    fn grow(&mut self) {
        self.target_len += 1;
    }

    fn trim(&mut self) {
        while self.cells.len() > self.target_len {
            self.cells.pop_back();
        }
    }
}

pub struct GameEngine<S, D, R> {
    config: EngineConfig,
    difficulty: Difficulty,
    snake: Snake,
    food: Cell,
    score: u32,
    high_score: u32,
    status: GameStatus,
    timer: TickTimer,
    rng: StdRng,
    store: S,
    display: D,
    surface: R,
}

impl<S, D, R> GameEngine<S, D, R>
where
    S: ScoreStore,
    D: ScoreDisplay,
    R: RenderSurface,
{
    pub fn new(config: EngineConfig, difficulty: Difficulty, store: S, display: D, surface: R) -> Self {
        Self::with_rng(config, difficulty, store, display, surface, StdRng::from_os_rng())
    }

    /// Same as [`GameEngine::new`] with reproducible food placement.
    pub fn with_seed(
        config: EngineConfig,
        difficulty: Difficulty,
        store: S,
        display: D,
        surface: R,
        seed: u64,
    ) -> Self {
        Self::with_rng(config, difficulty, store, display, surface, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        config: EngineConfig,
        difficulty: Difficulty,
        store: S,
        display: D,
        surface: R,
        rng: StdRng,
    ) -> Self {
        let config = config.sanitized();
        let mut engine = Self {
            config,
            difficulty,
            snake: Snake::spawn(config.tile_count),
            food: Cell::new(0, 0),
            score: 0,
            high_score: 0,
            status: GameStatus::Running,
            timer: TickTimer::new(),
            rng,
            store,
            display,
            surface,
        };
        engine.initialize();
        engine
    }

    /// Resets the board for a fresh session, reloads the stored high score and redraws.
    pub fn initialize(&mut self) {
        self.snake = Snake::spawn(self.config.tile_count);
        self.food = self.random_food();
        self.score = 0;
        self.status = GameStatus::Running;
        self.high_score = self.load_high_score();

        self.display.set_score(self.score);
        self.display.set_high_score(self.high_score);
        self.display.set_paused(false);
        self.render();
    }

    fn load_high_score(&mut self) -> u32 {
        let key = self.difficulty.key();
        match self.store.load(key) {
            Ok(score) => score.unwrap_or(0),
            Err(err) => {
                warn!("high score for {key} unavailable, using 0: {err}");
                0
            }
        }
    }

    /// Starts the session timer, re-initializing the board first. Does nothing while a
    /// timer is already running.
    pub fn start_game(&mut self, now: f64) {
        if self.timer.is_running() {
            return;
        }
        self.initialize();
        self.timer.start(self.difficulty.interval(), now);
        info!(
            "game started on {} ({} ms per tick)",
            self.difficulty,
            self.difficulty.interval().as_millis()
        );
    }

    pub fn restart(&mut self, now: f64) {
        self.display.hide_game_over();
        self.timer.stop();
        self.start_game(now);
    }

    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::Over => return,
        };
        let paused = self.status == GameStatus::Paused;
        self.display.set_paused(paused);
        debug!("{}", if paused { "paused" } else { "resumed" });
    }

    /// Queues a turn for the next tick. Ignored unless running, and ignored when it would
    /// reverse the snake onto itself.
    ///
    /// A turn is checked against both the queued direction and the heading of the last
    /// completed step, so with Up queued while heading Right, Left is still rejected.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        self.snake.steer(direction)
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Idle;
        }

        let head = self.snake.next_head();
        if !self.config.contains(head) || self.snake.occupies(head) {
            self.end_game();
            return TickOutcome::Collided;
        }

        self.snake.advance(head);
        let outcome = if head == self.food {
            self.score += self.difficulty.points_per_food();
            self.display.set_score(self.score);
            self.refresh_high_score();
            self.food = self.random_food();
            self.snake.grow();
            debug!("ate food at ({}, {}), score {}", head.x, head.y, self.score);
            TickOutcome::Ate
        } else {
            TickOutcome::Moved
        };
        self.snake.trim();
        outcome
    }

    fn refresh_high_score(&mut self) {
        if self.score <= self.high_score {
            return;
        }
        self.high_score = self.score;
        self.display.set_high_score(self.high_score);
        if let Err(err) = self.store.save(self.difficulty.key(), self.high_score) {
            warn!("could not persist high score {}: {err}", self.high_score);
        }
    }

    fn end_game(&mut self) {
        self.timer.stop();
        self.status = GameStatus::Over;
        self.display.show_game_over(self.score, self.difficulty.label());
        info!(
            "game over on {} with {} points (best {})",
            self.difficulty, self.score, self.high_score
        );
    }

    /// Picks a food cell. Uniform over the whole board unless
    /// [`EngineConfig::food_avoids_snake`] is set and a free cell exists.
    pub fn random_food(&mut self) -> Cell {
        let n = self.config.tile_count;
        if self.config.food_avoids_snake {
            let free: Vec<Cell> = (0..n)
                .flat_map(|y| (0..n).map(move |x| Cell::new(x, y)))
                .filter(|cell| !self.snake.occupies(*cell))
                .collect();
            if let Some(cell) = free.choose(&mut self.rng) {
                return *cell;
            }
        }
        Cell::new(self.rng.random_range(0..n), self.rng.random_range(0..n))
    }

    pub fn render(&mut self) {
        let tile = self.config.tile_size();
        let size = tile - TILE_GAP;
        let square = |cell: Cell| Square {
            x: cell.x as f32 * tile,
            y: cell.y as f32 * tile,
            size,
        };

        self.surface.clear(Paint::Background);
        for cell in self.snake.cells.iter() {
            self.surface.fill_square(square(*cell), Paint::Snake);
        }
        self.surface.fill_square(square(self.food), Paint::Food);
    }

    /// Frame hook: runs one tick and redraws when the timer is due.
    pub fn update(&mut self, now: f64) -> TickOutcome {
        if !self.timer.poll(now) {
            return TickOutcome::Idle;
        }
        let outcome = self.tick();
        self.render();
        outcome
    }

    pub fn handle(&mut self, event: InputEvent, now: f64) {
        match event {
            InputEvent::Steer(direction) => {
                self.change_direction(direction);
            }
            InputEvent::TogglePause => self.toggle_pause(),
            InputEvent::Start => self.start_game(now),
            InputEvent::Restart => self.restart(now),
            InputEvent::Quit => {}
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hud::Hud;
    use crate::render::Canvas;
    use crate::store::MemoryStore;

    type TestEngine = GameEngine<MemoryStore, Hud, Canvas>;

    fn engine(difficulty: Difficulty) -> TestEngine {
        engine_with_store(difficulty, MemoryStore::new())
    }

    fn engine_with_store(difficulty: Difficulty, store: MemoryStore) -> TestEngine {
        GameEngine::with_seed(
            EngineConfig::default(),
            difficulty,
            store,
            Hud::default(),
            Canvas::new(),
            7,
        )
    }

    fn cells(engine: &TestEngine) -> Vec<(i32, i32)> {
        engine.snake().cells().map(|c| (c.x, c.y)).collect()
    }

    // Keeps food out of the way so ticks are plain moves.
    fn park_food(engine: &mut TestEngine) {
        engine.food = Cell::new(0, 19);
    }

    #[test]
    fn initializes_centred_three_cell_snake() {
        let engine = engine(Difficulty::Normal);
        assert_eq!(cells(&engine), vec![(10, 10), (9, 10), (8, 10)]);
        assert_eq!(engine.snake().direction(), Direction::Right);
        assert_eq!(engine.status(), GameStatus::Running);
        assert_eq!(engine.score(), 0);
        assert!(engine.config().contains(engine.food()));
        assert_eq!(engine.surface().count(Paint::Snake), 3);
        assert_eq!(engine.surface().count(Paint::Food), 1);
    }

    #[test]
    fn eating_food_grows_and_scores() {
        let mut engine = engine(Difficulty::Normal);
        engine.food = Cell::new(11, 10);

        assert_eq!(engine.tick(), TickOutcome::Ate);
        assert_eq!(cells(&engine), vec![(11, 10), (10, 10), (9, 10), (8, 10)]);
        assert_eq!(engine.score(), 15);
        assert_eq!(engine.status(), GameStatus::Running);
        assert_eq!(engine.display().score, "15");
        assert!(engine.config().contains(engine.food()));
    }

    #[test]
    fn plain_move_keeps_length() {
        let mut engine = engine(Difficulty::Normal);
        park_food(&mut engine);
        assert_eq!(engine.tick(), TickOutcome::Moved);
        assert_eq!(cells(&engine), vec![(11, 10), (10, 10), (9, 10)]);
        assert_eq!(engine.snake().len(), engine.snake().target_len());
    }

    #[test]
    fn leaving_the_board_ends_the_game() {
        let mut engine = engine(Difficulty::Normal);
        engine.start_game(0.0);
        park_food(&mut engine);
        engine.snake.cells = [(19, 10), (18, 10), (17, 10)]
            .into_iter()
            .map(|(x, y)| Cell::new(x, y))
            .collect();

        assert_eq!(engine.tick(), TickOutcome::Collided);
        assert_eq!(engine.status(), GameStatus::Over);
        assert_eq!(engine.timer_state(), TimerState::Stopped);
        assert!(engine.display().game_over_visible);
        assert_eq!(engine.display().final_score, "0 (Normal)");
        assert_eq!(engine.snake().head(), Cell::new(19, 10));
    }

    #[test]
    fn running_into_the_body_ends_the_game() {
        let mut engine = engine(Difficulty::Easy);
        park_food(&mut engine);
        // Hook shape: the head turns down into its own body.
        engine.snake.cells = [(10, 10), (11, 10), (11, 11), (10, 11), (9, 11)]
            .into_iter()
            .map(|(x, y)| Cell::new(x, y))
            .collect();
        engine.snake.target_len = 5;
        engine.snake.heading = Direction::Left;
        engine.snake.pending = Direction::Left;

        assert!(engine.change_direction(Direction::Down));
        assert_eq!(engine.tick(), TickOutcome::Collided);
        assert_eq!(engine.status(), GameStatus::Over);
    }

    #[test]
    fn reversal_is_rejected() {
        let mut engine = engine(Difficulty::Normal);
        let reverse = Direction::from_delta(-1, 0).unwrap();
        assert!(!engine.change_direction(reverse));
        assert_eq!(engine.snake().direction().delta(), (1, 0));
    }

    #[test]
    fn queued_turn_cannot_be_reversed_into_the_neck() {
        let mut engine = engine(Difficulty::Normal);
        park_food(&mut engine);
        assert!(engine.change_direction(Direction::Up));
        // Left would reverse the current heading even though Up is queued.
        assert!(!engine.change_direction(Direction::Left));
        assert!(!engine.change_direction(Direction::Down));
        assert_eq!(engine.tick(), TickOutcome::Moved);
        assert_eq!(engine.snake().head(), Cell::new(10, 9));
    }

    #[test]
    fn hard_difficulty_scores_twenty_per_food() {
        let mut engine = engine(Difficulty::Hard);
        assert_eq!(engine.difficulty().interval().as_millis(), 100);
        engine.food = Cell::new(11, 10);
        engine.tick();
        assert_eq!(engine.score(), 20);
    }

    #[test]
    fn high_score_is_persisted_and_reloaded() {
        let mut engine = engine_with_store(Difficulty::Easy, MemoryStore::new().with_score("easy", 5));
        assert_eq!(engine.high_score(), 5);
        assert_eq!(engine.display().high_score, "5");

        engine.food = Cell::new(11, 10);
        engine.tick();
        assert_eq!(engine.high_score(), 10);
        assert_eq!(engine.store().get("easy"), Some(10));
        assert_eq!(engine.store().get("normal"), None);

        engine.initialize();
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.high_score(), 10);
    }

    #[test]
    fn lower_score_does_not_overwrite_best() {
        let mut engine = engine_with_store(Difficulty::Easy, MemoryStore::new().with_score("easy", 100));
        engine.food = Cell::new(11, 10);
        engine.tick();
        assert_eq!(engine.score(), 10);
        assert_eq!(engine.high_score(), 100);
        assert_eq!(engine.store().get("easy"), Some(100));
    }

    #[test]
    fn unavailable_store_degrades_to_zero() {
        let mut engine = engine_with_store(Difficulty::Normal, MemoryStore::unavailable());
        assert_eq!(engine.high_score(), 0);
        engine.food = Cell::new(11, 10);
        assert_eq!(engine.tick(), TickOutcome::Ate);
        assert_eq!(engine.high_score(), 15);
    }

    #[test]
    fn over_is_terminal_until_restart() {
        let mut engine = engine(Difficulty::Normal);
        engine.start_game(0.0);
        engine.end_game();
        let before = (cells(&engine), engine.food(), engine.score());

        assert_eq!(engine.tick(), TickOutcome::Idle);
        assert!(!engine.change_direction(Direction::Up));
        engine.toggle_pause();
        assert_eq!(engine.status(), GameStatus::Over);
        assert_eq!(engine.update(100.0), TickOutcome::Idle);
        assert_eq!((cells(&engine), engine.food(), engine.score()), before);

        engine.restart(200.0);
        assert_eq!(engine.status(), GameStatus::Running);
        assert!(!engine.display().game_over_visible);
        assert!(engine.timer.is_running());
        assert_eq!(engine.snake().len(), Snake::START_LEN);
    }

    #[test]
    fn pause_freezes_ticks_and_turns() {
        let mut engine = engine(Difficulty::Normal);
        park_food(&mut engine);
        engine.toggle_pause();
        assert_eq!(engine.status(), GameStatus::Paused);
        assert_eq!(engine.display().pause_label, crate::hud::RESUME_LABEL);

        assert_eq!(engine.tick(), TickOutcome::Idle);
        assert!(!engine.change_direction(Direction::Up));
        assert_eq!(engine.snake().head(), Cell::new(10, 10));

        engine.toggle_pause();
        assert_eq!(engine.status(), GameStatus::Running);
        assert_eq!(engine.tick(), TickOutcome::Moved);
    }

    #[test]
    fn start_never_double_starts_the_timer() {
        let mut engine = engine(Difficulty::Normal);
        engine.start_game(0.0);
        park_food(&mut engine);
        engine.tick();
        let head = engine.snake().head();

        // A second start is ignored and does not reset the board.
        engine.start_game(1.0);
        assert_eq!(engine.snake().head(), head);
        assert_eq!(
            engine.timer_state(),
            TimerState::Running {
                interval: Difficulty::Normal.interval(),
                next_due: 0.15,
            }
        );
    }

    #[test]
    fn update_ticks_only_when_due_and_redraws() {
        let mut engine = engine(Difficulty::Easy);
        engine.start_game(0.0);
        park_food(&mut engine);

        assert_eq!(engine.update(0.1), TickOutcome::Idle);
        assert_eq!(engine.update(0.21), TickOutcome::Moved);
        assert_eq!(engine.snake().head(), Cell::new(11, 10));
        let drawn_head = engine.surface().squares()[0].0;
        assert_eq!(drawn_head.x, 11.0 * 20.0);
        assert_eq!(drawn_head.size, 19.0);
    }

    #[test]
    fn input_events_route_to_operations() {
        let mut engine = engine(Difficulty::Normal);
        engine.handle(InputEvent::Start, 0.0);
        assert!(engine.timer.is_running());
        engine.handle(InputEvent::Steer(Direction::Down), 0.0);
        assert_eq!(engine.snake().direction(), Direction::Down);
        engine.handle(InputEvent::TogglePause, 0.0);
        assert_eq!(engine.status(), GameStatus::Paused);
        engine.handle(InputEvent::Restart, 1.0);
        assert_eq!(engine.status(), GameStatus::Running);
        assert_eq!(engine.snake().direction(), Direction::Right);
    }

    #[test]
    fn snake_stays_on_the_board_under_random_steering() {
        let mut steering = StdRng::seed_from_u64(99);
        let all = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
        for round in 0..20 {
            let mut engine = GameEngine::with_seed(
                EngineConfig::default(),
                Difficulty::Normal,
                MemoryStore::new(),
                Hud::default(),
                Canvas::new(),
                round,
            );
            let mut last_score = 0;
            for _ in 0..5_000 {
                if engine.status() != GameStatus::Running {
                    break;
                }
                let len = engine.snake().len();
                if let Some(direction) = all.choose(&mut steering) {
                    engine.change_direction(*direction);
                }
                match engine.tick() {
                    TickOutcome::Ate => {
                        assert_eq!(engine.snake().len(), len + 1);
                        assert_eq!(engine.score(), last_score + 15);
                    }
                    TickOutcome::Moved => assert_eq!(engine.snake().len(), len),
                    TickOutcome::Collided => assert_eq!(engine.status(), GameStatus::Over),
                    TickOutcome::Idle => unreachable!("engine was running"),
                }
                last_score = engine.score();
                assert!(engine.snake().cells().all(|c| engine.config().contains(c)));
                assert!(engine.snake().len() <= engine.snake().target_len());
            }
        }
    }

    #[test]
    fn disjoint_food_never_lands_on_the_snake() {
        let config = EngineConfig {
            tile_count: 5,
            food_avoids_snake: true,
            ..EngineConfig::default()
        };
        let mut engine = GameEngine::with_seed(
            config,
            Difficulty::Normal,
            MemoryStore::new(),
            Hud::default(),
            Canvas::new(),
            3,
        );
        for _ in 0..200 {
            let food = engine.random_food();
            assert!(!engine.snake().occupies(food));
            assert!(engine.config().contains(food));
        }
    }

    #[test]
    fn initialize_redraws_the_fresh_board() {
        let mut engine = engine(Difficulty::Normal);
        engine.food = Cell::new(11, 10);
        engine.tick();
        engine.render();
        assert_eq!(engine.surface().count(Paint::Snake), 4);

        engine.initialize();
        assert_eq!(engine.surface().count(Paint::Snake), 3);
        assert_eq!(engine.surface().count(Paint::Food), 1);
        assert_eq!(engine.surface().background(), Some(Paint::Background));
    }

    #[test]
    fn undersized_board_is_raised_to_the_minimum() {
        for tile_count in [-3, 0, 1, 2] {
            let config = EngineConfig {
                board_pixel_size: 0.0,
                tile_count,
                ..EngineConfig::default()
            };
            let mut engine = GameEngine::with_seed(
                config,
                Difficulty::Normal,
                MemoryStore::new(),
                Hud::default(),
                Canvas::new(),
                1,
            );
            assert_eq!(engine.config().tile_count, MIN_TILE_COUNT);
            assert_eq!(engine.config().board_pixel_size, DEFAULT_BOARD_PIXELS);
            assert!(engine.snake().cells().all(|c| engine.config().contains(c)));
            let food = engine.random_food();
            assert!(engine.config().contains(food));
        }
    }
}
