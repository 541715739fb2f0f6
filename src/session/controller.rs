use crate::game::{BoardView, Direction, GameEngine, GameStatus, TickOutcome};

use super::scheduler::Scheduler;

/// Consumer of rendered frames. Called with a full snapshot after every
/// state change; implementations redraw everything.
pub trait RenderSink {
    fn present(&mut self, view: &BoardView);
}

/// Sink that keeps only the most recent frame, for hosts that draw on their
/// own schedule
#[derive(Debug, Default)]
pub struct LatestFrame {
    view: Option<BoardView>,
    presented: u64,
}

impl LatestFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> Option<&BoardView> {
        self.view.as_ref()
    }

    /// Number of frames presented so far
    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl RenderSink for LatestFrame {
    fn present(&mut self, view: &BoardView) {
        self.view = Some(view.clone());
        self.presented += 1;
    }
}

/// Player commands understood by a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Start,
    Stop,
    Restart,
}

/// One player's game: engine, tick scheduler and render sink.
///
/// All mutation goes through `&mut self`, so a single owner (the host event
/// loop) serialises ticks and input.
pub struct Session<V: RenderSink> {
    engine: GameEngine,
    scheduler: Scheduler,
    sink: V,
}

impl<V: RenderSink> Session<V> {
    /// Wrap an engine and present its initial board
    pub fn new(engine: GameEngine, sink: V) -> Self {
        let scheduler = Scheduler::new(engine.config().tick_period());
        let mut session = Self {
            engine,
            scheduler,
            sink,
        };
        session.render();
        session
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn sink(&self) -> &V {
        &self.sink
    }

    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Turn(direction) => {
                self.engine.set_direction(direction);
            }
            Command::Start => {
                self.start();
            }
            Command::Stop => {
                self.stop();
            }
            Command::Restart => self.restart(),
        }
    }

    /// Begin or resume ticking. No-op while running or after game over.
    pub fn start(&mut self) -> bool {
        if self.scheduler.is_running() || self.engine.status() == GameStatus::GameOver {
            log::debug!("Ignoring start in state {}", self.engine.status().as_str());
            return false;
        }

        self.engine.start();
        self.scheduler.start();
        log::info!("Session started");
        self.render();
        true
    }

    /// Halt ticking. Idempotent.
    pub fn stop(&mut self) -> bool {
        let was_running = self.scheduler.stop();
        if self.engine.pause() {
            log::info!("Session paused at score {}", self.engine.score());
            self.render();
        }
        was_running
    }

    /// Stop and set up a fresh board without starting it
    pub fn restart(&mut self) {
        self.scheduler.stop();
        self.engine.reset();
        log::info!("Session restarted, best score {}", self.engine.best_score());
        self.render();
    }

    /// Advance the game by one tick if the scheduler is running
    pub fn tick(&mut self) -> TickOutcome {
        if !self.scheduler.is_running() {
            return TickOutcome::Idle;
        }

        let outcome = self.engine.tick();
        if self.engine.status() == GameStatus::GameOver {
            self.scheduler.stop();
        }

        self.render();
        outcome
    }

    fn render(&mut self) {
        let view = self.engine.view();
        self.sink.present(&view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{
        BEST_SCORE_KEY, CollisionType, Direction, FoodPlacer, GameConfig, GameState, Position,
        Snake,
    };
    use crate::storage::{MemoryStore, ScoreStore};

    #[derive(Default)]
    struct Recorder {
        frames: Vec<BoardView>,
    }

    impl RenderSink for Recorder {
        fn present(&mut self, view: &BoardView) {
            self.frames.push(view.clone());
        }
    }

    /// Standard opening board with the food out of the way
    fn fresh_session(store: MemoryStore) -> Session<Recorder> {
        let config = GameConfig::default();
        let snake = Snake::new(Position::new(10, 10), Direction::Right, 3);
        let state = GameState::new(snake, Position::new(0, 0), config.grid_size);
        let engine = GameEngine::from_state(config, state, Box::new(store), FoodPlacer::seeded(20, 21));
        Session::new(engine, Recorder::default())
    }

    /// Session whose snake sits at the right wall, one tick from game over
    fn doomed_session(store: MemoryStore) -> Session<Recorder> {
        let config = GameConfig::default();
        let snake = Snake::from_segments(
            vec![Position::new(18, 10), Position::new(17, 10), Position::new(16, 10)],
            Direction::Right,
        );
        let state = GameState::new(snake, Position::new(19, 10), config.grid_size);
        let engine = GameEngine::from_state(config, state, Box::new(store), FoodPlacer::seeded(20, 4));
        Session::new(engine, Recorder::default())
    }

    #[test]
    fn test_new_session_is_ready_and_rendered() {
        let session = fresh_session(MemoryStore::new());

        assert_eq!(session.engine().status(), GameStatus::Ready);
        assert!(!session.scheduler().is_running());
        assert_eq!(session.scheduler().period().as_millis(), 120);
        assert_eq!(session.sink().frames.len(), 1);
        assert_eq!(session.sink().frames[0].cells.len(), 3);
    }

    #[test]
    fn test_tick_requires_start() {
        let mut session = fresh_session(MemoryStore::new());

        assert_eq!(session.tick(), TickOutcome::Idle);
        assert_eq!(session.engine().state().steps, 0);

        assert!(session.start());
        assert!(!session.start());
        assert_eq!(session.engine().status(), GameStatus::Running);
        assert_eq!(session.tick(), TickOutcome::Moved);
        assert_eq!(session.engine().state().snake.head(), Position::new(11, 10));
    }

    #[test]
    fn test_stop_pauses_and_resumes() {
        let mut session = fresh_session(MemoryStore::new());
        session.start();
        session.tick();

        assert!(session.stop());
        assert!(!session.stop());
        assert_eq!(session.engine().status(), GameStatus::Paused);
        assert_eq!(session.tick(), TickOutcome::Idle);

        assert!(session.start());
        assert_eq!(session.tick(), TickOutcome::Moved);
        assert_eq!(session.engine().state().snake.head(), Position::new(12, 10));
    }

    #[test]
    fn test_game_over_stops_scheduler() {
        let store = MemoryStore::new();
        let mut session = doomed_session(store.clone());
        session.start();

        assert_eq!(session.tick(), TickOutcome::Ate);
        assert_eq!(session.engine().score(), 1);
        assert_eq!(store.get(BEST_SCORE_KEY).unwrap(), Some(1));

        assert_eq!(session.tick(), TickOutcome::Collided(CollisionType::Wall));
        assert!(!session.scheduler().is_running());
        assert_eq!(session.engine().status(), GameStatus::GameOver);

        let last = session.sink().frames.last().unwrap();
        assert!(last.game_over);
        assert_eq!(last.overlay.as_ref().map(|o| o.title), Some("Game Over"));
        assert_eq!(last.score, 1);

        // Start is ignored until restart.
        assert!(!session.start());
        assert_eq!(session.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_restart_resets_board_but_not_best() {
        let store = MemoryStore::new();
        let mut session = doomed_session(store.clone());
        session.start();
        session.tick();
        session.tick();

        session.restart();

        assert_eq!(session.engine().status(), GameStatus::Ready);
        assert!(!session.scheduler().is_running());
        assert_eq!(session.engine().score(), 0);
        assert_eq!(session.engine().best_score(), 1);
        assert_eq!(
            session.engine().state().snake.body,
            vec![Position::new(10, 10), Position::new(9, 10), Position::new(8, 10)]
        );

        let last = session.sink().frames.last().unwrap();
        assert_eq!(last.status, GameStatus::Ready);
        assert_eq!(last.best_score, 1);

        assert!(session.start());
    }

    #[test]
    fn test_restart_while_running_does_not_autostart() {
        let mut session = fresh_session(MemoryStore::new());
        session.start();
        session.tick();

        session.handle(Command::Restart);

        assert!(!session.scheduler().is_running());
        assert_eq!(session.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_commands() {
        let mut session = fresh_session(MemoryStore::new());

        session.handle(Command::Turn(Direction::Down));
        session.handle(Command::Start);
        session.tick();
        assert_eq!(session.engine().state().snake.head(), Position::new(10, 11));

        session.handle(Command::Turn(Direction::Up));
        session.tick();
        assert_eq!(session.engine().state().snake.head(), Position::new(10, 12));

        session.handle(Command::Stop);
        assert_eq!(session.engine().status(), GameStatus::Paused);
    }

    #[test]
    fn test_latest_frame_keeps_last_view() {
        let engine = GameEngine::with_placer(
            GameConfig::default(),
            Box::new(MemoryStore::new()),
            FoodPlacer::seeded(20, 2),
        );
        let mut session = Session::new(engine, LatestFrame::new());
        session.start();
        session.tick();

        let frame = session.sink();
        assert_eq!(frame.presented(), 3);
        assert_eq!(
            frame.view().map(|v| v.cells[0].pos),
            Some(Position::new(11, 10))
        );
    }
}
