use super::{
    action::Direction,
    config::GameConfig,
    food::FoodPlacer,
    score::ScoreTracker,
    state::{CollisionType, GameState, GameStatus, Position, Snake},
    view::BoardView,
};
use crate::storage::ScoreStore;

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was not running, nothing changed
    Idle,
    /// The snake moved one cell
    Moved,
    /// The snake moved onto the food and grew
    Ate,
    /// The move was blocked and the game is over
    Collided(CollisionType),
    /// The snake ate the last free cell, no room for new food
    BoardFilled,
}

/// The game engine that owns one session's board and score
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    scores: ScoreTracker,
    food_placer: FoodPlacer,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig, store: Box<dyn ScoreStore>) -> Self {
        let food_placer = FoodPlacer::new(config.grid_size);
        Self::with_placer(config, store, food_placer)
    }

    /// Create an engine with a specific food placer (e.g. seeded)
    pub fn with_placer(
        config: GameConfig,
        store: Box<dyn ScoreStore>,
        mut food_placer: FoodPlacer,
    ) -> Self {
        let state = initial_state(&config, &mut food_placer);
        Self::from_state(config, state, store, food_placer)
    }

    /// Resume from an existing board, keeping its status
    pub fn from_state(
        config: GameConfig,
        state: GameState,
        store: Box<dyn ScoreStore>,
        food_placer: FoodPlacer,
    ) -> Self {
        Self {
            config,
            state,
            scores: ScoreTracker::new(store),
            food_placer,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn score(&self) -> u32 {
        self.scores.score()
    }

    pub fn best_score(&self) -> u32 {
        self.scores.best()
    }

    /// Reset the board to a fresh game. The best score is kept.
    pub fn reset(&mut self) {
        self.state = initial_state(&self.config, &mut self.food_placer);
        self.scores.reset();
    }

    /// Ready or Paused -> Running. Returns false if nothing changed.
    pub fn start(&mut self) -> bool {
        match self.state.status {
            GameStatus::Ready | GameStatus::Paused => {
                self.state.status = GameStatus::Running;
                true
            }
            GameStatus::Running | GameStatus::GameOver => false,
        }
    }

    /// Running -> Paused. Returns false if nothing changed.
    pub fn pause(&mut self) -> bool {
        if self.state.status != GameStatus::Running {
            return false;
        }
        self.state.status = GameStatus::Paused;
        true
    }

    /// Queue a direction for the next tick. Reversals are ignored.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        let accepted = self.state.snake.set_pending_direction(direction);
        if !accepted {
            log::debug!("Ignoring reversal to {}", direction.as_str());
        }
        accepted
    }

    /// Execute one step of the game
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.status != GameStatus::Running {
            return TickOutcome::Idle;
        }

        let new_head = self.state.snake.next_head();
        let will_eat = new_head == self.state.food;

        if let Some(collision_type) = self.check_collision(new_head, will_eat) {
            self.state.status = GameStatus::GameOver;
            log::info!(
                "Game over: {} collision at ({}, {}), score {}",
                collision_type.as_str(),
                new_head.x,
                new_head.y,
                self.scores.score()
            );
            return TickOutcome::Collided(collision_type);
        }

        self.state.snake.advance(new_head, will_eat);
        self.state.steps += 1;

        if !will_eat {
            return TickOutcome::Moved;
        }

        let score = self.scores.record_eat();
        log::debug!("Food eaten, score {}", score);

        match self.food_placer.place(&self.state.snake.body) {
            Some(food) => {
                self.state.food = food;
                TickOutcome::Ate
            }
            None => {
                self.state.status = GameStatus::GameOver;
                log::info!("Game over: board filled, score {}", score);
                TickOutcome::BoardFilled
            }
        }
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, pos: Position, will_eat: bool) -> Option<CollisionType> {
        if !self.state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        if self.state.snake.blocks(pos, will_eat) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Snapshot of the board for rendering
    pub fn view(&self) -> BoardView {
        BoardView::new(
            self.state.grid_size,
            &self.state.snake.body,
            self.state.food,
            self.scores.score(),
            self.scores.best(),
            self.state.steps,
            self.state.status,
        )
    }
}

/// Snake centred on the grid heading right, with food placed off its body
fn initial_state(config: &GameConfig, food_placer: &mut FoodPlacer) -> GameState {
    let center = (config.grid_size / 2) as i32;

    let snake = Snake::new(
        Position::new(center, center),
        Direction::Right,
        config.initial_snake_length,
    );

    // A fresh snake never covers the whole board when the config is valid.
    let food = food_placer
        .place(&snake.body)
        .unwrap_or_else(|| panic!("no free cell for food on a {0}x{0} grid", config.grid_size));

    GameState::new(snake, food, config.grid_size)
}
