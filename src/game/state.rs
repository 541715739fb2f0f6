use super::action::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Check if the position lies on a square grid of the given size
    pub fn is_within(&self, grid_size: usize) -> bool {
        let size = grid_size as i32;
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }
}

/// The snake in the game
///
/// `direction` is the heading applied on the last tick. `pending` is the
/// heading requested by input, promoted to `direction` at the start of the
/// next tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Direction applied on the last tick
    pub direction: Direction,
    /// Direction that will be applied on the next tick
    pub pending: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        assert!(length > 0, "snake length must be at least 1");

        let (dx, dy) = direction.delta();
        let body = (0..length as i32)
            .map(|i| head.moved_by(-dx * i, -dy * i))
            .collect();

        Self {
            body,
            direction,
            pending: direction,
        }
    }

    /// Build a snake from explicit segments, head first
    pub fn from_segments(body: Vec<Position>, direction: Direction) -> Self {
        assert!(!body.is_empty(), "snake must have at least one segment");
        Self {
            body,
            direction,
            pending: direction,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Queue a direction for the next tick.
    ///
    /// A request for the exact opposite of the applied direction is ignored
    /// and leaves the queued direction untouched. Returns whether the request
    /// was accepted.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.pending = direction;
        true
    }

    /// Promote the queued direction and return the cell the head moves into
    pub fn next_head(&mut self) -> Position {
        self.direction = self.pending;
        self.head().moved_in_direction(self.direction)
    }

    /// Check whether `pos` hits the body.
    ///
    /// The tail only counts when the snake is about to grow, because on a
    /// plain move it is vacated in the same tick.
    pub fn blocks(&self, pos: Position, growing: bool) -> bool {
        let checked = if growing {
            &self.body[..]
        } else {
            &self.body[..self.body.len() - 1]
        };
        checked.contains(&pos)
    }

    /// Push a new head, dropping the tail unless the snake grows
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

impl CollisionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionType::Wall => "wall",
            CollisionType::SelfCollision => "self",
        }
    }
}

/// Lifecycle of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Fresh board, waiting for the first start
    Ready,
    Running,
    /// Stopped by the player, can be resumed
    Paused,
    /// Terminal until restart
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Ready => "Ready",
            GameStatus::Running => "Running",
            GameStatus::Paused => "Paused",
            GameStatus::GameOver => "Game Over",
        }
    }
}

/// Board state of one game
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub grid_size: usize,
    pub status: GameStatus,
    pub steps: u32,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Position, grid_size: usize) -> Self {
        Self {
            snake,
            food,
            grid_size,
            status: GameStatus::Ready,
            steps: 0,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.is_within(self.grid_size)
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.body.contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(10, 10), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.body,
            vec![
                Position::new(10, 10),
                Position::new(9, 10),
                Position::new(8, 10)
            ]
        );
        assert_eq!(snake.tail(), Position::new(8, 10));
        assert_eq!(snake.pending, Direction::Right);
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        let head = snake.next_head();
        snake.advance(head, false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));

        let head = snake.next_head();
        snake.advance(head, true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(7, 5));
        assert_eq!(snake.tail(), Position::new(4, 5));
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        assert!(snake.set_pending_direction(Direction::Up));
        assert!(!snake.set_pending_direction(Direction::Left));
        assert_eq!(snake.pending, Direction::Up);
    }

    #[test]
    fn test_reversal_checked_against_applied_direction() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        // Up then Down before a tick: Down is not opposite of the applied
        // Right, so it replaces the queued Up.
        assert!(snake.set_pending_direction(Direction::Up));
        assert!(snake.set_pending_direction(Direction::Down));
        assert_eq!(snake.pending, Direction::Down);

        let head = snake.next_head();
        assert_eq!(snake.direction, Direction::Down);
        assert_eq!(head, Position::new(5, 6));
    }

    #[test]
    fn test_blocks_excludes_tail_unless_growing() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        let tail = snake.tail();

        assert!(!snake.blocks(tail, false));
        assert!(snake.blocks(tail, true));
        assert!(snake.blocks(Position::new(4, 5), false));
        assert!(!snake.blocks(Position::new(10, 10), true));
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 3),
            Position::new(10, 10),
            20,
        );

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(19, 19)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(20, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 20)));
        assert_eq!(state.status, GameStatus::Ready);
    }

    #[test]
    #[should_panic(expected = "at least one segment")]
    fn test_empty_snake_is_fatal() {
        Snake::from_segments(Vec::new(), Direction::Right);
    }
}
