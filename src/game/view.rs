use super::state::{GameStatus, Position};

/// One occupied snake cell as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub pos: Position,
    pub is_head: bool,
}

/// Text drawn on top of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub title: &'static str,
    pub hint: Option<&'static str>,
}

impl Overlay {
    fn for_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Ready => Some(Self {
                title: "Snake",
                hint: Some("Press Enter to start"),
            }),
            GameStatus::Running => None,
            GameStatus::Paused => Some(Self {
                title: "Paused",
                hint: Some("Press Enter to resume"),
            }),
            GameStatus::GameOver => Some(Self {
                title: "Game Over",
                hint: Some("Press R to play again"),
            }),
        }
    }
}

/// Everything a renderer needs to redraw the whole surface for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    pub grid_size: usize,
    /// Snake cells, head first
    pub cells: Vec<CellView>,
    pub food: Position,
    pub score: u32,
    pub best_score: u32,
    pub steps: u32,
    pub status: GameStatus,
    pub game_over: bool,
    pub overlay: Option<Overlay>,
}

impl BoardView {
    pub fn new(
        grid_size: usize,
        snake: &[Position],
        food: Position,
        score: u32,
        best_score: u32,
        steps: u32,
        status: GameStatus,
    ) -> Self {
        let cells = snake
            .iter()
            .enumerate()
            .map(|(i, &pos)| CellView { pos, is_head: i == 0 })
            .collect();

        Self {
            grid_size,
            cells,
            food,
            score,
            best_score,
            steps,
            status,
            game_over: status == GameStatus::GameOver,
            overlay: Overlay::for_status(status),
        }
    }

    /// What occupies `pos`, for renderers that walk the grid row by row
    pub fn cell_at(&self, pos: Position) -> Option<CellView> {
        self.cells.iter().find(|cell| cell.pos == pos).copied()
    }
}
