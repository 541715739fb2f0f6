use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{BoardView, GameStatus, Overlay, Position};

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, view: &BoardView) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(view);
        frame.render_widget(stats, chunks[0]);

        // Two terminal columns per cell, plus the border
        let grid_area = fit_rect(
            chunks[1],
            (view.grid_size * 2 + 2) as u16,
            (view.grid_size + 2) as u16,
        );
        frame.render_widget(self.render_grid(view), grid_area);

        if let Some(overlay) = &view.overlay {
            let overlay_area = fit_rect(grid_area, 30, 7);
            frame.render_widget(Clear, overlay_area);
            frame.render_widget(self.render_overlay(overlay, view), overlay_area);
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, view: &BoardView) -> Paragraph<'_> {
        let mut lines = Vec::with_capacity(view.grid_size);

        for y in 0..view.grid_size {
            let mut spans = Vec::with_capacity(view.grid_size);

            for x in 0..view.grid_size {
                let pos = Position::new(x as i32, y as i32);

                let cell = match view.cell_at(pos) {
                    Some(cell) if cell.is_head => Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Some(_) => Span::styled("□ ", Style::default().fg(Color::Green)),
                    None if pos == view.food => Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                    None => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let border_color = if view.game_over {
            Color::Red
        } else {
            Color::White
        };

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(border_color))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, view: &BoardView) -> Paragraph<'_> {
        let status_color = match view.status {
            GameStatus::Ready => Color::Gray,
            GameStatus::Running => Color::Green,
            GameStatus::Paused => Color::Yellow,
            GameStatus::GameOver => Color::Red,
        };

        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                view.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                view.best_score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Moves: ", Style::default().fg(Color::Yellow)),
            Span::styled(view.steps.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled(view.status.as_str(), Style::default().fg(status_color)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_overlay(&self, overlay: &Overlay, view: &BoardView) -> Paragraph<'_> {
        let title_color = if view.game_over {
            Color::Red
        } else {
            Color::Yellow
        };

        let mut text = vec![Line::from(vec![Span::styled(
            overlay.title,
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )])];

        if view.game_over {
            text.push(Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    view.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        } else {
            text.push(Line::from(""));
        }

        if let Some(hint) = overlay.hint {
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(hint, Style::default().fg(Color::Gray))));
        }

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(title_color)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(" start | "),
            Span::styled("P", Style::default().fg(Color::Yellow)),
            Span::raw(" pause | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Centre a `width` x `height` box inside `area`, shrinking it to fit
fn fit_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
