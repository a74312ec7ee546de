//! UI rendering for Balloon Words.

use super::canvas_surface::CanvasSurface;
use super::game_common::{
    create_game_layout, info_line, key_hints, render_info_panel_frame, render_notice_overlay,
    render_status_bar,
};
use crate::balloons::{BalloonGame, ClickEvent, GameOverNotice, Surface};
use crate::core::config::GameConfig;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{canvas::Canvas, Paragraph, Wrap},
    Frame,
};

const CONTROLS: [(&str, &str); 3] = [("[Click]", "Pop"), ("[R]", "New game"), ("[Q]", "Quit")];

/// Render the whole game screen. Returns the area the canvas occupies so
/// mouse clicks can be mapped back to canvas coordinates.
pub fn render_balloon_game(
    frame: &mut Frame,
    area: Rect,
    game: &BalloonGame,
    last_event: Option<&ClickEvent>,
) -> Rect {
    let layout = create_game_layout(frame, area, " Balloon Words ");

    render_canvas(frame, layout.content, game);
    render_definition_bar(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game, last_event);

    if let Some(notice) = game.pending_notice {
        render_game_over(frame, layout.content, notice);
    }

    layout.content
}

/// Draw every balloon through the canvas surface.
fn render_canvas(frame: &mut Frame, area: Rect, game: &BalloonGame) {
    if !canvas_is_drawable(area) {
        return;
    }

    let config = &game.config;
    let column_width = config.canvas_width / area.width as f64;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, config.canvas_width])
        .y_bounds([0.0, config.canvas_height])
        .paint(|ctx| {
            let mut surface = CanvasSurface::new(ctx, config.canvas_height, column_width);
            surface.clear_rect(0.0, 0.0, config.canvas_width, config.canvas_height);
            for balloon in &game.balloons {
                balloon.draw(&mut surface);
            }
        });

    frame.render_widget(canvas, area);
}

fn render_definition_bar(frame: &mut Frame, area: Rect, game: &BalloonGame) {
    let status = Line::from(vec![
        Span::styled(
            "Find the word that means: ",
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            game.target.definition,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    render_status_bar(frame, area, status, key_hints(&CONTROLS));
}

fn render_info_panel(
    frame: &mut Frame,
    area: Rect,
    game: &BalloonGame,
    last_event: Option<&ClickEvent>,
) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let mut lines = vec![
        info_line("Score", game.score.to_string(), Color::White),
        info_line("Best", game.best_score.to_string(), Color::Yellow),
        info_line("Games", game.games_played.to_string(), Color::Cyan),
        info_line(
            "Balloons",
            format!("{}/{}", game.remaining(), game.balloons.len()),
            Color::Green,
        ),
        Line::from(""),
    ];

    if let Some((text, color)) = last_event.map(feedback_text) {
        lines.push(Line::from(Span::styled(
            format!(" {}", text),
            Style::default().fg(color),
        )));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// Short message describing what the last click did.
pub fn feedback_text(event: &ClickEvent) -> (String, Color) {
    match event {
        ClickEvent::Popped { word, .. } => {
            (format!("Pop! \"{}\" was right.", word), Color::Green)
        }
        ClickEvent::Missed { word, .. } => (format!("\"{}\" is not the word.", word), Color::Red),
        ClickEvent::GameOver(notice) => (
            format!("Game {} finished.", notice.game_number),
            Color::Yellow,
        ),
    }
}

fn render_game_over(frame: &mut Frame, area: Rect, notice: GameOverNotice) {
    render_notice_overlay(
        frame,
        area,
        "GAME OVER!",
        &format!("Final Score: {}", notice.final_score),
        Color::Yellow,
    );
}

/// Whether the canvas got at least one terminal cell. The game refuses to
/// start, and holds the balloons still, while this is false.
pub fn canvas_is_drawable(area: Rect) -> bool {
    area.width > 0 && area.height > 0
}

/// Map a terminal cell inside `area` to the canvas point at the cell's center.
/// `None` for cells outside the canvas.
pub fn cell_to_canvas(
    area: Rect,
    column: u16,
    row: u16,
    config: &GameConfig,
) -> Option<(f64, f64)> {
    if !canvas_is_drawable(area) {
        return None;
    }
    let inside_x = column >= area.x && column < area.right();
    let inside_y = row >= area.y && row < area.bottom();
    if !(inside_x && inside_y) {
        return None;
    }

    let col_offset = (column - area.x) as f64 + 0.5;
    let row_offset = (row - area.y) as f64 + 0.5;
    Some((
        col_offset * config.canvas_width / area.width as f64,
        row_offset * config.canvas_height / area.height as f64,
    ))
}
