//! Shared UI building blocks: framed layout, status bar, info panel, overlay.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width of the info column, borders included.
const INFO_PANEL_WIDTH: u16 = 24;
/// The canvas keeps at least this many rows before the status bar is squeezed.
const CANVAS_MIN_HEIGHT: u16 = 8;

/// Screen regions inside the game frame.
pub struct GameLayout {
    pub content: Rect,
    /// Two rows under the canvas
    pub status_bar: Rect,
    pub info_panel: Rect,
}

/// Draw the titled outer frame and carve its inside into the canvas, the
/// status bar below it and the info column on the right.
pub fn create_game_layout(frame: &mut Frame, area: Rect, title: &str) -> GameLayout {
    let outer = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = outer.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(outer, area);

    let columns = Layout::horizontal([Constraint::Min(20), Constraint::Length(INFO_PANEL_WIDTH)])
        .split(inner);
    let rows = Layout::vertical([Constraint::Min(CANVAS_MIN_HEIGHT), Constraint::Length(2)])
        .split(columns[0]);

    GameLayout {
        content: rows[0],
        status_bar: rows[1],
        info_panel: columns[1],
    }
}

/// `[key] action` pairs on one line.
pub fn key_hints<'a>(hints: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for &(key, action) in hints {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Status message over key hints, both centered.
pub fn render_status_bar<'a>(frame: &mut Frame, area: Rect, status: Line<'a>, hints: Line<'a>) {
    let bar = Paragraph::new(vec![status, hints]).alignment(Alignment::Center);
    frame.render_widget(bar, area);
}

/// Render the " Info " frame and return its inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// A `label: value` line for the info panel.
pub fn info_line(label: &str, value: String, value_color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(
            value,
            Style::default()
                .fg(value_color)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Render a centered modal with a title, a message and "[Press any key]".
pub fn render_notice_overlay(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    color: Color,
) {
    let width = 40u16.min(area.width);
    let height = 7u16.min(area.height);
    let modal = centered_rect(area, width, height);

    frame.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Press any key]",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// A `width` x `height` rect centered in `area`, clipped to it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(area, 40, 10), Rect::new(30, 15, 40, 10));
    }

    #[test]
    fn test_centered_rect_clips_to_area() {
        let area = Rect::new(5, 5, 20, 4);
        assert_eq!(centered_rect(area, 40, 10), area);
    }

    #[test]
    fn test_key_hints_spacing() {
        let line = key_hints(&[("[R]", "New game"), ("[Q]", "Quit")]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[R] New game  [Q] Quit");
        assert!(key_hints(&[]).spans.is_empty());
    }

    #[test]
    fn test_layout_regions() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut regions = None;
        terminal
            .draw(|frame| {
                let area = frame.size();
                let layout = create_game_layout(frame, area, " Test ");
                regions = Some((layout.content, layout.status_bar, layout.info_panel));
            })
            .unwrap();
        let (content, status_bar, info_panel) = regions.unwrap();

        assert_eq!(info_panel.width, INFO_PANEL_WIDTH);
        assert_eq!(info_panel.height, 28);
        assert_eq!(status_bar.height, 2);
        assert_eq!(status_bar.y, content.bottom());
        assert_eq!(content, Rect::new(1, 1, 98 - INFO_PANEL_WIDTH, 26));
    }

    #[test]
    fn test_info_line_spans() {
        let line = info_line("Score", "30".to_string(), Color::White);
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].content, " Score: ");
        assert_eq!(line.spans[1].content, "30");
    }
}
