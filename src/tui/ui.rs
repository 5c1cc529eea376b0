//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, Screen};
use crate::cli::GameMode;
use noughts_core::{Player, Position, Square};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Body
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let help = match app.screen() {
        Screen::ModeSelect { selected } => {
            draw_mode_select(frame, chunks[1], selected);
            "↑/↓ choose  Enter start  q quit"
        }
        Screen::Playing => {
            draw_game(frame, chunks[1], app);
            "arrows move  Enter/1-9 place  r play again  m menu  h hints  q quit"
        }
    };

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_mode_select(frame: &mut Frame, area: Rect, selected: GameMode) {
    let lines: Vec<Line> = [GameMode::Friend, GameMode::Computer]
        .into_iter()
        .enumerate()
        .map(|(i, mode)| {
            let label = format!("{}. {}", i + 1, mode);
            if mode == selected {
                Line::from(Span::styled(
                    format!("> {label} <"),
                    Style::default().fg(Color::Black).bg(Color::White),
                ))
            } else {
                Line::from(Span::raw(label))
            }
        })
        .collect();

    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title("Game mode").borders(Borders::ALL));
    frame.render_widget(menu, center_rect(area, 30, 4));
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(11)])
        .split(area);

    let turn = Paragraph::new(Line::from(vec![
        Span::raw("Turn: "),
        Span::styled(app.turn_label(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("   Mode: {}", app.mode())),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(turn, halves[0]);

    draw_board(frame, halves[1], app);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, chunk, app, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, chunk) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, chunk, app, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let index = pos.to_index();
    let square = app.session().board().get(index).unwrap_or_default();

    let (symbol, base_style) = match square {
        Square::Empty => {
            let hint = app.hints().and_then(|h| h[index]);
            let text = match hint {
                Some(score) => format!("{score:+}"),
                None => (index + 1).to_string(),
            };
            (text, Style::default().fg(Color::DarkGray))
        }
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let winning = app
        .winning_cells()
        .is_some_and(|line| line.contains(&index));
    let style = if winning {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == app.cursor() && !app.session().is_over() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(format!(" {symbol} "), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_mode_select_renders_options() {
        let screen = render(&App::new(false));
        assert!(screen.contains("Play a friend"));
        assert!(screen.contains("Play the computer"));
    }

    #[test]
    fn test_board_renders_marks() {
        let mut app = App::new(false);
        app.start(GameMode::Friend);
        app.handle_key(KeyCode::Char('1'));
        let screen = render(&app);
        assert!(screen.contains(" X "));
        assert!(screen.contains("Turn: O"));
    }
}
