//! Stateless UI rendering for the terminal game.

use noughts_core::{GameMachine, GameStatus, Mark, Phase, Position, Square, rules::winning_line};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::{App, NameField};
use crate::messages::{DRAW_BODY, DRAW_TITLE, WIN_BODY, status_line, win_title};

const TITLE: &str = "Noughts - Tic Tac Toe";

/// Renders the whole screen for the app's current phase.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.game().phase() {
        Phase::NotStarted => draw_name_form(frame, app),
        Phase::InProgress => draw_game(frame, app),
        Phase::Finished => {
            draw_game(frame, app);
            draw_result_dialog(frame, app.game());
        }
    }
}

fn draw_name_form(frame: &mut Frame, app: &App) {
    let area = center_rect(frame.area(), 50, 15);
    frame.render_widget(Block::default().borders(Borders::ALL), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(3), // Player X
            Constraint::Length(3), // Player O
            Constraint::Length(2), // Error
            Constraint::Min(1),    // Help
        ])
        .split(area);

    let title = Paragraph::new("Enter Player Names")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_name_input(frame, chunks[1], "Player X's Name", app.name_x(), *app.focus() == NameField::X);
    draw_name_input(frame, chunks[2], "Player O's Name", app.name_o(), *app.focus() == NameField::O);

    if let Some(error) = app.form_error() {
        let error = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(error, chunks[3]);
    }

    let help = Paragraph::new("Tab: Switch field | Enter: Start Game | Esc: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_name_input(frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let (text, border) = if focused {
        (format!("{value}_"), Style::default().fg(Color::Yellow))
    } else {
        (value.to_string(), Style::default().fg(Color::DarkGray))
    };
    let input = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title.to_string()),
    );
    frame.render_widget(input, area);
}

fn draw_game(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app.game(), *app.cursor());

    let mut status = vec![Span::styled(
        status_line(app.game()),
        Style::default().fg(Color::Yellow),
    )];
    if let Some(hint) = app.hint() {
        status.push(Span::styled(
            format!("  ({hint})"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let status = Paragraph::new(Line::from(status))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("Arrows: Move | Enter/Space or 1-9: Place | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, game: &GameMachine, cursor: Position) {
    let board_area = center_rect(area, 38, 11);
    let highlight = winning_line(game.board());
    let show_cursor = game.phase() == Phase::InProgress;

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

    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(row_area);

        for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            let Some(pos) = Position::from_index(row * 3 + col) else {
                continue;
            };
            let highlighted = highlight.is_some_and(|line| line.contains(&pos));
            let selected = show_cursor && pos == cursor;
            draw_cell(frame, cell_area, game.board().get(pos), pos, selected, highlighted);
        }
        for sep in [cols[1], cols[3]] {
            frame.render_widget(
                Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray)),
                sep,
            );
        }
    }
    for sep in [rows[1], rows[3]] {
        frame.render_widget(
            Paragraph::new("─".repeat(38)).style(Style::default().fg(Color::DarkGray)),
            sep,
        );
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    square: Square,
    pos: Position,
    selected: bool,
    highlighted: bool,
) {
    let (symbol, base_style) = match square {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if selected {
        base_style.bg(Color::White).fg(Color::Black)
    } else if highlighted {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {symbol} "), style)),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_result_dialog(frame: &mut Frame, game: &GameMachine) {
    let (title, body, color) = match game.status() {
        GameStatus::Won { winner, .. } => (win_title(winner), WIN_BODY, Color::Green),
        GameStatus::Draw => (DRAW_TITLE.to_string(), DRAW_BODY, Color::Yellow),
        GameStatus::InProgress => return,
    };

    let area = center_rect(frame.area(), 44, 8);
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(body),
        Line::from(""),
        Line::from(Span::styled(
            "[R] Restart Game   [Q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)));
    frame.render_widget(dialog, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
