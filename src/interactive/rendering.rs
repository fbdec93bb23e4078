//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::verdict_tiles;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE SIEVE - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30), // Current guess
            Constraint::Percentage(35), // Candidates
            Constraint::Percentage(35), // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(guess) = &app.current_guess else {
        let text = if app.input_mode == InputMode::Finished {
            "Game over"
        } else {
            "No suggestion available"
        };
        f.render_widget(Paragraph::new(text).block(block), area);
        return;
    };

    let source = if app.session.in_opening() {
        "opening word"
    } else {
        "random pick from the remaining words"
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Suggested: "),
            Span::styled(
                guess.text().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Source:    {source}")),
        Line::from(format!(
            "Turn:      {} of {}",
            app.session.guesses_used() + 1,
            crate::solver::MAX_GUESSES
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let population = app.session.population();

    let content = if population.is_empty() {
        vec![Line::from("No words remain")]
    } else if population.len() <= 12 {
        let mut lines = vec![Line::from("Remaining:")];
        for word in population {
            lines.push(Line::from(Span::styled(
                format!("  • {}", word.text().to_uppercase()),
                Style::default().fg(Color::Green),
            )));
        }
        lines
    } else {
        let preview: Vec<String> = population
            .iter()
            .take(8)
            .map(|w| w.text().to_uppercase())
            .collect();
        vec![
            Line::from(format!("{} words remaining", population.len())),
            Line::from(format!("e.g. {} …", preview.join(" "))),
        ]
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Candidates ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .rev()
        .take(6)
        .map(|(i, turn)| {
            ListItem::new(format!(
                "{}: {} {} {} → {}",
                i + 1,
                turn.guess.text().to_uppercase(),
                verdict_tiles(&turn.verdict),
                turn.population_before,
                turn.population_after
            ))
        })
        .collect();

    let list = List::new(items).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Narrowing gauge
            Constraint::Percentage(45), // Constraints
            Constraint::Min(3),         // Messages
        ])
        .split(area);

    render_narrowing(f, app, chunks[0]);
    render_constraints(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_narrowing(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.words().len();
    let remaining = app.population_count();
    let ruled_out = total.saturating_sub(remaining);
    let percent = if total == 0 {
        0
    } else {
        (ruled_out * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Ruled Out ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{remaining}/{total} words remain"));

    f.render_widget(gauge, area);
}

fn render_constraints(f: &mut Frame, app: &App, area: Rect) {
    let store = app.session.store();

    let letters = |list: Vec<String>| {
        if list.is_empty() {
            "-".to_string()
        } else {
            list.join(" ")
        }
    };

    let misplaced: Vec<String> = store
        .misplaced()
        .iter()
        .map(|&(letter, pos)| format!("{}@{pos}", char::from(letter)))
        .collect();
    let excluded: Vec<String> = store
        .excluded_letters()
        .into_iter()
        .map(|letter| char::from(letter).to_string())
        .collect();

    let content = vec![
        Line::from(vec![
            Span::raw("Pattern:   "),
            Span::styled(
                store.known_pattern().to_uppercase(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Elsewhere: "),
            Span::styled(letters(misplaced), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::raw("Excluded:  "),
            Span::styled(letters(excluded), Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Constraints ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Finished => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Feedback => (
            " Enter Feedback (0/1/2, G/Y/-, or emojis; 'solved') | TAB for manual word ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ManualWord => (
            " Enter Word to Try (5 letters) | ESC to cancel ",
            app.manual_word.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let opening = Paragraph::new(format!("Openers: {}", app.session.opening().len()))
        .alignment(Alignment::Center);
    f.render_widget(opening, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let remaining = Paragraph::new(format!("Words: {}", app.population_count()))
        .alignment(Alignment::Center);
    f.render_widget(remaining, chunks[2]);

    let help_text = if app.input_mode == InputMode::Finished {
        "q: Quit | n: New Game"
    } else {
        "q: Quit | n: New | Enter: Submit | TAB: Manual"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
