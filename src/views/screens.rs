//! Home, Scan, Rewards, Profile and Game screens.

use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::controllers::app::App;
use crate::models::catalog::{
    AVAILABLE_REWARDS, FEATURED_REWARD, FEATURES, HOME_ACTION, HOME_SUBTITLE, HOME_TITLE, PROFILE,
};
use crate::models::game::{GameOutcome, GamePhase};
use crate::models::scan::{scan_line_position, ScanPhase};
use crate::views::tui::{ACCENT, MUTED};

fn bold(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn button(label: &str) -> Span<'_> {
    Span::styled(format!("[ {} ]", label), Style::default().fg(Color::White).bg(ACCENT))
}

pub fn render_home<B: Backend>(f: &mut Frame<B>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(6), Constraint::Min(0)].as_ref())
        .split(area);

    let header = vec![
        Line::from(Span::styled(HOME_TITLE, bold(ACCENT))),
        Line::from(""),
        Line::from(Span::styled(HOME_SUBTITLE, bold(Color::White))),
        Line::from(""),
        Line::from(button(HOME_ACTION)),
    ];
    f.render_widget(Paragraph::new(header).alignment(Alignment::Center), chunks[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(4), Constraint::Min(0)].as_ref())
        .split(chunks[1]);

    for (row, cards) in rows.iter().zip(FEATURES.chunks(2)) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
            .split(*row);
        for (col, card) in cols.iter().zip(cards) {
            let block = Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(card.title, bold(ACCENT)));
            f.render_widget(
                Paragraph::new(card.description).block(block).wrap(Wrap { trim: true }),
                *col,
            );
        }
    }
}

pub fn render_scan<B: Backend>(f: &mut Frame<B>, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(4)].as_ref())
        .split(area);

    let scan = app.scan();
    let camera = Block::default()
        .borders(Borders::ALL)
        .title("Camera")
        .border_style(Style::default().fg(MUTED));
    let view = camera.inner(chunks[0]);
    f.render_widget(camera, chunks[0]);

    if scan.phase() == ScanPhase::Scanning {
        if let Some(started) = scan.started() {
            let position = scan_line_position(started.elapsed(), app.config().scan.sweep());
            let row = view.y + (position * view.height.saturating_sub(1) as f64).round() as u16;
            let line = Rect::new(view.x, row, view.width, 1.min(view.height));
            f.render_widget(
                Paragraph::new("━".repeat(view.width as usize)).style(Style::default().fg(ACCENT)),
                line,
            );
        }
    }

    let status = match scan.phase() {
        ScanPhase::Idle => vec![
            Line::from("Position the barcode within the frame"),
            Line::from(""),
            Line::from(button("Start Scan")),
        ],
        ScanPhase::Scanning => vec![
            Line::from("Position the barcode within the frame"),
            Line::from(""),
            Line::from(Span::styled("[ Scanning... ]", Style::default().fg(MUTED))),
        ],
        ScanPhase::Complete => vec![
            Line::from(Span::styled("POPMART Figure Detected!", bold(ACCENT))),
            Line::from(""),
            Line::from(Span::styled("Loading game...", Style::default().fg(MUTED))),
        ],
    };
    f.render_widget(Paragraph::new(status).alignment(Alignment::Center), chunks[1]);
}

pub fn render_rewards<B: Backend>(f: &mut Frame<B>, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled("Your Rewards", bold(Color::White))),
        Line::from(""),
        Line::from(Span::styled(FEATURED_REWARD.title, bold(ACCENT))),
        Line::from(Span::styled(FEATURED_REWARD.code, bold(Color::White))),
        Line::from(FEATURED_REWARD.description),
        Line::from(Span::styled(FEATURED_REWARD.valid_until, Style::default().fg(MUTED))),
        Line::from(""),
        Line::from(Span::styled("Available Rewards", bold(Color::White))),
    ];
    for reward in AVAILABLE_REWARDS.iter() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(reward.title, bold(ACCENT))));
        lines.push(Line::from(Span::styled(reward.description, Style::default().fg(Color::Gray))));
    }

    f.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Rewards"))
            .wrap(Wrap { trim: true }),
        area,
    );
}

pub fn render_profile<B: Backend>(f: &mut Frame<B>, area: Rect) {
    let stats: Vec<Span> = PROFILE
        .stats
        .iter()
        .flat_map(|(label, count)| {
            vec![
                Span::styled(count.to_string(), bold(ACCENT)),
                Span::raw(format!(" {}    ", label)),
            ]
        })
        .collect();

    let mut lines = vec![
        Line::from(Span::styled(PROFILE.name, bold(Color::White))),
        Line::from(Span::styled(PROFILE.status, Style::default().fg(MUTED))),
        Line::from(""),
        Line::from(stats),
        Line::from(""),
        Line::from(Span::styled("My Collection", bold(Color::White))),
    ];
    for (series, count) in PROFILE.collection.iter() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", series), bold(ACCENT)),
            Span::raw(format!("{} figures", count)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Log Out", Style::default().fg(Color::Red))));

    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Profile")),
        area,
    );
}

pub fn render_game<B: Backend>(f: &mut Frame<B>, area: Rect, app: &App) {
    let Some(screen) = app.game() else {
        return;
    };
    let game = &screen.game;

    if game.phase() == GamePhase::Over {
        let won = game.outcome() == Some(GameOutcome::Won);
        let lines = vec![
            Line::from(Span::styled("Game Over!", bold(ACCENT))),
            Line::from(""),
            Line::from(format!("Final Score: {}", game.score())),
            Line::from(if won {
                "Congratulations! You won a reward!"
            } else {
                "Try again to win a reward!"
            }),
            Line::from(""),
            Line::from(button(if won { "Claim Reward" } else { "Try Again" })),
        ];
        let block = Block::default().borders(Borders::ALL).title("Bubble Game");
        let inner = block.inner(area);
        f.render_widget(block, area);
        let top = inner.y + inner.height.saturating_sub(lines.len() as u16) / 2;
        let body = Rect::new(inner.x, top, inner.width, inner.bottom().saturating_sub(top));
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)].as_ref())
        .split(area);

    let clock_color = if screen.is_counting_down() { ACCENT } else { MUTED };
    let header = Line::from(vec![
        Span::styled(format!("Score: {}", game.score()), bold(Color::White)),
        Span::raw("    "),
        Span::styled(format!("Time: {}s", game.time_left()), bold(clock_color)),
        Span::styled("    press the key in the bubble, esc to leave", Style::default().fg(MUTED)),
    ]);
    f.render_widget(Paragraph::new(header), chunks[0]);

    let block = Block::default().borders(Borders::ALL);
    let field = block.inner(chunks[1]);
    f.render_widget(block, chunks[1]);

    let bubble = game.bubble();
    let width = 5.min(field.width);
    let x = field.x + (bubble.x * field.width.saturating_sub(width) as f32) as u16;
    let y = field.y + (bubble.y * field.height.saturating_sub(1) as f32) as u16;
    let bubble_area = Rect::new(x, y, width, 1.min(field.height));
    f.render_widget(
        Paragraph::new(format!("( {} )", bubble.key))
            .style(Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD)),
        bubble_area,
    );
}
