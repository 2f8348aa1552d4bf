use std::io;
use ratatui::{
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    layout::{Alignment, Layout, Constraint, Direction, Rect},
    style::{Style, Color, Modifier},
    Terminal, Frame,
    text::Line,
    prelude::Span,
};
use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    execute,
};

use crate::controllers::app::{Alert, App};
use crate::controllers::navigation::{Route, Tab};
use crate::views::{community, screens};
use crate::views::widgets::centered_rect;

pub const ACCENT: Color = Color::Rgb(0xFF, 0x47, 0x85);
pub const MUTED: Color = Color::Rgb(0x6B, 0x72, 0x80);

pub fn setup_terminal() -> io::Result<Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

pub fn restore_terminal(terminal: &mut Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

pub fn render_ui<B: ratatui::backend::Backend>(f: &mut Frame<B>, app: &mut App) {
    let size = f.size();

    match app.route() {
        Route::Game => screens::render_game(f, size, app),
        Route::Tab(tab) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(0),
                    Constraint::Length(1),
                ].as_ref())
                .split(size);

            render_tab_bar(f, chunks[0], app.active_tab());
            match tab {
                Tab::Home => screens::render_home(f, chunks[1]),
                Tab::Scan => screens::render_scan(f, chunks[1], app),
                Tab::Rewards => screens::render_rewards(f, chunks[1]),
                Tab::Community => community::render_feed(f, chunks[1], app),
                Tab::Profile => screens::render_profile(f, chunks[1]),
            }
            render_help(f, chunks[2], tab);

            if tab == Tab::Community {
                community::render_dialogs(f, size, app);
            }
        }
    }

    if let Some(alert) = app.alert() {
        render_alert(f, size, alert);
    }
}

fn render_tab_bar<B: ratatui::backend::Backend>(f: &mut Frame<B>, area: Rect, active: Tab) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("POPMART"))
        .select(active.index())
        .style(Style::default().fg(MUTED))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

    f.render_widget(tabs, area);
}

fn render_help<B: ratatui::backend::Backend>(f: &mut Frame<B>, area: Rect, tab: Tab) {
    let keys = match tab {
        Tab::Home => "enter scan your toy",
        Tab::Scan => "enter start scan",
        Tab::Community => "j/k move  enter open  +/- vote  n new post",
        Tab::Rewards | Tab::Profile => "",
    };
    let line = Line::from(vec![
        Span::styled(keys, Style::default().fg(Color::Gray)),
        Span::styled("  tab/1-5 switch  q quit", Style::default().fg(MUTED)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_alert<B: ratatui::backend::Backend>(f: &mut Frame<B>, size: Rect, alert: &Alert) {
    let area = centered_rect(50, 7, size);
    let block = Block::default()
        .title(Span::styled(alert.title.as_str(), Style::default().add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));

    let text = vec![
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from(Span::styled("[Enter] OK", Style::default().fg(ACCENT))),
    ];

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use tokio::sync::mpsc;

    use super::*;
    use crate::models::image::DirectoryPicker;
    use crate::models::time::SystemClock;
    use crate::models::{Config, FeedStore, SeedRepository};

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app_with_picker(start: Tab, picker: DirectoryPicker) -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        let feed = FeedStore::new(Box::new(SeedRepository), Box::new(SystemClock));
        App::new(Config::default(), feed, Box::new(picker), tx, start)
    }

    fn app(start: Tab) -> App {
        app_with_picker(start, DirectoryPicker::new(None))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn renders_every_tab() {
        for tab in Tab::ALL {
            let screen = render(&mut app(tab));
            assert!(screen.contains("Community"), "tab bar missing on {:?}", tab);
        }
        assert!(render(&mut app(Tab::Home)).contains("Welcome to POPMART"));
        assert!(render(&mut app(Tab::Rewards)).contains("POPMART2024"));
        assert!(render(&mut app(Tab::Profile)).contains("Sarah Parker"));
    }

    #[test]
    fn community_lists_seed_posts() {
        let screen = render(&mut app(Tab::Community));
        assert!(screen.contains("My Limited Edition POPMART Figurine!"));
        assert!(screen.contains("My DIMOOOOOOO"));
    }

    #[test]
    fn detail_dialog_and_alert_are_drawn() {
        let mut app = app(Tab::Community);
        press(&mut app, KeyCode::Enter);

        let screen = render(&mut app);
        assert!(screen.contains("Posted by PopMartLover"));
        assert!(screen.contains("[Enter] Post  [Esc] Close"));

        press(&mut app, KeyCode::Enter);
        let screen = render(&mut app);
        assert!(screen.contains("Empty Comment"));
        assert!(screen.contains("Please write something before posting."));
    }

    #[test]
    fn compose_dialog_and_empty_post_alert_are_drawn() {
        let mut app = app(Tab::Community);
        press(&mut app, KeyCode::Char('n'));
        assert!(render(&mut app).contains("Create Post"));

        press(&mut app, KeyCode::Enter);
        assert!(render(&mut app).contains("Empty Post"));
    }

    #[test]
    fn picker_dialog_lists_images() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("molly.png")).unwrap();
        let mut app = app_with_picker(
            Tab::Community,
            DirectoryPicker::new(Some(dir.path().to_path_buf())),
        );

        press(&mut app, KeyCode::Char('n'));
        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));

        let screen = render(&mut app);
        assert!(screen.contains("Choose Image"));
        assert!(screen.contains("molly.png"));
    }
}
