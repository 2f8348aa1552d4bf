use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::controllers::app::App;
use crate::controllers::community::{ComposeForm, DetailView, PickerView};
use crate::models::time::time_posted;
use crate::models::Post;
use crate::views::tui::{ACCENT, MUTED};
use crate::views::widgets::centered_rect;

fn vote_style(votes: i64) -> Style {
    match votes {
        v if v > 0 => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        v if v < 0 => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        _ => Style::default(),
    }
}

fn post_item(post: &Post) -> ListItem<'_> {
    let title = Line::from(Span::styled(
        post.title.as_str(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));

    let mut footer = vec![
        Span::raw("▲ "),
        Span::styled(post.votes.to_string(), vote_style(post.votes)),
        Span::raw(" ▼"),
    ];
    if let Some(image) = &post.image {
        footer.push(Span::styled(format!("   [image: {}]", image), Style::default().fg(MUTED)));
    }

    ListItem::new(vec![
        title,
        Line::from(post.content.as_str()),
        Line::from(footer),
        Line::from(""), // spacing between posts
    ])
}

pub fn render_feed<B: Backend>(f: &mut Frame<B>, area: Rect, app: &mut App) {
    let (feed, screen) = app.community_parts();
    let block = Block::default().title("Community").borders(Borders::ALL);

    if feed.is_empty() {
        f.render_widget(Paragraph::new("No posts yet. Create one!").block(block), area);
        return;
    }

    let items: Vec<ListItem> = feed.posts().iter().map(post_item).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut screen.cursor.state);
}

/// Draws whichever dialogs are open on top of the feed.
pub fn render_dialogs<B: Backend>(f: &mut Frame<B>, size: Rect, app: &mut App) {
    let now = app.feed().now();
    let (_, screen) = app.community_parts();

    if let Some(form) = &screen.compose {
        render_compose(f, size, form);
    }
    if let Some(picker) = screen.picker.as_mut() {
        render_picker(f, size, picker);
    }
    if let Some(view) = &screen.detail {
        render_detail(f, size, view, now);
    }
}

fn render_compose<B: Backend>(f: &mut Frame<B>, size: Rect, form: &ComposeForm) {
    let area = centered_rect(70, 12, size);
    let block = Block::default()
        .title("Create Post")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));

    let text = if form.text.value().is_empty() {
        Line::from(Span::styled("Show off your POPMART figurine...", Style::default().fg(MUTED)))
    } else {
        Line::from(format!("{}▏", form.text.value()))
    };
    let image = match &form.image {
        Some(image) => Line::from(vec![Span::raw("Image: "), Span::styled(image.to_string(), Style::default().fg(ACCENT))]),
        None => Line::from(Span::styled("No image", Style::default().fg(MUTED))),
    };

    let lines = vec![
        text,
        Line::from(""),
        image,
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter] Post", Style::default().fg(ACCENT)),
            Span::raw("   "),
            Span::raw("[Ctrl-U] Upload Image"),
            Span::raw("   "),
            Span::styled("[Esc] Cancel", Style::default().fg(MUTED)),
        ]),
    ];

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
}

fn render_picker<B: Backend>(f: &mut Frame<B>, size: Rect, picker: &mut PickerView) {
    let area = centered_rect(50, 14, size);
    let block = Block::default()
        .title("Choose Image")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));

    f.render_widget(Clear, area);
    if picker.images.is_empty() {
        f.render_widget(Paragraph::new("No images found.").block(block), area);
        return;
    }

    let items: Vec<ListItem> = picker
        .images
        .iter()
        .map(|image| ListItem::new(image.to_string()))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(ACCENT).fg(Color::White))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut picker.cursor.state);
}

fn render_detail<B: Backend>(f: &mut Frame<B>, size: Rect, view: &DetailView, now: i64) {
    let area = centered_rect(80, size.height.saturating_sub(4), size);
    let detail = &view.detail;
    let block = Block::default()
        .title(Span::styled(detail.post.title.as_str(), Style::default().add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));
    let inner = block.inner(area);

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)].as_ref())
        .split(inner);

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("Posted by {}", detail.author), Style::default().fg(Color::Cyan)),
        Span::styled(format!("  {}", detail.time_posted), Style::default().fg(MUTED)),
    ])];
    if let Some(image) = &detail.post.image {
        lines.push(Line::from(Span::styled(format!("[image: {}]", image), Style::default().fg(MUTED))));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(detail.description.as_str()));
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "{} votes   {} comments",
        detail.post.votes,
        detail.comments.len()
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Comments", Style::default().add_modifier(Modifier::BOLD))));

    for comment in &detail.comments {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(comment.author.as_str(), Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", time_posted(comment.timestamp, now)), Style::default().fg(MUTED)),
        ]));
        lines.push(Line::from(comment.text.as_str()));
        lines.push(Line::from(Span::styled(format!("♥ {}", comment.likes), Style::default().fg(MUTED))));
    }

    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).scroll((view.scroll, 0)),
        chunks[0],
    );

    let input = if view.comment.value().is_empty() {
        Span::styled("Write a comment...", Style::default().fg(MUTED))
    } else {
        Span::raw(format!("{}▏", view.comment.value()))
    };
    f.render_widget(
        Paragraph::new(Line::from(input)).block(
            Block::default()
                .borders(Borders::ALL)
                .title("[Enter] Post  [Esc] Close"),
        ),
        chunks[1],
    );
}
