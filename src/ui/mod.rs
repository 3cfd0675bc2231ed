//! Rendering for the newsq TUI.
//!
//! Layout, top to bottom: tab bar, context bar (category picker or search
//! box), story body, footer. The help overlay is drawn last.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Tabs, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::logic::prompt_message;
use crate::state::{AppState, CATEGORIES, LoadPhase, Screen, ScreenState};
use crate::theme::{Theme, theme};

pub mod format;
mod stories;

pub use stories::story_lines;

/// What a screen's body currently shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Nothing requested yet; the screen's prompt.
    Default,
    /// Request in flight.
    Loading,
    /// Stories.
    List,
    /// Empty or error message.
    Message,
}

/// What: Decide what a screen's body shows.
#[must_use]
pub fn visibility(st: &ScreenState) -> Visibility {
    match st.phase {
        LoadPhase::Loading => Visibility::Loading,
        LoadPhase::Delivered if !st.stories.is_empty() => Visibility::List,
        LoadPhase::Failed | LoadPhase::Delivered => Visibility::Message,
        LoadPhase::Idle => Visibility::Default,
    }
}

/// What: Render one full frame.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(if app.screen == Screen::World { 0 } else { 3 }),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_tabs(f, chunks[0], app, &th);
    match app.screen {
        Screen::Browse => render_category_bar(f, chunks[1], app, &th),
        Screen::Search => render_search_box(f, chunks[1], app, &th),
        Screen::World => {}
    }
    render_body(f, chunks[2], app, &th);
    render_footer(f, chunks[3], app, &th);
    if app.show_help {
        render_help(f, area, &th);
    }
}

/// What: Tab bar with the active screen highlighted.
fn render_tabs(f: &mut Frame, area: Rect, app: &AppState, th: &Theme) {
    let titles: Vec<Line> = Screen::ALL
        .iter()
        .map(|s| Line::from(format!(" {} {} ", s.index() + 1, t(s.title_key()))))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.screen.index())
        .style(Style::default().fg(th.subtext0))
        .highlight_style(
            Style::default()
                .fg(th.crust)
                .bg(th.mauve)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("│", Style::default().fg(th.surface2)))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", t("app.name")),
                    Style::default().fg(th.lavender).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface2)),
        );
    f.render_widget(tabs, area);
}

/// What: Category picker shown on the Browse screen.
fn render_category_bar(f: &mut Frame, area: Rect, app: &AppState, th: &Theme) {
    let mut spans = vec![Span::styled("◀ ", Style::default().fg(th.overlay1))];
    for (i, c) in CATEGORIES.iter().enumerate() {
        let style = if app.category == Some(i) {
            Style::default()
                .fg(th.crust)
                .bg(th.sapphire)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.text)
        };
        spans.push(Span::styled(format!(" {} ", c.label), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("▶", Style::default().fg(th.overlay1)));
    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(Span::styled(
                t("app.labels.category"),
                Style::default().fg(th.overlay1),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface2)),
    );
    f.render_widget(bar, area);
}

/// What: Search input box; places the cursor while editing.
fn render_search_box(f: &mut Frame, area: Rect, app: &AppState, th: &Theme) {
    let editing = app.search_editing;
    let title = if editing {
        format!("{} {}", t("app.labels.search"), t("app.labels.editing"))
    } else {
        t("app.labels.search")
    };
    let line = Line::from(vec![
        Span::styled(
            "> ",
            Style::default().fg(if editing { th.sapphire } else { th.overlay1 }),
        ),
        Span::styled(
            app.search_input.clone(),
            Style::default().fg(if editing { th.text } else { th.subtext0 }),
        ),
    ]);
    let input = Paragraph::new(line).block(
        Block::default()
            .title(Span::styled(title, Style::default().fg(th.overlay1)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if editing { th.sapphire } else { th.surface2 })),
    );
    f.render_widget(input, area);
    if editing {
        let cols = u16::try_from(app.search_input.width()).unwrap_or(u16::MAX);
        let right = area.x + area.width.saturating_sub(2);
        let x = (area.x + 3).saturating_add(cols).min(right);
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

/// What: Body area: prompt, loading indicator, story list or message.
fn render_body(f: &mut Frame, area: Rect, app: &mut AppState, th: &Theme) {
    let screen = app.screen;
    let st = app.current_mut();
    let (text, color) = match visibility(st) {
        Visibility::List => {
            stories::render_story_list(f, area, st, th);
            return;
        }
        Visibility::Loading => (t("app.labels.loading"), th.yellow),
        Visibility::Message => (
            st.message.clone().unwrap_or_else(|| t("app.messages.no_results")),
            if st.phase == LoadPhase::Failed {
                th.red
            } else {
                th.subtext0
            },
        ),
        Visibility::Default => (
            st.message
                .clone()
                .unwrap_or_else(|| prompt_message(screen)),
            th.subtext0,
        ),
    };
    let body = Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface2)),
        );
    f.render_widget(body, area);
}

/// What: One-line footer with key hints or a transient notice.
fn render_footer(f: &mut Frame, area: Rect, app: &AppState, th: &Theme) {
    let text = app.notice.clone().unwrap_or_else(|| {
        if app.search_editing {
            t("app.footer.editing")
        } else {
            t("app.footer.keys")
        }
    });
    f.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(th.overlay1))),
        area,
    );
}

/// Help lines in display order.
const HELP_KEYS: [&str; 9] = [
    "app.help.lines.tabs",
    "app.help.lines.category",
    "app.help.lines.search",
    "app.help.lines.submit",
    "app.help.lines.move",
    "app.help.lines.open",
    "app.help.lines.reload",
    "app.help.lines.help",
    "app.help.lines.quit",
];

/// What: Centered key reference overlay.
fn render_help(f: &mut Frame, area: Rect, th: &Theme) {
    let w = area.width.min(64);
    let h = area.height.min(u16::try_from(HELP_KEYS.len()).unwrap_or(0) + 2);
    let rect = Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    };
    let lines: Vec<Line> = HELP_KEYS
        .iter()
        .map(|k| Line::from(Span::styled(t(k), Style::default().fg(th.text))))
        .collect();
    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled(
                    t("app.help.title"),
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.lavender))
                .style(Style::default().bg(th.crust)),
        ),
        rect,
    );
}
