use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use crate::i18n::t;
use crate::state::{ScreenState, Story};
use crate::theme::Theme;
use crate::util::truncate_to_width;

use super::format::{clean_text, relative_time, title_case};

/// What: Build the display lines of one story row.
///
/// Inputs:
/// - `story`: Story to render
/// - `now`: Reference time for the relative timestamp
/// - `width`: Usable columns; longer lines are truncated
/// - `th`: Palette
///
/// Output:
/// - Section and time, headline, then trail text and byline when present.
#[must_use]
pub fn story_lines(story: &Story, now: DateTime<Utc>, width: usize, th: &Theme) -> Vec<Line<'static>> {
    let section = title_case(&story.section_name);
    let when = relative_time(&story.published, now).unwrap_or_default();
    let mut lines = vec![Line::from(vec![
        Span::styled(
            truncate_to_width(&section, width.saturating_sub(when.len() + 2)),
            Style::default().fg(th.sapphire),
        ),
        Span::raw("  "),
        Span::styled(when, Style::default().fg(th.overlay1)),
    ])];
    lines.push(Line::from(Span::styled(
        truncate_to_width(&clean_text(story.display_headline()), width),
        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
    )));
    let trail = clean_text(&story.trail_text);
    if !trail.is_empty() {
        lines.push(Line::from(Span::styled(
            truncate_to_width(&trail, width),
            Style::default().fg(th.subtext0),
        )));
    }
    let byline = clean_text(&story.byline);
    if !byline.is_empty() {
        lines.push(Line::from(Span::styled(
            truncate_to_width(&byline, width),
            Style::default()
                .fg(th.overlay2)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    lines.push(Line::raw(""));
    lines
}

/// What: Render a screen's story list with its selection.
pub fn render_story_list(f: &mut Frame, area: Rect, st: &mut ScreenState, th: &Theme) {
    let now = Utc::now();
    let width = usize::from(area.width.saturating_sub(4));
    let items: Vec<ListItem> = st
        .stories
        .iter()
        .map(|s| ListItem::new(story_lines(s, now, width, th)))
        .collect();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(
                    format!("{} ({})", t("app.labels.stories"), st.stories.len()),
                    Style::default().fg(th.overlay1),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface2)),
        )
        .highlight_style(Style::default().bg(th.surface1))
        .highlight_symbol("▌ ");
    f.render_stateful_widget(list, area, &mut st.list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Story {
        Story {
            id: "world/1".into(),
            section_id: "world".into(),
            section_name: "world news".into(),
            published: "2025-10-11T10:00:00Z".into(),
            title: "Web title".into(),
            headline: String::new(),
            byline: "<a href=\"/profile/x\">Jane Doe</a>".into(),
            trail_text: "Talks <strong>resume</strong>".into(),
            web_url: "https://www.theguardian.com/world/1".into(),
            api_url: "https://content.guardianapis.com/world/1".into(),
        }
    }

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    /// What: A row shows section, time, fallback headline, trail text and byline.
    fn row_contents() {
        let now = Utc
            .with_ymd_and_hms(2025, 10, 11, 12, 0, 0)
            .single()
            .expect("date");
        let lines = story_lines(&sample(), now, 80, &Theme::default());
        assert_eq!(plain(&lines[0]), "World News  2 hours ago");
        assert_eq!(plain(&lines[1]), "Web title");
        assert_eq!(plain(&lines[2]), "Talks resume");
        assert_eq!(plain(&lines[3]), "Jane Doe");
    }

    #[test]
    fn empty_optional_fields_are_skipped() {
        let mut s = sample();
        s.trail_text.clear();
        s.byline.clear();
        s.published = "garbage".into();
        let lines = story_lines(&s, Utc::now(), 80, &Theme::default());
        assert_eq!(lines.len(), 3);
        assert_eq!(plain(&lines[0]), "World News  ");
    }
}
