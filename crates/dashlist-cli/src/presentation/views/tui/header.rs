use dashlist_engine::ListScreen;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Title, create button, notices and filter bar.
pub struct HeaderView<'a> {
    screen: &'a ListScreen,
}

impl<'a> HeaderView<'a> {
    pub fn new(screen: &'a ListScreen) -> Self {
        Self { screen }
    }

    /// Rows needed to draw the header, borders included.
    pub fn height(screen: &ListScreen) -> u16 {
        let mut lines = 1;
        if screen.limit_alert.is_some() || screen.error.is_some() {
            lines += 1;
        }
        if screen.filter_bar.is_some() {
            lines += 1;
        }
        lines + 2
    }

    fn title_line(&self) -> Line<'a> {
        let screen = self.screen;
        let mut spans = vec![
            Span::styled(format!("< {}  ", screen.back), Style::default().fg(Color::DarkGray)),
            Span::styled(
                screen.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];
        if let Some(counter) = &screen.limit_text {
            spans.push(Span::raw(format!(" ({})", counter)));
        }

        let create_style = if screen.create.enabled {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("[{}]", screen.create.label), create_style));
        Line::from(spans)
    }

    fn notice_line(&self) -> Option<Line<'a>> {
        if let Some(error) = &self.screen.error {
            return Some(Line::from(Span::styled(
                format!("! {}", error),
                Style::default().fg(Color::Red),
            )));
        }
        self.screen.limit_alert.as_ref().map(|alert| {
            Line::from(Span::styled(
                format!("! {}: {}", alert.title, alert.body),
                Style::default().fg(Color::Yellow),
            ))
        })
    }

    fn filter_line(&self) -> Option<Line<'a>> {
        let bar = self.screen.filter_bar.as_ref()?;

        let mut spans = Vec::new();
        for tab in &bar.tabs {
            let style = if tab.current {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            spans.push(Span::styled(tab.label.clone(), style));
            spans.push(Span::raw("  "));
        }

        spans.push(Span::raw("| "));
        if bar.search.is_empty() {
            spans.push(Span::styled(
                bar.search_placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::raw(format!("\"{}\"", bar.search)));
        }

        for field in &bar.fields {
            let active: Vec<&str> = field
                .choices
                .iter()
                .filter(|choice| choice.active)
                .map(|choice| choice.label.as_str())
                .collect();
            if !active.is_empty() {
                spans.push(Span::raw(format!("  {}: {}", field.label, active.join(", "))));
            }
        }

        Some(Line::from(spans))
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![self.title_line()];
        lines.extend(self.notice_line());
        lines.extend(self.filter_line());

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
