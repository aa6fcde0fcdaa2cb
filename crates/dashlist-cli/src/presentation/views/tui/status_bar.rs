use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::BrowseStatusViewModel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a BrowseStatusViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a BrowseStatusViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        let status_line = Line::from(vec![
            Span::raw(format!(
                "{}: {} of {} ",
                self.model.list, self.model.shown, self.model.total
            )),
            Span::raw("| "),
            Span::styled(self.model.message.as_str(), Style::default().fg(color)),
        ]);
        Paragraph::new(status_line).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help_line = Line::from(vec![
            Span::styled("[q]", key),
            Span::raw("uit "),
            Span::styled("[⏎]", key),
            Span::raw("open "),
            Span::styled("[d]", key),
            Span::raw("elete "),
            Span::styled("[/]", key),
            Span::raw("search "),
            Span::styled("[t]", key),
            Span::raw("ab "),
            Span::styled("[n/p]", key),
            Span::raw("page "),
            Span::styled("[1-9]", key),
            Span::raw("sort"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
