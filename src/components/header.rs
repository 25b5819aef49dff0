use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

/// Top bar: application title and the endpoint being administered
pub struct Header;

impl Header {
    /// Returns the height used.
    pub fn render(frame: &mut Frame, area: Rect, title: &str, description: &str) -> Result<u16> {
        let t = theme();
        let header_block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_focused_style())
            .title(title)
            .title_style(t.title_style())
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));

        let inner_area = header_block.inner(area);
        frame.render_widget(header_block, area);

        let description_para = Paragraph::new(description)
            .style(t.muted_style())
            .alignment(Alignment::Center);
        frame.render_widget(description_para, inner_area);

        Ok(area.height)
    }
}
