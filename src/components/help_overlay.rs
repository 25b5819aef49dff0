//! Help overlay listing the active keybindings.

use crate::keymap::Keymap;
use crate::styles::theme;
use crate::utils::center_popup;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) -> Result<()> {
        let t = theme();
        let popup_area = center_popup(area, 80, 85);
        frame.render_widget(Clear, popup_area);

        let title = format!(" Atalhos - preset {} ", keymap.preset.name());
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center)
            .border_style(t.border_focused_style());
        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(2)]).split(inner_area);

        let mut lines: Vec<Line> = Vec::new();
        let mut current_category = "";
        for binding in keymap.all_bindings() {
            let category = binding.action.category();
            if category != current_category {
                if !current_category.is_empty() {
                    lines.push(Line::from(""));
                }
                lines.push(Line::from(Span::styled(
                    format!("  {}", category),
                    t.title_style().add_modifier(Modifier::UNDERLINED),
                )));
                current_category = category;
            }
            lines.push(Line::from(vec![
                Span::styled(format!("    {:14}", binding.display()), t.warning_style()),
                Span::styled(binding.get_description().to_string(), t.text_style()),
            ]));
        }

        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }),
            chunks[0],
        );

        let footer = Paragraph::new(format!(
            "Atalhos configuráveis em: {}\nQualquer tecla fecha esta janela",
            config_path
        ))
        .style(t.muted_style())
        .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[1]);

        Ok(())
    }
}
