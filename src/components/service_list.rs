//! The list container: placeholder text, or one row per card plus the
//! editor of the selected card.

use super::form_panel::{FormPanel, FORM_HEIGHT};
use crate::panel::{messages, FormField, ListView, ServiceCard};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap};

/// Rows reserved for the image previews of the selected card
const GALLERY_HEIGHT: u16 = 6;

/// Longest image source shown before eliding; inline data URIs are huge
const MAX_SRC_CHARS: usize = 60;

pub struct ServiceList;

impl ServiceList {
    /// `focused` is the field of the selected card holding the cursor, if the
    /// list has focus.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        view: &ListView,
        selected: usize,
        focused: Option<FormField>,
    ) -> Result<()> {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if focused.is_some() {
                t.border_focused_style()
            } else {
                t.border_style()
            })
            .title(" Serviços ")
            .title_style(t.title_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if let Some(text) = view.placeholder() {
            let style = if matches!(view, ListView::Failed) {
                t.error_style()
            } else {
                t.muted_style()
            };
            frame.render_widget(
                Paragraph::new(text)
                    .style(style)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                inner,
            );
            return Ok(());
        }

        let cards = view.cards();
        let selected = selected.min(cards.len().saturating_sub(1));

        let chunks = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(FORM_HEIGHT),
            Constraint::Length(GALLERY_HEIGHT),
        ])
        .split(inner);

        let items: Vec<ListItem> = cards.iter().map(|card| ListItem::new(summary(card))).collect();
        let list = List::new(items)
            .style(t.text_style())
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        let mut state = ListState::default().with_selected(Some(selected));
        frame.render_stateful_widget(list, chunks[0], &mut state);

        if let Some(card) = cards.get(selected) {
            FormPanel::render_inputs(frame, chunks[1], &card.form, focused);
            Self::render_gallery(frame, chunks[2], card, focused.is_some());
        }

        Ok(())
    }

    fn render_gallery(frame: &mut Frame, area: Rect, card: &ServiceCard, focused: bool) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style())
            .title(" Imagens ");

        if !card.has_images() {
            frame.render_widget(
                Paragraph::new(messages::NO_IMAGES)
                    .style(t.muted_style())
                    .block(block),
                area,
            );
            return;
        }

        let items: Vec<ListItem> = card
            .previews()
            .iter()
            .enumerate()
            .map(|(i, preview)| {
                ListItem::new(format!("{}. {}", i + 1, elide(&preview.src, MAX_SRC_CHARS)))
                    .style(t.image_style())
            })
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        let mut state = ListState::default().with_selected(focused.then_some(card.selected_image()));
        frame.render_stateful_widget(list, area, &mut state);
    }
}

/// One-line description of a card, from its current (possibly edited) values.
fn summary(card: &ServiceCard) -> String {
    let count = card.previews().len();
    format!(
        "{} · R$ {} · {} min · {} {}",
        card.form.nome.text(),
        card.form.preco.text(),
        card.form.duracao.text(),
        count,
        if count == 1 { "imagem" } else { "imagens" }
    )
}

fn elide(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let head: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", head)
}
