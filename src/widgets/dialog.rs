//! Modal dialog used for alerts and confirmations
//!
//! Self-contained: centers itself in the given area, dims what is behind it
//! and stacks title, message and key hint blocks with collapsed borders.

use crate::styles::theme;
use ratatui::layout::Spacing;
use ratatui::prelude::*;
use ratatui::symbols::merge::MergeStrategy;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Widget, Wrap};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogVariant {
    #[default]
    Info,
    Success,
    Confirm,
    Error,
}

impl DialogVariant {
    pub fn title(&self) -> &'static str {
        match self {
            DialogVariant::Info => "Aviso",
            DialogVariant::Success => "Sucesso",
            DialogVariant::Confirm => "Confirmação",
            DialogVariant::Error => "Erro",
        }
    }

    /// Key hint shown in the bottom block
    pub fn hint(&self) -> &'static str {
        match self {
            DialogVariant::Confirm => "y/Enter: sim | n/Esc: não",
            _ => "Pressione qualquer tecla",
        }
    }

    /// Pick a variant from the message an alert carries.
    pub fn for_alert(message: &str) -> Self {
        let lower = message.to_lowercase();
        if lower.contains("sucesso") {
            DialogVariant::Success
        } else if lower.starts_with("erro") || lower.starts_with("não foi possível") {
            DialogVariant::Error
        } else {
            DialogVariant::Info
        }
    }
}

pub struct Dialog<'a> {
    pub content: &'a str,
    pub variant: DialogVariant,
    pub min_width: u16,
    pub max_width: u16,
    pub dim_background: bool,
}

impl<'a> Dialog<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            variant: DialogVariant::default(),
            min_width: 40,
            max_width: 72,
            dim_background: true,
        }
    }

    pub fn variant(mut self, variant: DialogVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn dim_background(mut self, dim: bool) -> Self {
        self.dim_background = dim;
        self
    }

    fn render_impl(&self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let hint = self.variant.hint();

        // Message width plus padding and borders, clamped to the screen
        let content_len = self.content.chars().count() as u16;
        let modal_width = (content_len.max(hint.chars().count() as u16) + 8).clamp(
            self.min_width.min(area.width),
            self.max_width.min(area.width.saturating_sub(4)).max(1),
        );
        let inner_width = modal_width.saturating_sub(6).max(1);
        let content_lines = content_len.div_ceil(inner_width).max(1);

        // Three blocks of 3 rows minus two collapsed borders
        let modal_height = (content_lines + 7).min(area.height);
        let popup_area = Rect::new(
            area.x + area.width.saturating_sub(modal_width) / 2,
            area.y + area.height.saturating_sub(modal_height) / 2,
            modal_width,
            modal_height,
        );

        if self.dim_background {
            Widget::render(
                Block::default().style(Style::default().add_modifier(Modifier::DIM)),
                area,
                buf,
            );
        }
        Widget::render(Clear, popup_area, buf);

        let border_style = match self.variant {
            DialogVariant::Info | DialogVariant::Confirm => t.border_focused_style(),
            DialogVariant::Success => t.success_style(),
            DialogVariant::Error => t.error_style(),
        };

        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(content_lines + 2),
            Constraint::Length(3),
        ])
        .spacing(Spacing::Overlap(1))
        .split(popup_area);

        let block = || {
            Block::default()
                .borders(Borders::ALL)
                .border_type(t.dialog_border_type())
                .border_style(border_style)
                .padding(Padding::horizontal(2))
                .merge_borders(MergeStrategy::Exact)
        };

        let title_block = block();
        let title_inner = title_block.inner(layout[0]);
        Widget::render(title_block, layout[0], buf);
        Widget::render(
            Paragraph::new(self.variant.title())
                .alignment(Alignment::Center)
                .style(t.title_style()),
            title_inner,
            buf,
        );

        let content_block = block();
        let content_inner = content_block.inner(layout[1]);
        Widget::render(content_block, layout[1], buf);
        Widget::render(
            Paragraph::new(self.content)
                .wrap(Wrap { trim: true })
                .style(t.text_style()),
            content_inner,
            buf,
        );

        let hint_block = block();
        let hint_inner = hint_block.inner(layout[2]);
        Widget::render(hint_block, layout[2], buf);
        Widget::render(
            Paragraph::new(hint)
                .alignment(Alignment::Center)
                .style(t.muted_style()),
            hint_inner,
            buf,
        );
    }
}

impl<'a> Widget for Dialog<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_impl(area, buf);
    }
}
