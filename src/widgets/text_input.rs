//! Bordered single-line input for a [`TextInput`].

use crate::styles::theme;
use crate::utils::TextInput;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            focused: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Text to draw: the value, or the placeholder when empty.
    fn display_text(&self) -> &str {
        let text = self.input.text();
        if text.is_empty() {
            self.placeholder.unwrap_or("")
        } else {
            text
        }
    }

    fn text_style(&self) -> Style {
        let t = theme();
        if self.input.text().is_empty() {
            t.muted_style()
        } else {
            t.text_style()
        }
    }

    fn create_block(&self) -> Block<'a> {
        let t = theme();
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                t.border_focused_style()
            } else {
                t.border_style()
            });
        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }
        block
    }

    /// Horizontal scroll so the cursor stays inside `width` columns.
    fn scroll_offset(&self, width: u16) -> usize {
        let width = width as usize;
        if width == 0 {
            return 0;
        }
        self.input.cursor().saturating_sub(width - 1)
    }
}

impl<'a> Widget for TextInputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.create_block();
        let inner = block.inner(area);
        let offset = self.scroll_offset(inner.width) as u16;

        Paragraph::new(self.display_text())
            .block(block)
            .style(self.text_style())
            .scroll((0, offset))
            .render(area, buf);
    }
}

/// Renders a [`TextInputWidget`] and places the terminal cursor in it.
///
/// The cursor can only be set through the frame, not from `Widget::render`.
pub trait TextInputWidgetExt {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let focused = widget.focused;
        let inner = widget.create_block().inner(area);
        let column = widget.input.cursor() - widget.scroll_offset(inner.width);

        self.render_widget(widget, area);

        if focused && inner.width > 0 {
            self.set_cursor_position((inner.x + column as u16, inner.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_when_empty() {
        let input = TextInput::new();
        let widget = TextInputWidget::new(&input).placeholder("Nome do serviço");
        assert_eq!(widget.display_text(), "Nome do serviço");

        let input = TextInput::with_text("Corte");
        let widget = TextInputWidget::new(&input).placeholder("Nome do serviço");
        assert_eq!(widget.display_text(), "Corte");
    }

    #[test]
    fn test_scroll_keeps_cursor_visible() {
        let input = TextInput::with_text("abcdefghij");
        let widget = TextInputWidget::new(&input);
        assert_eq!(widget.scroll_offset(20), 0);
        // cursor at 10 in a 4 column field
        assert_eq!(widget.scroll_offset(4), 7);
    }
}
