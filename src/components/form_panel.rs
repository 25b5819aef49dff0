use crate::panel::{FormField, ServiceForm};
use crate::styles::theme;
use crate::widgets::{TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders};

/// Rows taken by the five inputs of a [`ServiceForm`]
pub const FORM_HEIGHT: u16 = 3 * FormField::ALL.len() as u16;

/// The five inputs of a service form stacked vertically
pub struct FormPanel;

impl FormPanel {
    /// `focused` is the field holding the cursor, if the form has focus.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        title: &str,
        form: &ServiceForm,
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
            .title(format!(" {} ", title))
            .title_style(t.title_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        Self::render_inputs(frame, inner, form, focused);
        Ok(())
    }

    /// Inputs only, without the surrounding block.
    pub fn render_inputs(frame: &mut Frame, area: Rect, form: &ServiceForm, focused: Option<FormField>) {
        let rows = Layout::vertical(FormField::ALL.map(|_| Constraint::Length(3))).split(area);

        for (field, row) in FormField::ALL.into_iter().zip(rows.iter()) {
            let widget = TextInputWidget::new(form.field(field))
                .title(field.label())
                .placeholder(field.placeholder())
                .focused(focused == Some(field));
            frame.render_text_input_widget(widget, *row);
        }
    }
}
