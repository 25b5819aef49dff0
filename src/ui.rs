use crate::components::{Footer, FormPanel, Header, HelpOverlay, ServiceList};
use crate::keymap::Keymap;
use crate::panel::{FormField, ListView, ServiceForm};
use crate::widgets::Dialog;
use ratatui::prelude::*;

/// Which part of the screen receives typed input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Creation,
    Cards,
}

/// Cursor position across the creation form and the cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus {
    pub section: Section,
    pub field: FormField,
    /// Index of the selected card; kept when focus is on the creation form
    pub selected_card: usize,
}

impl Default for Focus {
    fn default() -> Self {
        Self {
            section: Section::Creation,
            field: FormField::Nome,
            selected_card: 0,
        }
    }
}

impl Focus {
    /// Tab: next field, wrapping between the creation form and the selected
    /// card. Cards are skipped when there are none.
    pub fn next_field(&mut self, card_count: usize) {
        match self.field.next() {
            Some(field) => self.field = field,
            None => {
                self.field = FormField::Nome;
                self.section = match self.section {
                    Section::Creation if card_count > 0 => Section::Cards,
                    _ => Section::Creation,
                };
            }
        }
    }

    pub fn prev_field(&mut self, card_count: usize) {
        match self.field.prev() {
            Some(field) => self.field = field,
            None => {
                self.field = FormField::Arquivos;
                self.section = match self.section {
                    Section::Creation if card_count > 0 => Section::Cards,
                    _ => Section::Creation,
                };
            }
        }
    }

    pub fn select_next_card(&mut self, card_count: usize) {
        if self.selected_card + 1 < card_count {
            self.selected_card += 1;
        }
    }

    pub fn select_prev_card(&mut self) {
        self.selected_card = self.selected_card.saturating_sub(1);
    }

    /// Keep the selection valid after the list was replaced.
    pub fn clamp(&mut self, card_count: usize) {
        if card_count == 0 {
            self.selected_card = 0;
            if self.section == Section::Cards {
                self.section = Section::Creation;
                self.field = FormField::Nome;
            }
        } else if self.selected_card >= card_count {
            self.selected_card = card_count - 1;
        }
    }

    pub fn go_to_form(&mut self) {
        self.section = Section::Creation;
        self.field = FormField::Nome;
    }
}

/// UI-only state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: Focus,
    pub show_help: bool,
}

/// Everything a frame needs, borrowed from the app.
pub struct View<'a> {
    pub api_url: &'a str,
    pub container: &'a ListView,
    pub creation: &'a ServiceForm,
    pub ui: &'a UiState,
    pub keymap: &'a Keymap,
    pub config_path: &'a str,
}

pub fn draw(frame: &mut Frame, view: &View) {
    let area = frame.area();
    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(10),
        Constraint::Length(2),
    ])
    .split(area);

    let _ = Header::render(
        frame,
        rows[0],
        " Painel de serviços ",
        &format!("API: {}", view.api_url),
    );

    let columns =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).split(rows[1]);

    let focus = view.ui.focus;
    let focused_in = |section: Section| (focus.section == section).then_some(focus.field);

    let _ = FormPanel::render(
        frame,
        columns[0],
        "Novo serviço",
        view.creation,
        focused_in(Section::Creation),
    );
    let _ = ServiceList::render(
        frame,
        columns[1],
        view.container,
        focus.selected_card,
        focused_in(Section::Cards),
    );

    let _ = Footer::render(frame, rows[2], &view.keymap.footer_panel());

    if view.ui.show_help {
        let _ = HelpOverlay::render(frame, area, view.keymap, view.config_path);
    }
}

/// Draw the regular screen with a modal dialog on top.
pub fn draw_with_dialog(frame: &mut Frame, view: &View, dialog: Dialog) {
    draw(frame, view);
    frame.render_widget(dialog, frame.area());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_wraps_between_sections() {
        let mut focus = Focus::default();
        for _ in 0..4 {
            focus.next_field(2);
        }
        assert_eq!(focus.field, FormField::Arquivos);
        assert_eq!(focus.section, Section::Creation);

        focus.next_field(2);
        assert_eq!(focus.section, Section::Cards);
        assert_eq!(focus.field, FormField::Nome);

        focus.prev_field(2);
        assert_eq!(focus.section, Section::Creation);
        assert_eq!(focus.field, FormField::Arquivos);
    }

    #[test]
    fn test_tab_stays_in_form_without_cards() {
        let mut focus = Focus {
            field: FormField::Arquivos,
            ..Focus::default()
        };
        focus.next_field(0);
        assert_eq!(focus.section, Section::Creation);
        assert_eq!(focus.field, FormField::Nome);
    }

    #[test]
    fn test_clamp_after_reload() {
        let mut focus = Focus {
            section: Section::Cards,
            field: FormField::Preco,
            selected_card: 4,
        };
        focus.clamp(2);
        assert_eq!(focus.selected_card, 1);
        assert_eq!(focus.section, Section::Cards);

        focus.clamp(0);
        assert_eq!(focus.section, Section::Creation);
        assert_eq!(focus.selected_card, 0);
    }

    #[test]
    fn test_card_selection_bounds() {
        let mut focus = Focus::default();
        focus.select_prev_card();
        assert_eq!(focus.selected_card, 0);
        focus.select_next_card(2);
        focus.select_next_card(2);
        assert_eq!(focus.selected_card, 1);
    }
}
