use crate::catalog::HttpCatalogApi;
use crate::config::Config;
use crate::keymap::{Action, Keymap};
use crate::panel::{AdminPanel, CardAction, Dialogs, ListView, Outcome, ServiceCard, ServiceForm};
use crate::tui::Tui;
use crate::ui::{self, Section, UiState, View};
use crate::utils::TextInput;
use crate::widgets::{Dialog, DialogVariant};
use anyhow::{Context, Result};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::path::PathBuf;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::{debug, error, info};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// A panel operation that may talk to the user through dialogs
#[derive(Debug, Clone, PartialEq, Eq)]
enum Operation {
    Create,
    Update(String),
    Delete(String),
}

/// Main application state
pub struct App {
    config: Config,
    config_path: PathBuf,
    api_url: String,
    tui: Tui,
    ui_state: UiState,
    panel: AdminPanel<HttpCatalogApi>,
    should_quit: bool,
    runtime: Runtime,
}

impl App {
    pub fn new(config: Config, config_path: PathBuf, api_base: &str) -> Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let api = HttpCatalogApi::new(api_base, config.request_timeout())
            .context("Failed to create HTTP client")?;
        let api_url = api.collection_url().to_string();
        let tui = Tui::new()?;

        Ok(Self {
            config,
            config_path,
            api_url,
            tui,
            ui_state: UiState::default(),
            panel: AdminPanel::new(api),
            should_quit: false,
            runtime,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        info!("Starting panel against {}", self.api_url);
        self.tui.enter()?;
        self.reload()?;

        loop {
            self.draw()?;

            if self.should_quit {
                break;
            }

            if let Some(event) = self.tui.poll_event(POLL_INTERVAL)? {
                self.handle_event(event)?;
            }
        }

        self.tui.exit()?;
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let config_path = self.config_path.display().to_string();
        let view = View {
            api_url: &self.api_url,
            container: self.panel.container(),
            creation: self.panel.creation_form(),
            ui: &self.ui_state,
            keymap: &self.config.keymap,
            config_path: &config_path,
        };
        self.tui.terminal_mut().draw(|frame| ui::draw(frame, &view))?;
        Ok(())
    }

    /// Show the loading placeholder, then fetch the list.
    fn reload(&mut self) -> Result<()> {
        *self.panel.container_mut() = ListView::Loading;
        self.draw()?;
        self.runtime.block_on(self.panel.load_services());
        let count = self.card_count();
        self.ui_state.focus.clamp(count);
        Ok(())
    }

    fn card_count(&self) -> usize {
        self.panel.container().cards().len()
    }

    fn selected_card(&self) -> Option<&ServiceCard> {
        self.panel
            .container()
            .cards()
            .get(self.ui_state.focus.selected_card)
    }

    fn selected_card_mut(&mut self) -> Option<&mut ServiceCard> {
        self.panel
            .container_mut()
            .cards_mut()
            .get_mut(self.ui_state.focus.selected_card)
    }

    fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        let focus = self.ui_state.focus;
        match focus.section {
            Section::Creation => Some(self.panel.creation_form_mut().field_mut(focus.field)),
            Section::Cards => self
                .selected_card_mut()
                .map(|card| card.form.field_mut(focus.field)),
        }
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if self.ui_state.show_help {
            self.ui_state.show_help = false;
            return Ok(());
        }

        match self.config.keymap.get_action(key.code, key.modifiers) {
            Some(action) if TextInput::is_action_allowed_when_focused(&action) => {
                self.handle_action(action)?;
            }
            Some(Action::Confirm) => {
                let count = self.card_count();
                self.ui_state.focus.next_field(count);
            }
            _ => self.handle_typing(key),
        }
        Ok(())
    }

    fn handle_typing(&mut self, key: KeyEvent) {
        let KeyCode::Char(c) = key.code else {
            return;
        };
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return;
        }
        if let Some(input) = self.focused_input_mut() {
            input.insert_char(c);
        }
    }

    fn handle_action(&mut self, action: Action) -> Result<()> {
        let count = self.card_count();
        let in_cards = self.ui_state.focus.section == Section::Cards;

        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.ui_state.show_help = true,
            Action::Refresh => self.reload()?,
            Action::GoToForm => self.ui_state.focus.go_to_form(),
            Action::NextField => self.ui_state.focus.next_field(count),
            Action::PrevField => self.ui_state.focus.prev_field(count),
            Action::MoveUp if in_cards => self.ui_state.focus.select_prev_card(),
            Action::MoveDown if in_cards => self.ui_state.focus.select_next_card(count),
            Action::MoveUp => {
                if let Some(field) = self.ui_state.focus.field.prev() {
                    self.ui_state.focus.field = field;
                }
            }
            Action::MoveDown => {
                if let Some(field) = self.ui_state.focus.field.next() {
                    self.ui_state.focus.field = field;
                }
            }
            Action::Save if !in_cards => self.run_operation(Operation::Create),
            Action::Save | Action::Delete | Action::RemoveImage if in_cards => {
                let card_action = self.selected_card().and_then(|card| match action {
                    Action::Save => Some(card.save_action()),
                    Action::Delete => Some(card.delete_action()),
                    _ => card.remove_selected_action(),
                });
                if let Some(card_action) = card_action {
                    self.dispatch(card_action);
                }
            }
            Action::PrevImage if in_cards => {
                if let Some(card) = self.selected_card_mut() {
                    card.select_prev_image();
                }
            }
            Action::NextImage if in_cards => {
                if let Some(card) = self.selected_card_mut() {
                    card.select_next_image();
                }
            }
            editing => {
                if let Some(input) = self.focused_input_mut() {
                    input.handle_action(editing);
                }
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, action: CardAction) {
        debug!("Card action {:?}", action);
        match action {
            CardAction::Save(id) => self.run_operation(Operation::Update(id)),
            CardAction::Delete(id) => self.run_operation(Operation::Delete(id)),
            CardAction::RemoveImage { id, index } => {
                self.panel.remove_image(&id, index);
            }
        }
    }

    /// Run one panel operation to completion, answering its dialogs in the
    /// terminal. Operations never overlap.
    fn run_operation(&mut self, operation: Operation) {
        let backdrop = Backdrop {
            api_url: self.api_url.clone(),
            container: self.panel.container().clone(),
            creation: self.panel.creation_form().clone(),
            ui: self.ui_state.clone(),
            config_path: self.config_path.display().to_string(),
        };
        let mut dialogs = TerminalDialogs {
            tui: &mut self.tui,
            backdrop: &backdrop,
            keymap: &self.config.keymap,
        };

        let outcome = match &operation {
            Operation::Create => self.runtime.block_on(self.panel.create_service(&mut dialogs)),
            Operation::Update(id) => self
                .runtime
                .block_on(self.panel.update_service(id, &mut dialogs)),
            Operation::Delete(id) => self
                .runtime
                .block_on(self.panel.delete_service(id, &mut dialogs)),
        };
        debug!("{:?} finished: {:?}", operation, outcome);

        if operation == Operation::Create && outcome == Outcome::Done {
            self.ui_state.focus.go_to_form();
        }
        let count = self.card_count();
        self.ui_state.focus.clamp(count);
    }
}

/// Snapshot of the screen drawn behind modal dialogs while an operation
/// holds the panel.
struct Backdrop {
    api_url: String,
    container: ListView,
    creation: ServiceForm,
    ui: UiState,
    config_path: String,
}

impl Backdrop {
    fn view<'a>(&'a self, keymap: &'a Keymap) -> View<'a> {
        View {
            api_url: &self.api_url,
            container: &self.container,
            creation: &self.creation,
            ui: &self.ui,
            keymap,
            config_path: &self.config_path,
        }
    }
}

/// Modal alert and confirmation dialogs drawn in the terminal.
struct TerminalDialogs<'a> {
    tui: &'a mut Tui,
    backdrop: &'a Backdrop,
    keymap: &'a Keymap,
}

impl TerminalDialogs<'_> {
    /// Draw the dialog until a key is pressed.
    fn show(&mut self, message: &str, variant: DialogVariant) -> Result<KeyEvent> {
        let view = self.backdrop.view(self.keymap);
        loop {
            self.tui.terminal_mut().draw(|frame| {
                ui::draw_with_dialog(frame, &view, Dialog::new(message).variant(variant))
            })?;

            if let Some(Event::Key(key)) = self.tui.poll_event(POLL_INTERVAL)? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }
}

impl Dialogs for TerminalDialogs<'_> {
    fn alert(&mut self, message: &str) {
        info!("Alert: {}", message);
        if let Err(e) = self.show(message, DialogVariant::for_alert(message)) {
            error!("Failed to show alert: {}", e);
        }
    }

    fn confirm(&mut self, message: &str) -> bool {
        loop {
            let key = match self.show(message, DialogVariant::Confirm) {
                Ok(key) => key,
                Err(e) => {
                    error!("Failed to show confirmation: {}", e);
                    return false;
                }
            };
            match self.keymap.get_action(key.code, key.modifiers) {
                Some(Action::Yes | Action::Confirm) => return true,
                Some(Action::No | Action::Cancel | Action::Quit) => return false,
                _ => {}
            }
        }
    }
}
