use super::model::{Focus, TuiModel};
use crate::app::Command;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};

/// Messages that can be sent from the TUI to the activity service
#[derive(Debug, Clone, PartialEq)]
pub enum TuiMessage {
    /// Send a command to the service
    Command(Command),

    /// No action needed
    None,
}

/// The Update function - handles user input and updates the model
pub struct TuiUpdate;

impl TuiUpdate {
    /// Handle a key press and update the model accordingly
    pub fn handle_key(model: &mut TuiModel, key: KeyCode, modifiers: KeyModifiers) -> Result<TuiMessage> {
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(TuiMessage::Command(Command::Quit));
        }

        // Any key closes help
        if model.show_help {
            model.show_help = false;
            return Ok(TuiMessage::None);
        }

        if key == KeyCode::Tab || key == KeyCode::BackTab {
            model.toggle_focus();
            return Ok(TuiMessage::None);
        }

        match model.focus {
            Focus::Form => Self::handle_form_keys(model, key, modifiers),
            Focus::List => Self::handle_list_keys(model, key, modifiers),
        }
    }

    /// Submit the form text, as Enter does in the form
    pub fn submit_form(model: &mut TuiModel) -> TuiMessage {
        match model.form.begin_submit() {
            Some(username) => TuiMessage::Command(Command::LoadActivity { username }),
            None => TuiMessage::None,
        }
    }

    fn handle_form_keys(model: &mut TuiModel, key: KeyCode, modifiers: KeyModifiers) -> Result<TuiMessage> {
        match key {
            KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
                model.form.clear();
                Ok(TuiMessage::None)
            }

            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                model.form.push_char(c);
                Ok(TuiMessage::None)
            }

            KeyCode::Backspace => {
                model.form.backspace();
                Ok(TuiMessage::None)
            }

            KeyCode::Enter => Ok(Self::submit_form(model)),

            KeyCode::Esc => {
                model.focus = Focus::List;
                Ok(TuiMessage::None)
            }

            _ => Ok(TuiMessage::None),
        }
    }

    fn handle_list_keys(model: &mut TuiModel, key: KeyCode, modifiers: KeyModifiers) -> Result<TuiMessage> {
        let total = model.query.events.len();

        match key {
            KeyCode::Char('q') | KeyCode::Esc if modifiers.is_empty() => {
                Ok(TuiMessage::Command(Command::Quit))
            }

            KeyCode::Enter | KeyCode::Char('m') => {
                model.show_more();
                Ok(TuiMessage::None)
            }

            KeyCode::Up | KeyCode::Char('k') => {
                model.list.scroll_up();
                Ok(TuiMessage::None)
            }

            KeyCode::Down | KeyCode::Char('j') => {
                model.list.scroll_down(total);
                Ok(TuiMessage::None)
            }

            KeyCode::Char('/') => {
                model.focus = Focus::Form;
                Ok(TuiMessage::None)
            }

            KeyCode::Char('?') => {
                model.show_help = true;
                Ok(TuiMessage::None)
            }

            _ => Ok(TuiMessage::None),
        }
    }
}
