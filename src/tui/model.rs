use super::activity_list::ActivityList;
use super::form::SearchForm;
use crate::app::QueryState;
use crate::config::UiConfig;
use crate::domain::Event;

/// The TUI Model - the complete UI state
#[derive(Debug, Default)]
pub struct TuiModel {
    /// Loading / error / events, fed by service events
    pub query: QueryState,

    pub form: SearchForm,

    pub list: ActivityList,

    /// Which panel receives key input
    pub focus: Focus,

    pub show_help: bool,

    /// Collapse the list to one page whenever new events arrive
    pub reset_visible_on_load: bool,

    pub should_quit: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Form,
    List,
}

impl TuiModel {
    pub fn new(ui: &UiConfig) -> Self {
        Self {
            list: ActivityList::new(ui.page_size),
            reset_visible_on_load: ui.reset_visible_on_load,
            ..Self::default()
        }
    }

    /// Apply an event to update both the query state and UI state
    pub fn apply_event(&mut self, event: &Event) {
        self.query.apply(event);

        match event {
            Event::LoadStarted { .. } => {}

            Event::ActivityLoaded { .. } => {
                self.form.finish();
                if self.reset_visible_on_load {
                    self.list.reset();
                } else {
                    self.list.scroll_offset = 0;
                }
            }

            Event::LoadFailed { .. } => {
                self.form.finish();
            }

            Event::QuitRequested => {
                self.should_quit = true;
            }
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Form => Focus::List,
            Focus::List => Focus::Form,
        };
    }

    pub fn show_more(&mut self) -> bool {
        self.list.show_more(self.query.events.len())
    }
}
