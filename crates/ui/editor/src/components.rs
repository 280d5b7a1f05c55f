use color_eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use crate::{
    action::Action,
    core::state::FormState,
    tui::{Event, EventResponse, Frame},
};

pub mod card;
pub mod multi_select;
pub mod popup;
pub mod popups;
pub mod product_form;

/// `Component` is a visual and interactive element of the editor.
///
/// Components read `FormState` but never mutate it: anything that changes the
/// form goes out as `Action::Form(intent)` and through the reducer.
/// Component-local UI state (focus, highlight, edit buffers) lives in the
/// component itself.
pub trait Component {
    fn handle_events(
        &mut self,
        event: Event,
        state: &FormState,
    ) -> Result<Option<EventResponse<Action>>> {
        let r = match event {
            Event::Key(key_event) => self.handle_key_events(key_event, state)?,
            Event::Paste(text) => self.handle_paste(text, state)?,
            _ => None,
        };
        Ok(r)
    }

    fn handle_key_events(
        &mut self,
        _key: KeyEvent,
        _state: &FormState,
    ) -> Result<Option<EventResponse<Action>>> {
        Ok(None)
    }

    fn handle_paste(
        &mut self,
        _text: String,
        _state: &FormState,
    ) -> Result<Option<EventResponse<Action>>> {
        Ok(None)
    }

    fn update(&mut self, _action: Action, _state: &FormState) -> Result<Option<Action>> {
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, state: &FormState) -> Result<()>;
}
