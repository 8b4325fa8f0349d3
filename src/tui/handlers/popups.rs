//! Key handling for the install dialog, gallery modal and fragment prompt.

use anyhow::Result;
use crossterm::event::{self, KeyCode};

use crate::session::BrowserEvent;
use crate::tui::AppState;

/// Handle input while the install dialog or gallery modal is open
pub fn handle_overlay_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let gallery_on_top = state.session.display().gallery_modal.visible;

    match key.code {
        KeyCode::Esc | KeyCode::Backspace => {
            state.dispatch(BrowserEvent::DismissOverlay);
        }
        KeyCode::Enter if gallery_on_top => {
            state.dispatch(BrowserEvent::DismissOverlay);
        }
        KeyCode::Char('c') | KeyCode::Enter if !gallery_on_top => {
            state.dispatch(BrowserEvent::CopyRequested);
        }
        _ => {}
    }

    Ok(false)
}

/// Handle input for the `:` fragment prompt
pub fn handle_fragment_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let Some(input) = state.fragment_input.as_mut() else {
        return Ok(false);
    };

    match key.code {
        KeyCode::Esc => {
            state.fragment_input = None;
        }
        KeyCode::Enter => {
            let fragment = state.fragment_input.take().unwrap_or_default();
            state.dispatch(BrowserEvent::FragmentChanged(fragment));
        }
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Char(c) => {
            input.push(c);
        }
        _ => {}
    }

    Ok(false)
}
