//! Key handling for the main and detail views.

use anyhow::Result;
use crossterm::event::{self, KeyCode, KeyModifiers};

use crate::router::MAIN_FRAGMENT;
use crate::session::{BrowserEvent, VisibleView};
use crate::tui::AppState;

/// Handle input when no overlay is open
pub fn handle_main_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
            Ok(true)
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.should_quit = true;
            Ok(true)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_previous();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next();
            Ok(false)
        }
        KeyCode::Enter => {
            activate_selection(state);
            Ok(false)
        }
        KeyCode::Char('f') => {
            open_featured(state);
            Ok(false)
        }
        KeyCode::Char('i') => {
            request_install(state);
            Ok(false)
        }
        KeyCode::Esc | KeyCode::Backspace => {
            if state.session.display().visible == VisibleView::Detail {
                state.dispatch(BrowserEvent::FragmentChanged(MAIN_FRAGMENT.to_string()));
                state.set_status("Back to all apps");
            }
            Ok(false)
        }
        KeyCode::Char(':') => {
            state.fragment_input = Some(state.session.fragment().to_string());
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Enter: open the selected tile, or show the selected gallery image
fn activate_selection(state: &mut AppState) {
    let display = state.session.display();

    let event = match display.visible {
        VisibleView::Main => display
            .main
            .as_ref()
            .and_then(|view| view.tiles.get(state.selected_tile))
            .map(|tile| BrowserEvent::FragmentChanged(tile.link.clone())),
        VisibleView::Detail => display
            .detail
            .as_ref()
            .and_then(|view| view.gallery.get(state.selected_gallery))
            .map(|item| BrowserEvent::GalleryItemActivated {
                image_url: item.image_url.clone(),
                title: item.title.clone(),
            }),
    };

    if let Some(event) = event {
        state.dispatch(event);
    }
}

fn open_featured(state: &mut AppState) {
    let display = state.session.display();
    if display.visible != VisibleView::Main {
        return;
    }

    let link = display
        .main
        .as_ref()
        .and_then(|view| view.featured.as_ref())
        .map(|panel| panel.link.clone());

    match link {
        Some(link) => state.dispatch(BrowserEvent::FragmentChanged(link)),
        None => state.set_status("This store has no featured app"),
    }
}

fn request_install(state: &mut AppState) {
    let display = state.session.display();
    if display.visible != VisibleView::Detail {
        return;
    }

    if let Some(name) = display
        .detail
        .as_ref()
        .map(|view| view.install.app_name.clone())
    {
        state.dispatch(BrowserEvent::InstallRequested(name));
    }
}
