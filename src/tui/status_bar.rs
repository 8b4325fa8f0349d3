//! Status bar widget for status messages and key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::session::{SessionState, VisibleView};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status line and the hints for the current context
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let status_line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.as_str()),
            ])
        } else if state.session.display().copy_button.is_confirming() {
            Line::from(Span::styled(
                state.session.display().copy_button.label.as_str(),
                Style::default().fg(theme.success),
            ))
        } else {
            Line::from(state.status_message.as_str())
        };

        let status = Paragraph::new(vec![status_line, Self::hints_line(state, theme)])
            .style(Style::default().fg(theme.text).bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();

        for (i, (key, action)) in Self::hints(state).iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                *key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*action, Style::default().fg(theme.text_muted)));
        }

        Line::from(spans)
    }

    /// Key hints for the topmost surface
    fn hints(state: &AppState) -> &'static [(&'static str, &'static str)] {
        let display = state.session.display();

        if state.fragment_input.is_some() {
            &[("Enter", "Open"), ("Esc", "Cancel")]
        } else if display.gallery_modal.visible {
            &[("Esc", "Close")]
        } else if display.install_dialog.visible {
            &[("c", "Copy"), ("Esc", "Close")]
        } else if matches!(
            state.session.state(),
            SessionState::Loading | SessionState::LoadFailed(_)
        ) {
            &[(":", "Go to"), ("q", "Quit")]
        } else if display.visible == VisibleView::Detail {
            &[
                ("↑/↓", "Gallery"),
                ("Enter", "View image"),
                ("i", "Install"),
                ("Esc", "Back"),
                (":", "Go to"),
                ("q", "Quit"),
            ]
        } else {
            &[
                ("↑/↓", "Select"),
                ("Enter", "Open"),
                ("f", "Featured"),
                (":", "Go to"),
                ("q", "Quit"),
            ]
        }
    }
}
