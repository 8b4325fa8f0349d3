//! Install dialog, gallery modal, fragment prompt and error overlay.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::{centered_rect, Theme};
use crate::session::{CopyButton, GalleryModal, InstallDialog};

/// Render the install dialog with its copy button
pub fn render_install_dialog(
    f: &mut Frame,
    dialog: &InstallDialog,
    copy_button: &CopyButton,
    theme: &Theme,
) {
    let area = centered_rect(70, 35, f.area());
    f.render_widget(Clear, area);

    let copy_style = if copy_button.is_confirming() {
        Style::default()
            .fg(theme.success)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.accent)
    };

    let lines = vec![
        Line::from(Span::styled(
            "Run this command to install the app:",
            Style::default().fg(theme.text_secondary),
        )),
        Line::from(""),
        Line::from(Span::styled(
            dialog.command.clone(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("[c] {}", copy_button.label), copy_style),
            Span::styled("   Esc Close", Style::default().fg(theme.text_muted)),
        ]),
    ];

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Install ")
            .style(Style::default().fg(theme.primary).bg(theme.surface)),
    );

    f.render_widget(widget, area);
}

/// Render the gallery modal
pub fn render_gallery_modal(f: &mut Frame, modal: &GalleryModal, theme: &Theme) {
    let area = centered_rect(60, 30, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(vec![
            Span::styled("Image: ", Style::default().fg(theme.text_secondary)),
            Span::styled(modal.image_url.clone(), Style::default().fg(theme.text)),
        ]),
        Line::from(""),
        Line::from(Span::styled("Esc Close", Style::default().fg(theme.text_muted))),
    ];

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", modal.title))
            .style(Style::default().fg(theme.primary).bg(theme.surface)),
    );

    f.render_widget(widget, area);
}

/// Render the `:` prompt used to type a fragment
pub fn render_fragment_prompt(f: &mut Frame, input: &str, theme: &Theme) {
    let area = centered_rect(60, 20, f.area());
    f.render_widget(Clear, area);

    let prompt = Paragraph::new(Line::from(vec![
        Span::styled(input.to_string(), Style::default().fg(theme.text)),
        Span::styled("█", Style::default().fg(theme.accent)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Go to fragment (Enter to open, Esc to cancel) ")
            .style(Style::default().fg(theme.primary).bg(theme.surface)),
    );

    f.render_widget(prompt, area);
}

/// Render error overlay on top of all other UI elements
pub fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(70, 40, f.area());
    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let error_text = Paragraph::new(error)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" ERROR ")
                .style(Style::default().fg(theme.error).bg(theme.background)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, chunks[0]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(help, chunks[1]);
}
