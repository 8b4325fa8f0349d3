//! Detail view: one app with its optional lines, install action and gallery.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::Theme;
use crate::render::{DetailView, GalleryTile};

/// Detail view widget
pub struct AppDetailWidget;

impl AppDetailWidget {
    /// Render the app page
    pub fn render(
        f: &mut Frame,
        area: Rect,
        view: &DetailView,
        selected_gallery: usize,
        theme: &Theme,
    ) {
        let gallery_height = view.gallery.len().clamp(1, 6) as u16 + 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(gallery_height)])
            .split(area);

        Self::render_info(f, chunks[0], view, theme);
        Self::render_gallery(f, chunks[1], &view.gallery, selected_gallery, theme);
    }

    fn render_info(f: &mut Frame, area: Rect, view: &DetailView, theme: &Theme) {
        let mut lines = vec![
            Line::from(Span::styled(
                view.name.clone(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("by {} | {}", view.publisher, view.category),
                Style::default().fg(theme.text_secondary),
            )),
            Line::from(""),
            Line::from(Span::styled(
                view.long_description.clone(),
                Style::default().fg(theme.text),
            )),
            Line::from(""),
            field_line("Version", &view.version, theme),
        ];

        if let Some(license) = &view.license {
            lines.push(field_line("License", license, theme));
        }
        if let Some(homepage) = &view.homepage {
            lines.push(field_line("Homepage", homepage, theme));
        }
        if let Some(download) = &view.download {
            lines.push(field_line("Download", download, theme));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                "[i] Install",
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Esc ← Back to All Apps", Style::default().fg(theme.text_muted)),
        ]));

        let info = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", view.icon_url))
                .style(Style::default().bg(theme.background)),
        );

        f.render_widget(info, area);
    }

    fn render_gallery(
        f: &mut Frame,
        area: Rect,
        gallery: &[GalleryTile],
        selected: usize,
        theme: &Theme,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Gallery ")
            .style(Style::default().fg(theme.primary).bg(theme.background));

        if gallery.is_empty() {
            let empty = Paragraph::new(Span::styled(
                "No images",
                Style::default().fg(theme.text_muted),
            ))
            .block(block);
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = gallery
            .iter()
            .map(|item| {
                ListItem::new(Line::from(vec![
                    Span::styled(item.title.clone(), Style::default().fg(theme.text)),
                    Span::styled(
                        format!("  {}", item.image_url),
                        Style::default().fg(theme.text_muted),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(theme.highlight_bg))
            .highlight_symbol("▶ ");

        let mut list_state =
            ListState::default().with_selected(Some(selected.min(gallery.len() - 1)));

        f.render_stateful_widget(list, area, &mut list_state);
    }
}

fn field_line(label: &str, value: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().fg(theme.text_secondary),
        ),
        Span::styled(value.to_string(), Style::default().fg(theme.text)),
    ])
}
