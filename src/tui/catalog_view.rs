//! Main view: featured panel above the list of app tiles.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::Theme;
use crate::render::{AppTile, FeaturedPanel, MainView};

/// Main view widget
pub struct CatalogWidget;

impl CatalogWidget {
    /// Render the featured panel and the tile list
    pub fn render(f: &mut Frame, area: Rect, view: &MainView, selected: usize, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(3)])
            .split(area);

        Self::render_featured(f, chunks[0], view.featured.as_ref(), theme);
        Self::render_tiles(f, chunks[1], &view.tiles, selected, theme);
    }

    fn render_featured(f: &mut Frame, area: Rect, panel: Option<&FeaturedPanel>, theme: &Theme) {
        let lines = match panel {
            Some(panel) => vec![
                Line::from(vec![
                    Span::styled("★ ", Style::default().fg(theme.warning)),
                    Span::styled(
                        panel.name.clone(),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    panel.description.clone(),
                    Style::default().fg(theme.text),
                )),
                Line::from(vec![
                    Span::styled("f", Style::default().fg(theme.accent)),
                    Span::styled(" View Details", Style::default().fg(theme.text_muted)),
                ]),
            ],
            None => vec![Line::from(Span::styled(
                "No featured app",
                Style::default().fg(theme.text_muted),
            ))],
        };

        let featured = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Featured ")
                .style(Style::default().fg(theme.primary).bg(theme.surface)),
        );

        f.render_widget(featured, area);
    }

    fn render_tiles(f: &mut Frame, area: Rect, tiles: &[AppTile], selected: usize, theme: &Theme) {
        let items: Vec<ListItem> = tiles
            .iter()
            .map(|tile| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            tile.name.clone(),
                            Style::default()
                                .fg(theme.text)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("  v{}", tile.version),
                            Style::default().fg(theme.text_muted),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("  {}", tile.description),
                        Style::default().fg(theme.text_secondary),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Apps ({}) ", tiles.len()))
                    .style(Style::default().fg(theme.primary).bg(theme.background)),
            )
            .highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let selection = if tiles.is_empty() {
            None
        } else {
            Some(selected.min(tiles.len() - 1))
        };
        let mut list_state = ListState::default().with_selected(selection);

        f.render_stateful_widget(list, area, &mut list_state);
    }
}
