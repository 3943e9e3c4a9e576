//! Header, page and empty-state rendering.

use super::constants::PAGE_PADDING;
use super::styles::Palette;
use crate::content::sanitize_body;
use crate::model::{AnimationType, DisplayPreferences, PageContentStore};
use crate::pagination::PaginationSnapshot;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Marker drawn down the page edge while a flip is in flight.
const FLIP_EDGE: &str = "▐";

/// Title of the chapter containing `index`: the nearest titled page at or
/// before it.
pub fn chapter_title(store: &PageContentStore, index: usize) -> Option<&str> {
    store
        .chapters()
        .take_while(|(i, _)| *i <= index)
        .last()
        .map(|(_, title)| title)
}

/// Book title on the left, chapter title on the right.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    store: &PageContentStore,
    snapshot: &PaginationSnapshot<'_>,
    prefs: &DisplayPreferences,
    palette: &Palette,
) {
    frame.render_widget(Block::default().style(palette.chrome), area);

    let book = sanitize_body(store.title().unwrap_or("folio"));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!(" {book}"), palette.accent))),
        area,
    );

    if prefs.show_chapter_title {
        if let Some(chapter) = chapter_title(store, snapshot.current_index) {
            let chapter = Paragraph::new(Line::from(format!("{} ", sanitize_body(chapter))))
                .style(palette.chrome)
                .alignment(Alignment::Right);
            frame.render_widget(chapter, area);
        }
    }
}

/// Draw the current page, or the empty state when there is none.
pub fn render_page(
    frame: &mut Frame,
    area: Rect,
    snapshot: &PaginationSnapshot<'_>,
    prefs: &DisplayPreferences,
    palette: &Palette,
) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(palette.border_type)
        .style(palette.paper)
        .padding(Padding::horizontal(PAGE_PADDING));

    let Some(entry) = snapshot.current_entry else {
        render_empty_state(frame, area, block, palette);
        return;
    };

    if let Some(title) = entry.title() {
        block = block.title(Span::styled(
            format!(" {} ", sanitize_body(title)),
            palette.paper.add_modifier(Modifier::BOLD),
        ));
    }

    let mut lines: Vec<Line> = Vec::new();
    if let Some(image) = entry.image() {
        lines.push(Line::from(Span::styled(
            format!("[image: {}]", sanitize_body(image)),
            palette.paper.add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::default());
    }
    lines.extend(Text::raw(sanitize_body(entry.body())).lines);

    let mut body_style = palette.paper;
    if snapshot.is_animating && prefs.animation_type == AnimationType::Fade {
        body_style = body_style.add_modifier(Modifier::DIM);
    }

    let page = Paragraph::new(lines)
        .block(block)
        .style(body_style)
        .wrap(Wrap { trim: false });
    frame.render_widget(page, area);

    if snapshot.is_animating && prefs.animation_type == AnimationType::Flip {
        render_flip_edge(frame, area, palette);
    }
}

fn render_flip_edge(frame: &mut Frame, area: Rect, palette: &Palette) {
    if area.width == 0 || area.height < 3 {
        return;
    }
    let edge = Rect {
        x: area.right() - 1,
        y: area.y + 1,
        width: 1,
        height: area.height - 2,
    };
    let marker: Vec<Line> = (0..edge.height).map(|_| Line::from(FLIP_EDGE)).collect();
    frame.render_widget(Paragraph::new(marker).style(palette.accent), edge);
}

fn render_empty_state(frame: &mut Frame, area: Rect, block: Block<'_>, palette: &Palette) {
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let top = inner.height.saturating_sub(2) / 2;
    let mut lines = vec![Line::default(); usize::from(top)];
    lines.push(Line::from(Span::styled(
        "Nothing to read yet",
        palette.paper.add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from("Open a content pack: folio path/to/pack.toml"));

    frame.render_widget(
        Paragraph::new(lines)
            .style(palette.paper)
            .alignment(Alignment::Center),
        inner,
    );
}
