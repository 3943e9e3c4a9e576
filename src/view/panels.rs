//! Settings and table-of-contents overlays.

use super::constants::{PANEL_POPUP_HEIGHT_PERCENT, PANEL_POPUP_WIDTH_PERCENT};
use super::help::centered_rect;
use super::styles::Palette;
use crate::content::sanitize_body;
use crate::model::DisplayPreferences;
use crate::pagination::PaginationController;
use crate::state::SettingField;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

fn panel<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(palette.border_type)
        .border_style(palette.accent)
        .style(palette.chrome)
}

fn render_hint(frame: &mut Frame, popup: Rect, hint: &str, palette: &Palette) {
    let hint_area = Rect {
        x: popup.x,
        y: popup.y + popup.height.saturating_sub(1),
        width: popup.width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hint, palette.muted)).alignment(Alignment::Center),
        hint_area,
    );
}

/// Settings overlay: one row per display preference.
pub fn render_settings_panel(
    frame: &mut Frame,
    prefs: &DisplayPreferences,
    cursor: usize,
    palette: &Palette,
) {
    let popup = centered_rect(
        PANEL_POPUP_WIDTH_PERCENT,
        PANEL_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );
    frame.render_widget(Clear, popup);

    let label_width = SettingField::ALL
        .iter()
        .map(|f| f.label().len())
        .max()
        .unwrap_or(0);
    let items: Vec<ListItem> = SettingField::ALL
        .iter()
        .map(|field| {
            ListItem::new(Line::from(vec![
                Span::raw(format!(" {:<label_width$}  ", field.label())),
                Span::styled(field.value_label(prefs), palette.accent),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(panel(" Display Settings ", palette))
        .highlight_style(palette.chrome.add_modifier(Modifier::REVERSED));
    let mut list_state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, popup, &mut list_state);

    render_hint(frame, popup, " ↑↓ select  ←→ change  Esc close ", palette);
}

/// Contents overlay: one row per titled page.
pub fn render_contents_panel(
    frame: &mut Frame,
    controller: &PaginationController,
    cursor: usize,
    palette: &Palette,
) {
    let popup = centered_rect(
        PANEL_POPUP_WIDTH_PERCENT,
        PANEL_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );
    frame.render_widget(Clear, popup);

    let current = controller.current_index();
    let items: Vec<ListItem> = controller
        .store()
        .chapters()
        .map(|(index, title)| {
            let marker = if index == current { "•" } else { " " };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {marker} "), palette.accent),
                Span::raw(sanitize_body(title).into_owned()),
                Span::styled(format!("  p.{}", index + 1), palette.muted),
            ]))
        })
        .collect();

    let block = panel(" Contents ", palette);
    if items.is_empty() {
        frame.render_widget(
            Paragraph::new("No titled pages")
                .block(block)
                .alignment(Alignment::Center),
            popup,
        );
    } else {
        let list = List::new(items)
            .block(block)
            .highlight_style(palette.chrome.add_modifier(Modifier::REVERSED));
        let mut list_state = ListState::default().with_selected(Some(cursor));
        frame.render_stateful_widget(list, popup, &mut list_state);
    }

    render_hint(frame, popup, " ↑↓ select  Enter open  Esc close ", palette);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentEntry, EntryId, PageContentStore};
    use crate::view::styles::ColorConfig;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn text(buffer: &Buffer) -> String {
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn palette() -> Palette {
        Palette::new(
            &DisplayPreferences::default(),
            ColorConfig::from_env_and_args(true),
        )
    }

    #[test]
    fn settings_panel_lists_every_field_with_value() {
        let prefs = DisplayPreferences::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| render_settings_panel(frame, &prefs, 0, &palette()))
            .unwrap();
        let text = text(terminal.backend().buffer());

        assert!(text.contains("Display Settings"));
        for field in SettingField::ALL {
            assert!(text.contains(field.label()), "missing {}", field.label());
        }
        assert!(text.contains("#f5f0e6"));
    }

    #[test]
    fn settings_panel_highlights_cursor_row() {
        let prefs = DisplayPreferences::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| render_settings_panel(frame, &prefs, 2, &palette()))
            .unwrap();
        let buffer = terminal.backend().buffer();

        let highlighted: Vec<String> = (0..buffer.area.height)
            .filter(|&y| {
                (0..buffer.area.width)
                    .any(|x| buffer[(x, y)].modifier.contains(Modifier::REVERSED))
            })
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect();
        assert_eq!(highlighted.len(), 1);
        assert!(highlighted[0].contains("Chapter title"));
    }

    #[test]
    fn contents_panel_marks_current_chapter() {
        let page = |id: &str| ContentEntry::new(EntryId::new(id).unwrap(), "");
        let store = PageContentStore::new(vec![
            page("a").with_title("Intro"),
            page("b"),
            page("c").with_title("Projects"),
        ])
        .unwrap();
        let controller = PaginationController::new(store).with_start_index(2);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| render_contents_panel(frame, &controller, 1, &palette()))
            .unwrap();
        let text = text(terminal.backend().buffer());

        assert!(text.contains("Intro  p.1"));
        assert!(text.contains("• Projects  p.3"));
    }

    #[test]
    fn contents_panel_without_titles_says_so() {
        let controller = PaginationController::new(PageContentStore::empty());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| render_contents_panel(frame, &controller, 0, &palette()))
            .unwrap();
        assert!(text(terminal.backend().buffer()).contains("No titled pages"));
    }
}
