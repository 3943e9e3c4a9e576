//! Footer: navigation buttons, page label and progress bar.

use super::layout::{page_label, ReaderLayout};
use super::styles::Palette;
use crate::pagination::PaginationSnapshot;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

const PREV_LABEL: &str = "[‹ Prev]";
const NEXT_LABEL: &str = "[Next ›]";
const FILLED: &str = "━";
const EMPTY: &str = "─";

/// Number of track cells to fill for `progress` on a `width`-cell bar.
pub fn filled_cells(progress: f64, width: u16) -> u16 {
    if !progress.is_finite() {
        return 0;
    }
    (progress.clamp(0.0, 1.0) * f64::from(width)).round() as u16
}

/// Draw every footer element present in `layout`.
pub fn render_footer(
    frame: &mut Frame,
    layout: &ReaderLayout,
    snapshot: &PaginationSnapshot<'_>,
    palette: &Palette,
) {
    let Some(footer) = layout.footer else {
        return;
    };
    frame.render_widget(Block::default().style(palette.chrome), footer);

    let button_style = |enabled: bool| if enabled { palette.accent } else { palette.muted };

    if let Some(area) = layout.prev_button {
        frame.render_widget(
            Paragraph::new(Span::styled(PREV_LABEL, button_style(snapshot.can_go_prev))),
            area,
        );
    }
    if let Some(area) = layout.next_button {
        frame.render_widget(
            Paragraph::new(Span::styled(NEXT_LABEL, button_style(snapshot.can_go_next)))
                .alignment(Alignment::Right),
            area,
        );
    }
    if let Some(area) = layout.page_label {
        let label = page_label(snapshot.current_index, snapshot.total_pages);
        frame.render_widget(
            Paragraph::new(label)
                .style(palette.chrome)
                .alignment(Alignment::Center),
            area,
        );
    }
    if let Some(area) = layout.progress_bar {
        let filled = filled_cells(snapshot.progress, area.width);
        let track = Line::from(vec![
            Span::styled(FILLED.repeat(usize::from(filled)), palette.progress_filled),
            Span::styled(
                EMPTY.repeat(usize::from(area.width - filled)),
                palette.progress_empty,
            ),
        ]);
        frame.render_widget(Paragraph::new(track), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentEntry, DisplayPreferences, EntryId, PageContentStore};
    use crate::pagination::PaginationController;
    use crate::view::styles::ColorConfig;
    use ratatui::{backend::TestBackend, layout::Rect, Terminal};

    fn footer_row(start: usize, prefs: &DisplayPreferences) -> String {
        let entries = (0..4)
            .map(|i| ContentEntry::new(EntryId::new(format!("p{i}")).unwrap(), "x"))
            .collect();
        let controller =
            PaginationController::new(PageContentStore::new(entries).unwrap()).with_start_index(start);
        let layout = ReaderLayout::compute(Rect::new(0, 0, 40, 5), prefs, 4);
        let palette = Palette::new(prefs, ColorConfig::from_env_and_args(true));

        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
        terminal
            .draw(|frame| render_footer(frame, &layout, &controller.snapshot(), &palette))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..40).map(|x| buffer[(x, 4)].symbol()).collect()
    }

    #[test]
    fn filled_cells_scale_with_progress() {
        assert_eq!(filled_cells(0.0, 20), 0);
        assert_eq!(filled_cells(0.5, 20), 10);
        assert_eq!(filled_cells(1.0, 20), 20);
        assert_eq!(filled_cells(f64::NAN, 20), 0);
        assert_eq!(filled_cells(3.0, 20), 20);
    }

    #[test]
    fn footer_renders_all_elements() {
        let row = footer_row(1, &DisplayPreferences::default());
        insta::assert_snapshot!(row, @"[‹ Prev] 2 / 4 ━━━━━━━━━────────[Next ›]");
    }

    #[test]
    fn footer_without_buttons() {
        let prefs = DisplayPreferences {
            show_navigation: false,
            ..DisplayPreferences::default()
        };
        let row = footer_row(3, &prefs);
        assert!(row.starts_with(" 4 / 4 "), "got {row:?}");
        assert!(!row.contains("Prev"));
        assert!(row.trim_end().ends_with(FILLED));
    }
}
