//! Storage class summary pane

use super::utils::{pane_block, visible_items};
use crate::report::{format_address, spans::class_spans, Report, StorageClass};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Render the per-class span of every storage class in `report`
pub fn render_classes_pane(
    frame: &mut Frame,
    area: Rect,
    report: &Report,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Storage Classes ", is_focused);
    let spans = class_spans(report);

    let mut all_items = Vec::new();
    for class in StorageClass::ALL {
        let Some(span) = spans.get(&class) else {
            continue;
        };
        let class_style = Style::default().fg(DEFAULT_THEME.class_color(class));

        all_items.push(ListItem::new(Line::from(vec![
            Span::styled(class.name(), class_style.add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(" ({})", class.conventional_segment()),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ])));

        let range = if span.count == 1 {
            format_address(span.low)
        } else {
            format!("{}..={}", format_address(span.low), format_address(span.high))
        };
        all_items.push(ListItem::new(Line::from(vec![
            Span::raw("  "),
            Span::styled(range, Style::default().fg(DEFAULT_THEME.number)),
            Span::styled(
                format!("  {} item{}", span.count, if span.count == 1 { "" } else { "s" }),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ])));
    }

    let list = List::new(visible_items(all_items, area, scroll_offset)).block(block);
    frame.render_widget(list, area);
}
