//! Address map pane
//!
//! Lists every probed address plus the scratch block, sorted by address, so
//! the relative placement of stack slots, statics and the heap block can be
//! read top to bottom. Each row shows the byte distance to the row below it.

use super::utils::{pane_block, visible_items};
use crate::report::{format_address, Address, Report, StorageClass};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Label used for the scratch block row
pub const BLOCK_ROW_NAME: &str = "[block]";

/// One row of the address map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapRow {
    pub name: &'static str,
    pub address: Address,
    pub class: StorageClass,
    /// Distance to the following row, `None` for the last row
    pub distance: Option<usize>,
}

/// Build the map rows, highest address first when `descending`
pub fn map_rows(report: &Report, descending: bool) -> Vec<MapRow> {
    let mut rows: Vec<MapRow> = report
        .entries()
        .iter()
        .map(|entry| MapRow {
            name: entry.label.as_str(),
            address: entry.address,
            class: entry.storage_class(),
            distance: None,
        })
        .collect();
    rows.push(MapRow {
        name: BLOCK_ROW_NAME,
        address: report.block().address,
        class: StorageClass::Dynamic,
        distance: None,
    });

    // Stable sort keeps report order for equal addresses
    if descending {
        rows.sort_by(|a, b| b.address.cmp(&a.address));
    } else {
        rows.sort_by_key(|row| row.address);
    }

    for i in 1..rows.len() {
        let distance = rows[i - 1].address.abs_diff(rows[i].address);
        rows[i - 1].distance = Some(distance);
    }

    rows
}

/// Render the address map pane
pub fn render_map_pane(
    frame: &mut Frame,
    area: Rect,
    report: &Report,
    descending: bool,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = if descending {
        " Address Map (high → low) "
    } else {
        " Address Map (low → high) "
    };
    let block = pane_block(title, is_focused);

    let rows = map_rows(report, descending);
    let address_width = rows
        .iter()
        .map(|row| format_address(row.address).len())
        .max()
        .unwrap_or(0);

    let all_items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let class_style = Style::default().fg(DEFAULT_THEME.class_color(row.class));
            let mut spans = vec![
                Span::styled(
                    format!("{:>width$}", format_address(row.address), width = address_width),
                    Style::default().fg(DEFAULT_THEME.number),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{:<7}", row.name),
                    class_style.add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {:<18}", row.class.name()),
                    class_style,
                ),
                Span::styled(
                    format!(" {:<5}", row.class.conventional_segment()),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ];
            if let Some(distance) = row.distance {
                spans.push(Span::styled(
                    format!(" Δ {}", distance),
                    Style::default().fg(DEFAULT_THEME.comment),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(visible_items(all_items, area, scroll_offset)).block(block);
    frame.render_widget(list, area);
}
