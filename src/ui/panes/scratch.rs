//! Scratch block pane with a hex dump of the owned heap block

use super::utils::{pane_block, visible_items};
use crate::probe::ScratchBlock;
use crate::report::format_address;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Bytes shown per hex dump row
pub const BYTES_PER_ROW: usize = 8;

/// Hex dump rows as `0x<addr>: xx xx ...`
pub fn hex_rows(block: &ScratchBlock) -> Vec<String> {
    block
        .as_bytes()
        .chunks(BYTES_PER_ROW)
        .enumerate()
        .map(|(i, chunk)| {
            let mut row = format!("{}:", format_address(block.address() + i * BYTES_PER_ROW));
            for byte in chunk {
                row.push_str(&format!(" {:02x}", byte));
            }
            row
        })
        .collect()
}

/// Render the scratch block pane
pub fn render_scratch_pane(
    frame: &mut Frame,
    area: Rect,
    block: &ScratchBlock,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let pane = pane_block(" Scratch Block ", is_focused);

    let mut all_items = vec![ListItem::new(Line::from(vec![
        Span::styled(
            format_address(block.address()),
            Style::default().fg(DEFAULT_THEME.number),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("{} bytes", block.len()),
            Style::default().fg(DEFAULT_THEME.primary),
        ),
    ]))];

    all_items.extend(hex_rows(block).into_iter().map(|row| {
        ListItem::new(format!("  {}", row)).style(Style::default().fg(DEFAULT_THEME.comment))
    }));

    let list = List::new(visible_items(all_items, area, scroll_offset)).block(pane);
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_rows_wrap() {
        let block = ScratchBlock::allocate(20).expect("20 bytes");
        let rows = hex_rows(&block);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with(&format!("{}:", format_address(block.address()))));
        assert!(rows[0].ends_with(" 00 00 00 00 00 00 00 00"));
        assert!(rows[2].ends_with(": 00 00 00 00"));
    }
}
