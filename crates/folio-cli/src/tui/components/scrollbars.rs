//! Page scrollbar
//!
//! 1 char wide, filled track with a solid thumb inside.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, Frame};

use crate::tui::themes::Theme;

/// Thumb geometry as (position, size) in rows, or None when nothing scrolls
pub fn thumb_geometry(
    height: usize,
    offset: usize,
    total: usize,
    visible: usize,
) -> Option<(usize, usize)> {
    if total <= visible || height == 0 {
        return None;
    }

    // Minimum 2 rows so the thumb stays visible on long pages
    let thumb_size = ((visible as f32 / total as f32) * height as f32)
        .max(2.0)
        .min(height as f32)
        .round() as usize;

    let max_offset = total.saturating_sub(visible);
    let thumb_pos = ((offset.min(max_offset) as f32 / max_offset as f32)
        * height.saturating_sub(thumb_size) as f32)
        .round() as usize;

    Some((thumb_pos, thumb_size))
}

/// Buffer-based scrollbar renderer
///
/// Visual: ░ (track) and █ (thumb)
pub fn render_scrollbar(
    buf: &mut Buffer,
    area: Rect,
    offset: usize,
    total: usize,
    visible: usize,
    thumb_color: Color,
    track_color: Color,
) {
    // Clear first so no stale glyphs remain when the bar disappears
    for y in 0..area.height {
        if let Some(cell) = buf.cell_mut((area.x, area.y + y)) {
            cell.set_char(' ');
            cell.set_fg(Color::Reset);
        }
    }

    let Some((thumb_pos, thumb_size)) =
        thumb_geometry(area.height as usize, offset, total, visible)
    else {
        return;
    };

    for y in 0..area.height as usize {
        let is_thumb = y >= thumb_pos && y < thumb_pos + thumb_size;
        let (ch, color) = if is_thumb {
            ('█', thumb_color)
        } else {
            ('░', track_color)
        };
        if let Some(cell) = buf.cell_mut((area.x, area.y + y as u16)) {
            cell.set_char(ch).set_fg(color);
        }
    }
}

/// Render the scrollbar beside the page
/// Convention: offset=0 is the top of the page
pub fn render_page_scrollbar(
    f: &mut Frame,
    area: Rect,
    offset: usize,
    total_lines: usize,
    visible_height: usize,
    theme: &Theme,
) {
    render_scrollbar(
        f.buffer_mut(),
        area,
        offset,
        total_lines,
        visible_height,
        theme.accent_color,
        theme.scrollbar_bg_color,
    );
}

/// Map a click on the scrollbar track to a scroll offset
pub fn offset_for_click(track: Rect, y: u16, max_scroll: usize) -> usize {
    if track.height <= 1 || max_scroll == 0 {
        return 0;
    }
    let rel = y.saturating_sub(track.y).min(track.height - 1) as f32;
    let ratio = rel / (track.height - 1) as f32;
    (ratio * max_scroll as f32).round() as usize
}
