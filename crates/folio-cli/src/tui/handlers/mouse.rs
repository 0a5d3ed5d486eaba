//! Mouse event handling
//!
//! Wheel scrolling, navbar link clicks, scrollbar drag, and form focus.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::app::App;
use crate::tui::components::scrollbars::offset_for_click;
use crate::tui::state::FormSlot;

/// Rows moved per wheel notch
const WHEEL_SCROLL_LINES: usize = 3;

impl App {
    /// Handle mouse events for scrolling and clicking
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_down(WHEEL_SCROLL_LINES),
            MouseEventKind::ScrollUp => self.scroll_up(WHEEL_SCROLL_LINES),
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_left_click(mouse.column, mouse.row);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.layout.dragging_scrollbar {
                    self.jump_to_scrollbar_position(mouse.row);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.layout.dragging_scrollbar = false;
            }
            _ => {}
        }
    }

    fn handle_left_click(&mut self, x: u16, y: u16) {
        if let Some(kind) = self.layout.nav_link_at(x, y) {
            self.focus.blur();
            self.navigate_to(kind);
            return;
        }

        if self.layout.in_scrollbar(x, y) {
            self.layout.dragging_scrollbar = true;
            self.jump_to_scrollbar_position(y);
            return;
        }

        if !self.layout.in_page(x, y) {
            return;
        }
        let slot = self
            .layout
            .page_row_at(y, self.scroll.offset)
            .and_then(|row| self.page.slot_at_row(row));
        match slot {
            Some(FormSlot::SendButton) => {
                self.focus.focus(FormSlot::SendButton);
                self.submit_form();
            }
            Some(slot) => self.focus.focus(slot),
            None => self.focus.blur(),
        }
    }

    fn jump_to_scrollbar_position(&mut self, y: u16) {
        if let Some(track) = self.layout.page_scrollbar_area {
            let offset = offset_for_click(track, y, self.scroll.max_scroll);
            self.scroll_to(offset);
        }
    }
}
