//! Clickable list component: rendered lines paired with click targets.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::text::Line;
use ratzilla::ratatui::widgets::{Paragraph, Wrap};

use crate::input::ClickState;

/// Collects [`Line`]s and remembers which of them are buttons.
///
/// Rows are computed when targets are registered, so inserting a line
/// above a button moves its target along with it.
///
/// ```ignore
/// let mut cl = ClickableList::new();
/// cl.push(Line::from("Shop"));
/// cl.push_clickable(Line::from("[B] Bonus"), BUY_BONUS);
/// cl.register_targets(area, &mut cs, 1, 1, 0);
/// f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
/// ```
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)` pairs.
    actions: Vec<(u16, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Add a non-clickable line.
    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// Add a line that triggers `action_id` when tapped.
    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        let idx = self.lines.len() as u16;
        self.actions.push((idx, action_id));
        self.lines.push(line);
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register click targets for every clickable line.
    ///
    /// `top_offset`/`bottom_offset` are the rows taken by borders. Pass the
    /// content width as `inner_width` when the paragraph wraps, or `0` when
    /// every line occupies exactly one row.
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        inner_width: u16,
    ) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);

        let mut visual_row: u16 = 0;
        let mut next_action = self.actions.iter().peekable();
        for (idx, line) in self.lines.iter().enumerate() {
            let height = if inner_width == 0 {
                1
            } else {
                wrapped_height(line, inner_width)
            };

            if let Some(&&(line_idx, action_id)) = next_action.peek() {
                if line_idx as usize == idx {
                    next_action.next();
                    for r in 0..height {
                        let row = content_y + visual_row + r;
                        if row >= content_end {
                            break;
                        }
                        cs.add_row_target(area, row, action_id);
                    }
                }
            }
            visual_row += height;
        }
    }
}

/// Rows `line` takes when rendered with `Wrap { trim: false }`. Word
/// wrapping can need more rows than the character count suggests.
fn wrapped_height(line: &Line<'_>, width: u16) -> u16 {
    let rows = Paragraph::new(line.clone())
        .wrap(Wrap { trim: false })
        .line_count(width);
    rows.max(1) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clickable_rows_follow_headers() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("header"));
        cl.push_clickable(Line::from("item 0"), 10);
        cl.push_clickable(Line::from("item 1"), 11);
        cl.push(Line::from("footer"));

        let area = Rect::new(0, 5, 80, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0);

        assert_eq!(cs.targets.len(), 2);
        assert_eq!(cs.hit_test(10, 6), None);
        assert_eq!(cs.hit_test(10, 7), Some(10));
        assert_eq!(cs.hit_test(10, 8), Some(11));
        assert_eq!(cs.hit_test(10, 9), None);
    }

    #[test]
    fn targets_clipped_by_area() {
        let mut cl = ClickableList::new();
        for i in 0..20 {
            cl.push_clickable(Line::from(format!("item {}", i)), 50 + i as u16);
        }

        let area = Rect::new(0, 0, 80, 5);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0);

        assert_eq!(cs.targets.len(), 3);
        assert_eq!(cs.hit_test(10, 3), Some(52));
        assert_eq!(cs.hit_test(10, 4), None);
    }

    #[test]
    fn wrapped_line_covers_every_row() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("12345678901234567890")); // 2 rows at width 10
        cl.push_clickable(Line::from("123456789012345"), 42); // 2 rows
        cl.push_clickable(Line::from("tail"), 43);

        let area = Rect::new(0, 0, 12, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 0, 10);

        assert_eq!(cs.hit_test(5, 1), None);
        assert_eq!(cs.hit_test(5, 2), Some(42));
        assert_eq!(cs.hit_test(5, 3), Some(42));
        assert_eq!(cs.hit_test(5, 4), Some(43));
    }

    #[test]
    fn word_wrap_pushes_next_button_down() {
        let mut cl = ClickableList::new();
        // 19 columns, but word wrapping at width 10 needs three rows.
        cl.push_clickable(Line::from("aaaaaaa bbbbbbb ccc"), 1);
        cl.push_clickable(Line::from("next"), 2);

        let area = Rect::new(0, 0, 12, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 0, 10);

        assert_eq!(cs.hit_test(5, 2), Some(1));
        assert_eq!(cs.hit_test(5, 3), Some(2));
        assert_eq!(cs.hit_test(5, 4), None);
    }

    #[test]
    fn empty_list_registers_nothing() {
        let cl: ClickableList = ClickableList::new();
        let mut cs = ClickState::new();
        cl.register_targets(Rect::new(0, 0, 80, 10), &mut cs, 1, 1, 0);
        assert!(cs.targets.is_empty());
    }
}
