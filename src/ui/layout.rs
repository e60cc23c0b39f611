//! # Page Layout
//!
//! Pure geometry for the proposal page. Both the renderer and the pointer
//! handling call [`PageLayout::compute`] with the current terminal area, so
//! the evasive button is always measured where it is actually drawn.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │   ♥                                      │
//! │                              ♥           │
//! │        Would you be my valentine?        │
//! │                                          │
//! │        ╭─────────╮    ╭────────╮         │
//! │        │   Yes   │    │   No   │         │
//! │        ╰─────────╯    ╰────────╯         │
//! │      ♥                            ♥      │
//! │ [Y] Yes  [Tab] Switch  [Q] Quit          │
//! └──────────────────────────────────────────┘
//! ```

use ratatui::layout::{Position, Rect};

pub const YES_BUTTON_WIDTH: u16 = 11;
pub const NO_BUTTON_WIDTH: u16 = 10;
pub const BUTTON_HEIGHT: u16 = 3;
pub const BUTTON_GAP: u16 = 4;

/// Title row, one blank row, then the button row.
const CONTENT_HEIGHT: u16 = 1 + 2 + BUTTON_HEIGHT;
const FOOTER_HEIGHT: u16 = 1;

/// Background hearts as (percent from left, percent from top).
const HEART_ANCHORS: [(u16, u16); 4] = [(10, 20), (85, 30), (20, 75), (90, 85)];

/// Measured positions of everything on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub body: Rect,
    pub footer: Rect,
    pub title: Rect,
    pub yes_button: Rect,
    pub no_button: Rect,
    pub hearts: Vec<Position>,
}

impl PageLayout {
    /// Smallest width that fits both buttons side by side.
    pub const MIN_WIDTH: u16 = YES_BUTTON_WIDTH + BUTTON_GAP + NO_BUTTON_WIDTH + 2;
    /// Smallest height that fits the content plus the footer.
    pub const MIN_HEIGHT: u16 = CONTENT_HEIGHT + FOOTER_HEIGHT;

    /// Lay out the page inside `area`.
    ///
    /// Returns `None` when the area is too small to show the buttons; the
    /// buttons are then considered unmounted.
    pub fn compute(area: Rect) -> Option<Self> {
        if area.width < Self::MIN_WIDTH || area.height < Self::MIN_HEIGHT {
            return None;
        }

        let body = Rect::new(area.x, area.y, area.width, area.height - FOOTER_HEIGHT);
        let footer = Rect::new(area.x, body.bottom(), area.width, FOOTER_HEIGHT);

        let top = body.y + (body.height - CONTENT_HEIGHT) / 2;
        let title = Rect::new(body.x, top, body.width, 1);

        let row_width = YES_BUTTON_WIDTH + BUTTON_GAP + NO_BUTTON_WIDTH;
        let left = body.x + (body.width - row_width) / 2;
        let button_y = top + 3;
        let yes_button = Rect::new(left, button_y, YES_BUTTON_WIDTH, BUTTON_HEIGHT);
        let no_button = Rect::new(
            left + YES_BUTTON_WIDTH + BUTTON_GAP,
            button_y,
            NO_BUTTON_WIDTH,
            BUTTON_HEIGHT,
        );

        let hearts = HEART_ANCHORS
            .iter()
            .map(|&(px, py)| {
                let x =
                    body.x + (u32::from(body.width.saturating_sub(1)) * u32::from(px) / 100) as u16;
                let y = body.y
                    + (u32::from(body.height.saturating_sub(1)) * u32::from(py) / 100) as u16;
                Position::new(x, y)
            })
            .filter(|heart| {
                !title.contains(*heart)
                    && !yes_button.contains(*heart)
                    && !no_button.contains(*heart)
            })
            .collect();

        Some(Self {
            body,
            footer,
            title,
            yes_button,
            no_button,
            hearts,
        })
    }
}

/// Rectangle of `width` × `height` centered in `area`, clipped to it.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_small_area_has_no_layout() {
        assert!(PageLayout::compute(Rect::new(0, 0, 20, 24)).is_none());
        assert!(PageLayout::compute(Rect::new(0, 0, 80, 5)).is_none());
    }

    #[test]
    fn test_minimum_area_fits() {
        let area = Rect::new(0, 0, PageLayout::MIN_WIDTH, PageLayout::MIN_HEIGHT);
        let layout = PageLayout::compute(area).expect("layout fits");
        assert!(area.contains(Position::new(
            layout.no_button.right() - 1,
            layout.no_button.bottom() - 1
        )));
    }

    #[test]
    fn test_buttons_share_a_row_and_do_not_overlap() {
        let layout = PageLayout::compute(Rect::new(0, 0, 80, 24)).expect("layout fits");
        assert_eq!(layout.yes_button.y, layout.no_button.y);
        assert!(layout.yes_button.right() < layout.no_button.x);
        assert!(layout.title.y < layout.yes_button.y);
    }

    #[test]
    fn test_footer_is_last_row() {
        let layout = PageLayout::compute(Rect::new(0, 0, 80, 24)).expect("layout fits");
        assert_eq!(layout.footer, Rect::new(0, 23, 80, 1));
        assert_eq!(layout.body.height, 23);
    }

    #[test]
    fn test_hearts_stay_inside_body() {
        let layout = PageLayout::compute(Rect::new(0, 0, 120, 40)).expect("layout fits");
        assert!(!layout.hearts.is_empty());
        for heart in &layout.hearts {
            assert!(layout.body.contains(*heart));
        }
    }

    #[test]
    fn test_layout_follows_area_offset() {
        let a = PageLayout::compute(Rect::new(0, 0, 80, 24)).expect("layout fits");
        let b = PageLayout::compute(Rect::new(5, 2, 80, 24)).expect("layout fits");
        assert_eq!(b.no_button.x, a.no_button.x + 5);
        assert_eq!(b.no_button.y, a.no_button.y + 2);
    }

    #[test]
    fn test_centered_clips_to_area() {
        let area = Rect::new(0, 0, 10, 4);
        assert_eq!(centered(area, 20, 20), area);
        assert_eq!(centered(area, 4, 2), Rect::new(3, 1, 4, 2));
    }
}
