//! # Modals
//!
//! Geometry and hit testing for the two overlay dialogs. A click on the
//! dimmed backdrop closes a modal; a click inside its content box never
//! does, unless it lands on the dialog's button.

use super::layout::centered;
use ratatui::layout::{Position, Rect};

/// The two dialogs the page can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    /// Opened by "Yes": photo plus love message.
    Accept,
    /// Opened by "No": the rebuke.
    Reject,
}

impl ModalKind {
    pub fn title(self) -> &'static str {
        match self {
            ModalKind::Accept => " Love message ",
            ModalKind::Reject => " Wrong answer ",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            ModalKind::Accept => "Close",
            ModalKind::Reject => "OK",
        }
    }
}

/// Where a click landed relative to an open modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalHit {
    /// The dialog's Close/OK button.
    Button,
    /// Somewhere inside the content box.
    Content,
    /// The backdrop outside the content box.
    Backdrop,
}

const ACCEPT_WIDTH: u16 = 44;
const ACCEPT_HEIGHT: u16 = 22;
const REJECT_WIDTH: u16 = 40;
const REJECT_HEIGHT: u16 = 8;
const MODAL_BUTTON_WIDTH: u16 = 11;
const MODAL_BUTTON_HEIGHT: u16 = 3;

/// Measured positions inside a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    pub kind: ModalKind,
    /// Full-screen backdrop.
    pub backdrop: Rect,
    /// Bordered content box.
    pub content: Rect,
    /// Photo region, only for the accept modal and only when it fits.
    pub image: Option<Rect>,
    pub message: Rect,
    pub button: Rect,
}

impl ModalLayout {
    pub fn compute(kind: ModalKind, area: Rect) -> Self {
        let (width, height) = match kind {
            ModalKind::Accept => (ACCEPT_WIDTH, ACCEPT_HEIGHT),
            ModalKind::Reject => (REJECT_WIDTH, REJECT_HEIGHT),
        };
        let content = centered(
            area,
            width.min(area.width.saturating_sub(4)),
            height.min(area.height.saturating_sub(2)),
        );
        let inner = Rect::new(
            content.x.saturating_add(1),
            content.y.saturating_add(1),
            content.width.saturating_sub(2),
            content.height.saturating_sub(2),
        );

        // Bottom-up: button, blank row, message, blank row, then the photo
        let button_height = MODAL_BUTTON_HEIGHT.min(inner.height);
        let button_width = MODAL_BUTTON_WIDTH.min(inner.width);
        let button = Rect::new(
            inner.x + (inner.width - button_width) / 2,
            inner.bottom() - button_height,
            button_width,
            button_height,
        );
        let message = Rect::new(
            inner.x,
            button.y.saturating_sub(2).max(inner.y),
            inner.width,
            1,
        )
        .intersection(inner);

        let image = match kind {
            ModalKind::Accept => {
                let height = message.y.saturating_sub(inner.y + 1);
                (height >= 2).then(|| Rect::new(inner.x, inner.y, inner.width, height))
            }
            ModalKind::Reject => None,
        };

        Self {
            kind,
            backdrop: area,
            content,
            image,
            message,
            button,
        }
    }

    pub fn hit(&self, pos: Position) -> ModalHit {
        if self.button.contains(pos) {
            ModalHit::Button
        } else if self.content.contains(pos) {
            ModalHit::Content
        } else {
            ModalHit::Backdrop
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::new(0, 0, 80, 30)
    }

    #[test]
    fn test_accept_modal_has_image_region() {
        let layout = ModalLayout::compute(ModalKind::Accept, area());
        let image = layout.image.expect("image fits");
        assert!(image.bottom() <= layout.message.y);
        assert!(layout.content.contains(Position::new(image.x, image.y)));
    }

    #[test]
    fn test_reject_modal_has_no_image() {
        let layout = ModalLayout::compute(ModalKind::Reject, area());
        assert!(layout.image.is_none());
    }

    #[test]
    fn test_message_sits_above_button() {
        for kind in [ModalKind::Accept, ModalKind::Reject] {
            let layout = ModalLayout::compute(kind, area());
            assert!(layout.message.y < layout.button.y);
            assert!(layout
                .content
                .contains(Position::new(layout.button.x, layout.button.y)));
        }
    }

    #[test]
    fn test_hit_regions() {
        let layout = ModalLayout::compute(ModalKind::Reject, area());
        assert_eq!(
            layout.hit(Position::new(layout.button.x + 1, layout.button.y + 1)),
            ModalHit::Button
        );
        assert_eq!(
            layout.hit(Position::new(layout.content.x + 1, layout.content.y + 1)),
            ModalHit::Content
        );
        assert_eq!(layout.hit(Position::new(0, 0)), ModalHit::Backdrop);
    }

    #[test]
    fn test_small_area_image_is_dropped() {
        let layout = ModalLayout::compute(ModalKind::Accept, Rect::new(0, 0, 30, 10));
        assert!(layout.image.is_none());
        assert!(layout
            .backdrop
            .contains(Position::new(layout.content.x, layout.content.y)));
    }
}
