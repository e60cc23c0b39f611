use crate::ui::avoidance::{CursorAvoidance, Visibility};
use crate::ui::config::DEFAULT_MESSAGE;
use crate::ui::layout::PageLayout;
use crate::ui::modal::{ModalHit, ModalKind, ModalLayout};
use crate::ui::photo::Photo;
use crate::ui::theme::Theme;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

pub const QUESTION: &str = "Would you be my valentine?";
pub const REJECT_MESSAGE: &str = "Wrong answer, try again.";

/// Which page button has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageFocus {
    #[default]
    Yes,
    No,
}

pub struct App {
    pub accept_modal_open: bool,
    pub reject_modal_open: bool,
    pub avoidance: CursorAvoidance,
    pub focus: PageFocus,
    pub last_pointer: Option<Position>,
    pub should_quit: bool,
    pub theme: Theme,
    pub photo: Photo,
    pub message: String,
}

impl App {
    pub fn new(theme: Theme, photo: Photo) -> Self {
        Self {
            accept_modal_open: false,
            reject_modal_open: false,
            avoidance: CursorAvoidance::default(),
            focus: PageFocus::Yes,
            last_pointer: None,
            should_quit: false,
            theme,
            photo,
            message: DEFAULT_MESSAGE.to_string(),
        }
    }

    pub fn with_avoidance(mut self, avoidance: CursorAvoidance) -> Self {
        self.avoidance = avoidance;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn no_button_visibility(&self) -> Visibility {
        self.avoidance.visibility()
    }

    pub fn open_accept_modal(&mut self) {
        self.accept_modal_open = true;
        tracing::debug!("accept modal opened");
    }

    pub fn close_accept_modal(&mut self) {
        self.accept_modal_open = false;
        tracing::debug!("accept modal closed");
    }

    pub fn open_reject_modal(&mut self) {
        self.reject_modal_open = true;
        tracing::debug!("reject modal opened");
    }

    pub fn close_reject_modal(&mut self) {
        self.reject_modal_open = false;
        tracing::debug!("reject modal closed");
    }

    /// The modal that receives input: reject is drawn above accept.
    pub fn top_modal(&self) -> Option<ModalKind> {
        if self.reject_modal_open {
            Some(ModalKind::Reject)
        } else if self.accept_modal_open {
            Some(ModalKind::Accept)
        } else {
            None
        }
    }

    pub fn close_modal(&mut self, kind: ModalKind) {
        match kind {
            ModalKind::Accept => self.close_accept_modal(),
            ModalKind::Reject => self.close_reject_modal(),
        }
    }

    /// Click on the evasive button. Does nothing while it is hidden.
    pub fn press_no(&mut self) {
        if self.no_button_visibility().is_interactive() {
            self.open_reject_modal();
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PageFocus::Yes if self.no_button_visibility().is_interactive() => PageFocus::No,
            _ => PageFocus::Yes,
        };
    }

    pub fn activate_focused(&mut self) {
        match self.focus {
            PageFocus::Yes => self.open_accept_modal(),
            PageFocus::No => self.press_no(),
        }
    }

    /// Re-evaluate the evasive button against the pointer at `pos`.
    ///
    /// The button is measured from `area` on every call.
    pub fn handle_pointer(&mut self, pos: Position, area: Rect) {
        self.last_pointer = Some(pos);
        let target = PageLayout::compute(area).map(|layout| layout.no_button);
        if self.avoidance.on_pointer_move(pos, target) {
            tracing::trace!(
                visibility = ?self.avoidance.visibility(),
                x = pos.x,
                y = pos.y,
                "evasive button visibility changed"
            );
        }
        if !self.no_button_visibility().is_interactive() && self.focus == PageFocus::No {
            self.focus = PageFocus::Yes;
        }
    }

    /// Left click at `pos`. Open modals swallow the click before the page.
    pub fn handle_click(&mut self, pos: Position, area: Rect) {
        if let Some(kind) = self.top_modal() {
            match ModalLayout::compute(kind, area).hit(pos) {
                ModalHit::Button | ModalHit::Backdrop => self.close_modal(kind),
                ModalHit::Content => {}
            }
            return;
        }

        let Some(layout) = PageLayout::compute(area) else {
            return;
        };
        if layout.yes_button.contains(pos) {
            self.focus = PageFocus::Yes;
            self.open_accept_modal();
        } else if layout.no_button.contains(pos) {
            self.press_no();
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        let pos = Position::new(mouse.column, mouse.row);
        // Every mouse event carries a position, so track it before acting
        self.handle_pointer(pos, area);

        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            self.handle_click(pos, area);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if let Some(kind) = self.top_modal() {
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc | KeyCode::Char('q') => {
                    self.close_modal(kind);
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.focus = PageFocus::Yes;
                self.open_accept_modal();
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                self.toggle_focus();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.activate_focused();
            }
            _ => {}
        }
    }

    /// Dispatch one terminal event. `area` is the current terminal size.
    pub fn handle_event(&mut self, event: Event, area: Rect) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse, area),
            Event::Resize(width, height) => {
                // The button may have moved under a pointer that did not
                if let Some(pos) = self.last_pointer {
                    self.handle_pointer(pos, Rect::new(area.x, area.y, width, height));
                }
            }
            _ => {}
        }
    }
}
