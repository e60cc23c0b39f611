use crate::ui::app::{App, PageFocus, QUESTION, REJECT_MESSAGE};
use crate::ui::layout::PageLayout;
use crate::ui::modal::{ModalKind, ModalLayout};
use crate::ui::photo::{PhotoView, PLACEHOLDER_GLYPH};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let theme = &app.theme;

    frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), area);

    match PageLayout::compute(area) {
        Some(layout) => render_page(frame, app, &layout),
        None => render_too_small(frame, theme, area),
    }

    // Reject is drawn last so it sits above accept when both are open
    if app.accept_modal_open {
        render_modal(frame, app, ModalKind::Accept, area);
    }
    if app.reject_modal_open {
        render_modal(frame, app, ModalKind::Reject, area);
    }
}

fn render_page(frame: &mut Frame, app: &App, layout: &PageLayout) {
    let theme = &app.theme;

    let buf = frame.buffer_mut();
    for heart in &layout.hearts {
        if let Some(cell) = buf.cell_mut(*heart) {
            cell.set_symbol(PLACEHOLDER_GLYPH)
                .set_style(Style::default().fg(theme.fg_dim).bg(theme.bg));
        }
    }

    let title = Paragraph::new(Line::from(Span::styled(
        QUESTION,
        Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    render_button(
        frame,
        "Yes",
        layout.yes_button,
        Style::default()
            .fg(theme.accent_fg)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD),
        if app.focus == PageFocus::Yes {
            theme.focus
        } else {
            theme.accent
        },
    );

    // A hidden button leaves its slot empty so nothing else shifts
    if app.no_button_visibility().is_visible() {
        render_button(
            frame,
            "No",
            layout.no_button,
            Style::default().fg(theme.secondary_fg).bg(theme.surface),
            if app.focus == PageFocus::No {
                theme.focus
            } else {
                theme.secondary
            },
        );
    }

    render_footer(frame, app, layout.footer);
}

fn render_button(frame: &mut Frame, label: &str, area: Rect, style: Style, border: Color) {
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style.fg(border)),
        );
    frame.render_widget(button, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.top_modal().is_some() {
        "[Enter/Esc] Close  [Ctrl+C] Quit"
    } else {
        "[Y] Yes  [Tab] Switch  [Enter] Choose  [Q] Quit"
    };

    let footer = Paragraph::new(help_text)
        .style(Style::default().fg(app.theme.fg_dim).bg(app.theme.bg))
        .block(Block::default());

    frame.render_widget(footer, area);
}

fn render_too_small(frame: &mut Frame, theme: &Theme, area: Rect) {
    let text = format!(
        "Terminal too small ({}x{} needed)",
        PageLayout::MIN_WIDTH,
        PageLayout::MIN_HEIGHT
    );
    let message = Paragraph::new(text)
        .style(Style::default().fg(theme.fg).bg(theme.bg))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(message, area);
}

fn render_modal(frame: &mut Frame, app: &App, kind: ModalKind, area: Rect) {
    let theme = &app.theme;
    let layout = ModalLayout::compute(kind, area);

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.overlay)),
        layout.backdrop,
    );
    frame.render_widget(Clear, layout.content);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(kind.title())
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.surface));
    frame.render_widget(block, layout.content);

    if let Some(image) = layout.image {
        frame.render_widget(
            PhotoView::new(&app.photo).placeholder_colors(theme.photo_bg, theme.accent),
            image,
        );
    }

    let text = match kind {
        ModalKind::Accept => app.message.as_str(),
        ModalKind::Reject => REJECT_MESSAGE,
    };
    let message = Paragraph::new(Span::styled(
        text,
        Style::default()
            .fg(theme.fg)
            .bg(theme.surface)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(message, layout.message);

    render_button(
        frame,
        kind.button_label(),
        layout.button,
        Style::default().fg(theme.accent_fg).bg(theme.accent),
        theme.focus,
    );
}
