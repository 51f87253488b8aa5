use course_core::theme::{Element, Theme};
use ratatui::{
    prelude::{Frame, Rect},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const PLACEHOLDER: &str = "Press / to search by title or code";

pub fn render_search(frame: &mut Frame, area: Rect, theme: &Theme, query: &str, focused: bool) {
    let border_style = if focused {
        theme.ratatui_style(Element::Active)
    } else {
        theme.ratatui_style(Element::Border)
    };
    let block = Block::new()
        .title(" Search Course ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(theme.ratatui_style(Element::Background));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    if query.is_empty() && !focused {
        frame.render_widget(
            Paragraph::new(Span::styled(PLACEHOLDER, theme.inactive_style())),
            inner_area,
        );
        return;
    }

    // Leave one column for the cursor.
    let (shown, shown_width) = visible_tail(query, inner_area.width.saturating_sub(1));
    frame.render_widget(
        Paragraph::new(Span::styled(
            shown,
            theme.ratatui_style(Element::Background),
        )),
        inner_area,
    );

    if focused && inner_area.height > 0 {
        frame.set_cursor(inner_area.x + shown_width, inner_area.y);
    }
}

/// The longest suffix of `text` that fits in `width` columns, with its width.
pub fn visible_tail(text: &str, width: u16) -> (&str, u16) {
    let total = text.width();
    let limit = width as usize;
    if total <= limit {
        return (text, total as u16);
    }
    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        used += w;
        start = idx;
    }
    (&text[start..], used as u16)
}
