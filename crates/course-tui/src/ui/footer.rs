use crate::ui::app::AppMode;
use course_core::theme::{Element, Theme};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme, mode: AppMode) {
    let footer_block = Block::default()
        .borders(Borders::ALL)
        .style(theme.ratatui_style(Element::Border));

    let inner_area = footer_block.inner(area);

    let hint = |key: &'static str, rest: &'static str| {
        [
            Span::styled(key, theme.ratatui_style(Element::Active)),
            Span::styled(rest, theme.inactive_style()),
        ]
    };
    let sep = || Span::styled(" | ", theme.inactive_style());

    let mut spans = Vec::new();
    match mode {
        AppMode::Search => {
            spans.extend(hint("Type", " to filter"));
            spans.push(sep());
            spans.extend(hint("[Enter]", " Done"));
            spans.push(sep());
            spans.extend(hint("[Ctrl+U]", " Clear"));
        }
        AppMode::Browse => {
            spans.extend(hint("[/]", " Search"));
            spans.push(sep());
            spans.extend(hint("[Enter]", " Expand"));
            spans.push(sep());
            spans.extend(hint("[T]", "heme"));
            spans.push(sep());
            spans.extend(hint("[Q]", "uit"));
        }
    }

    let footer_paragraph = Paragraph::new(Line::from(spans).alignment(Alignment::Center))
        .style(theme.ratatui_style(Element::Background));

    frame.render_widget(footer_block, area);
    frame.render_widget(footer_paragraph, inner_area);
}
