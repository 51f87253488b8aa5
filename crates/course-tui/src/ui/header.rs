use course_core::theme::{Element, Theme};
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Paragraph},
};

pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    matches: usize,
    total: usize,
) {
    let title = Title::from(" Course List v0.1.0 ").alignment(Alignment::Left);

    let block = Block::new()
        .borders(Borders::ALL)
        .title(title)
        .style(theme.ratatui_style(Element::Border))
        .title_style(theme.ratatui_style(Element::Active));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .split(inner_area);

    let count = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} of {} courses", matches, total),
            theme.ratatui_style(Element::Background),
        ),
    ]))
    .style(theme.ratatui_style(Element::Background));
    frame.render_widget(count, chunks[0]);

    let button = Paragraph::new(Span::styled(
        toggle_label(theme.is_dark()),
        theme
            .ratatui_style(Element::Active)
            .add_modifier(Modifier::REVERSED),
    ))
    .alignment(Alignment::Right)
    .style(theme.ratatui_style(Element::Background));
    frame.render_widget(button, chunks[1]);
}

/// Label of the theme button: it names the mode a press switches to.
fn toggle_label(dark_mode: bool) -> &'static str {
    if dark_mode {
        " Switch to Light Mode "
    } else {
        " Switch to Dark Mode "
    }
}
