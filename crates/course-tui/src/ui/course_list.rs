//! Scrollable list of course cards.
//!
//! Collapsed cards show title, code and credits. Expanded cards add the
//! description and prerequisites, wrapped to the card width. The selected
//! card is always kept on screen.

use course_core::{
    browser::Browser,
    course::Course,
    theme::{Element, Theme},
};
use ratatui::{
    layout::Margin,
    prelude::{Alignment, Frame, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

/// Borders plus horizontal padding.
const CARD_CHROME_WIDTH: u16 = 4;
const CARD_CHROME_HEIGHT: u16 = 2;

pub fn render_course_list(frame: &mut Frame, area: Rect, theme: &Theme, browser: &Browser) {
    let area = area.inner(&Margin {
        horizontal: 1,
        vertical: 0,
    });
    let visible = browser.visible();

    if visible.is_empty() {
        let message = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("No courses match \"{}\"", browser.query()),
                theme.inactive_style(),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(theme.ratatui_style(Element::Background));
        frame.render_widget(message, area);
        return;
    }

    let text_width = area.width.saturating_sub(CARD_CHROME_WIDTH);
    let cards: Vec<(&Course, bool, Vec<Line>)> = visible
        .iter()
        .map(|course| {
            let expanded = browser.is_expanded(&course.code);
            (*course, expanded, card_lines(course, expanded, text_width, theme))
        })
        .collect();
    let heights: Vec<u16> = cards.iter().map(|(_, _, lines)| card_height(lines.len())).collect();

    let selected = browser.selected_index();
    let start = first_visible(&heights, selected, area.height);
    let bottom = area.y + area.height;
    let mut y = area.y;

    for (index, (course, expanded, lines)) in cards.into_iter().enumerate().skip(start) {
        if y >= bottom {
            break;
        }
        let height = heights[index].min(bottom - y);
        let card_area = Rect::new(area.x, y, area.width, height);
        y += height;

        let border_style = if index == selected {
            theme.ratatui_style(Element::CardSelected)
        } else if expanded {
            theme.ratatui_style(Element::CardExpanded)
        } else {
            theme.ratatui_style(Element::Card)
        };
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(1))
            .style(theme.text_style());

        tracing::trace!(code = %course.code, height, "rendering card");
        frame.render_widget(Paragraph::new(lines).block(block), card_area);
    }
}

pub fn card_lines<'a>(course: &'a Course, expanded: bool, width: u16, theme: &Theme) -> Vec<Line<'a>> {
    let marker = if expanded { "▾ " } else { "▸ " };
    let mut lines = vec![
        Line::from(vec![
            Span::styled(marker, theme.ratatui_style(Element::Secondary)),
            Span::styled(course.title.as_str(), theme.title_style()),
        ]),
        Line::from(vec![
            Span::styled(format!("Code: {}", course.code), theme.text_style()),
            Span::styled("    ", theme.text_style()),
            Span::styled(
                format!("Credits: {}", course.credit_hours),
                theme.ratatui_style(Element::Secondary),
            ),
        ]),
    ];

    if expanded {
        lines.push(Line::from(""));
        push_section(
            &mut lines,
            "Description:",
            &course.description,
            width,
            theme.text_style(),
            theme,
        );
        lines.push(Line::from(""));
        let prerequisites_style = if course.has_prerequisites() {
            theme.text_style()
        } else {
            theme.ratatui_style(Element::Secondary)
        };
        push_section(
            &mut lines,
            "Prerequisites:",
            &course.prerequisites,
            width,
            prerequisites_style,
            theme,
        );
    }
    lines
}

fn push_section<'a>(
    lines: &mut Vec<Line<'a>>,
    label: &'static str,
    body: &'a str,
    width: u16,
    body_style: Style,
    theme: &Theme,
) {
    lines.push(Line::from(Span::styled(label, theme.title_style())));
    for wrapped in textwrap::wrap(body, width.max(1) as usize) {
        lines.push(Line::from(Span::styled(wrapped, body_style)));
    }
}

/// Rows a card occupies for `line_count` lines of content, saturating at `u16::MAX`.
pub fn card_height(line_count: usize) -> u16 {
    u16::try_from(line_count)
        .unwrap_or(u16::MAX)
        .saturating_add(CARD_CHROME_HEIGHT)
}

/// Index of the first card to draw so that card `selected` is fully visible.
///
/// Scrolls only as far as needed: if everything up to the selected card
/// fits, the list starts at the top.
pub fn first_visible(heights: &[u16], selected: usize, viewport: u16) -> usize {
    if heights.is_empty() {
        return 0;
    }
    let selected = selected.min(heights.len() - 1);
    let mut used = heights[selected] as u32;
    let mut start = selected;
    while start > 0 && used + heights[start - 1] as u32 <= viewport as u32 {
        start -= 1;
        used += heights[start] as u32;
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::catalog::Catalog;

    #[test]
    fn test_first_visible_without_scrolling() {
        assert_eq!(first_visible(&[4, 4, 4], 1, 20), 0);
        assert_eq!(first_visible(&[], 3, 20), 0);
    }

    #[test]
    fn test_first_visible_scrolls_to_selection() {
        let heights = [4u16; 10];
        assert_eq!(first_visible(&heights, 9, 11), 8);
        assert_eq!(first_visible(&heights, 0, 11), 0);
    }

    #[test]
    fn test_tall_selected_card_starts_list() {
        assert_eq!(first_visible(&[4, 4, 30, 4], 2, 10), 2);
    }

    #[test]
    fn test_collapsed_card_lines() {
        let catalog = Catalog::builtin();
        let theme = Theme::default();
        let lines = card_lines(&catalog.courses()[0], false, 40, &theme);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_expanded_card_wraps_description() {
        let catalog = Catalog::builtin();
        let theme = Theme::default();
        let course = catalog.courses().iter().find(|c| c.code == "CS303").unwrap();
        let wide = card_lines(course, true, 80, &theme);
        // title, code row, blank, label, description, blank, label, prerequisites
        assert_eq!(wide.len(), 8);
        let narrow = card_lines(course, true, 20, &theme);
        assert!(narrow.len() > wide.len());
    }

    #[test]
    fn test_missing_prerequisites_are_muted() {
        let catalog = Catalog::builtin();
        let theme = Theme::default();
        let body_style = |code: &str| {
            let course = catalog.courses().iter().find(|c| c.code == code).unwrap();
            let lines = card_lines(course, true, 80, &theme);
            lines.last().unwrap().spans[0].style
        };
        assert_eq!(body_style("CS302"), theme.ratatui_style(Element::Secondary));
        assert_eq!(body_style("CS303"), theme.text_style());
    }

    #[test]
    fn test_card_height_saturates() {
        assert_eq!(card_height(2), 4);
        assert_eq!(card_height(u16::MAX as usize), u16::MAX);
        assert_eq!(card_height(usize::MAX), u16::MAX);
    }
}
