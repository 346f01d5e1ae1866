use crate::app::{PaneState, RenderState};
use crate::ui::theme::colors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Paints both panes side by side with the speed badge underneath.
pub fn draw_frame(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::background())),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    for (pane, pane_area) in state.panes.iter().zip(columns.iter()) {
        frame.render_widget(render_stream_pane(pane, pane_area.width), *pane_area);
    }

    frame.render_widget(render_speed_badge(state.badge.as_deref()), rows[1]);
}

/// Bordered pane holding one stream's revealed, pre-wrapped text.
pub fn render_stream_pane(pane: &PaneState, width: u16) -> Paragraph<'static> {
    let inner_width = width.saturating_sub(2) as usize;
    let heading = truncate_to_width(&pane.heading(), inner_width);
    let progress = format!("{}/{} tokens", pane.revealed, pane.total);

    let block = Block::bordered()
        .border_style(Style::default().fg(colors::border()))
        .title(Line::from(Span::styled(
            heading,
            Style::default()
                .fg(colors::title())
                .add_modifier(Modifier::BOLD),
        )))
        .title_bottom(
            Line::from(Span::styled(
                truncate_to_width(&progress, inner_width),
                Style::default().fg(colors::dimmed()),
            ))
            .right_aligned(),
        );

    Paragraph::new(Text::from(pane.text.clone()))
        .block(block)
        .alignment(Alignment::Left)
        .style(Style::default().fg(colors::text()).bg(colors::background()))
}

pub fn render_speed_badge(label: Option<&str>) -> Paragraph<'static> {
    let line = match label {
        Some(label) => Line::from(Span::styled(
            label.to_string(),
            Style::default()
                .fg(colors::badge())
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::default(),
    };

    Paragraph::new(line)
        .alignment(Alignment::Center)
        .style(Style::default().bg(colors::background()))
}

/// Cuts `text` to at most `max_width` terminal columns without splitting graphemes.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut truncated = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let grapheme_width = grapheme.width();
        if used + grapheme_width > max_width {
            break;
        }
        truncated.push_str(grapheme);
        used += grapheme_width;
    }
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_to_width("NanoGPT", 20), "NanoGPT");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_to_width("Infini-gram", 6), "Infini");
    }

    #[test]
    fn test_truncate_wide_graphemes() {
        // Each CJK character is two columns wide
        assert_eq!(truncate_to_width("日本語", 5), "日本");
    }

    #[test]
    fn test_truncate_keeps_combining_marks() {
        let text = "e\u{301}e\u{301}e\u{301}";
        assert_eq!(truncate_to_width(text, 2), "e\u{301}e\u{301}");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_speed_badge_bold_and_centered() {
        let area = Rect::new(0, 0, 31, 1);
        let mut buffer = Buffer::empty(area);
        render_speed_badge(Some(">>> 10x SPEED >>>")).render(area, &mut buffer);

        assert_eq!(row(&buffer, 0), "       >>> 10x SPEED >>>       ");
        let cell = &buffer[(7, 0)];
        assert_eq!(cell.fg, colors::badge());
        assert!(cell.modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_hidden_badge_is_blank() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buffer = Buffer::empty(area);
        render_speed_badge(None).render(area, &mut buffer);
        assert_eq!(row(&buffer, 0).trim(), "");
    }

    #[test]
    fn test_render_stream_pane_truncates_title() {
        let pane = PaneState {
            title: "Infini-gram".to_string(),
            elapsed: 0.5,
            text: "ab cd".to_string(),
            revealed: 3,
            total: 3,
        };
        let area = Rect::new(0, 0, 20, 4);
        let mut buffer = Buffer::empty(area);
        render_stream_pane(&pane, area.width).render(area, &mut buffer);

        let top = row(&buffer, 0);
        assert!(top.contains("Infini-gram (Gener"), "top border was {:?}", top);
        assert!(!top.contains("0.50s"));
        assert!(row(&buffer, 1).contains("ab cd"));
        assert!(row(&buffer, 3).contains("3/3 tokens"));

        // Too narrow for any content; must not panic
        let tiny = Rect::new(0, 0, 1, 1);
        let mut buffer = Buffer::empty(tiny);
        render_stream_pane(&pane, tiny.width).render(tiny, &mut buffer);
    }
}
