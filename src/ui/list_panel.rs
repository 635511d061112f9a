//! Study list of the selected category

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::ListState;
use crate::quiz::Direction;
use crate::quiz::view::{ListCard, ListView};
use crate::theme::Theme;

/// Rows used by a hidden card (text plus spacer)
const CARD_HEIGHT: u16 = 2;

/// Draw the card list, updating the scroll window in `list`
pub fn draw(frame: &mut Frame, area: Rect, view: &ListView, list: &mut ListState, theme: &Theme) {
    let block = Block::default()
        .title(format!(" {} cards ", view.cards.len()))
        .title_bottom(Line::from(" [j/k] Move  [Enter] Reveal  [m] Quiz ").right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    list.visible_height = (inner.height / CARD_HEIGHT).max(1) as usize;
    if list.selected >= view.cards.len() {
        list.selected = view.cards.len().saturating_sub(1);
    }
    list.ensure_selection_visible();

    let lines: Vec<Line> = view
        .cards
        .iter()
        .enumerate()
        .skip(list.scroll_offset)
        .take(list.visible_height)
        .flat_map(|(i, card)| {
            let revealed = list.revealed.contains(&card.id);
            card_lines(card, view.direction, i == list.selected, revealed, inner.width, theme)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Lines for one card, with the back side when revealed
fn card_lines(
    card: &ListCard,
    direction: Direction,
    selected: bool,
    revealed: bool,
    width: u16,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let (front_color, back_color) = match direction {
        Direction::SourceToTarget => (theme.source_text(), theme.target_text()),
        Direction::TargetToSource => (theme.target_text(), theme.source_text()),
    };
    let row_bg = if selected { theme.selection } else { theme.bg_primary };

    let number = format!("{:>3}. ", card.number);
    let front_style = if selected {
        Style::default().fg(front_color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(front_color)
    };

    // Right-align the id within the row
    let used = number.chars().count() + card.front.chars().count() + card.id.chars().count();
    let padding = (width as usize).saturating_sub(used + 1);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(number, Style::default().fg(theme.fg_muted)),
            Span::styled(card.front.clone(), front_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(card.id.clone(), Style::default().fg(theme.fg_muted)),
        ])
        .style(Style::default().bg(row_bg)),
    ];

    if revealed {
        lines.push(Line::from(vec![
            Span::raw("     "),
            Span::styled(card.back.clone(), Style::default().fg(back_color)),
        ]));
        if !card.example.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("     "),
                Span::styled(card.example.clone(), Style::default().fg(theme.fg_muted)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines
}
