use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use super::layout::AppLayout;
use crate::config::PickerConfig;
use crate::matcher::match_mask;
use crate::session::{InputMode, Picker};
use crate::utils::strip_ansi_codes;

const ACCENT: Color = Color::Rgb(150, 100, 200);
const TEXT: Color = Color::White;
const MUTED: Color = Color::Rgb(113, 113, 122);
const SELECTED_BG: Color = Color::Rgb(30, 30, 30);
const STATUS_BG: Color = Color::Rgb(24, 24, 27);
const ELLIPSIS: &str = "...";
const ROW_INDENT: &str = "  ";
const PROMPT: &str = "> ";

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, picker: &Picker, config: &PickerConfig) {
    let layout = AppLayout::new(frame.area());

    render_input(frame, layout.input_area, picker);
    render_results_list(frame, layout.results_area, picker, config);
    render_status_bar(frame, layout.status_area, picker, config);
}

fn render_input(frame: &mut Frame, area: Rect, picker: &Picker) {
    let query = picker.session().query();
    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(ACCENT)),
        Span::styled(query, Style::default().fg(TEXT)),
    ]);
    // Display columns, not chars: wide glyphs take two cells
    let width = u16::try_from(line.width()).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(line), area);

    if picker.mode() == InputMode::EditingQuery {
        let x = area.x.saturating_add(width).min(area.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, area.y));
    }
}

fn render_results_list(frame: &mut Frame, area: Rect, picker: &Picker, config: &PickerConfig) {
    let session = picker.session();
    let query = session.query();

    let items: Vec<ListItem> = session
        .visible(picker.max_visible().min(config.max_visible_results))
        .map(|entry| ListItem::new(display_line(entry, query, config.max_display_chars)))
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(TEXT))
        .highlight_style(Style::default().bg(SELECTED_BG));

    let mut state = ListState::default();
    if !session.is_empty() {
        state.select(Some(picker.cursor()));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

/// Build the styled row for one entry
///
/// The entry is sanitized and cut to `max_chars` before the match flags are computed. Cutting
/// first does not move any highlight: the greedy scan only looks left to right, so the flags on a
/// prefix are the same as on the whole entry. Spans come straight from [`match_mask`], so text
/// that happens to look like highlight markup is drawn as typed.
///
/// Ranking sees the raw entry while highlighting sees the sanitized one. An entry that matched
/// only through bytes of an escape sequence is therefore listed without any highlighted chars.
pub(crate) fn display_line(entry: &str, query: &str, max_chars: usize) -> Line<'static> {
    let sanitized = strip_ansi_codes(entry);
    let truncated = sanitized.chars().count() > max_chars;
    let visible: String = sanitized.chars().take(max_chars).collect();

    let mut spans = vec![Span::raw(ROW_INDENT)];
    if query.is_empty() {
        spans.push(Span::raw(visible));
    } else {
        let mut runs: Vec<(String, bool)> = Vec::new();
        for (c, matched) in visible.chars().zip(match_mask(&visible, query)) {
            match runs.last_mut() {
                Some((text, state)) if *state == matched => text.push(c),
                _ => runs.push((c.to_string(), matched)),
            }
        }

        for (text, highlighted) in runs {
            let span = if highlighted {
                Span::styled(text, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            } else {
                Span::styled(text, Style::default().fg(TEXT))
            };
            spans.push(span);
        }
    }

    if truncated {
        spans.push(Span::styled(ELLIPSIS, Style::default().fg(MUTED)));
    }

    Line::from(spans)
}

fn render_status_bar(frame: &mut Frame, area: Rect, picker: &Picker, config: &PickerConfig) {
    let session = picker.session();
    let mut parts = vec![];

    if session.is_empty() {
        parts.push("No matches".to_string());
    } else if session.query().is_empty() {
        parts.push(format!("{} commands", session.corpus().len()));
    } else {
        let counts = session
            .results()
            .tier_counts()
            .iter()
            .map(|(tier, count)| format!("{} {}", count, tier.label()))
            .collect::<Vec<_>>()
            .join(" ");
        parts.push(format!("{}/{} matches ({})", session.len(), session.corpus().len(), counts));
    }

    if session.len() > config.max_visible_results {
        parts.push(format!("showing first {}", config.max_visible_results));
    }

    if picker.mode() == InputMode::NavigatingResults && !session.is_empty() {
        parts.push(format!("entry {}/{}", picker.cursor() + 1, picker.visible_len()));
    }

    parts.push("Enter: run".to_string());
    parts.push("Esc: quit".to_string());

    let paragraph = Paragraph::new(format!(" {} ", parts.join(" | ")))
        .style(Style::default().fg(MUTED).bg(STATUS_BG));

    frame.render_widget(paragraph, area);
}
