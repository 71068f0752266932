//! Chat UI rendering components

use super::state::ChatState;
use crate::application::conversation::Conversation;
use crate::domain::types::TurnRole;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Main chat UI renderer
pub struct ChatUI;

impl ChatUI {
    /// Render the complete chat interface
    pub fn render(frame: &mut Frame, state: &ChatState, conversation: &Conversation, model: &str) {
        let area = frame.area();

        // Layout: title bar, turn list, input, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        Self::render_title_bar(frame, chunks[0], state, model);
        Self::render_turns(frame, chunks[1], state, conversation);
        Self::render_input(frame, chunks[2], state);
        Self::render_status_bar(frame, chunks[3], state);
    }

    fn render_title_bar(frame: &mut Frame, area: Rect, state: &ChatState, model: &str) {
        let loading_indicator = if state.loading {
            Span::styled(
                format!(" {} ", SPINNER_FRAMES[state.loading_frame]),
                Style::default().fg(Color::Yellow),
            )
        } else {
            Span::raw("")
        };

        let title_line = Line::from(vec![
            Span::styled(" 💬 ", Style::default().fg(Color::Cyan)),
            Span::styled(
                "Asisten Kesehatan Wanita AI ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("│ ", Style::default().fg(Color::DarkGray)),
            Span::styled(model.to_string(), Style::default().fg(Color::Magenta)),
            loading_indicator,
        ]);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));

        let para = Paragraph::new(title_line).block(block);
        frame.render_widget(para, area);
    }

    /// Render the turn list straight from the conversation history
    fn render_turns(frame: &mut Frame, area: Rect, state: &ChatState, conversation: &Conversation) {
        let inner_height = area.height.saturating_sub(2) as usize;

        let mut lines: Vec<Line> = Vec::new();

        for turn in conversation.turns() {
            let (prefix, style) = match turn.role {
                TurnRole::User => (
                    "Anda: ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                TurnRole::Model => ("Asisten: ", Style::default().fg(Color::Green)),
            };

            let content_lines: Vec<&str> = turn.text.lines().collect();
            if let Some(first_line) = content_lines.first() {
                lines.push(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::raw(*first_line),
                ]));
            }

            // Continuation lines with indent
            for line in content_lines.iter().skip(1) {
                let indent = " ".repeat(prefix.len());
                lines.push(Line::from(format!("{indent}{line}")));
            }

            lines.push(Line::from(""));
        }

        if state.loading {
            lines.push(Line::from(Span::styled(
                format!(
                    "Asisten: {} Sedang memproses...",
                    SPINNER_FRAMES[state.loading_frame]
                ),
                Style::default().fg(Color::Yellow),
            )));
        }

        let total_lines = lines.len();
        let max_scroll = total_lines.saturating_sub(inner_height);
        let scroll = if state.scroll_offset == u16::MAX {
            max_scroll as u16
        } else {
            state.scroll_offset.min(max_scroll as u16)
        };

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray));

        let para = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));

        frame.render_widget(para, area);
    }

    fn render_input(frame: &mut Frame, area: Rect, state: &ChatState) {
        let input_style = if state.loading {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        let display_input = if state.loading {
            "Menunggu balasan...".to_string()
        } else if state.input.is_empty() {
            "Tulis pesan Anda di sini...".to_string()
        } else {
            // Insert cursor indicator
            let mut chars: Vec<char> = state.input.chars().collect();
            if state.cursor_pos >= chars.len() {
                chars.push('_');
            } else {
                chars.insert(state.cursor_pos, '|');
            }
            chars.into_iter().collect()
        };

        let input_line = Line::from(vec![
            Span::styled(
                "> ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(display_input, input_style),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if state.loading {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Cyan)
            })
            .title(if state.is_command() {
                " Perintah "
            } else {
                " Pesan "
            });

        let para = Paragraph::new(input_line).block(block);
        frame.render_widget(para, area);
    }

    /// Render the status bar: the last error, a transient notice, or the key
    /// hints.
    fn render_status_bar(frame: &mut Frame, area: Rect, state: &ChatState) {
        let status_line = if let Some(err) = &state.error_message {
            Line::from(Span::styled(
                format!(" {err} "),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
        } else if let Some(notice) = &state.status_message {
            Line::from(Span::styled(
                format!(" {notice} "),
                Style::default().fg(Color::DarkGray),
            ))
        } else if state.loading {
            Line::from(Span::styled(
                " Sedang memproses... Mohon tunggu ",
                Style::default().fg(Color::Yellow),
            ))
        } else {
            Line::from(vec![
                Span::styled(" Enter", Style::default().fg(Color::Green)),
                Span::raw(": Kirim │ "),
                Span::styled("/reset", Style::default().fg(Color::Green)),
                Span::raw(": Percakapan baru │ "),
                Span::styled("PageUp/Down", Style::default().fg(Color::Green)),
                Span::raw(": Gulir │ "),
                Span::styled("q", Style::default().fg(Color::Red)),
                Span::raw(": Keluar "),
            ])
        };

        let para = Paragraph::new(status_line);
        frame.render_widget(para, area);
    }
}
