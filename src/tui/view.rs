use super::activity_list::EMPTY_MESSAGE;
use super::form::PLACEHOLDER;
use super::model::{Focus, TuiModel};
use crate::domain::ActivityEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// The View component of MVU - responsible for rendering the model
pub struct TuiView;

impl TuiView {
    /// Render the entire TUI based on the current model state
    pub fn render(model: &TuiModel, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Length(3), // Search form
                Constraint::Length(1), // Field message
                Constraint::Length(1), // Loading / error banner
                Constraint::Min(0),    // Activity list
                Constraint::Length(1), // Key hints
            ])
            .split(size);

        Self::render_title_bar(model, frame, chunks[0]);
        Self::render_form(model, frame, chunks[1]);
        Self::render_field_message(model, frame, chunks[2]);
        Self::render_banner(model, frame, chunks[3]);
        Self::render_activity(model, frame, chunks[4]);
        Self::render_key_hints(model, frame, chunks[5]);

        if model.show_help {
            Self::render_help_overlay(frame, size);
        }
    }

    fn render_title_bar(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let title_text = match &model.query.shown_user {
            Some(user) => format!("GitHub Activity Viewer - {}", user),
            None => "GitHub Activity Viewer".to_string(),
        };

        let title = Paragraph::new(title_text)
            .style(Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(title, area);
    }

    fn render_form(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(18)])
            .split(area);

        let focused = model.focus == Focus::Form;
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let input = if model.form.text.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(model.form.text.as_str()).style(Style::default().fg(Color::White))
        };
        let input = input.block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Username"),
        );
        frame.render_widget(input, chunks[0]);

        let button_style = if model.form.is_submitting() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD)
        };
        let button = Paragraph::new(format!("⌕ {}", model.form.button_label()))
            .style(button_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(button, chunks[1]);

        if focused {
            frame.set_cursor_position(Self::input_cursor(chunks[0], &model.form.text));
        }
    }

    /// Cell after the typed text, clamped inside the field's border
    fn input_cursor(field: Rect, text: &str) -> (u16, u16) {
        let typed = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let max_x = field.x.saturating_add(field.width.saturating_sub(2));
        let x = field.x.saturating_add(1).saturating_add(typed).min(max_x);
        (x, field.y.saturating_add(1))
    }

    fn render_field_message(model: &TuiModel, frame: &mut Frame, area: Rect) {
        if let Some(error) = &model.form.field_error {
            let message = Paragraph::new(error.to_string()).style(Style::default().fg(Color::Red));
            frame.render_widget(message, area);
        }
    }

    /// Loading indicator or the fetch error banner
    fn render_banner(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let banner = if model.query.loading {
            Paragraph::new("░░░░ Loading activity... ░░░░").style(Style::default().fg(Color::DarkGray))
        } else if model.query.has_error() {
            Paragraph::new(model.query.error.as_str()).style(Style::default().fg(Color::Red))
        } else {
            Paragraph::new("")
        };
        frame.render_widget(banner, area);
    }

    fn render_activity(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let block_style = if model.focus == Focus::List {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(block_style)
            .title("Recent Activity")
            .title_bottom(Line::from("Latest GitHub events for this user").alignment(Alignment::Right));

        let events = &model.query.events;
        if events.is_empty() {
            let paragraph = Paragraph::new(EMPTY_MESSAGE)
                .style(Style::default().fg(Color::Gray))
                .block(block)
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, area);
            return;
        }

        let mut items: Vec<ListItem> = model
            .list
            .visible_events(events)
            .iter()
            .skip(model.list.scroll_offset)
            .map(Self::event_item)
            .collect();

        if model.list.has_more(events.len()) {
            let remaining = events.len() - model.list.visible_len(events.len());
            items.push(ListItem::new(Line::from(vec![
                Span::styled("▾ Load More", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                Span::styled(format!("  ({} more, press m)", remaining), Style::default().fg(Color::DarkGray)),
            ])));
        }

        frame.render_widget(List::new(items).block(block), area);
    }

    /// Three lines per event: header, description, repository
    fn event_item(event: &ActivityEvent) -> ListItem<'static> {
        let header = Line::from(vec![
            Span::styled(event.icon().glyph(), Style::default().fg(Color::Cyan)),
            Span::raw(" "),
            Span::styled(event.kind.clone(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                format!(" {} ", event.formatted_date()),
                Style::default().fg(Color::Black).bg(Color::Gray),
            ),
        ]);
        let description = Line::from(Span::styled(
            format!("  {}", event.description()),
            Style::default().fg(Color::Gray),
        ));
        let repo = Line::from(Span::styled(
            format!("  {}", event.repo.name),
            Style::default().fg(Color::LightBlue),
        ));

        ListItem::new(vec![header, description, repo, Line::from("")])
    }

    fn render_key_hints(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let hints = match model.focus {
            Focus::Form => "Enter Search | Tab List | Ctrl+U Clear | Ctrl+C Quit",
            Focus::List => "m/Enter Load More | j/k Scroll | / Search | ? Help | q Quit",
        };
        frame.render_widget(Paragraph::new(hints).style(Style::default().fg(Color::Gray)), area);
    }

    fn render_help_overlay(frame: &mut Frame, area: Rect) {
        let popup_area = Self::centered_rect(60, 60, area);
        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::from(Span::styled("Search form:", Style::default().add_modifier(Modifier::UNDERLINED))),
            Line::from("  Enter - Load activity for the username"),
            Line::from("  Ctrl+U - Clear the input"),
            Line::from("  Esc / Tab - Switch to the list"),
            Line::from(""),
            Line::from(Span::styled("Activity list:", Style::default().add_modifier(Modifier::UNDERLINED))),
            Line::from("  m / Enter - Load more"),
            Line::from("  ↑/k ↓/j - Scroll"),
            Line::from("  / or Tab - Back to the search form"),
            Line::from("  q / Esc - Quit"),
            Line::from(""),
            Line::from("Press any key to close help..."),
        ];

        let help = Paragraph::new(help_text)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .wrap(Wrap { trim: true });
        frame.render_widget(help, popup_area);
    }

    /// Helper to create centered rectangle
    fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
