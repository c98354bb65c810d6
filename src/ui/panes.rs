//! Rendering logic for each TUI pane

use crate::catalog::Catalog;
use crate::enrollment::ledger::RegistrationInfo;
use crate::enrollment::student::Student;
use crate::session::{ActivityLog, LogKind};
use crate::ui::app::{MENU_ITEMS, Screen};
use crate::ui::theme::DEFAULT_THEME;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

/// Centered welcome prompt with a text entry line
pub fn render_prompt_pane(frame: &mut Frame, area: Rect, label: &str, input: &str) {
    // Center a fixed-height box in the available area
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(7),
            Constraint::Min(0),
        ])
        .split(area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(rows[1]);

    let block = Block::default()
        .title(" Course Registration ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::new(1, 1, 0, 0));

    let lines = vec![
        Line::from(Span::styled(
            "Welcome to the Course Registration System",
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(DEFAULT_THEME.primary)),
            Span::styled(input.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled("█", Style::default().fg(DEFAULT_THEME.primary)),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, cols[1]);
}

/// The four-option main menu
pub fn render_menu_pane(frame: &mut Frame, area: Rect, cursor: usize, student: Option<&Student>) {
    let title = match student {
        Some(s) => format!(" Options - {} ", s.name()),
        None => String::from(" Options "),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::new(1, 0, 1, 0));

    let items: Vec<ListItem> = MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let line = Line::from(vec![
                Span::styled(
                    format!(" {}. ", i + 1),
                    Style::default().fg(DEFAULT_THEME.primary),
                ),
                Span::styled(label.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            ]);

            let item = ListItem::new(line);
            if i == cursor {
                item.style(
                    Style::default()
                        .bg(DEFAULT_THEME.highlight_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

/// Catalog listing: roster line, description, and schedule per course
pub fn render_catalog_pane(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Available Courses ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 0, 0, 0));

    let all_items: Vec<ListItem> = catalog
        .courses()
        .iter()
        .map(|course| {
            let seats_style = if course.is_full() {
                Style::default().fg(DEFAULT_THEME.error)
            } else {
                Style::default().fg(DEFAULT_THEME.success)
            };

            let lines = vec![
                Line::from(vec![
                    Span::styled(
                        course.code().to_string(),
                        Style::default()
                            .fg(DEFAULT_THEME.code)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" - "),
                    Span::styled(
                        course.title().to_string(),
                        Style::default().fg(DEFAULT_THEME.title),
                    ),
                    Span::styled(
                        format!(" ({}/{})", course.enrolled_count(), course.capacity()),
                        seats_style,
                    ),
                    Span::styled(
                        format!("  Vacancy: {}", course.vacancy()),
                        Style::default().fg(DEFAULT_THEME.comment),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  {}", course.description()),
                    Style::default().fg(DEFAULT_THEME.comment),
                )),
                Line::from(Span::styled(
                    format!("  {}", course.schedule()),
                    Style::default().fg(DEFAULT_THEME.secondary),
                )),
                Line::from(""),
            ];

            ListItem::new(lines)
        })
        .collect();

    // Scroll by course entry; each entry renders as four rows
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let visible_courses = (visible_height / 4).max(1);

    if total_items > visible_courses {
        *scroll_offset = (*scroll_offset).min(total_items - visible_courses);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items.into_iter().skip(*scroll_offset).collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

/// Student identity plus resolved registered-course titles
pub fn render_summary_pane(frame: &mut Frame, area: Rect, title: &str, info: &RegistrationInfo) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 0, 0, 0));

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Name: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(info.name.clone(), Style::default().fg(DEFAULT_THEME.fg)),
        ]),
        Line::from(vec![
            Span::styled("Student ID: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                info.student_id.clone(),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Registered Courses:",
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    if info.courses.is_empty() {
        lines.push(Line::from(Span::styled(
            "(none)",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    } else {
        for course in &info.courses {
            lines.push(Line::from(vec![
                Span::raw("- "),
                Span::styled(
                    course.title.clone(),
                    Style::default().fg(DEFAULT_THEME.title),
                ),
                Span::styled(
                    format!(" ({})", course.code),
                    Style::default().fg(DEFAULT_THEME.code),
                ),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Single-line text entry field for course codes
pub fn render_input_pane(frame: &mut Frame, area: Rect, title: &str, input: &str) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let line = Line::from(vec![
        Span::styled("> ", Style::default().fg(DEFAULT_THEME.primary)),
        Span::styled(input.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled("█", Style::default().fg(DEFAULT_THEME.primary)),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

/// Session transcript, colored by line kind
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    log: &ActivityLog,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Activity ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if log.is_empty() {
        let paragraph = Paragraph::new("(no activity yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
    } else {
        let block = block.padding(Padding::new(1, 0, 0, 0));

        let all_items: Vec<ListItem> = log
            .lines()
            .iter()
            .map(|line| {
                let color = match line.kind {
                    LogKind::Info => DEFAULT_THEME.fg,
                    LogKind::Success => DEFAULT_THEME.success,
                    LogKind::Error => DEFAULT_THEME.error,
                };
                ListItem::new(line.text.clone()).style(Style::default().fg(color))
            })
            .collect();

        // Calculate visible range for scrolling
        let total_items = all_items.len();
        let visible_height = area.height.saturating_sub(2).max(1) as usize;

        // Clamp scroll offset only if content exceeds visible area
        if total_items > visible_height {
            let max_scroll = total_items - visible_height;
            *scroll_offset = (*scroll_offset).min(max_scroll);
        } else {
            *scroll_offset = 0;
        }

        let visible_items: Vec<ListItem> = all_items
            .into_iter()
            .skip(*scroll_offset)
            .take(visible_height)
            .collect();

        let list = List::new(visible_items).block(block);
        frame.render_widget(list, area);
    }
}

/// Screen badge shown at the left of the status bar
fn screen_badge(screen: Screen) -> &'static str {
    match screen {
        Screen::NamePrompt | Screen::IdPrompt => " Welcome ",
        Screen::Menu => " Menu ",
        Screen::Register => " Register ",
        Screen::ViewInfo => " View Info ",
        Screen::Drop => " Drop ",
    }
}

/// Keybind hints shown at the right of the status bar
fn screen_keybinds(screen: Screen) -> Vec<(&'static str, &'static str)> {
    match screen {
        Screen::NamePrompt | Screen::IdPrompt => {
            vec![(" ↵ ", " submit "), (" ⌫ ", " erase ")]
        }
        Screen::Menu => vec![
            (" 1-4 ", " choose "),
            (" ↑/↓ ", " move "),
            (" ↵ ", " select "),
            (" q ", " quit "),
        ],
        Screen::Register => vec![
            (" ↵ ", " register "),
            (" ↑/↓ ", " scroll "),
            (" esc ", " menu "),
        ],
        Screen::ViewInfo => vec![(" esc ", " menu ")],
        Screen::Drop => vec![(" ↵ ", " drop "), (" esc ", " menu ")],
    }
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, message: &str, screen: Screen) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    // Left side: screen badge and status message
    let left_spans = vec![
        Span::styled(
            screen_badge(screen),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.highlight_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.highlight_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.highlight_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.highlight_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.highlight_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = Vec::new();
    for (i, (keys, desc)) in screen_keybinds(screen).into_iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(keys, key_style));
        right_spans.push(Span::styled(desc, desc_style));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.highlight_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
