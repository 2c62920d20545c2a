use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::app::{App, Control};
use super::theme::{parse_color, Theme};
use crate::shared::{ColorRole, KeyValueStorage};

pub struct AppLayout {
    pub header: Rect,
    pub controls: Rect,
    pub preview: Rect,
    pub status: Rect,
}

pub fn get_layout_chunks(area: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(10),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    AppLayout {
        header: main_chunks[0],
        controls: main_chunks[1],
        preview: main_chunks[2],
        status: main_chunks[3],
    }
}

pub fn ui<S: KeyValueStorage>(f: &mut Frame, app: &App<'_, S>) {
    let theme = app.theme();
    let area = f.area();
    let layout = get_layout_chunks(area);

    // Page background comes from --bg-color / --text-color
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.foreground)),
        area,
    );

    let header = Paragraph::new(Line::from(vec![Span::styled(
        " Theme Switcher ",
        Style::default()
            .fg(theme.background)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )]));
    f.render_widget(header, layout.header);

    render_controls(f, app, &theme, layout.controls);
    render_preview(f, &theme, layout.preview);
    render_status_bar(f, app, &theme, layout.status);

    if app.editing.is_some() {
        let popup = centered_rect(60, 20, area);
        let popup = Rect {
            height: popup.height.max(3),
            ..popup
        }
        .intersection(area);
        if !popup.is_empty() {
            f.render_widget(Clear, popup);
            f.render_widget(&app.color_input, popup);
        }
    }
}

fn render_controls<S: KeyValueStorage>(f: &mut Frame, app: &App<'_, S>, theme: &Theme, area: Rect) {
    let controller = &app.controller;
    let mut lines: Vec<Line> = Vec::new();

    for control in Control::ALL {
        let focused = app.focus == control;
        let marker = if focused { "> " } else { "  " };
        let row_style = if focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        match control {
            Control::DarkMode => {
                let check = if controller.is_dark() { "[x]" } else { "[ ]" };
                lines.push(Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme.accent)),
                    Span::styled(format!("{} Dark Mode", check), row_style),
                ]));
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "  Customize Theme",
                    Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                )));
            }
            Control::Color(role) => lines.push(color_row(app, theme, role, marker, row_style)),
            Control::Reset => {
                lines.push(Line::from(""));
                let mut button = Style::default().fg(theme.background).bg(theme.accent);
                if focused {
                    button = button.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                }
                lines.push(Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme.accent)),
                    Span::styled(" Reset to Default Colors ", button),
                ]));
            }
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Settings ")
        .border_style(Style::default().fg(theme.muted));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn color_row<'s, S: KeyValueStorage>(
    app: &App<'_, S>,
    theme: &Theme,
    role: ColorRole,
    marker: &'s str,
    row_style: Style,
) -> Line<'s> {
    let value = app.controller.picker_value(role);
    let swatch = parse_color(&value)
        .map(|c| Style::default().bg(c))
        .unwrap_or_else(|| Style::default().fg(theme.muted));
    let origin = if app.controller.preference().custom.is_overridden(role) {
        "custom"
    } else {
        "default"
    };

    Line::from(vec![
        Span::styled(marker, Style::default().fg(theme.accent)),
        Span::styled(format!("{:<18}", format!("{}:", role.label())), row_style),
        Span::styled("    ", swatch),
        Span::raw(" "),
        Span::styled(value, row_style),
        Span::styled(format!("  ({})", origin), Style::default().fg(theme.muted)),
    ])
}

fn render_preview(f: &mut Frame, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));

    let lines = vec![
        Line::from(Span::styled(
            "Theme Preview",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("This is the text", Style::default().fg(theme.foreground))),
        Line::from(""),
        Line::from(Span::styled(
            "This is Link",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::UNDERLINED),
        )),
    ];

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_status_bar<S: KeyValueStorage>(f: &mut Frame, app: &App<'_, S>, theme: &Theme, area: Rect) {
    let hints = if app.editing.is_some() {
        " Enter: Apply | Esc: Cancel "
    } else {
        " Tab/↑↓: Move | Enter: Select | Ctrl+T: Theme | Ctrl+R: Reset | q: Quit "
    };

    let status = Line::from(vec![
        Span::styled(hints, Style::default().fg(theme.muted)),
        Span::styled(
            format!("[{}]", app.controller.mode().label()),
            Style::default().fg(theme.accent),
        ),
    ]);
    f.render_widget(Paragraph::new(status), area);
}

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
