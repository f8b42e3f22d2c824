//! Window rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::form::FormField;
use crate::network::{AdapterProvider, AddressingMode};

use super::app::{App, Dialog, DialogKind, Focus, LogEntry, LogLevel};
use super::theme::{colors, styles, symbols};

/// Width reserved for field labels.
const LABEL_WIDTH: u16 = 28;

/// Draws the whole window.
pub fn draw<P: AdapterProvider>(frame: &mut Frame, app: &App<P>) {
    let area = frame.area();
    let [header, separator, adapter, mode, fields, apply, logs, help] = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Length(1), // Separator
        Constraint::Length(3), // Adapter selector
        Constraint::Length(3), // Mode selector
        Constraint::Length(6), // Text fields
        Constraint::Length(3), // Apply button
        Constraint::Min(3),    // Activity
        Constraint::Length(1), // Help
    ])
    .areas(area);

    render_header(frame, header, app);
    render_separator(frame, separator);
    render_adapter_selector(frame, adapter, app);
    render_mode_selector(frame, mode, app);
    render_fields(frame, fields, app);
    render_apply_button(frame, apply, app.focus == Focus::Apply);
    render_activity(frame, logs, app);
    render_help(frame, help, app.help_text());

    if let Some(dialog) = &app.dialog {
        render_dialog(frame, area, dialog);
    }
}

fn card(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        styles::border_focused()
    } else {
        styles::border_unfocused()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .title(Span::styled(format!(" {title} "), styles::card_title()))
}

fn render_header<P: AdapterProvider>(frame: &mut Frame, area: Rect, app: &App<P>) {
    let count = match app.adapters.len() {
        1 => "1 adapter".to_string(),
        n => format!("{n} adapters"),
    };

    let line = Line::from(vec![
        Span::styled(format!(" {} IP Changer", symbols::APP_ICON), styles::title()),
        Span::styled(format!("   {count}"), styles::help_text()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let line = symbols::SEPARATOR_CHAR.repeat(usize::from(area.width));
    frame.render_widget(Paragraph::new(Span::styled(line, styles::separator())), area);
}

fn render_adapter_selector<P: AdapterProvider>(frame: &mut Frame, area: Rect, app: &App<P>) {
    let focused = app.focus == Focus::Adapter;

    let content = match app.selected_adapter() {
        Some(adapter) => {
            let position = format!("  ({}/{})", adapter.index + 1, app.adapters.len());
            Line::from(vec![
                Span::styled(format!("{} ", symbols::ARROW_LEFT), styles::help_key()),
                Span::styled(adapter.description.clone(), styles::selected()),
                Span::styled(format!(" {}", symbols::ARROW_RIGHT), styles::help_key()),
                Span::styled(position, styles::help_text()),
            ])
        }
        None => Line::from(Span::styled("No adapter detected", styles::disabled())),
    };

    let paragraph = Paragraph::new(content).block(card("Network adapter", focused));
    frame.render_widget(paragraph, area);
}

fn render_mode_selector<P: AdapterProvider>(frame: &mut Frame, area: Rect, app: &App<P>) {
    let focused = app.focus == Focus::Mode;
    let current = app.form.mode();

    let option = |mode: AddressingMode, label: &'static str| {
        let active = mode == current;
        let (symbol, style) = if active {
            (symbols::RADIO_ON, styles::selected())
        } else {
            (symbols::RADIO_OFF, styles::unselected())
        };
        Span::styled(format!("{symbol} {label}"), style)
    };

    let line = Line::from(vec![
        option(AddressingMode::Dhcp, "Automatic (DHCP)"),
        Span::raw("     "),
        option(AddressingMode::Static, "Static configuration"),
    ]);

    frame.render_widget(Paragraph::new(line).block(card("Mode", focused)), area);
}

fn render_fields<P: AdapterProvider>(frame: &mut Frame, area: Rect, app: &App<P>) {
    let editable = app.form.is_editable();
    let focused_field = match app.focus {
        Focus::Field(field) => Some(field),
        _ => None,
    };

    let lines: Vec<Line> = FormField::ALL
        .into_iter()
        .map(|field| {
            let focused = focused_field == Some(field);
            let label_style = if focused {
                styles::selected()
            } else {
                styles::help_text()
            };
            let value_style = if editable {
                styles::unselected()
            } else {
                styles::disabled()
            };
            let marker = if focused { symbols::SELECTED } else { " " };

            let mut spans = vec![
                Span::styled(format!("{marker} "), label_style),
                Span::styled(
                    format!("{:<width$}", field.label(), width = usize::from(LABEL_WIDTH)),
                    label_style,
                ),
                Span::styled(app.form.value(field).to_string(), value_style),
            ];
            if focused {
                spans.push(Span::styled(symbols::CURSOR, styles::border_focused()));
            }
            Line::from(spans)
        })
        .collect();

    let title = if editable {
        "Configuration"
    } else {
        "Configuration (read-only in DHCP mode)"
    };
    let paragraph = Paragraph::new(lines).block(card(title, focused_field.is_some()));
    frame.render_widget(paragraph, area);
}

fn render_apply_button(frame: &mut Frame, area: Rect, focused: bool) {
    if area.height == 0 {
        return;
    }

    let label = " Apply configuration ";
    let width = u16::try_from(label.len()).unwrap_or(area.width).min(area.width);
    let button = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + (area.height - 1).min(1),
        width,
        1,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(label, styles::button(focused))),
        button,
    );
}

fn render_activity<P: AdapterProvider>(frame: &mut Frame, area: Rect, app: &App<P>) {
    let visible = usize::from(area.height.saturating_sub(1));
    let skip = app.logs.len().saturating_sub(visible);
    let lines: Vec<Line> = app.logs.iter().skip(skip).map(format_log_entry).collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(" Activity ", styles::card_title()))
            .borders(Borders::TOP)
            .border_style(styles::border_unfocused()),
    );
    frame.render_widget(panel, area);
}

fn format_log_entry(entry: &LogEntry) -> Line<'static> {
    let (icon, color) = match entry.level {
        LogLevel::Info => (symbols::INFO, colors::TEXT_PRIMARY),
        LogLevel::Success => (symbols::SUCCESS, colors::SUCCESS),
        LogLevel::Warning => (symbols::WARNING, colors::WARNING),
        LogLevel::Error => (symbols::ERROR, colors::ERROR),
    };
    let style = Style::default().fg(color);

    Line::from(vec![
        Span::styled(format!("  {}  ", entry.timestamp), styles::help_text()),
        Span::styled(format!("{icon}  "), style),
        Span::styled(entry.message.clone(), style),
    ])
}

/// Renders help text with styled keys.
///
/// Groups are separated by two spaces; `key: action` pairs get the key
/// highlighted.
fn render_help(frame: &mut Frame, area: Rect, context_help: &str) {
    let mut spans = vec![Span::raw(" ")];

    for (i, part) in context_help.split("  ").enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        match part.split_once(':') {
            Some((key, action)) => {
                spans.push(Span::styled(key.to_string(), styles::help_key()));
                spans.push(Span::styled(format!(" {}", action.trim_start()), styles::help_text()));
            }
            None => spans.push(Span::styled(part.to_string(), styles::help_text())),
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_dialog(frame: &mut Frame, area: Rect, dialog: &Dialog) {
    let (icon, color) = match dialog.kind {
        DialogKind::Warning => (symbols::WARNING, colors::WARNING),
        DialogKind::Error => (symbols::ERROR, colors::ERROR),
        DialogKind::Success => (symbols::SUCCESS, colors::SUCCESS),
    };

    let width = 60_u16.min(area.width.saturating_sub(4));
    let text_width = usize::from(width.saturating_sub(4)).max(1);
    let text_lines = dialog.message.chars().count().div_ceil(text_width);
    let height = u16::try_from(text_lines)
        .unwrap_or(u16::MAX)
        .saturating_add(4)
        .min(area.height);
    let popup = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            format!(" {icon} {} ", dialog.kind.title()),
            Style::default().fg(color),
        ));

    let body = Paragraph::new(vec![
        Line::from(Span::styled(dialog.message.clone(), styles::unselected())),
        Line::from(""),
        Line::from(Span::styled("Press Enter to close", styles::help_text())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(block);

    frame.render_widget(Clear, popup);
    frame.render_widget(body, popup);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
