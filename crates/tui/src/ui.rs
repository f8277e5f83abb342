//! Rendering: inventory list on the left, form on the right.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use stockroom_core::ItemId;
use stockroom_inventory::{Backend, Item};

use crate::app::App;
use crate::form::{BUTTONS, FIELDS, Focus, InventoryForm};

pub const EMPTY_MESSAGE: &str = "no items in the inventory";

/// One display line per item, numbered by current position.
pub fn inventory_lines(items: &[Item]) -> Vec<String> {
    if items.is_empty() {
        return vec![EMPTY_MESSAGE.to_string()];
    }
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            format!(
                "[{}] {} (Stock:{})",
                ItemId::from_index(index),
                item.name(),
                item.stock()
            )
        })
        .collect()
}

pub fn draw<B: Backend>(frame: &mut Frame, app: &App<B>) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(frame.area());

    draw_inventory(frame, app, chunks[0]);
    draw_form(frame, app.form(), chunks[1]);
}

fn draw_inventory<B: Backend>(frame: &mut Frame, app: &App<B>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Inventory Items");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Notices get their own rows at the bottom so a long list cannot push them out of view.
    let notice_rows = u16::try_from(app.notices().len()).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(notice_rows)])
        .split(inner);

    let lines: Vec<Line> = inventory_lines(app.items())
        .into_iter()
        .map(Line::from)
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[0]);

    let notices: Vec<Line> = app
        .notices()
        .iter()
        .map(|notice| Line::styled(notice.clone(), Style::default().fg(Color::Yellow)))
        .collect();
    frame.render_widget(Paragraph::new(notices), chunks[1]);
}

fn draw_form(frame: &mut Frame, form: &InventoryForm, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from("Manage Inventory").left_aligned());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let focused = Style::default().fg(Color::Black).bg(Color::Cyan);
    let label_style = Style::default().fg(Color::Yellow);

    let mut lines: Vec<Line> = Vec::new();
    let mut cursor = None;
    for (row, field) in FIELDS.into_iter().enumerate() {
        let has_focus = form.focus() == Focus::Field(field);
        let text = form.text(field);
        let line = Line::from(vec![
            Span::styled(field.label(), label_style),
            Span::styled(text.to_string(), if has_focus { focused } else { Style::default() }),
        ]);
        if has_focus {
            let x = inner.x.saturating_add(u16::try_from(line.width()).unwrap_or(u16::MAX));
            let y = inner.y.saturating_add(2 * row as u16);
            cursor = Some((x.min(inner.right().saturating_sub(1)), y));
        }
        lines.push(line);
        lines.push(Line::default());
    }

    let mut buttons: Vec<Span> = Vec::new();
    for button in BUTTONS {
        let style = if form.focus() == Focus::Button(button) {
            focused.add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        };
        buttons.push(Span::styled(format!(" {} ", button.label()), style));
        buttons.push(Span::raw(" "));
    }
    lines.push(Line::from(buttons));

    frame.render_widget(Paragraph::new(lines), inner);
    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}
