//! Terminal painting of a projected notebook view. Pure rendering: state
//! mutation happens through the store, never here.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::models::CellType;

use super::decorators::CellFrame;
use super::notebook::NotebookView;

/// Border + one source line; used by scrolling math in the runtime too.
pub const CELL_CHROME_HEIGHT: u16 = 2;

pub fn cell_height(frame: &CellFrame) -> u16 {
    let lines = match &frame.editor {
        Some(editor) => editor.session.value.lines().count().max(1),
        None => 0,
    };
    lines as u16 + CELL_CHROME_HEIGHT
}

pub fn ellipsize(text: &str, max_width: u16) -> String {
    let max_width = max_width as usize;
    if max_width == 0 {
        return String::new();
    }
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            break;
        }
        width += ch_width;
        out.push(ch);
    }
    out.push('…');
    out
}

fn cell_title(frame: &CellFrame, index: usize) -> String {
    let marker = match frame.cell_type {
        CellType::Code => "[ ]",
        CellType::Markdown => "md ",
        CellType::Raw => "raw",
    };
    format!(" {} cell {} ({}) ", marker, index + 1, frame.id)
}

fn paint_cell(f: &mut Frame, frame: &CellFrame, index: usize, area: Rect) {
    let border_style = if frame.focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = ellipsize(&cell_title(frame, index), area.width.saturating_sub(2));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(editor) = &frame.editor else {
        return;
    };

    let editor_style = if editor.session.editor_focused {
        Style::default().add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default()
    };
    let lines: Vec<Line> = if editor.session.value.is_empty() {
        vec![Line::from(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        editor
            .session
            .value
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), editor_style)))
            .collect()
    };
    f.render_widget(Paragraph::new(lines), inner);
}

fn paint_status_bar(f: &mut Frame, view: &NotebookView, area: Rect) {
    let text = ellipsize(&view.status_bar.summary(), area.width);
    let bar = Paragraph::new(text).style(Style::default().bg(Color::Blue).fg(Color::White));
    f.render_widget(bar, area);
}

/// Paint the whole notebook: the cell list scrolled to `first_cell`, then a
/// one-line status bar.
pub fn paint_notebook(f: &mut Frame, view: &NotebookView, first_cell: usize) {
    let [cells_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(f.area());

    let mut y = cells_area.y;
    for (index, frame) in view.cells.iter().enumerate().skip(first_cell) {
        let height = cell_height(frame);
        if y + height > cells_area.y + cells_area.height {
            break;
        }
        let area = Rect::new(cells_area.x, y, cells_area.width, height);
        paint_cell(f, frame, index, area);
        y += height;
    }

    paint_status_bar(f, view, status_area);
}
