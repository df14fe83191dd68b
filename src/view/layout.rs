//! Frame layout and rendering of the CRUD screen.
//!
//! Everything shown comes from the host: checkbox, menu and link states are
//! read back from the in-memory page, so the screen shows what the
//! controller actually applied.

use super::host::{PageHost, Screen};
use super::styles::ScreenStyles;
use crate::model::query::ITEMS_KEY;
use crate::model::{Effect, UiMode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

/// Render the whole screen: header, current page, status bar.
pub fn render_page(frame: &mut Frame, host: &PageHost, styles: &ScreenStyles) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header bar
            Constraint::Min(0),    // Page body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], host, styles);
    let body = match host.screen() {
        Screen::List => list_lines(host, styles),
        Screen::ConfirmDelete => confirm_lines(host, styles),
        Screen::Form => form_lines(host, styles),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(host.fixture().title.as_str());
    frame.render_widget(Paragraph::new(body).block(block), chunks[1]);
    render_status_bar(frame, chunks[2], host, styles);
}

fn render_header(frame: &mut Frame, area: Rect, host: &PageHost, styles: &ScreenStyles) {
    let popup = if host.session().context().is_popup {
        " [popup]"
    } else {
        ""
    };
    let line = Line::from(vec![
        Span::styled("crudctl ", styles.header),
        Span::raw(host.url().to_string()),
        Span::styled(popup, styles.status),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, host: &PageHost, styles: &ScreenStyles) {
    let state = host.session().selection_state();
    let mode = match host.session().mode() {
        UiMode::List => "list",
        UiMode::Edit => "edit",
    };
    let last = host
        .transcript()
        .last()
        .map(describe_effect)
        .unwrap_or_else(|| "none".to_string());
    let text = format!(
        "{}/{} selected | mode: {mode} | last: {last} | q: quit",
        state.selected_count, state.total_count
    );
    frame.render_widget(Paragraph::new(Line::from(text)).style(styles.status), area);
}

/// One-line summary of an effect.
pub fn describe_effect(effect: &Effect) -> String {
    match effect {
        Effect::Navigate { url } => format!("navigate {url}"),
        Effect::Submit(form) => format!("submit {}", form.action_url),
        Effect::ClosePopup => "close popup".to_string(),
    }
}

/// Pad `text` with spaces to a display width of `width` columns.
pub fn pad(text: &str, width: usize) -> String {
    let used = text.width();
    format!("{text}{}", " ".repeat(width.saturating_sub(used)))
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        CHECKED
    } else {
        UNCHECKED
    }
}

fn column_widths(host: &PageHost) -> Vec<usize> {
    let fixture = host.fixture();
    let count = fixture
        .rows
        .iter()
        .map(|r| r.cells.len())
        .chain(std::iter::once(fixture.columns.len()))
        .max()
        .unwrap_or(0);
    (0..count)
        .map(|i| {
            fixture
                .rows
                .iter()
                .filter_map(|r| r.cells.get(i))
                .chain(fixture.columns.get(i))
                .map(|cell| cell.width())
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn padded_cells(cells: &[String], widths: &[usize]) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(i, w)| pad(cells.get(i).map(String::as_str).unwrap_or(""), *w))
        .collect::<Vec<_>>()
        .join("  ")
}

fn list_lines<'a>(host: &'a PageHost, styles: &ScreenStyles) -> Vec<Line<'a>> {
    let page = host.page();
    let slots = host.slots();
    let fixture = host.fixture();
    if !page.is_visible(&slots.item_list) {
        return vec![Line::from("(item list hidden)")];
    }

    let widths = column_widths(host);
    let mut lines = Vec::with_capacity(fixture.rows.len() + 4);
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::raw(checkbox(page.is_checked(&slots.select_all))),
        Span::raw(" "),
        Span::styled(padded_cells(&fixture.columns, &widths), styles.header),
    ]));

    for (index, row) in fixture.rows.iter().enumerate() {
        let checked = page.is_checked(&slots.row_checkbox(index));
        let marker = if index == host.cursor() { "> " } else { "  " };
        let text = format!(
            "{marker}{} {}",
            checkbox(checked),
            padded_cells(&row.cells, &widths)
        );
        let style = if index == host.cursor() {
            styles.cursor
        } else if checked {
            styles.checked
        } else {
            ratatui::style::Style::default()
        };
        lines.push(Line::styled(text, style));
    }
    if fixture.rows.is_empty() {
        lines.push(Line::from("  (no items)"));
    }

    lines.push(Line::from(""));
    lines.push(action_menu_line(host, styles));
    if let Some(line) = item_actions_line(host) {
        lines.push(line);
    }
    lines.push(Line::from("n: add  e: edit  d: delete  space: select  *: all  D: delete selected"));
    lines
}

fn action_menu_line<'a>(host: &'a PageHost, styles: &ScreenStyles) -> Line<'a> {
    let enabled = host.page().is_enabled(&host.slots().action_menu);
    let entries = host
        .session()
        .catalog()
        .bulk
        .iter()
        .take(9)
        .enumerate()
        .map(|(i, action)| format!("{}:{}", i + 1, action.label))
        .collect::<Vec<_>>()
        .join("  ");
    let (label, style) = if enabled {
        ("Actions: ", styles.menu_enabled)
    } else {
        ("Actions (select items): ", styles.menu_disabled)
    };
    Line::styled(format!("{label}{entries}"), style)
}

fn item_actions_line(host: &PageHost) -> Option<Line<'_>> {
    let catalog = host.session().catalog();
    if catalog.item.is_empty() {
        return None;
    }
    let entries = catalog
        .item
        .iter()
        .take(9)
        .enumerate()
        .map(|(i, action)| format!("F{}:{}", i + 1, action.title))
        .collect::<Vec<_>>()
        .join("  ");
    Some(Line::from(format!("Item actions: {entries}")))
}

fn confirm_lines<'a>(host: &'a PageHost, styles: &ScreenStyles) -> Vec<Line<'a>> {
    let codec = host.session().codec();
    let question = match (codec.target_item(), codec.get(ITEMS_KEY)) {
        (Some(item), _) => format!("Delete item {item}?"),
        (None, Some(items)) => {
            let count = items.split(',').filter(|s| !s.is_empty()).count();
            format!("Delete {count} selected items ({items})?")
        }
        (None, None) => "Delete?".to_string(),
    };
    vec![
        Line::styled(question, styles.warning),
        Line::from(""),
        Line::from("Esc: cancel"),
    ]
}

fn form_lines<'a>(host: &'a PageHost, styles: &ScreenStyles) -> Vec<Line<'a>> {
    let session = host.session();
    let heading = match session.codec().target_id() {
        Some(item) => format!("Edit item {item}"),
        None => "Add item".to_string(),
    };
    let mut lines = vec![Line::styled(heading, styles.header), Line::from("")];

    for alert in &host.fixture().alerts {
        lines.push(Line::styled(format!("! {alert}"), styles.warning));
    }

    for (index, select) in session.related().iter().enumerate() {
        let marker = if index == host.related_focus() { "> " } else { "  " };
        let value = select.selected.as_deref().unwrap_or("---------");
        let slot = host.slots().change_link(&select.name);
        let link = match host.page().href(&slot) {
            Some(href) => Span::styled(format!("change: {href}"), styles.link),
            None => Span::styled("change: disabled", styles.menu_disabled),
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{marker}{}: {value}  ", select.name)),
            link,
        ]));
    }

    lines.push(Line::from(""));
    if let Some(line) = item_actions_line(host) {
        lines.push(line);
    }
    lines.push(Line::from("Tab: next field  r: change value  Esc: cancel"));
    lines
}
