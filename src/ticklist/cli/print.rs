use colored::Colorize;
use ticklist::api::{CmdMessage, MessageLevel};
use ticklist::model::ListKind;
use ticklist::session::Filters;
use ticklist::view::{ListView, Row, View};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 72;
const INDEX_WIDTH: usize = 4;
const GAP: &str = "  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_view(view: &View, filters: &Filters) {
    print_list(&view.todo, filters.get(ListKind::Todo));
    println!();
    print_list(&view.pass, filters.get(ListKind::Pass));
}

fn print_list(list: &ListView, filter: &str) {
    if filter.is_empty() {
        println!("{}", list.list.to_string().bold());
    } else {
        println!(
            "{} {}",
            list.list.to_string().bold(),
            format!("(filter: {})", filter).dimmed()
        );
    }

    if list.rows.is_empty() {
        println!("{}", "    (empty)".dimmed());
        return;
    }

    for row in &list.rows {
        println!("{}", format_row(list.list, row));
    }
}

fn format_row(list: ListKind, row: &Row) -> String {
    let index = match row.index {
        Some(n) => format!("{:>width$}", n, width = INDEX_WIDTH),
        None => " ".repeat(INDEX_WIDTH),
    };

    let Some(marker) = row.marker else {
        return format!("{}{}{}", index, GAP, row.text.dimmed().italic());
    };

    let available = LINE_WIDTH.saturating_sub(INDEX_WIDTH + GAP.len() + marker.width());
    let label = truncate_to_width(&row.text, available);
    let padding = " ".repeat(available.saturating_sub(label.width()));

    let marker = match list {
        ListKind::Todo => marker.green(),
        ListKind::Pass => marker.dimmed(),
    };
    format!("{}{}{}{}{}", index.yellow(), GAP, label, padding, marker)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
