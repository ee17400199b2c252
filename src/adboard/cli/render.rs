//! # Rendering
//!
//! Cards are laid out in Rust with Unicode-aware widths and colored with
//! `colored`, which honours `NO_COLOR` and non-tty output on its own.
//!
//! ```text
//! 1. Bike                                              1500 ₴
//!    Red bike, great shape
//!    Phone: +380671234567                        2 hours ago
//! ```

use adboard::api::{CmdMessage, MessageLevel};
use adboard::board::AdCard;
use adboard::config::BoardConfig;
use colored::Colorize;
use std::time::Duration;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const HEADER: &str = "🌟 My Board";
pub const MIN_WIDTH: usize = 40;
pub const MAX_WIDTH: usize = 100;
const INDENT: &str = "   ";

pub fn line_width() -> usize {
    let (_, cols) = console::Term::stdout().size();
    (cols as usize).clamp(MIN_WIDTH, MAX_WIDTH)
}

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

pub(super) fn render_header(width: usize) -> String {
    let rule = "─".repeat(width);
    format!("{}\n{}", HEADER.bold(), rule.dimmed())
}

pub(super) fn render_cards(cards: &[AdCard], width: usize, now_ms: i64) -> String {
    cards
        .iter()
        .map(|card| render_card(card, width, now_ms))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub(super) fn render_card(card: &AdCard, width: usize, now_ms: i64) -> String {
    let index = format!("{}. ", card.index);
    let price = card.price.clone().unwrap_or_default();
    let title_room = width
        .saturating_sub(index.width())
        .saturating_sub(price.width())
        .saturating_sub(1);
    let title = truncate_to_width(&card.title, title_room);
    let title_pad = width
        .saturating_sub(index.width() + title.width() + price.width());

    let mut lines = vec![format!(
        "{}{}{}{}",
        index.yellow(),
        title.bold(),
        " ".repeat(title_pad),
        price.green()
    )];

    let body_room = width.saturating_sub(INDENT.width());
    for line in card.description.lines() {
        lines.push(format!("{}{}", INDENT, truncate_to_width(line, body_room)));
    }

    let phone = format!("Phone: {}", card.phone);
    let age = format_time_ago(card.created_at, now_ms);
    let phone_pad = width.saturating_sub(INDENT.width() + phone.width() + age.width());
    lines.push(format!(
        "{}{}{}{}",
        INDENT,
        phone,
        " ".repeat(phone_pad.max(1)),
        age.dimmed()
    ));

    lines.join("\n")
}

pub(super) fn render_config(config: &BoardConfig) -> String {
    config
        .list_all()
        .into_iter()
        .map(|(key, value)| format!("{} = {}", key, value))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_time_ago(created_at_ms: i64, now_ms: i64) -> String {
    let elapsed = u64::try_from(now_ms.saturating_sub(created_at_ms)).unwrap_or(0);
    Formatter::new().convert(Duration::from_millis(elapsed))
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
