use colored::Colorize;
use patternbook::api::{CmdMessage, CmdResult, Exhibit, MessageLevel};
use patternbook::catalog::{Family, PatternEntry};
use patternbook::error::Result;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 18;
const FAMILY_WIDTH: usize = 12;

pub(super) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("  {}", message.content),
            MessageLevel::Success => println!("  {}", message.content.green()),
            MessageLevel::Warning => println!("  {}", message.content.yellow()),
            MessageLevel::Error => println!("  {}", message.content.red()),
        }
    }
}

fn print_exhibits(exhibits: &[Exhibit]) {
    for exhibit in exhibits {
        let line = format!("{} = {}", exhibit.label, exhibit.value);
        println!("    {}", truncate_to_width(&line, LINE_WIDTH - 4).dimmed());
    }
}

pub(super) fn print_results(results: &[CmdResult]) {
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        if let Some(id) = result.pattern {
            let family = id.entry().family;
            println!(
                "{} {}",
                id.as_str().bold(),
                format!("({})", family).color(family_color(family))
            );
        }
        print_messages(&result.messages);
        print_exhibits(&result.exhibits);
    }
}

pub(super) fn print_entries(entries: &[&PatternEntry]) {
    if entries.is_empty() {
        println!("No patterns found.");
        return;
    }

    let available = LINE_WIDTH.saturating_sub(ID_WIDTH + FAMILY_WIDTH);
    for entry in entries {
        let id = format!("{:<width$}", entry.id.as_str(), width = ID_WIDTH);
        let family = format!("{:<width$}", entry.family.to_string(), width = FAMILY_WIDTH);
        let summary = truncate_to_width(entry.summary, available);
        println!(
            "{}{}{}",
            id.bold(),
            family.color(family_color(entry.family)),
            summary
        );
    }
}

pub(super) fn print_settings(settings: &[(String, String)]) {
    let key_width = settings.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
    for (key, value) in settings {
        println!("{:<width$} = {}", key, value.cyan(), width = key_width);
    }
}

fn family_color(family: Family) -> colored::Color {
    match family {
        Family::Creational => colored::Color::Yellow,
        Family::Structural => colored::Color::Blue,
        Family::Behavioral => colored::Color::Magenta,
    }
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
