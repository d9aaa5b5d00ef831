use artisort::commands::{CmdMessage, JudgedItem, MessageLevel, Vocabulary};
use artisort::config::ArtisortConfig;
use artisort::error::{ArtisortError, RuleError};
use artisort::rules::{Outcome, Rule};
use colored::{ColoredString, Colorize};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

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

fn colored_outcome(outcome: Outcome) -> ColoredString {
    let text = pad_to_width(outcome.label(), 8);
    match outcome {
        Outcome::Keep => text.green().bold(),
        Outcome::Discard => text.red(),
        Outcome::Undetermined => text.yellow(),
    }
}

/// Pads with spaces to a display width; CJK characters count double.
fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

pub(super) fn print_rules(rules: &[Rule]) {
    for rule in rules {
        println!("{} {}", format!("row {:>3}", rule.row).dimmed(), rule);
    }
}

pub(super) fn print_judged(judged: &[JudgedItem]) {
    for entry in judged {
        println!(
            "{} {}  {}",
            colored_outcome(entry.decision.outcome),
            entry.item,
            format!("({})", entry.decision.reason).dimmed()
        );
    }
}

pub(super) fn print_vocabulary(vocabulary: &[Vocabulary]) {
    for (i, group) in vocabulary.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", group.title.bold());
        for word in &group.words {
            println!("  {}", word);
        }
    }
}

pub(super) fn print_config(config: &ArtisortConfig, path: &Path) {
    println!("{}", path.display().to_string().dimmed());
    for (key, value) in config.list_all() {
        println!("{} = {}", key.bold(), value);
    }
}

/// Formats an error for stderr. Rule errors get their location and a hint.
pub fn format_error(err: &ArtisortError) -> String {
    match err {
        ArtisortError::Rules(rule_err) => format_rule_error(rule_err),
        other => format!("{} {}", "Error:".red().bold(), other),
    }
}

fn format_rule_error(err: &RuleError) -> String {
    let mut out = String::new();
    if let Some(loc) = err.location {
        out.push_str(&format!(
            "Row {} of the rule sheet, column {}, is not valid\n",
            loc.row.to_string().blue(),
            loc.column.label().blue()
        ));
    }
    out.push_str(&format!("{}\n", err.kind.to_string().red()));
    out.push_str(&err.kind.hint().green().to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use artisort::error::RuleErrorKind;
    use artisort::grammar::Column;

    #[test]
    fn pads_cjk_by_display_width() {
        assert_eq!(pad_to_width("不锁", 8), "不锁    ");
        assert_eq!(pad_to_width("没有决断", 8), "没有决断");
    }

    #[test]
    fn rule_error_mentions_row_column_and_hint() {
        colored::control::set_override(false);
        let err = ArtisortError::Rules(RuleError::at(
            RuleErrorKind::BadOutcome("好".into()),
            7,
            Column::Outcome,
        ));
        let text = format_error(&err);
        assert!(text.contains("Row 7"));
        assert!(text.contains("期望结果"));
        assert!(text.contains("[好] is not a valid outcome"));
        assert!(text.contains("锁 or 不锁"));
    }
}
