use chrono::Utc;
use colored::Colorize;
use promptz::api::{CmdMessage, MessageLevel};
use promptz::index::DisplayPrompt;
use promptz::model::Prompt;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

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

/// Same as [`print_messages`] but on stderr, for output that must not mix
/// with piped stdout.
pub(super) fn print_notices(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info | MessageLevel::Success => {
                eprintln!("{}", message.content.dimmed())
            }
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

/// Raw prompt text, nothing else, so it can be piped to a clipboard tool.
pub(super) fn print_raw_prompts(prompts: &[DisplayPrompt]) {
    for (i, dp) in prompts.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", dp.prompt.text);
    }
}

pub(super) fn print_prompts(prompts: &[DisplayPrompt], show_ids: bool) {
    for dp in prompts {
        println!("{}", prompt_line(dp, show_ids));
    }
}

fn prompt_line(dp: &DisplayPrompt, show_ids: bool) -> String {
    let idx_str = format!("{:>4}. ", dp.index);
    let id_str = if show_ids {
        format!("{} ", dp.prompt.id)
    } else {
        String::new()
    };
    let time_ago = format_time_ago(&dp.prompt);

    let fixed_width = idx_str.width() + id_str.width() + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);

    let flat: String = dp
        .prompt
        .text
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();
    let text_display = truncate_to_width(&flat, available);
    let padding = available.saturating_sub(text_display.width());

    format!(
        "{}{}{}{}{}",
        idx_str.yellow(),
        id_str.dimmed(),
        text_display,
        " ".repeat(padding),
        time_ago.dimmed()
    )
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let limit = max_width.saturating_sub(1);
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push('…');
    result
}

fn format_time_ago(prompt: &Prompt) -> String {
    let time_str = match prompt.created_at_utc() {
        Some(created) => {
            let duration = Utc::now().signed_duration_since(created);
            timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
        }
        None => "unknown date".to_string(),
    };

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
