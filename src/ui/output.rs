//! Status lines for command output

use super::context::UiContext;
use console::style;

/// Kind of status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Operation succeeded
    Done,
    /// Something changed the user should know about
    Warning,
    /// Neutral information
    Info,
    /// Dimmed follow-up text
    Note,
}

impl Status {
    fn tag(self) -> &'static str {
        match self {
            Self::Done => "[OK]",
            Self::Warning => "[WARN]",
            Self::Info => "[INFO]",
            Self::Note => "",
        }
    }
}

/// Print a banner naming what is being shown
pub fn intro(ctx: &UiContext, title: &str) {
    if ctx.use_fancy_output() {
        cliclack::intro(style(title).cyan().bold()).ok();
    } else {
        println!("{}\n", style(title).cyan().bold());
    }
}

/// Print a status line, with optional dimmed detail
pub fn status(ctx: &UiContext, kind: Status, message: &str, detail: Option<&str>) {
    let line = match detail {
        Some(detail) => format!("{} ({})", message, style(detail).dim()),
        None => message.to_string(),
    };

    if ctx.use_fancy_output() {
        let _ = match kind {
            Status::Done => cliclack::log::success(line),
            Status::Warning => cliclack::log::warning(line),
            Status::Info => cliclack::log::info(line),
            Status::Note => cliclack::log::remark(line),
        };
        return;
    }

    let tag = style(kind.tag());
    match kind {
        Status::Done => println!("  {} {}", tag.green(), line),
        Status::Warning => println!("  {} {}", tag.yellow(), line),
        Status::Info => println!("  {} {}", tag.cyan(), line),
        Status::Note => println!("  {}", style(line).dim()),
    }
}

/// Print an aligned `key: value` line
pub fn key_value(ctx: &UiContext, key: &str, value: &str) {
    let key = if ctx.use_fancy_output() {
        style(key).dim()
    } else {
        style(key)
    };
    println!("  {}: {}", key, value);
}
