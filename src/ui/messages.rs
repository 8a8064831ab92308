//! Status lines printed by the CLI: icon, color, message.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

fn line(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    format!("{color}{BOLD}{icon} {RESET}{msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_BLUE, "ℹ️", msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_GREEN, "✅", msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_YELLOW, "⚠️", msg));
}

/// Errors go to stderr.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(FG_RED, "❌", msg));
}

/// One warning line per item.
pub fn warnings<T: fmt::Display>(items: &[T]) {
    for w in items {
        warning(w);
    }
}

/// Report title, underlined to its own width.
pub fn header<T: fmt::Display>(msg: T) {
    let title = msg.to_string();
    let rule = "-".repeat(title.chars().count());
    println!("{FG_BLUE}{BOLD}{title}{RESET}\n{rule}");
}
