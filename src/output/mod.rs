use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::provider::status::{kind, StatusKind};

pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

pub fn step(num: usize, total: usize, msg: &str) {
    println!(
        "{} {}",
        style(format!("[{}/{}]", num, total)).bold().cyan(),
        msg
    );
}

pub fn success(msg: &str) {
    println!("{} {}", style("✓").bold().green(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").bold().red(), msg);
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", style("!").bold().yellow(), msg);
}

pub fn info(msg: &str) {
    println!("{} {}", style("→").bold().blue(), msg);
}

pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Colors a provider status string: green for completed, red for failed or
/// rolled back, yellow while in flight.
pub fn styled_status(status: &str) -> String {
    let styled = match kind(status) {
        StatusKind::Success => style(status).bold().green(),
        StatusKind::Failure => style(status).bold().red(),
        StatusKind::InProgress => style(status).bold().yellow(),
    };
    styled.to_string()
}

pub fn dim(msg: &str) -> String {
    style(msg).dim().to_string()
}

/// Indented key/value line for parameters and outputs.
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", style(key).bold(), value);
}
