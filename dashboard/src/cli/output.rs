//! Terminal output helpers

use colored::{ColoredString, Colorize};

use crate::deploy::{DeploymentStep, StepStatus};
use crate::render::{Badge, BadgeColor};

pub fn paint(badge: &Badge) -> ColoredString {
    let label = badge.label.as_str();
    match badge.color {
        BadgeColor::Green => label.green(),
        BadgeColor::Yellow => label.yellow(),
        BadgeColor::Red => label.red(),
        BadgeColor::Gray => label.dimmed(),
        BadgeColor::Blue => label.blue(),
    }
}

pub fn heading(title: &str) {
    println!();
    println!("{}", format!("=== {} ===", title).bold());
    println!();
}

pub fn row(name: &str, badge: &Badge) {
    println!("  {:18} {}", name, paint(badge));
}

pub fn step_line(step: DeploymentStep, status: StepStatus) -> String {
    let marker = match status {
        StepStatus::Completed => "[x]".green(),
        StepStatus::Active => "[>]".blue(),
        StepStatus::Pending => "[ ]".dimmed(),
    };
    format!("  {} {:20} {}", marker, step.title(), step.description().dimmed())
}
