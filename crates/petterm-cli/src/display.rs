//! Terminal rendering helpers.

use colored::{ColoredString, Colorize};

use petterm_pet::{Pet, time_message};
use petterm_types::{ActionResult, Stat, TimeSyncResult};

/// Width of boxes and dividers.
pub const WIDTH: usize = 42;

const BAR_WIDTH: u32 = 20;

/// A boxed, centred title.
pub fn header(title: &str) -> String {
    let inner = WIDTH.saturating_sub(2);
    let len = title.chars().count();
    let left = inner.saturating_sub(len).checked_div(2).unwrap_or(0);
    let right = inner.saturating_sub(len).saturating_sub(left);
    let border = "═".repeat(inner);
    format!(
        "{}\n{}{}{}{}{}\n{}",
        format!("╔{border}╗").cyan(),
        "║".cyan(),
        " ".repeat(left),
        title.bold(),
        " ".repeat(right),
        "║".cyan(),
        format!("╚{border}╝").cyan(),
    )
}

/// A horizontal rule.
pub fn divider() -> ColoredString {
    "─".repeat(WIDTH).bright_black()
}

fn bar_color(text: &str, value: u32) -> ColoredString {
    match value {
        80.. => text.green(),
        50..=79 => text.yellow(),
        30..=49 => text.truecolor(255, 165, 0),
        _ => text.red(),
    }
}

fn bar(percent: u32) -> String {
    let percent = percent.min(100);
    let filled = percent
        .saturating_mul(BAR_WIDTH)
        .saturating_add(50)
        .checked_div(100)
        .unwrap_or(0);
    let empty = BAR_WIDTH.saturating_sub(filled);
    let filled = usize::try_from(filled).unwrap_or(0);
    let empty = usize::try_from(empty).unwrap_or(0);
    format!(
        "{}{}",
        bar_color(&"█".repeat(filled), percent),
        "░".repeat(empty).bright_black()
    )
}

/// `Hunger       ████████████████░░░░  80%`
pub fn stat_bar(stat: Stat, value: u32) -> String {
    format!("{:<12} {} {:>3}%", stat.label(), bar(value), value)
}

/// Progress through the current level.
pub fn xp_bar(pet: &Pet) -> String {
    let percent = u32::from(pet.level_progress_percent());
    let next = pet.experience().saturating_add(pet.xp_to_next_level());
    format!("XP: {} {}/{}", bar(percent), pet.experience(), next)
        .cyan()
        .to_string()
}

/// `120 🪙`
pub fn coins(amount: u64) -> String {
    format!("{amount} 🪙")
}

/// `Mochi the Rabbit 🐰`
pub fn pet_title(pet: &Pet) -> String {
    format!("{} the {} {}", pet.name(), pet.species(), pet.species().emoji())
}

/// Show what a care action did.
pub fn action_result(result: &ActionResult) {
    println!();
    if !result.success {
        println!("{}", result.message.yellow());
        println!();
        return;
    }
    println!("{}", result.message.green().bold());
    let changes: Vec<String> = result
        .stat_changes
        .iter()
        .filter(|change| change.delta != 0)
        .map(|change| format!("{:+} {}", change.delta, change.stat.label()))
        .collect();
    if !changes.is_empty() {
        println!("{}", changes.join("  ").bright_black());
    }
    if result.xp_gained > 0 {
        println!("{}", format!("+{} XP", result.xp_gained).cyan());
    }
    if let Some(level) = result.new_level.filter(|_| result.level_up) {
        println!("{}", format!("🎉 Reached level {level}!").magenta().bold());
    }
    println!();
}

/// Show decay applied on load, if any.
pub fn sync_result(synced: Option<&TimeSyncResult>) {
    let Some(sync) = synced else {
        return;
    };
    println!("{}", format!("⏰ Last visit: {}", time_message(sync.hours_passed)).bright_black());
    for warning in &sync.warnings {
        println!("{}", format!("⚠️  {warning}").red());
    }
}

/// Print the stat block.
pub fn stats(pet: &Pet) {
    println!("{}", divider());
    for stat in Stat::ALL {
        println!("{}", stat_bar(stat, pet.stats().get(stat)));
    }
    println!("{}", divider());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_bar_layout() {
        colored::control::set_override(false);
        let line = stat_bar(Stat::Hunger, 80);
        assert!(line.starts_with("Hunger       "));
        assert_eq!(line.matches('█').count(), 16);
        assert_eq!(line.matches('░').count(), 4);
        assert!(line.ends_with(" 80%"));
    }

    #[test]
    fn bar_is_always_full_width() {
        colored::control::set_override(false);
        for value in [0, 1, 49, 50, 99, 100, 150] {
            let rendered = bar(value);
            let cells = rendered.matches('█').count().saturating_add(rendered.matches('░').count());
            assert_eq!(cells, 20, "value {value}");
        }
    }

    #[test]
    fn header_has_three_lines() {
        colored::control::set_override(false);
        let text = header("Mochi");
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("Mochi"));
    }
}
