//! The startup banner and the getting-started walkthrough.

use colored::Colorize;

struct Step {
    title: &'static str,
    emoji: &'static str,
    lines: &'static [&'static str],
}

const STEPS: [Step; 5] = [
    Step {
        title: "Welcome",
        emoji: "🐱",
        lines: &[
            "Your pet lives in your terminal and grows when you code.",
            "",
            "\"Writing code = being with your pet\"",
            "",
            "Every Git commit feeds and cheers up your pet, because it is",
            "happy just watching you work.",
        ],
    },
    Step {
        title: "Meet Your Pet",
        emoji: "📊",
        lines: &[
            "Your pet has 5 stats:",
            "",
            "  Hunger       feed with   pet feed",
            "  Happiness    play with   pet play",
            "  Health       heal with   pet heal",
            "  Cleanliness  clean with  pet clean",
            "  Energy       rest with   pet sleep",
            "",
            "Stats decay slowly (over days), so there is no need to check",
            "in constantly.",
        ],
    },
    Step {
        title: "Git Integration",
        emoji: "💻",
        lines: &[
            "Run `pet git` after a coding session. Every new commit gives:",
            "",
            "  • Coins for the shop",
            "  • Experience to level up",
            "  • Hunger and happiness for your pet",
            "",
            "Commit messages affect rewards:",
            "  fix/bug    Bug Fix    +10 🪙  +20 XP",
            "  feat/add   Feature    +8 🪙   +15 XP",
            "  refactor   Refactor   +6 🪙   +12 XP",
            "",
            "Commits between 22:00 and 06:00 earn double coins. 🦉",
        ],
    },
    Step {
        title: "Shop & Inventory",
        emoji: "🛒",
        lines: &[
            "See your items:   pet inventory",
            "Visit the shop:   pet shop",
            "Buy something:    pet shop buy fish 2",
            "Use an item:      pet use fish",
        ],
    },
    Step {
        title: "Tips",
        emoji: "💡",
        lines: &[
            "• `pet care` looks after every need in one go",
            "• Daily commit streaks pay bonus coins",
            "• `pet sync` catches up on the time that passed",
            "• A sleeping pet recovers energy fast",
            "• Set auto_care.enabled in config.yaml to restock automatically",
            "",
            "Have fun with your new coding companion! 🐾",
        ],
    },
];

/// Print the banner shown by `pet` and `pet hello`.
pub fn show_logo() {
    println!();
    println!("{}", "╔══════════════════════════════════════════════╗".cyan());
    println!(
        "{}{}{}",
        "║".cyan(),
        "   🐾 PET TERMINAL 🐾   Your Coding Companion  ".yellow().bold(),
        "║".cyan()
    );
    println!("{}", "╚══════════════════════════════════════════════╝".cyan());
    println!();
    for line in ["     /\\_/\\", "    ( o.o )", "     > ^ <"] {
        println!("{}", line.green());
    }
    println!();
    println!(
        "{}",
        format!("  Version {}  |  Type \"pet tutorial\" for help", env!("CARGO_PKG_VERSION")).bright_black()
    );
    println!();
}

/// Print the whole walkthrough.
pub fn show_tutorial() {
    let total = STEPS.len();
    for (index, step) in STEPS.iter().enumerate() {
        println!();
        println!(
            "{}",
            format!("{} {} ({}/{total})", step.emoji, step.title, index.saturating_add(1))
                .cyan()
                .bold()
        );
        println!("{}", crate::display::divider());
        for line in step.lines {
            println!("  {line}");
        }
    }
    println!();
}
