//! Command handlers.
//!
//! Handlers translate between the terminal and [`PetService`]: they gather
//! input, run one service call and render the result. Missing pets are
//! friendly messages, not errors.
//!
//! [`PetService`]: petterm_core::PetService

use std::io::IsTerminal;

use anyhow::{Result, bail};
use chrono::Local;
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};

use petterm_core::{CoreError, Settings};
use petterm_git::GitCli;
use petterm_ledger::{earned_on, total_earned};
use petterm_pet::{CarePlanner, Pet, hours_between, time_message};
use petterm_types::{CareAction, CommitReport, CommitType, Rejection, Species};

use crate::app::App;
use crate::display;
use crate::tutorial;

/// Longest accepted pet name, in characters.
const MAX_NAME_CHARS: usize = 20;

/// Width of the commit subject shown in the rewards list.
const SUBJECT_CHARS: usize = 50;

/// Print the "no pet" hint when `result` is [`CoreError::NoPet`] and turn
/// it into `None`.
fn or_no_pet<T>(result: Result<T, CoreError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(CoreError::NoPet) => {
            println!("{}", "You don't have a pet yet!".yellow());
            println!("{}", "Use \"pet init\" to create one.".bright_black());
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

// ============================================
// Lifecycle
// ============================================

/// `pet init`
pub fn init(app: &mut App, name: Option<String>, species: Option<Species>) -> Result<()> {
    if app.service.has_pet()? {
        println!("{}", "You already have a pet!".yellow());
        println!("{}", "Use \"pet status\" to see your pet.".bright_black());
        return Ok(());
    }

    let name = match name {
        Some(name) => {
            if name.chars().count() > MAX_NAME_CHARS {
                bail!("Name must be {MAX_NAME_CHARS} characters or less.");
            }
            name
        }
        None => Input::<String>::new()
            .with_prompt("What would you like to name your pet?")
            .default(String::from(petterm_pet::DEFAULT_NAME))
            .validate_with(|input: &String| -> Result<(), String> {
                if input.trim().is_empty() {
                    Err(String::from("Please enter a name for your pet."))
                } else if input.chars().count() > MAX_NAME_CHARS {
                    Err(format!("Name must be {MAX_NAME_CHARS} characters or less."))
                } else {
                    Ok(())
                }
            })
            .interact_text()?,
    };

    let species = match species {
        Some(species) => species,
        None => {
            let labels: Vec<String> = Species::ALL
                .iter()
                .map(|s| format!("{} {}", s.emoji(), s.display_name()))
                .collect();
            let choice = Select::new()
                .with_prompt("What species of pet would you like?")
                .items(&labels)
                .default(0)
                .interact()?;
            Species::ALL.get(choice).copied().unwrap_or(Species::Cat)
        }
    };

    let pet = app.service.adopt(&name, species, App::now())?;
    app.service.complete_onboarding()?;

    println!();
    println!("{}", display::header("Your new pet has been born!"));
    println!();
    println!(
        "{}",
        format!("A {} named {} has joined you!", species.display_name(), pet.name().bold()).magenta()
    );
    println!(
        "{}",
        format!(
            "Loves {} and {}.",
            species.favorite_food(),
            species.favorite_activity()
        )
        .bright_black()
    );
    println!();
    println!("{}", "Use \"pet status\" to see your pet's stats!".cyan());
    println!("{}", "Run \"pet tutorial\" for the getting started guide.".cyan());
    println!();
    Ok(())
}

/// `pet release`
pub fn release(app: &mut App, skip_confirmation: bool) -> Result<()> {
    let Some(outcome) = or_no_pet(app.service.status(App::now()))? else {
        return Ok(());
    };
    let pet = outcome.pet;

    println!();
    println!("{}", display::header(&display::pet_title(&pet)));
    println!();
    println!(
        "{}",
        format!("Level: {} | Coins: {}", pet.level(), pet.coins()).bright_black()
    );
    println!();

    if !skip_confirmation && !confirm_release(pet.name())? {
        println!();
        println!("{}", "Cancelled. Your pet is happy to stay with you!".green());
        println!();
        return Ok(());
    }

    app.service.release()?;
    println!();
    println!("{}", display::header("Goodbye, friend!"));
    println!();
    println!("{}", format!("{} has returned to the wild...", pet.name()).bright_black());
    println!();
    println!("{}", "Run \"pet init\" to create a new pet when you're ready.".cyan());
    println!();
    Ok(())
}

fn confirm_release(name: &str) -> Result<bool> {
    let sure = Confirm::new()
        .with_prompt(format!("Are you sure you want to say goodbye to {name} forever?"))
        .default(false)
        .interact()?;
    if !sure {
        return Ok(false);
    }
    let typed: String = Input::new()
        .with_prompt(format!("Type \"yes\" to confirm releasing {name}"))
        .allow_empty(true)
        .interact_text()?;
    Ok(typed.trim().eq_ignore_ascii_case("yes"))
}

/// `pet tutorial`
pub fn tutorial(app: &mut App) -> Result<()> {
    app.service.restart_onboarding()?;
    tutorial::show_tutorial();
    app.service.complete_onboarding()?;
    Ok(())
}

/// `pet hello` and bare `pet`.
pub fn hello(app: &App) -> Result<()> {
    tutorial::show_logo();
    if app.service.is_first_run()? {
        println!("{}", "New here? Run \"pet init\" to adopt a pet, then \"pet tutorial\".".cyan());
        println!();
    }
    Ok(())
}

// ============================================
// Status
// ============================================

/// `pet status`
pub fn status(app: &mut App) -> Result<()> {
    let now = App::now();
    let Some(outcome) = or_no_pet(app.service.status(now))? else {
        return Ok(());
    };
    let pet = &outcome.pet;

    println!();
    println!("{}", display::header(&display::pet_title(pet)));
    println!();
    display::sync_result(outcome.synced.as_ref());

    let state = if pet.is_sleeping() { "💤 Sleeping" } else { "⚡ Awake" };
    println!("{}", format!("Status: {state}").bright_black());
    let since = hours_between(pet.record().last_interaction, now);
    println!("{}", format!("Last seen: {}", time_message(since)).bright_black());
    println!();

    display::stats(pet);
    println!();
    println!("{}", display::xp_bar(pet));
    println!(
        "{}",
        format!(
            "Level: {} ({})   Interactions: {}   Age: {} days",
            pet.level().to_string().bold(),
            pet.title(),
            pet.record().total_interactions,
            pet.age_days(now)
        )
        .bright_black()
    );
    println!();
    println!(
        "{}",
        format!(
            "Mood: {} {} - {} {}",
            pet.mood().emoji(),
            pet.mood().to_string().to_uppercase(),
            pet.name(),
            pet.mood().description()
        )
        .magenta()
    );
    println!();

    println!("{}", format!("Coins: {}", display::coins(pet.coins()).bold()).yellow());
    let today = earned_on(
        pet.coin_history(),
        now.with_timezone(&Local).date_naive(),
        &Local,
    );
    if today > 0 {
        println!("{}", format!("Today's earnings: +{}", display::coins(today)).bright_black());
    }
    let lifetime = total_earned(pet.coin_history());
    if lifetime > 0 {
        println!("{}", format!("Recent earnings: +{}", display::coins(lifetime)).bright_black());
    }
    if pet.git_streak() > 0 || pet.git_commit_count() > 0 {
        println!(
            "{}",
            format!(
                "Git Streak: {} days 🔥   Total Commits: {} 📝",
                pet.git_streak(),
                pet.git_commit_count()
            )
            .bright_black()
        );
    }
    println!();

    let hints = app.service.planner().suggestions(pet);
    for hint in &hints {
        println!("{}", hint.bright_black());
    }
    if !hints.is_empty() {
        println!();
    }
    Ok(())
}

/// `pet sync`
pub fn sync(app: &mut App) -> Result<()> {
    let Some(outcome) = or_no_pet(app.service.status(App::now()))? else {
        return Ok(());
    };
    println!();
    let Some(sync) = &outcome.synced else {
        println!("{}", format!("{} is up to date.", outcome.pet.name()).green());
        println!();
        return Ok(());
    };
    println!(
        "{}",
        format!("⏰ Time passed: {}", petterm_pet::format_duration(sync.hours_passed)).cyan()
    );
    for change in sync.stat_changes.iter().filter(|c| c.delta != 0) {
        println!("  {:+} {}", change.delta, change.stat.label());
    }
    for warning in &sync.warnings {
        println!("{}", format!("⚠️  {warning}").red());
    }
    println!();
    display::stats(&outcome.pet);
    println!();
    Ok(())
}

// ============================================
// Actions
// ============================================

/// `pet feed|play|clean|heal`
///
/// `--item` uses that item directly and `--basic` skips items. Otherwise an
/// awake pet with items of the matching category gets a menu of them, with
/// the plain action as the last choice.
pub fn care_action(app: &mut App, action: CareAction, item: Option<&str>, basic: bool) -> Result<()> {
    if let Some(item) = item {
        return use_item(app, item);
    }
    if basic || !std::io::stdin().is_terminal() {
        return perform(app, action);
    }
    let Some(outcome) = or_no_pet(app.service.status(App::now()))? else {
        return Ok(());
    };
    display::sync_result(outcome.synced.as_ref());
    if outcome.pet.is_sleeping() {
        return perform(app, action);
    }
    let choices: Vec<(String, String)> = outcome
        .pet
        .owned_of_type(app.service.catalog(), action.item_type())
        .into_iter()
        .map(|(item, quantity)| (item.id.clone(), format!("{} {} (x{quantity})", item.emoji, item.name)))
        .collect();
    if choices.is_empty() {
        return perform(app, action);
    }

    let mut labels: Vec<&str> = choices.iter().map(|(_, label)| label.as_str()).collect();
    let plain = format!("No item, just {action}");
    labels.push(&plain);
    let picked = Select::new()
        .with_prompt(format!("What would you like to use to {action} {}?", outcome.pet.name()))
        .items(&labels)
        .default(0)
        .interact()?;
    let Some((item_id, _)) = choices.get(picked) else {
        return perform(app, action);
    };
    use_item(app, item_id)
}

fn perform(app: &mut App, action: CareAction) -> Result<()> {
    let Some(outcome) = or_no_pet(app.service.perform(action, App::now()))? else {
        return Ok(());
    };
    display::sync_result(outcome.synced.as_ref());
    display::action_result(&outcome.value);
    display::stats(&outcome.pet);
    Ok(())
}

/// `pet sleep`
pub fn sleep(app: &mut App) -> Result<()> {
    let Some(outcome) = or_no_pet(app.service.toggle_sleep(App::now()))? else {
        return Ok(());
    };
    display::sync_result(outcome.synced.as_ref());
    display::action_result(&outcome.value);
    Ok(())
}

/// `pet use <item>`
pub fn use_item(app: &mut App, item_id: &str) -> Result<()> {
    let Some(outcome) = or_no_pet(app.service.use_item(item_id, App::now()))? else {
        return Ok(());
    };
    display::sync_result(outcome.synced.as_ref());
    display::action_result(&outcome.value);
    match outcome.value.rejection {
        None => display::stats(&outcome.pet),
        Some(Rejection::Sleeping) => println!("{}", "Use \"pet sleep\" to wake them up.".bright_black()),
        Some(_) => println!("{}", "Check your items with \"pet inventory\".".bright_black()),
    }
    Ok(())
}

/// `pet care`
pub fn care(app: &mut App) -> Result<()> {
    let Some(outcome) = or_no_pet(app.service.care(App::now()))? else {
        return Ok(());
    };
    let pet = &outcome.pet;
    println!();
    println!("{}", display::header("ONE-CLICK CARE"));
    println!();

    if let Some(restock) = outcome.value.restock.as_ref().filter(|r| r.purchased) {
        println!("{}", "🛒 Restocked supplies:".cyan());
        for item in &restock.items {
            println!("  {} x{} (-{})", item.item_name, item.quantity, display::coins(item.cost));
        }
        println!();
    }

    let result = &outcome.value.care;
    if result.actions_taken.is_empty() {
        println!("{}", format!("{} doesn't need anything right now! 💚", pet.name()).green());
        println!();
        return Ok(());
    }
    for step in &result.actions_taken {
        if step.success {
            let changes: Vec<String> = step
                .stat_changes
                .iter()
                .map(|t| format!("{} {} → {}", t.stat.label(), t.from, t.to))
                .collect();
            println!(
                "{} {} ({})",
                "✓".green(),
                format!("Used {}", step.item_name).green(),
                changes.join(", ")
            );
        } else {
            let reason = step.reason.as_deref().unwrap_or("Could not help.");
            println!("{} {}", "✗".red(), reason.yellow());
        }
    }
    println!();
    if result.coins_spent > 0 {
        println!("{}", format!("Spent {}", display::coins(result.coins_spent)).bright_black());
    }
    if !CarePlanner::can_afford_auto_care(pet) {
        println!("{}", "💡 Make some commits to afford more supplies.".bright_black());
    }
    display::stats(pet);
    Ok(())
}

// ============================================
// Items
// ============================================

/// `pet inventory`
pub fn inventory(app: &mut App) -> Result<()> {
    let Some(outcome) = or_no_pet(app.service.status(App::now()))? else {
        return Ok(());
    };
    let pet = &outcome.pet;
    println!();
    println!("{}", display::header("INVENTORY"));
    println!();
    if pet.inventory().is_empty() {
        println!("{}", "Your inventory is empty. Visit \"pet shop\"!".bright_black());
    }
    for (item_id, quantity) in pet.inventory() {
        let Some(item) = app.service.catalog().get(item_id) else {
            println!("❔ {item_id} x{quantity}");
            continue;
        };
        println!(
            "{} {} x{}  {}",
            item.emoji,
            item.name.bold(),
            quantity,
            format!("[{item_id}]").bright_black()
        );
    }
    println!();
    println!("{}", format!("Coins: {}", display::coins(pet.coins())).yellow());
    println!("{}", "Use an item with: pet use <item>".bright_black());
    println!();
    Ok(())
}

/// `pet shop`
pub fn shop(app: &mut App) -> Result<()> {
    let Some(outcome) = or_no_pet(app.service.status(App::now()))? else {
        return Ok(());
    };
    let coins = outcome.pet.coins();
    let shop = app.service.shop();
    println!();
    println!("{}", display::header("PET SHOP"));
    for (item_type, items) in shop.listing() {
        println!();
        println!("{}", item_type.category_name().cyan().bold());
        for item in items {
            let price = item.price.unwrap_or(0);
            let line = format!("  {} {:<18} {:>4} 🪙  [{}]", item.emoji, item.name, price, item.id);
            if price <= coins {
                println!("{line}");
            } else {
                println!("{}", line.bright_black());
            }
        }
    }
    println!();
    println!("{}", format!("Your coins: {}", display::coins(coins)).yellow());
    println!("{}", "Buy with: pet shop buy <item> [quantity]".bright_black());
    println!();
    Ok(())
}

/// `pet shop buy <item> [quantity]`
pub fn buy(app: &mut App, item_id: &str, quantity: u32) -> Result<()> {
    let Some(outcome) = or_no_pet(app.service.purchase(item_id, quantity, App::now()))? else {
        return Ok(());
    };
    let result = &outcome.value;
    println!();
    if result.success {
        println!("{}", result.message.green());
    } else {
        println!("{}", result.message.yellow());
        let most = app.service.shop().max_affordable(item_id, result.balance);
        if most > 0 {
            println!("{}", format!("You can afford up to {most}.").bright_black());
        }
    }
    println!("{}", format!("Balance: {}", display::coins(result.balance)).yellow());
    println!();
    Ok(())
}

// ============================================
// Git
// ============================================

/// `pet git`
pub fn git(app: &mut App) -> Result<()> {
    let log = GitCli::from_current_dir()?;
    let Some(outcome) = or_no_pet(app.service.check_commits(&log, App::now()))? else {
        return Ok(());
    };
    let report = &outcome.value;
    println!();
    println!("{}", display::header("GIT COMMITS"));
    println!();

    if !report.success {
        let error = report.error.as_deref().unwrap_or("Unknown error");
        println!("{}", format!("Error: {error}").red());
        println!();
        if log.repo_root().is_none() {
            println!("{}", "Initialize a Git repository to start earning rewards:".bright_black());
            println!("{}", "  git init".cyan());
            println!("{}", "  git commit -m \"Initial commit\"".cyan());
            println!();
        }
        return Ok(());
    }

    println!("{}", display::divider());
    println!(
        "{}",
        format!("Current Streak: {} days 🔥", report.streak).bright_black()
    );
    println!(
        "{}",
        format!("Total Rewarded: {} commits 📝", outcome.pet.git_commit_count()).bright_black()
    );
    println!("{}", display::divider());
    println!();

    if report.new_commits == 0 {
        println!("{}", "No new commits to reward.".bright_black());
        println!("{}", "Make some commits and come back!".cyan());
        println!();
        return Ok(());
    }
    rewards(report, &outcome.pet);
    Ok(())
}

fn rewards(report: &CommitReport, pet: &Pet) {
    println!("{}", format!("Found {} new commit(s)!", report.new_commits).green().bold());
    println!();
    for reward in &report.rewards {
        let subject: String = reward.message.chars().take(SUBJECT_CHARS).collect();
        let ellipsis = if reward.message.chars().count() > SUBJECT_CHARS { "..." } else { "" };
        println!("{}", format!("{} - {subject}{ellipsis}", reward.short_hash).bright_black());
        let tag = format!("  [{}]", reward.commit_type.display_name());
        let tag = match reward.commit_type {
            CommitType::BugFix => tag.red(),
            CommitType::Feature => tag.green(),
            CommitType::Refactor => tag.blue(),
            CommitType::Normal => tag.white(),
        };
        println!(
            "{} {} {}",
            tag,
            format!("+{}", display::coins(reward.coins)).yellow(),
            format!("+{} XP", reward.xp).cyan()
        );
        for bonus in &reward.bonuses {
            println!("{}", format!("  {bonus}").bright_black());
        }
        println!();
    }
    println!("{}", display::divider());
    println!(
        "{}",
        format!("Total: +{}  +{} XP", display::coins(report.total_coins), report.total_xp)
            .yellow()
            .bold()
    );
    if report.streak > 1 {
        println!("{}", format!("  🔥 {}-day streak bonus included!", report.streak).magenta());
    }
    println!();
    println!("{}", format!("{} is proud of your work! 💚", pet.name()).green());
    println!();
}

// ============================================
// Config
// ============================================

/// `pet config show`
pub fn config_show(app: &App) -> Result<()> {
    let settings = app.service.settings();
    println!();
    println!("{}", display::header("SETTINGS"));
    println!();
    println!("{}", format!("Data directory: {}", app.data_dir().display()).bright_black());
    println!("{}", format!("Config file:    {}", app.config_path().display()).bright_black());
    println!();
    println!("{}", serde_yml::to_string(settings)?);
    for problem in settings.validate() {
        println!("{}", format!("⚠️  {problem}").red());
    }
    Ok(())
}

/// `pet config init`
pub fn config_init(app: &App) -> Result<()> {
    let path = app.config_path();
    if Settings::create_default(&path)? {
        println!("{}", format!("Created {}", path.display()).green());
    } else {
        println!("{}", format!("{} already exists.", path.display()).yellow());
    }
    Ok(())
}
