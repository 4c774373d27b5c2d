use inquire::{Confirm, InquireError, Password, PasswordDisplayMode, Select, Text};
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cli::handlers::{self, CommandOutput, HandlerResult};
use crate::core::PageContext;
use crate::crypto;
use crate::generators::password::{GeneratorError, MAX_PASSWORD_LENGTH};
use crate::models::{CharacterClass, PasswordSpec, StrengthLevel};
use crate::utils;

const HASH: &str = "🔑  Generate password hash";
const SQL: &str = "🗄️  Build SQL query";
const SCRIPT: &str = "📜  Build PHP reset script";
const GENERATE: &str = "🎲  Generate random password";
const STRENGTH: &str = "📊  Check password strength";
const LIVE: &str = "⏱️  Live hashing";
const THEME: &str = "🌓  Toggle theme";
const EXIT: &str = "❌  Exit";

// Esc goes back to the menu; Ctrl+C still aborts
fn skippable<T>(result: Result<T, InquireError>) -> Result<Option<T>, InquireError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(e) => Err(e),
    }
}

fn prompt_password(message: &str) -> Result<Option<String>, InquireError> {
    skippable(
        Password::new(message)
            .with_display_mode(PasswordDisplayMode::Masked)
            .with_display_toggle_enabled()
            .without_confirmation()
            .with_help_message("Ctrl+R shows or hides the password")
            .prompt(),
    )
}

fn prompt_text(message: &str, default: &str) -> Result<Option<String>, InquireError> {
    skippable(Text::new(message).with_default(default).prompt())
}

fn show_result(ctx: &PageContext, result: HandlerResult) -> Result<(), InquireError> {
    let output: CommandOutput = match result {
        Ok(output) => output,
        Err(e) => {
            ctx.notify(&e.to_string());
            return Ok(());
        }
    };

    println!();
    handlers::print_output(ctx, &output);
    println!();

    if let Some(text) = &output.copyable {
        let copy = Confirm::new("Copy to clipboard?")
            .with_default(false)
            .prompt_skippable()?
            .unwrap_or(false);
        if copy {
            match utils::copy_to_clipboard(text) {
                Ok(()) => ctx.confirm("Copied to clipboard!"),
                Err(e) => {
                    log::warn!("{}", e);
                    ctx.notify("Failed to copy to clipboard");
                }
            }
        }
    }
    Ok(())
}

fn hash_section(ctx: &PageContext) -> Result<(), InquireError> {
    let Some(password) = prompt_password("Password:")? else {
        return Ok(());
    };
    show_result(ctx, handlers::handle_hash(ctx, &password, None))
}

fn sql_section(ctx: &PageContext) -> Result<(), InquireError> {
    let Some(username) = skippable(Text::new("Username:").prompt())? else {
        return Ok(());
    };
    let Some(password) = prompt_password("New password:")? else {
        return Ok(());
    };
    let Some(prefix) = prompt_text("Table prefix:", &ctx.config.default_table_prefix)? else {
        return Ok(());
    };
    show_result(ctx, handlers::handle_sql(ctx, username.trim(), &password, Some(prefix.as_str()), None))
}

fn script_section(ctx: &PageContext) -> Result<(), InquireError> {
    let Some(user_id) = prompt_text("User ID:", "1")? else {
        return Ok(());
    };
    let user_id = match user_id.trim().parse::<u64>() {
        Ok(id) => id,
        Err(_) if user_id.trim().is_empty() => {
            ctx.notify("Please enter a user ID");
            return Ok(());
        }
        Err(_) => {
            ctx.notify("User ID must be a whole number");
            return Ok(());
        }
    };
    let Some(password) = prompt_password("New password:")? else {
        return Ok(());
    };
    show_result(ctx, handlers::handle_script(user_id, &password))
}

fn generate_section(ctx: &PageContext) -> Result<(), InquireError> {
    let default_length = ctx.config.default_password_length.to_string();
    let Some(length) = prompt_text("Password length:", &default_length)? else {
        return Ok(());
    };
    let length = match length.trim().parse::<usize>() {
        Ok(length) if (1..=MAX_PASSWORD_LENGTH).contains(&length) => length,
        _ => {
            ctx.notify(&GeneratorError::InvalidLength.to_string());
            return Ok(());
        }
    };

    let mut classes = Vec::new();
    for class in CharacterClass::ALL {
        let include = Confirm::new(&format!("Include {}?", class.label()))
            .with_default(true)
            .prompt()?;
        if include {
            classes.push(class);
        }
    }

    show_result(ctx, handlers::handle_generate(&PasswordSpec::new(length, classes)))
}

fn strength_section(ctx: &PageContext) -> Result<(), InquireError> {
    let Some(password) = prompt_password("Password:")? else {
        return Ok(());
    };

    let palette = ctx.palette();
    match crypto::check_password_strength(&password) {
        None => println!("{}", palette.muted.apply_to("Enter a password to check strength")),
        Some(report) => {
            let style = match report.level {
                StrengthLevel::Weak => &palette.danger,
                StrengthLevel::Medium => &palette.warning,
                StrengthLevel::Strong => &palette.success,
            };
            println!(
                "{}",
                style.apply_to(format!("{} {}", utils::strength_bar(report.score), report.level))
            );
        }
    }
    Ok(())
}

pub async fn run_cli_menu(ctx: &mut PageContext, should_exit: Arc<AtomicBool>) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║   🔐 WORDPRESS PASSWORD GENERATOR    ║");
    println!("╚══════════════════════════════════════╝");
    println!(
        "{}",
        ctx.palette()
            .muted
            .apply_to("All hashing happens locally. Your passwords never leave this machine.")
    );

    while !should_exit.load(Ordering::SeqCst) {
        let options = vec![HASH, SQL, SCRIPT, GENERATE, STRENGTH, LIVE, THEME, EXIT];

        let selection = tokio::task::spawn_blocking(move || {
            Select::new("Choose an option:", options)
                .with_help_message("Use arrow keys to navigate, Enter to select. Ctrl+C to exit.")
                .with_page_size(10)
                .prompt_skippable()
        })
        .await?;

        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        let outcome = match selection {
            Ok(Some(HASH)) => hash_section(ctx),
            Ok(Some(SQL)) => sql_section(ctx),
            Ok(Some(SCRIPT)) => script_section(ctx),
            Ok(Some(GENERATE)) => generate_section(ctx),
            Ok(Some(STRENGTH)) => strength_section(ctx),
            Ok(Some(LIVE)) => {
                handlers::run_live(ctx, false).await?;
                Ok(())
            }
            Ok(Some(THEME)) => {
                match ctx.toggle_theme() {
                    Ok(theme) => ctx.confirm(&format!("Switched to {} theme", theme)),
                    Err(e) => {
                        log::warn!("Could not save theme: {}", e);
                        ctx.notify("Theme changed for this session only");
                    }
                }
                Ok(())
            }
            Ok(Some(_)) | Ok(None) => break,
            Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(Box::new(e)),
        };

        match outcome {
            Ok(()) => {}
            Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(Box::new(e)),
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}
