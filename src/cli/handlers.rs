// src/cli/handlers.rs
use serde_json::{json, Value};
use std::error::Error;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::time::Instant;

use crate::cli::commands::{CliCommand, ThemeAction};
use crate::core::debounce::HashEvent;
use crate::core::PageContext;
use crate::crypto;
use crate::generators::{snippets, PasswordGenerator};
use crate::models::{CharacterClass, HashVariant, PasswordSpec};
use crate::utils::{self, format_class_list, strength_bar};

/// What a command produced, in both human and JSON form.
#[derive(Debug)]
pub struct CommandOutput {
    pub title: &'static str,
    pub body: String,
    pub payload: Value,
    pub copyable: Option<String>,
}

impl CommandOutput {
    fn new(title: &'static str, body: String, payload: Value) -> Self {
        Self { title, body, payload, copyable: None }
    }

    fn copyable(mut self, text: impl Into<String>) -> Self {
        self.copyable = Some(text.into());
        self
    }
}

pub type HandlerResult = Result<CommandOutput, Box<dyn Error>>;

fn strength_line(password: &str) -> Option<String> {
    crypto::check_password_strength(password)
        .map(|report| format!("{} {}", strength_bar(report.score), report.level))
}

pub fn handle_hash(ctx: &PageContext, password: &str, variant: Option<HashVariant>) -> HandlerResult {
    let variant = variant.unwrap_or(ctx.config.hash_variant);
    let record = crypto::generate_wordpress_hash_with_variant(password, variant)?;
    let strength = crypto::check_password_strength(password);

    let mut body = String::new();
    if let Some(line) = strength_line(password) {
        body.push_str(&format!("Strength: {}\n", line));
    }
    body.push_str(&record.hash_output);

    let hash = record.hash_output.clone();
    Ok(CommandOutput::new(
        "WordPress password hash",
        body,
        json!({ "hash": record.hash_output, "cost": record.cost_factor, "strength": strength }),
    )
    .copyable(hash))
}

pub fn handle_verify(password: &str, hash: &str) -> HandlerResult {
    let matches = crypto::verify_wordpress_hash(password, hash)?;
    let body = if matches { "Password matches hash" } else { "Password does NOT match hash" };
    Ok(CommandOutput::new("Hash verification", body.to_string(), json!({ "matches": matches })))
}

pub fn handle_sql(
    ctx: &PageContext,
    username: &str,
    password: &str,
    prefix: Option<&str>,
    variant: Option<HashVariant>,
) -> HandlerResult {
    let prefix = prefix.unwrap_or(&ctx.config.default_table_prefix);
    let variant = variant.unwrap_or(ctx.config.hash_variant);
    let (record, query) = snippets::generate_sql_query(username, password, prefix, variant)?;

    Ok(CommandOutput::new(
        "SQL query",
        query.clone(),
        json!({ "query": &query, "hash": record.hash_output }),
    )
    .copyable(query))
}

pub fn handle_script(user_id: u64, password: &str) -> HandlerResult {
    let script = snippets::build_reset_script(user_id, password)?;
    let body = format!(
        "{}\n\nUpload as a .php file to the WordPress root, open it once, then delete it.",
        script
    );
    Ok(CommandOutput::new("PHP reset script", body, json!({ "script": script.clone() })).copyable(script))
}

pub fn handle_generate(spec: &PasswordSpec) -> HandlerResult {
    let password = PasswordGenerator::new().generate_password(spec)?;
    let strength = crypto::check_password_strength(&password);

    let mut body = password.clone();
    if let Some(line) = strength_line(&password) {
        body.push_str(&format!("\nStrength: {}", line));
    }
    body.push_str(&format!("\nCharacters: {}", format_class_list(spec)));

    Ok(CommandOutput::new(
        "Generated password",
        body,
        json!({ "password": password.clone(), "length": spec.length, "classes": spec.classes, "strength": strength }),
    )
    .copyable(password))
}

pub fn handle_strength(password: &str) -> HandlerResult {
    let report = crypto::check_password_strength(password);
    let body = strength_line(password).unwrap_or_else(|| "Enter a password to check strength".to_string());
    Ok(CommandOutput::new("Password strength", body, json!({ "strength": report })))
}

pub fn handle_theme(ctx: &mut PageContext, action: Option<ThemeAction>) -> HandlerResult {
    let theme = match action.unwrap_or(ThemeAction::Show) {
        ThemeAction::Show => ctx.theme(),
        ThemeAction::Toggle => ctx.toggle_theme()?,
        ThemeAction::Set { theme } => ctx.set_theme(theme)?,
    };
    Ok(CommandOutput::new("Theme", theme.to_string(), json!({ "theme": theme })))
}

pub fn handle_copy(text: &str) -> HandlerResult {
    utils::copy_to_clipboard(text)?;
    Ok(CommandOutput::new("Clipboard", "Copied to clipboard!".to_string(), json!({ "copied": true })))
}

pub fn spec_from_flags(
    length: usize,
    no_uppercase: bool,
    no_lowercase: bool,
    no_digits: bool,
    no_symbols: bool,
) -> PasswordSpec {
    let excluded = [no_uppercase, no_lowercase, no_digits, no_symbols];
    let classes = CharacterClass::ALL
        .into_iter()
        .zip(excluded)
        .filter(|(_, skip)| !skip)
        .map(|(class, _)| class);
    PasswordSpec::new(length, classes)
}

pub fn print_output(ctx: &PageContext, output: &CommandOutput) {
    let palette = ctx.palette();
    println!("{}", palette.heading.apply_to(output.title));
    println!("{}", palette.output.apply_to(&output.body));
}

/// Print an outcome. Failures become a notification (or a JSON error).
pub fn emit(ctx: &PageContext, json_mode: bool, copy: bool, result: HandlerResult) -> bool {
    match result {
        Ok(output) => {
            if json_mode {
                let mut response = json!({ "success": true });
                if let (Value::Object(target), Value::Object(extra)) = (&mut response, output.payload) {
                    target.extend(extra);
                }
                println!("{}", response);
            } else {
                print_output(ctx, &output);
            }

            if copy {
                if let Some(text) = &output.copyable {
                    match utils::copy_to_clipboard(text) {
                        Ok(()) => {
                            if !json_mode {
                                ctx.confirm("Copied to clipboard!");
                            }
                        }
                        Err(e) => {
                            log::warn!("{}", e);
                            ctx.notify("Failed to copy to clipboard");
                        }
                    }
                }
            }
            true
        }
        Err(e) => {
            log::debug!("Command failed: {}", e);
            if json_mode {
                println!("{}", json!({ "success": false, "error": e.to_string() }));
            } else {
                ctx.notify(&e.to_string());
            }
            false
        }
    }
}

fn secret(value: &str) -> Result<String, Box<dyn Error>> {
    Ok(utils::resolve_secret(value)?)
}

/// Run one subcommand and report whether it succeeded.
pub async fn run_command(
    ctx: &mut PageContext,
    command: CliCommand,
    json_mode: bool,
    copy: bool,
) -> Result<bool, Box<dyn Error>> {
    let result = match command {
        CliCommand::Hash { password, variant } => {
            let password = secret(&password)?;
            handle_hash(ctx, &password, variant)
        }
        CliCommand::Verify { password, hash } => {
            let password = secret(&password)?;
            handle_verify(&password, &hash)
        }
        CliCommand::Sql { username, password, prefix, variant } => {
            let password = secret(&password)?;
            handle_sql(ctx, &username, &password, prefix.as_deref(), variant)
        }
        CliCommand::Script { user_id, password } => {
            let password = secret(&password)?;
            handle_script(user_id, &password)
        }
        CliCommand::Generate { length, no_uppercase, no_lowercase, no_digits, no_symbols } => {
            let length = length.map(usize::from).unwrap_or(ctx.config.default_password_length);
            let spec = spec_from_flags(length, no_uppercase, no_lowercase, no_digits, no_symbols);
            handle_generate(&spec)
        }
        CliCommand::Strength { password } => {
            let password = secret(&password)?;
            handle_strength(&password)
        }
        CliCommand::Theme { action } => handle_theme(ctx, action),
        CliCommand::Copy { text } => {
            let text = secret(&text)?;
            handle_copy(&text)
        }
        CliCommand::Live => return run_live(ctx, json_mode).await.map(|_| true),
    };

    Ok(emit(ctx, json_mode, copy, result))
}

fn print_event(ctx: &PageContext, json_mode: bool, event: &HashEvent) {
    match (event, json_mode) {
        (HashEvent::Computed(record), _) => {
            log::debug!(
                "Live hash ready for {}-character input",
                record.plaintext_input.chars().count()
            );
            if json_mode {
                println!("{}", json!({ "success": true, "hash": record.hash_output }))
            } else {
                println!("{}", ctx.palette().output.apply_to(&record.hash_output))
            }
        }
        (HashEvent::Cleared, true) => println!("{}", json!({ "success": true, "hash": null })),
        (HashEvent::Cleared, false) => println!("{}", ctx.palette().muted.apply_to("(cleared)")),
        (HashEvent::Failed(e), true) => println!("{}", json!({ "success": false, "error": e })),
        (HashEvent::Failed(e), false) => ctx.notify(e),
    }
}

/// Treat every stdin line as the new content of the password field.
pub async fn run_live(ctx: &mut PageContext, json_mode: bool) -> Result<(), Box<dyn Error>> {
    if !json_mode {
        eprintln!(
            "{}",
            ctx.palette().muted.apply_to(format!(
                "Type a password and press Enter; hashes appear after {} ms without input. Ctrl+D to stop.",
                ctx.config.hash_debounce.as_millis()
            ))
        );
    }

    run_live_with(ctx, json_mode, BufReader::new(tokio::io::stdin())).await?;
    Ok(())
}

/// Live hashing over any line source. Returns every event that was printed.
pub async fn run_live_with<R>(
    ctx: &mut PageContext,
    json_mode: bool,
    reader: R,
) -> Result<Vec<HashEvent>, Box<dyn Error>>
where
    R: AsyncBufRead + Unpin,
{
    let mut printed = Vec::new();
    let mut events = ctx.start_live_hashing();
    let mut lines = reader.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => ctx.live_input(line.trim_end_matches('\r')),
                None => break,
            },
            Some(event) = events.recv() => {
                print_event(ctx, json_mode, &event);
                printed.push(event);
            }
        }
    }

    // Earlier events may still be queued ahead of the last scheduled hash
    let deadline = Instant::now() + ctx.config.hash_debounce * 2 + Duration::from_secs(30);
    while ctx.live_pending() {
        match tokio::time::timeout_at(deadline, events.recv()).await {
            Ok(Some(event)) => {
                let done = !matches!(event, HashEvent::Cleared);
                print_event(ctx, json_mode, &event);
                printed.push(event);
                if done {
                    break;
                }
            }
            Ok(None) => break,
            Err(_) => {
                log::warn!("Gave up waiting for the last live hash");
                break;
            }
        }
    }
    ctx.stop_live_hashing();
    while let Ok(event) = events.try_recv() {
        print_event(ctx, json_mode, &event);
        printed.push(event);
    }

    Ok(printed)
}
