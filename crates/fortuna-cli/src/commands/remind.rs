use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use anyhow::{Context as _, Result};
use clap::Args;
use fortuna_bridge::broadcast::BotApiClient;
use fortuna_config::BOT_TOKEN_ENV;
use serde::Serialize;
use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Args)]
pub struct RemindArgs {
    /// Semicolon-delimited export with a header row
    #[arg(long)]
    pub csv: PathBuf,
    /// Header column holding chat ids
    #[arg(long, default_value = "user_id")]
    pub column: String,
    /// Link the reminder button opens
    #[arg(long)]
    pub game_url: String,
    /// Reminder text sent to every user
    #[arg(long)]
    pub message: String,
    #[arg(long, default_value = "Open the game")]
    pub button_text: String,
}

#[derive(Debug, Serialize)]
struct RemindOutcomeDto {
    total: usize,
    sent: usize,
    failed: usize,
}

pub fn remind(ctx: &Context<'_>, args: RemindArgs) -> Result<()> {
    if !args.csv.exists() {
        return Err(not_found(format!("csv file {}", args.csv.display())));
    }
    let token = env::var(BOT_TOKEN_ENV)
        .map_err(|_| invalid_input(format!("{BOT_TOKEN_ENV} is not set")))?;

    let contents = fs::read_to_string(&args.csv)
        .with_context(|| format!("read {}", args.csv.display()))?;
    let chat_ids = parse_chat_ids(&contents, &args.column)?;

    let client = BotApiClient::new(&token)?;
    let mut sent = 0;
    let mut failed = 0;
    for chat_id in chat_ids.iter().copied() {
        match client.send_game_reminder(chat_id, &args.message, &args.button_text, &args.game_url)
        {
            Ok(()) => sent += 1,
            Err(err) => {
                warn!(chat_id, error = %err, "reminder not delivered");
                failed += 1;
            }
        }
    }

    if ctx.json {
        print_json(&RemindOutcomeDto {
            total: chat_ids.len(),
            sent,
            failed,
        })?;
    } else {
        println!("sent {sent} of {} reminders", chat_ids.len());
    }
    Ok(())
}

fn parse_chat_ids(contents: &str, column: &str) -> Result<BTreeSet<i64>> {
    let mut lines = contents.lines();
    let header = lines.next().ok_or_else(|| invalid_input("csv is empty"))?;
    let index = header
        .split(';')
        .position(|name| name.trim() == column)
        .ok_or_else(|| invalid_input(format!("csv has no {column:?} column")))?;

    let mut ids = BTreeSet::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let Some(field) = line.split(';').nth(index) else {
            continue;
        };
        let field = field.trim();
        if field.is_empty() {
            continue;
        }
        let id: i64 = field
            .parse()
            .map_err(|_| invalid_input(format!("invalid chat id {field:?}")))?;
        ids.insert(id);
    }
    Ok(ids)
}
