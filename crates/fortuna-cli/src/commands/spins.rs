use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use anyhow::Result;
use clap::{Args, Subcommand};
use fortuna_bridge::api::{DataApiClient, SpinRecord};
use fortuna_config::API_TOKEN_ENV;
use serde::Serialize;
use std::env;

#[derive(Debug, Subcommand)]
pub enum SpinsCommand {
    /// Seed spin inventory for a prize and reconcile its amount
    Seed(SeedArgs),
}

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[arg(long)]
    pub prize_id: String,
    #[arg(long)]
    pub sector: usize,
    #[arg(long)]
    pub amount: usize,
    #[arg(long)]
    pub prize_type: String,
    #[arg(long)]
    pub prize_name: Option<String>,
    #[arg(long)]
    pub photo_url: Option<String>,
    #[arg(long, default_value = "yes")]
    pub participate: String,
    /// Skip patching the prize with the created amount
    #[arg(long)]
    pub no_reconcile: bool,
}

#[derive(Debug, Serialize)]
struct SeedOutcomeDto {
    prize_id: String,
    created: usize,
    reconciled: bool,
}

pub fn seed(ctx: &Context<'_>, args: SeedArgs) -> Result<()> {
    let api = ctx
        .config
        .api
        .as_ref()
        .ok_or_else(|| not_found("no [api] section in config"))?;
    let token =
        env::var(API_TOKEN_ENV).map_err(|_| invalid_input(format!("{API_TOKEN_ENV} is not set")))?;
    if args.sector >= ctx.config.wheel.sector_count() {
        return Err(invalid_input(format!(
            "sector {} is outside a wheel of {} sectors",
            args.sector,
            ctx.config.wheel.sector_count()
        )));
    }

    let client = DataApiClient::new(&api.base_url, token)?;

    let mut record = SpinRecord::unused(
        args.prize_id.clone(),
        args.participate.clone(),
        args.sector,
        args.prize_type.clone(),
    );
    record.prize_name = args.prize_name.clone();
    record.photo = args.photo_url.clone();

    let created = client.create_spins(&vec![record; args.amount])?;
    let reconciled = if args.no_reconcile {
        false
    } else {
        client.set_prize_amount(&args.prize_id, created)?;
        true
    };

    if ctx.json {
        print_json(&SeedOutcomeDto {
            prize_id: args.prize_id,
            created,
            reconciled,
        })?;
    } else {
        println!("created {created} spins for {}", args.prize_id);
    }
    Ok(())
}
