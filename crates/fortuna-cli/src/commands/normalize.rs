use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use fortuna_bridge::phone::PHONE_ERROR;
use fortuna_core::normalize_phone;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Phone input as typed, one argument per number
    #[arg(required = true)]
    pub input: Vec<String>,
}

#[derive(Debug, Serialize)]
struct NormalizeDto<'a> {
    input: &'a str,
    result: String,
}

pub fn normalize(ctx: &Context<'_>, args: NormalizeArgs) -> Result<()> {
    let results: Vec<NormalizeDto<'_>> = args
        .input
        .iter()
        .map(|input| NormalizeDto {
            input,
            result: normalize_phone(input).unwrap_or_else(|| PHONE_ERROR.to_string()),
        })
        .collect();

    if ctx.json {
        print_json(&results)?;
    } else {
        for entry in &results {
            println!("{}", entry.result);
        }
    }
    Ok(())
}
