use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use fortuna_core::WheelLayout;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct DrawArgs {
    /// Number of independent draws
    #[arg(long, default_value_t = 1)]
    pub count: usize,
    /// Seed the generator for a reproducible sequence
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
struct DrawDto {
    sectors: Vec<usize>,
}

pub fn draw(ctx: &Context<'_>, args: DrawArgs) -> Result<()> {
    let sectors = match args.seed {
        Some(seed) => draw_all(&ctx.config.wheel, &mut StdRng::seed_from_u64(seed), args.count),
        None => draw_all(&ctx.config.wheel, &mut rand::rng(), args.count),
    };

    if ctx.json {
        print_json(&DrawDto { sectors })?;
    } else {
        for sector in sectors {
            println!("{sector}");
        }
    }
    Ok(())
}

fn draw_all<R: Rng>(layout: &WheelLayout, rng: &mut R, count: usize) -> Vec<usize> {
    (0..count).map(|_| layout.draw(rng)).collect()
}
