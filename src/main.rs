//! Kingdom Populace - demo driver
//!
//! Populates a few kingdoms, posts a contract in each, then runs rounds of
//! contract allocation and tax collection the way the host game would on
//! check-in. Prints the resulting activity feed.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use kingdom_populace::core::error::Result;
use kingdom_populace::kingdom::{BuildingType, Contract, Kingdom, MiningRates, TaxPolicy};
use kingdom_populace::simulation::AmbientPresence;
use kingdom_populace::{KingdomId, PopulaceConfig, Simulator};
use serde::Serialize;

/// Run the citizen simulation against demo kingdoms
#[derive(Parser, Debug)]
#[command(name = "kingdom-populace")]
#[command(about = "Simulate background citizens working contracts and paying taxes")]
struct Args {
    /// TOML config file (defaults are used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Kingdoms to simulate
    #[arg(long, value_delimiter = ',', default_value = "ironhold,stormwatch,ashfall")]
    kingdoms: Vec<String>,

    /// Allocation and tax rounds to run
    #[arg(long, default_value_t = 3)]
    rounds: u32,

    /// Seconds to wait between rounds
    #[arg(long, default_value_t = 0)]
    pause_secs: u64,

    /// Random seed for deterministic runs (overrides the config)
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct KingdomReport {
    id: KingdomId,
    citizens: usize,
    online: usize,
    treasury: u64,
    workers: usize,
}

#[derive(Serialize)]
struct Report {
    ticks: u64,
    kingdoms: Vec<KingdomReport>,
    feed: Vec<kingdom_populace::ActivityEntry>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kingdom_populace=info".into()),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PopulaceConfig::load(path)?,
        None => PopulaceConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let ids: Vec<KingdomId> = args.kingdoms.iter().map(|k| KingdomId::from(k.trim())).collect();
    let sim = Simulator::new(config, tokio::runtime::Handle::current())?
        .with_tick_hook(AmbientPresence::default());

    let created = sim.populate(&ids);
    tracing::info!("Created {} citizens across {} kingdoms", created, ids.len());

    let buildings = [BuildingType::Walls, BuildingType::Mine, BuildingType::Market];
    let mut kingdoms: Vec<Kingdom> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            Kingdom::new(id.clone(), id.as_str())
                .with_treasury(500)
                .with_mining(MiningRates::for_mine_level(i as u32 + 1))
                .with_tax_policy(TaxPolicy::new(10))
                .with_contract(Contract::new(buildings[i % buildings.len()]))
        })
        .collect();

    for round in 1..=args.rounds {
        for kingdom in kingdoms.iter_mut() {
            let joined = sim.allocate_workers(kingdom);
            let tax = sim.accrue_tax(kingdom);
            tracing::info!(
                "Round {}: {} gained {} workers and {}g in taxes",
                round,
                kingdom.id,
                joined,
                tax
            );
        }
        if args.pause_secs > 0 {
            tokio::time::sleep(Duration::from_secs(args.pause_secs)).await;
        }
    }

    let reports: Vec<KingdomReport> = kingdoms
        .iter()
        .map(|k| KingdomReport {
            id: k.id.clone(),
            citizens: sim.citizen_count(&k.id),
            online: sim.online_citizens_of(&k.id).len(),
            treasury: k.treasury,
            workers: k.active_contract.as_ref().map_or(0, |c| c.worker_count()),
        })
        .collect();

    if args.json {
        let report = Report {
            ticks: sim.ticks_elapsed(),
            kingdoms: reports,
            feed: sim.feed(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\n=== KINGDOMS ===");
        for r in &reports {
            println!(
                "{:<12} citizens {:>2} ({:>2} online)  treasury {:>5}g  contract crew {}",
                r.id, r.citizens, r.online, r.treasury, r.workers
            );
            for citizen in sim.citizens_of(&r.id) {
                println!("    {:<24} {}", citizen.name, citizen.activity.label());
            }
        }

        println!("\n=== ACTIVITY ===");
        for entry in sim.feed() {
            println!(
                "{} [{}] {} ({})",
                entry.icon.glyph(),
                entry.kingdom,
                entry.message,
                sim.time_ago(&entry)
            );
        }
    }

    sim.stop();
    Ok(())
}
