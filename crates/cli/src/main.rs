//! `stockplan`: command-line front end for the planning formulas.

mod cli;
mod commands;

use clap::Parser;

use crate::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    stockplan_observability::init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, json = cli.json, "parsed command line");

    match &cli.command {
        Commands::Eoq(args) => commands::eoq(args, cli.json),
        Commands::TotalCost { eoq, quantity } => commands::total_cost(eoq, *quantity, cli.json),
        Commands::ReorderPoint(args) => commands::reorder_point(args, cli.json),
        Commands::SafetyStock(args) => commands::safety_stock(args, cli.json),
        Commands::ZScore { service_level } => commands::z_score(*service_level, cli.json),
        Commands::Abc(args) => commands::abc(args, cli.json),
        Commands::Demo => commands::demo(cli.json),
    }
}
