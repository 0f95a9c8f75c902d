use clap::{ArgGroup, Args, Parser, Subcommand};

use stockplan_planning::{AbcItem, DEFAULT_WORKING_DAYS};

#[derive(Parser, Debug)]
#[command(name = "stockplan")]
#[command(
    about = "Inventory planning calculations: EOQ, reorder point, safety stock, ABC",
    long_about = None
)]
pub struct Cli {
    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Economic order quantity, with its cost breakdown and order frequency
    Eoq(EoqArgs),

    /// Annual ordering + holding cost for a given order quantity
    TotalCost {
        #[command(flatten)]
        eoq: EoqArgs,

        /// Order quantity to evaluate
        #[arg(short, long)]
        quantity: f64,
    },

    /// Stock level at which to reorder
    ReorderPoint(ReorderPointArgs),

    /// Buffer stock for a service level or Z-score
    SafetyStock(SafetyStockArgs),

    /// Look up the Z-score for a service level (percent)
    ZScore {
        #[arg(short, long, value_parser = parse_service_level)]
        service_level: f64,
    },

    /// Classify items into A/B/C tiers by annual value
    Abc(AbcArgs),

    /// Walk through every calculation on a sample product
    Demo,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct EoqArgs {
    /// Units demanded per year
    #[arg(short = 'd', long)]
    pub annual_demand: f64,

    /// Fixed cost per order
    #[arg(short = 's', long)]
    pub ordering_cost: f64,

    /// Holding cost per unit per year
    #[arg(short = 'H', long)]
    pub holding_cost: f64,

    /// Working days per year, used for days between orders
    #[arg(long, env = "STOCKPLAN_WORKING_DAYS", default_value_t = DEFAULT_WORKING_DAYS)]
    pub working_days: u32,
}

#[derive(Args, Debug, Clone, Copy)]
#[command(group(ArgGroup::new("demand").required(true).args(["daily_demand", "annual_demand"])))]
pub struct ReorderPointArgs {
    /// Average daily demand
    #[arg(long)]
    pub daily_demand: Option<f64>,

    /// Annual demand, spread over --working-days
    #[arg(long)]
    pub annual_demand: Option<f64>,

    #[arg(short, long)]
    pub lead_time_days: u32,

    #[arg(long, default_value_t = 0.0)]
    pub safety_stock: f64,

    #[arg(long, env = "STOCKPLAN_WORKING_DAYS", default_value_t = DEFAULT_WORKING_DAYS)]
    pub working_days: u32,
}

#[derive(Args, Debug, Clone, Copy)]
#[command(group(ArgGroup::new("level").required(true).args(["z", "service_level"])))]
pub struct SafetyStockArgs {
    /// Z-score to use directly
    #[arg(short, long)]
    pub z: Option<f64>,

    /// Service level in percent, mapped to a Z-score
    #[arg(long, value_parser = parse_service_level)]
    pub service_level: Option<f64>,

    /// Standard deviation of daily demand
    #[arg(long)]
    pub std_dev: f64,

    #[arg(short, long)]
    pub lead_time_days: u32,
}

#[derive(Args, Debug, Clone)]
pub struct AbcArgs {
    /// Items as ID:UNIT_COST:ANNUAL_DEMAND
    #[arg(required = true, value_parser = parse_abc_item)]
    pub items: Vec<AbcItem>,

    /// Cumulative share (percent) below which items are A
    #[arg(long, env = "STOCKPLAN_ABC_A_CUTOFF", default_value_t = 80.0)]
    pub a_cutoff: f64,

    /// Cumulative share (percent) below which items are B
    #[arg(long, env = "STOCKPLAN_ABC_B_CUTOFF", default_value_t = 95.0)]
    pub b_cutoff: f64,
}

/// Parse a service level in percent. NaN and infinities have no nearest
/// table entry, so they are refused here rather than looked up.
pub fn parse_service_level(raw: &str) -> Result<f64, String> {
    let level = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid service level {raw:?}: {e}"))?;
    if !level.is_finite() {
        return Err(format!("service level must be a finite number, got {raw:?}"));
    }
    Ok(level)
}

/// Parse `ID:UNIT_COST:ANNUAL_DEMAND`. The id may itself contain colons.
pub fn parse_abc_item(raw: &str) -> Result<AbcItem, String> {
    let mut parts = raw.rsplitn(3, ':');
    let demand = parts.next();
    let cost = parts.next();
    let id = parts.next();

    match (id, cost, demand) {
        (Some(id), Some(cost), Some(demand)) if !id.is_empty() => {
            let unit_cost = cost
                .trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid unit cost {cost:?}: {e}"))?;
            let annual_demand = demand
                .trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid annual demand {demand:?}: {e}"))?;
            Ok(AbcItem::new(id, unit_cost, annual_demand))
        }
        _ => Err(format!("expected ID:UNIT_COST:ANNUAL_DEMAND, got {raw:?}")),
    }
}
