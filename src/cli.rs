use clap::Parser;

/// CLI arguments for the invasion simulator
#[derive(Parser, Debug)]
#[command(name = "alien_invasion", about = "👽 Alien invasion simulator over a city graph")]
pub struct Args {
    /// Number of aliens to unleash on the map
    #[arg(value_name = "ALIENS")]
    pub aliens: usize,

    /// Path to the map file
    #[arg(short = 'm', long = "map")]
    pub map: String,

    /// Maximum number of wander steps
    #[arg(long, default_value_t = 10_000)]
    pub max_moves: u32,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress destruction logs (for benchmarks)
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,
}
