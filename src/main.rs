//! Dark Book - demonstration binary
//!
//! Generates a seeded order log, feeds it through a plaintext book and
//! prints the simulated log followed by the final log root.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dark_book::sim::{generate_order_log, simulate, OrderLogConfig};
use dark_book::{EngineConfig, MatchingEngine, Plaintext};

/// Command line configuration
#[derive(Parser, Debug, Clone)]
#[command(name = "dark-book")]
#[command(version)]
#[command(about = "Oblivious order-matching engine demo", long_about = None)]
struct Cli {
    /// Slots per side of the book
    #[arg(short, long, default_value_t = 16)]
    capacity: usize,

    /// Number of orders to generate
    #[arg(short = 'n', long, default_value_t = 20)]
    orders: usize,

    /// RNG seed for the order log
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Lowest generated price
    #[arg(long, default_value_t = 100)]
    min_price: u64,

    /// Highest generated price
    #[arg(long, default_value_t = 1_000)]
    max_price: u64,

    /// Price grid step
    #[arg(long, default_value_t = 100)]
    price_step: u64,

    /// Largest generated quantity
    #[arg(long, default_value_t = 10)]
    max_quantity: u64,

    /// Check the book's sort invariant after every round
    #[arg(long, default_value_t = false)]
    verify: bool,

    /// Log level, overridden by RUST_LOG
    #[arg(short = 'l', long, default_value = "info", value_parser = ["trace", "debug", "info", "warn", "error"])]
    log_level: String,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if cli.capacity == 0 {
        eprintln!("capacity must be at least 1");
        std::process::exit(2);
    }

    let log_config = OrderLogConfig {
        count: cli.orders,
        seed: cli.seed,
        min_price: cli.min_price,
        max_price: cli.max_price,
        price_step: cli.price_step,
        max_quantity: cli.max_quantity,
    };
    let engine_config = EngineConfig::with_capacity(cli.capacity).with_verification(cli.verify);
    tracing::info!(?log_config, ?engine_config, "starting simulation");

    let orders = generate_order_log(&log_config);
    let mut engine = MatchingEngine::new(Plaintext, engine_config);

    let log = match simulate(&mut engine, orders) {
        Ok(log) => log,
        Err(e) => {
            tracing::error!(error = %e, "simulation aborted");
            std::process::exit(1);
        }
    };

    print!("{}", log);
    println!();
    println!("Orders admitted:  {}", engine.submitted());
    println!("Orders rejected:  {}", log.rejected());
    println!("Transactions:     {}", engine.executed());
    println!("Log root:         {}", hex::encode(engine.log_root()));
}
