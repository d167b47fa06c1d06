use std::{sync::Arc, time::Duration};

use anyhow::{Result, ensure};
use barbershop::{Shop, ShopConfig, TracingObserver, config, spawn_barber, spawn_customer};
use clap::Parser;
use rand::Rng;
use tracing::info;

/// Sleeping-barber simulation: one barber, a bounded waiting room, and a
/// stream of customers arriving at random intervals.
#[derive(Parser)]
struct Opts {
    /// number of customers to simulate
    #[arg(long, default_value_t = config::DEFAULT_CUSTOMERS)]
    customers: u32,

    /// waiting-room chairs
    #[arg(long, default_value_t = config::DEFAULT_CHAIRS)]
    chairs: usize,

    /// haircut duration in milliseconds
    #[arg(long, default_value_t = config::DEFAULT_SERVICE_MS)]
    service_ms: u64,

    /// minimum inter-arrival delay in milliseconds
    #[arg(long, default_value_t = config::DEFAULT_MIN_INTERVAL_MS)]
    min_interval_ms: u64,

    /// maximum inter-arrival delay in milliseconds
    #[arg(long, default_value_t = config::DEFAULT_MAX_INTERVAL_MS)]
    max_interval_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let opts = Opts::parse();
    ensure!(
        opts.min_interval_ms <= opts.max_interval_ms,
        "--min-interval-ms must not exceed --max-interval-ms"
    );

    let shop = Shop::new(
        ShopConfig {
            chairs: opts.chairs,
            service_duration: Duration::from_millis(opts.service_ms),
        },
        Arc::new(TracingObserver),
    );

    info!("opening the shop: {} chairs", opts.chairs);
    let barber = spawn_barber(shop.clone());

    let mut customers = Vec::with_capacity(opts.customers as usize);
    for id in 0..opts.customers {
        customers.push(spawn_customer(shop.clone(), id));
        let interval = rand::rng().random_range(opts.min_interval_ms..=opts.max_interval_ms);
        tokio::time::sleep(Duration::from_millis(interval)).await;
    }

    for customer in customers {
        customer.await??;
    }

    // every customer has a terminal outcome now, so the barber is idle and
    // the shutdown cannot interrupt a service
    barber.shutdown().await?;

    println!("----------------------");
    println!("Customers served: {}", shop.served());
    println!("Customers declined: {}", shop.rejected());

    Ok(())
}
