use serde::Serialize;
use std::io;

use crate::cli::args::{Cli, Commands};
use crate::cli::interactive::run_interactive;
use crate::cli::session::Session;
use crate::config::AppConfig;
use crate::error::Result;
use crate::models::ContainerSize;
use crate::processors::QuoteRequest;
use crate::utils::init_logging;

#[derive(Serialize)]
struct RateListing<'a> {
    port: &'a str,
    container_size: ContainerSize,
    volume_m3: f64,
    price: f64,
    price_per_m3: f64,
}

#[derive(Serialize)]
struct ProductListing<'a> {
    product_type: &'a str,
    unit_volume_m3: f64,
}

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let config = AppConfig::load(cli.config.as_deref(), &cli.overrides())?;
    let mut session = Session::start(config)?;

    match cli.command {
        Commands::Quote {
            port,
            container_size,
            product_type,
            price,
            detailed,
            json,
        } => {
            let request = QuoteRequest::new(&port, &container_size, &product_type, &price);
            let estimate = session.quote(&request)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            } else if detailed {
                println!("{}", estimate.detailed_summary());
            } else {
                println!("{}", estimate.summary());
            }
        }

        Commands::Ports { json } => {
            let table = session.table()?;
            let ports = table.ports();
            if json {
                println!("{}", serde_json::to_string_pretty(&ports)?);
            } else {
                for port in ports {
                    println!("{}", port);
                }
            }
        }

        Commands::Sizes { port, json } => {
            let table = session.table()?;
            let sizes = match &port {
                Some(port) => table.container_sizes_for(port.trim()),
                None => table.container_sizes(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&sizes)?);
            } else {
                if sizes.is_empty() {
                    if let Some(port) = &port {
                        println!("No container rates for {}", port);
                    }
                }
                for size in sizes {
                    println!("{}", size);
                }
            }
        }

        Commands::Products { json } => {
            let table = session.table()?;
            let products: Vec<ProductListing> = table
                .products()
                .iter()
                .map(|p| ProductListing {
                    product_type: &p.product_type,
                    unit_volume_m3: p.unit_volume_m3,
                })
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&products)?);
            } else {
                for product in products {
                    println!(
                        "{:<20} {:>12} m3",
                        product.product_type, product.unit_volume_m3
                    );
                }
            }
        }

        Commands::Rates { json } => {
            let table = session.table()?;
            let rates: Vec<RateListing> = table
                .rates()
                .iter()
                .map(|r| RateListing {
                    port: &r.port,
                    container_size: r.container_size,
                    volume_m3: r.volume_m3,
                    price: r.price,
                    price_per_m3: r.price_per_m3(),
                })
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&rates)?);
            } else {
                let currency = &session.config().target_currency;
                println!(
                    "Rates from {} (loaded {})",
                    table.source(),
                    table.loaded_at().format("%Y-%m-%d %H:%M:%S UTC")
                );
                println!(
                    "{:<24} {:<5} {:>8} {:>12} {:>12}",
                    "Port",
                    "Size",
                    "m3",
                    currency,
                    format!("{}/m3", currency)
                );
                for rate in rates {
                    println!(
                        "{:<24} {:<5} {:>8.1} {:>12.2} {:>12.2}",
                        rate.port,
                        rate.container_size.to_string(),
                        rate.volume_m3,
                        rate.price,
                        rate.price_per_m3
                    );
                }
            }
        }

        Commands::Interactive => {
            let stdin = io::stdin();
            run_interactive(&mut session, stdin.lock(), io::stdout())?;
        }
    }

    Ok(())
}
