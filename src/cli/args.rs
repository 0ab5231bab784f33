use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ConfigOverrides;

#[derive(Parser)]
#[command(name = "landed-cost")]
#[command(about = "Estimate landed cost from container freight rates and product prices")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        help = "Configuration file [default: landed-cost.toml if present]"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Container rates CSV file")]
    pub rates_file: Option<PathBuf>,

    #[arg(long, global = true, help = "Product volumes CSV file")]
    pub products_file: Option<PathBuf>,

    #[arg(long, global = true, help = "Source-to-target currency exchange rate")]
    pub exchange_rate: Option<f64>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            exchange_rate: self.exchange_rate,
            rates_file: self.rates_file.clone(),
            products_file: self.products_file.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate the landed cost of one product unit
    Quote {
        #[arg(short, long, help = "Port of loading, e.g. 'Fuzhou FZG'")]
        port: String,

        #[arg(
            short = 's',
            long,
            help = "Container size, one of 20GP, 40GP, 40HC, 45HC"
        )]
        container_size: String,

        #[arg(short = 't', long, help = "Product type, e.g. 'Dawn Sofa'")]
        product_type: String,

        #[arg(long, allow_hyphen_values = true, help = "Product price in the source currency")]
        price: String,

        #[arg(long, help = "Print the full cost breakdown")]
        detailed: bool,

        #[arg(long, help = "Print the estimate as JSON")]
        json: bool,
    },

    /// List ports with container rates
    Ports {
        #[arg(long)]
        json: bool,
    },

    /// List container sizes, optionally restricted to one port
    Sizes {
        #[arg(short, long)]
        port: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// List product types and their unit volumes
    Products {
        #[arg(long)]
        json: bool,
    },

    /// List container rates with derived price per m3
    Rates {
        #[arg(long)]
        json: bool,
    },

    /// Prompt for selections on stdin and quote each one
    Interactive,
}
