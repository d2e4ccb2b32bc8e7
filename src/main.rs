//! # sitewhere-magento
//!
//! Command line front end for the Magento asset module.
//!
//! - `sitewhere-magento refresh` - Load the catalog and print the summary
//! - `sitewhere-magento search <criteria>` - Search cached assets
//! - `sitewhere-magento get <id>` - Show one asset
//!
//! Settings come from `--config <file>`, then `MAGENTO_*` variables, then flags.
//! `--demo` swaps Magento for a small in-memory catalog.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Instrument};

use sitewhere_magento::asset::{AssetModule, HardwareAsset};
use sitewhere_magento::lifecycle::{setup_tracing, LifecycleComponent};
use sitewhere_magento::magento::{MagentoAssetModule, MagentoConfig};
use sitewhere_magento::soap::{MagentoPort, MockMagentoPort};

/// Magento product catalog as SiteWhere hardware assets
#[derive(Parser)]
#[command(name = "sitewhere-magento")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Magento SOAP v2 endpoint
    #[arg(long, global = true)]
    url: Option<String>,

    /// Magento API user
    #[arg(long, global = true)]
    username: Option<String>,

    /// Magento API key
    #[arg(long, global = true)]
    password: Option<String>,

    /// Log SOAP envelopes at debug level
    #[arg(long, global = true)]
    debug_soap: bool,

    /// Concurrent Magento calls while caching
    #[arg(long, global = true)]
    workers: Option<usize>,

    /// Use a built-in demo catalog instead of a Magento server
    #[arg(long, global = true)]
    demo: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load every product and print the summary
    Refresh,

    /// Search assets by id, name, description or sku
    Search {
        /// Text to look for; empty lists everything
        #[arg(default_value = "")]
        criteria: String,
    },

    /// Show a single asset
    Get {
        id: String,
    },
}

impl Cli {
    fn config(&self) -> Result<MagentoConfig> {
        let config = match &self.config {
            Some(path) => MagentoConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => MagentoConfig::default(),
        };
        let mut config = config.with_env().context("Invalid MAGENTO_* environment")?;

        if let Some(url) = &self.url {
            config.url = url.clone();
        }
        if let Some(username) = &self.username {
            config.username = username.clone();
        }
        if let Some(password) = &self.password {
            config.password = password.clone();
        }
        if self.debug_soap {
            config.debug_soap = true;
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        config.validate()?;
        Ok(config)
    }
}

fn demo_port(config: &MagentoConfig) -> MockMagentoPort {
    let port = MockMagentoPort::new(config.username.as_str(), config.password.as_str());
    port.add_attribute_set(4, "Default", &["name", "description", "manufacturer"]);
    port.add_attribute_set(9, "Sensors", &["name", "description", "range"]);
    port.add_product(
        "1",
        "GW-100",
        "4",
        &[("name", "Field Gateway"), ("description", "LTE gateway for remote sites"), ("manufacturer", "Acme")],
        &["http://demo/media/gw-100.png"],
    );
    port.add_product(
        "2",
        "TS-20",
        "9",
        &[("name", "Temperature Sensor"), ("description", "Outdoor probe"), ("range", "-40..125")],
        &[],
    );
    port.add_product(
        "3",
        "HS-5",
        "9",
        &[("name", "Humidity Sensor"), ("description", "Indoor probe"), ("range", "0..100")],
        &["http://demo/media/hs-5.png"],
    );
    port
}

fn print_asset(asset: &HardwareAsset) {
    println!(
        "{:<8} {:<12} {}",
        asset.id,
        asset.sku.as_deref().unwrap_or("-"),
        asset.name.as_deref().unwrap_or("-")
    );
}

async fn run<P: MagentoPort>(mut module: MagentoAssetModule<P>, command: Commands) -> Result<()> {
    let span = tracing::info_span!("startup");
    module.start().instrument(span).await?;

    match command {
        // Start has just loaded the catalog.
        Commands::Refresh => {
            if let Some(response) = module.initial_load() {
                println!("{:?}: {}", response.result, response.message);
            }
        }
        Commands::Search { criteria } => {
            let mut assets = module.search(&criteria).await?;
            assets.sort_by(|a, b| a.id.cmp(&b.id));
            for asset in &assets {
                print_asset(asset);
            }
            info!(count = assets.len(), "Search complete");
        }
        Commands::Get { id } => match module.asset_by_id(&id).await? {
            Some(asset) => {
                print_asset(&asset);
                if let Some(description) = &asset.description {
                    println!("  {}", description);
                }
                if let Some(url) = &asset.image_url {
                    println!("  image: {}", url);
                }
                for (key, value) in &asset.properties {
                    println!("  {} = {}", key, value);
                }
            }
            None => println!("No asset with id {}", id),
        },
    }

    module.stop().await?;
    module.shutdown().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();

    let cli = Cli::parse();
    let config = cli.config()?;

    if cli.demo {
        let port = demo_port(&config);
        run(MagentoAssetModule::with_port(config, port), cli.command).await
    } else {
        run(MagentoAssetModule::new(config), cli.command).await
    }
}
