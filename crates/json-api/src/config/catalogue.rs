//! Catalogue Config

use clap::{ArgAction, Args};

/// Product catalogue settings.
#[derive(Debug, Args)]
pub struct CatalogueConfig {
    /// Start with the house coffees (Latte, Espresso) in the catalogue
    #[arg(
        long,
        env = "SEED_PRODUCTS",
        action = ArgAction::Set,
        default_value_t = true
    )]
    pub seed: bool,
}
