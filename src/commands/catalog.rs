use anyhow::anyhow;
use clap::Args;
use std::path::Path;
use tienda_core::{apply_filters, derive_options, has_filters, load_catalog};

use crate::errors::map_catalog_load_error;
use crate::output;
use crate::store;

use super::FilterArgs;

#[derive(Args, Debug)]
pub struct CatalogArgs {
    #[command(flatten)]
    filters: FilterArgs,

    /// Print the derived filter option lists instead of products
    #[arg(long)]
    options: bool,
}

pub fn run(file: &Path, args: &CatalogArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(file).map_err(|e| {
        let (title, message, details) = map_catalog_load_error(&*e, file);
        anyhow!("{}: {}\n{}", title, message, details)
    })?;

    let products = store::fetch_active_products(&catalog);
    let options = derive_options(&products);

    if args.options {
        output::print_options(&options);
        return Ok(());
    }

    let filters = args.filters.to_filters();
    let filtered = apply_filters(&products, &filters);

    output::print_catalog_header(filtered.len(), products.len());
    if has_filters(&filters) {
        output::print_active_filters(&filters);
    }

    for product in &filtered {
        output::print_product_card(product);
    }

    if filtered.is_empty() {
        output::print_no_results();
    }

    Ok(())
}
