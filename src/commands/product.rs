use anyhow::{anyhow, bail};
use clap::Args;
use std::path::Path;
use tienda_core::load_catalog;

use crate::errors::map_catalog_load_error;
use crate::output;
use crate::store;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Product slug, falling back to the record id
    #[arg(value_name = "SLUG_OR_ID")]
    slug_or_id: String,
}

pub fn run(file: &Path, args: &ShowArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(file).map_err(|e| {
        let (title, message, details) = map_catalog_load_error(&*e, file);
        anyhow!("{}: {}\n{}", title, message, details)
    })?;

    match store::find_product(&catalog, &args.slug_or_id) {
        Some(product) => {
            output::print_product_detail(product);
            Ok(())
        }
        None => bail!("No product found for '{}'", args.slug_or_id),
    }
}
