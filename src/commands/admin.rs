use anyhow::{anyhow, bail};
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};
use tienda_core::{apply_filters, has_filters, load_catalog, save_catalog, Catalog, Product};
use uuid::Uuid;

use crate::errors::{map_catalog_load_error, map_catalog_save_error, map_upload_error};
use crate::output;
use crate::session::{self, Session};
use crate::storage;
use crate::store;

use super::FilterArgs;

#[derive(Args, Debug)]
pub struct AdminArgs {
    /// Session user id (defaults to the TIENDA_SESSION environment variable)
    #[arg(long, value_name = "USER_ID")]
    session: Option<String>,

    /// Directory backing the image bucket
    #[arg(long, value_name = "DIR", default_value = "bucket")]
    bucket: PathBuf,

    #[command(subcommand)]
    action: AdminAction,
}

#[derive(Subcommand, Debug)]
enum AdminAction {
    /// List every record, inactive included
    List(ListArgs),
    /// Create a product record
    Add(AddArgs),
    /// Update fields on an existing record
    Edit(EditArgs),
    /// Delete a record
    Remove(RemoveArgs),
}

#[derive(Args, Debug)]
struct ListArgs {
    #[command(flatten)]
    filters: FilterArgs,
}

#[derive(Args, Debug)]
struct AddArgs {
    #[arg(long, value_name = "BRAND")]
    brand: String,

    #[arg(long, value_name = "MODEL")]
    model: String,

    /// Catalog segment (e.g. "dama", "caballero", "niño", "niña")
    #[arg(long, value_name = "SEGMENT", default_value = "dama")]
    segment: String,

    /// Free-text color field; filters only ever use its first word
    #[arg(long, value_name = "COLOR", default_value = "")]
    color: String,

    /// Size specification, e.g. "12-22, 24, 26.5, 28-30"
    #[arg(long, value_name = "SIZES", default_value = "")]
    sizes: String,

    /// Image URL to attach (repeatable, first is the cover)
    #[arg(long = "image", value_name = "URL")]
    images: Vec<String>,

    /// Image file to upload into the bucket (repeatable)
    #[arg(long = "upload", value_name = "PATH")]
    uploads: Vec<PathBuf>,

    /// Create the record hidden from the public catalog
    #[arg(long)]
    inactive: bool,
}

#[derive(Args, Debug)]
struct EditArgs {
    #[arg(value_name = "SLUG_OR_ID")]
    slug_or_id: String,

    #[arg(long, value_name = "BRAND")]
    brand: Option<String>,

    #[arg(long, value_name = "MODEL")]
    model: Option<String>,

    #[arg(long, value_name = "SEGMENT")]
    segment: Option<String>,

    #[arg(long, value_name = "COLOR")]
    color: Option<String>,

    #[arg(long, value_name = "SIZES")]
    sizes: Option<String>,

    /// Replace the image list with these URLs (repeatable)
    #[arg(long = "image", value_name = "URL")]
    images: Vec<String>,

    /// Upload files into the bucket and append the resulting URLs
    #[arg(long = "upload", value_name = "PATH")]
    uploads: Vec<PathBuf>,

    /// Toggle public visibility
    #[arg(long, value_name = "BOOL")]
    active: Option<bool>,
}

#[derive(Args, Debug)]
struct RemoveArgs {
    #[arg(value_name = "SLUG_OR_ID")]
    slug_or_id: String,

    /// Skip the confirmation guard
    #[arg(long)]
    yes: bool,
}

pub fn run(file: &Path, args: AdminArgs) -> anyhow::Result<()> {
    let mut catalog = load_catalog(file).map_err(|e| {
        let (title, message, details) = map_catalog_load_error(&*e, file);
        anyhow!("{}: {}\n{}", title, message, details)
    })?;

    let session = session::resolve(args.session.as_deref())
        .ok_or_else(|| anyhow!("No session. Pass --session or set TIENDA_SESSION."))?;

    if !session::is_admin(&catalog, &session) {
        bail!("User '{}' is not an admin.", session.user_id);
    }

    match args.action {
        AdminAction::List(list) => run_list(&catalog, &list),
        AdminAction::Add(add) => run_add(&mut catalog, file, &args.bucket, &session, add),
        AdminAction::Edit(edit) => run_edit(&mut catalog, file, &args.bucket, &session, edit),
        AdminAction::Remove(remove) => run_remove(&mut catalog, file, remove),
    }
}

fn run_list(catalog: &Catalog, args: &ListArgs) -> anyhow::Result<()> {
    let products = store::fetch_all_products(catalog);
    let filters = args.filters.to_filters();
    let filtered = apply_filters(&products, &filters);

    output::print_catalog_header(filtered.len(), products.len());
    if has_filters(&filters) {
        output::print_active_filters(&filters);
    }

    for product in &filtered {
        output::print_admin_row(product);
    }

    if filtered.is_empty() {
        output::print_no_results();
    }

    Ok(())
}

fn run_add(
    catalog: &mut Catalog,
    file: &Path,
    bucket: &Path,
    session: &Session,
    args: AddArgs,
) -> anyhow::Result<()> {
    let mut images = args.images;
    if !args.uploads.is_empty() {
        images.extend(upload(bucket, &args.uploads)?);
    }

    let now = chrono::Utc::now().to_rfc3339();
    let product = Product {
        id: Uuid::new_v4().to_string(),
        // New records carry no slug; lookup falls back to the id.
        slug: None,
        brand: args.brand.trim().to_string(),
        model: args.model.trim().to_string(),
        segment: Some(args.segment),
        color: Some(args.color.trim().to_string()),
        sizes: Some(args.sizes.trim().to_string()),
        images,
        active: !args.inactive,
        created_at: Some(now.clone()),
        updated_at: Some(now),
        created_by: Some(session.user_id.clone()),
        updated_by: Some(session.user_id.clone()),
        extra: Default::default(),
    };

    output::print_admin_row(&product);
    catalog.products.push(product);
    save(catalog, file)
}

fn run_edit(
    catalog: &mut Catalog,
    file: &Path,
    bucket: &Path,
    session: &Session,
    args: EditArgs,
) -> anyhow::Result<()> {
    let idx = store::find_product_index(catalog, &args.slug_or_id)
        .ok_or_else(|| anyhow!("No product found for '{}'", args.slug_or_id))?;

    let uploaded = if args.uploads.is_empty() {
        Vec::new()
    } else {
        upload(bucket, &args.uploads)?
    };

    let product = &mut catalog.products[idx];

    if let Some(brand) = args.brand {
        product.brand = brand.trim().to_string();
    }
    if let Some(model) = args.model {
        product.model = model.trim().to_string();
    }
    if let Some(segment) = args.segment {
        product.segment = Some(segment);
    }
    if let Some(color) = args.color {
        product.color = Some(color.trim().to_string());
    }
    if let Some(sizes) = args.sizes {
        product.sizes = Some(sizes.trim().to_string());
    }
    if !args.images.is_empty() {
        product.images = args.images;
    }
    product.images.extend(uploaded);
    if let Some(active) = args.active {
        product.active = active;
    }

    product.updated_at = Some(chrono::Utc::now().to_rfc3339());
    product.updated_by = Some(session.user_id.clone());

    output::print_admin_row(product);
    save(catalog, file)
}

fn run_remove(catalog: &mut Catalog, file: &Path, args: RemoveArgs) -> anyhow::Result<()> {
    let idx = store::find_product_index(catalog, &args.slug_or_id)
        .ok_or_else(|| anyhow!("No product found for '{}'", args.slug_or_id))?;

    if !args.yes {
        bail!(
            "Refusing to delete '{}'. Re-run with --yes to confirm.",
            catalog.products[idx].model
        );
    }

    let removed = catalog.products.remove(idx);
    println!("Deleted '{}' ({})", removed.model, removed.id);
    save(catalog, file)
}

fn upload(bucket: &Path, files: &[PathBuf]) -> anyhow::Result<Vec<String>> {
    storage::upload_images(bucket, files).map_err(|e| {
        let cause: &(dyn std::error::Error + 'static) = e.as_ref();
        let (title, message, details) = map_upload_error(cause, bucket);
        anyhow!("{}: {}\n{}", title, message, details)
    })
}

fn save(catalog: &Catalog, file: &Path) -> anyhow::Result<()> {
    save_catalog(catalog, file).map_err(|e| {
        let (title, message, details) = map_catalog_save_error(&*e, file);
        anyhow!("{}: {}\n{}", title, message, details)
    })
}
