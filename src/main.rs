use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod errors;
mod output;
mod session;
mod storage;
mod store;

/// Storefront catalog tool - browse the public catalog, inspect a
/// product, and administer the product records behind it.
///
/// Examples:
///   # Browse the active catalog
///   tienda --file catalog.json catalog
///
///   # Filter by primary color and size token
///   tienda catalog --color negro --size 25
///
///   # Show the derived filter options
///   tienda catalog --options
///
///   # Product detail by slug or id
///   tienda show air-max-90
///
///   # Admin operations (gated on the admin_users list)
///   tienda admin --session admin-1 add --brand Nike --model "Air Max 90" --sizes "12-22, 24, 26.5"
#[derive(Parser, Debug)]
#[command(name = "tienda")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - Every given filter must hold (AND across fields)\n  \
    - Brand and segment match exactly, case-sensitive\n  \
    - Color matches the first word of the record's color field only\n  \
    - Size matches any token parsed from the sizes text, ranges expanded\n  \
    - The query is a case-insensitive substring of \"brand model\"")]
struct Cli {
    /// Path to the catalog JSON file
    #[arg(short, long, value_name = "FILE", default_value = "catalog.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse the public catalog (active products only)
    Catalog(commands::catalog::CatalogArgs),
    /// Show a single product by slug or id
    Show(commands::product::ShowArgs),
    /// Manage product records (requires an admin session)
    Admin(commands::admin::AdminArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Catalog(args) => commands::catalog::run(&cli.file, &args),
        Command::Show(args) => commands::product::run(&cli.file, &args),
        Command::Admin(args) => commands::admin::run(&cli.file, args),
    }
}
