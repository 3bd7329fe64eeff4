use colored::Colorize;
use tienda_core::{parse_sizes, primary_color, FilterOptions, Filters, Product};

pub fn print_catalog_header(matching: usize, total: usize) {
    println!(
        "{} {}",
        "Catalog".bold(),
        format!("{}/{}", matching, total).dimmed()
    );
    println!();
}

pub fn print_active_filters(filters: &Filters) {
    let mut parts = Vec::new();

    if !filters.query.trim().is_empty() {
        parts.push(format!("query: {}", filters.query.trim()));
    }
    if !filters.brand.is_empty() {
        parts.push(format!("brand: {}", filters.brand));
    }
    if !filters.segment.is_empty() {
        parts.push(format!("segment: {}", filters.segment));
    }
    if !filters.color.is_empty() {
        parts.push(format!("color: {}", filters.color));
    }
    if !filters.size.is_empty() {
        parts.push(format!("size: {}", filters.size));
    }

    println!("{} {}", "Filters:".bold(), parts.join(" · "));
    println!();
}

pub fn print_product_card(product: &Product) {
    println!("{}  {}", product.model.bold(), product.brand.dimmed());

    let segment = product.segment.as_deref().unwrap_or("—");
    let color = display_or_dash(&primary_color(product.color.as_deref()));
    println!("  {} · {}", segment, color);

    if let Some(cover) = product.images.first() {
        println!("  {}", cover.dimmed());
    }
    println!();
}

pub fn print_product_detail(product: &Product) {
    println!("{}", product.model.bold());
    println!("{}", product.brand);

    if let Some(segment) = product.segment.as_deref().filter(|s| !s.is_empty()) {
        println!("{}", format!("[{}]", segment).cyan());
    }

    if !product.active {
        println!("{}", "inactive — hidden from the public catalog".yellow());
    }

    println!();

    let sizes = parse_sizes(product.sizes.as_deref());
    if sizes.is_empty() {
        println!("{}", "No sizes listed".dimmed());
    } else {
        println!("{} {}", "Sizes:".bold(), sizes.join(", "));
    }

    if !product.images.is_empty() {
        println!();
        for (idx, url) in product.images.iter().enumerate() {
            if idx == 0 {
                println!("  {} {}", "cover".green(), url);
            } else {
                println!("        {}", url);
            }
        }
    }
}

pub fn print_admin_row(product: &Product) {
    println!("{} — {}", product.model.bold(), product.brand);

    let segment = product.segment.as_deref().unwrap_or("—");
    let color = display_or_dash(&primary_color(product.color.as_deref()));
    let state = if product.active {
        "active".green()
    } else {
        "inactive".yellow()
    };
    println!("  {} · {} · {}", segment, color, state);

    println!(
        "  {} {}",
        "Sizes:".dimmed(),
        product.sizes.as_deref().unwrap_or("—")
    );
    println!("  {} {}", "Id:".dimmed(), product.id);
    println!();
}

pub fn print_options(options: &FilterOptions) {
    print_option_list("Brands", &options.brands);
    print_option_list("Segments", &options.segments);
    print_option_list("Colors", &options.colors);
    print_option_list("Sizes", &options.sizes);
}

pub fn print_no_results() {
    println!("{}", "No products match the active filters.".dimmed());
}

fn print_option_list(label: &str, values: &[String]) {
    println!("{}", label.bold());
    if values.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for value in values {
        println!("  - {}", value);
    }
    println!();
}

fn display_or_dash(value: &str) -> String {
    if value.is_empty() {
        "—".to_string()
    } else {
        value.to_string()
    }
}
