use tienda_core::{Catalog, Product};

/// Result cap applied by the record store on every listing query.
pub const CATALOG_LIMIT: usize = 3000;

/// The public catalog query: active records only, newest first,
/// capped at the store limit.
pub fn fetch_active_products(catalog: &Catalog) -> Vec<Product> {
    let mut products: Vec<Product> = catalog
        .products
        .iter()
        .filter(|p| p.active)
        .cloned()
        .collect();

    sort_newest_first(&mut products);
    products.truncate(CATALOG_LIMIT);
    products
}

/// The admin listing query: every record, newest first, capped.
pub fn fetch_all_products(catalog: &Catalog) -> Vec<Product> {
    let mut products = catalog.products.clone();
    sort_newest_first(&mut products);
    products.truncate(CATALOG_LIMIT);
    products
}

/// Resolve a product by slug first, then by id, as the detail view
/// does. Inactive records resolve too.
pub fn find_product<'a>(catalog: &'a Catalog, key: &str) -> Option<&'a Product> {
    find_product_index(catalog, key).map(|idx| &catalog.products[idx])
}

pub fn find_product_index(catalog: &Catalog, key: &str) -> Option<usize> {
    catalog
        .products
        .iter()
        .position(|p| p.slug.as_deref() == Some(key))
        .or_else(|| catalog.products.iter().position(|p| p.id == key))
}

fn sort_newest_first(products: &mut [Product]) {
    // RFC 3339 stamps order lexicographically; unstamped records sink
    // to the end.
    products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
