use crate::colors::primary_color;
use crate::models::{FilterOptions, Product};
use crate::sizes::parse_sizes;
use crate::sorting::{compare_alpha, compare_numeric};
use std::collections::HashSet;

/// Derive the filter option sets from the current record list.
///
/// Brands and segments are taken verbatim when non-empty, colors as
/// primary-color tokens, sizes as the union of parsed size tokens.
/// Text options sort locale-insensitively; the size list sorts purely
/// numerically, with non-numeric labels after every number in their
/// first-appearance order (the sort is stable and treats them as
/// equal).
pub fn derive_options(products: &[Product]) -> FilterOptions {
    let mut brands = Vec::new();
    let mut segments = Vec::new();
    let mut colors = Vec::new();
    let mut sizes = Vec::new();

    let mut seen_brands = HashSet::new();
    let mut seen_segments = HashSet::new();
    let mut seen_colors = HashSet::new();
    let mut seen_sizes = HashSet::new();

    for product in products {
        if !product.brand.is_empty() && seen_brands.insert(product.brand.clone()) {
            brands.push(product.brand.clone());
        }

        if let Some(segment) = product.segment.as_deref() {
            if !segment.is_empty() && seen_segments.insert(segment.to_string()) {
                segments.push(segment.to_string());
            }
        }

        let color = primary_color(product.color.as_deref());
        if !color.is_empty() && seen_colors.insert(color.clone()) {
            colors.push(color);
        }

        for token in parse_sizes(product.sizes.as_deref()) {
            if seen_sizes.insert(token.clone()) {
                sizes.push(token);
            }
        }
    }

    brands.sort_by(|a, b| compare_alpha(a, b));
    segments.sort_by(|a, b| compare_alpha(a, b));
    colors.sort_by(|a, b| compare_alpha(a, b));
    sizes.sort_by(|a, b| compare_numeric(a, b));

    FilterOptions {
        brands,
        segments,
        colors,
        sizes,
    }
}
