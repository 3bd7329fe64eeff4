use crate::models::Catalog;
use std::collections::HashSet;

/// Validate the catalog document structure
/// Returns Ok(()) if valid, or Err(Vec<String>) with every problem found.
///
/// Free-text columns (segment, color, sizes) are never rejected: any
/// text is a legal size specification or color field, and malformed
/// size segments simply survive as verbatim labels.
pub fn validate_catalog(catalog: &Catalog) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    let mut slugs = HashSet::new();

    for (idx, product) in catalog.products.iter().enumerate() {
        let product_ref = format!("Product #{} ('{}')", idx + 1, product.model);

        if product.id.trim().is_empty() {
            errors.push(format!("{}: id cannot be empty", product_ref));
        } else if !ids.insert(product.id.clone()) {
            errors.push(format!("{}: duplicate id '{}'", product_ref, product.id));
        }

        if let Some(slug) = &product.slug {
            if slug.trim().is_empty() {
                errors.push(format!("{}: slug cannot be blank", product_ref));
            } else if !slugs.insert(slug.clone()) {
                errors.push(format!("{}: duplicate slug '{}'", product_ref, slug));
            }
        }

        if product.brand.trim().is_empty() {
            errors.push(format!("{}: brand cannot be empty", product_ref));
        }

        if product.model.trim().is_empty() {
            errors.push(format!("{}: model cannot be empty", product_ref));
        }

        for (img_idx, url) in product.images.iter().enumerate() {
            if url.trim().is_empty() {
                errors.push(format!("{}: image #{} is blank", product_ref, img_idx + 1));
            }
        }
    }

    for user in &catalog.admin_users {
        if user.trim().is_empty() {
            errors.push("admin_users contains a blank user id".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
