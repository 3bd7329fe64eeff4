use crate::colors::primary_color;
use crate::models::{Filters, Product};
use crate::sizes::parse_sizes;

/// Apply the filter selection to a record list, returning the matching
/// subset with the original relative order preserved.
pub fn apply_filters(products: &[Product], filters: &Filters) -> Vec<Product> {
    products
        .iter()
        .filter(|p| matches_filters(p, filters))
        .cloned()
        .collect()
}

/// Check whether a record matches every active filter field.
/// The five predicates are independent and combined with AND:
/// brand and segment by exact equality, color against the primary
/// color token, size by membership in the parsed size tokens, and the
/// query as a lowercase substring of "brand model".
pub fn matches_filters(product: &Product, filters: &Filters) -> bool {
    if !filters.brand.is_empty() && product.brand != filters.brand {
        return false;
    }

    if !filters.segment.is_empty() && product.segment.as_deref().unwrap_or("") != filters.segment {
        return false;
    }

    if !filters.color.is_empty() && primary_color(product.color.as_deref()) != filters.color {
        return false;
    }

    if !filters.size.is_empty() {
        let tokens = parse_sizes(product.sizes.as_deref());
        if !tokens.iter().any(|t| t == &filters.size) {
            return false;
        }
    }

    let query = filters.query.to_lowercase();
    let query = query.trim();
    if !query.is_empty() {
        let haystack = format!("{} {}", product.brand, product.model).to_lowercase();
        if !haystack.contains(query) {
            return false;
        }
    }

    true
}

/// Check if any filter field constrains the result.
pub fn has_filters(filters: &Filters) -> bool {
    !filters.query.trim().is_empty()
        || !filters.brand.is_empty()
        || !filters.segment.is_empty()
        || !filters.color.is_empty()
        || !filters.size.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, brand: &str, model: &str, color: &str, sizes: &str) -> Product {
        Product {
            id: id.to_string(),
            slug: None,
            brand: brand.to_string(),
            model: model.to_string(),
            segment: Some("dama".to_string()),
            color: Some(color.to_string()),
            sizes: Some(sizes.to_string()),
            images: Vec::new(),
            active: true,
            created_at: None,
            updated_at: None,
            created_by: None,
            updated_by: None,
            extra: Default::default(),
        }
    }

    fn records() -> Vec<Product> {
        vec![
            product("1", "Nike", "Air Max", "blanco negro", "24-26"),
            product("2", "Puma", "Suede", "negro", "25"),
        ]
    }

    #[test]
    fn test_color_filter_uses_primary_color_only() {
        let filters = Filters {
            color: "negro".to_string(),
            ..Filters::default()
        };

        let matched = apply_filters(&records(), &filters);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "2");
    }

    #[test]
    fn test_size_filter_matches_expanded_ranges() {
        let filters = Filters {
            size: "25".to_string(),
            ..Filters::default()
        };

        let matched = apply_filters(&records(), &filters);
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_brand_filter_is_case_sensitive() {
        let filters = Filters {
            brand: "nike".to_string(),
            ..Filters::default()
        };
        assert!(apply_filters(&records(), &filters).is_empty());

        let filters = Filters {
            brand: "Nike".to_string(),
            ..Filters::default()
        };
        assert_eq!(apply_filters(&records(), &filters).len(), 1);
    }

    #[test]
    fn test_query_searches_brand_and_model_case_insensitively() {
        let filters = Filters {
            query: "  AIR ".to_string(),
            ..Filters::default()
        };

        let matched = apply_filters(&records(), &filters);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].model, "Air Max");
    }

    #[test]
    fn test_empty_selection_keeps_everything_in_order() {
        let matched = apply_filters(&records(), &Filters::default());
        let ids: Vec<_> = matched.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let filters = Filters {
            color: "negro".to_string(),
            size: "25".to_string(),
            ..Filters::default()
        };

        let once = apply_filters(&records(), &filters);
        let twice = apply_filters(&once, &filters);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_has_filters() {
        assert!(!has_filters(&Filters::default()));
        assert!(!has_filters(&Filters {
            query: "   ".to_string(),
            ..Filters::default()
        }));
        assert!(has_filters(&Filters {
            size: "25".to_string(),
            ..Filters::default()
        }));
    }
}
