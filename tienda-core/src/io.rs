use crate::models::Catalog;
use crate::schema_validation::validate_catalog_json;
use crate::validation::validate_catalog;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Load a catalog from a JSON file, checking the raw document against
/// the embedded schema and the structural rules before handing it out.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    let raw: serde_json::Value = serde_json::from_str(&contents)?;

    validate_catalog_json(&raw)
        .map_err(|errors| format!("Validation failed:\n{}", errors.join("\n")))?;

    let catalog: Catalog = serde_json::from_value(raw)?;

    validate_catalog(&catalog)
        .map_err(|errors| format!("Validation failed:\n{}", errors.join("\n")))?;

    Ok(catalog)
}

/// Save a catalog to a JSON file with pretty printing.
pub fn save_catalog<P: AsRef<Path>>(catalog: &Catalog, path: P) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;

    #[test]
    fn test_unknown_fields_round_trip_through_extras() {
        let json = serde_json::json!({
            "products": [{
                "id": "1",
                "brand": "Nike",
                "model": "Air Max",
                "price": 1999
            }],
            "store_name": "Zapatería"
        });

        let catalog: Catalog = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(
            catalog.products[0].extra.get("price"),
            Some(&serde_json::json!(1999))
        );
        assert_eq!(
            catalog.extra.get("store_name"),
            Some(&serde_json::json!("Zapatería"))
        );

        let back = serde_json::to_value(&catalog).unwrap();
        assert_eq!(back["products"][0]["price"], serde_json::json!(1999));
        assert_eq!(back["store_name"], serde_json::json!("Zapatería"));
    }

    #[test]
    fn test_missing_columns_take_defaults() {
        let json = serde_json::json!({
            "products": [{
                "id": "1",
                "brand": "Nike",
                "model": "Air Max"
            }]
        });

        let catalog: Catalog = serde_json::from_value(json).unwrap();
        let product: &Product = &catalog.products[0];
        assert!(product.active);
        assert!(product.color.is_none());
        assert!(product.images.is_empty());
        assert!(catalog.admin_users.is_empty());
    }
}
