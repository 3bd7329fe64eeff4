use serde_json::{json, Value};

/// JSON Schema for the catalog document. Nullable columns mirror the
/// remote table; unknown properties are allowed so extra columns
/// round-trip untouched.
pub fn catalog_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "Product Catalog",
        "type": "object",
        "required": ["products"],
        "properties": {
            "products": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["id", "brand", "model"],
                    "properties": {
                        "id": {"type": "string"},
                        "slug": {"type": ["string", "null"]},
                        "brand": {"type": "string"},
                        "model": {"type": "string"},
                        "segment": {"type": ["string", "null"]},
                        "color": {"type": ["string", "null"]},
                        "sizes": {"type": ["string", "null"]},
                        "images": {
                            "type": "array",
                            "items": {"type": "string"}
                        },
                        "active": {"type": "boolean"},
                        "created_at": {"type": ["string", "null"]},
                        "updated_at": {"type": ["string", "null"]},
                        "created_by": {"type": ["string", "null"]},
                        "updated_by": {"type": ["string", "null"]}
                    }
                }
            },
            "admin_users": {
                "type": "array",
                "items": {"type": "string"}
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema_validation::validate_catalog_json;

    #[test]
    fn test_minimal_catalog_validates() {
        let data = json!({
            "products": [{
                "id": "1",
                "brand": "Nike",
                "model": "Air Max"
            }]
        });

        assert!(validate_catalog_json(&data).is_ok());
    }

    #[test]
    fn test_nullable_columns_accept_null() {
        let data = json!({
            "products": [{
                "id": "1",
                "brand": "Nike",
                "model": "Air Max",
                "segment": null,
                "color": null,
                "sizes": null,
                "slug": null
            }],
            "admin_users": ["admin-1"]
        });

        assert!(validate_catalog_json(&data).is_ok());
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let data = json!({
            "products": [{
                "brand": "Nike",
                "model": "Air Max"
            }]
        });

        assert!(validate_catalog_json(&data).is_err());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let data = json!({
            "products": [{
                "id": "1",
                "brand": "Nike",
                "model": "Air Max",
                "images": "not-an-array"
            }]
        });

        assert!(validate_catalog_json(&data).is_err());
    }

    #[test]
    fn test_extra_columns_are_allowed() {
        let data = json!({
            "products": [{
                "id": "1",
                "brand": "Nike",
                "model": "Air Max",
                "price": 1999
            }],
            "store_name": "Zapatería"
        });

        assert!(validate_catalog_json(&data).is_ok());
    }
}
