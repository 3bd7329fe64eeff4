use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_active() -> bool {
    true
}

/// A single product record as stored in the catalog document.
/// `segment`, `color` and `sizes` are free-text columns that may be
/// null in the store; filtering normalizes them on the fly.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub segment: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub sizes: Option<String>,
    /// Ordered image URLs; the first one is the cover.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// The on-disk catalog document.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Catalog {
    pub products: Vec<Product>,
    #[serde(default)]
    pub admin_users: Vec<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Filter selection driven by the view's form controls.
/// An empty string means the field does not constrain.
#[derive(Debug, Default, Clone)]
pub struct Filters {
    pub query: String,
    pub brand: String,
    pub segment: String,
    pub color: String,
    pub size: String,
}

/// The distinct filter values present in the current record list,
/// rederived whenever the list changes. Colors hold primary-color
/// tokens only; sizes hold parsed size tokens.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FilterOptions {
    pub brands: Vec<String>,
    pub segments: Vec<String>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
}
