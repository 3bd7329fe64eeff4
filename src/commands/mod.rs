use clap::Args;
use tienda_core::Filters;

pub mod admin;
pub mod catalog;
pub mod product;

/// Filter flags shared by the public catalog and the admin listing.
/// An omitted flag leaves the corresponding field unconstrained.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Free-text search over brand and model
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    query: String,

    /// Keep only this exact brand
    #[arg(short, long, value_name = "BRAND", default_value = "")]
    brand: String,

    /// Keep only this exact segment (e.g. "dama", "caballero")
    #[arg(short, long, value_name = "SEGMENT", default_value = "")]
    segment: String,

    /// Keep only products whose primary color matches
    #[arg(short, long, value_name = "COLOR", default_value = "")]
    color: String,

    /// Keep only products stocking this size token
    #[arg(short = 'z', long, value_name = "SIZE", default_value = "")]
    size: String,
}

impl FilterArgs {
    pub fn to_filters(&self) -> Filters {
        Filters {
            query: self.query.clone(),
            brand: self.brand.clone(),
            segment: self.segment.clone(),
            color: self.color.clone(),
            size: self.size.clone(),
        }
    }
}
