pub mod formatting;

pub use formatting::{
    print_active_filters, print_admin_row, print_catalog_header, print_no_results, print_options,
    print_product_card, print_product_detail,
};
