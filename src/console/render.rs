//! Plain-text rendering of the console views.

use std::fmt;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::auth::Credentials;
use crate::catalog::Product;

/// Shown in the detail panel when nothing is selected.
pub const SELECT_PROMPT: &str = "Please select a product to view";

/// Heading of the login form.
pub const LOGIN_HEADING: &str = "Please sign in";

/// One row of the catalog table.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct CatalogRow {
    /// 1-based row number, as accepted by `show <row>`.
    #[tabled(rename = "#")]
    pub row: usize,
    /// Product title.
    #[tabled(rename = "Title")]
    pub title: String,
    /// List price before discount.
    #[tabled(rename = "Origin price")]
    pub origin_price: String,
    /// Selling price.
    #[tabled(rename = "Price")]
    pub price: String,
    /// "Enabled" or "Disabled".
    #[tabled(rename = "Status")]
    pub status: &'static str,
}

/// Builds one table row per product, in catalog order.
#[must_use]
pub fn catalog_rows(products: &[Product]) -> Vec<CatalogRow> {
    products
        .iter()
        .enumerate()
        .map(|(index, product)| CatalogRow {
            row: index + 1,
            title: product.title.clone(),
            origin_price: product.origin_price.to_string(),
            price: product.price.to_string(),
            status: product.status_label(),
        })
        .collect()
}

/// Renders the product table.
#[must_use]
pub fn render_catalog(products: &[Product]) -> String {
    let mut table = Table::new(catalog_rows(products));
    table.with(Style::rounded());
    table.to_string()
}

/// The detail panel for the current selection.
///
/// A selection without a title displays like no selection at all.
#[derive(Debug, Clone, Copy)]
pub struct DetailPanel<'a>(pub Option<&'a Product>);

impl fmt::Display for DetailPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(product) = self.0.filter(|product| !product.title.is_empty()) else {
            return f.write_str(SELECT_PROMPT);
        };

        writeln!(f, "{} [{}]", product.title, product.category)?;
        if !product.image_url.is_empty() {
            writeln!(f, "Image: {}", product.image_url)?;
        }
        writeln!(f, "Description: {}", product.description)?;
        writeln!(f, "Content: {}", product.content)?;
        write!(f, "Price: ~{}~ / {}", product.origin_price, product.price)?;
        if let Some(unit) = &product.unit {
            write!(f, " per {unit}")?;
        }
        writeln!(f)?;
        writeln!(f, "More images:")?;
        for image in &product.images_url {
            writeln!(f, "  - {image}")?;
        }
        Ok(())
    }
}

/// Renders the detail panel for the current selection.
#[must_use]
pub fn render_detail(selected: Option<&Product>) -> String {
    DetailPanel(selected).to_string()
}

/// Renders the login form with the current field values.
#[must_use]
pub fn render_login(credentials: &Credentials) -> String {
    format!(
        "{LOGIN_HEADING}\nEmail address: {}\nPassword: {}",
        credentials.username,
        "*".repeat(credentials.password.chars().count())
    )
}
