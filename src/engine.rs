use crate::errors::SaleError;
use crate::loader::{PriceCatalogue, SalesRecord};
use log::{debug, info};
use serde_json::Value;

const PRODUCT_KEY: &str = "Product";
const QUANTITY_KEY: &str = "Quantity";
const PRICE_KEY: &str = "price";

/// The outcome of costing a sales record against a price catalogue.
#[derive(Debug, Default, PartialEq)]
pub struct SalesSummary {
    /// Sum of price * quantity over every sale that could be costed.
    pub total_cost: f64,

    /// One entry per rejected sale, in the order the sales appeared.
    pub errors: Vec<SaleError>,

    /// Number of sales looked at, whether accepted or rejected.
    pub processed: usize,
}

impl SalesSummary {
    pub fn rejected(&self) -> usize {
        self.errors.len()
    }

    pub fn accepted(&self) -> usize {
        self.processed.saturating_sub(self.rejected())
    }

    /// Cost a single sale and fold it into the summary.
    ///
    /// A sale that cannot be costed contributes nothing to the total. The
    /// reason is recorded instead and processing carries on, so one bad
    /// record never hides the rest of the batch.
    pub fn process_sale(&mut self, catalogue: &PriceCatalogue, sale: &Value) {
        self.processed += 1;

        match cost_of_sale(catalogue, sale) {
            Ok(cost) => {
                debug!("sale {} costs {}", sale, cost);
                self.total_cost += cost;
            }
            Err(err) => {
                debug!("rejected sale: {}", err);
                self.errors.push(err);
            }
        }
    }
}

/// Matches every sale against the catalogue and accumulates the total cost,
/// collecting a diagnostic for each sale that could not be costed.
pub fn compute_total_sales(catalogue: &PriceCatalogue, sales: &SalesRecord) -> SalesSummary {
    let mut summary = SalesSummary::default();

    for sale in sales.iter() {
        summary.process_sale(catalogue, sale);
    }

    info!(
        "processed {} sales: {} accepted, {} rejected",
        summary.processed,
        summary.accepted(),
        summary.rejected()
    );
    summary
}

fn cost_of_sale(catalogue: &PriceCatalogue, sale: &Value) -> Result<f64, SaleError> {
    let fields = match sale.as_object() {
        Some(fields) => fields,
        None => return Err(SaleError::IncorrectDataType(sale.to_string())),
    };

    let product = fields
        .get(PRODUCT_KEY)
        .ok_or_else(|| SaleError::MissingKey(PRODUCT_KEY, sale.to_string()))?;
    let quantity = fields
        .get(QUANTITY_KEY)
        .ok_or_else(|| SaleError::MissingKey(QUANTITY_KEY, sale.to_string()))?;

    // Catalogue titles are always strings, so a product of any other type
    // can never match.
    let entry = match product.as_str() {
        Some(title) => catalogue
            .lookup(title)
            .ok_or_else(|| SaleError::ProductNotFound(title.to_string()))?,
        None => return Err(SaleError::ProductNotFound(product.to_string())),
    };

    let price = entry
        .price
        .as_ref()
        .ok_or_else(|| SaleError::MissingKey(PRICE_KEY, sale.to_string()))?;

    match (price.as_f64(), quantity.as_f64()) {
        (Some(price), Some(quantity)) => Ok(price * quantity),
        _ => Err(SaleError::IncorrectDataType(sale.to_string())),
    }
}
