use std::sync::Arc;

use chrono::Utc;
use indexmap::IndexMap;

use crate::error::{AppError, AppResult};
use crate::ids::IdGenerator;
use crate::models::{number_or, CreateProduct, Product, StockSummary};

/// Products keyed by id. `IndexMap` keeps insertion order for listing.
pub struct ProductStore {
    products: IndexMap<String, Product>,
    ids: Arc<dyn IdGenerator>,
}

impl ProductStore {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            products: IndexMap::new(),
            ids,
        }
    }

    pub fn create(&mut self, payload: &CreateProduct) -> AppResult<Product> {
        let missing = payload.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let available_qty = number_or(&payload.available_qty, 0.0);
        if available_qty < 0.0 {
            return Err(AppError::Validation(
                "availableQty must be >= 0".to_string(),
            ));
        }

        let product_name = text(&payload.product_name);
        let sku = text(&payload.sku);
        if self.sku_exists(&sku) {
            return Err(AppError::Conflict(format!(
                "Product with SKU '{}' already exists",
                sku
            )));
        }

        let product = Product {
            id: self.ids.next_id(),
            product_name,
            sku,
            description: text(&payload.description),
            category: text(&payload.category),
            available_qty,
            unit: payload
                .unit
                .as_deref()
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .unwrap_or("pcs")
                .to_string(),
            cost: number_or(&payload.cost, 0.0),
            mrp: number_or(&payload.mrp, 0.0),
            notes: text(&payload.notes),
            supplier: text(&payload.supplier),
            location: text(&payload.location),
            min_stock: number_or(&payload.min_stock, 0.0),
            created_at: Utc::now(),
        };

        self.products.insert(product.id.clone(), product.clone());
        Ok(product)
    }

    pub fn list_all(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn stock_summary(&self) -> StockSummary {
        self.products
            .values()
            .fold(StockSummary::default(), |mut summary, p| {
                summary.total_products += 1;
                summary.in_stock_count += usize::from(p.is_in_stock());
                summary.low_stock_count += usize::from(p.is_low_stock());
                summary.out_of_stock_count += usize::from(p.is_out_of_stock());
                summary
            })
    }

    pub fn low_stock_alerts(&self) -> Vec<Product> {
        self.products
            .values()
            .filter(|p| p.is_low_stock())
            .cloned()
            .collect()
    }

    pub fn low_stock_count(&self) -> usize {
        self.products.values().filter(|p| p.is_low_stock()).count()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn sku_exists(&self, sku: &str) -> bool {
        let wanted = sku.to_lowercase();
        self.products
            .values()
            .any(|p| p.sku.to_lowercase() == wanted)
    }
}

fn text(field: &Option<String>) -> String {
    field.as_deref().map(str::trim).unwrap_or_default().to_string()
}
