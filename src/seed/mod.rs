use tracing::info;

use crate::error::AppResult;
use crate::models::{CreateProduct, LooseNumber, RegisterUser};
use crate::store::{ProductStore, UserStore};

struct SeedProduct {
    name: &'static str,
    sku: &'static str,
    description: &'static str,
    category: &'static str,
    qty: f64,
    cost: f64,
    mrp: f64,
    supplier: &'static str,
    location: &'static str,
    min_stock: f64,
}

static PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        name: "AirTag",
        sku: "SKU-AIRTAG-001",
        description: "Bluetooth item tracker",
        category: "Electronics",
        qty: 25.0,
        cost: 24.0,
        mrp: 29.0,
        supplier: "Apple",
        location: "Aisle 1",
        min_stock: 5.0,
    },
    SeedProduct {
        name: "MX Keys",
        sku: "SKU-LOGI-MXK",
        description: "Wireless illuminated keyboard",
        category: "Accessories",
        qty: 4.0,
        cost: 79.0,
        mrp: 99.0,
        supplier: "Logitech",
        location: "Aisle 2",
        min_stock: 10.0,
    },
    SeedProduct {
        name: "Standing Desk",
        sku: "SKU-DESK-STD",
        description: "Height adjustable standing desk",
        category: "Furniture",
        qty: 0.0,
        cost: 320.0,
        mrp: 449.0,
        supplier: "Flexispot",
        location: "Warehouse B",
        min_stock: 2.0,
    },
];

/// Register the default account.
pub fn seed_users(users: &mut UserStore) -> AppResult<()> {
    users.register(&RegisterUser {
        email: Some("ethan.carter@gmail.com".to_string()),
        password: Some("password123".to_string()),
        name: Some("Ethan Carter".to_string()),
    })?;
    info!(count = users.len(), "Seeded users");
    Ok(())
}

/// Create the three starter products through the normal create path.
pub fn seed_products(products: &mut ProductStore) -> AppResult<()> {
    for seed in PRODUCTS {
        products.create(&CreateProduct {
            product_name: Some(seed.name.to_string()),
            sku: Some(seed.sku.to_string()),
            description: Some(seed.description.to_string()),
            category: Some(seed.category.to_string()),
            available_qty: Some(LooseNumber::Number(seed.qty)),
            unit: Some("pcs".to_string()),
            cost: Some(LooseNumber::Number(seed.cost)),
            mrp: Some(LooseNumber::Number(seed.mrp)),
            notes: None,
            supplier: Some(seed.supplier.to_string()),
            location: Some(seed.location.to_string()),
            min_stock: Some(LooseNumber::Number(seed.min_stock)),
        })?;
    }
    info!(count = products.len(), "Seeded products");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIdGenerator;
    use crate::models::SignInUser;
    use std::sync::Arc;

    #[test]
    fn seeded_user_can_sign_in() {
        let mut users = UserStore::new(Arc::new(SequentialIdGenerator::new()));
        seed_users(&mut users).unwrap();
        let user = users
            .sign_in(&SignInUser {
                email: Some("ethan.carter@gmail.com".to_string()),
                password: Some("password123".to_string()),
            })
            .unwrap();
        assert_eq!(user.name, "Ethan Carter");
    }

    #[test]
    fn seeds_three_products_in_order() {
        let mut products = ProductStore::new(Arc::new(SequentialIdGenerator::new()));
        seed_products(&mut products).unwrap();
        let skus: Vec<String> = products.list_all().into_iter().map(|p| p.sku).collect();
        assert_eq!(skus, vec!["SKU-AIRTAG-001", "SKU-LOGI-MXK", "SKU-DESK-STD"]);
    }

    #[test]
    fn seeding_twice_conflicts() {
        let mut products = ProductStore::new(Arc::new(SequentialIdGenerator::new()));
        seed_products(&mut products).unwrap();
        assert!(seed_products(&mut products).is_err());
    }
}
