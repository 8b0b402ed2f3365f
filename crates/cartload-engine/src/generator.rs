//! Synthetic e-commerce dataset generator
//!
//! Writes the five CSV files the pipeline consumes. Foreign keys always
//! reference previously generated primary keys, so the output is
//! referentially closed by construction, and a fixed seed reproduces the
//! exact same dataset.

use cartload_core::{CoreError, CoreResult, ORDER_STATUSES};
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

/// Fixed category names, one row each
pub const CATEGORY_NAMES: [&str; 10] = [
    "Electronics",
    "Books",
    "Clothing",
    "Home Decor",
    "Beauty",
    "Sports",
    "Toys",
    "Groceries",
    "Garden",
    "Automotive",
];

/// Row counts and seed for one generated dataset
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub users: usize,
    pub products: usize,
    pub orders: usize,
    pub order_items: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            users: 100,
            products: 200,
            orders: 500,
            order_items: 1500,
        }
    }
}

impl GeneratorConfig {
    /// Reject count combinations that leave a foreign key nothing to
    /// reference. Zero counts are fine as long as nothing depends on them.
    pub fn validate(&self) -> CoreResult<()> {
        let invalid = |message: &str| CoreError::ConfigInvalid {
            message: message.to_string(),
        };
        if self.orders > 0 && self.users == 0 {
            return Err(invalid("cannot generate orders without any users"));
        }
        if self.order_items > 0 && self.orders == 0 {
            return Err(invalid("cannot generate order items without any orders"));
        }
        if self.order_items > 0 && self.products == 0 {
            return Err(invalid("cannot generate order items without any products"));
        }
        Ok(())
    }
}

/// Files written by one generator run, with their row counts
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    pub files: Vec<(&'static str, usize)>,
}

/// Generate the five CSV files into `data_dir`, creating it if needed
pub fn generate(data_dir: &Path, config: &GeneratorConfig) -> CoreResult<DatasetSummary> {
    config.validate()?;
    std::fs::create_dir_all(data_dir)?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    write_categories(data_dir)?;
    write_users(data_dir, config.users, &mut rng)?;
    write_products(data_dir, config.products, &mut rng)?;
    write_orders(data_dir, config.orders, config.users, &mut rng)?;
    write_order_items(data_dir, config, &mut rng)?;

    Ok(DatasetSummary {
        files: vec![
            ("categories.csv", CATEGORY_NAMES.len()),
            ("users.csv", config.users),
            ("products.csv", config.products),
            ("orders.csv", config.orders),
            ("order_items.csv", config.order_items),
        ],
    })
}

fn random_date(rng: &mut StdRng) -> NaiveDate {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    let delta = (end - start).num_days();
    start + Duration::days(rng.gen_range(0..=delta))
}

fn write_categories(dir: &Path) -> CoreResult<()> {
    let mut writer = csv::Writer::from_path(dir.join("categories.csv"))?;
    writer.write_record(["category_id", "category_name"])?;
    for (idx, name) in CATEGORY_NAMES.iter().enumerate() {
        writer.write_record(&[(idx + 1).to_string(), name.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_users(dir: &Path, count: usize, rng: &mut StdRng) -> CoreResult<()> {
    let mut writer = csv::Writer::from_path(dir.join("users.csv"))?;
    writer.write_record(["user_id", "username", "email", "created_at"])?;
    for user_id in 1..=count {
        let username = format!("user{:03}", user_id);
        let email = format!("{}@example.com", username);
        writer.write_record(&[
            user_id.to_string(),
            username,
            email,
            random_date(rng).to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_products(dir: &Path, count: usize, rng: &mut StdRng) -> CoreResult<()> {
    let mut writer = csv::Writer::from_path(dir.join("products.csv"))?;
    writer.write_record(["product_id", "product_name", "category_id", "price"])?;
    for product_id in 1..=count {
        let category_id = rng.gen_range(1..=CATEGORY_NAMES.len());
        let price = (rng.gen_range(5.0_f64..500.0) * 100.0).round() / 100.0;
        writer.write_record(&[
            product_id.to_string(),
            format!("Product {:03}", product_id),
            category_id.to_string(),
            format!("{:.2}", price),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_orders(dir: &Path, count: usize, users: usize, rng: &mut StdRng) -> CoreResult<()> {
    let mut writer = csv::Writer::from_path(dir.join("orders.csv"))?;
    writer.write_record(["order_id", "user_id", "order_date", "status"])?;
    for order_id in 1..=count {
        let user_id = rng.gen_range(1..=users);
        let status = ORDER_STATUSES[rng.gen_range(0..ORDER_STATUSES.len())];
        writer.write_record(&[
            order_id.to_string(),
            user_id.to_string(),
            random_date(rng).to_string(),
            status.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_order_items(dir: &Path, config: &GeneratorConfig, rng: &mut StdRng) -> CoreResult<()> {
    let mut writer = csv::Writer::from_path(dir.join("order_items.csv"))?;
    writer.write_record(["item_id", "order_id", "product_id", "quantity"])?;
    for item_id in 1..=config.order_items {
        let order_id = rng.gen_range(1..=config.orders);
        let product_id = rng.gen_range(1..=config.products);
        let quantity = rng.gen_range(1..=5);
        writer.write_record(&[
            item_id.to_string(),
            order_id.to_string(),
            product_id.to_string(),
            quantity.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;
