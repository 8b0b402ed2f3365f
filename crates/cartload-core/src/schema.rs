//! Static schema for the e-commerce store
//!
//! Tables are created with `CREATE TABLE IF NOT EXISTS`, so creating the
//! schema on an already-initialized store is a no-op and never drops data.

/// A table name with its creation DDL
#[derive(Debug, Clone, Copy)]
pub struct TableDef {
    pub name: &'static str,
    pub ddl: &'static str,
}

/// Tables in dependency order: parents before children
pub const TABLE_ORDER: [&str; 5] = ["users", "categories", "products", "orders", "order_items"];

/// Tables in reverse dependency order, used when clearing rows so that
/// foreign-key constraints are never violated mid-reset
pub const RESET_ORDER: [&str; 5] = ["order_items", "orders", "products", "categories", "users"];

/// Valid values for the orders.status column
pub const ORDER_STATUSES: [&str; 5] = ["pending", "processing", "shipped", "delivered", "cancelled"];

const TABLE_DEFS: [TableDef; 5] = [
    TableDef {
        name: "users",
        ddl: "CREATE TABLE IF NOT EXISTS users (
            user_id INTEGER PRIMARY KEY,
            username TEXT NOT NULL,
            email TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
    },
    TableDef {
        name: "categories",
        ddl: "CREATE TABLE IF NOT EXISTS categories (
            category_id INTEGER PRIMARY KEY,
            category_name TEXT NOT NULL
        )",
    },
    TableDef {
        name: "products",
        ddl: "CREATE TABLE IF NOT EXISTS products (
            product_id INTEGER PRIMARY KEY,
            product_name TEXT NOT NULL,
            category_id INTEGER NOT NULL,
            price DOUBLE NOT NULL,
            FOREIGN KEY (category_id) REFERENCES categories(category_id)
        )",
    },
    TableDef {
        name: "orders",
        ddl: "CREATE TABLE IF NOT EXISTS orders (
            order_id INTEGER PRIMARY KEY,
            user_id INTEGER NOT NULL,
            order_date TEXT NOT NULL,
            status TEXT NOT NULL,
            FOREIGN KEY (user_id) REFERENCES users(user_id)
        )",
    },
    TableDef {
        name: "order_items",
        ddl: "CREATE TABLE IF NOT EXISTS order_items (
            item_id INTEGER PRIMARY KEY,
            order_id INTEGER NOT NULL,
            product_id INTEGER NOT NULL,
            quantity INTEGER NOT NULL,
            FOREIGN KEY (order_id) REFERENCES orders(order_id),
            FOREIGN KEY (product_id) REFERENCES products(product_id)
        )",
    },
];

/// All table definitions, in dependency order
pub fn table_definitions() -> &'static [TableDef] {
    &TABLE_DEFS
}
