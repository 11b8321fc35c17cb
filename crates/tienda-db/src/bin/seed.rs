//! # Seed Data Generator
//!
//! Populates the database with brands, categories and products for
//! development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 products (default)
//! cargo run -p tienda-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p tienda-db --bin seed -- --count 500
//!
//! # Specify database path
//! cargo run -p tienda-db --bin seed -- --db ./data/tienda.db
//! ```
//!
//! Products cycle through every category, stem and size combination; past
//! the first pass, descriptions get a batch suffix so any `--count` is met.
//! Every write goes through the same repositories the admin panel uses.

use std::env;
use tienda_core::{Money, ProductDraft};
use tienda_db::{Database, DbConfig};

const BRANDS: &[&str] = &["Acme", "Globex", "Initech", "Umbrella", "Hooli"];

/// Category name with the product stems generated under it.
const CATEGORIES: &[(&str, &[&str])] = &[
    ("Hardware", &["Hammer", "Screwdriver", "Wrench", "Drill", "Saw"]),
    ("Kitchen", &["Kettle", "Toaster", "Blender", "Pan", "Knife Set"]),
    ("Garden", &["Hose", "Rake", "Shovel", "Planter", "Sprinkler"]),
    ("Office", &["Stapler", "Desk Lamp", "Notebook", "Chair", "Shredder"]),
];

const SIZES: &[&str] = &["Small", "Medium", "Large", "Pro"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 50;
    let mut db_path = String::from("./tienda_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Tienda Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 50)");
                println!("  -d, --db <PATH>    Database file path (default: ./tienda_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Tienda Seed Data Generator");
    println!("==========================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().list().await?.len();
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let mut brand_ids = Vec::with_capacity(BRANDS.len());
    for name in BRANDS {
        brand_ids.push(db.brands().register(name).await?.id);
    }

    let mut category_ids = Vec::with_capacity(CATEGORIES.len());
    for (name, _) in CATEGORIES {
        category_ids.push(db.categories().register(name).await?.id);
    }
    println!("✓ {} brands, {} categories", brand_ids.len(), category_ids.len());

    let start = std::time::Instant::now();
    let mut generated = 0;
    let mut failed = 0;

    for (seed, (category_idx, description)) in catalog(count).into_iter().enumerate() {
        let draft = generate_draft(
            description,
            brand_ids[seed % brand_ids.len()],
            category_ids[category_idx],
            seed,
        );

        if let Err(e) = db.products().register(&draft).await {
            eprintln!("Failed to insert {}: {}", draft.description, e);
            failed += 1;
            continue;
        }

        generated += 1;
        if generated % 500 == 0 {
            println!("  Generated {} products...", generated);
        }
    }

    let elapsed = start.elapsed();
    println!("✓ Generated {} products in {:?}", generated, elapsed);
    if failed > 0 {
        println!("⚠ {} products failed to insert", failed);
    }
    println!("  Active products: {}", db.products().count_active().await?);

    db.close().await;
    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Category index and description for each of `count` products.
///
/// Walks every category × stem × size combination, then starts over with a
/// batch suffix (`"Hammer Small #2"`) until `count` entries exist.
fn catalog(count: usize) -> Vec<(usize, String)> {
    let combos: Vec<(usize, &str, &str)> = CATEGORIES
        .iter()
        .enumerate()
        .flat_map(|(category_idx, (_, stems))| {
            stems
                .iter()
                .flat_map(move |stem| SIZES.iter().map(move |size| (category_idx, *stem, *size)))
        })
        .collect();

    (0..count)
        .map(|n| {
            let (category_idx, stem, size) = combos[n % combos.len()];
            let batch = n / combos.len();
            let description = if batch == 0 {
                format!("{} {}", stem, size)
            } else {
                format!("{} {} #{}", stem, size, batch + 1)
            };
            (category_idx, description)
        })
        .collect()
}

/// Builds a product draft with a deterministic price from `seed`.
fn generate_draft(description: String, brand_id: i64, category_id: i64, seed: usize) -> ProductDraft {
    // $4.99 - $84.99
    let sale_cents = 499 + ((seed * 37) % 8000) as i64;
    // Cost is 55-75% of sale price
    let cost_cents = sale_cents * (55 + (seed % 21) as i64) / 100;

    ProductDraft {
        description,
        unit_cost: Money::from_cents(cost_cents),
        sale_price: Money::from_cents(sale_cents),
        brand_id,
        category_id,
    }
}
