//! Basic usage example for sqlchain
//!
//! Run with: cargo run --example basic -p sqlchain
//!
//! Every terminal call prints its statement to stdout through `StdoutSink`.

use sqlchain::{BuilderError, StatementKind, StdoutSink, Value, table};

fn main() -> Result<(), BuilderError> {
    // ============================================
    // Example 1: INSERT
    // ============================================
    println!("=== Insert ===");

    table("users")
        .sink(StdoutSink)
        .insert_values([("id", Value::from(1)), ("username", Value::from("ngt"))])
        .save()?;

    // ============================================
    // Example 2: UPDATE
    // ============================================
    println!("=== Update ===");

    table("users")
        .sink(StdoutSink)
        .set("username", "benito")
        .set("id", 2)
        .where_eq("id", 1)
        .update()?;

    // ============================================
    // Example 3: DELETE
    // ============================================
    println!("=== Delete ===");

    table("users")
        .sink(StdoutSink)
        .where_eq("username", "benito")
        .delete()?;

    // ============================================
    // Example 4: SELECT
    // ============================================
    println!("=== Select ===");

    table("users").sink(StdoutSink).fetch_all()?;
    table("users").sink(StdoutSink).fetch("*")?;
    table("users").sink(StdoutSink).fetch(["*"])?;
    table("users").sink(StdoutSink).offset(10).fetch_all()?;
    table("users").sink(StdoutSink).limit(10).fetch_all()?;

    // ============================================
    // Example 5: Placeholders
    // ============================================
    println!("=== Placeholders ===");

    let built = table("users")
        .set("username", "o'brien")
        .where_eq("id", 1)
        .with_mode(StatementKind::Update)
        .build();
    println!("{}", built.sql());
    println!("{:?}", built.params());

    // Missing values: nothing is emitted.
    if let Err(e) = table("users").sink(StdoutSink).update() {
        println!("update skipped: {e}");
    }

    Ok(())
}
