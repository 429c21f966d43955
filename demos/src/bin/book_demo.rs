//! Demo: Order Book Walkthrough
//!
//! Showcases: price-ordered inserts, same-price merging, id allocation,
//! lookup/delete by id, validation errors and the market data report.
//!
//! Run: cargo run --bin book_demo -- [orders] [seed]
//! Notices: RUST_LOG=info cargo run --bin book_demo

use colored::*;
use pricebook_book::{BookResult, MarketData, OrderBook, Side};
use pricebook_types::MarketLevel;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

fn print_side(title: &str, levels: &[MarketLevel], width: usize) {
    println!("  {}", title.bold());
    let max_qty = levels.iter().map(|l| l.quantity).max().unwrap_or(1).max(1);

    for level in levels {
        let bar_len = ((level.quantity as u128 * width as u128) / max_qty as u128) as usize;
        let bar = "█".repeat(bar_len.max(1));
        let bar = match title {
            "ASKS" => bar.red(),
            _ => bar.green(),
        };
        println!("  ${:>10} │ {:<8} {}", level.price, level.quantity, bar);
    }
    if levels.is_empty() {
        println!("  {}", "(empty)".dimmed());
    }
}

fn print_market_data(data: &MarketData) {
    println!();
    print_side("ASKS", &data.asks, 30);
    println!();
    print_side("BIDS", &data.bids, 30);
    println!();
}

/// Report an operation's outcome the way a caller would see it
fn show<T: std::fmt::Debug>(label: &str, result: BookResult<T>) {
    match result {
        Ok(value) => println!("  {} {:<28} -> {:?}", "✓".green(), label, value),
        Err(err) => println!("  {} {:<28} -> {}", "✗".red(), label, err.to_string().yellow()),
    }
}

fn arg_or(index: usize, default: u64) -> u64 {
    std::env::args()
        .nth(index)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let count = arg_or(1, 12) as usize;
    let seed = arg_or(2, 7);

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  ORDER BOOK WALKTHROUGH".cyan().bold());
    println!("{}", format!("  {} random orders per side, seed {}", count, seed).cyan());
    println!("{}", "═".repeat(60).cyan());

    let mut book = OrderBook::new();
    let mut rng = StdRng::seed_from_u64(seed);

    println!("\n{}", "Filling both sides".bold());
    for _ in 0..count {
        // Quarter-tick grid so some prices collide and merge
        let price = rng.gen_range(100..200u32) as f64 / 4.0;
        let qty = rng.gen_range(1..=50u64);
        let ask = book.set_ask(price, qty);
        let bid = book.set_bid(price - 1.0, qty);
        show(&format!("set_ask({price}, {qty})"), ask);
        show(&format!("set_bid({}, {qty})", price - 1.0), bid);
    }

    print_market_data(&book.report_market_data());

    println!("{}", "Merging into an existing level".bold());
    if let Some(first) = book.asks().first().cloned() {
        let price = first.price();
        let burned = book.place(Side::Ask, price, 10);
        show(&format!("place(Ask, {price}, 10)"), burned);
        println!("  {} {:<28} -> {:?}", "•".cyan(), "ask_id_at(price)", book.ask_id_at(price));
        show(
            &format!("get_ask({})", first.id()),
            book.get_ask(first.id()).map(|o| o.map(|o| o.quantity())),
        );
    }

    println!("\n{}", "Deleting".bold());
    let last_bid = book.bid_id();
    show(&format!("del_bid({last_bid})"), book.del_bid(last_bid));
    show(&format!("get_bid({last_bid})"), book.get_bid(last_bid).map(|o| o.cloned()));

    println!("\n{}", "Rejected input".bold());
    let bad_ids: [Value; 4] = [json!(true), json!("1"), json!(0), json!(1.0)];
    for id in bad_ids {
        show(&format!("get_ask({id})"), book.get_ask(id.clone()).map(|o| o.cloned()));
    }
    show("set_ask(true, 1)", book.set_ask(true, 1));
    show("set_ask(0.001, 1)", book.set_ask(0.001, 1));
    show("set_bid(10, 1.5)", book.set_bid(10, 1.5));
    show("set_bid(10, -3)", book.set_bid(10, -3));

    let data = book.report_market_data();
    print_market_data(&data);

    println!(
        "{} {} ask levels, {} bid levels, sorted: {}",
        "✓".green(),
        data.asks.len(),
        data.bids.len(),
        data.is_sorted_by_price()
    );
    println!(
        "{} next ids: ask #{}, bid #{}",
        "✓".green(),
        book.ask_id() + 1,
        book.bid_id() + 1
    );

    match serde_json::to_string_pretty(&data) {
        Ok(json) => println!("\n{}\n{}", "Market data (JSON)".bold(), json),
        Err(err) => eprintln!("failed to serialize market data: {err}"),
    }
}
