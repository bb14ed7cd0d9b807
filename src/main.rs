use std::env;

use anyhow::Result;
use dotenv::dotenv;
use tracing::info;

use stock_dashboard::models::{EarningsEvent, SessionTime};
use stock_dashboard::service::calendar::{self, CalendarService};
use stock_dashboard::service::finance::{format_price, FinanceService};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    // Empty label resolves to the current week.
    let week = env::args().skip(1).collect::<Vec<String>>().join(" ");

    info!("Initializing FinanceService...");
    let finance = FinanceService::new()?;

    let indices = finance.get_market_indices().await?;
    println!("MARKET OVERVIEW");
    for idx in &indices {
        println!(
            "  {:<8} {:>12}  {:+.2} ({:+.2}%)",
            idx.name, idx.value, idx.change, idx.change_percent
        );
    }

    let trending = finance.get_trending_stocks().await?;
    println!("\nTRENDING STOCKS");
    for stock in &trending {
        println!(
            "  {:<6} {:<26} {:>10}  {:+.2}%  vol {}",
            stock.symbol,
            stock.name,
            format_price(&stock.symbol, stock.price),
            stock.change_percent,
            stock.volume
        );
    }

    let calendar_service = CalendarService::new()?;
    let calendar = calendar_service.get_earnings_calendar(&week).await;

    println!("\nEARNINGS THIS WEEK");
    if calendar::high_importance_only(&calendar) {
        println!("  [high importance only]");
    }
    for (day, events) in &calendar {
        println!("  Day {day}");
        if events.is_empty() {
            println!("    No earnings");
            continue;
        }
        print_session(events, SessionTime::Before, "Before Open");
        print_session(events, SessionTime::During, "Market Hours");
        print_session(events, SessionTime::After, "After Close");
    }

    let feed = finance.get_earnings_feed().await?;
    println!("\nEARNINGS FEED");
    for item in &feed {
        println!("  {} — {}", item.symbol, item.title);
    }

    Ok(())
}

fn print_session(events: &[EarningsEvent], session: SessionTime, heading: &str) {
    let group: Vec<&EarningsEvent> = events.iter().filter(|e| e.time == session).collect();
    if group.is_empty() {
        return;
    }
    println!("    {heading}");
    for event in group {
        println!(
            "      {:<6} {:<28} est EPS {:.2}",
            event.symbol, event.name, event.eps.estimate
        );
    }
}
