use crate::{
    abstract_trait::order::service::{OrderCommandServiceTrait, OrderQueryServiceTrait},
    domain::{
        requests::order::{CreateOrderRequest, SearchOrderRequest},
        response::{api::ApiResponse, menu::MenuItemResponse, order::OrderResponse},
    },
    state::AppState,
};
use anyhow::Result;
use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use shared::errors::{ServiceError, Severity};
use std::{collections::BTreeMap, path::PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about = "Food order queue backed by a CSV file")]
pub struct Cli {
    /// Order file to use instead of ORDER_QUEUE_FILE.
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Print the raw response as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Append an order to the queue
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        menu: String,
        #[arg(long, allow_negative_numbers = true)]
        quantity: i32,
        /// Delivery time of day, HH:MM or HH:MM:SS
        #[arg(long, value_parser = parse_time)]
        time: NaiveTime,
    },
    /// Remove the oldest order
    Remove,
    /// Show the whole queue
    List,
    /// Show the nearest delivery time
    Nearest,
    /// Show the total number of items ordered
    Total,
    /// Show items ordered per menu
    MenuTotals,
    /// Show the number of orders in the queue
    Count,
    /// Find orders by exact customer name
    Search { name: String },
    /// Show the menu and its prices
    Menu,
}

pub fn parse_time(input: &str) -> Result<NaiveTime, String> {
    let input = input.trim();
    NaiveTime::parse_from_str(input, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M:%S"))
        .map_err(|_| format!("invalid time '{input}', expected HH:MM or HH:MM:SS"))
}

/// Runs one interaction cycle against the current order file.
pub async fn run(command: Commands, json: bool, state: &AppState) -> Result<()> {
    let query = &state.di_container.order_query;
    let command_service = &state.di_container.order_command;

    match command {
        Commands::Add {
            name,
            menu,
            quantity,
            time,
        } => {
            let req = CreateOrderRequest {
                customer_name: name,
                menu_item: menu,
                quantity,
                delivery_time: time,
            };
            report(command_service.create_order(&req).await, json, |order| {
                render_orders(std::slice::from_ref(order))
            })
        }
        Commands::Remove => report(command_service.remove_first_order().await, json, |order| {
            render_orders(std::slice::from_ref(order))
        }),
        Commands::List => report(query.find_all().await, json, |orders| render_orders(orders)),
        Commands::Nearest => report(query.nearest_delivery().await, json, |_| String::new()),
        Commands::Total => report(query.total_items().await, json, |_| String::new()),
        Commands::MenuTotals => report(query.menu_totals().await, json, render_menu_totals),
        Commands::Count => report(query.count_orders().await, json, |_| String::new()),
        Commands::Search { name } => {
            let req = SearchOrderRequest {
                customer_name: name,
            };
            report(query.search_by_name(&req).await, json, |orders| {
                render_orders(orders)
            })
        }
        Commands::Menu => report(query.find_menu().await, json, |items| render_menu(items)),
    }
}

fn report<T: Serialize>(
    result: Result<ApiResponse<T>, ServiceError>,
    json: bool,
    render: impl FnOnce(&T) -> String,
) -> Result<()> {
    let response = match result {
        Ok(response) => response,
        Err(err) if err.severity() == Severity::Warning => {
            if json {
                println!("{}", json!({ "status": Severity::Warning, "message": err.to_string() }));
            } else {
                eprintln!("warning: {err}");
            }
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if json {
        println!("{response}");
        return Ok(());
    }

    match response.status {
        Severity::Warning => eprintln!("warning: {}", response.message),
        _ => println!("{}", response.message),
    }

    let body = render(&response.data);
    if !body.is_empty() {
        println!("{body}");
    }

    Ok(())
}

pub fn render_orders(orders: &[OrderResponse]) -> String {
    if orders.is_empty() {
        return String::new();
    }

    let rows: Vec<[String; 6]> = orders
        .iter()
        .map(|o| {
            [
                o.no.to_string(),
                o.customer_name.clone(),
                o.menu_item.clone(),
                o.quantity.to_string(),
                o.delivery_at.clone(),
                o.total_price.to_string(),
            ]
        })
        .collect();

    render_table(
        &["No", "Customer", "Menu", "Qty", "Delivery", "Price"],
        &rows,
    )
}

pub fn render_menu_totals(totals: &BTreeMap<String, i64>) -> String {
    let rows: Vec<[String; 2]> = totals
        .iter()
        .map(|(menu, quantity)| [menu.clone(), quantity.to_string()])
        .collect();

    render_table(&["Menu", "Qty"], &rows)
}

pub fn render_menu(items: &[MenuItemResponse]) -> String {
    let rows: Vec<[String; 2]> = items
        .iter()
        .map(|item| [item.name.clone(), item.price.to_string()])
        .collect();

    render_table(&["Menu", "Price"], &rows)
}

fn table_line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

fn render_table<const N: usize>(headers: &[&str; N], rows: &[[String; N]]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(table_line(headers, &widths));
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-|-"),
    );
    for row in rows {
        out.push(table_line(row, &widths));
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("18:00"), Ok(NaiveTime::from_hms_opt(18, 0, 0).unwrap()));
        assert_eq!(parse_time("09:05:30"), Ok(NaiveTime::from_hms_opt(9, 5, 30).unwrap()));
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("six pm").is_err());
    }

    #[test]
    fn test_parse_add_command() {
        let cli = Cli::try_parse_from([
            "order-queue",
            "--file",
            "orders.csv",
            "add",
            "--name",
            "Ani",
            "--menu",
            "Nasi Goreng",
            "--quantity",
            "-2",
            "--time",
            "18:00",
        ])
        .unwrap();

        assert_eq!(cli.file, Some(PathBuf::from("orders.csv")));
        assert!(!cli.json);
        assert_eq!(
            cli.command,
            Commands::Add {
                name: "Ani".into(),
                menu: "Nasi Goreng".into(),
                quantity: -2,
                time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            }
        );
    }

    #[test]
    fn test_parse_query_commands() {
        let cli = Cli::try_parse_from(["order-queue", "menu-totals", "--json"]).unwrap();
        assert_eq!(cli.command, Commands::MenuTotals);
        assert!(cli.json);

        let cli = Cli::try_parse_from(["order-queue", "search", "Budi"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Search {
                name: "Budi".into()
            }
        );
    }

    #[test]
    fn test_render_menu_totals() {
        let mut totals = BTreeMap::new();
        totals.insert("Nasi Goreng".to_string(), 5);
        totals.insert("Mie Goreng".to_string(), 1);

        assert_eq!(
            render_menu_totals(&totals),
            "Menu        | Qty\n------------|----\nMie Goreng  | 1\nNasi Goreng | 5"
        );
    }

    #[test]
    fn test_render_orders_empty() {
        assert_eq!(render_orders(&[]), "");
    }
}
