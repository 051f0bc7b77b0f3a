//! Command-line interface: argument definitions and dispatch.
//!
//! Commands:
//! - `bouticlick products` - Browse the catalog
//! - `bouticlick cart` - Show or change the cart
//! - `bouticlick login` / `register` / `logout` / `whoami` - Session
//! - `bouticlick checkout` - Place an order
//! - `bouticlick orders` - Order history
//! - `bouticlick config` - Show configuration

use std::path::PathBuf;

use bouticlick_core::Money;
use clap::{Args, Parser, Subcommand};

use crate::commands::{auth, cart, config, orders, product};
use crate::error::ApiError;
use crate::output::Output;
use crate::state::{AppConfig, AppState};

/// Bouticlick - a small storefront in your terminal
#[derive(Debug, Parser)]
#[command(name = "bouticlick")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding saved cart and session
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Keep everything in memory for this run
    #[arg(long, global = true, conflicts_with = "data_dir")]
    pub ephemeral: bool,

    /// Product catalog JSON file (defaults to the demo catalog)
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the catalog
    Products(ProductsArgs),

    /// Show or change the cart
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },

    /// Sign in with email and password
    Login { email: String, password: String },

    /// Create an account and sign in
    Register {
        name: String,
        email: String,
        password: String,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Place an order for everything in the cart
    Checkout,

    /// Show order history, or one order by number
    Orders { number: Option<String> },

    /// Show configuration
    Config,
}

#[derive(Debug, Args)]
pub struct ProductsArgs {
    /// Show a single product
    #[arg(long)]
    pub id: Option<String>,

    /// Only this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Search names and categories
    #[arg(short, long)]
    pub search: Option<String>,

    /// Highest price to show, e.g. 49.99
    #[arg(long, value_name = "PRICE", value_parser = parse_price)]
    pub max_price: Option<Money>,

    /// List category names instead of products
    #[arg(long, conflicts_with_all = ["id", "category", "search", "max_price"])]
    pub categories: bool,
}

#[derive(Debug, Subcommand)]
pub enum CartAction {
    /// Show the cart (default)
    Show,

    /// Add one unit of a product
    Add { product_id: String },

    /// Set the quantity of a product (0 removes it)
    #[command(allow_negative_numbers = true)]
    Update { product_id: String, quantity: i64 },

    /// Remove a product
    Remove { product_id: String },

    /// Empty the cart
    Clear,
}

impl Cli {
    /// Environment configuration with command-line overrides applied.
    pub fn app_config(&self) -> AppConfig {
        let mut config = AppConfig::from_env();
        if self.ephemeral {
            config.data_dir = None;
        } else if let Some(dir) = &self.data_dir {
            config.data_dir = Some(dir.clone());
        }
        if let Some(path) = &self.catalog {
            config.catalog_path = Some(path.clone());
        }
        config
    }
}

fn parse_price(input: &str) -> Result<Money, String> {
    Money::from_decimal_str(input).map_err(|e| e.to_string())
}

/// Runs one command against `state`, printing through `out`.
pub fn execute(command: Command, state: &AppState, out: &Output) -> Result<(), ApiError> {
    match command {
        Command::Products(args) => products(args, state, out),
        Command::Cart { action } => cart_action(action.unwrap_or(CartAction::Show), state, out),
        Command::Login { email, password } => {
            let session = auth::login(&state.auth, &email, &password)?;
            out.emit(&session, |o| {
                if let Some(user) = &session.user {
                    o.success(&format!("Signed in as {}", user.name));
                }
            });
            Ok(())
        }
        Command::Register {
            name,
            email,
            password,
        } => {
            let session = auth::register(&state.auth, &name, &email, &password)?;
            out.emit(&session, |o| {
                if let Some(user) = &session.user {
                    o.success(&format!("Welcome, {}! Your account is ready.", user.name));
                }
            });
            Ok(())
        }
        Command::Logout => {
            let session = auth::logout(&state.auth);
            out.emit(&session, |o| o.success("Signed out"));
            Ok(())
        }
        Command::Whoami => {
            let session = auth::whoami(&state.auth);
            out.emit(&session, |o| o.user(session.user.as_ref()));
            Ok(())
        }
        Command::Checkout => {
            let badge = out.clone();
            let subscription = state.cart.subscribe(move |snap| badge.badge(snap));
            let result = orders::checkout(&state.auth, &state.cart, &state.orders);
            state.cart.unsubscribe(subscription);

            let confirmation = result?;
            out.emit(&confirmation, |o| {
                o.success(&confirmation.message);
                o.order(&confirmation.order);
            });
            Ok(())
        }
        Command::Orders { number: Some(number) } => {
            let order = orders::get_order(&state.auth, &state.orders, &number)?;
            out.emit(&order, |o| o.order(&order));
            Ok(())
        }
        Command::Orders { number: None } => {
            let history = orders::list_orders(&state.auth, &state.orders)?;
            out.emit(&history, |o| {
                o.header("My Orders");
                for order in &history.orders {
                    o.order(order);
                }
            });
            Ok(())
        }
        Command::Config => {
            let config = config::get_config(&state.config);
            out.emit(&config, |o| {
                o.kv("Store", &config.store_name);
                o.kv("Currency", &config.currency_symbol);
                let dir = config
                    .data_dir
                    .as_ref()
                    .map(|d| d.display().to_string())
                    .unwrap_or_else(|| "(in memory)".to_string());
                o.kv("Data dir", &dir);
                let catalog = config
                    .catalog_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(demo products)".to_string());
                o.kv("Catalog", &catalog);
            });
            Ok(())
        }
    }
}

fn products(args: ProductsArgs, state: &AppState, out: &Output) -> Result<(), ApiError> {
    if args.categories {
        let categories = product::list_categories(&state.catalog);
        out.emit(&categories, |o| {
            for c in &categories {
                o.list_item(c);
            }
        });
        return Ok(());
    }

    if let Some(id) = args.id {
        let dto = product::get_product(&state.catalog, &id)?;
        out.emit(&dto, |o| o.product(&dto));
        return Ok(());
    }

    let list = product::list_products(
        &state.catalog,
        args.category.as_deref(),
        args.search.as_deref(),
        args.max_price,
    );
    out.emit(&list, |o| {
        o.header(&format!("{} Products", state.config.store_name));
        if list.is_empty() {
            o.info("No products match.");
        }
        for p in &list {
            o.product(p);
        }
    });
    Ok(())
}

fn cart_action(action: CartAction, state: &AppState, out: &Output) -> Result<(), ApiError> {
    if let CartAction::Show = action {
        let response = cart::get_cart(&state.cart);
        out.emit(&response, |o| o.cart(&response));
        return Ok(());
    }

    // The navbar badge follows every change, like the web header does.
    let badge = out.clone();
    let subscription = state.cart.subscribe(move |snap| badge.badge(snap));

    let result = match action {
        CartAction::Add { product_id } => cart::add_to_cart(&state.catalog, &state.cart, &product_id),
        CartAction::Update {
            product_id,
            quantity,
        } => Ok(cart::update_cart_item(&state.cart, &product_id, quantity)),
        CartAction::Remove { product_id } => Ok(cart::remove_from_cart(&state.cart, &product_id)),
        CartAction::Clear => Ok(cart::clear_cart(&state.cart)),
        CartAction::Show => Ok(cart::get_cart(&state.cart)),
    };
    state.cart.unsubscribe(subscription);

    let response = result?;
    out.emit(&response, |o| o.cart(&response));
    Ok(())
}
