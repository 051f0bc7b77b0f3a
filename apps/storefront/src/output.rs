//! Output formatting for the CLI.
//!
//! Human-readable text goes to stdout; with `--json` only the command's
//! response is printed, as pretty JSON. Errors always go to stderr.

use serde::Serialize;

use bouticlick_core::{CartSnapshot, Money, Order, User};

use crate::commands::cart::CartResponse;
use crate::commands::product::ProductDto;
use crate::error::ApiError;
use crate::state::AppConfig;

/// Output handler for CLI messages.
#[derive(Debug, Clone)]
pub struct Output {
    json: bool,
    config: AppConfig,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Output {
            json,
            config: AppConfig::ephemeral(),
        }
    }

    /// Uses the configured currency symbol for amounts.
    pub fn with_config(mut self, config: &AppConfig) -> Self {
        self.config = config.clone();
        self
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Formats an amount with the configured currency symbol.
    pub fn money(&self, amount: Money) -> String {
        self.config.format_currency(amount)
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{}", msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("✓ {}", msg);
    }

    /// Print an error message.
    pub fn error(&self, err: &ApiError) {
        if self.json {
            if let Ok(json) = serde_json::to_string(err) {
                eprintln!("{}", json);
            }
            return;
        }
        eprintln!("✗ {}", err.message);
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}\n{}", msg, "─".repeat(msg.chars().count()));
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", key, value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  • {}", item);
    }

    /// Print JSON output.
    pub fn json<T: Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Prints `value` as JSON in JSON mode, otherwise runs `text`.
    pub fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce(&Self)) {
        if self.json {
            self.json(value);
        } else {
            text(self);
        }
    }

    // =========================================================================
    // Storefront Views
    // =========================================================================

    /// The navbar cart badge, printed after each cart change.
    pub fn badge(&self, snapshot: &CartSnapshot) {
        if self.json {
            return;
        }
        println!("🛒 {} ({})", snapshot.item_count, self.money(snapshot.total));
    }

    pub fn product(&self, p: &ProductDto) {
        let stock = if p.in_stock {
            format!("{} in stock", p.stock)
        } else {
            "Out of Stock".to_string()
        };
        self.list_item(&format!(
            "[{}] {} - {}  {}  {}  ({})",
            p.id,
            p.name,
            self.money(p.price),
            stars(p.full_stars),
            stock,
            p.category
        ));
    }

    pub fn cart(&self, cart: &CartResponse) {
        if cart.items.is_empty() {
            self.info("Your cart is empty.");
            return;
        }

        self.header(&format!("Shopping Cart ({} items)", cart.item_count));
        for item in &cart.items {
            self.list_item(&format!(
                "[{}] {}  {} x {}  (max {})  {}",
                item.id,
                item.name,
                item.quantity,
                self.money(item.price),
                item.stock,
                self.money(item.line_total())
            ));
        }
        self.kv("Total", &self.money(cart.total));
    }

    pub fn user(&self, user: Option<&User>) {
        match user {
            Some(u) => {
                self.kv("Name", &u.name);
                self.kv("Email", &u.email);
                self.kv("Role", if u.is_admin() { "admin" } else { "user" });
            }
            None => self.info("Not signed in."),
        }
    }

    pub fn order(&self, order: &Order) {
        self.header(&format!(
            "Order #{}  {}  {}",
            order.number,
            order.date.format("%Y-%m-%d"),
            order.status.label()
        ));
        self.info(&format!("  {}", order.status.description()));
        for line in &order.items {
            self.list_item(&format!(
                "{} x {}  {}",
                line.name,
                line.quantity,
                self.money(line.line_total())
            ));
        }
        self.kv("Total", &self.money(order.total));
    }
}

fn stars(full: u8) -> String {
    let full = usize::from(full.min(5));
    format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
}
