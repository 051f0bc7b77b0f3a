//! # Bouticlick CLI Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bouticlick Storefront                            │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  main.rs ────► parse args, start logging                         │  │
//! │  │                                                                  │  │
//! │  │  lib.rs ─────► resolve config, open storage, build state        │  │
//! │  │                                                                  │  │
//! │  │  cli.rs ─────► dispatch to commands/, render via output.rs      │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                         Local Storage                            │  │
//! │  │  storage.json  { "cart": "[...]", "user": "{...}" }              │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use clap::Parser;

use bouticlick_storefront::cli::Cli;
use bouticlick_storefront::output::Output;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    bouticlick_storefront::init_tracing(cli.verbose)?;

    let out = Output::new(cli.json);
    if let Err(e) = bouticlick_storefront::run(cli, &out) {
        out.error(&e);
        std::process::exit(1);
    }

    Ok(())
}
