//! Schema migration CLI for the items database.
//!
//! Reads `DATABASE_URL` like the API does, e.g.
//! `DATABASE_URL=sqlite://items.db?mode=rwc cargo run -p migration -- up`.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
