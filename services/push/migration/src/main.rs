use sea_orm_migration::prelude::*;

use navette_push_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
