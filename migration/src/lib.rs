pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_services_table;
mod m20250301_000003_create_portfolios_table;
mod m20250301_000004_create_pesanan_table;
mod m20250301_000005_create_berita_table;
mod m20250301_000006_create_visitor_logs_table;
mod m20250322_000001_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_services_table::Migration),
            Box::new(m20250301_000003_create_portfolios_table::Migration),
            Box::new(m20250301_000004_create_pesanan_table::Migration),
            Box::new(m20250301_000005_create_berita_table::Migration),
            Box::new(m20250301_000006_create_visitor_logs_table::Migration),
            Box::new(m20250322_000001_add_indexes::Migration),
        ]
    }
}
