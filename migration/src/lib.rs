pub use sea_orm_migration::prelude::*;

mod m20210501_000001_create_assessment_table;
mod m20210501_000002_create_learning_activity_table;
mod m20210502_000003_create_register_user_table;
mod m20210502_000004_create_user_activity_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20210501_000001_create_assessment_table::Migration),
            Box::new(m20210501_000002_create_learning_activity_table::Migration),
            Box::new(m20210502_000003_create_register_user_table::Migration),
            Box::new(m20210502_000004_create_user_activity_table::Migration),
        ]
    }
}
