use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
    Name,
    Department,
    Tenure,
    Level,
    Skills,
    Risk,
    DigitalLiteracy,
    CareerGoals,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employee::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Employee::Name).text().not_null())
                    .col(ColumnDef::new(Employee::Department).text().not_null())
                    .col(ColumnDef::new(Employee::Tenure).integer().not_null())
                    .col(ColumnDef::new(Employee::Level).integer().not_null())
                    .col(ColumnDef::new(Employee::Skills).json_binary().not_null())
                    .col(ColumnDef::new(Employee::Risk).text())
                    .col(
                        ColumnDef::new(Employee::DigitalLiteracy)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Employee::CareerGoals).text())
                    .col(
                        ColumnDef::new(Employee::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Employee::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employee_department")
                    .table(Employee::Table)
                    .col(Employee::Department)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employee::Table).if_exists().to_owned())
            .await
    }
}
