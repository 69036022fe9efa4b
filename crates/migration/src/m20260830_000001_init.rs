//! Initial schema migration - creates all tables from scratch.
//!
//! The schema groups into four layers:
//!
//! - identity: `users`, `households`, `household_members`
//! - infrastructure: `banks`, `accounts`, `sources`, the three
//!   category vocabularies
//! - transactions: `expenses`, `incomes`, `savings` + `savings_logs`,
//!   `investments` + `investments_logs`
//! - derived: `financial_summaries`
//!
//! All primary keys are auto-increment integers. Enum-valued columns
//! (role, kind, action, currency) are stored as their ASCII codes.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Name,
    Surname1,
    Surname2,
    Dni,
    Email,
    Telephone,
    Password,
    Active,
    Role,
}

#[derive(Iden)]
enum Households {
    Table,
    Id,
    Name,
    Address,
    Active,
}

#[derive(Iden)]
enum HouseholdMembers {
    Table,
    Id,
    Role,
    Active,
    HouseholdId,
    UserId,
}

#[derive(Iden)]
enum Banks {
    Table,
    Id,
    Name,
    Description,
    Active,
}

#[derive(Iden)]
enum Accounts {
    Table,
    Id,
    Name,
    Description,
    Iban,
    Balance,
    Active,
    UserId,
    BankId,
}

#[derive(Iden)]
enum Sources {
    Table,
    Id,
    Name,
    Description,
    Kind,
    Active,
}

#[derive(Iden)]
enum ExpensesCategories {
    Table,
    Id,
    Name,
    Description,
    Active,
}

#[derive(Iden)]
enum IncomesCategories {
    Table,
    Id,
    Name,
    Description,
    Active,
}

#[derive(Iden)]
enum InvestmentsCategories {
    Table,
    Id,
    Name,
    Description,
    Active,
}

#[derive(Iden)]
enum Expenses {
    Table,
    Id,
    Name,
    Description,
    Amount,
    Date,
    Currency,
    UserId,
    SourceId,
    CategoryId,
    AccountId,
}

#[derive(Iden)]
enum Incomes {
    Table,
    Id,
    Name,
    Description,
    Amount,
    Date,
    Currency,
    UserId,
    SourceId,
    CategoryId,
    AccountId,
}

#[derive(Iden)]
enum Savings {
    Table,
    Id,
    Description,
    Amount,
    Date,
    Currency,
    UserId,
    AccountId,
}

#[derive(Iden)]
enum SavingsLogs {
    Table,
    Id,
    Date,
    Amount,
    TotalAmount,
    Note,
    SavingId,
    SourceId,
}

#[derive(Iden)]
enum Investments {
    Table,
    Id,
    Name,
    Date,
    Currency,
    UserId,
    AccountId,
    CategoryId,
}

#[derive(Iden)]
enum InvestmentsLogs {
    Table,
    Id,
    Date,
    CurrentValue,
    PricePerUnit,
    UnitsBought,
    Action,
    Note,
    InvestmentId,
}

#[derive(Iden)]
enum FinancialSummaries {
    Table,
    Id,
    Date,
    TotalIncome,
    TotalExpenses,
    TotalSavings,
    TotalInvestments,
    NetWorth,
    UserId,
    HouseholdId,
}

fn pk(name: impl IntoIden) -> ColumnDef {
    let mut col = ColumnDef::new(name);
    col.integer().not_null().auto_increment().primary_key();
    col
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Users
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk(Users::Id))
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Surname1).string().not_null())
                    .col(ColumnDef::new(Users::Surname2).string())
                    .col(ColumnDef::new(Users::Dni).string().not_null())
                    .col(ColumnDef::new(Users::Email).string())
                    .col(ColumnDef::new(Users::Telephone).string())
                    .col(ColumnDef::new(Users::Password).string().not_null())
                    .col(
                        ColumnDef::new(Users::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Users::Role)
                            .string()
                            .not_null()
                            .default("user"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-users-dni-unique")
                    .table(Users::Table)
                    .col(Users::Dni)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 2. Households
        manager
            .create_table(
                Table::create()
                    .table(Households::Table)
                    .if_not_exists()
                    .col(pk(Households::Id))
                    .col(ColumnDef::new(Households::Name).string().not_null())
                    .col(ColumnDef::new(Households::Address).string())
                    .col(
                        ColumnDef::new(Households::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // 3. Household members
        manager
            .create_table(
                Table::create()
                    .table(HouseholdMembers::Table)
                    .if_not_exists()
                    .col(pk(HouseholdMembers::Id))
                    .col(ColumnDef::new(HouseholdMembers::Role).string().not_null())
                    .col(
                        ColumnDef::new(HouseholdMembers::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(HouseholdMembers::HouseholdId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HouseholdMembers::UserId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-household_members-household_id")
                            .from(HouseholdMembers::Table, HouseholdMembers::HouseholdId)
                            .to(Households::Table, Households::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-household_members-user_id")
                            .from(HouseholdMembers::Table, HouseholdMembers::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-household_members-household_id-user_id-unique")
                    .table(HouseholdMembers::Table)
                    .col(HouseholdMembers::HouseholdId)
                    .col(HouseholdMembers::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 4. Banks
        manager
            .create_table(
                Table::create()
                    .table(Banks::Table)
                    .if_not_exists()
                    .col(pk(Banks::Id))
                    .col(ColumnDef::new(Banks::Name).string().not_null())
                    .col(ColumnDef::new(Banks::Description).string())
                    .col(
                        ColumnDef::new(Banks::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // 5. Accounts
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(pk(Accounts::Id))
                    .col(ColumnDef::new(Accounts::Name).string().not_null())
                    .col(ColumnDef::new(Accounts::Description).string())
                    .col(ColumnDef::new(Accounts::Iban).string().not_null())
                    .col(ColumnDef::new(Accounts::Balance).double().not_null())
                    .col(
                        ColumnDef::new(Accounts::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Accounts::UserId).integer().not_null())
                    .col(ColumnDef::new(Accounts::BankId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-accounts-user_id")
                            .from(Accounts::Table, Accounts::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-accounts-bank_id")
                            .from(Accounts::Table, Accounts::BankId)
                            .to(Banks::Table, Banks::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 6. Sources
        manager
            .create_table(
                Table::create()
                    .table(Sources::Table)
                    .if_not_exists()
                    .col(pk(Sources::Id))
                    .col(ColumnDef::new(Sources::Name).string().not_null())
                    .col(ColumnDef::new(Sources::Description).string())
                    .col(
                        ColumnDef::new(Sources::Kind)
                            .string()
                            .not_null()
                            .default("other"),
                    )
                    .col(
                        ColumnDef::new(Sources::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // 7-9. Category vocabularies
        manager
            .create_table(
                Table::create()
                    .table(ExpensesCategories::Table)
                    .if_not_exists()
                    .col(pk(ExpensesCategories::Id))
                    .col(ColumnDef::new(ExpensesCategories::Name).string().not_null())
                    .col(ColumnDef::new(ExpensesCategories::Description).string())
                    .col(
                        ColumnDef::new(ExpensesCategories::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(IncomesCategories::Table)
                    .if_not_exists()
                    .col(pk(IncomesCategories::Id))
                    .col(ColumnDef::new(IncomesCategories::Name).string().not_null())
                    .col(ColumnDef::new(IncomesCategories::Description).string())
                    .col(
                        ColumnDef::new(IncomesCategories::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InvestmentsCategories::Table)
                    .if_not_exists()
                    .col(pk(InvestmentsCategories::Id))
                    .col(
                        ColumnDef::new(InvestmentsCategories::Name)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(InvestmentsCategories::Description).string())
                    .col(
                        ColumnDef::new(InvestmentsCategories::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // 10. Expenses
        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(pk(Expenses::Id))
                    .col(ColumnDef::new(Expenses::Name).string().not_null())
                    .col(ColumnDef::new(Expenses::Description).string())
                    .col(ColumnDef::new(Expenses::Amount).double().not_null())
                    .col(ColumnDef::new(Expenses::Date).date().not_null())
                    .col(
                        ColumnDef::new(Expenses::Currency)
                            .string()
                            .not_null()
                            .default("EUR"),
                    )
                    .col(ColumnDef::new(Expenses::UserId).integer().not_null())
                    .col(ColumnDef::new(Expenses::SourceId).integer().not_null())
                    .col(ColumnDef::new(Expenses::CategoryId).integer().not_null())
                    .col(ColumnDef::new(Expenses::AccountId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-expenses-user_id")
                            .from(Expenses::Table, Expenses::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-expenses-source_id")
                            .from(Expenses::Table, Expenses::SourceId)
                            .to(Sources::Table, Sources::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-expenses-category_id")
                            .from(Expenses::Table, Expenses::CategoryId)
                            .to(ExpensesCategories::Table, ExpensesCategories::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-expenses-account_id")
                            .from(Expenses::Table, Expenses::AccountId)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-expenses-user_id-date")
                    .table(Expenses::Table)
                    .col(Expenses::UserId)
                    .col(Expenses::Date)
                    .to_owned(),
            )
            .await?;

        // 11. Incomes
        manager
            .create_table(
                Table::create()
                    .table(Incomes::Table)
                    .if_not_exists()
                    .col(pk(Incomes::Id))
                    .col(ColumnDef::new(Incomes::Name).string().not_null())
                    .col(ColumnDef::new(Incomes::Description).string())
                    .col(ColumnDef::new(Incomes::Amount).double().not_null())
                    .col(ColumnDef::new(Incomes::Date).date().not_null())
                    .col(
                        ColumnDef::new(Incomes::Currency)
                            .string()
                            .not_null()
                            .default("EUR"),
                    )
                    .col(ColumnDef::new(Incomes::UserId).integer().not_null())
                    .col(ColumnDef::new(Incomes::SourceId).integer().not_null())
                    .col(ColumnDef::new(Incomes::CategoryId).integer().not_null())
                    .col(ColumnDef::new(Incomes::AccountId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-incomes-user_id")
                            .from(Incomes::Table, Incomes::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-incomes-source_id")
                            .from(Incomes::Table, Incomes::SourceId)
                            .to(Sources::Table, Sources::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-incomes-category_id")
                            .from(Incomes::Table, Incomes::CategoryId)
                            .to(IncomesCategories::Table, IncomesCategories::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-incomes-account_id")
                            .from(Incomes::Table, Incomes::AccountId)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-incomes-user_id-date")
                    .table(Incomes::Table)
                    .col(Incomes::UserId)
                    .col(Incomes::Date)
                    .to_owned(),
            )
            .await?;

        // 12. Savings
        manager
            .create_table(
                Table::create()
                    .table(Savings::Table)
                    .if_not_exists()
                    .col(pk(Savings::Id))
                    .col(ColumnDef::new(Savings::Description).string())
                    .col(ColumnDef::new(Savings::Amount).double().not_null())
                    .col(ColumnDef::new(Savings::Date).date().not_null())
                    .col(
                        ColumnDef::new(Savings::Currency)
                            .string()
                            .not_null()
                            .default("EUR"),
                    )
                    .col(ColumnDef::new(Savings::UserId).integer().not_null())
                    .col(ColumnDef::new(Savings::AccountId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-savings-user_id")
                            .from(Savings::Table, Savings::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-savings-account_id")
                            .from(Savings::Table, Savings::AccountId)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 13. Savings logs
        manager
            .create_table(
                Table::create()
                    .table(SavingsLogs::Table)
                    .if_not_exists()
                    .col(pk(SavingsLogs::Id))
                    .col(ColumnDef::new(SavingsLogs::Date).date().not_null())
                    .col(ColumnDef::new(SavingsLogs::Amount).double().not_null())
                    .col(ColumnDef::new(SavingsLogs::TotalAmount).double())
                    .col(ColumnDef::new(SavingsLogs::Note).string())
                    .col(ColumnDef::new(SavingsLogs::SavingId).integer().not_null())
                    .col(ColumnDef::new(SavingsLogs::SourceId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-savings_logs-saving_id")
                            .from(SavingsLogs::Table, SavingsLogs::SavingId)
                            .to(Savings::Table, Savings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-savings_logs-source_id")
                            .from(SavingsLogs::Table, SavingsLogs::SourceId)
                            .to(Sources::Table, Sources::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 14. Investments
        manager
            .create_table(
                Table::create()
                    .table(Investments::Table)
                    .if_not_exists()
                    .col(pk(Investments::Id))
                    .col(ColumnDef::new(Investments::Name).string())
                    .col(ColumnDef::new(Investments::Date).date().not_null())
                    .col(
                        ColumnDef::new(Investments::Currency)
                            .string()
                            .not_null()
                            .default("EUR"),
                    )
                    .col(ColumnDef::new(Investments::UserId).integer().not_null())
                    .col(ColumnDef::new(Investments::AccountId).integer().not_null())
                    .col(
                        ColumnDef::new(Investments::CategoryId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-investments-user_id")
                            .from(Investments::Table, Investments::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-investments-account_id")
                            .from(Investments::Table, Investments::AccountId)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-investments-category_id")
                            .from(Investments::Table, Investments::CategoryId)
                            .to(InvestmentsCategories::Table, InvestmentsCategories::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 15. Investments logs
        manager
            .create_table(
                Table::create()
                    .table(InvestmentsLogs::Table)
                    .if_not_exists()
                    .col(pk(InvestmentsLogs::Id))
                    .col(ColumnDef::new(InvestmentsLogs::Date).date().not_null())
                    .col(
                        ColumnDef::new(InvestmentsLogs::CurrentValue)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(InvestmentsLogs::PricePerUnit).double())
                    .col(ColumnDef::new(InvestmentsLogs::UnitsBought).double())
                    .col(
                        ColumnDef::new(InvestmentsLogs::Action)
                            .string()
                            .not_null()
                            .default("hold"),
                    )
                    .col(ColumnDef::new(InvestmentsLogs::Note).string())
                    .col(
                        ColumnDef::new(InvestmentsLogs::InvestmentId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-investments_logs-investment_id")
                            .from(InvestmentsLogs::Table, InvestmentsLogs::InvestmentId)
                            .to(Investments::Table, Investments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 16. Financial summaries
        manager
            .create_table(
                Table::create()
                    .table(FinancialSummaries::Table)
                    .if_not_exists()
                    .col(pk(FinancialSummaries::Id))
                    .col(ColumnDef::new(FinancialSummaries::Date).date().not_null())
                    .col(
                        ColumnDef::new(FinancialSummaries::TotalIncome)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FinancialSummaries::TotalExpenses)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FinancialSummaries::TotalSavings)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FinancialSummaries::TotalInvestments)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FinancialSummaries::NetWorth)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FinancialSummaries::UserId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FinancialSummaries::HouseholdId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-financial_summaries-user_id")
                            .from(FinancialSummaries::Table, FinancialSummaries::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-financial_summaries-household_id")
                            .from(FinancialSummaries::Table, FinancialSummaries::HouseholdId)
                            .to(Households::Table, Households::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FinancialSummaries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(InvestmentsLogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Investments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SavingsLogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Savings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Incomes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Expenses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(InvestmentsCategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(IncomesCategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ExpensesCategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sources::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Banks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HouseholdMembers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Households::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}
