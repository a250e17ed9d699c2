use std::ops::{Deref, DerefMut};

use sqlx::{PgConnection, Pool, Postgres};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnBookQuery, DependOnIdCardQuery, DependOnRentalQuery, DependOnStudentQuery,
};
use kernel::interface::update::{
    DependOnBookModifier, DependOnIdCardModifier, DependOnRentalModifier, DependOnStudentModifier,
};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{book::*, rental::*, student::*};

mod book;
mod rental;
mod student;

static POSTGRES_URL: &str = "POSTGRES_URL";

pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        let pool = Pool::connect(&url).await.convert_error()?;
        tracing::debug!("postgres pool established");
        Ok(Self { pool })
    }
}

/// One database transaction per workflow invocation. Dropping it without
/// commit rolls back, which keeps aborted requests free of partial state.
pub struct PgTransaction(sqlx::Transaction<'static, Postgres>);

impl Deref for PgTransaction {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PgTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[async_trait::async_trait]
impl Transaction for PgTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}

#[async_trait::async_trait]
impl DatabaseConnection<PgTransaction> for PostgresDatabase {
    async fn transact(&self) -> error_stack::Result<PgTransaction, KernelError> {
        let transaction = self.pool.begin().await.convert_error()?;
        Ok(PgTransaction(transaction))
    }
}

impl DependOnBookQuery<PgTransaction> for PostgresDatabase {
    type BookQuery = PostgresBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &PostgresBookRepository
    }
}

impl DependOnBookModifier<PgTransaction> for PostgresDatabase {
    type BookModifier = PostgresBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &PostgresBookRepository
    }
}

impl DependOnStudentQuery<PgTransaction> for PostgresDatabase {
    type StudentQuery = PostgresStudentRepository;
    fn student_query(&self) -> &Self::StudentQuery {
        &PostgresStudentRepository
    }
}

impl DependOnStudentModifier<PgTransaction> for PostgresDatabase {
    type StudentModifier = PostgresStudentRepository;
    fn student_modifier(&self) -> &Self::StudentModifier {
        &PostgresStudentRepository
    }
}

impl DependOnIdCardQuery<PgTransaction> for PostgresDatabase {
    type IdCardQuery = PostgresIdCardRepository;
    fn id_card_query(&self) -> &Self::IdCardQuery {
        &PostgresIdCardRepository
    }
}

impl DependOnIdCardModifier<PgTransaction> for PostgresDatabase {
    type IdCardModifier = PostgresIdCardRepository;
    fn id_card_modifier(&self) -> &Self::IdCardModifier {
        &PostgresIdCardRepository
    }
}

impl DependOnRentalQuery<PgTransaction> for PostgresDatabase {
    type RentalQuery = PostgresRentalRepository;
    fn rental_query(&self) -> &Self::RentalQuery {
        &PostgresRentalRepository
    }
}

impl DependOnRentalModifier<PgTransaction> for PostgresDatabase {
    type RentalModifier = PostgresRentalRepository;
    fn rental_modifier(&self) -> &Self::RentalModifier {
        &PostgresRentalRepository
    }
}
