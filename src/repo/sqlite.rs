use crate::models;
use async_trait::async_trait;
use sqlx::{FromRow, Row, SqlitePool, sqlite::SqliteRow};

use super::{
    AppointmentRepo, ClientRepo, InvoiceRepo, MedicalRecordRepo, PetRepo, ReviewRepo, UserRepo,
    sqlite_queries,
};

#[derive(Clone)]
pub struct SqlxSqliteRepo {
    pub db_pool: SqlitePool,
}

impl SqlxSqliteRepo {
    /// Creates the seven tables if missing. Idempotent, runs at startup.
    pub async fn init_schema(&self) -> anyhow::Result<()> {
        let mut transaction = self.db_pool.begin().await?;

        for statement in sqlite_queries::SCHEMA_STATEMENTS {
            sqlx::query(statement).execute(&mut *transaction).await?;
        }

        transaction.commit().await?;
        Ok(())
    }
}

impl FromRow<'_, SqliteRow> for models::client::Client {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::pet::Pet {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            species: row.try_get("species")?,
            breed: row.try_get("breed")?,
            age: row.try_get("age")?,
            client_id: row.try_get("client_id")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::appointment::Appointment {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            pet_id: row.try_get("pet_id")?,
            date: row.try_get("date")?,
            reason: row.try_get("reason")?,
            status: serde_json::from_str::<models::appointment::AppointmentStatus>(&format!(
                "\"{}\"",
                row.try_get::<String, &str>("status")?
            ))
            .unwrap_or_default(),
        })
    }
}

impl FromRow<'_, SqliteRow> for models::medical_record::MedicalHistoryEntry {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            record_id: row.try_get("record_id")?,
            date: row.try_get("date")?,
            reason: row.try_get("reason")?,
            diagnosis: row.try_get("diagnosis")?,
            treatment: row.try_get("treatment")?,
            notes: row.try_get("notes")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::invoice::Invoice {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            client_id: row.try_get("client_id")?,
            date: row.try_get("date")?,
            total_amount: row.try_get("total_amount")?,
            status: serde_json::from_str::<models::invoice::InvoiceStatus>(&format!(
                "\"{}\"",
                row.try_get::<String, &str>("status")?
            ))
            .unwrap_or_default(),
        })
    }
}

impl FromRow<'_, SqliteRow> for models::review::Review {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            client_id: row.try_get("client_id")?,
            rating: row.try_get("rating")?,
            comment: row.try_get("comment")?,
            date: row.try_get("review_date")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::user::User {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            password_hash: row.try_get("password_hash")?,
            role: row.try_get("role")?,
        })
    }
}

#[async_trait]
impl ClientRepo for SqlxSqliteRepo {
    async fn create(
        &self,
        client: &models::client::Client,
    ) -> anyhow::Result<models::client::Client> {
        let mut transaction = self.db_pool.begin().await?;

        let client_id = sqlx::query(sqlite_queries::QUERY_INSERT_CLIENT)
            .bind(&client.name)
            .bind(&client.email)
            .bind(&client.phone)
            .execute(&mut *transaction)
            .await?
            .last_insert_rowid();

        transaction.commit().await?;

        Ok(models::client::Client {
            id: client_id,
            ..client.clone()
        })
    }

    async fn get_all(&self) -> anyhow::Result<Vec<models::client::Client>> {
        Ok(
            sqlx::query_as::<_, models::client::Client>(sqlite_queries::QUERY_GET_ALL_CLIENTS)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn get_by_id(&self, client_id: i64) -> anyhow::Result<Option<models::client::Client>> {
        Ok(
            sqlx::query_as::<_, models::client::Client>(sqlite_queries::QUERY_GET_CLIENT_BY_ID)
                .bind(client_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn update(&self, client: &models::client::Client) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_UPDATE_CLIENT)
            .bind(client.id)
            .bind(&client.name)
            .bind(&client.email)
            .bind(&client.phone)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn delete(&self, client_id: i64) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_DELETE_CLIENT)
            .bind(client_id)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }
}

#[async_trait]
impl PetRepo for SqlxSqliteRepo {
    async fn create(&self, pet: &models::pet::Pet) -> anyhow::Result<models::pet::Pet> {
        let mut transaction = self.db_pool.begin().await?;

        let pet_id = sqlx::query(sqlite_queries::QUERY_INSERT_PET)
            .bind(&pet.name)
            .bind(&pet.species)
            .bind(&pet.breed)
            .bind(pet.age)
            .bind(pet.client_id)
            .execute(&mut *transaction)
            .await?
            .last_insert_rowid();

        transaction.commit().await?;

        Ok(models::pet::Pet {
            id: pet_id,
            ..pet.clone()
        })
    }

    async fn get_all(&self) -> anyhow::Result<Vec<models::pet::Pet>> {
        Ok(
            sqlx::query_as::<_, models::pet::Pet>(sqlite_queries::QUERY_GET_ALL_PETS)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn get_by_client(&self, client_id: i64) -> anyhow::Result<Vec<models::pet::Pet>> {
        Ok(
            sqlx::query_as::<_, models::pet::Pet>(sqlite_queries::QUERY_GET_PETS_BY_CLIENT)
                .bind(client_id)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn get_by_id(&self, pet_id: i64) -> anyhow::Result<Option<models::pet::Pet>> {
        Ok(
            sqlx::query_as::<_, models::pet::Pet>(sqlite_queries::QUERY_GET_PET_BY_ID)
                .bind(pet_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn update(&self, pet: &models::pet::Pet) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_UPDATE_PET)
            .bind(pet.id)
            .bind(&pet.name)
            .bind(&pet.species)
            .bind(&pet.breed)
            .bind(pet.age)
            .bind(pet.client_id)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn delete(&self, pet_id: i64) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_DELETE_PET)
            .bind(pet_id)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }
}

#[async_trait]
impl AppointmentRepo for SqlxSqliteRepo {
    async fn create(
        &self,
        appointment: &models::appointment::Appointment,
    ) -> anyhow::Result<models::appointment::Appointment> {
        let mut transaction = self.db_pool.begin().await?;

        let appointment_id = sqlx::query(sqlite_queries::QUERY_INSERT_APPOINTMENT)
            .bind(appointment.pet_id)
            .bind(appointment.date)
            .bind(&appointment.reason)
            .bind(appointment.status.to_string())
            .execute(&mut *transaction)
            .await?
            .last_insert_rowid();

        transaction.commit().await?;

        Ok(models::appointment::Appointment {
            id: appointment_id,
            ..appointment.clone()
        })
    }

    async fn get_all(&self) -> anyhow::Result<Vec<models::appointment::Appointment>> {
        Ok(sqlx::query_as::<_, models::appointment::Appointment>(
            sqlite_queries::QUERY_GET_ALL_APPOINTMENTS,
        )
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn get_by_id(
        &self,
        appointment_id: i64,
    ) -> anyhow::Result<Option<models::appointment::Appointment>> {
        Ok(sqlx::query_as::<_, models::appointment::Appointment>(
            sqlite_queries::QUERY_GET_APPOINTMENT_BY_ID,
        )
        .bind(appointment_id)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn update(
        &self,
        appointment: &models::appointment::Appointment,
    ) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_UPDATE_APPOINTMENT)
            .bind(appointment.id)
            .bind(appointment.pet_id)
            .bind(appointment.date)
            .bind(&appointment.reason)
            .bind(appointment.status.to_string())
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn delete(&self, appointment_id: i64) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_DELETE_APPOINTMENT)
            .bind(appointment_id)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }
}

#[async_trait]
impl MedicalRecordRepo for SqlxSqliteRepo {
    async fn create(
        &self,
        record: &models::medical_record::MedicalRecord,
    ) -> anyhow::Result<models::medical_record::MedicalRecord> {
        let mut transaction = self.db_pool.begin().await?;

        let record_id = sqlx::query(sqlite_queries::QUERY_INSERT_MEDICAL_RECORD)
            .bind(record.appointment_id)
            .bind(&record.diagnosis)
            .bind(&record.treatment)
            .bind(&record.notes)
            .execute(&mut *transaction)
            .await?
            .last_insert_rowid();

        transaction.commit().await?;

        Ok(models::medical_record::MedicalRecord {
            id: record_id,
            ..record.clone()
        })
    }

    async fn get_history_by_pet(
        &self,
        pet_id: i64,
    ) -> anyhow::Result<Vec<models::medical_record::MedicalHistoryEntry>> {
        Ok(sqlx::query_as::<_, models::medical_record::MedicalHistoryEntry>(
            sqlite_queries::QUERY_GET_MEDICAL_HISTORY_BY_PET,
        )
        .bind(pet_id)
        .fetch_all(&self.db_pool)
        .await?)
    }
}

#[async_trait]
impl InvoiceRepo for SqlxSqliteRepo {
    async fn create(
        &self,
        invoice: &models::invoice::Invoice,
    ) -> anyhow::Result<models::invoice::Invoice> {
        let mut transaction = self.db_pool.begin().await?;

        let invoice_id = sqlx::query(sqlite_queries::QUERY_INSERT_INVOICE)
            .bind(invoice.client_id)
            .bind(invoice.date)
            .bind(invoice.total_amount)
            .bind(invoice.status.to_string())
            .execute(&mut *transaction)
            .await?
            .last_insert_rowid();

        transaction.commit().await?;

        Ok(models::invoice::Invoice {
            id: invoice_id,
            ..invoice.clone()
        })
    }

    async fn get_all(&self) -> anyhow::Result<Vec<models::invoice::Invoice>> {
        Ok(
            sqlx::query_as::<_, models::invoice::Invoice>(sqlite_queries::QUERY_GET_ALL_INVOICES)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }
}

#[async_trait]
impl ReviewRepo for SqlxSqliteRepo {
    async fn create(
        &self,
        review: &models::review::Review,
    ) -> anyhow::Result<models::review::Review> {
        let mut transaction = self.db_pool.begin().await?;

        let review_id = sqlx::query(sqlite_queries::QUERY_INSERT_REVIEW)
            .bind(review.client_id)
            .bind(review.rating)
            .bind(&review.comment)
            .bind(review.date)
            .execute(&mut *transaction)
            .await?
            .last_insert_rowid();

        transaction.commit().await?;

        Ok(models::review::Review {
            id: review_id,
            ..review.clone()
        })
    }

    async fn get_all(&self) -> anyhow::Result<Vec<models::review::Review>> {
        Ok(
            sqlx::query_as::<_, models::review::Review>(sqlite_queries::QUERY_GET_ALL_REVIEWS)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }
}

#[async_trait]
impl UserRepo for SqlxSqliteRepo {
    async fn create(&self, user: &models::user::User) -> anyhow::Result<models::user::User> {
        let mut transaction = self.db_pool.begin().await?;

        let user_id = sqlx::query(sqlite_queries::QUERY_INSERT_USER)
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(&user.role)
            .execute(&mut *transaction)
            .await?
            .last_insert_rowid();

        transaction.commit().await?;

        Ok(models::user::User {
            id: user_id,
            ..user.clone()
        })
    }

    async fn get_by_username(
        &self,
        username: &str,
    ) -> anyhow::Result<Option<models::user::User>> {
        Ok(
            sqlx::query_as::<_, models::user::User>(sqlite_queries::QUERY_GET_USER_BY_USERNAME)
                .bind(username)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }
}
