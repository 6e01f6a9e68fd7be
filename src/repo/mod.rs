pub mod sqlite;
pub mod sqlite_queries;

use crate::models;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ClientRepo {
    async fn create(&self, client: &models::client::Client)
        -> anyhow::Result<models::client::Client>;

    async fn get_all(&self) -> anyhow::Result<Vec<models::client::Client>>;

    async fn get_by_id(&self, client_id: i64) -> anyhow::Result<Option<models::client::Client>>;

    async fn update(&self, client: &models::client::Client) -> anyhow::Result<bool>;

    async fn delete(&self, client_id: i64) -> anyhow::Result<bool>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait PetRepo {
    async fn create(&self, pet: &models::pet::Pet) -> anyhow::Result<models::pet::Pet>;

    async fn get_all(&self) -> anyhow::Result<Vec<models::pet::Pet>>;

    async fn get_by_client(&self, client_id: i64) -> anyhow::Result<Vec<models::pet::Pet>>;

    async fn get_by_id(&self, pet_id: i64) -> anyhow::Result<Option<models::pet::Pet>>;

    async fn update(&self, pet: &models::pet::Pet) -> anyhow::Result<bool>;

    async fn delete(&self, pet_id: i64) -> anyhow::Result<bool>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AppointmentRepo {
    async fn create(
        &self,
        appointment: &models::appointment::Appointment,
    ) -> anyhow::Result<models::appointment::Appointment>;

    async fn get_all(&self) -> anyhow::Result<Vec<models::appointment::Appointment>>;

    async fn get_by_id(
        &self,
        appointment_id: i64,
    ) -> anyhow::Result<Option<models::appointment::Appointment>>;

    async fn update(&self, appointment: &models::appointment::Appointment)
        -> anyhow::Result<bool>;

    async fn delete(&self, appointment_id: i64) -> anyhow::Result<bool>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait MedicalRecordRepo {
    async fn create(
        &self,
        record: &models::medical_record::MedicalRecord,
    ) -> anyhow::Result<models::medical_record::MedicalRecord>;

    /// Pre-joined history for one pet, most recent appointment first.
    async fn get_history_by_pet(
        &self,
        pet_id: i64,
    ) -> anyhow::Result<Vec<models::medical_record::MedicalHistoryEntry>>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait InvoiceRepo {
    async fn create(
        &self,
        invoice: &models::invoice::Invoice,
    ) -> anyhow::Result<models::invoice::Invoice>;

    async fn get_all(&self) -> anyhow::Result<Vec<models::invoice::Invoice>>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReviewRepo {
    async fn create(&self, review: &models::review::Review)
        -> anyhow::Result<models::review::Review>;

    async fn get_all(&self) -> anyhow::Result<Vec<models::review::Review>>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepo {
    async fn create(&self, user: &models::user::User) -> anyhow::Result<models::user::User>;

    /// Case-sensitive exact match against the unique persisted username.
    async fn get_by_username(&self, username: &str)
        -> anyhow::Result<Option<models::user::User>>;
}

pub type ImplClientRepo = Box<dyn ClientRepo>;
pub type ImplPetRepo = Box<dyn PetRepo>;
pub type ImplAppointmentRepo = Box<dyn AppointmentRepo>;
pub type ImplMedicalRecordRepo = Box<dyn MedicalRecordRepo>;
pub type ImplInvoiceRepo = Box<dyn InvoiceRepo>;
pub type ImplReviewRepo = Box<dyn ReviewRepo>;
pub type ImplUserRepo = Box<dyn UserRepo>;
