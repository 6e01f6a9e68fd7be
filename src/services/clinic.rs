//! Orchestration layer for the six business entities. Every mutating
//! operation validates its fields first and only then touches the
//! repository, so a validation failure guarantees zero side effects.

use crate::{consts, errors::ServiceError, models, repo, validators};
use chrono::{Local, NaiveDate};
use log::{error, info};

pub struct ClinicService {
    client_repo: repo::ImplClientRepo,
    pet_repo: repo::ImplPetRepo,
    appointment_repo: repo::ImplAppointmentRepo,
    medical_record_repo: repo::ImplMedicalRecordRepo,
    invoice_repo: repo::ImplInvoiceRepo,
    review_repo: repo::ImplReviewRepo,
}

impl ClinicService {
    pub fn new(
        client_repo: repo::ImplClientRepo,
        pet_repo: repo::ImplPetRepo,
        appointment_repo: repo::ImplAppointmentRepo,
        medical_record_repo: repo::ImplMedicalRecordRepo,
        invoice_repo: repo::ImplInvoiceRepo,
        review_repo: repo::ImplReviewRepo,
    ) -> Self {
        Self {
            client_repo,
            pet_repo,
            appointment_repo,
            medical_record_repo,
            invoice_repo,
            review_repo,
        }
    }

    fn persistence(context: &str, err: anyhow::Error) -> ServiceError {
        error!("{context}: {err:#}");
        ServiceError::Persistence(err)
    }

    fn validation(message: &str) -> ServiceError {
        ServiceError::Validation(message.to_string())
    }

    fn validate_client_fields(name: &str, email: &str, phone: &str) -> Result<(), ServiceError> {
        if !validators::is_not_empty(name) {
            return Err(Self::validation("El nombre es obligatorio"));
        }
        if !validators::is_valid_email(email) {
            return Err(Self::validation("Email inválido"));
        }
        if !validators::is_valid_phone(phone) {
            return Err(Self::validation("Teléfono inválido"));
        }
        Ok(())
    }

    fn validate_pet_fields(name: &str, species: &str, age: i64) -> Result<(), ServiceError> {
        if !validators::is_not_empty(name) {
            return Err(Self::validation("El nombre es obligatorio"));
        }
        if !validators::is_not_empty(species) {
            return Err(Self::validation("La especie es obligatoria"));
        }
        if !validators::is_non_negative(age) {
            return Err(Self::validation("La edad no puede ser negativa"));
        }
        Ok(())
    }

    fn parse_date_field(date_str: &str) -> Result<NaiveDate, ServiceError> {
        validators::parse_date(date_str)
            .ok_or_else(|| Self::validation("Fecha inválida, use el formato AAAA-MM-DD"))
    }

    // --- Clients ---

    pub async fn add_client(
        &self,
        name: &str,
        email: &str,
        phone: &str,
    ) -> Result<models::client::Client, ServiceError> {
        Self::validate_client_fields(name, email, phone)?;

        let client = models::client::Client {
            id: 0,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        };

        let created = self
            .client_repo
            .create(&client)
            .await
            .map_err(|err| Self::persistence("Error creando cliente", err))?;

        info!("Cliente creado: {}", created.id);
        Ok(created)
    }

    pub async fn list_clients(&self) -> Result<Vec<models::client::Client>, ServiceError> {
        self.client_repo
            .get_all()
            .await
            .map_err(|err| Self::persistence("Error listando clientes", err))
    }

    pub async fn get_client_by_id(
        &self,
        client_id: i64,
    ) -> Result<Option<models::client::Client>, ServiceError> {
        self.client_repo
            .get_by_id(client_id)
            .await
            .map_err(|err| Self::persistence("Error consultando cliente", err))
    }

    pub async fn update_client(
        &self,
        client: &models::client::Client,
    ) -> Result<bool, ServiceError> {
        Self::validate_client_fields(&client.name, &client.email, &client.phone)?;

        let updated = self
            .client_repo
            .update(client)
            .await
            .map_err(|err| Self::persistence("Error actualizando cliente", err))?;

        if updated {
            info!("Cliente actualizado: {}", client.id);
        }
        Ok(updated)
    }

    pub async fn delete_client(&self, client_id: i64) -> Result<bool, ServiceError> {
        self.client_repo
            .delete(client_id)
            .await
            .map_err(|err| Self::persistence("Error eliminando cliente", err))
    }

    // --- Pets ---

    pub async fn add_pet(
        &self,
        name: &str,
        species: &str,
        breed: &str,
        age: i64,
        client_id: i64,
    ) -> Result<models::pet::Pet, ServiceError> {
        Self::validate_pet_fields(name, species, age)?;

        let pet = models::pet::Pet {
            id: 0,
            name: name.to_string(),
            species: species.to_string(),
            breed: breed.to_string(),
            age,
            client_id,
        };

        let created = self
            .pet_repo
            .create(&pet)
            .await
            .map_err(|err| Self::persistence("Error creando mascota", err))?;

        info!("Mascota creada: {}", created.id);
        Ok(created)
    }

    pub async fn list_pets(&self) -> Result<Vec<models::pet::Pet>, ServiceError> {
        self.pet_repo
            .get_all()
            .await
            .map_err(|err| Self::persistence("Error listando mascotas", err))
    }

    pub async fn list_pets_by_client(
        &self,
        client_id: i64,
    ) -> Result<Vec<models::pet::Pet>, ServiceError> {
        self.pet_repo
            .get_by_client(client_id)
            .await
            .map_err(|err| Self::persistence("Error listando mascotas del cliente", err))
    }

    pub async fn get_pet_by_id(
        &self,
        pet_id: i64,
    ) -> Result<Option<models::pet::Pet>, ServiceError> {
        self.pet_repo
            .get_by_id(pet_id)
            .await
            .map_err(|err| Self::persistence("Error consultando mascota", err))
    }

    pub async fn update_pet(&self, pet: &models::pet::Pet) -> Result<bool, ServiceError> {
        Self::validate_pet_fields(&pet.name, &pet.species, pet.age)?;

        let updated = self
            .pet_repo
            .update(pet)
            .await
            .map_err(|err| Self::persistence("Error actualizando mascota", err))?;

        if updated {
            info!("Mascota actualizada: {}", pet.id);
        }
        Ok(updated)
    }

    pub async fn delete_pet(&self, pet_id: i64) -> Result<bool, ServiceError> {
        self.pet_repo
            .delete(pet_id)
            .await
            .map_err(|err| Self::persistence("Error eliminando mascota", err))
    }

    // --- Appointments ---

    /// Books a new appointment; the status always starts out pending.
    pub async fn book_appointment(
        &self,
        pet_id: i64,
        date: &str,
        reason: &str,
    ) -> Result<models::appointment::Appointment, ServiceError> {
        if !validators::is_not_empty(reason) {
            return Err(Self::validation("El motivo es obligatorio"));
        }
        let date = Self::parse_date_field(date)?;

        let appointment = models::appointment::Appointment {
            id: 0,
            pet_id,
            date,
            reason: reason.to_string(),
            status: models::appointment::AppointmentStatus::Pendiente,
        };

        let created = self
            .appointment_repo
            .create(&appointment)
            .await
            .map_err(|err| Self::persistence("Error agendando cita", err))?;

        info!("Cita agendada: {}", created.id);
        Ok(created)
    }

    pub async fn list_appointments(
        &self,
    ) -> Result<Vec<models::appointment::Appointment>, ServiceError> {
        self.appointment_repo
            .get_all()
            .await
            .map_err(|err| Self::persistence("Error listando citas", err))
    }

    pub async fn get_appointment_by_id(
        &self,
        appointment_id: i64,
    ) -> Result<Option<models::appointment::Appointment>, ServiceError> {
        self.appointment_repo
            .get_by_id(appointment_id)
            .await
            .map_err(|err| Self::persistence("Error consultando cita", err))
    }

    pub async fn update_appointment(
        &self,
        appointment: &models::appointment::Appointment,
    ) -> Result<bool, ServiceError> {
        if !validators::is_not_empty(&appointment.reason) {
            return Err(Self::validation("El motivo es obligatorio"));
        }

        let updated = self
            .appointment_repo
            .update(appointment)
            .await
            .map_err(|err| Self::persistence("Error actualizando cita", err))?;

        if updated {
            info!("Cita actualizada: {}", appointment.id);
        }
        Ok(updated)
    }

    pub async fn delete_appointment(&self, appointment_id: i64) -> Result<bool, ServiceError> {
        self.appointment_repo
            .delete(appointment_id)
            .await
            .map_err(|err| Self::persistence("Error eliminando cita", err))
    }

    // --- Medical records ---

    /// Attaches a medical record to an appointment. Referential integrity
    /// of `appointment_id` is the store's responsibility, not re-checked
    /// here.
    pub async fn add_medical_record(
        &self,
        appointment_id: i64,
        diagnosis: &str,
        treatment: &str,
        notes: Option<&str>,
    ) -> Result<models::medical_record::MedicalRecord, ServiceError> {
        if !validators::is_not_empty(diagnosis) {
            return Err(Self::validation("El diagnóstico es obligatorio"));
        }
        if !validators::is_not_empty(treatment) {
            return Err(Self::validation("El tratamiento es obligatorio"));
        }

        let record = models::medical_record::MedicalRecord {
            id: 0,
            appointment_id,
            diagnosis: diagnosis.to_string(),
            treatment: treatment.to_string(),
            notes: notes.map(str::to_string),
        };

        let created = self
            .medical_record_repo
            .create(&record)
            .await
            .map_err(|err| Self::persistence("Error creando registro médico", err))?;

        info!("Registro médico creado: {}", created.id);
        Ok(created)
    }

    /// Denormalized read model for the UI: one row per record, pre-joined
    /// with its appointment, most recent appointment first.
    pub async fn get_medical_history_by_pet(
        &self,
        pet_id: i64,
    ) -> Result<Vec<models::medical_record::MedicalHistoryEntry>, ServiceError> {
        self.medical_record_repo
            .get_history_by_pet(pet_id)
            .await
            .map_err(|err| Self::persistence("Error consultando historial médico", err))
    }

    // --- Invoices ---

    pub async fn generate_invoice(
        &self,
        client_id: i64,
        total_amount: f64,
        date: &str,
    ) -> Result<models::invoice::Invoice, ServiceError> {
        if !validators::is_positive_number(total_amount) {
            return Err(Self::validation("El monto debe ser mayor que cero"));
        }
        let date = Self::parse_date_field(date)?;

        let invoice = models::invoice::Invoice {
            id: 0,
            client_id,
            date,
            total_amount,
            status: models::invoice::InvoiceStatus::Pendiente,
        };

        let created = self
            .invoice_repo
            .create(&invoice)
            .await
            .map_err(|err| Self::persistence("Error generando factura", err))?;

        info!("Factura generada: {}", created.id);
        Ok(created)
    }

    pub async fn list_invoices(&self) -> Result<Vec<models::invoice::Invoice>, ServiceError> {
        self.invoice_repo
            .get_all()
            .await
            .map_err(|err| Self::persistence("Error listando facturas", err))
    }

    // --- Reviews ---

    /// Records a client review. The date defaults to today, evaluated at
    /// call time, when the caller does not supply one.
    pub async fn add_review(
        &self,
        client_id: i64,
        rating: i64,
        comment: Option<&str>,
        date: Option<NaiveDate>,
    ) -> Result<models::review::Review, ServiceError> {
        if !(consts::RATING_MIN..=consts::RATING_MAX).contains(&rating) {
            return Err(Self::validation("La calificación debe estar entre 1 y 5"));
        }

        let review = models::review::Review {
            id: 0,
            client_id,
            rating,
            comment: comment.map(str::to_string),
            date: date.unwrap_or_else(|| Local::now().date_naive()),
        };

        let created = self
            .review_repo
            .create(&review)
            .await
            .map_err(|err| Self::persistence("Error creando reseña", err))?;

        info!("Reseña creada: {}", created.id);
        Ok(created)
    }

    pub async fn list_reviews(&self) -> Result<Vec<models::review::Review>, ServiceError> {
        self.review_repo
            .get_all()
            .await
            .map_err(|err| Self::persistence("Error listando reseñas", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::{
        MockAppointmentRepo, MockClientRepo, MockInvoiceRepo, MockMedicalRecordRepo, MockPetRepo,
        MockReviewRepo,
    };
    use mockall::predicate::*;

    fn clinic_service(
        client_repo: MockClientRepo,
        pet_repo: MockPetRepo,
        appointment_repo: MockAppointmentRepo,
        medical_record_repo: MockMedicalRecordRepo,
        invoice_repo: MockInvoiceRepo,
        review_repo: MockReviewRepo,
    ) -> ClinicService {
        ClinicService::new(
            Box::new(client_repo),
            Box::new(pet_repo),
            Box::new(appointment_repo),
            Box::new(medical_record_repo),
            Box::new(invoice_repo),
            Box::new(review_repo),
        )
    }

    fn create_test_client(id: i64, name: &str) -> models::client::Client {
        models::client::Client {
            id,
            name: name.to_string(),
            email: "test@test.com".to_string(),
            phone: "5551234567".to_string(),
        }
    }

    fn create_test_history_entry(record_id: i64, date: &str) -> models::medical_record::MedicalHistoryEntry {
        models::medical_record::MedicalHistoryEntry {
            record_id,
            date: date.parse().unwrap(),
            reason: "Revisión General".to_string(),
            diagnosis: "Sano".to_string(),
            treatment: "Ninguno".to_string(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_add_client_valid() {
        let mut client_repo = MockClientRepo::new();
        client_repo
            .expect_create()
            .times(1)
            .returning(|client| Ok(models::client::Client {
                id: 1,
                ..client.clone()
            }));

        let service = clinic_service(
            client_repo,
            MockPetRepo::new(),
            MockAppointmentRepo::new(),
            MockMedicalRecordRepo::new(),
            MockInvoiceRepo::new(),
            MockReviewRepo::new(),
        );

        let result = service
            .add_client("Test", "test@test.com", "5551234567")
            .await
            .unwrap();

        assert_eq!(result.id, 1);
        assert_eq!(result.email, "test@test.com");
    }

    #[tokio::test]
    async fn test_add_client_invalid_email_never_hits_repo() {
        // no expectations configured: any repository call panics the mock
        let service = clinic_service(
            MockClientRepo::new(),
            MockPetRepo::new(),
            MockAppointmentRepo::new(),
            MockMedicalRecordRepo::new(),
            MockInvoiceRepo::new(),
            MockReviewRepo::new(),
        );

        let err = service
            .add_client("Test", "bad-email", "5551234567")
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(err.to_string(), "Email inválido");
    }

    #[tokio::test]
    async fn test_add_client_checks_name_before_email() {
        let service = clinic_service(
            MockClientRepo::new(),
            MockPetRepo::new(),
            MockAppointmentRepo::new(),
            MockMedicalRecordRepo::new(),
            MockInvoiceRepo::new(),
            MockReviewRepo::new(),
        );

        let err = service.add_client("   ", "bad-email", "123").await.unwrap_err();

        assert_eq!(err.to_string(), "El nombre es obligatorio");
    }

    #[tokio::test]
    async fn test_update_client_invalid_phone_never_hits_repo() {
        let service = clinic_service(
            MockClientRepo::new(),
            MockPetRepo::new(),
            MockAppointmentRepo::new(),
            MockMedicalRecordRepo::new(),
            MockInvoiceRepo::new(),
            MockReviewRepo::new(),
        );

        let mut client = create_test_client(1, "Test");
        client.phone = "600-123-456".to_string();

        let err = service.update_client(&client).await.unwrap_err();
        assert_eq!(err.to_string(), "Teléfono inválido");
    }

    #[tokio::test]
    async fn test_get_client_by_id_missing_is_none_not_error() {
        let mut client_repo = MockClientRepo::new();
        client_repo
            .expect_get_by_id()
            .with(eq(404))
            .times(1)
            .returning(|_| Ok(None));

        let service = clinic_service(
            client_repo,
            MockPetRepo::new(),
            MockAppointmentRepo::new(),
            MockMedicalRecordRepo::new(),
            MockInvoiceRepo::new(),
            MockReviewRepo::new(),
        );

        assert!(service.get_client_by_id(404).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_client_missing_returns_false() {
        let mut client_repo = MockClientRepo::new();
        client_repo
            .expect_delete()
            .with(eq(404))
            .times(1)
            .returning(|_| Ok(false));

        let service = clinic_service(
            client_repo,
            MockPetRepo::new(),
            MockAppointmentRepo::new(),
            MockMedicalRecordRepo::new(),
            MockInvoiceRepo::new(),
            MockReviewRepo::new(),
        );

        assert!(!service.delete_client(404).await.unwrap());
    }

    #[tokio::test]
    async fn test_add_pet_negative_age_never_hits_repo() {
        let service = clinic_service(
            MockClientRepo::new(),
            MockPetRepo::new(),
            MockAppointmentRepo::new(),
            MockMedicalRecordRepo::new(),
            MockInvoiceRepo::new(),
            MockReviewRepo::new(),
        );

        let err = service
            .add_pet("Fido", "Perro", "Labrador", -1, 1)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "La edad no puede ser negativa");
    }

    #[tokio::test]
    async fn test_add_pet_valid_keeps_owner() {
        let mut pet_repo = MockPetRepo::new();
        pet_repo
            .expect_create()
            .times(1)
            .returning(|pet| Ok(models::pet::Pet {
                id: 3,
                ..pet.clone()
            }));

        let service = clinic_service(
            MockClientRepo::new(),
            pet_repo,
            MockAppointmentRepo::new(),
            MockMedicalRecordRepo::new(),
            MockInvoiceRepo::new(),
            MockReviewRepo::new(),
        );

        let result = service
            .add_pet("Fido", "Perro", "Labrador", 5, 42)
            .await
            .unwrap();

        assert_eq!(result.id, 3);
        assert_eq!(result.client_id, 42);
        assert_eq!(result.age, 5);
    }

    #[tokio::test]
    async fn test_list_pets_by_client_delegates_to_scoped_query() {
        let mut pet_repo = MockPetRepo::new();
        pet_repo
            .expect_get_by_client()
            .with(eq(42))
            .times(1)
            .returning(|client_id| {
                Ok(vec![models::pet::Pet {
                    id: 1,
                    name: "Luna".to_string(),
                    species: "Perro".to_string(),
                    breed: "Golden Retriever".to_string(),
                    age: 3,
                    client_id,
                }])
            });

        let service = clinic_service(
            MockClientRepo::new(),
            pet_repo,
            MockAppointmentRepo::new(),
            MockMedicalRecordRepo::new(),
            MockInvoiceRepo::new(),
            MockReviewRepo::new(),
        );

        let pets = service.list_pets_by_client(42).await.unwrap();
        assert_eq!(pets.len(), 1);
        assert_eq!(pets[0].client_id, 42);
    }

    #[tokio::test]
    async fn test_book_appointment_starts_pending() {
        let mut appointment_repo = MockAppointmentRepo::new();
        appointment_repo
            .expect_create()
            .withf(|appointment| {
                appointment.status == models::appointment::AppointmentStatus::Pendiente
                    && appointment.date.to_string() == "2026-09-01"
            })
            .times(1)
            .returning(|appointment| Ok(models::appointment::Appointment {
                id: 9,
                ..appointment.clone()
            }));

        let service = clinic_service(
            MockClientRepo::new(),
            MockPetRepo::new(),
            appointment_repo,
            MockMedicalRecordRepo::new(),
            MockInvoiceRepo::new(),
            MockReviewRepo::new(),
        );

        let result = service
            .book_appointment(1, "2026-09-01", "Vacunación")
            .await
            .unwrap();

        assert_eq!(result.id, 9);
        assert_eq!(
            result.status,
            models::appointment::AppointmentStatus::Pendiente
        );
    }

    #[tokio::test]
    async fn test_book_appointment_rejects_impossible_date() {
        let service = clinic_service(
            MockClientRepo::new(),
            MockPetRepo::new(),
            MockAppointmentRepo::new(),
            MockMedicalRecordRepo::new(),
            MockInvoiceRepo::new(),
            MockReviewRepo::new(),
        );

        let err = service
            .book_appointment(1, "2026-02-30", "Vacunación")
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_book_appointment_rejects_empty_reason() {
        let service = clinic_service(
            MockClientRepo::new(),
            MockPetRepo::new(),
            MockAppointmentRepo::new(),
            MockMedicalRecordRepo::new(),
            MockInvoiceRepo::new(),
            MockReviewRepo::new(),
        );

        let err = service.book_appointment(1, "2026-09-01", "  ").await.unwrap_err();
        assert_eq!(err.to_string(), "El motivo es obligatorio");
    }

    #[tokio::test]
    async fn test_add_medical_record_requires_diagnosis_and_treatment() {
        let service = clinic_service(
            MockClientRepo::new(),
            MockPetRepo::new(),
            MockAppointmentRepo::new(),
            MockMedicalRecordRepo::new(),
            MockInvoiceRepo::new(),
            MockReviewRepo::new(),
        );

        let err = service
            .add_medical_record(1, "", "Reposo", None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "El diagnóstico es obligatorio");

        let err = service
            .add_medical_record(1, "Otitis", "   ", None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "El tratamiento es obligatorio");
    }

    #[tokio::test]
    async fn test_add_medical_record_valid() {
        let mut medical_record_repo = MockMedicalRecordRepo::new();
        medical_record_repo
            .expect_create()
            .withf(|record| record.appointment_id == 7 && record.notes.is_none())
            .times(1)
            .returning(|record| Ok(models::medical_record::MedicalRecord {
                id: 11,
                ..record.clone()
            }));

        let service = clinic_service(
            MockClientRepo::new(),
            MockPetRepo::new(),
            MockAppointmentRepo::new(),
            medical_record_repo,
            MockInvoiceRepo::new(),
            MockReviewRepo::new(),
        );

        let result = service
            .add_medical_record(7, "Otitis", "Gotas óticas", None)
            .await
            .unwrap();

        assert_eq!(result.id, 11);
    }

    #[tokio::test]
    async fn test_get_medical_history_preserves_repository_order() {
        let mut medical_record_repo = MockMedicalRecordRepo::new();
        medical_record_repo
            .expect_get_history_by_pet()
            .with(eq(5))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    create_test_history_entry(3, "2025-06-20"),
                    create_test_history_entry(1, "2025-03-05"),
                    create_test_history_entry(2, "2025-01-10"),
                ])
            });

        let service = clinic_service(
            MockClientRepo::new(),
            MockPetRepo::new(),
            MockAppointmentRepo::new(),
            medical_record_repo,
            MockInvoiceRepo::new(),
            MockReviewRepo::new(),
        );

        let history = service.get_medical_history_by_pet(5).await.unwrap();

        let dates: Vec<_> = history.iter().map(|entry| entry.date.to_string()).collect();
        assert_eq!(dates, vec!["2025-06-20", "2025-03-05", "2025-01-10"]);
    }

    #[tokio::test]
    async fn test_generate_invoice_negative_amount_never_hits_repo() {
        let service = clinic_service(
            MockClientRepo::new(),
            MockPetRepo::new(),
            MockAppointmentRepo::new(),
            MockMedicalRecordRepo::new(),
            MockInvoiceRepo::new(),
            MockReviewRepo::new(),
        );

        let err = service.generate_invoice(1, -10.0, "2026-08-07").await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(err.to_string(), "El monto debe ser mayor que cero");
    }

    #[tokio::test]
    async fn test_generate_invoice_checks_amount_before_date() {
        let service = clinic_service(
            MockClientRepo::new(),
            MockPetRepo::new(),
            MockAppointmentRepo::new(),
            MockMedicalRecordRepo::new(),
            MockInvoiceRepo::new(),
            MockReviewRepo::new(),
        );

        let err = service.generate_invoice(1, 0.0, "not-a-date").await.unwrap_err();
        assert_eq!(err.to_string(), "El monto debe ser mayor que cero");
    }

    #[tokio::test]
    async fn test_generate_invoice_starts_pending() {
        let mut invoice_repo = MockInvoiceRepo::new();
        invoice_repo
            .expect_create()
            .withf(|invoice| {
                invoice.status == models::invoice::InvoiceStatus::Pendiente
                    && invoice.total_amount == 99.5
            })
            .times(1)
            .returning(|invoice| Ok(models::invoice::Invoice {
                id: 4,
                ..invoice.clone()
            }));

        let service = clinic_service(
            MockClientRepo::new(),
            MockPetRepo::new(),
            MockAppointmentRepo::new(),
            MockMedicalRecordRepo::new(),
            invoice_repo,
            MockReviewRepo::new(),
        );

        let result = service.generate_invoice(1, 99.5, "2026-08-07").await.unwrap();
        assert_eq!(result.id, 4);
    }

    #[tokio::test]
    async fn test_add_review_accepts_boundary_ratings() {
        let mut review_repo = MockReviewRepo::new();
        review_repo
            .expect_create()
            .times(2)
            .returning(|review| Ok(models::review::Review {
                id: 1,
                ..review.clone()
            }));

        let service = clinic_service(
            MockClientRepo::new(),
            MockPetRepo::new(),
            MockAppointmentRepo::new(),
            MockMedicalRecordRepo::new(),
            MockInvoiceRepo::new(),
            review_repo,
        );

        assert_eq!(service.add_review(1, 1, None, None).await.unwrap().rating, 1);
        assert_eq!(service.add_review(1, 5, None, None).await.unwrap().rating, 5);
    }

    #[tokio::test]
    async fn test_add_review_rejects_out_of_range_ratings() {
        let service = clinic_service(
            MockClientRepo::new(),
            MockPetRepo::new(),
            MockAppointmentRepo::new(),
            MockMedicalRecordRepo::new(),
            MockInvoiceRepo::new(),
            MockReviewRepo::new(),
        );

        for rating in [0, 6] {
            let err = service.add_review(1, rating, None, None).await.unwrap_err();
            assert_eq!(err.to_string(), "La calificación debe estar entre 1 y 5");
        }
    }

    #[tokio::test]
    async fn test_add_review_defaults_date_to_today() {
        let mut review_repo = MockReviewRepo::new();
        review_repo
            .expect_create()
            .times(1)
            .returning(|review| Ok(models::review::Review {
                id: 1,
                ..review.clone()
            }));

        let service = clinic_service(
            MockClientRepo::new(),
            MockPetRepo::new(),
            MockAppointmentRepo::new(),
            MockMedicalRecordRepo::new(),
            MockInvoiceRepo::new(),
            review_repo,
        );

        let result = service
            .add_review(1, 4, Some("Excelente servicio"), None)
            .await
            .unwrap();

        assert_eq!(result.date, Local::now().date_naive());
        assert_eq!(result.comment.as_deref(), Some("Excelente servicio"));
    }

    #[tokio::test]
    async fn test_persistence_error_is_logged_and_propagated() {
        let mut client_repo = MockClientRepo::new();
        client_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("Database connection error")));

        let service = clinic_service(
            client_repo,
            MockPetRepo::new(),
            MockAppointmentRepo::new(),
            MockMedicalRecordRepo::new(),
            MockInvoiceRepo::new(),
            MockReviewRepo::new(),
        );

        let err = service
            .add_client("Test", "test@test.com", "5551234567")
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Persistence(_)));
        assert!(err.to_string().contains("Database connection error"));
    }
}
