//! One-shot population of representative sample data. Runs at startup and
//! backs off as soon as the store already holds any client.

use crate::{models, repo};
use chrono::{Duration, Local};
use log::info;

const SEED_CLIENTS: [(&str, &str, &str); 8] = [
    ("Ana García", "ana.garcia@email.com", "600123456"),
    ("Carlos Ruiz", "carlos.ruiz@email.com", "600987654"),
    ("Elena M.", "elena.vetlover@email.com", "666777888"),
    ("Luis Torres", "luis.t@email.com", "611223344"),
    ("Marta Díaz", "marta.d@email.com", "699887766"),
    ("Pedro P.", "pedro.p@email.com", "655443322"),
    ("Sofia L.", "sofia.l@email.com", "644112233"),
    ("Jorge B.", "jorge.b@email.com", "633221144"),
];

// (name, species, breed, age, index into SEED_CLIENTS)
const SEED_PETS: [(&str, &str, &str, i64, usize); 10] = [
    ("Luna", "Perro", "Golden Retriever", 3, 0),
    ("Max", "Perro", "Pastor Alemán", 5, 1),
    ("Mishi", "Gato", "Persa", 2, 2),
    ("Coco", "Ave", "Loro", 10, 3),
    ("Rocky", "Perro", "Bulldog", 4, 0),
    ("Simba", "Gato", "Común Europeo", 1, 4),
    ("Nala", "Gato", "Siames", 3, 4),
    ("Thor", "Perro", "Husky", 2, 5),
    ("Lola", "Roedor", "Hamster", 1, 6),
    ("Zeus", "Perro", "Doberman", 6, 7),
];

const SEED_REASONS: [&str; 6] = [
    "Vacunación",
    "Revisión General",
    "Corte de uñas",
    "Desparasitación",
    "Consulta por vómitos",
    "Cirugía menor",
];

// fixed spread of day offsets around today; negative offsets become
// completed appointments, the rest stay pending
const SEED_DAY_OFFSETS: [i64; 15] = [-10, -7, 3, -5, 8, -2, 1, -9, 6, -4, 10, -1, 5, -8, 2];

const SEED_REVIEW_COMMENTS: [&str; 5] = [
    "Excelente servicio",
    "Muy amables",
    "Tiempos de espera largos",
    "Mi perro salió feliz",
    "Volveré seguro",
];

pub struct DataSeeder {
    client_repo: repo::ImplClientRepo,
    pet_repo: repo::ImplPetRepo,
    appointment_repo: repo::ImplAppointmentRepo,
    medical_record_repo: repo::ImplMedicalRecordRepo,
    invoice_repo: repo::ImplInvoiceRepo,
    review_repo: repo::ImplReviewRepo,
}

impl DataSeeder {
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

    /// Loads the sample data set, but only into an empty store.
    pub async fn seed(&self) -> anyhow::Result<()> {
        if !self.client_repo.get_all().await?.is_empty() {
            info!("La base de datos ya contiene datos. Se omite el seeding.");
            return Ok(());
        }

        info!("Iniciando carga de datos de ejemplo...");

        let mut clients = Vec::with_capacity(SEED_CLIENTS.len());
        for (name, email, phone) in SEED_CLIENTS {
            let client = self
                .client_repo
                .create(&models::client::Client {
                    id: 0,
                    name: name.to_string(),
                    email: email.to_string(),
                    phone: phone.to_string(),
                })
                .await?;
            clients.push(client);
        }

        let mut pets = Vec::with_capacity(SEED_PETS.len());
        for (name, species, breed, age, owner_idx) in SEED_PETS {
            let pet = self
                .pet_repo
                .create(&models::pet::Pet {
                    id: 0,
                    name: name.to_string(),
                    species: species.to_string(),
                    breed: breed.to_string(),
                    age,
                    client_id: clients[owner_idx].id,
                })
                .await?;
            pets.push(pet);
        }

        let today = Local::now().date_naive();
        let mut completed_count = 0usize;

        for (i, days_offset) in SEED_DAY_OFFSETS.into_iter().enumerate() {
            let pet = &pets[i % pets.len()];
            let status = if days_offset < 0 {
                models::appointment::AppointmentStatus::Completada
            } else {
                models::appointment::AppointmentStatus::Pendiente
            };
            let reason = SEED_REASONS[i % SEED_REASONS.len()];

            let appointment = self
                .appointment_repo
                .create(&models::appointment::Appointment {
                    id: 0,
                    pet_id: pet.id,
                    date: today + Duration::days(days_offset),
                    reason: reason.to_string(),
                    status: status.clone(),
                })
                .await?;

            // history and billing only exist for appointments that already
            // happened
            if status == models::appointment::AppointmentStatus::Completada {
                self.medical_record_repo
                    .create(&models::medical_record::MedicalRecord {
                        id: 0,
                        appointment_id: appointment.id,
                        diagnosis: format!("Diagnóstico preliminar de {reason}"),
                        treatment: "Reposo y medicación estándar".to_string(),
                        notes: Some("El paciente se portó bien.".to_string()),
                    })
                    .await?;

                if completed_count % 2 == 0 {
                    self.invoice_repo
                        .create(&models::invoice::Invoice {
                            id: 0,
                            client_id: pet.client_id,
                            date: appointment.date,
                            total_amount: 30.0 + (i as f64) * 8.0,
                            status: models::invoice::InvoiceStatus::Pagada,
                        })
                        .await?;
                }
                completed_count += 1;
            }
        }

        for (i, client) in clients.iter().take(SEED_REVIEW_COMMENTS.len()).enumerate() {
            self.review_repo
                .create(&models::review::Review {
                    id: 0,
                    client_id: client.id,
                    rating: 3 + (i as i64) % 3,
                    comment: Some(SEED_REVIEW_COMMENTS[i].to_string()),
                    date: today,
                })
                .await?;
        }

        info!("Carga de datos de ejemplo completada.");
        Ok(())
    }
}
