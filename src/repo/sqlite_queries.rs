//! SQL text used by the SQLite repository. The schema keeps referential
//! integrity in the store: deleting a client cascades to its pets,
//! appointments, medical records, invoices and reviews.

pub const SCHEMA_STATEMENTS: [&str; 7] = [
    r#"
CREATE TABLE IF NOT EXISTS clients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL
);
"#,
    r#"
CREATE TABLE IF NOT EXISTS pets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    species TEXT NOT NULL,
    breed TEXT NOT NULL,
    age INTEGER NOT NULL,
    client_id INTEGER NOT NULL,
    FOREIGN KEY(client_id) REFERENCES clients(id) ON DELETE CASCADE
);
"#,
    r#"
CREATE TABLE IF NOT EXISTS appointments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    pet_id INTEGER NOT NULL,
    date DATE NOT NULL,
    reason TEXT NOT NULL,
    status TEXT NOT NULL,
    FOREIGN KEY(pet_id) REFERENCES pets(id) ON DELETE CASCADE
);
"#,
    r#"
CREATE TABLE IF NOT EXISTS medical_records (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    appointment_id INTEGER NOT NULL,
    diagnosis TEXT NOT NULL,
    treatment TEXT NOT NULL,
    notes TEXT,
    FOREIGN KEY(appointment_id) REFERENCES appointments(id) ON DELETE CASCADE
);
"#,
    r#"
CREATE TABLE IF NOT EXISTS invoices (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    client_id INTEGER NOT NULL,
    date DATE NOT NULL,
    total_amount REAL NOT NULL,
    status TEXT NOT NULL,
    FOREIGN KEY(client_id) REFERENCES clients(id) ON DELETE CASCADE
);
"#,
    r#"
CREATE TABLE IF NOT EXISTS reviews (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    client_id INTEGER NOT NULL,
    rating INTEGER NOT NULL,
    comment TEXT,
    review_date DATE NOT NULL,
    FOREIGN KEY(client_id) REFERENCES clients(id) ON DELETE CASCADE
);
"#,
    r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT UNIQUE NOT NULL,
    password_hash TEXT NOT NULL,
    role TEXT NOT NULL DEFAULT 'admin'
);
"#,
];

pub const QUERY_INSERT_CLIENT: &str = r#"
INSERT INTO clients(name,email,phone) VALUES($1,$2,$3);
"#;

pub const QUERY_GET_ALL_CLIENTS: &str = r#"
SELECT id,name,email,phone FROM clients;
"#;

pub const QUERY_GET_CLIENT_BY_ID: &str = r#"
SELECT id,name,email,phone FROM clients WHERE id=$1;
"#;

pub const QUERY_UPDATE_CLIENT: &str = r#"
UPDATE clients SET name=$2,email=$3,phone=$4 WHERE id=$1;
"#;

pub const QUERY_DELETE_CLIENT: &str = r#"DELETE FROM clients WHERE id=$1;"#;

pub const QUERY_INSERT_PET: &str = r#"
INSERT INTO pets(name,species,breed,age,client_id) VALUES($1,$2,$3,$4,$5);
"#;

pub const QUERY_GET_ALL_PETS: &str = r#"
SELECT id,name,species,breed,age,client_id FROM pets;
"#;

pub const QUERY_GET_PETS_BY_CLIENT: &str = r#"
SELECT id,name,species,breed,age,client_id FROM pets WHERE client_id=$1;
"#;

pub const QUERY_GET_PET_BY_ID: &str = r#"
SELECT id,name,species,breed,age,client_id FROM pets WHERE id=$1;
"#;

pub const QUERY_UPDATE_PET: &str = r#"
UPDATE pets SET name=$2,species=$3,breed=$4,age=$5,client_id=$6 WHERE id=$1;
"#;

pub const QUERY_DELETE_PET: &str = r#"DELETE FROM pets WHERE id=$1;"#;

pub const QUERY_INSERT_APPOINTMENT: &str = r#"
INSERT INTO appointments(pet_id,date,reason,status) VALUES($1,$2,$3,$4);
"#;

pub const QUERY_GET_ALL_APPOINTMENTS: &str = r#"
SELECT id,pet_id,date,reason,status FROM appointments;
"#;

pub const QUERY_GET_APPOINTMENT_BY_ID: &str = r#"
SELECT id,pet_id,date,reason,status FROM appointments WHERE id=$1;
"#;

pub const QUERY_UPDATE_APPOINTMENT: &str = r#"
UPDATE appointments SET pet_id=$2,date=$3,reason=$4,status=$5 WHERE id=$1;
"#;

pub const QUERY_DELETE_APPOINTMENT: &str = r#"DELETE FROM appointments WHERE id=$1;"#;

pub const QUERY_INSERT_MEDICAL_RECORD: &str = r#"
INSERT INTO medical_records(appointment_id,diagnosis,treatment,notes) VALUES($1,$2,$3,$4);
"#;

pub const QUERY_GET_MEDICAL_HISTORY_BY_PET: &str = r#"
SELECT
    mr.id AS record_id,a.date,a.reason,mr.diagnosis,mr.treatment,mr.notes
FROM medical_records AS mr
INNER JOIN appointments AS a ON (mr.appointment_id = a.id)
WHERE a.pet_id = $1
ORDER BY a.date DESC;
"#;

pub const QUERY_INSERT_INVOICE: &str = r#"
INSERT INTO invoices(client_id,date,total_amount,status) VALUES($1,$2,$3,$4);
"#;

pub const QUERY_GET_ALL_INVOICES: &str = r#"
SELECT id,client_id,date,total_amount,status FROM invoices ORDER BY date DESC;
"#;

pub const QUERY_INSERT_REVIEW: &str = r#"
INSERT INTO reviews(client_id,rating,comment,review_date) VALUES($1,$2,$3,$4);
"#;

pub const QUERY_GET_ALL_REVIEWS: &str = r#"
SELECT id,client_id,rating,comment,review_date FROM reviews ORDER BY review_date DESC;
"#;

pub const QUERY_INSERT_USER: &str = r#"
INSERT INTO users(username,password_hash,role) VALUES($1,$2,$3);
"#;

pub const QUERY_GET_USER_BY_USERNAME: &str = r#"
SELECT id,username,password_hash,role FROM users WHERE username=$1;
"#;
