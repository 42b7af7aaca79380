//! Supplier catalog service

use serde::Deserialize;
use shared::models::Supplier;
use shared::validation::{validate_contact, validate_email, validate_name};
use sqlx::{FromRow, PgPool};

use crate::error::{AppError, AppResult};

/// Supplier service for catalog management
#[derive(Clone)]
pub struct SupplierService {
    db: PgPool,
}

/// Input for creating a supplier
#[derive(Debug, Deserialize)]
pub struct CreateSupplierInput {
    pub name: String,
    pub contact: String,
    pub email: Option<String>,
}

/// Input for updating a supplier. Absent fields keep their current value.
#[derive(Debug, Deserialize)]
pub struct UpdateSupplierInput {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, FromRow)]
struct SupplierRow {
    id: i64,
    name: String,
    contact: String,
    email: Option<String>,
}

impl From<SupplierRow> for Supplier {
    fn from(row: SupplierRow) -> Self {
        Supplier {
            id: row.id,
            name: row.name,
            contact: row.contact,
            email: row.email,
        }
    }
}

impl SupplierService {
    /// Create a new SupplierService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List all suppliers
    pub async fn list(&self) -> AppResult<Vec<Supplier>> {
        let rows = sqlx::query_as::<_, SupplierRow>(
            "SELECT id, name, contact, email FROM suppliers ORDER BY id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Supplier::from).collect())
    }

    /// Get a single supplier by id
    pub async fn get(&self, supplier_id: i64) -> AppResult<Supplier> {
        let row = sqlx::query_as::<_, SupplierRow>(
            "SELECT id, name, contact, email FROM suppliers WHERE id = $1",
        )
        .bind(supplier_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Supplier".to_string()))?;

        Ok(row.into())
    }

    /// Create a supplier. Contact and email must be unique.
    pub async fn create(&self, input: CreateSupplierInput) -> AppResult<Supplier> {
        Self::check(validate_name(&input.name), "name")?;
        Self::check(validate_contact(&input.contact), "contact")?;
        if let Some(email) = &input.email {
            Self::check(validate_email(email), "email")?;
        }

        self.ensure_contact_free(&input.contact, None).await?;
        if let Some(email) = &input.email {
            self.ensure_email_free(email, None).await?;
        }

        let row = sqlx::query_as::<_, SupplierRow>(
            r#"
            INSERT INTO suppliers (name, contact, email)
            VALUES ($1, $2, $3)
            RETURNING id, name, contact, email
            "#,
        )
        .bind(&input.name)
        .bind(&input.contact)
        .bind(&input.email)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(supplier_id = row.id, "Supplier created");
        Ok(row.into())
    }

    /// Update a supplier. Fields left out of the input keep their value.
    pub async fn update(&self, supplier_id: i64, input: UpdateSupplierInput) -> AppResult<Supplier> {
        let existing = self.get(supplier_id).await?;

        let name = input.name.unwrap_or(existing.name);
        let contact = input.contact.unwrap_or(existing.contact);
        let email = input.email.or(existing.email);

        Self::check(validate_name(&name), "name")?;
        Self::check(validate_contact(&contact), "contact")?;
        if let Some(email) = &email {
            Self::check(validate_email(email), "email")?;
        }

        self.ensure_contact_free(&contact, Some(supplier_id)).await?;
        if let Some(email) = &email {
            self.ensure_email_free(email, Some(supplier_id)).await?;
        }

        let row = sqlx::query_as::<_, SupplierRow>(
            r#"
            UPDATE suppliers
            SET name = $2, contact = $3, email = $4
            WHERE id = $1
            RETURNING id, name, contact, email
            "#,
        )
        .bind(supplier_id)
        .bind(&name)
        .bind(&contact)
        .bind(&email)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// Delete a supplier
    pub async fn delete(&self, supplier_id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(supplier_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Supplier".to_string()));
        }

        tracing::info!(supplier_id, "Supplier deleted");
        Ok(())
    }

    async fn ensure_contact_free(&self, contact: &str, exclude: Option<i64>) -> AppResult<()> {
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM suppliers WHERE contact = $1 AND id IS DISTINCT FROM $2)",
        )
        .bind(contact)
        .bind(exclude)
        .fetch_one(&self.db)
        .await?;

        if taken {
            return Err(AppError::DuplicateEntry("contact".to_string()));
        }
        Ok(())
    }

    async fn ensure_email_free(&self, email: &str, exclude: Option<i64>) -> AppResult<()> {
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM suppliers WHERE email = $1 AND id IS DISTINCT FROM $2)",
        )
        .bind(email)
        .bind(exclude)
        .fetch_one(&self.db)
        .await?;

        if taken {
            return Err(AppError::DuplicateEntry("email".to_string()));
        }
        Ok(())
    }

    fn check(result: Result<(), &'static str>, field: &str) -> AppResult<()> {
        result.map_err(|message| AppError::Validation {
            field: field.to_string(),
            message: message.to_string(),
        })
    }
}
