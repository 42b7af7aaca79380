//! Validation utilities for the Inventory Tracker
//!
//! Structural checks applied at the CRUD boundary before anything reaches
//! the database. Purchase-line validity (existence, positivity, stock) is
//! business logic and lives in the backend's purchase service instead.

use rust_decimal::Decimal;

// ============================================================================
// Account Validations
// ============================================================================

/// Validate username format (3-100 chars, no surrounding whitespace)
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.len() < 3 {
        return Err("Username must be at least 3 characters");
    }
    if username.len() > 100 {
        return Err("Username must be at most 100 characters");
    }
    if username.trim() != username {
        return Err("Username cannot start or end with whitespace");
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

// ============================================================================
// Catalog Validations
// ============================================================================

/// Validate an item or supplier display name (1-100 chars)
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty");
    }
    if name.len() > 100 {
        return Err("Name must be at most 100 characters");
    }
    Ok(())
}

/// Validate a unit price
pub fn validate_price(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO {
        return Err("Price cannot be negative");
    }
    Ok(())
}

/// Validate a stock or sold quantity as stored on an item
pub fn validate_stock_quantity(quantity: i64) -> Result<(), &'static str> {
    if quantity < 0 {
        return Err("Stock quantity cannot be negative");
    }
    Ok(())
}

/// Validate a supplier contact detail (1-100 chars)
pub fn validate_contact(contact: &str) -> Result<(), &'static str> {
    if contact.trim().is_empty() {
        return Err("Contact cannot be empty");
    }
    if contact.len() > 100 {
        return Err("Contact must be at most 100 characters");
    }
    Ok(())
}
