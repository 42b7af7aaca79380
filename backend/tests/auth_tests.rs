//! Authentication and authorization tests
//!
//! Token round-trips use the same claims shape the middleware decodes;
//! the capability matrix is checked against both roles.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use shared::models::Role;

use inventory_tracker_backend::permissions::{is_authorized, Action};
use inventory_tracker_backend::services::auth::Claims;

const TEST_SECRET: &str = "test-secret";

fn claims_for(user_id: i64, role: Role) -> Claims {
    let now = Utc::now();
    Claims {
        sub: user_id.to_string(),
        role: role.as_str().to_string(),
        exp: (now + Duration::seconds(3600)).timestamp(),
        iat: now.timestamp(),
    }
}

fn round_trip(claims: &Claims) -> Claims {
    let token = encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    decode::<Claims>(
        &token,
        &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
        &Validation::default(),
    )
    .unwrap()
    .claims
}

#[test]
fn test_token_round_trip_preserves_identity() {
    let claims = claims_for(42, Role::Admin);
    let decoded = round_trip(&claims);

    assert_eq!(decoded.sub, "42");
    assert_eq!(decoded.role, "admin");
    assert_eq!(decoded.sub.parse::<i64>().unwrap(), 42);
    assert_eq!(Role::parse(&decoded.role), Some(Role::Admin));
}

#[test]
fn test_customer_token_round_trip() {
    let decoded = round_trip(&claims_for(7, Role::Customer));
    assert_eq!(Role::parse(&decoded.role), Some(Role::Customer));
}

#[test]
fn test_expired_token_is_rejected() {
    let now = Utc::now();
    let claims = Claims {
        sub: "1".to_string(),
        role: "customer".to_string(),
        exp: (now - Duration::seconds(120)).timestamp(),
        iat: (now - Duration::seconds(3720)).timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let result = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
        &Validation::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_token_with_wrong_secret_is_rejected() {
    let token = encode(
        &Header::default(),
        &claims_for(1, Role::Customer),
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let result = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(b"other-secret"),
        &Validation::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_purchase_needs_only_authentication() {
    // The purchase endpoint has no role restriction beyond login.
    assert!(is_authorized(Role::Admin, Action::Purchase));
    assert!(is_authorized(Role::Customer, Action::Purchase));
}

#[test]
fn test_catalog_writes_are_admin_only() {
    assert!(is_authorized(Role::Admin, Action::WriteItems));
    assert!(is_authorized(Role::Admin, Action::WriteSuppliers));
    assert!(!is_authorized(Role::Customer, Action::WriteItems));
    assert!(!is_authorized(Role::Customer, Action::WriteSuppliers));
}
