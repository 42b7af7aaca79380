//! Authentication service for account creation, login, and tokens

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared::models::{Role, User};
use shared::validation::{validate_password, validate_username};
use sqlx::PgPool;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    db: PgPool,
    jwt_secret: String,
    access_token_expiry: i64,
}

/// Input for registering a new account
#[derive(Debug, Deserialize)]
pub struct RegisterInput {
    pub username: String,
    pub password: String,
    /// Admin accounts get full catalog write access.
    #[serde(default)]
    pub is_admin: bool,
}

/// Input for logging in
#[derive(Debug, Deserialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication token response
#[derive(Debug, Serialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// User record from the database
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AppResult<User> {
        let role = Role::parse(&self.role)
            .ok_or_else(|| AppError::Internal(format!("Unknown role in database: {}", self.role)))?;
        Ok(User {
            id: self.id,
            username: self.username,
            role,
            created_at: self.created_at,
        })
    }
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(db: PgPool, config: &Config) -> Self {
        Self {
            db,
            jwt_secret: config.jwt.secret.clone(),
            access_token_expiry: config.jwt.access_token_expiry,
        }
    }

    /// Register a new account
    pub async fn register(&self, input: RegisterInput) -> AppResult<User> {
        Self::check(validate_username(&input.username), "username")?;
        Self::check(validate_password(&input.password), "password")?;

        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)",
        )
        .bind(&input.username)
        .fetch_one(&self.db)
        .await?;

        if taken {
            return Err(AppError::DuplicateEntry("username".to_string()));
        }

        let password_hash = hash(&input.password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

        let role = if input.is_admin {
            Role::Admin
        } else {
            Role::Customer
        };

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, password_hash, role)
            VALUES ($1, $2, $3)
            RETURNING id, username, password_hash, role, created_at
            "#,
        )
        .bind(&input.username)
        .bind(&password_hash)
        .bind(role.as_str())
        .fetch_one(&self.db)
        .await?;

        tracing::info!(user_id = row.id, "User created successfully");
        row.into_user()
    }

    /// Authenticate with username and password
    pub async fn login(&self, input: LoginInput) -> AppResult<AuthTokens> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password_hash, role, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(&input.username)
        .fetch_optional(&self.db)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

        let valid = verify(&input.password, &row.password_hash)
            .map_err(|e| AppError::Internal(format!("Password verification failed: {}", e)))?;

        if !valid {
            return Err(AppError::InvalidCredentials);
        }

        let user = row.into_user()?;
        self.generate_token(user.id, user.role)
    }

    /// Generate an access token for a user
    pub fn generate_token(&self, user_id: i64, role: Role) -> AppResult<AuthTokens> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.access_token_expiry);

        let claims = Claims {
            sub: user_id.to_string(),
            role: role.as_str().to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        let access_token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))?;

        Ok(AuthTokens {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.access_token_expiry,
        })
    }

    /// Validate an access token and return its claims
    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

        Ok(token_data.claims)
    }

    fn check(result: Result<(), &'static str>, field: &str) -> AppResult<()> {
        result.map_err(|message| AppError::Validation {
            field: field.to_string(),
            message: message.to_string(),
        })
    }
}
