//! Authentication utilities library
//!
//! Provides the credential primitives for the authentication service:
//! - Password hashing (Argon2id) and password-policy validation
//! - Access/refresh JWT issuance and verification
//!
//! The library knows nothing about HTTP or persistence; the service wires
//! these pieces into its own flows.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("Abcdef1!").unwrap();
//! assert!(hasher.verify("Abcdef1!", &hash).unwrap());
//! ```
//!
//! ## Password Policy
//! ```
//! use auth::password::policy;
//!
//! assert!(policy::violations("Abcdef1!").is_empty());
//! assert_eq!(policy::violations("abcdef1!").len(), 1);
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenIssuer;
//! use chrono::Duration;
//!
//! let issuer = TokenIssuer::new(
//!     b"access_secret_key_at_least_32_bytes!",
//!     b"refresh_secret_key_at_least_32_byte!",
//!     Duration::minutes(15),
//!     Duration::days(7),
//! );
//! let token = issuer.generate_refresh_token("user-1").unwrap();
//! let claims = issuer.verify_refresh_token(&token).unwrap();
//! assert_eq!(claims.sub, "user-1");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PolicyViolation;
pub use token::AccessClaims;
pub use token::RefreshClaims;
pub use token::TokenError;
pub use token::TokenIssuer;
