//! Access and refresh token issuance.
//!
//! Both token kinds are stateless HS256 JWTs signed with separate secrets:
//! a short-lived access token carrying the user id and role, and a
//! longer-lived refresh token carrying only the user id. Nothing is stored
//! server-side, so a token stays valid until its natural expiry.

pub mod claims;
pub mod errors;
pub mod issuer;

pub use claims::AccessClaims;
pub use claims::RefreshClaims;
pub use errors::TokenError;
pub use issuer::TokenIssuer;
