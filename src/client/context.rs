//! # `QuickBooks` Online context
//!
//! A [`QBContext`] carries what every report request needs: the environment
//! to talk to, the company (realm) id and the OAuth access token.
//!
//! ```no_run
//! use quick_oxisheets::{Environment, QBContext};
//!
//! // From QB_COMPANY_ID and QB_ACCESS_TOKEN
//! let context = QBContext::new_from_env(Environment::from_env()).unwrap();
//!
//! // Or manually
//! let context = QBContext::new(
//!     Environment::PRODUCTION,
//!     "company_id".to_string(),
//!     "access_token".to_string(),
//! );
//! ```
//!
//! Obtaining and refreshing the access token is left to the caller.

use crate::{APIResult, Environment};

/// Context for report requests against the `QuickBooks` Online API.
#[derive(Clone)]
pub struct QBContext {
    pub(crate) environment: Environment,
    pub(crate) company_id: String,
    pub(crate) access_token: String,
}

impl QBContext {
    /// Creates a new `QBContext` with the given parameters
    #[must_use]
    pub fn new(environment: Environment, company_id: String, access_token: String) -> Self {
        Self {
            environment,
            company_id,
            access_token,
        }
    }

    /// Creates a new `QBContext` from environment variables
    ///
    /// Environment variables:
    /// - `QB_COMPANY_ID`
    /// - `QB_ACCESS_TOKEN`
    ///
    /// # Errors
    ///
    /// `EnvVar` if either variable is missing
    pub fn new_from_env(environment: Environment) -> APIResult<Self> {
        let company_id = std::env::var("QB_COMPANY_ID")?;
        let access_token = std::env::var("QB_ACCESS_TOKEN")?;
        Ok(Self::new(environment, company_id, access_token))
    }

    /// Swaps in a freshly issued access token
    #[must_use]
    pub fn with_access_token(self, access_token: String) -> Self {
        Self {
            access_token,
            ..self
        }
    }

    #[must_use]
    pub fn company_id(&self) -> &str {
        &self.company_id
    }

    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment
    }
}

// Keeps the token out of logs
impl std::fmt::Debug for QBContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QBContext")
            .field("environment", &self.environment)
            .field("company_id", &self.company_id)
            .field("access_token", &"<redacted>")
            .finish()
    }
}
