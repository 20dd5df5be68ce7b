use jsonwebtoken::Algorithm;

/// Server configuration loaded from environment variables.
///
/// Everything except the token issuer settings has a local-development
/// default.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Token issuer settings for the permission-gated routes.
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                       |
    /// |------------------------|-----------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                     |
    /// | `PORT`                 | `3000`                                        |
    /// | `CORS_ORIGINS`         | `http://localhost:8100,http://localhost:3000` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                          |
    ///
    /// See [`AuthConfig::from_env`] for the issuer variables.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = split_list(
            &std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:8100,http://localhost:3000".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            auth: AuthConfig::from_env(),
        }
    }
}

/// Where bearer tokens come from and what they must say.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Issuer tenant domain, e.g. `example.us.auth0.com`.
    pub domain: String,
    /// Expected `aud` claim.
    pub audience: String,
    /// Signing algorithms a token header may declare.
    pub algorithms: Vec<Algorithm>,
}

impl AuthConfig {
    /// | Env Var           | Required | Default |
    /// |-------------------|----------|---------|
    /// | `AUTH0_DOMAIN`    | **yes**  | --      |
    /// | `API_AUDIENCE`    | **yes**  | --      |
    /// | `AUTH_ALGORITHMS` | no       | `RS256` |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing or an algorithm name is unknown.
    pub fn from_env() -> Self {
        let domain = std::env::var("AUTH0_DOMAIN").expect("AUTH0_DOMAIN must be set");
        let audience = std::env::var("API_AUDIENCE").expect("API_AUDIENCE must be set");

        let algorithms = split_list(
            &std::env::var("AUTH_ALGORITHMS").unwrap_or_else(|_| "RS256".into()),
        )
        .iter()
        .map(|name| {
            name.parse()
                .unwrap_or_else(|_| panic!("Unknown signing algorithm '{name}'"))
        })
        .collect();

        Self {
            domain,
            audience,
            algorithms,
        }
    }

    /// Expected `iss` claim.
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain)
    }

    /// Where the issuer publishes its signing keys.
    pub fn jwks_url(&self) -> String {
        format!("{}.well-known/jwks.json", self.issuer())
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
