use poem::middleware::Cors;
use std::env;

/// Initialize CORS middleware for the JSON endpoints
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins.
///   Unset means any origin, matching the public logo proxy.
///
/// The API is read-only and unauthenticated, so credentials stay disabled.
pub fn init_cors() -> Cors {
    let cors = Cors::new()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"])
        .allow_credentials(false);

    match env::var("CORS_ALLOWED_ORIGINS") {
        Ok(allowed_origins) if !allowed_origins.trim().is_empty() => {
            let origins: Vec<&str> = allowed_origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .collect();
            cors.allow_origins(origins)
        }
        _ => cors,
    }
}
