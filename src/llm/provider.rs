//! Gateway configuration — credential, model, and endpoint resolution.
//!
//! Everything comes from the environment, optionally seeded from a dotenv
//! file at startup. The key is read fresh on every call so a key saved
//! mid-session is picked up without a restart.

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Load `.env.local` then `.env` from the working directory.
/// First file found wins; missing files are not an error.
pub fn load_env() {
    for env_file in [".env.local", ".env"] {
        let path = std::path::Path::new(env_file);
        if path.exists() {
            match dotenvy::from_path(path) {
                Ok(_) => eprintln!("[STARTUP] Loaded {}", path.display()),
                Err(e) => eprintln!("[STARTUP] Failed to load {}: {}", path.display(), e),
            }
            break;
        }
    }
}

/// The API key, if a non-empty one is set.
pub fn api_key() -> Option<String> {
    std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty())
}

/// Whether a credential is available. The front end refuses to start a
/// classification without one.
pub fn is_configured() -> bool {
    api_key().is_some()
}

/// Model identifier, overridable via `ECOGUIDE_MODEL`.
pub fn model() -> String {
    std::env::var("ECOGUIDE_MODEL")
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

/// Endpoint base URL, overridable via `ECOGUIDE_API_BASE`.
pub fn api_base() -> String {
    std::env::var("ECOGUIDE_API_BASE")
        .ok()
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}
