/// Full swipe allowance granted to a profile on registration and on each refill.
pub const SWIPE_ALLOWANCE: i32 = 50;

/// Cooldown before a drained (or partially drained) allowance refills.
pub const SWIPE_COOLDOWN_HOURS: i64 = 12;

/// Upper bound on the number of candidates returned by the feed query.
pub const CANDIDATE_LIMIT: i64 = 50;

pub struct Env {
    pub database_url: String,
    pub frontend_url: String,
    pub ip: String,
    pub port: u16,
}

impl Env {
    fn new() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set in .env file or environment variable");

        let frontend_url =
            std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());
        let ip = std::env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16 integer");
        Env { database_url, frontend_url, ip, port }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
