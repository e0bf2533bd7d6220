use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub hall: HallConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

// Настройки базы данных
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
}

/// Размеры зала: количество рядов и мест в ряде. Общие для всех сеансов,
/// загружаются один раз при старте и дальше не меняются.
#[derive(Debug, Clone, Deserialize)]
pub struct HallConfig {
    pub rows: i32,
    pub cells: i32,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "cinema=debug,tower_http=debug".to_string()),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
                pool_size: env::var("DB_POOL_SIZE")
                    .unwrap_or_else(|_| "20".to_string())
                    .parse()
                    .expect("DB_POOL_SIZE must be a valid number"),
            },
            hall: HallConfig {
                rows: env::var("HALL_ROWS")
                    .unwrap_or_else(|_| "7".to_string())
                    .parse()
                    .expect("HALL_ROWS must be a positive number"),
                cells: env::var("HALL_CELLS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .expect("HALL_CELLS must be a positive number"),
            },
        }
    }
}
