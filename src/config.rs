//! Application configuration module / Modul konfigurasi aplikasi
//!
//! Reads config.json from the working directory and writes a default one
//! on first run / Membaca config.json dan membuat berkas bawaan saat
//! pertama dijalankan

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Global configuration instance / Instansi konfigurasi global
static CONFIG: OnceCell<Arc<RwLock<AppConfig>>> = OnceCell::new();

/// Application configuration / Konfigurasi aplikasi
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration / Konfigurasi server
    pub server: ServerConfig,
    /// Site presentation / Tampilan situs
    pub site: SiteConfig,
    /// Lookup configuration / Konfigurasi pencarian
    pub search: SearchConfig,
}

/// Server configuration / Konfigurasi server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address / Alamat host server
    pub host: String,
    /// Server port / Port server
    pub port: u16,
}

/// Site presentation / Tampilan situs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Title shown on the lookup page / Judul halaman pencarian
    pub title: String,
}

/// Lookup configuration / Konfigurasi pencarian
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of results per lookup / Jumlah maksimum hasil pencarian
    pub max_results: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            site: SiteConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Kamus Bugis – Indonesia".to_string(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_results: 25 }
    }
}

impl AppConfig {
    /// Get the server bind address / Alamat bind server
    pub fn get_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Get the config file path / Lokasi berkas konfigurasi
fn get_config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.json")
}

/// Load configuration from file, or create default if not exists / Muat konfigurasi, buat bawaan jika belum ada
pub fn load_config() -> Result<AppConfig, String> {
    let config_path = get_config_path();

    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config file: {}", e))?;

        tracing::info!("Loaded configuration from {:?}", config_path);
        Ok(config)
    } else {
        let config = AppConfig::default();
        save_config(&config)?;
        tracing::info!("Created default configuration at {:?}", config_path);
        Ok(config)
    }
}

/// Save configuration to file / Simpan konfigurasi ke berkas
pub fn save_config(config: &AppConfig) -> Result<(), String> {
    let config_path = get_config_path();

    let content = serde_json::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(&config_path, content)
        .map_err(|e| format!("Failed to write config file: {}", e))?;

    Ok(())
}

/// Initialize global configuration / Inisialisasi konfigurasi global
pub fn init_config() -> Result<Arc<RwLock<AppConfig>>, String> {
    let config = load_config()?;

    let config_arc = Arc::new(RwLock::new(config));

    CONFIG
        .set(config_arc.clone())
        .map_err(|_| "Config already initialized".to_string())?;

    Ok(config_arc)
}

/// Get global configuration instance / Ambil instansi konfigurasi global
pub fn get_config() -> Arc<RwLock<AppConfig>> {
    CONFIG
        .get_or_init(|| {
            let config = load_config().unwrap_or_default();
            Arc::new(RwLock::new(config))
        })
        .clone()
}

/// Get a read-only snapshot of current config / Ambil salinan konfigurasi saat ini
pub fn config() -> AppConfig {
    get_config().read().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.search.max_results, 25);
        assert!(!config.site.title.is_empty());
    }

    #[test]
    fn test_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.get_bind_address(), "127.0.0.1:5000");
    }
}
