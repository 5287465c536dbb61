use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub dictionary_path: String,
    pub grid_width: usize,
    pub grid_height: usize,
    pub page_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            dictionary_path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "./dictionary.txt".to_string()),
            grid_width: env::var("GRID_WIDTH")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .context("GRID_WIDTH must be a number")?,
            grid_height: env::var("GRID_HEIGHT")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .context("GRID_HEIGHT must be a number")?,
            page_size: env::var("PAGE_SIZE")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("PAGE_SIZE must be a number")?,
        })
    }
}
