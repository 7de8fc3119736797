// SPDX-License-Identifier: GPL-3.0-only

use std::env;
use std::num::ParseIntError;

use dotenvy::dotenv;
use pagina_utils::pagination::{ListContext, PaginationError};
use thiserror::Error;
use tracing::debug;

pub const TOTAL_ITEMS_VAR: &str = "PAGINA_TOTAL_ITEMS";
pub const PAGE_SIZE_VAR: &str = "PAGINA_PAGE_SIZE";

pub const DEFAULT_TOTAL_ITEMS: usize = 120;
pub const DEFAULT_PAGE_SIZE: usize = 13;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber {
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error(transparent)]
    Pagination(#[from] PaginationError),
}

/// Settings of the catalog list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSettings {
    pub total_items: usize,
    pub page_size: usize,
}

impl Default for ListSettings {
    fn default() -> Self {
        ListSettings {
            total_items: DEFAULT_TOTAL_ITEMS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListSettings {
    /// Reads the settings from the environment (and the .env file, if any)
    pub fn load() -> Result<ListSettings, anywho::Error> {
        // Load .env file
        dotenv().ok();

        let settings = Self::from_lookup(|key| env::var(key).ok())?;
        Ok(settings)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<ListSettings, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ListSettings::default();
        let total_items = read_number(&lookup, TOTAL_ITEMS_VAR)?.unwrap_or(defaults.total_items);
        let page_size = read_number(&lookup, PAGE_SIZE_VAR)?.unwrap_or(defaults.page_size);

        if page_size == 0 {
            return Err(PaginationError::InvalidPageSize { page_size }.into());
        }

        debug!(total_items, page_size, "list settings loaded");
        Ok(ListSettings {
            total_items,
            page_size,
        })
    }

    pub fn list_context(&self) -> ListContext {
        ListContext {
            total: self.total_items,
            per_page: self.page_size,
            current_page: None,
        }
    }
}

fn read_number<F>(lookup: &F, key: &'static str) -> Result<Option<usize>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(key) else {
        return Ok(None);
    };

    value
        .trim()
        .parse::<usize>()
        .map(Some)
        .map_err(|source| ConfigError::InvalidNumber { key, value, source })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn missing_variables_use_defaults() {
        let settings = ListSettings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, ListSettings::default());
        assert_eq!(settings.page_size, 13);
    }

    #[test]
    fn variables_override_defaults() {
        let settings = ListSettings::from_lookup(lookup(&[
            (TOTAL_ITEMS_VAR, "42"),
            (PAGE_SIZE_VAR, " 5 "),
        ]))
        .unwrap();

        assert_eq!(
            settings,
            ListSettings {
                total_items: 42,
                page_size: 5,
            }
        );
        assert_eq!(
            settings.list_context(),
            ListContext {
                total: 42,
                per_page: 5,
                current_page: None,
            }
        );
    }

    #[test]
    fn rejects_non_numeric_values() {
        let error = ListSettings::from_lookup(lookup(&[(TOTAL_ITEMS_VAR, "-3")])).unwrap_err();
        assert!(matches!(
            error,
            ConfigError::InvalidNumber {
                key: TOTAL_ITEMS_VAR,
                ..
            }
        ));
    }

    #[test]
    fn rejects_empty_pages() {
        let error = ListSettings::from_lookup(lookup(&[(PAGE_SIZE_VAR, "0")])).unwrap_err();
        assert_eq!(
            error,
            ConfigError::Pagination(PaginationError::InvalidPageSize { page_size: 0 })
        );
    }
}
