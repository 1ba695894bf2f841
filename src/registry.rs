use crate::layout::CountryLayout;
use crate::reference::{CountryEntry, COUNTRY_TABLE};
use std::collections::HashMap;
use std::sync::OnceLock;

static STANDARD: OnceLock<CountryRegistry> = OnceLock::new();

/// Country code to layout table. Populated once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct CountryRegistry {
    layouts: HashMap<String, CountryLayout>,
}

impl CountryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_table(table: &[CountryEntry]) -> Self {
        let mut registry = Self::new();
        for (code, name, template, is_sepa, currency) in table {
            registry.register(CountryLayout::new(code, name, template, *is_sepa, currency));
        }
        registry
    }

    /// The compiled-in table, built on first use.
    pub fn standard() -> &'static CountryRegistry {
        STANDARD.get_or_init(|| {
            let registry = Self::from_table(COUNTRY_TABLE);
            log::debug!("loaded {} IBAN country layouts", registry.len());
            registry
        })
    }

    /// Adds a layout keyed by its country code; an existing entry is replaced.
    pub fn register(&mut self, layout: CountryLayout) {
        let code = layout.country_code().to_string();
        if self.layouts.insert(code.clone(), layout).is_some() {
            log::debug!("replaced IBAN layout for {}", code);
        }
    }

    /// Case-insensitive lookup on the first two characters of `code`.
    pub fn lookup(&self, code: &str) -> Option<&CountryLayout> {
        let prefix: String = code.chars().take(2).collect();
        self.layouts.get(&prefix.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Layouts sorted by country code.
    pub fn layouts(&self) -> Vec<&CountryLayout> {
        let mut layouts: Vec<&CountryLayout> = self.layouts.values().collect();
        layouts.sort_by(|a, b| a.country_code().cmp(b.country_code()));
        layouts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_is_loaded_once() {
        let first = CountryRegistry::standard();
        let second = CountryRegistry::standard();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), COUNTRY_TABLE.len());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = CountryRegistry::standard();
        assert_eq!(registry.lookup("it").map(|l| l.country_code()), Some("IT"));
        assert_eq!(
            registry.lookup("it60x0542811101000000123456").map(|l| l.country_name()),
            Some("ITALY")
        );
        assert!(registry.lookup("ZZ").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn slovakia_and_slovenia_are_distinct() {
        let registry = CountryRegistry::standard();
        assert_eq!(registry.lookup("SK").map(|l| l.total_length()), Some(24));
        assert_eq!(registry.lookup("SI").map(|l| l.total_length()), Some(19));
    }

    #[test]
    fn register_overwrites_duplicates() {
        let mut registry = CountryRegistry::new();
        registry.register(CountryLayout::new("XX", "FIRST", "XX00BBCC", false, "EUR"));
        registry.register(CountryLayout::new("XX", "SECOND", "XX00BBBCCC", false, "EUR"));
        assert_eq!(registry.len(), 1);
        let layout = registry.lookup("xx").unwrap();
        assert_eq!(layout.country_name(), "SECOND");
        assert_eq!(layout.total_length(), 10);
    }

    #[test]
    fn layouts_are_sorted() {
        let registry = CountryRegistry::standard();
        let codes: Vec<&str> = registry.layouts().iter().map(|l| l.country_code()).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
    }
}
