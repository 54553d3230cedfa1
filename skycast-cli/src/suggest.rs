//! City-name autocompletion against a fixed demo list.

use inquire::{Autocomplete, CustomUserError, autocompletion::Replacement};

/// Demo suggestion list; a real build would ask a geocoding service instead.
const DEMO_CITIES: &[&str] = &[
    "London, UK",
    "New York, USA",
    "Tokyo, Japan",
    "Paris, France",
    "Sydney, Australia",
    "Mumbai, India",
    "Berlin, Germany",
    "São Paulo, Brazil",
];

/// Case-insensitive substring match; suggestions only kick in once more than
/// two characters are typed.
pub fn suggestions(query: &str) -> Vec<String> {
    let query = query.trim();
    if query.chars().count() <= 2 {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    DEMO_CITIES
        .iter()
        .filter(|city| city.to_lowercase().contains(&needle))
        .map(|city| (*city).to_string())
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct CitySuggester;

impl Autocomplete for CitySuggester {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, CustomUserError> {
        Ok(suggestions(input))
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, CustomUserError> {
        // Picking "London, UK" searches for "London".
        Ok(highlighted_suggestion
            .map(|city| city.split(',').next().unwrap_or_default().to_string()))
    }
}
