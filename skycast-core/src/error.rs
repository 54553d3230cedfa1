use thiserror::Error;

/// Failure taxonomy for a weather lookup.
///
/// None of these are fatal: callers surface the message and keep the session
/// alive. The `Display` strings are the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The query was empty or all whitespace; no provider call is made.
    #[error("Please enter a city name.")]
    EmptyQuery,

    /// The provider has no location matching the query.
    #[error("No weather data found for '{0}'. Check the city name and try again.")]
    UnknownLocation(String),

    /// Temporary provider-side trouble; retrying may succeed. The reason is
    /// kept for logs, not shown to the user.
    #[error("Unable to fetch weather data. Please try again.")]
    Transient(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(LookupError::EmptyQuery.to_string(), "Please enter a city name.");
        assert_eq!(
            LookupError::UnknownLocation("Atlantis".into()).to_string(),
            "No weather data found for 'Atlantis'. Check the city name and try again."
        );
        assert_eq!(
            LookupError::Transient("socket reset".into()).to_string(),
            "Unable to fetch weather data. Please try again."
        );
    }
}
