//! Interactive lookup session: search a city, render, toggle units, repeat.

use inquire::{InquireError, Select, Text};
use skycast_core::{AppState, Config, WeatherProvider, lookup, render};
use tracing::debug;

use crate::{output, suggest::CitySuggester};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Search,
    ToggleUnit,
    Quit,
}

impl Action {
    const fn all() -> &'static [Action] {
        &[Action::Search, Action::ToggleUnit, Action::Quit]
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Action::Search => "Search another city",
            Action::ToggleUnit => "Toggle °C / °F",
            Action::Quit => "Quit",
        };
        f.write_str(label)
    }
}

pub async fn run(config: &Config) -> anyhow::Result<()> {
    let provider = skycast_core::provider::default_provider_from_config(config)?;
    let mut state = AppState::new();

    // First paint: look up the configured default city.
    lookup_and_store(provider.as_ref(), &config.default_city, &mut state).await;
    print_current(&state);

    loop {
        let action = match Select::new("What next?", Action::all().to_vec()).prompt() {
            Ok(action) => action,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        match action {
            Action::Search => {
                let query = match Text::new("City:")
                    .with_autocomplete(CitySuggester)
                    .prompt()
                {
                    Ok(query) => query,
                    Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                        continue;
                    }
                    Err(err) => return Err(err.into()),
                };

                lookup_and_store(provider.as_ref(), &query, &mut state).await;
                print_current(&state);
            }
            Action::ToggleUnit => {
                // Projection change only: no lookup, the snapshot is reused.
                let unit = state.toggle_unit();
                debug!(unit = %unit, "display unit toggled");
                print_current(&state);
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

/// Run one lookup; failures are printed and the session keeps going.
async fn lookup_and_store(
    provider: &dyn WeatherProvider,
    query: &str,
    state: &mut AppState,
) {
    println!("Fetching weather...");

    match lookup(provider, query).await {
        Ok(snapshot) => state.set_snapshot(snapshot),
        Err(err) => eprintln!("{err}"),
    }
}

fn print_current(state: &AppState) {
    if let Some(frame) = render(state) {
        output::print_frame(&frame);
    }
}
