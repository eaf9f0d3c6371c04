//! Navigation boundary of the enquiry workflow.

use stay_core::enums::Route;

/// Receives one-way navigation requests from the workflow.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// Navigator that only remembers where it was sent.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    history: Vec<Route>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn history(&self) -> &[Route] {
        &self.history
    }

    #[must_use]
    pub fn current(&self) -> Option<&Route> {
        self.history.last()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, route: Route) {
        tracing::debug!(route = %route, "navigating");
        self.history.push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_history_in_order() {
        let mut navigator = RecordingNavigator::new();
        navigator.navigate(Route::Accommodations);
        navigator.navigate(Route::Confirmation);
        assert_eq!(navigator.history().len(), 2);
        assert_eq!(navigator.current(), Some(&Route::Confirmation));
    }
}
