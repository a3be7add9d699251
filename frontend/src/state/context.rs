use super::routing::Tab;

/// Snapshot of the view context a request was issued under.
///
/// There is no request cancellation, so a slow response can land after
/// the user has already switched tab or pet. Each fetch captures the
/// context at spawn time and compares it against the live context before
/// applying the result; a mismatch means the response is stale and gets
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    pub tab: Tab,
    pub pet: Option<i64>,
}

impl RequestContext {
    pub fn new(tab: Tab) -> Self {
        Self { tab, pet: None }
    }

    /// Whether a response issued under `issued` may still be applied.
    pub fn accepts(&self, issued: RequestContext) -> bool {
        *self == issued
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new(Tab::Dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_context_accepts_response() {
        let issued = RequestContext::new(Tab::Dashboard);
        let current = issued;
        assert!(current.accepts(issued));
    }

    #[test]
    fn test_tab_switch_discards_in_flight_response() {
        let issued = RequestContext::new(Tab::Dashboard);
        let current = RequestContext::new(Tab::Pets);
        assert!(!current.accepts(issued));
    }

    #[test]
    fn test_pet_change_discards_in_flight_response() {
        let issued = RequestContext {
            tab: Tab::Vaccinations,
            pet: Some(5),
        };
        let current = RequestContext {
            tab: Tab::Vaccinations,
            pet: Some(8),
        };
        assert!(!current.accepts(issued));
    }
}
