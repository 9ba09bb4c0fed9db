use serde::Serialize;

use crate::event::{CelebrationType, LiturgicalEvent};

/// A celebration seen as a saint biography card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaintOfDay {
    pub name: String,
    pub celebration_type: CelebrationType,
    pub description: String,
    pub patron_of: String,
    pub is_local: bool,
}

impl From<&LiturgicalEvent> for SaintOfDay {
    fn from(e: &LiturgicalEvent) -> Self {
        Self {
            name: e.title.clone(),
            celebration_type: e.celebration_type,
            description: e.description.clone().unwrap_or_default(),
            patron_of: e.patron_of.clone().unwrap_or_default(),
            is_local: e.is_local_celebration,
        }
    }
}

/// One card per event, in event order. Nothing is filtered or merged.
pub fn project_saints(events: &[LiturgicalEvent]) -> Vec<SaintOfDay> {
    events.iter().map(SaintOfDay::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::event;

    #[test]
    fn test_projection_preserves_order_and_duplicates() {
        let mut first = event("1", "2025-11-01", 10);
        first.title = "Todos los Santos".to_string();
        let mut second = event("2", "2025-11-01", 3);
        second.title = "Todos los Santos".to_string();
        second.is_local_celebration = true;
        second.patron_of = Some("Chile".to_string());

        let saints = project_saints(&[first, second]);
        assert_eq!(saints.len(), 2);
        assert_eq!(saints[0].name, "Todos los Santos");
        assert_eq!(saints[1].name, "Todos los Santos");
        assert!(!saints[0].is_local);
        assert!(saints[1].is_local);
        assert_eq!(saints[1].patron_of, "Chile");
        assert_eq!(saints[0].description, "");
    }

    #[test]
    fn test_empty_projection() {
        assert!(project_saints(&[]).is_empty());
    }
}
