use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;
use crate::models::snapshot::SnapshotProvider;
use crate::tracker::compare::{ComparisonPolicy, OwnedElement};

/// Place attached to a transaction. Owned by the transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationModel {
    pub id: Uuid,
    pub title: HeaplessString<100>,

    /// Geographical coordinates (decimal degrees)
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
}

impl LocationModel {
    /// Title, or the coordinates when the place has no title
    pub fn display_name(&self) -> String {
        if !self.title.is_empty() {
            return self.title.as_str().to_string();
        }
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => format!("{lat}, {lon}"),
            _ => self.id.to_string(),
        }
    }
}

impl Identifiable for LocationModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl SnapshotProvider for LocationModel {
    fn snapshot(&self) -> Self {
        self.clone()
    }
}

impl OwnedElement for LocationModel {
    fn same_content(&self, other: &Self, policy: &ComparisonPolicy) -> bool {
        policy.same_coordinate(self.latitude, other.latitude)
            && policy.same_coordinate(self.longitude, other.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn location(title: &str, lat: Option<&str>, lon: Option<&str>) -> LocationModel {
        LocationModel {
            id: Uuid::new_v4(),
            title: HeaplessString::try_from(title).unwrap(),
            latitude: lat.map(|v| Decimal::from_str(v).unwrap()),
            longitude: lon.map(|v| Decimal::from_str(v).unwrap()),
        }
    }

    #[test]
    fn test_display_name_falls_back_to_coordinates() {
        assert_eq!(location("Blue Bottle", None, None).display_name(), "Blue Bottle");
        assert_eq!(
            location("", Some("37.7763"), Some("-122.4232")).display_name(),
            "37.7763, -122.4232"
        );
    }

    #[test]
    fn test_same_content_uses_tolerance() {
        let original = location("Home", Some("37.7763"), Some("-122.4232"));
        let mut moved = original.clone();
        moved.latitude = Some(Decimal::from_str("37.77630001").unwrap());

        let strict = ComparisonPolicy::new(Some(Decimal::ZERO));
        let tolerant = ComparisonPolicy::new(Some(Decimal::from_str("0.0001").unwrap()));
        assert!(!original.same_content(&moved, &strict));
        assert!(original.same_content(&moved, &tolerant));
    }
}
