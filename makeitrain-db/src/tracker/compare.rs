use rust_decimal::Decimal;
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Element of a collection owned by a record (for example a location).
///
/// Elements are matched by id. Once matched, `same_content` decides whether
/// the element itself changed; the default treats same-id elements as equal.
pub trait OwnedElement: Identifiable {
    fn same_content(&self, _other: &Self, _policy: &ComparisonPolicy) -> bool {
        true
    }
}

/// Equality rules shared by the dirty check, the change log and change summaries.
///
/// - scalars compare with `==` at the call site
/// - references to other entities compare by id only
/// - owned collections compare by element id, then by [`OwnedElement::same_content`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonPolicy {
    coordinate_tolerance: Option<Decimal>,
}

impl ComparisonPolicy {
    pub fn new(coordinate_tolerance: Option<Decimal>) -> Self {
        Self { coordinate_tolerance }
    }

    pub fn coordinate_tolerance(&self) -> Option<Decimal> {
        self.coordinate_tolerance
    }

    pub fn same_reference<T: Identifiable>(&self, a: Option<&T>, b: Option<&T>) -> bool {
        a.map(Identifiable::get_id) == b.map(Identifiable::get_id)
    }

    /// Order-insensitive comparison of reference lists by id
    pub fn same_references<T: Identifiable>(&self, a: &[T], b: &[T]) -> bool {
        if a.len() != b.len() {
            return false;
        }
        let mut left: Vec<Uuid> = a.iter().map(Identifiable::get_id).collect();
        let mut right: Vec<Uuid> = b.iter().map(Identifiable::get_id).collect();
        left.sort_unstable();
        right.sort_unstable();
        left == right
    }

    /// Order-insensitive comparison of owned elements
    pub fn same_collection<T: OwnedElement>(&self, a: &[T], b: &[T]) -> bool {
        if a.len() != b.len() {
            return false;
        }
        let by_id: HashMap<Uuid, &T> = b.iter().map(|item| (item.get_id(), item)).collect();
        if by_id.len() != b.len() {
            // Duplicate ids cannot be matched reliably; report a change.
            return false;
        }
        a.iter().all(|item| {
            by_id
                .get(&item.get_id())
                .is_some_and(|other| item.same_content(other, self))
        })
    }

    /// Coordinate equality under the configured tolerance.
    ///
    /// Without a tolerance coordinates never count as a change. A coordinate
    /// appearing or disappearing always does once a tolerance is set.
    pub fn same_coordinate(&self, a: Option<Decimal>, b: Option<Decimal>) -> bool {
        let Some(tolerance) = self.coordinate_tolerance else {
            return true;
        };
        match (a, b) {
            (Some(x), Some(y)) => (x - y).abs() <= tolerance,
            (None, None) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Pin {
        id: Uuid,
        lat: Option<Decimal>,
    }

    impl Identifiable for Pin {
        fn get_id(&self) -> Uuid {
            self.id
        }
    }

    impl OwnedElement for Pin {
        fn same_content(&self, other: &Self, policy: &ComparisonPolicy) -> bool {
            policy.same_coordinate(self.lat, other.lat)
        }
    }

    fn pin(id: Uuid, lat: &str) -> Pin {
        Pin { id, lat: Some(lat.parse().unwrap()) }
    }

    #[test]
    fn test_references_ignore_order() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let policy = ComparisonPolicy::default();
        assert!(policy.same_references(&[pin(a, "0"), pin(b, "0")], &[pin(b, "1"), pin(a, "1")]));
        assert!(!policy.same_references(&[pin(a, "0")], &[pin(b, "0")]));
    }

    #[test]
    fn test_collection_without_tolerance_matches_ids_only() {
        let id = Uuid::new_v4();
        let policy = ComparisonPolicy::default();
        assert!(policy.same_collection(&[pin(id, "40.0")], &[pin(id, "41.0")]));
        assert!(!policy.same_collection(&[pin(id, "40.0")], &[pin(Uuid::new_v4(), "40.0")]));
    }

    #[test]
    fn test_collection_with_tolerance_absorbs_noise() {
        let id = Uuid::new_v4();
        let policy = ComparisonPolicy::new(Some("0.0001".parse().unwrap()));
        assert!(policy.same_collection(&[pin(id, "40.00000001")], &[pin(id, "40.0")]));
        assert!(!policy.same_collection(&[pin(id, "40.01")], &[pin(id, "40.0")]));
    }

    #[test]
    fn test_duplicate_ids_report_change() {
        let id = Uuid::new_v4();
        let policy = ComparisonPolicy::default();
        assert!(!policy.same_collection(
            &[pin(id, "0"), pin(Uuid::new_v4(), "0")],
            &[pin(id, "0"), pin(id, "0")]
        ));
    }

    #[test]
    fn test_coordinate_appearing_is_a_change_with_tolerance() {
        let policy = ComparisonPolicy::new(Some(Decimal::ONE));
        assert!(!policy.same_coordinate(None, Some(Decimal::ZERO)));
        assert!(ComparisonPolicy::default().same_coordinate(None, Some(Decimal::ZERO)));
    }
}
