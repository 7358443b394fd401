use std::fmt::Debug;
use std::hash::Hash;

use super::auditable::Auditable;
use super::snapshot::SnapshotProvider;
use crate::tracker::compare::ComparisonPolicy;
use crate::tracker::render::FieldRenderer;

/// Tag of one tracked field of a record type.
///
/// Implemented by a fieldless enum per record type. `ALL` lists every
/// variant; implementations of [`Trackable`] match on the enum exhaustively,
/// so adding a variant forces a comparison, render, restore and clear rule.
pub trait TrackedField: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Every tracked field, in declaration order
    const ALL: &'static [Self];

    /// Stable snake_case name used in change logs and change summaries
    fn name(&self) -> &'static str;
}

/// A record whose tracked fields can be compared, rendered, restored and
/// cleared one at a time.
pub trait Trackable: Auditable + SnapshotProvider {
    /// Fields compared when reconciling two independently obtained copies
    const SIGNIFICANT: &'static [Self::Field];

    /// Whether `field` differs between `self` and `baseline` under `policy`
    fn field_differs(&self, baseline: &Self, field: Self::Field, policy: &ComparisonPolicy) -> bool;

    /// Display value of `field`; `None` when the field holds no value
    fn render_field(&self, field: Self::Field, renderer: &FieldRenderer) -> Option<String>;

    /// Overwrite `field` on `self` with the value held by `source`
    fn restore_field(&mut self, source: &Self, field: Self::Field);

    /// Reset `field` to the empty baseline. Owned collections are left intact.
    fn clear_field(&mut self, field: Self::Field);
}
