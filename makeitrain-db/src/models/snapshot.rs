/// Capability of producing an independent value copy of a record for use as
/// a comparison baseline.
///
/// Implemented by every record and owned sub-record type. Container types
/// snapshot element by element, so a record owning a `Vec` of sub-records
/// gets nested snapshots by calling `snapshot()` on the field.
///
/// A snapshot carries tracked state only: change logs are not copied.
pub trait SnapshotProvider {
    fn snapshot(&self) -> Self;
}

impl<T: SnapshotProvider> SnapshotProvider for Vec<T> {
    fn snapshot(&self) -> Self {
        self.iter().map(SnapshotProvider::snapshot).collect()
    }
}

impl<T: SnapshotProvider> SnapshotProvider for Option<T> {
    fn snapshot(&self) -> Self {
        self.as_ref().map(SnapshotProvider::snapshot)
    }
}
