use crate::eol_tracking::domain::LifeCycleRecord;

/// CycleResolver - selects the life-cycle record matching a version string.
///
/// Matching is exact (case-sensitive, no normalization). Family tables mix
/// pure numbers, codenames and year labels, which cannot be normalized
/// without per-family rules, so anything looser than byte equality risks a
/// false "covered" classification. Prefix and semver-range matching are
/// deliberately not offered.
pub struct CycleResolver;

impl CycleResolver {
    /// Returns the first record whose cycle label equals the version
    /// string, or `None` if no record qualifies.
    pub fn resolve<'a>(
        records: &'a [LifeCycleRecord],
        version: &str,
    ) -> Option<&'a LifeCycleRecord> {
        records.iter().find(|record| record.cycle() == version)
    }
}
