use crate::Codable;

/// Entry access for mapping values.
pub trait Mapping: Codable {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the `(key, value)` entries.
    fn iter_entries(&self) -> Box<dyn Iterator<Item = (&dyn Codable, &dyn Codable)> + '_>;
}
