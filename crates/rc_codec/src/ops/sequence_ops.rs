use crate::Codable;

/// Item access for list and set values.
pub trait Sequence: Codable {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the items, sets in their own iteration order.
    fn iter_items(&self) -> Box<dyn Iterator<Item = &dyn Codable> + '_>;
}
