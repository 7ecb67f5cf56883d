// ============================================================
// TYPE OBSERVATION SET
// ============================================================
// Bitset of the type tags seen in one column, and its reduction
// to a single column type

use super::ColumnType;

/// Set of distinct tags observed for a column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeSet(u8);

impl TypeSet {
    pub const fn new() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, tag: ColumnType) {
        self.0 |= tag.bit();
    }

    pub fn contains(&self, tag: ColumnType) -> bool {
        self.0 & tag.bit() != 0
    }

    pub fn remove(&mut self, tag: ColumnType) {
        self.0 &= !tag.bit();
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in tag order
    pub fn iter(&self) -> impl Iterator<Item = ColumnType> + '_ {
        ColumnType::ALL.into_iter().filter(move |t| self.contains(*t))
    }

    /// Collapse the observations into the column's type.
    ///
    /// Empties are discarded first. A single remaining tag wins; any `str`
    /// forces `str`; exactly int and float widens to `float`; everything
    /// else is `mixed`.
    pub fn reduce(&self) -> ColumnType {
        let mut seen = *self;
        seen.remove(ColumnType::Empty);

        if seen.is_empty() {
            return ColumnType::Unknown;
        }
        if seen.len() == 1 {
            // Only one bit left
            return seen.iter().next().unwrap_or(ColumnType::Unknown);
        }
        if seen.contains(ColumnType::Str) {
            return ColumnType::Str;
        }
        if seen == TypeSet::from_iter([ColumnType::Int, ColumnType::Float]) {
            return ColumnType::Float;
        }
        ColumnType::Mixed
    }
}

impl FromIterator<ColumnType> for TypeSet {
    fn from_iter<I: IntoIterator<Item = ColumnType>>(iter: I) -> Self {
        let mut set = TypeSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}
