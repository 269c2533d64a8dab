use std::fmt;

/// One declared element of a smart enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetadataRow<R> {
    /// Position in declaration order, starting at 0.
    pub ordinal: usize,
    /// The element symbol as written in the declaration.
    pub symbol: &'static str,
    pub value: R,
    /// Display name, the symbol spelling unless overridden.
    pub name: &'static str,
    /// Description, the display name unless overridden.
    pub description: &'static str,
}

impl<R> MetadataRow<R> {
    pub const fn new(
        ordinal: usize,
        symbol: &'static str,
        value: R,
        name: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            ordinal,
            symbol,
            value,
            name,
            description,
        }
    }
}

impl<R: fmt::Display> fmt::Display for MetadataRow<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} = {} ({}: {})",
            self.ordinal, self.symbol, self.value, self.name, self.description
        )
    }
}

/// The rows of a smart enum in declaration order.
///
/// Tables are built in constants by `#[smart_enum]` and never change after
/// that, so sharing one between threads needs no synchronization.
pub struct MetadataTable<R: 'static> {
    rows: &'static [MetadataRow<R>],
}

impl<R: 'static> Clone for MetadataTable<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: 'static> Copy for MetadataTable<R> {}

impl<R: fmt::Debug + 'static> fmt::Debug for MetadataTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows).finish()
    }
}

impl<R: 'static> MetadataTable<R> {
    /// Creates a table over `rows`.
    ///
    /// # Panics
    ///
    /// Panics (or fails the build in a constant) if a row's ordinal is not its
    /// position in `rows`.
    pub const fn new(rows: &'static [MetadataRow<R>]) -> Self {
        let mut idx = 0;
        while idx < rows.len() {
            if rows[idx].ordinal != idx {
                panic!("metadata row ordinal does not match its position");
            }
            idx += 1;
        }
        Self { rows }
    }

    #[inline]
    pub const fn size(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row at `ordinal`.
    ///
    /// # Panics
    ///
    /// Panics when `ordinal >= self.size()`. In constant evaluation that is a
    /// build error.
    pub const fn row_at(&self, ordinal: usize) -> &'static MetadataRow<R> {
        let rows = self.rows;
        &rows[ordinal]
    }

    pub const fn get(&self, ordinal: usize) -> Option<&'static MetadataRow<R>> {
        let rows = self.rows;
        if ordinal < rows.len() {
            Some(&rows[ordinal])
        } else {
            None
        }
    }

    /// Finds the row whose display name is exactly `name`.
    pub const fn find_by_name(&self, name: &str) -> Option<&'static MetadataRow<R>> {
        let rows = self.rows;
        let mut idx = 0;
        while idx < rows.len() {
            if const_str_eq(rows[idx].name, name) {
                return Some(&rows[idx]);
            }
            idx += 1;
        }
        None
    }

    #[inline]
    pub const fn rows(&self) -> &'static [MetadataRow<R>] {
        self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'static, MetadataRow<R>> {
        self.rows.iter()
    }
}

impl<R: PartialEq + 'static> MetadataTable<R> {
    pub fn find_by_value(&self, value: &R) -> Option<&'static MetadataRow<R>> {
        self.rows.iter().find(|row| row.value == *value)
    }

    /// Declaration-order index of the row holding `value`.
    pub fn ordinal_of(&self, value: &R) -> Option<usize> {
        self.find_by_value(value).map(|row| row.ordinal)
    }
}

impl<R: 'static> IntoIterator for MetadataTable<R> {
    type Item = &'static MetadataRow<R>;
    type IntoIter = std::slice::Iter<'static, MetadataRow<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// String equality usable in constant evaluation.
pub const fn const_str_eq(left: &str, right: &str) -> bool {
    let left = left.as_bytes();
    let right = right.as_bytes();
    if left.len() != right.len() {
        return false;
    }
    let mut idx = 0;
    while idx < left.len() {
        if left[idx] != right[idx] {
            return false;
        }
        idx += 1;
    }
    true
}

#[cfg(test)]
mod unittests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const ROWS: &[MetadataRow<i32>] = &[
        MetadataRow::new(0, "Dog", 1, "dog", "dog_description"),
        MetadataRow::new(1, "Cat", 2, "cat", "cat"),
        MetadataRow::new(2, "Lion", 5, "Lion", "Lion"),
        MetadataRow::new(3, "Horse", 10, "hOrse", "hOrse"),
    ];
    const TABLE: MetadataTable<i32> = MetadataTable::new(ROWS);

    #[test]
    fn size() {
        assert_eq!(TABLE.size(), 4);
        assert!(!TABLE.is_empty());
        assert!(MetadataTable::<u8>::new(&[]).is_empty());
    }

    #[test]
    fn row_at_is_const() {
        const LION: &MetadataRow<i32> = TABLE.row_at(2);
        assert_eq!(LION.value, 5);
        assert_eq!(LION.symbol, "Lion");
    }

    #[test]
    #[should_panic]
    fn row_at_out_of_range() {
        TABLE.row_at(std::hint::black_box(TABLE.size()));
    }

    #[test]
    #[should_panic(expected = "metadata row ordinal does not match its position")]
    fn new_rejects_misplaced_ordinal() {
        static BAD: [MetadataRow<i32>; 2] = [
            MetadataRow::new(0, "A", 0, "A", "A"),
            MetadataRow::new(5, "B", 1, "B", "B"),
        ];
        MetadataTable::new(&BAD);
    }

    #[rstest]
    #[case::first(0, Some(1))]
    #[case::last(3, Some(10))]
    #[case::past_end(4, None)]
    #[case::far_past_end(usize::MAX, None)]
    fn get(#[case] ordinal: usize, #[case] value: Option<i32>) {
        assert_eq!(TABLE.get(ordinal).map(|row| row.value), value);
    }

    #[rstest]
    #[case::dog(1, Some(0))]
    #[case::lion(5, Some(2))]
    #[case::horse(10, Some(3))]
    #[case::zero(0, None)]
    #[case::undeclared(6666, None)]
    fn ordinal_of(#[case] value: i32, #[case] ordinal: Option<usize>) {
        assert_eq!(TABLE.ordinal_of(&value), ordinal);
        assert_eq!(TABLE.find_by_value(&value).map(|row| row.ordinal), ordinal);
    }

    #[rstest]
    #[case::dog("dog", Some(1))]
    #[case::horse("hOrse", Some(10))]
    #[case::symbol_is_not_name("Dog", None)]
    #[case::case_sensitive("horse", None)]
    #[case::prefix("do", None)]
    #[case::empty("", None)]
    fn find_by_name(#[case] name: &str, #[case] value: Option<i32>) {
        assert_eq!(TABLE.find_by_name(name).map(|row| row.value), value);
    }

    #[test]
    fn find_by_name_is_const() {
        const CAT: Option<&MetadataRow<i32>> = TABLE.find_by_name("cat");
        assert_eq!(CAT.map(|row| row.ordinal), Some(1));
    }

    #[test]
    fn iteration_follows_declaration_order() {
        let symbols: Vec<_> = TABLE.iter().map(|row| row.symbol).collect();
        assert_eq!(symbols, ["Dog", "Cat", "Lion", "Horse"]);
        let ordinals: Vec<_> = TABLE.into_iter().map(|row| row.ordinal).collect();
        assert_eq!(ordinals, [0, 1, 2, 3]);
    }

    fn collect_values<R: Clone + 'static>(table: MetadataTable<R>) -> Vec<R> {
        table.into_iter().map(|row| row.value.clone()).collect()
    }

    #[test]
    fn generic_over_row_value() {
        const CODE_ROWS: &[MetadataRow<&str>] = &[
            MetadataRow::new(0, "Ok", "200", "ok", "ok"),
            MetadataRow::new(1, "Gone", "410", "gone", "gone"),
        ];
        const CODES: MetadataTable<&str> = MetadataTable::new(CODE_ROWS);
        assert_eq!(collect_values(CODES), ["200", "410"]);
        assert_eq!(collect_values(TABLE), [1, 2, 5, 10]);
        assert_eq!(CODES.ordinal_of(&"410"), Some(1));
        assert_eq!(format!("{:?}", CODES.iter().next().map(|row| row.symbol)), "Some(\"Ok\")");
    }

    #[test]
    fn row_display() {
        assert_eq!(
            TABLE.row_at(0).to_string(),
            "#0 Dog = 1 (dog: dog_description)"
        );
    }

    #[rstest]
    #[case("", "", true)]
    #[case("dog", "dog", true)]
    #[case("dog", "Dog", false)]
    #[case("dog", "dogs", false)]
    #[case("λ", "λ", true)]
    fn str_eq(#[case] left: &str, #[case] right: &str, #[case] expected: bool) {
        assert_eq!(const_str_eq(left, right), expected);
    }
}
