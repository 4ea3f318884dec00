/// Sorts the values ascending and drops duplicates so they can be laid out as a BST.
pub(crate) fn sorted_unique<T, I>(values: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut values: Vec<T> = values.into_iter().collect();
    values.sort_unstable();
    values.dedup();
    values
}
