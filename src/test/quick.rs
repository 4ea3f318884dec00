use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the data structure
    Insert(T),
    /// Remove the value from the data structure
    Delete(T),
    /// Rebuild the tree into a balanced shape
    Rebalance,
    /// Compare iterators
    Iter,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Rebalancing is
    /// rarer so the tree has a chance to drift out of shape in between.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2, 3]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Delete(T::arbitrary(g)),
            2 => Op::Rebalance,
            3 => Op::Iter,
            _ => unreachable!(),
        }
    }
}
