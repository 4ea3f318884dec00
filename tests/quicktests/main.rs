#[macro_use]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};

mod balanced;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the data structure
    Insert(T),
    /// Remove the value from the data structure
    Delete(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(T::arbitrary(g))
        } else {
            Op::Delete(T::arbitrary(g))
        }
    }
}
