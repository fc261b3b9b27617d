#[macro_use]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};

mod list;
mod tree;

/// Routes the collections' `log` output through the test harness. Run with
/// `RUST_LOG=trace` to see every splice.
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest. The public API is all that is
/// reachable from here, so this carries only the mutations; properties compare
/// traversals themselves once the ops have run.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the data structure
    Insert(T),
    /// Remove the value from the data structure
    Remove(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(T::arbitrary(g))
        } else {
            Op::Remove(T::arbitrary(g))
        }
    }
}
