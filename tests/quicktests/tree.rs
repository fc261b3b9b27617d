use classic_collections::tree::Tree;

use std::collections::BTreeSet;

use crate::{init_logger, Op};

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], mut bst: Tree<T>, set: &mut BTreeSet<T>) -> Tree<T>
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                bst.delete(x);
                set.remove(x);
            }
        }
    }

    bst
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logger();
    let mut set = BTreeSet::new();

    let tree = do_ops(&ops, Tree::new(), &mut set);
    tree.in_order_traversal().into_iter().eq(set.iter())
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    tree.in_order_traversal().into_iter().eq(expected.iter())
}

#[quickcheck]
fn pre_order_rebuilds_same_shape(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let rebuilt: Tree<_> = tree.pre_order_traversal().into_iter().copied().collect();

    rebuilt.pre_order_traversal() == tree.pre_order_traversal()
        && rebuilt.post_order_traversal() == tree.post_order_traversal()
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));
    still_present.sort_unstable();
    still_present.dedup();

    deletes.iter().all(|x| !tree.contains(x))
        && tree.in_order_traversal().into_iter().eq(still_present.iter())
        && tree.len() == still_present.len()
}

#[quickcheck]
fn delete_node_keeps_order(xs: Vec<i8>, target: i8) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let tree = Tree::from_root(Tree::delete_node(tree.into_root(), &target));

    let values = tree.in_order_traversal();
    !tree.contains(&target) && values.windows(2).all(|w| w[0] < w[1])
}
