use balanced_bst::Tree;

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree built from `xs`.
fn do_ops(xs: Vec<i8>, ops: &[Op<i8>]) -> Tree<i8> {
    let mut tree = Tree::build(xs);
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(*x);
            }
            Op::Delete(x) => {
                tree.delete(x);
            }
        }
    }

    tree
}

fn strictly_ascending(values: &[i8]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn inorder_is_strictly_ascending(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let tree = do_ops(xs, &ops);
    let values = tree.inorder();

    strictly_ascending(&values) && values.len() == tree.len()
}

#[quickcheck]
fn build_round_trips_sorted_unique(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs.iter().copied());
    let expected: Vec<_> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

    tree.inorder() == expected
}

#[quickcheck]
fn build_is_balanced(xs: Vec<i32>) -> bool {
    Tree::build(xs).is_balanced()
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i8>, x: i8) -> bool {
    let mut once = Tree::build(xs);
    once.insert(x);

    let mut twice = once.clone();
    let inserted = twice.insert(x);

    !inserted && once == twice && once.inorder() == twice.inorder()
}

#[quickcheck]
fn delete_present_value(xs: Vec<i8>, ops: Vec<Op<i8>>, pick: usize) -> bool {
    let mut tree = do_ops(xs, &ops);
    let before = tree.inorder();
    if before.is_empty() {
        return !tree.delete(&0);
    }

    let victim = before[pick % before.len()];
    let deleted = tree.delete(&victim);

    let mut expected = before.clone();
    expected.retain(|x| *x != victim);

    deleted
        && tree.find(&victim).is_none()
        && tree.len() == before.len() - 1
        && tree.inorder() == expected
}

#[quickcheck]
fn delete_missing_value(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = Tree::build(xs.into_iter().filter(|v| *v != x));
    let before = tree.clone();

    !tree.delete(&x) && tree == before
}

#[quickcheck]
fn find_agrees_with_model(xs: Vec<i8>, ops: Vec<Op<i8>>, probes: Vec<i8>) -> bool {
    let mut model: BTreeSet<i8> = xs.iter().copied().collect();
    for op in &ops {
        match op {
            Op::Insert(x) => {
                model.insert(*x);
            }
            Op::Delete(x) => {
                model.remove(x);
            }
        }
    }
    let tree = do_ops(xs, &ops);

    probes
        .iter()
        .chain(model.iter())
        .all(|x| tree.find(x).map(|n| n.value()) == model.get(x))
}

#[quickcheck]
fn rebalance_restores_balance(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let mut tree = do_ops(xs, &ops);
    let before = tree.inorder();

    tree.rebalance();

    tree.is_balanced() && tree.inorder() == before && tree.len() == before.len()
}

#[quickcheck]
fn level_orders_agree(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let tree = do_ops(xs, &ops);

    tree.level_order() == tree.level_order_recursive()
}

#[quickcheck]
fn traversals_visit_every_node_once(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let tree = do_ops(xs, &ops);
    let inorder = tree.inorder();

    let others = [
        tree.preorder(),
        tree.postorder(),
        tree.level_order(),
        tree.level_order_recursive(),
    ];
    inorder.len() == tree.len()
        && others.into_iter().all(|mut values| {
            values.sort_unstable();
            values == inorder
        })
}

#[quickcheck]
fn preorder_starts_at_root_and_postorder_ends_there(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let tree = do_ops(xs, &ops);
    let root = tree.root().map(|n| *n.value());

    tree.preorder().first().copied() == root && tree.postorder().last().copied() == root
}

#[quickcheck]
fn root_height_bounds_every_depth(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let tree = do_ops(xs, &ops);
    let height = Tree::height(tree.root());

    let mut deepest: isize = -1;
    tree.inorder_with(|node| {
        let depth = tree.depth(Some(node));
        if node.is_leaf() {
            deepest = deepest.max(depth);
        }
    });

    deepest == height
}
