use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use balanced_bst::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting values in ascending order. Nothing rebalances along the way so
/// the tree ends up as a single right spine.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32> {
    let mut tree = Tree::new();
    tree.extend((0..).take(num_nodes_in_full_tree(num_levels)));
    tree
}

/// Builds a tree with `num_levels` of nodes, all full.
fn get_balanced_tree(num_levels: usize) -> Tree<i32> {
    Tree::build((0..).take(num_nodes_in_full_tree(num_levels)))
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // The unbalanced tree recurses once per node so stay well clear of the stack limit.
    for num_levels in [3, 7, 11] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) - 1;
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name.to_string(), largest_element_in_tree);

            group.bench_with_input(id, &largest_element_in_tree, |b, _| {
                b.iter(|| {
                    f(&tree, largest_element_in_tree as i32);
                })
            });
        }
    }

    group.finish();
}

/// Read-only operations whose cost depends on the shape of the tree.
pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _node = black_box(tree.find(&i));
    });
    bench_helper(c, "depth", |tree, i| {
        let _depth = black_box(tree.depth(tree.find(&i)));
    });
    bench_helper(c, "height", |tree, _| {
        let _height = black_box(Tree::height(tree.root()));
    });
    bench_helper(c, "inorder", |tree, _| {
        let _values = black_box(tree.inorder());
    });
    bench_helper(c, "level-order", |tree, _| {
        let _values = black_box(tree.level_order());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
