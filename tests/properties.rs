use std::collections::BTreeSet;

use quickcheck_macros::quickcheck;

use unbalanced_bst::BinarySearchTree;

/// Builds a tree with both insertion forms, alternating between them
fn build(xs: &[i16]) -> BinarySearchTree<i16> {
    let mut tree = BinarySearchTree::new();
    for (i, &x) in xs.iter().enumerate() {
        let _ = if i % 2 == 0 {
            tree.insert(x)
        } else {
            tree.insert_recursive(x)
        };
    }

    tree
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i16>) -> bool {
    let tree = build(&xs);
    let expected: BTreeSet<_> = xs.iter().collect();

    tree.dfs_in_order() == expected.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn contains(xs: Vec<i16>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.find(x).map(|node| node.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i16>, nots: Vec<i16>) -> bool {
    let tree = build(&xs);
    let added: BTreeSet<_> = xs.into_iter().collect();

    nots.iter()
        .filter(|x| !added.contains(*x))
        .all(|x| tree.find(x).is_none() && tree.find_recursive(x).is_none())
}

#[quickcheck]
fn duplicates_rejected(xs: Vec<i16>) -> bool {
    let mut tree = build(&xs);
    let before: Vec<i16> = tree.iter_preorder().copied().collect();

    let rejected = xs.iter().all(|&x| {
        tree.insert(x).map(|_| ()).map_err(|err| err.into_inner()) == Err(x)
            && tree.insert_recursive(x).is_err()
    });
    let after: Vec<i16> = tree.iter_preorder().copied().collect();

    // Shape is untouched, not just the set of values
    rejected && before == after
}

#[quickcheck]
fn len_counts_distinct(xs: Vec<i16>) -> bool {
    let tree = build(&xs);
    let distinct: BTreeSet<_> = xs.iter().collect();

    tree.len() == distinct.len()
        && tree.dfs_pre_order().len() == distinct.len()
        && tree.dfs_post_order().len() == distinct.len()
        && tree.bfs().len() == distinct.len()
}

#[quickcheck]
fn traversals_agree_with_iterators(xs: Vec<i16>) -> bool {
    let tree = build(&xs);

    tree.iter_preorder().eq(tree.dfs_pre_order())
        && tree.iter_inorder().eq(tree.dfs_in_order())
        && tree.iter_postorder().eq(tree.dfs_post_order())
        && tree.iter_levelorder().eq(tree.bfs())
}

#[quickcheck]
fn pre_order_starts_with_root(xs: Vec<i16>) -> bool {
    let tree = build(&xs);
    let root = tree.root().map(|node| node.value());

    tree.dfs_pre_order().first().copied() == root
        && tree.bfs().first().copied() == root
        && tree.dfs_post_order().last().copied() == root
}

#[quickcheck]
fn second_highest(xs: Vec<i16>) -> bool {
    let tree = build(&xs);
    let expected: BTreeSet<_> = xs.iter().collect();

    tree.second_highest() == expected.iter().rev().nth(1).copied()
}

#[quickcheck]
fn balanced_height_bound(xs: Vec<i16>) -> bool {
    let tree = build(&xs);

    // A balanced tree with height h holds at least fib(h + 2) - 1 nodes, which keeps h below
    // 1.45 * log2(n + 2)
    !tree.is_balanced() || tree.height() <= 2 * (64 - (tree.len() as u64).leading_zeros() as usize)
}

#[test]
fn balance_depends_on_insertion_order() {
    let sorted: Vec<i16> = (0..31).collect();
    assert!(!build(&sorted).is_balanced());

    // Median first, level by level
    let median_first = [
        15, 7, 23, 3, 11, 19, 27, 1, 5, 9, 13, 17, 21, 25, 29,
        0, 2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30,
    ];
    let tree = build(&median_first);
    assert!(tree.is_balanced());
    assert_eq!(tree.height(), 5);
    assert_eq!(tree.bfs().into_iter().copied().collect::<Vec<_>>(), median_first);
}
