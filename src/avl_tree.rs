use std::cmp::max;
use std::fmt;
use std::ptr::NonNull;

use log::trace;

use crate::binary_search_tree::{Attached, BinarySearchTree, Link, Node};

/// A self-balancing binary search tree map (AVL tree).
///
/// Each node carries a balance factor (right height minus left height),
/// kept in {-1, 0, 1} by rotations driven from bottom-up fix-up walks.
/// Positioning, lookup, and raw node surgery are delegated to the plain
/// [`BinarySearchTree`]; this layer owns the balance bookkeeping.
pub struct AvlTree<K, V> {
    base: BinarySearchTree<K, V>,
}

impl<K: Ord, V> AvlTree<K, V> {
    pub fn new() -> Self {
        AvlTree {
            base: BinarySearchTree::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    pub fn clear(&mut self) {
        self.base.clear();
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.base.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.base.get_mut(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.base.contains_key(key)
    }

    pub fn min(&self) -> Option<(&K, &V)> {
        self.base.min()
    }

    pub fn max(&self) -> Option<(&K, &V)> {
        self.base.max()
    }

    pub fn in_order(&self) -> Vec<(&K, &V)> {
        self.base.in_order()
    }

    pub fn pre_order(&self) -> Vec<(&K, &V)> {
        self.base.pre_order()
    }

    /// Inserts `key`/`value`. A duplicate key overwrites the value in place
    /// with no structural change.
    pub fn insert(&mut self, key: K, value: V) {
        match self.base.attach(key, value) {
            Attached::Replaced | Attached::Root => {}
            Attached::Leaf { node, parent } => unsafe {
                let p = parent.as_ptr();
                if (*p).balance == 0 {
                    (*p).balance = if (*p).left == Some(node) { -1 } else { 1 };
                    self.insert_fixup(parent, node);
                } else {
                    (*p).balance = 0;
                }
            },
        }
    }

    /// Removes `key` if present; a no-op otherwise. A node with two children
    /// first swaps positions (and balance factors) with its in-order
    /// predecessor, so the node physically spliced out has at most one child.
    pub fn remove(&mut self, key: &K) {
        let node = match self.base.find_node(key) {
            Some(node) => node,
            None => return,
        };
        unsafe {
            if (*node.as_ptr()).left.is_some() && (*node.as_ptr()).right.is_some() {
                let pred = BinarySearchTree::predecessor(node)
                    .expect("node with two children has an in-order predecessor");
                self.swap_with_balance(node, pred);
            }
            let (parent, diff) = self.base.detach(node);
            if let Some(parent) = parent {
                self.remove_fixup(parent, diff);
            }
        }
    }

    /// Structural height, recomputed from the links rather than read from
    /// the balance factors.
    pub fn height(&self) -> usize {
        Self::node_height(self.base.root)
    }

    pub fn is_balanced(&self) -> bool {
        Self::check_balance(self.base.root)
    }

    fn node_height(link: Link<K, V>) -> usize {
        match link {
            None => 0,
            Some(n) => unsafe {
                1 + max(
                    Self::node_height((*n.as_ptr()).left),
                    Self::node_height((*n.as_ptr()).right),
                )
            },
        }
    }

    fn check_balance(link: Link<K, V>) -> bool {
        match link {
            None => true,
            Some(n) => unsafe {
                let lh = Self::node_height((*n.as_ptr()).left) as isize;
                let rh = Self::node_height((*n.as_ptr()).right) as isize;
                (rh - lh).abs() <= 1
                    && Self::check_balance((*n.as_ptr()).left)
                    && Self::check_balance((*n.as_ptr()).right)
            },
        }
    }

    /// Bottom-up walk after insertion. Grandparent balance 0 stops the
    /// walk, ±1 climbs, ±2 is fixed by a single or double rotation and the
    /// walk always stops after rotating.
    unsafe fn insert_fixup(&mut self, parent: NonNull<Node<K, V>>, child: NonNull<Node<K, V>>) {
        let mut parent = parent;
        let mut child = child;
        while let Some(grandparent) = (*parent.as_ptr()).parent {
            let g = grandparent.as_ptr();
            let p = parent.as_ptr();
            if (*g).left == Some(parent) {
                (*g).balance -= 1;
                match (*g).balance {
                    0 => return,
                    -1 => {
                        child = parent;
                        parent = grandparent;
                    }
                    _ => {
                        if (*p).left == Some(child) {
                            trace!("insert fix-up: left-left imbalance, single rotation");
                            self.rotate_right(grandparent);
                            (*p).balance = 0;
                            (*g).balance = 0;
                        } else {
                            let c = child.as_ptr();
                            trace!(
                                "insert fix-up: left-right imbalance, double rotation (child balance {:+})",
                                (*c).balance
                            );
                            self.rotate_left(parent);
                            self.rotate_right(grandparent);
                            match (*c).balance {
                                -1 => {
                                    (*p).balance = 0;
                                    (*g).balance = 1;
                                }
                                0 => {
                                    (*p).balance = 0;
                                    (*g).balance = 0;
                                }
                                _ => {
                                    (*p).balance = -1;
                                    (*g).balance = 0;
                                }
                            }
                            (*c).balance = 0;
                        }
                        return;
                    }
                }
            } else {
                (*g).balance += 1;
                match (*g).balance {
                    0 => return,
                    1 => {
                        child = parent;
                        parent = grandparent;
                    }
                    _ => {
                        if (*p).right == Some(child) {
                            trace!("insert fix-up: right-right imbalance, single rotation");
                            self.rotate_left(grandparent);
                            (*p).balance = 0;
                            (*g).balance = 0;
                        } else {
                            let c = child.as_ptr();
                            trace!(
                                "insert fix-up: right-left imbalance, double rotation (child balance {:+})",
                                (*c).balance
                            );
                            self.rotate_right(parent);
                            self.rotate_left(grandparent);
                            match (*c).balance {
                                1 => {
                                    (*p).balance = 0;
                                    (*g).balance = -1;
                                }
                                0 => {
                                    (*p).balance = 0;
                                    (*g).balance = 0;
                                }
                                _ => {
                                    (*p).balance = 1;
                                    (*g).balance = 0;
                                }
                            }
                            (*c).balance = 0;
                        }
                        return;
                    }
                }
            }
        }
    }

    /// Bottom-up walk after deletion. `diff` is +1 when the node's left
    /// subtree shrank, -1 when its right subtree shrank. Balance 0 after
    /// applying the diff climbs, ±1 stops, ±2 rotates. Unlike the insert
    /// walk, a rotation here may shorten the subtree and keep the walk
    /// going; only the single rotation with an even inner child stops.
    unsafe fn remove_fixup(&mut self, node: NonNull<Node<K, V>>, diff: i8) {
        let mut node = node;
        let mut diff = diff;
        loop {
            let n = node.as_ptr();
            // Captured before any rotation: the splice point's position
            // under its parent decides the next step's diff.
            let parent = (*n).parent;
            let next_diff = match parent {
                Some(p) => {
                    if (*p.as_ptr()).left == Some(node) {
                        1
                    } else {
                        -1
                    }
                }
                None => 0,
            };

            (*n).balance += diff;
            match (*n).balance {
                0 => match parent {
                    Some(p) => {
                        node = p;
                        diff = next_diff;
                    }
                    None => return,
                },
                1 | -1 => return,
                2 => {
                    let right = (*n).right.expect("balance factor +2 requires a right child");
                    let r = right.as_ptr();
                    if (*r).balance == -1 {
                        self.rotate_right(right);
                        self.rotate_left(node);
                        let new_top = (*n)
                            .parent
                            .expect("double rotation leaves a new subtree root");
                        let t = new_top.as_ptr();
                        trace!(
                            "remove fix-up: right-left imbalance resolved (new top balance {:+})",
                            (*t).balance
                        );
                        match (*t).balance {
                            0 => {
                                (*n).balance = 0;
                                (*r).balance = 0;
                            }
                            1 => {
                                (*n).balance = -1;
                                (*r).balance = 0;
                                (*t).balance = 0;
                            }
                            _ => {
                                (*n).balance = 0;
                                (*r).balance = 1;
                                (*t).balance = 0;
                            }
                        }
                        match parent {
                            Some(p) => {
                                node = p;
                                diff = next_diff;
                            }
                            None => return,
                        }
                    } else {
                        let absorbed = (*r).balance == 0;
                        self.rotate_left(node);
                        if absorbed {
                            // The rotation rearranged the subtree without
                            // changing its height: the imbalance is absorbed
                            // into a stable lean and the walk ends here.
                            trace!("remove fix-up: right-right imbalance absorbed, walk stops");
                            (*n).balance = 1;
                            (*r).balance = -1;
                            return;
                        }
                        (*n).balance = 0;
                        (*r).balance = 0;
                        match parent {
                            Some(p) => {
                                node = p;
                                diff = next_diff;
                            }
                            None => return,
                        }
                    }
                }
                _ => {
                    let left = (*n).left.expect("balance factor -2 requires a left child");
                    let l = left.as_ptr();
                    if (*l).balance == 1 {
                        self.rotate_left(left);
                        self.rotate_right(node);
                        let new_top = (*n)
                            .parent
                            .expect("double rotation leaves a new subtree root");
                        let t = new_top.as_ptr();
                        trace!(
                            "remove fix-up: left-right imbalance resolved (new top balance {:+})",
                            (*t).balance
                        );
                        match (*t).balance {
                            0 => {
                                (*n).balance = 0;
                                (*l).balance = 0;
                            }
                            -1 => {
                                (*n).balance = 1;
                                (*l).balance = 0;
                                (*t).balance = 0;
                            }
                            _ => {
                                (*n).balance = 0;
                                (*l).balance = -1;
                                (*t).balance = 0;
                            }
                        }
                        match parent {
                            Some(p) => {
                                node = p;
                                diff = next_diff;
                            }
                            None => return,
                        }
                    } else {
                        let absorbed = (*l).balance == 0;
                        self.rotate_right(node);
                        if absorbed {
                            trace!("remove fix-up: left-left imbalance absorbed, walk stops");
                            (*n).balance = -1;
                            (*l).balance = 1;
                            return;
                        }
                        (*n).balance = 0;
                        (*l).balance = 0;
                        match parent {
                            Some(p) => {
                                node = p;
                                diff = next_diff;
                            }
                            None => return,
                        }
                    }
                }
            }
        }
    }

    /// Left rotation at `node`: its right child takes its position, `node`
    /// becomes that child's left child, the inner subtree moves across.
    /// Balance factors are untouched; callers set them afterward.
    unsafe fn rotate_left(&mut self, node: NonNull<Node<K, V>>) {
        let n = node.as_ptr();
        let pivot = (*n).right.expect("left rotation requires a right child");
        let parent = (*n).parent;

        (*pivot.as_ptr()).parent = parent;
        match parent {
            None => self.base.root = Some(pivot),
            Some(p) => {
                if (*p.as_ptr()).right == Some(node) {
                    (*p.as_ptr()).right = Some(pivot);
                } else {
                    (*p.as_ptr()).left = Some(pivot);
                }
            }
        }

        let inner = (*pivot.as_ptr()).left;
        (*pivot.as_ptr()).left = Some(node);
        (*n).parent = Some(pivot);
        (*n).right = inner;
        if let Some(c) = inner {
            (*c.as_ptr()).parent = Some(node);
        }
    }

    /// Mirror image of [`Self::rotate_left`].
    unsafe fn rotate_right(&mut self, node: NonNull<Node<K, V>>) {
        let n = node.as_ptr();
        let pivot = (*n).left.expect("right rotation requires a left child");
        let parent = (*n).parent;

        (*pivot.as_ptr()).parent = parent;
        match parent {
            None => self.base.root = Some(pivot),
            Some(p) => {
                if (*p.as_ptr()).right == Some(node) {
                    (*p.as_ptr()).right = Some(pivot);
                } else {
                    (*p.as_ptr()).left = Some(pivot);
                }
            }
        }

        let inner = (*pivot.as_ptr()).right;
        (*pivot.as_ptr()).right = Some(node);
        (*n).parent = Some(pivot);
        (*n).left = inner;
        if let Some(c) = inner {
            (*c.as_ptr()).parent = Some(node);
        }
    }

    /// Base identity swap plus balance-factor exchange. The base swap moves
    /// the node objects (balance fields included) to each other's positions;
    /// swapping the balances back pins each balance to its tree position.
    unsafe fn swap_with_balance(&mut self, n1: NonNull<Node<K, V>>, n2: NonNull<Node<K, V>>) {
        self.base.swap_node_identity(n1, n2);
        std::mem::swap(&mut (*n1.as_ptr()).balance, &mut (*n2.as_ptr()).balance);
    }
}

impl<K: Ord, V> Default for AvlTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, V: Clone> Clone for AvlTree<K, V> {
    fn clone(&self) -> Self {
        let mut new_tree = AvlTree::new();
        for (key, value) in self.base.pre_order() {
            new_tree.insert(key.clone(), value.clone());
        }
        new_tree
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AvlTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.fmt(f)
    }
}

impl<K, V> IntoIterator for AvlTree<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.base.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{seq::SliceRandom, Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    /// Checks the whole AVL invariant: every stored balance factor equals
    /// the structurally recomputed one and lies in {-1, 0, 1}, parent links
    /// are consistent, and in-order keys are strictly increasing.
    fn avl_invariants_hold<K: Ord, V>(tree: &AvlTree<K, V>) -> bool {
        fn walk<K, V>(link: Link<K, V>, expected_parent: Link<K, V>) -> Option<isize> {
            match link {
                None => Some(0),
                Some(n) => unsafe {
                    if (*n.as_ptr()).parent != expected_parent {
                        return None;
                    }
                    let lh = walk((*n.as_ptr()).left, Some(n))?;
                    let rh = walk((*n.as_ptr()).right, Some(n))?;
                    let computed = rh - lh;
                    if computed.abs() > 1 || (*n.as_ptr()).balance as isize != computed {
                        return None;
                    }
                    Some(1 + lh.max(rh))
                },
            }
        }
        let ordered = tree.in_order().windows(2).all(|w| w[0].0 < w[1].0);
        ordered && walk(tree.base.root, None).is_some()
    }

    fn pre_order_keys(tree: &AvlTree<i32, ()>) -> Vec<i32> {
        tree.pre_order().iter().map(|(k, _)| **k).collect()
    }

    fn tree_of(keys: &[i32]) -> AvlTree<i32, ()> {
        let mut tree = AvlTree::new();
        for &key in keys {
            tree.insert(key, ());
        }
        tree
    }

    #[test]
    fn new_tree_is_empty() {
        let tree: AvlTree<i32, i32> = AvlTree::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn ascending_insert_triggers_single_left_rotation() {
        let tree = tree_of(&[1, 2, 3]);
        assert_eq!(pre_order_keys(&tree), vec![2, 1, 3]);
        assert!(avl_invariants_hold(&tree));
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn descending_insert_triggers_single_right_rotation() {
        let tree = tree_of(&[3, 2, 1]);
        assert_eq!(pre_order_keys(&tree), vec![2, 1, 3]);
        assert!(avl_invariants_hold(&tree));
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn zigzag_insert_triggers_double_rotation() {
        // 3, 1, 2 is the left-right case; 1, 3, 2 the right-left case.
        for keys in [[3, 1, 2], [1, 3, 2]] {
            let tree = tree_of(&keys);
            assert_eq!(pre_order_keys(&tree), vec![2, 1, 3]);
            assert!(avl_invariants_hold(&tree));
        }
    }

    #[test]
    fn duplicate_insert_overwrites_without_restructuring() {
        let mut tree = AvlTree::new();
        for key in [2, 1, 3] {
            tree.insert(key, key);
        }
        let shape_before: Vec<i32> = tree.pre_order().iter().map(|(k, _)| **k).collect();
        tree.insert(1, 100);
        let shape_after: Vec<i32> = tree.pre_order().iter().map(|(k, _)| **k).collect();
        assert_eq!(shape_before, shape_after);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.get(&1), Some(&100));
        assert!(avl_invariants_hold(&tree));
    }

    #[test]
    fn insert_maintains_balance_throughout() {
        let mut tree = AvlTree::new();
        for i in 1..=100 {
            tree.insert(i, ());
            assert!(avl_invariants_hold(&tree), "after inserting {i}");
        }
        assert!(tree.is_balanced());
    }

    #[test]
    fn reverse_sorted_insert_stays_balanced() {
        let mut tree = AvlTree::new();
        for i in (1..=100).rev() {
            tree.insert(i, ());
            assert!(avl_invariants_hold(&tree), "after inserting {i}");
        }
    }

    #[test]
    fn remove_root_of_perfect_tree_substitutes_predecessor() {
        let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
        assert_eq!(pre_order_keys(&tree), vec![4, 2, 1, 3, 6, 5, 7]);
        tree.remove(&4);
        // 3, the in-order predecessor, takes over the root position.
        assert_eq!(pre_order_keys(&tree), vec![3, 2, 1, 6, 5, 7]);
        assert!(avl_invariants_hold(&tree));
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn remove_leaf_absorbed_without_rotation() {
        let mut tree = tree_of(&[2, 1, 3]);
        tree.remove(&1);
        assert_eq!(pre_order_keys(&tree), vec![2, 3]);
        assert!(avl_invariants_hold(&tree));
    }

    #[test]
    fn remove_triggers_single_rotation_with_height_loss() {
        // Right child leans right at the violation point: the rotation
        // shortens the subtree and the walk keeps climbing.
        let mut tree = tree_of(&[2, 1, 4, 5]);
        tree.remove(&1);
        assert_eq!(pre_order_keys(&tree), vec![4, 2, 5]);
        assert!(avl_invariants_hold(&tree));
        assert!(!tree.contains_key(&1));
    }

    #[test]
    fn remove_triggers_absorbed_single_rotation() {
        // Right child balance 0 at the violation point: rotation absorbs
        // the imbalance, heights stay put, and no propagation follows.
        let mut tree = tree_of(&[2, 1, 4, 3, 5]);
        tree.remove(&1);
        assert_eq!(pre_order_keys(&tree), vec![4, 2, 3, 5]);
        assert!(avl_invariants_hold(&tree));
    }

    #[test]
    fn remove_triggers_double_rotation() {
        // Right child leans left at the violation point.
        let mut tree = tree_of(&[2, 1, 4, 3]);
        tree.remove(&1);
        assert_eq!(pre_order_keys(&tree), vec![3, 2, 4]);
        assert!(avl_invariants_hold(&tree));
    }

    #[test]
    fn remove_from_empty_is_noop() {
        let mut tree: AvlTree<i32, ()> = AvlTree::new();
        tree.remove(&1);
        assert!(tree.is_empty());
    }

    #[test]
    fn remove_absent_key_is_noop() {
        let mut tree = tree_of(&[2, 1, 3]);
        let shape = pre_order_keys(&tree);
        tree.remove(&100);
        assert_eq!(pre_order_keys(&tree), shape);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn remove_last_node_empties_tree() {
        let mut tree = AvlTree::new();
        tree.insert(42, ());
        tree.remove(&42);
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn insert_all_remove_all_round_trip() {
        let mut rng = ChaCha20Rng::from_seed([7; 32]);
        let mut keys: Vec<i32> = (0..200).collect();
        for _ in 0..4 {
            keys.shuffle(&mut rng);
            let mut tree = AvlTree::new();
            for &key in &keys {
                tree.insert(key, key);
                assert!(avl_invariants_hold(&tree));
            }
            keys.shuffle(&mut rng);
            for &key in &keys {
                tree.remove(&key);
                assert!(avl_invariants_hold(&tree), "after removing {key}");
            }
            assert!(tree.is_empty());
            assert!(tree.base.root.is_none());
        }
    }

    #[test]
    fn random_op_sequences_hold_invariants() {
        let _ = simplelog::SimpleLogger::init(
            simplelog::LevelFilter::Warn,
            simplelog::Config::default(),
        );
        let mut rng = ChaCha20Rng::from_seed([0; 32]);
        let mut tree = AvlTree::new();
        let mut model = std::collections::BTreeMap::new();
        for _ in 0..2000 {
            let key = rng.gen_range(0..300);
            if rng.gen_bool(0.6) {
                tree.insert(key, key * 2);
                model.insert(key, key * 2);
            } else {
                tree.remove(&key);
                model.remove(&key);
            }
            assert!(avl_invariants_hold(&tree));
            assert_eq!(tree.len(), model.len());
        }
        let pairs: Vec<(i32, i32)> = tree.in_order().iter().map(|(k, v)| (**k, **v)).collect();
        let expected: Vec<(i32, i32)> = model.into_iter().collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn height_stays_within_avl_bound() {
        let mut tree = AvlTree::new();
        let n = 1000;
        for i in 0..n {
            tree.insert(i, ());
        }
        let bound = (1.44 * ((n + 2) as f64).log2()).floor() as usize;
        assert!(
            tree.height() <= bound,
            "height {} exceeds bound {bound}",
            tree.height()
        );
    }

    #[test]
    fn in_order_yields_sorted_pairs() {
        let mut tree = AvlTree::new();
        for key in [50, 30, 70, 20, 40] {
            tree.insert(key, key * 2);
        }
        let keys: Vec<i32> = tree.in_order().iter().map(|(k, _)| **k).collect();
        assert_eq!(keys, vec![20, 30, 40, 50, 70]);
    }

    #[test]
    fn min_max_track_extremes() {
        let mut tree = AvlTree::new();
        for key in [50, 30, 70, 20, 80] {
            tree.insert(key, key);
        }
        assert_eq!(tree.min(), Some((&20, &20)));
        assert_eq!(tree.max(), Some((&80, &80)));
        tree.remove(&20);
        tree.remove(&80);
        assert_eq!(tree.min(), Some((&30, &30)));
        assert_eq!(tree.max(), Some((&70, &70)));
    }

    #[test]
    fn clear_makes_tree_empty() {
        let mut tree = tree_of(&[2, 1, 3]);
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn clone_creates_independent_balanced_copy() {
        let mut tree = AvlTree::new();
        for i in 1..=20 {
            tree.insert(i, i);
        }
        let clone = tree.clone();
        tree.remove(&10);
        assert!(!tree.contains_key(&10));
        assert!(clone.contains_key(&10));
        assert!(avl_invariants_hold(&clone));
    }

    #[test]
    fn into_iter_yields_sorted_pairs() {
        let mut tree = AvlTree::new();
        for key in [50, 30, 70, 20, 40] {
            tree.insert(key, key + 1);
        }
        let pairs: Vec<(i32, i32)> = tree.into_iter().collect();
        assert_eq!(pairs, vec![(20, 21), (30, 31), (40, 41), (50, 51), (70, 71)]);
    }

    #[test]
    fn works_with_owned_strings() {
        let mut tree = AvlTree::new();
        tree.insert(String::from("banana"), 1);
        tree.insert(String::from("apple"), 2);
        tree.insert(String::from("cherry"), 3);
        assert_eq!(tree.min().map(|(k, _)| k.as_str()), Some("apple"));
        assert_eq!(tree.max().map(|(k, _)| k.as_str()), Some("cherry"));
    }

    #[test]
    fn default_creates_empty_tree() {
        let tree: AvlTree<i32, i32> = AvlTree::default();
        assert!(tree.is_empty());
    }

    #[test]
    fn debug_formats_as_map() {
        let mut tree = AvlTree::new();
        tree.insert(2, "b");
        tree.insert(1, "a");
        assert_eq!(format!("{tree:?}"), r#"{1: "a", 2: "b"}"#);
    }
}
