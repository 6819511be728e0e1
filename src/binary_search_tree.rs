use std::cmp::Ordering;
use std::fmt;
use std::ptr::NonNull;

pub(crate) type Link<K, V> = Option<NonNull<Node<K, V>>>;

/// A tree node with owning child links and a non-owning parent back-reference.
///
/// The `balance` field is maintained by the AVL layer only; the plain
/// binary search tree leaves it at 0.
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) balance: i8,
    pub(crate) parent: Link<K, V>,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    /// Allocates a fresh leaf. The caller is responsible for linking it into
    /// the tree and eventually freeing it with `Box::from_raw`.
    pub(crate) fn new_leaf(key: K, value: V, parent: Link<K, V>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Node {
            key,
            value,
            balance: 0,
            parent,
            left: None,
            right: None,
        })))
    }
}

/// Outcome of a plain (non-rebalancing) BST insertion.
pub(crate) enum Attached<K, V> {
    /// The key was already present; its value was overwritten in place.
    Replaced,
    /// The tree was empty; the new node is now the root.
    Root,
    /// A fresh leaf was attached under `parent`.
    Leaf {
        node: NonNull<Node<K, V>>,
        parent: NonNull<Node<K, V>>,
    },
}

/// An unbalanced binary search tree map with parent back-references.
///
/// Lookups, insertions, and removals are O(height); nothing here keeps the
/// height in check, so adversarial key orders degenerate to a list. The
/// AVL layer builds on the positioning, lookup, and node-surgery primitives
/// exposed crate-internally by this type.
pub struct BinarySearchTree<K, V> {
    pub(crate) root: Link<K, V>,
    pub(crate) len: usize,
}

unsafe impl<K: Send, V: Send> Send for BinarySearchTree<K, V> {}
unsafe impl<K: Sync, V: Sync> Sync for BinarySearchTree<K, V> {}

impl<K: Ord, V> BinarySearchTree<K, V> {
    pub fn new() -> Self {
        BinarySearchTree { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        let root = self.root.take();
        self.len = 0;
        Self::teardown(root);
    }

    /// Inserts `key`/`value`, overwriting the value in place when the key is
    /// already present. No rebalancing is performed.
    pub fn insert(&mut self, key: K, value: V) {
        self.attach(key, value);
    }

    /// Removes `key` if present; a no-op otherwise. A node with two children
    /// first swaps positions with its in-order predecessor so that the node
    /// physically unlinked always has at most one child.
    pub fn remove(&mut self, key: &K) {
        let node = match self.find_node(key) {
            Some(node) => node,
            None => return,
        };
        unsafe {
            if (*node.as_ptr()).left.is_some() && (*node.as_ptr()).right.is_some() {
                let pred = Self::predecessor(node)
                    .expect("node with two children has an in-order predecessor");
                self.swap_node_identity(node, pred);
            }
            self.detach(node);
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find_node(key).map(|n| unsafe { &(*n.as_ptr()).value })
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.find_node(key).map(|n| unsafe { &mut (*n.as_ptr()).value })
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find_node(key).is_some()
    }

    pub fn min(&self) -> Option<(&K, &V)> {
        let mut current = self.root?;
        unsafe {
            while let Some(left) = (*current.as_ptr()).left {
                current = left;
            }
            Some((&(*current.as_ptr()).key, &(*current.as_ptr()).value))
        }
    }

    pub fn max(&self) -> Option<(&K, &V)> {
        let mut current = self.root?;
        unsafe {
            while let Some(right) = (*current.as_ptr()).right {
                current = right;
            }
            Some((&(*current.as_ptr()).key, &(*current.as_ptr()).value))
        }
    }

    pub fn in_order(&self) -> Vec<(&K, &V)> {
        let mut result = Vec::with_capacity(self.len);
        in_order_traverse(self.root, &mut result);
        result
    }

    pub fn pre_order(&self) -> Vec<(&K, &V)> {
        let mut result = Vec::with_capacity(self.len);
        pre_order_traverse(self.root, &mut result);
        result
    }

    /// Exact-key lookup by iterative descent.
    pub(crate) fn find_node(&self, key: &K) -> Link<K, V> {
        let mut current = self.root;
        while let Some(n) = current {
            unsafe {
                match key.cmp(&(*n.as_ptr()).key) {
                    Ordering::Less => current = (*n.as_ptr()).left,
                    Ordering::Greater => current = (*n.as_ptr()).right,
                    Ordering::Equal => return Some(n),
                }
            }
        }
        None
    }

    /// Plain BST positioning: descends from the root, overwrites on a
    /// duplicate key, otherwise attaches a fresh leaf and reports where.
    pub(crate) fn attach(&mut self, key: K, value: V) -> Attached<K, V> {
        let mut cursor = match self.root {
            Some(root) => root,
            None => {
                self.root = Some(Node::new_leaf(key, value, None));
                self.len += 1;
                return Attached::Root;
            }
        };
        unsafe {
            loop {
                let c = cursor.as_ptr();
                match key.cmp(&(*c).key) {
                    Ordering::Equal => {
                        (*c).value = value;
                        return Attached::Replaced;
                    }
                    Ordering::Less => match (*c).left {
                        Some(next) => cursor = next,
                        None => {
                            let node = Node::new_leaf(key, value, Some(cursor));
                            (*c).left = Some(node);
                            self.len += 1;
                            return Attached::Leaf { node, parent: cursor };
                        }
                    },
                    Ordering::Greater => match (*c).right {
                        Some(next) => cursor = next,
                        None => {
                            let node = Node::new_leaf(key, value, Some(cursor));
                            (*c).right = Some(node);
                            self.len += 1;
                            return Attached::Leaf { node, parent: cursor };
                        }
                    },
                }
            }
        }
    }
}

impl<K, V> BinarySearchTree<K, V> {
    /// In-order predecessor: rightmost node of the left subtree when one
    /// exists, otherwise the first ancestor reached from a right child.
    pub(crate) unsafe fn predecessor(node: NonNull<Node<K, V>>) -> Link<K, V> {
        if let Some(mut current) = (*node.as_ptr()).left {
            while let Some(right) = (*current.as_ptr()).right {
                current = right;
            }
            return Some(current);
        }
        let mut current = node;
        let mut parent = (*node.as_ptr()).parent;
        while let Some(p) = parent {
            if (*p.as_ptr()).right == Some(current) {
                return Some(p);
            }
            current = p;
            parent = (*p.as_ptr()).parent;
        }
        None
    }

    /// Exchanges the positions of two nodes in the pointer topology: after
    /// the swap, `n1` occupies `n2`'s former place and vice versa. Keys and
    /// values travel with the node objects. Handles the adjacent case where
    /// one node is the other's direct child, and updates the root pointer.
    pub(crate) unsafe fn swap_node_identity(
        &mut self,
        n1: NonNull<Node<K, V>>,
        n2: NonNull<Node<K, V>>,
    ) {
        if n1 == n2 {
            return;
        }
        let p1 = n1.as_ptr();
        let p2 = n2.as_ptr();

        let n1_parent = (*p1).parent;
        let n1_left = (*p1).left;
        let n1_right = (*p1).right;
        let n1_is_left = match n1_parent {
            Some(p) => (*p.as_ptr()).left == Some(n1),
            None => false,
        };
        let n2_parent = (*p2).parent;
        let n2_left = (*p2).left;
        let n2_right = (*p2).right;
        let n2_is_left = match n2_parent {
            Some(p) => (*p.as_ptr()).left == Some(n2),
            None => false,
        };

        std::mem::swap(&mut (*p1).parent, &mut (*p2).parent);
        std::mem::swap(&mut (*p1).left, &mut (*p2).left);
        std::mem::swap(&mut (*p1).right, &mut (*p2).right);

        // When one node was the other's direct child the blind swap above
        // leaves a self-reference; patch the pair back into parent/child form.
        if n1_right == Some(n2) {
            (*p2).right = Some(n1);
            (*p1).parent = Some(n2);
        } else if n2_right == Some(n1) {
            (*p1).right = Some(n2);
            (*p2).parent = Some(n1);
        } else if n1_left == Some(n2) {
            (*p2).left = Some(n1);
            (*p1).parent = Some(n2);
        } else if n2_left == Some(n1) {
            (*p1).left = Some(n2);
            (*p2).parent = Some(n1);
        }

        if let Some(p) = n1_parent {
            if p != n2 {
                if n1_is_left {
                    (*p.as_ptr()).left = Some(n2);
                } else {
                    (*p.as_ptr()).right = Some(n2);
                }
            }
        }
        if let Some(c) = n1_left {
            if c != n2 {
                (*c.as_ptr()).parent = Some(n2);
            }
        }
        if let Some(c) = n1_right {
            if c != n2 {
                (*c.as_ptr()).parent = Some(n2);
            }
        }
        if let Some(p) = n2_parent {
            if p != n1 {
                if n2_is_left {
                    (*p.as_ptr()).left = Some(n1);
                } else {
                    (*p.as_ptr()).right = Some(n1);
                }
            }
        }
        if let Some(c) = n2_left {
            if c != n1 {
                (*c.as_ptr()).parent = Some(n1);
            }
        }
        if let Some(c) = n2_right {
            if c != n1 {
                (*c.as_ptr()).parent = Some(n1);
            }
        }

        if self.root == Some(n1) {
            self.root = Some(n2);
        } else if self.root == Some(n2) {
            self.root = Some(n1);
        }
    }

    /// Splices out a node with at most one child and frees it. The single
    /// child (or nothing) takes its place under the former parent. Returns
    /// the former parent and the balance adjustment for that parent: +1 when
    /// the node was a left child, -1 when a right child, 0 when it was root.
    pub(crate) unsafe fn detach(&mut self, node: NonNull<Node<K, V>>) -> (Link<K, V>, i8) {
        let n = node.as_ptr();
        debug_assert!(
            (*n).left.is_none() || (*n).right.is_none(),
            "detach requires a node with at most one child"
        );
        let parent = (*n).parent;
        let child = (*n).left.or((*n).right);
        let diff = match parent {
            None => 0,
            Some(p) => {
                if (*p.as_ptr()).left == Some(node) {
                    1
                } else {
                    -1
                }
            }
        };

        match parent {
            None => self.root = child,
            Some(p) => {
                if diff == 1 {
                    (*p.as_ptr()).left = child;
                } else {
                    (*p.as_ptr()).right = child;
                }
            }
        }
        if let Some(c) = child {
            (*c.as_ptr()).parent = parent;
        }

        drop(Box::from_raw(n));
        self.len -= 1;
        (parent, diff)
    }

    /// Frees every node reachable from `root` without recursing: children
    /// are chopped off first, then the walk climbs back via parent links.
    fn teardown(root: Link<K, V>) {
        let mut current = root;
        while let Some(n) = current {
            unsafe {
                let node = n.as_ptr();
                if let Some(left) = (*node).left {
                    (*node).left = None;
                    current = Some(left);
                } else if let Some(right) = (*node).right {
                    (*node).right = None;
                    current = Some(right);
                } else {
                    current = (*node).parent;
                    drop(Box::from_raw(node));
                }
            }
        }
    }
}

fn in_order_traverse<'a, K, V>(link: Link<K, V>, result: &mut Vec<(&'a K, &'a V)>) {
    if let Some(n) = link {
        unsafe {
            in_order_traverse((*n.as_ptr()).left, result);
            result.push((&(*n.as_ptr()).key, &(*n.as_ptr()).value));
            in_order_traverse((*n.as_ptr()).right, result);
        }
    }
}

fn pre_order_traverse<'a, K, V>(link: Link<K, V>, result: &mut Vec<(&'a K, &'a V)>) {
    if let Some(n) = link {
        unsafe {
            result.push((&(*n.as_ptr()).key, &(*n.as_ptr()).value));
            pre_order_traverse((*n.as_ptr()).left, result);
            pre_order_traverse((*n.as_ptr()).right, result);
        }
    }
}

impl<K, V> Drop for BinarySearchTree<K, V> {
    fn drop(&mut self) {
        Self::teardown(self.root.take());
    }
}

impl<K: Ord, V> Default for BinarySearchTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, V: Clone> Clone for BinarySearchTree<K, V> {
    fn clone(&self) -> Self {
        let mut new_tree = BinarySearchTree::new();
        for (key, value) in self.pre_order() {
            new_tree.insert(key.clone(), value.clone());
        }
        new_tree
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BinarySearchTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = Vec::with_capacity(self.len);
        in_order_traverse(self.root, &mut entries);
        f.debug_map().entries(entries).finish()
    }
}

impl<K, V> IntoIterator for BinarySearchTree<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(mut self) -> Self::IntoIter {
        fn collect_in_order<K, V>(link: Link<K, V>, result: &mut Vec<(K, V)>) {
            if let Some(n) = link {
                let node = unsafe { Box::from_raw(n.as_ptr()) };
                let Node {
                    key,
                    value,
                    left,
                    right,
                    ..
                } = *node;
                collect_in_order(left, result);
                result.push((key, value));
                collect_in_order(right, result);
            }
        }
        let mut pairs = Vec::with_capacity(self.len);
        let root = self.root.take();
        self.len = 0;
        collect_in_order(root, &mut pairs);
        pairs.into_iter()
    }
}
