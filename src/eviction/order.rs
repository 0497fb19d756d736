//! Key Order Module
//!
//! Ordered key sequence with a position index, shared by the built-in policies.

use std::collections::{HashMap, VecDeque};

use generational_arena::{Arena, Index};

#[derive(Debug)]
struct Node {
    key: String,
    prev: Option<Index>,
    next: Option<Index>,
}

// == Key Order ==
/// Doubly linked list of keys, front = oldest, back = newest.
///
/// Nodes live in an arena and `positions` maps a key to the arena indices of
/// its occurrences, oldest first. A key may appear more than once; FIFO and
/// LIFO rely on that. Every operation is O(1).
#[derive(Debug)]
pub(crate) struct KeyOrder {
    nodes: Arena<Node>,
    /// Key -> its node indices, front to back, never empty
    positions: HashMap<String, VecDeque<Index>>,
    head: Option<Index>,
    tail: Option<Index>,
}

impl KeyOrder {
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            positions: HashMap::new(),
            head: None,
            tail: None,
        }
    }

    // == Push Back ==
    /// Appends an occurrence of `key` at the back.
    pub fn push_back(&mut self, key: &str) {
        let index = self.nodes.insert(Node {
            key: key.to_string(),
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(old_tail) => self.nodes[old_tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);

        self.positions
            .entry(key.to_string())
            .or_default()
            .push_back(index);
    }

    // == Remove Oldest Occurrence ==
    /// Removes the front-most occurrence of `key`. Returns false if untracked.
    pub fn remove_oldest(&mut self, key: &str) -> bool {
        match self.take_position(key, VecDeque::pop_front) {
            Some(index) => {
                self.unlink(index);
                true
            }
            None => false,
        }
    }

    // == Remove Newest Occurrence ==
    /// Removes the back-most occurrence of `key`. Returns false if untracked.
    pub fn remove_newest(&mut self, key: &str) -> bool {
        match self.take_position(key, VecDeque::pop_back) {
            Some(index) => {
                self.unlink(index);
                true
            }
            None => false,
        }
    }

    // == Pop Front ==
    /// Removes and returns the oldest key.
    pub fn pop_front(&mut self) -> Option<String> {
        let index = self.head?;
        let key = self.unlink(index)?;
        // The list head is also the oldest occurrence of its key.
        self.take_position(&key, VecDeque::pop_front);
        Some(key)
    }

    // == Pop Back ==
    /// Removes and returns the newest key.
    pub fn pop_back(&mut self) -> Option<String> {
        let index = self.tail?;
        let key = self.unlink(index)?;
        self.take_position(&key, VecDeque::pop_back);
        Some(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    /// Number of tracked occurrences.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Keys front to back.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(self.nodes.len());
        let mut current = self.head;
        while let Some(index) = current {
            let node = &self.nodes[index];
            keys.push(node.key.clone());
            current = node.next;
        }
        keys
    }

    /// Takes one index for `key` from its occurrence queue.
    fn take_position(
        &mut self,
        key: &str,
        take: fn(&mut VecDeque<Index>) -> Option<Index>,
    ) -> Option<Index> {
        let indices = self.positions.get_mut(key)?;
        let index = take(indices);
        if indices.is_empty() {
            self.positions.remove(key);
        }
        index
    }

    /// Detaches a node from the list and frees it, returning its key.
    fn unlink(&mut self, index: Index) -> Option<String> {
        let node = self.nodes.remove(index)?;

        match node.prev {
            Some(prev) => self.nodes[prev].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.nodes[next].prev = node.prev,
            None => self.tail = node.prev,
        }

        Some(node.key)
    }
}
