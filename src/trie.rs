// Boggle Trie
// Arena-allocated 26-ary trie over the letters A-Z

const ALPHABET: usize = 26;

/// Child slot value meaning "no child". The root lives at index 0 and is
/// never anyone's child, so 0 is free to use as the sentinel.
const NO_CHILD: u32 = 0;

#[derive(Debug, Clone)]
struct Node {
    children: [u32; ALPHABET],
    terminal: bool,
}

impl Node {
    fn new() -> Self {
        Self {
            children: [NO_CHILD; ALPHABET],
            terminal: false,
        }
    }
}

/// Prefix tree over uppercase ASCII words
///
/// Every node except the root lies on the path of at least one inserted
/// word, so reaching a node is enough to answer a prefix query.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    words: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
            words: 0,
        }
    }

    /// Insert `word`, returning `true` if it was not already present
    ///
    /// Empty words and words with bytes outside `A..=Z` are not stored and
    /// return `false`.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_uppercase()) {
            return false;
        }

        let mut node = 0usize;
        for b in word.bytes() {
            let slot = (b - b'A') as usize;
            let child = self.nodes[node].children[slot];
            node = if child == NO_CHILD {
                let next = self.nodes.len();
                self.nodes.push(Node::new());
                self.nodes[node].children[slot] = next as u32;
                next
            } else {
                child as usize
            };
        }

        let fresh = !self.nodes[node].terminal;
        self.nodes[node].terminal = true;
        if fresh {
            self.words += 1;
        }
        fresh
    }

    /// Exact membership
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word)
            .is_some_and(|node| self.nodes[node].terminal)
    }

    /// Whether any stored word starts with `prefix` (the word itself counts)
    pub fn has_prefix(&self, prefix: &str) -> bool {
        match self.walk(prefix) {
            Some(0) => self.words > 0,
            Some(_) => true,
            None => false,
        }
    }

    /// Number of distinct words stored
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of allocated nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Follow `s` from the root; `None` once a byte has no child
    #[inline]
    fn walk(&self, s: &str) -> Option<usize> {
        let mut node = 0usize;
        for b in s.bytes() {
            if !b.is_ascii_uppercase() {
                return None;
            }
            let child = self.nodes[node].children[(b - b'A') as usize];
            if child == NO_CHILD {
                return None;
            }
            node = child as usize;
        }
        Some(node)
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut trie = Trie::new();
        for word in iter {
            trie.insert(word.as_ref());
        }
        trie
    }
}
