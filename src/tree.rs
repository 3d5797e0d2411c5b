use indexmap::IndexMap;

/// A node in a parsed tree: either a leaf value or an ordered group of
/// named children.
///
/// Group children keep insertion order. Values appended through an
/// empty-bracket segment (`tags[]`) get auto-incrementing integer keys.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Node<T> {
    Leaf(T),
    Group(IndexMap<String, Node<T>>),
}

/// Ordered tree of plain field values, keyed by top-level field name.
pub type FieldTree = IndexMap<String, Node<String>>;

/// Ordered tree of uploaded-file descriptors, keyed by top-level field name.
pub type FileTree = IndexMap<String, Node<crate::UploadedFile>>;

impl<T> Node<T> {
    /// The leaf value, if this node is a leaf.
    pub fn as_leaf(&self) -> Option<&T> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Group(_) => None,
        }
    }

    /// The children, if this node is a group.
    pub fn as_group(&self) -> Option<&IndexMap<String, Node<T>>> {
        match self {
            Node::Leaf(_) => None,
            Node::Group(children) => Some(children),
        }
    }

    /// Looks up a child by key; `None` on leaves and missing keys.
    pub fn get(&self, key: &str) -> Option<&Node<T>> {
        self.as_group().and_then(|children| children.get(key))
    }

    /// Descends into this node as a group, replacing a leaf if one is in
    /// the way (later insertions win on conflict).
    fn make_group(&mut self) -> &mut IndexMap<String, Node<T>> {
        if let Node::Leaf(_) = self {
            *self = Node::Group(IndexMap::new());
        }

        match self {
            Node::Group(children) => children,
            Node::Leaf(_) => unreachable!(),
        }
    }
}

impl Node<String> {
    /// The leaf text value, if this node is a leaf.
    pub fn as_text(&self) -> Option<&str> {
        self.as_leaf().map(String::as_str)
    }
}

/// Inserts `value` into the tree at the path described by a bracketed field
/// name such as `Item[file]` or `tags[]`.
///
/// The name splits on `[` with a trailing `]` removed from each segment; an
/// empty segment appends at the next available integer key. A bare name is a
/// single-segment path. The final target is overwritten with the leaf value.
pub(crate) fn insert<T>(root: &mut IndexMap<String, Node<T>>, name: &str, value: T) {
    let segments: Vec<&str> = name
        .split('[')
        .map(|segment| segment.strip_suffix(']').unwrap_or(segment))
        .collect();

    let Some((leaf, path)) = segments.split_last() else {
        return;
    };

    let mut group = root;

    for segment in path {
        let key = resolve_key(group, segment);
        group = group
            .entry(key)
            .or_insert_with(|| Node::Group(IndexMap::new()))
            .make_group();
    }

    let key = resolve_key(group, leaf);
    group.insert(key, Node::Leaf(value));
}

fn resolve_key<T>(group: &IndexMap<String, Node<T>>, segment: &str) -> String {
    if segment.is_empty() {
        next_index(group).to_string()
    } else {
        segment.to_owned()
    }
}

/// Next available integer key for an append segment.
fn next_index<T>(group: &IndexMap<String, Node<T>>) -> usize {
    group
        .keys()
        .filter_map(|key| key.parse::<usize>().ok())
        .max()
        .map_or(0, |idx| idx + 1)
}
