use std::collections::HashMap;
use std::hash::Hash;

/// Interning table mapping vertex labels to dense ids in first-seen order
#[derive(Debug, Clone)]
pub struct VertexIndex<L>
where
    L: Clone + Eq + Hash,
{
    /// label -> id
    ids: HashMap<L, usize>,

    /// id -> label
    labels: Vec<L>,
}

impl<L> VertexIndex<L>
where
    L: Clone + Eq + Hash,
{
    /// Creates an empty index
    pub fn new() -> Self {
        VertexIndex {
            ids: HashMap::new(),
            labels: Vec::new(),
        }
    }

    /// Creates an empty index with room for `vertices` labels
    pub fn with_capacity(vertices: usize) -> Self {
        VertexIndex {
            ids: HashMap::with_capacity(vertices),
            labels: Vec::with_capacity(vertices),
        }
    }

    /// Returns the id of `label`, assigning the next free id if it is new
    pub fn intern(&mut self, label: L) -> usize {
        if let Some(&id) = self.ids.get(&label) {
            return id;
        }

        let id = self.labels.len();
        self.labels.push(label.clone());
        self.ids.insert(label, id);
        id
    }

    /// Number of distinct labels seen so far
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Looks up the id of a label without interning it
    pub fn id(&self, label: &L) -> Option<usize> {
        self.ids.get(label).copied()
    }

    /// Looks up the label of an id
    pub fn label(&self, id: usize) -> Option<&L> {
        self.labels.get(id)
    }

    /// Labels in id order
    pub fn labels(&self) -> impl Iterator<Item = &L> + '_ {
        self.labels.iter()
    }
}

impl<L> Default for VertexIndex<L>
where
    L: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
