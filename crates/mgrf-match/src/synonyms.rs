//! # Qualification Synonyms
//!
//! Some credentials are issued under more than one label; a South African
//! family physician may list `FCFP(SA)` or just `FCFP`. Declared synonyms
//! form equivalence classes (a disjoint-set forest over labels), so a
//! declaration works from either side and chains transitively.
//!
//! Labels that were never declared only match themselves.

use std::collections::{BTreeMap, BTreeSet};

/// Equivalence classes of qualification labels.
#[derive(Debug, Clone, Default)]
pub struct QualificationSynonyms {
    index: BTreeMap<String, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl QualificationSynonyms {
    /// An empty table: every label matches only itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default table (`FCFP(SA)` ≡ `FCFP`).
    pub fn builtin() -> Self {
        let mut synonyms = Self::new();
        synonyms.declare("FCFP(SA)", "FCFP");
        synonyms
    }

    fn slot(&mut self, label: &str) -> usize {
        if let Some(&i) = self.index.get(label) {
            return i;
        }
        let i = self.parent.len();
        self.parent.push(i);
        self.rank.push(0);
        self.index.insert(label.to_string(), i);
        i
    }

    fn root(&self, mut i: usize) -> usize {
        while self.parent[i] != i {
            i = self.parent[i];
        }
        i
    }

    fn root_compressing(&mut self, i: usize) -> usize {
        let root = self.root(i);
        let mut cur = i;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Declare two labels equivalent.
    pub fn declare(&mut self, a: &str, b: &str) {
        let (ia, ib) = (self.slot(a), self.slot(b));
        let (ra, rb) = (self.root_compressing(ia), self.root_compressing(ib));
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] = self.rank[ra].saturating_add(1);
            }
        }
    }

    /// Declare every label in `group` equivalent to every other.
    pub fn declare_group<I, S>(&mut self, group: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut iter = group.into_iter();
        let Some(first) = iter.next() else {
            return;
        };
        let first = first.as_ref().to_string();
        self.slot(&first);
        for label in iter {
            self.declare(&first, label.as_ref());
        }
    }

    /// Whether `a` and `b` are the same label or declared equivalent.
    pub fn are_equivalent(&self, a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }
        match (self.index.get(a), self.index.get(b)) {
            (Some(&ia), Some(&ib)) => self.root(ia) == self.root(ib),
            _ => false,
        }
    }

    /// Every label in `label`'s class, sorted, including `label` itself.
    pub fn equivalents(&self, label: &str) -> Vec<String> {
        let Some(&i) = self.index.get(label) else {
            return vec![label.to_string()];
        };
        let root = self.root(i);
        self.index
            .iter()
            .filter(|(_, j)| self.root(**j) == root)
            .map(|(l, _)| l.clone())
            .collect()
    }

    /// Whether a holder of `held` satisfies the `required` credential,
    /// verbatim or through a synonym.
    pub fn is_satisfied(&self, required: &str, held: &BTreeSet<String>) -> bool {
        held.contains(required) || held.iter().any(|h| self.are_equivalent(required, h))
    }

    /// Number of labels that appear in some declaration.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
