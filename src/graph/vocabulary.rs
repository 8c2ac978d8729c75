use std::collections::HashMap;

use crate::term::{Node, NodeGroup, NodeIdx};

/// Splits a text into lowercase words
///
/// Words consist of alphanumeric characters, underscores, apostrophes
/// and hyphens, so `trans-golgi` is a single word.
pub(crate) fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '\'' || c == '-'))
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
}

/// Maps every word of a node's name and definition to the nodes that use it
#[derive(Default)]
pub(crate) struct Vocabulary {
    index: HashMap<String, NodeGroup>,
}

impl Vocabulary {
    pub fn insert(&mut self, idx: NodeIdx, node: &Node) {
        for text in node.vocabulary() {
            for word in words(text) {
                self.index.entry(word).or_default().insert(idx);
            }
        }
    }

    pub fn remove(&mut self, idx: NodeIdx, node: &Node) {
        for text in node.vocabulary() {
            for word in words(text) {
                if let Some(group) = self.index.get_mut(&word) {
                    group.remove(&idx);
                    if group.is_empty() {
                        self.index.remove(&word);
                    }
                }
            }
        }
    }

    /// Returns all nodes that contain at least one word of the keywords
    pub fn lookup<S: AsRef<str>>(&self, keywords: &[S]) -> NodeGroup {
        let mut res = NodeGroup::default();
        for keyword in keywords {
            for word in words(keyword.as_ref()) {
                if let Some(group) = self.index.get(&word) {
                    res = &res | group;
                }
            }
        }
        res
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.index.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn split_words() {
        let w: Vec<String> = words("Trans-Golgi network, (the) cell's_edge").collect();
        assert_eq!(w, vec!["trans-golgi", "network", "the", "cell's_edge"]);
        assert_eq!(words("  ,; ").count(), 0);
    }

    #[test]
    fn insert_lookup_remove() {
        let mut vocab = Vocabulary::default();
        let mut golgi = Node::new("GO:1", "Golgi apparatus");
        *golgi.definition_mut() = "An organelle".to_string();
        let membrane = Node::new("GO:2", "golgi membrane");

        vocab.insert(0usize.into(), &golgi);
        vocab.insert(1usize.into(), &membrane);

        assert_eq!(vocab.lookup(&["golgi"]).len(), 2);
        assert_eq!(vocab.lookup(&["ORGANELLE"]).len(), 1);
        assert_eq!(vocab.lookup(&["membrane", "apparatus"]).len(), 2);
        assert!(vocab.lookup(&["nucleus"]).is_empty());

        vocab.remove(0usize.into(), &golgi);
        assert_eq!(vocab.lookup(&["golgi"]).len(), 1);
        assert!(vocab.lookup(&["organelle"]).is_empty());
        assert_eq!(vocab.len(), 2);
    }
}
