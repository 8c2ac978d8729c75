//! Relationships describe how the two terms of an edge relate to each other
//!
//! OBO files store every edge as an ordered pair: the term of the stanza
//! and the term that is referenced in the `is_a:` or `relationship:` line.
//! Which of the two is the semantic *parent* depends on the relationship.
//! A [`Relationship`] knows which pair position is *forward* (the broader,
//! parent term) and which is *reverse* (the narrower, child term).
//!
//! Only [`RelationshipCategory::Scoping`] relationships define the
//! parent/child structure that ancestors and descendants are computed from.
//! All other relationships are kept on the edges and counted, but do not
//! change the closure.
use std::fmt::Display;
use std::str::FromStr;

use crate::{OboError, OboResult, IS_A};

/// Semantic category of a relationship
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum RelationshipCategory {
    /// `is_a`, `part_of`, `has_part`: one term is scoped within another
    Scoping,
    /// `occurs_in`, `happens_during`, ...
    Spatiotemporal,
    /// `regulates` and its positive and negative variants
    Active,
    Other,
}

/// A position in the ordered node pair of an edge
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Position {
    First,
    Second,
}

impl Position {
    /// Returns the complementary position
    pub fn other(self) -> Position {
        match self {
            Position::First => Position::Second,
            Position::Second => Position::First,
        }
    }

    /// Selects the element at this position from the pair
    pub fn select<T>(self, pair: (T, T)) -> T {
        match self {
            Position::First => pair.0,
            Position::Second => pair.1,
        }
    }
}

/// Defines whether a relationship has a semantic direction
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum RelationshipKind {
    /// The node at the `forward` position is the parent
    Directional { forward: Position },
    NonDirectional,
}

/// How the direction of `has_part` is interpreted
///
/// OBO files record `has_part` in the opposite orientation of `is_a` and
/// `part_of`: the stanza term is the *whole*. [`DirectionMode::Corrected`]
/// flips the direction so that the whole becomes the parent, consistent
/// with the other scoping relationships.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum DirectionMode {
    #[default]
    Corrected,
    /// Keep the direction as it is written in the ontology file
    Original,
}

impl TryFrom<&str> for DirectionMode {
    type Error = OboError;
    fn try_from(s: &str) -> OboResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "corrected" | "default" => Ok(DirectionMode::Corrected),
            "original" => Ok(DirectionMode::Original),
            _ => Err(OboError::InvalidInput(format!(
                "{s} is not a valid direction mode"
            ))),
        }
    }
}

impl FromStr for DirectionMode {
    type Err = OboError;
    fn from_str(s: &str) -> OboResult<Self> {
        DirectionMode::try_from(s)
    }
}

/// A relationship type, as defined by a `[Typedef]` stanza
///
/// # Examples
///
/// ```
/// use obocats::{DirectionMode, Relationship};
///
/// let part_of = Relationship::known("part_of", DirectionMode::Corrected).unwrap();
/// // `GO:2 part_of GO:1` => GO:1 is the parent
/// assert_eq!(part_of.forward(("GO:2", "GO:1")), Some("GO:1"));
/// assert_eq!(part_of.reverse(("GO:2", "GO:1")), Some("GO:2"));
///
/// let has_part = Relationship::known("has_part", DirectionMode::Corrected).unwrap();
/// // `GO:1 has_part GO:2` => GO:1 is the parent
/// assert_eq!(has_part.forward(("GO:1", "GO:2")), Some("GO:1"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relationship {
    id: String,
    name: String,
    category: RelationshipCategory,
    kind: RelationshipKind,
    inverse: Option<String>,
}

/// Relationships of the Gene Ontology with their category and the
/// forward position as written in OBO files
const KNOWN_RELATIONSHIPS: [(&str, RelationshipCategory, Position); 11] = [
    ("ends_during", RelationshipCategory::Spatiotemporal, Position::Second),
    ("happens_during", RelationshipCategory::Spatiotemporal, Position::Second),
    ("has_part", RelationshipCategory::Scoping, Position::Second),
    ("negatively_regulates", RelationshipCategory::Active, Position::Second),
    ("never_in_taxon", RelationshipCategory::Other, Position::Second),
    ("occurs_in", RelationshipCategory::Spatiotemporal, Position::Second),
    ("part_of", RelationshipCategory::Scoping, Position::Second),
    ("positively_regulates", RelationshipCategory::Active, Position::Second),
    ("regulates", RelationshipCategory::Active, Position::Second),
    ("starts_during", RelationshipCategory::Spatiotemporal, Position::Second),
    (IS_A, RelationshipCategory::Scoping, Position::Second),
];

/// Relationships whose direction is flipped in [`DirectionMode::Corrected`]
const INVERTED_RELATIONSHIPS: [&str; 1] = ["has_part"];

impl Relationship {
    /// Constructs a new directional [`Relationship`]
    pub fn directional(id: &str, category: RelationshipCategory, forward: Position) -> Self {
        Self {
            id: id.to_string(),
            name: id.replace('_', " "),
            category,
            kind: RelationshipKind::Directional { forward },
            inverse: None,
        }
    }

    /// Constructs a new [`Relationship`] without semantic direction
    pub fn non_directional(id: &str, category: RelationshipCategory) -> Self {
        Self {
            id: id.to_string(),
            name: id.replace('_', " "),
            category,
            kind: RelationshipKind::NonDirectional,
            inverse: None,
        }
    }

    /// Returns the pre-defined relationship with the given id
    ///
    /// # Errors
    ///
    /// [`OboError::UnknownRelationship`] if the id is not part of the
    /// fixed set of relationships
    pub fn known(id: &str, mode: DirectionMode) -> OboResult<Self> {
        let (_, category, forward) = KNOWN_RELATIONSHIPS
            .iter()
            .find(|(known, _, _)| *known == id)
            .ok_or_else(|| OboError::UnknownRelationship(id.to_string()))?;
        let forward = if mode == DirectionMode::Corrected && INVERTED_RELATIONSHIPS.contains(&id) {
            forward.other()
        } else {
            *forward
        };
        Ok(Self::directional(id, *category, forward))
    }

    /// Returns the pre-defined relationship or a directional relationship
    /// of category [`RelationshipCategory::Other`] for unknown ids
    pub fn resolve(id: &str, mode: DirectionMode) -> Self {
        Self::known(id, mode).unwrap_or_else(|_| {
            Self::directional(id, RelationshipCategory::Other, Position::Second)
        })
    }

    /// Returns `true` if the id is part of the fixed set of relationships
    pub fn is_known(id: &str) -> bool {
        KNOWN_RELATIONSHIPS.iter().any(|(known, _, _)| *known == id)
    }

    /// Iterates the ids of all pre-defined relationships
    pub fn known_ids() -> impl Iterator<Item = &'static str> {
        KNOWN_RELATIONSHIPS.iter().map(|(id, _, _)| *id)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_mut(&mut self) -> &mut String {
        &mut self.name
    }

    pub fn category(&self) -> RelationshipCategory {
        self.category
    }

    pub fn kind(&self) -> RelationshipKind {
        self.kind
    }

    /// The id of the inverse relationship, from `inverse_of:`
    pub fn inverse(&self) -> Option<&str> {
        self.inverse.as_deref()
    }

    pub fn inverse_mut(&mut self) -> &mut Option<String> {
        &mut self.inverse
    }

    /// Returns `true` if edges of this relationship define parents and children
    pub fn is_scoping(&self) -> bool {
        self.category == RelationshipCategory::Scoping
            && matches!(self.kind, RelationshipKind::Directional { .. })
    }

    /// Returns the element of the pair that semantically succeeds the other one
    ///
    /// Non-directional relationships have no forward element
    pub fn forward<T>(&self, pair: (T, T)) -> Option<T> {
        match self.kind {
            RelationshipKind::Directional { forward } => Some(forward.select(pair)),
            RelationshipKind::NonDirectional => None,
        }
    }

    /// Returns the element of the pair that semantically precedes the other one
    pub fn reverse<T>(&self, pair: (T, T)) -> Option<T> {
        match self.kind {
            RelationshipKind::Directional { forward } => Some(forward.other().select(pair)),
            RelationshipKind::NonDirectional => None,
        }
    }
}

impl Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn has_part_is_flipped() {
        let corrected = Relationship::known("has_part", DirectionMode::Corrected).unwrap();
        let original = Relationship::known("has_part", DirectionMode::Original).unwrap();
        assert_eq!(corrected.forward(("A", "B")), Some("A"));
        assert_eq!(corrected.reverse(("A", "B")), Some("B"));
        assert_eq!(original.forward(("A", "B")), Some("B"));
        assert_eq!(original.reverse(("A", "B")), Some("A"));
    }

    #[test]
    fn has_part_matches_part_of() {
        let has_part = Relationship::known("has_part", DirectionMode::Corrected).unwrap();
        let part_of = Relationship::known("part_of", DirectionMode::Corrected).unwrap();
        // has_part(A, B) == part_of(B, A)
        assert_eq!(has_part.forward(("A", "B")), part_of.forward(("B", "A")));
        assert_eq!(has_part.reverse(("A", "B")), part_of.reverse(("B", "A")));
    }

    #[test]
    fn only_has_part_changes() {
        for id in Relationship::known_ids().filter(|id| *id != "has_part") {
            assert_eq!(
                Relationship::known(id, DirectionMode::Corrected).unwrap(),
                Relationship::known(id, DirectionMode::Original).unwrap()
            );
        }
    }

    #[test]
    fn categories() {
        let is_a = Relationship::known(IS_A, DirectionMode::default()).unwrap();
        assert!(is_a.is_scoping());
        let regulates = Relationship::known("regulates", DirectionMode::default()).unwrap();
        assert_eq!(regulates.category(), RelationshipCategory::Active);
        assert!(!regulates.is_scoping());

        let unknown = Relationship::resolve("adjacent_to", DirectionMode::default());
        assert_eq!(unknown.category(), RelationshipCategory::Other);
        assert!(Relationship::known("adjacent_to", DirectionMode::default()).is_err());
    }

    #[test]
    fn non_directional() {
        let rel = Relationship::non_directional("equivalent_to", RelationshipCategory::Other);
        assert_eq!(rel.forward((1, 2)), None);
        assert_eq!(rel.reverse((1, 2)), None);
        assert!(!rel.is_scoping());
    }

    #[test]
    fn direction_mode_from_str() {
        assert_eq!("default".parse::<DirectionMode>().unwrap(), DirectionMode::Corrected);
        assert_eq!("Original".parse::<DirectionMode>().unwrap(), DirectionMode::Original);
        assert!("sideways".parse::<DirectionMode>().is_err());
    }
}
