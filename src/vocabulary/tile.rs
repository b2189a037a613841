use crate::vocabulary::tag::Tag;
use std::collections::BTreeSet;
use std::fmt;

/// One of the four neighbour directions on the board
///
/// `x` grows to the right and `y` grows downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Towards `x + 1`
    Right,
    /// Towards `y + 1`
    Down,
    /// Towards `x - 1`
    Left,
    /// Towards `y - 1`
    Up,
}

impl Direction {
    /// All directions in constraint emission order
    pub const ALL: [Self; 4] = [Self::Right, Self::Down, Self::Left, Self::Up];

    /// Position of this direction within [`Direction::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Right => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Up => 3,
        }
    }

    /// Offset `(dx, dy)` of the neighbour in this direction
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Up => (0, -1),
        }
    }

    /// Capitalised name used in constraint names
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Right => "Right",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Up => "Up",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tiles allowed next to a tile in one direction
///
/// A neighbour satisfies the rule when it carries any of `tags` or is one of
/// `tiles`. A rule with neither tags nor tiles places no constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchRule {
    /// Tags whose tiles are allowed
    pub tags: BTreeSet<Tag>,
    /// Tile names that are allowed
    pub tiles: BTreeSet<String>,
}

impl MatchRule {
    /// Rule allowing tiles carrying any of the given tags
    pub fn tags<I, T>(tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            tiles: BTreeSet::new(),
        }
    }

    /// Rule allowing the named tiles
    pub fn tiles<I, S>(tiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: BTreeSet::new(),
            tiles: tiles.into_iter().map(Into::into).collect(),
        }
    }

    /// Also allow the named tiles
    #[must_use]
    pub fn or_tiles<I, S>(mut self, tiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tiles.extend(tiles.into_iter().map(Into::into));
        self
    }

    /// True when the rule names neither tags nor tiles
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.tiles.is_empty()
    }
}

/// A named tile definition with its tags, exclusions and directional match rules
///
/// Other tiles are referenced by name and resolved against a vocabulary when
/// the board is compiled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileType {
    name: String,
    tags: BTreeSet<Tag>,
    exclude_tags: BTreeSet<Tag>,
    exclude_tiles: BTreeSet<String>,
    matches: [Option<MatchRule>; 4],
}

impl TileType {
    /// Create a tile with no tags and no rules
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: BTreeSet::new(),
            exclude_tags: BTreeSet::new(),
            exclude_tiles: BTreeSet::new(),
            matches: [None, None, None, None],
        }
    }

    /// Add tags carried by this tile
    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Exclude every tile carrying any of these tags
    #[must_use]
    pub fn excluding_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        self.exclude_tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Exclude the named tiles
    #[must_use]
    pub fn excluding_tiles<I, S>(mut self, tiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_tiles.extend(tiles.into_iter().map(Into::into));
        self
    }

    /// Set the match rule for one direction, replacing any previous rule
    #[must_use]
    pub fn matching(mut self, direction: Direction, rule: MatchRule) -> Self {
        if let Some(slot) = self.matches.get_mut(direction.index()) {
            *slot = Some(rule);
        }
        self
    }

    /// The tile's name, unique within a vocabulary
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tags carried by this tile
    pub const fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Tags whose tiles may not share a cell with this tile
    pub const fn exclude_tags(&self) -> &BTreeSet<Tag> {
        &self.exclude_tags
    }

    /// Tiles that may not share a cell with this tile
    pub const fn exclude_tiles(&self) -> &BTreeSet<String> {
        &self.exclude_tiles
    }

    /// Match rule for a direction, if one was declared
    pub fn match_rule(&self, direction: Direction) -> Option<&MatchRule> {
        self.matches.get(direction.index()).and_then(Option::as_ref)
    }

    /// True when any exclusion is declared
    pub fn has_exclusions(&self) -> bool {
        !self.exclude_tags.is_empty() || !self.exclude_tiles.is_empty()
    }

    /// Every tile name this tile refers to, with the rule that refers to it
    ///
    /// Used to validate references before compilation.
    pub fn tile_references(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        let exclusions = self
            .exclude_tiles
            .iter()
            .map(|tile| (tile.as_str(), format!("exclude_tiles of '{}'", self.name)));
        let matches = Direction::ALL.into_iter().flat_map(move |direction| {
            self.match_rule(direction)
                .into_iter()
                .flat_map(|rule| rule.tiles.iter())
                .map(move |tile| {
                    (
                        tile.as_str(),
                        format!("{direction} match rule of '{}'", self.name),
                    )
                })
        });
        exclusions.chain(matches)
    }
}
