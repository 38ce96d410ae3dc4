// Languiny Mapping Tables
// Per-key symbol tables between layouts, built once and shared process-wide

use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::Layout;

/// Authored forward table: lowercase symbol under US English mapped to the
/// lowercase symbol produced by the same physical key under Russian.
const EN_US_TO_RU_RU: &[(char, char)] = &[
    ('`', 'ё'),
    ('q', 'й'),
    ('w', 'ц'),
    ('e', 'у'),
    ('r', 'к'),
    ('t', 'е'),
    ('y', 'н'),
    ('u', 'г'),
    ('i', 'ш'),
    ('o', 'щ'),
    ('p', 'з'),
    ('[', 'х'),
    (']', 'ъ'),
    ('a', 'ф'),
    ('s', 'ы'),
    ('d', 'в'),
    ('f', 'а'),
    ('g', 'п'),
    ('h', 'р'),
    ('j', 'о'),
    ('k', 'л'),
    ('l', 'д'),
    (';', 'ж'),
    ('\'', 'э'),
    ('z', 'я'),
    ('x', 'ч'),
    ('c', 'с'),
    ('v', 'м'),
    ('b', 'и'),
    ('n', 'т'),
    ('m', 'ь'),
    (',', 'б'),
    ('.', 'ю'),
    ('/', '.'),
];

/// Authored tables. Reverse directions are derived, never written by hand.
const AUTHORED: &[(Layout, Layout, &[(char, char)])] =
    &[(Layout::EnUS, Layout::RuRU, EN_US_TO_RU_RU)];

static REGISTRY: LazyLock<TableRegistry> = LazyLock::new(|| {
    // Constant data: a collision here is an authoring bug and must not ship.
    TableRegistry::build(AUTHORED).unwrap_or_else(|e| panic!("invalid built-in layout table: {e}"))
});

/// Errors raised while constructing a mapping table
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("{from}->{to}: symbol '{key}' is listed more than once")]
    DuplicateKey { from: Layout, to: Layout, key: char },

    #[error("{from}->{to}: '{first}' and '{second}' both map to '{target}'")]
    Collision {
        from: Layout,
        to: Layout,
        first: char,
        second: char,
        target: char,
    },

    #[error("table from {0} to itself")]
    SameLayout(Layout),
}

/// An immutable, injective symbol table for one ordered pair of layouts.
///
/// Keys and values are lowercase symbols. Iteration follows authoring order.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingTable {
    from: Layout,
    to: Layout,
    map: IndexMap<char, char>,
}

impl MappingTable {
    /// Build a table from `(source, target)` pairs, rejecting duplicate keys
    /// and two keys that map to the same target.
    pub fn from_pairs(from: Layout, to: Layout, pairs: &[(char, char)]) -> Result<Self, TableError> {
        if from == to {
            return Err(TableError::SameLayout(from));
        }

        let mut map = IndexMap::with_capacity(pairs.len());
        let mut seen_targets: IndexMap<char, char> = IndexMap::with_capacity(pairs.len());

        for &(key, target) in pairs {
            if map.insert(key, target).is_some() {
                return Err(TableError::DuplicateKey { from, to, key });
            }
            if let Some(first) = seen_targets.insert(target, key) {
                return Err(TableError::Collision {
                    from,
                    to,
                    first,
                    second: key,
                    target,
                });
            }
        }

        Ok(Self { from, to, map })
    }

    /// Derive the table for the opposite direction
    pub fn inverse(&self) -> Result<Self, TableError> {
        let pairs: Vec<(char, char)> = self.map.iter().map(|(&k, &v)| (v, k)).collect();
        Self::from_pairs(self.to, self.from, &pairs)
    }

    pub fn source(&self) -> Layout {
        self.from
    }

    pub fn target(&self) -> Layout {
        self.to
    }

    /// Look up the symbol produced by the same key under the target layout
    pub fn get(&self, symbol: char) -> Option<char> {
        self.map.get(&symbol).copied()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.map.contains_key(&symbol)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate `(source, target)` pairs in authoring order
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.map.iter().map(|(&k, &v)| (k, v))
    }
}

/// All tables known to the engine, keyed by ordered layout pair
#[derive(Debug)]
pub struct TableRegistry {
    tables: IndexMap<(Layout, Layout), MappingTable>,
}

impl TableRegistry {
    /// Build forward tables from authored data and derive their inverses
    pub fn build(authored: &[(Layout, Layout, &[(char, char)])]) -> Result<Self, TableError> {
        let mut tables = IndexMap::with_capacity(authored.len() * 2);

        for &(from, to, pairs) in authored {
            let forward = MappingTable::from_pairs(from, to, pairs)?;
            let reverse = forward.inverse()?;
            log::debug!("built layout table {}->{} with {} symbols", from, to, forward.len());
            tables.insert((from, to), forward);
            tables.insert((to, from), reverse);
        }

        Ok(Self { tables })
    }

    /// The shared built-in registry
    pub fn global() -> &'static TableRegistry {
        &REGISTRY
    }

    pub fn get(&self, from: Layout, to: Layout) -> Option<&MappingTable> {
        self.tables.get(&(from, to))
    }

    /// Tables whose source is `from`, in registration order
    pub fn from_layout(&self, from: Layout) -> impl Iterator<Item = &MappingTable> + '_ {
        self.tables.values().filter(move |t| t.source() == from)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Look up a built-in table for an ordered layout pair
pub fn table(from: Layout, to: Layout) -> Option<&'static MappingTable> {
    TableRegistry::global().get(from, to)
}

/// Whether `symbol` sits on a key covered by any built-in table
pub fn is_keyed_symbol(symbol: char) -> bool {
    TableRegistry::global()
        .tables
        .values()
        .any(|t| t.contains(symbol))
}
