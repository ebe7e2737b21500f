//! Lookup data consumed by the transcoder.
//!
//! Two read-only tables back every operation in this crate:
//!
//! - a codepoint table answering "how can this codepoint be written in
//!   ASCII, and does it have an HTML entity name?"
//! - an entity table mapping HTML entity names to codepoints and back
//!
//! Both are exposed through traits ([`CodepointTable`], [`EntityTable`]) so
//! the walk in [`crate::transcode`] does not care where the data comes from.
//! [`Builtin`] is the implementation used by the free functions: it answers
//! pedantic renderings from the Unidecode-derived `deunicode` data, optical
//! renderings from a curated lookalike list, and entity names from the
//! HTML 4 entity set.
//!
//! ## Addressing
//!
//! Codepoints are split into a group (`cp >> 8`) and an offset (`cp & 0xFF`)
//! addressing a two-level table of 256-slot pages. Any codepoint whose group
//! is at or beyond [`MAX_GROUP`] has no entry; that is an "unmapped" outcome,
//! never an error.

mod entities;
mod optical;

use std::collections::HashMap;
use std::sync::LazyLock;

use entities::HTML_ENTITIES;
use optical::OPTICAL;

/// Number of 256-codepoint groups covered by the built-in tables.
///
/// The tables cover the Basic Multilingual Plane; supplementary-plane
/// codepoints are unmapped.
pub const MAX_GROUP: u32 = 0x100;

const PAGE_SIZE: usize = 256;

/// A Unicode scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codepoint(u32);

impl Codepoint {
    /// Create a codepoint, rejecting surrogates and values above `0x10FFFF`.
    pub fn new(value: u32) -> Option<Self> {
        char::from_u32(value).map(Self::from)
    }

    /// The raw scalar value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// High part of the two-level address (`value >> 8`).
    pub fn group(self) -> u32 {
        self.0 >> 8
    }

    /// Low part of the two-level address (`value & 0xFF`).
    pub fn offset(self) -> u32 {
        self.0 & 0xFF
    }

    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }
}

impl From<char> for Codepoint {
    fn from(ch: char) -> Self {
        Self(ch as u32)
    }
}

/// Candidate renderings for a single codepoint.
///
/// An entry with all three fields absent carries no information and is
/// never handed out by [`Builtin`]; callers see `None` instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransliterationEntry {
    /// Preferred plain-ASCII rendering (phonetic/semantic).
    pub pedantic: Option<&'static str>,
    /// Visual-lookalike ASCII rendering.
    pub optical: Option<&'static str>,
    /// Canonical HTML entity name, without `&` and `;`.
    pub entity_name: Option<&'static str>,
}

impl TransliterationEntry {
    pub fn is_empty(&self) -> bool {
        self.pedantic.is_none() && self.optical.is_none() && self.entity_name.is_none()
    }
}

/// Source of per-codepoint transliteration data.
pub trait CodepointTable {
    /// Look up the entry for `cp`, or `None` when the codepoint is unmapped.
    fn entry(&self, cp: Codepoint) -> Option<TransliterationEntry>;
}

/// Bidirectional mapping between HTML entity names and codepoints.
pub trait EntityTable {
    /// Resolve a case-sensitive entity name (e.g. `"ldquo"`).
    fn codepoint(&self, name: &str) -> Option<char>;

    /// Canonical entity name for a character, if it has one.
    fn name(&self, ch: char) -> Option<&'static str>;
}

/// The tables compiled into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Builtin;

impl CodepointTable for Builtin {
    fn entry(&self, cp: Codepoint) -> Option<TransliterationEntry> {
        if cp.group() >= MAX_GROUP {
            return None;
        }
        let ch = cp.to_char()?;

        let pedantic = if ch.is_ascii() {
            Some(ascii_str(ch as u8))
        } else {
            deunicode::deunicode_char(ch).filter(|s| !s.is_empty())
        };

        let entry = TransliterationEntry {
            pedantic,
            optical: OPTICAL_TABLE.get(cp),
            entity_name: ENTITY_NAMES.get(cp),
        };

        (!entry.is_empty()).then_some(entry)
    }
}

impl EntityTable for Builtin {
    fn codepoint(&self, name: &str) -> Option<char> {
        ENTITY_CODEPOINTS.get(name).copied()
    }

    fn name(&self, ch: char) -> Option<&'static str> {
        ENTITY_NAMES.get(Codepoint::from(ch))
    }
}

/// Look up a character in the built-in codepoint table.
pub fn lookup(ch: char) -> Option<TransliterationEntry> {
    Builtin.entry(Codepoint::from(ch))
}

/// Resolve an entity name against the built-in entity table.
pub fn entity_codepoint(name: &str) -> Option<char> {
    Builtin.codepoint(name)
}

/// Every built-in entity name with the character it stands for.
pub fn entity_names() -> impl Iterator<Item = (&'static str, char)> {
    HTML_ENTITIES
        .iter()
        .filter_map(|&(name, cp)| Some((name, char::from_u32(cp)?)))
}

// ============================================================================
// Two-level page table
// ============================================================================

type Page = [Option<&'static str>; PAGE_SIZE];

/// Sparse group -> page -> slot table. Only groups with at least one
/// populated slot allocate a page.
struct PagedTable {
    pages: Vec<Option<Box<Page>>>,
}

impl PagedTable {
    /// Build from `(codepoint, value)` pairs. The first value for a
    /// codepoint wins; codepoints beyond [`MAX_GROUP`] are ignored.
    fn from_entries(entries: impl IntoIterator<Item = (u32, &'static str)>) -> Self {
        let mut pages: Vec<Option<Box<Page>>> = (0..MAX_GROUP).map(|_| None).collect();

        for (value, text) in entries {
            let cp = Codepoint(value);
            let Some(page) = pages.get_mut(cp.group() as usize) else {
                continue;
            };
            let slot = &mut page.get_or_insert_with(|| Box::new([None; PAGE_SIZE]))
                [cp.offset() as usize];
            if slot.is_none() {
                *slot = Some(text);
            }
        }

        Self { pages }
    }

    fn get(&self, cp: Codepoint) -> Option<&'static str> {
        self.pages.get(cp.group() as usize)?.as_ref()?[cp.offset() as usize]
    }

    fn page_count(&self) -> usize {
        self.pages.iter().filter(|p| p.is_some()).count()
    }
}

// ============================================================================
// Lazily built tables
// ============================================================================

/// Every ASCII character, in order, so identity entries can be handed out
/// as `&'static str` slices.
static ASCII_IDENTITY: LazyLock<String> = LazyLock::new(|| (0u8..0x80).map(char::from).collect());

fn ascii_str(byte: u8) -> &'static str {
    let all: &'static str = ASCII_IDENTITY.as_str();
    let i = byte as usize;
    &all[i..i + 1]
}

/// Halfwidth and Fullwidth Forms block: U+FF01..=U+FF5E mirror `!`..=`~`.
const FULLWIDTH_START: u32 = 0xFF01;
const FULLWIDTH_END: u32 = 0xFF5E;
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

static OPTICAL_TABLE: LazyLock<PagedTable> = LazyLock::new(|| {
    let fullwidth = (FULLWIDTH_START..=FULLWIDTH_END)
        .map(|cp| (cp, ascii_str((cp - FULLWIDTH_OFFSET) as u8)));
    let table = PagedTable::from_entries(OPTICAL.iter().copied().chain(fullwidth));
    log::debug!(
        "built optical table: {} entries in {} pages",
        OPTICAL.len() + (FULLWIDTH_END - FULLWIDTH_START + 1) as usize,
        table.page_count()
    );
    table
});

static ENTITY_NAMES: LazyLock<PagedTable> = LazyLock::new(|| {
    let table = PagedTable::from_entries(HTML_ENTITIES.iter().map(|&(name, cp)| (cp, name)));
    log::debug!("built entity name table: {} pages", table.page_count());
    table
});

static ENTITY_CODEPOINTS: LazyLock<HashMap<&'static str, char>> = LazyLock::new(|| {
    let map: HashMap<_, _> = HTML_ENTITIES
        .iter()
        .filter_map(|&(name, cp)| Some((name, char::from_u32(cp)?)))
        .collect();
    log::debug!("built entity codepoint table: {} names", map.len());
    map
});
