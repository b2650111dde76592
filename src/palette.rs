//! Palette data model
//!
//! Slot keys (`base00`..`base0F`), canonical colors, and the dark/light
//! [`ThemePair`] produced by extraction.

use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Number of slots in a vogix16 palette
pub const SLOT_COUNT: u8 = 16;

/// Slots every extracted variant must carry (`base00`..`base07`)
pub const REQUIRED_SLOTS: u8 = 8;

// ==================== Slot ====================

/// A palette slot index in `0..16`, rendered as `baseXX`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(u8);

impl Slot {
    /// The accent slot (`base0F`), which SVG previews sometimes omit
    pub const ACCENT: Slot = Slot(0x0F);

    /// Create a slot from its index, `None` when out of range
    pub fn new(index: u8) -> Option<Self> {
        (index < SLOT_COUNT).then_some(Self(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Every slot in ascending order
    pub fn all() -> impl Iterator<Item = Slot> {
        (0..SLOT_COUNT).map(Slot)
    }

    /// Slots that must be present after extraction
    pub fn required() -> impl Iterator<Item = Slot> {
        (0..REQUIRED_SLOTS).map(Slot)
    }
}

impl FromStr for Slot {
    type Err = ();

    /// Parse `baseXX` where `XX` is two uppercase hex digits
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("base").ok_or(())?;
        if digits.len() != 2
            || !digits
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
        {
            return Err(());
        }
        let index = u8::from_str_radix(digits, 16).map_err(|_| ())?;
        Slot::new(index).ok_or(())
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "base{:02X}", self.0)
    }
}

// ==================== Color ====================

/// A `#rrggbb` color, stored lowercase
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    /// The canonical `#rrggbb` form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Color {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or(())?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(());
        }
        Ok(Self(format!("#{}", hex.to_ascii_lowercase())))
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ==================== Variant ====================

/// Which half of a theme pair a table belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Dark,
    Light,
}

impl Variant {
    /// Block name in the persisted file
    pub fn id(&self) -> &'static str {
        match self {
            Variant::Dark => "dark",
            Variant::Light => "light",
        }
    }

    /// Capitalized name for diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            Variant::Dark => "Dark",
            Variant::Light => "Light",
        }
    }

    pub fn all() -> &'static [Variant] {
        &[Variant::Dark, Variant::Light]
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

// ==================== ColorTable ====================

/// Slot-to-color mapping for one variant, iterated in slot order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorTable {
    colors: BTreeMap<Slot, Color>,
}

impl ColorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: Slot) -> Option<&Color> {
        self.colors.get(&slot)
    }

    pub fn contains(&self, slot: Slot) -> bool {
        self.colors.contains_key(&slot)
    }

    /// Set a slot, replacing any previous value
    pub fn insert(&mut self, slot: Slot, color: Color) {
        self.colors.insert(slot, color);
    }

    /// Set a slot only if it is still empty. Returns true when stored.
    pub fn insert_if_absent(&mut self, slot: Slot, color: Color) -> bool {
        if self.colors.contains_key(&slot) {
            return false;
        }
        self.colors.insert(slot, color);
        true
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Entries in ascending slot order
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &Color)> {
        self.colors.iter().map(|(slot, color)| (*slot, color))
    }

    /// Slots from `expected` that this table lacks, in the given order
    pub fn missing(&self, expected: impl Iterator<Item = Slot>) -> Vec<Slot> {
        expected.filter(|slot| !self.contains(*slot)).collect()
    }
}

impl FromIterator<(Slot, Color)> for ColorTable {
    /// Later entries for the same slot replace earlier ones
    fn from_iter<I: IntoIterator<Item = (Slot, Color)>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

// ==================== ThemePair ====================

/// A named dark/light palette pair
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemePair {
    pub name: String,
    pub dark: ColorTable,
    pub light: ColorTable,
}

impl ThemePair {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn table(&self, variant: Variant) -> &ColorTable {
        match variant {
            Variant::Dark => &self.dark,
            Variant::Light => &self.light,
        }
    }

    pub fn table_mut(&mut self, variant: Variant) -> &mut ColorTable {
        match variant {
            Variant::Dark => &mut self.dark,
            Variant::Light => &mut self.light,
        }
    }

    /// Both variants carry every slot `base00`..`base0F`
    pub fn is_fully_specified(&self) -> bool {
        Variant::all()
            .iter()
            .all(|v| self.table(*v).missing(Slot::all()).is_empty())
    }
}

/// Join slot keys as `base08, base09`
pub fn join_slots(slots: &[Slot]) -> String {
    slots
        .iter()
        .map(|slot| slot.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
