//! Kleene's three-valued logic: scalar type and packed bitvector.

use std::fmt;

use crate::bitplane::{self, Planes, Word};
use crate::error::OutOfBounds;

/// A single Kleene truth value.
///
/// Uses `#[repr(u8)]` with discriminants encoding `(known_bit << 1) | value_bit`:
///
/// | known | value | bits   | variant   |
/// |-------|-------|--------|-----------|
/// | 0     | 0     | `0b00` | `Unknown` |
/// | 1     | 0     | `0b10` | `False`   |
/// | 1     | 1     | `0b11` | `True`    |
///
/// `0b01` (a value without knowledge) never occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum::VariantArray))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum Kleene {
    Unknown = 0b00,
    False = 0b10,
    True = 0b11,
}

impl Kleene {
    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits {
            0b11 => Kleene::True,
            0b10 => Kleene::False,
            _ => Kleene::Unknown,
        }
    }

    /// Position in the truth order `False < Unknown < True`.
    const fn rank(self) -> u8 {
        match self {
            Kleene::False => 0,
            Kleene::Unknown => 1,
            Kleene::True => 2,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_known(self) -> bool {
        self as u8 & 0b10 != 0
    }

    /// Returns the boolean if the value is known.
    #[must_use]
    pub const fn to_bool(self) -> Option<bool> {
        match self {
            Kleene::True => Some(true),
            Kleene::False => Some(false),
            Kleene::Unknown => None,
        }
    }

    /// Material implication, `!self | rhs`.
    #[must_use]
    pub fn implies(self, rhs: Self) -> Self {
        !self | rhs
    }
}

impl From<bool> for Kleene {
    fn from(b: bool) -> Self {
        if b { Kleene::True } else { Kleene::False }
    }
}

impl fmt::Display for Kleene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kleene::Unknown => "Unknown",
            Kleene::True => "True",
            Kleene::False => "False",
        })
    }
}

impl std::ops::Not for Kleene {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Kleene::True => Kleene::False,
            Kleene::False => Kleene::True,
            Kleene::Unknown => Kleene::Unknown,
        }
    }
}

// Strong Kleene conjunction and disjunction are the minimum and maximum of
// the truth order.

impl std::ops::BitAnd for Kleene {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        if self.rank() <= rhs.rank() { self } else { rhs }
    }
}

impl std::ops::BitOr for Kleene {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        if self.rank() >= rhs.rank() { self } else { rhs }
    }
}

/// Packed Kleene bitvector.
///
/// Two parallel bit-planes, `known` and `value`: a position is Unknown when
/// its `known` bit is clear, otherwise its `value` bit gives True or False.
/// `value` bits are always a subset of `known` bits, and bits past `width`
/// are always zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KleeneVec {
    planes: Planes,
}

impl KleeneVec {
    /// Create a vector of `width` elements, all Unknown.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self::filled(width, Kleene::Unknown)
    }

    #[must_use]
    pub fn all_true(width: usize) -> Self {
        Self::filled(width, Kleene::True)
    }

    #[must_use]
    pub fn all_false(width: usize) -> Self {
        Self::filled(width, Kleene::False)
    }

    #[must_use]
    pub fn filled(width: usize, fill: Kleene) -> Self {
        Self {
            planes: Planes::filled(width, Word::splat(fill as u8)),
        }
    }

    pub(crate) fn from_planes(planes: Planes) -> Self {
        debug_assert!(planes.words().all(|w| w.lo & !w.hi == 0));
        Self { planes }
    }

    pub(crate) fn planes(&self) -> &Planes {
        &self.planes
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.planes.width()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width() == 0
    }

    // Resizing

    /// Drops every position at or beyond `new_width`. No-op if the vector is
    /// not wider than that.
    pub fn truncate(&mut self, new_width: usize) {
        self.planes.truncate(new_width);
    }

    /// Grows to `new_width` with every new position set to `fill`, or
    /// truncates if `new_width` is not larger than the current width.
    pub fn resize(&mut self, new_width: usize, fill: Kleene) {
        self.planes.resize(new_width, Word::splat(fill as u8));
    }

    // Scalar access

    /// # Errors
    ///
    /// Returns `OutOfBounds` if `i >= self.width()`.
    pub fn get(&self, i: usize) -> Result<Kleene, OutOfBounds> {
        if i >= self.width() {
            return Err(OutOfBounds {
                index: i,
                width: self.width(),
            });
        }
        Ok(Kleene::from_bits(self.planes.bits(i)))
    }

    /// Stores `v` at `i`. Writing past the end grows the vector to `i + 1`,
    /// with Unknown at every position in between.
    pub fn set(&mut self, i: usize, v: Kleene) {
        self.planes.set_bits(i, v as u8);
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Kleene> + '_ {
        (0..self.width()).map(|i| Kleene::from_bits(self.planes.bits(i)))
    }

    // Bulk operations
    //
    // Binary operations accept operands of different widths. The result is
    // as wide as the wider operand, and the narrower one reads as Unknown
    // past its end.

    #[must_use]
    pub fn not(&self) -> Self {
        Self::from_planes(self.planes.map(bitplane::kleene_not))
    }

    #[must_use]
    pub fn and(&self, other: &Self) -> Self {
        Self::from_planes(self.planes.zip_with(&other.planes, bitplane::kleene_and))
    }

    #[must_use]
    pub fn or(&self, other: &Self) -> Self {
        Self::from_planes(self.planes.zip_with(&other.planes, bitplane::kleene_or))
    }

    #[must_use]
    pub fn implies(&self, other: &Self) -> Self {
        self.not().or(other)
    }

    // Queries

    #[must_use]
    pub fn is_all_known(&self) -> bool {
        self.planes.all(|w, m| w.hi == m)
    }

    #[must_use]
    pub fn is_all_true(&self) -> bool {
        self.planes.all(|w, m| w.hi == m && w.lo == m)
    }

    #[must_use]
    pub fn is_all_false(&self) -> bool {
        self.planes.all(|w, m| w.hi == m && w.lo == 0)
    }

    #[must_use]
    pub fn count_true(&self) -> usize {
        self.planes.count(|w| w.lo)
    }

    #[must_use]
    pub fn count_false(&self) -> usize {
        self.planes.count(|w| w.hi & !w.lo)
    }

    #[must_use]
    pub fn count_unknown(&self) -> usize {
        self.width() - self.count_true() - self.count_false()
    }
}

impl FromIterator<Kleene> for KleeneVec {
    fn from_iter<I: IntoIterator<Item = Kleene>>(iter: I) -> Self {
        let mut v = Self::new(0);
        for (i, k) in iter.into_iter().enumerate() {
            v.set(i, k);
        }
        v
    }
}

impl_vec_ops!(KleeneVec);
