//! Belnap's four-valued logic: scalar type and packed bitvector.

use std::fmt;

use crate::bitplane::{self, Planes, Word};
use crate::error::OutOfBounds;

/// A single Belnap truth value.
///
/// Uses `#[repr(u8)]` with discriminants encoding `(neg_bit << 1) | pos_bit`:
///
/// | pos | neg | bits   | variant   |
/// |-----|-----|--------|-----------|
/// | 0   | 0   | `0b00` | `Unknown` |
/// | 1   | 0   | `0b01` | `True`    |
/// | 0   | 1   | `0b10` | `False`   |
/// | 1   | 1   | `0b11` | `Both`    |
///
/// `pos` and `neg` are independent: `Both` records a position that has been
/// asserted and denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum::VariantArray))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum Belnap {
    Unknown = 0b00,
    True = 0b01,
    False = 0b10,
    Both = 0b11,
}

impl Belnap {
    pub(crate) const fn from_bits(bits: u8) -> Self {
        Self::from_planes(bits & 0b01 != 0, bits & 0b10 != 0)
    }

    const fn from_planes(pos: bool, neg: bool) -> Self {
        match (pos, neg) {
            (false, false) => Belnap::Unknown,
            (true, false) => Belnap::True,
            (false, true) => Belnap::False,
            (true, true) => Belnap::Both,
        }
    }

    #[inline]
    const fn pos(self) -> bool {
        self as u8 & 0b01 != 0
    }

    #[inline]
    const fn neg(self) -> bool {
        self as u8 & 0b10 != 0
    }

    /// Returns `true` if this value carries any information (not `Unknown`).
    #[inline]
    #[must_use]
    pub const fn has_info(self) -> bool {
        self.pos() || self.neg()
    }

    /// Same as [`Belnap::has_info`].
    #[inline]
    #[must_use]
    pub const fn is_known(self) -> bool {
        self.has_info()
    }

    /// Returns `true` if this value is exactly `True` or `False`.
    #[inline]
    #[must_use]
    pub const fn is_determined(self) -> bool {
        self.pos() != self.neg()
    }

    /// Returns `true` if this value is `Both` (contradicted).
    #[inline]
    #[must_use]
    pub const fn is_contradicted(self) -> bool {
        self.pos() && self.neg()
    }

    /// Converts to `bool` if the value is exactly `True` or `False`.
    #[must_use]
    pub const fn to_bool(self) -> Option<bool> {
        if self.is_determined() {
            Some(self.pos())
        } else {
            None
        }
    }

    /// Knowledge-ordering join: combine observations from independent sources.
    #[inline]
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self::from_planes(self.pos() || other.pos(), self.neg() || other.neg())
    }

    #[must_use]
    pub fn implies(self, rhs: Self) -> Self {
        !self | rhs
    }
}

impl From<bool> for Belnap {
    fn from(b: bool) -> Self {
        if b { Belnap::True } else { Belnap::False }
    }
}

impl fmt::Display for Belnap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Belnap::Unknown => "Unknown",
            Belnap::True => "True",
            Belnap::False => "False",
            Belnap::Both => "Both",
        })
    }
}

impl std::ops::Not for Belnap {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_planes(self.neg(), self.pos())
    }
}

impl std::ops::BitAnd for Belnap {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::from_planes(self.pos() && rhs.pos(), self.neg() || rhs.neg())
    }
}

impl std::ops::BitOr for Belnap {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::from_planes(self.pos() || rhs.pos(), self.neg() && rhs.neg())
    }
}

/// Packed Belnap bitvector.
///
/// Two parallel bit-planes, `pos` and `neg`, with no constraint between them.
/// Bits past `width` are always zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BelnapVec {
    planes: Planes,
}

impl BelnapVec {
    /// Create a vector of `width` elements, all Unknown.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self::filled(width, Belnap::Unknown)
    }

    #[must_use]
    pub fn all_true(width: usize) -> Self {
        Self::filled(width, Belnap::True)
    }

    #[must_use]
    pub fn all_false(width: usize) -> Self {
        Self::filled(width, Belnap::False)
    }

    #[must_use]
    pub fn filled(width: usize, fill: Belnap) -> Self {
        Self {
            planes: Planes::filled(width, Word::splat(fill as u8)),
        }
    }

    pub(crate) fn from_planes(planes: Planes) -> Self {
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

    // Bulk resize

    pub fn truncate(&mut self, new_width: usize) {
        self.planes.truncate(new_width);
    }

    pub fn resize(&mut self, new_width: usize, fill: Belnap) {
        self.planes.resize(new_width, Word::splat(fill as u8));
    }

    // Scalar access

    /// # Errors
    ///
    /// Returns `OutOfBounds` if `i >= self.width()`.
    pub fn get(&self, i: usize) -> Result<Belnap, OutOfBounds> {
        if i >= self.width() {
            return Err(OutOfBounds {
                index: i,
                width: self.width(),
            });
        }
        Ok(Belnap::from_bits(self.planes.bits(i)))
    }

    pub fn set(&mut self, i: usize, v: Belnap) {
        self.planes.set_bits(i, v as u8);
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Belnap> + '_ {
        (0..self.width()).map(|i| Belnap::from_bits(self.planes.bits(i)))
    }

    // Bulk operations

    #[must_use]
    pub fn not(&self) -> Self {
        Self::from_planes(self.planes.map(bitplane::belnap_not))
    }

    #[must_use]
    pub fn and(&self, other: &Self) -> Self {
        Self::from_planes(self.planes.zip_with(&other.planes, bitplane::belnap_and))
    }

    #[must_use]
    pub fn or(&self, other: &Self) -> Self {
        Self::from_planes(self.planes.zip_with(&other.planes, bitplane::belnap_or))
    }

    #[must_use]
    pub fn implies(&self, other: &Self) -> Self {
        self.not().or(other)
    }

    /// Knowledge-ordering join: combine observations from independent sources.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self::from_planes(self.planes.zip_with(&other.planes, bitplane::belnap_merge))
    }

    // Queries

    /// Returns `true` if no position is `Both` (valid as Kleene).
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.planes.all(|w, _| w.lo & w.hi == 0)
    }

    /// Index of the first `Both` position, if any.
    #[must_use]
    pub fn first_contradiction(&self) -> Option<usize> {
        self.planes.position(|w| w.lo & w.hi)
    }

    /// Returns `true` if every position is `True` or `False`.
    #[must_use]
    pub fn is_all_determined(&self) -> bool {
        self.planes.all(|w, m| w.lo ^ w.hi == m)
    }

    #[must_use]
    pub fn is_all_true(&self) -> bool {
        self.planes.all(|w, m| w.lo == m && w.hi == 0)
    }

    #[must_use]
    pub fn is_all_false(&self) -> bool {
        self.planes.all(|w, m| w.lo == 0 && w.hi == m)
    }

    #[must_use]
    pub fn count_true(&self) -> usize {
        self.planes.count(|w| w.lo & !w.hi)
    }

    #[must_use]
    pub fn count_false(&self) -> usize {
        self.planes.count(|w| !w.lo & w.hi)
    }

    #[must_use]
    pub fn count_both(&self) -> usize {
        self.planes.count(|w| w.lo & w.hi)
    }

    #[must_use]
    pub fn count_unknown(&self) -> usize {
        self.width() - self.count_true() - self.count_false() - self.count_both()
    }
}

impl FromIterator<Belnap> for BelnapVec {
    fn from_iter<I: IntoIterator<Item = Belnap>>(iter: I) -> Self {
        let mut v = Self::new(0);
        for (i, b) in iter.into_iter().enumerate() {
            v.set(i, b);
        }
        v
    }
}

impl_vec_ops!(BelnapVec);
