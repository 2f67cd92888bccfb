//! Two-plane word storage shared by the packed vectors, and the word-parallel
//! formulas of both logics.
//!
//! A position's value is the two-bit discriminant `(hi << 1) | lo`, read from
//! the same bit offset of a `lo` word and a `hi` word. Kleene vectors keep
//! `value` in `lo` and `known` in `hi`; Belnap vectors keep `pos` in `lo` and
//! `neg` in `hi`. In both, Unknown is `0b00`.

use tracing::trace;

pub(crate) const BITS_LOG2: u32 = 6;
pub(crate) const BITS: usize = 1 << BITS_LOG2;
pub(crate) const BITS_MASK: usize = BITS - 1;

#[inline]
pub(crate) const fn words_needed(n: usize) -> usize {
    n.div_ceil(BITS)
}

/// Mask of the in-width bits of the last word of an `n`-wide vector.
#[inline]
pub(crate) const fn tail_mask(n: usize) -> u64 {
    let r = n & BITS_MASK;
    if r == 0 { u64::MAX } else { (1u64 << r) - 1 }
}

/// One word of each plane: 64 positions side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Word {
    pub(crate) lo: u64,
    pub(crate) hi: u64,
}

impl Word {
    pub(crate) const UNKNOWN: Word = Word { lo: 0, hi: 0 };

    /// Repeats a discriminant at every position of the word.
    #[inline]
    pub(crate) const fn splat(bits: u8) -> Word {
        Word {
            lo: if bits & 0b01 != 0 { u64::MAX } else { 0 },
            hi: if bits & 0b10 != 0 { u64::MAX } else { 0 },
        }
    }

    #[inline]
    pub(crate) const fn bits_at(self, b: usize) -> u8 {
        let lo = (self.lo >> b) & 1 != 0;
        let hi = (self.hi >> b) & 1 != 0;
        match (hi, lo) {
            (false, false) => 0b00,
            (false, true) => 0b01,
            (true, false) => 0b10,
            (true, true) => 0b11,
        }
    }
}

// Kleene: lo = value, hi = known.

#[inline]
pub(crate) const fn kleene_not(w: Word) -> Word {
    Word {
        lo: w.hi & !w.lo,
        hi: w.hi,
    }
}

#[inline]
pub(crate) const fn kleene_and(a: Word, b: Word) -> Word {
    let t = a.lo & b.lo;
    let f = (a.hi & !a.lo) | (b.hi & !b.lo);
    Word { lo: t, hi: t | f }
}

#[inline]
pub(crate) const fn kleene_or(a: Word, b: Word) -> Word {
    let t = a.lo | b.lo;
    let f = (a.hi & !a.lo) & (b.hi & !b.lo);
    Word { lo: t, hi: t | f }
}

// Belnap: lo = pos, hi = neg.

#[inline]
pub(crate) const fn belnap_not(w: Word) -> Word {
    Word { lo: w.hi, hi: w.lo }
}

#[inline]
pub(crate) const fn belnap_and(a: Word, b: Word) -> Word {
    Word {
        lo: a.lo & b.lo,
        hi: a.hi | b.hi,
    }
}

#[inline]
pub(crate) const fn belnap_or(a: Word, b: Word) -> Word {
    Word {
        lo: a.lo | b.lo,
        hi: a.hi & b.hi,
    }
}

#[inline]
pub(crate) const fn belnap_merge(a: Word, b: Word) -> Word {
    Word {
        lo: a.lo | b.lo,
        hi: a.hi | b.hi,
    }
}

/// Growable pair of parallel bit-planes.
///
/// Both planes always hold exactly `words_needed(width)` words, and every bit
/// at or beyond `width` in the last word is zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub(crate) struct Planes {
    width: usize,
    lo: Vec<u64>,
    hi: Vec<u64>,
}

impl Planes {
    pub(crate) fn filled(width: usize, fill: Word) -> Self {
        let nw = words_needed(width);
        let mut planes = Self {
            width,
            lo: vec![fill.lo; nw],
            hi: vec![fill.hi; nw],
        };
        planes.mask_tail();
        planes
    }

    #[inline]
    pub(crate) fn width(&self) -> usize {
        self.width
    }

    fn word_or_unknown(&self, w: usize) -> Word {
        match (self.lo.get(w), self.hi.get(w)) {
            (Some(&lo), Some(&hi)) => Word { lo, hi },
            _ => Word::UNKNOWN,
        }
    }

    pub(crate) fn words(&self) -> impl ExactSizeIterator<Item = Word> + '_ {
        self.lo
            .iter()
            .zip(&self.hi)
            .map(|(&lo, &hi)| Word { lo, hi })
    }

    fn mask_tail(&mut self) {
        let m = tail_mask(self.width);
        if let (Some(lo), Some(hi)) = (self.lo.last_mut(), self.hi.last_mut()) {
            *lo &= m;
            *hi &= m;
        }
    }

    fn from_words(width: usize, words: impl Iterator<Item = Word>) -> Self {
        let (lo, hi) = words.map(|w| (w.lo, w.hi)).unzip();
        let mut planes = Self { width, lo, hi };
        debug_assert_eq!(planes.lo.len(), words_needed(width));
        planes.mask_tail();
        planes
    }

    // Resizing

    pub(crate) fn truncate(&mut self, new_width: usize) {
        if new_width >= self.width {
            return;
        }
        trace!(from = self.width, to = new_width, "truncating planes");
        let nw = words_needed(new_width);
        self.lo.truncate(nw);
        self.hi.truncate(nw);
        self.lo.shrink_to_fit();
        self.hi.shrink_to_fit();
        self.width = new_width;
        self.mask_tail();
    }

    pub(crate) fn resize(&mut self, new_width: usize, fill: Word) {
        if new_width <= self.width {
            self.truncate(new_width);
            return;
        }
        trace!(from = self.width, to = new_width, "growing planes");
        let old_width = self.width;
        // The unused high bits of the current last word become addressable too.
        if old_width & BITS_MASK != 0 {
            let high = !tail_mask(old_width);
            let last = words_needed(old_width) - 1;
            self.lo[last] |= fill.lo & high;
            self.hi[last] |= fill.hi & high;
        }
        let nw = words_needed(new_width);
        self.lo.resize(nw, fill.lo);
        self.hi.resize(nw, fill.hi);
        self.width = new_width;
        self.mask_tail();
    }

    // Scalar access

    pub(crate) fn bits(&self, i: usize) -> u8 {
        debug_assert!(i < self.width);
        let w = i >> BITS_LOG2;
        Word {
            lo: self.lo[w],
            hi: self.hi[w],
        }
        .bits_at(i & BITS_MASK)
    }

    /// Writes the discriminant at `i`, first growing with Unknown when `i` is
    /// past the end.
    pub(crate) fn set_bits(&mut self, i: usize, bits: u8) {
        if i >= self.width {
            // Tail bits are already zero, which is Unknown.
            let nw = words_needed(i + 1);
            if nw > self.lo.len() {
                trace!(from = self.width, to = i + 1, "auto-growing planes");
                self.lo.resize(nw, 0);
                self.hi.resize(nw, 0);
            }
            self.width = i + 1;
        }
        let w = i >> BITS_LOG2;
        let bit = 1u64 << (i & BITS_MASK);
        if bits & 0b01 != 0 {
            self.lo[w] |= bit;
        } else {
            self.lo[w] &= !bit;
        }
        if bits & 0b10 != 0 {
            self.hi[w] |= bit;
        } else {
            self.hi[w] &= !bit;
        }
    }

    // Bulk

    pub(crate) fn map(&self, f: impl Fn(Word) -> Word) -> Self {
        Self::from_words(self.width, self.words().map(f))
    }

    /// Combines two plane sets word by word. The result spans the wider
    /// operand; words past the end of the narrower one read as Unknown.
    pub(crate) fn zip_with(&self, other: &Self, f: impl Fn(Word, Word) -> Word) -> Self {
        let width = self.width.max(other.width);
        let words = (0..words_needed(width))
            .map(|w| f(self.word_or_unknown(w), other.word_or_unknown(w)));
        Self::from_words(width, words)
    }

    // Queries

    /// Tests `pred(word, mask)` on every word, where `mask` is all ones except
    /// for the last word, which gets the tail mask.
    pub(crate) fn all(&self, pred: impl Fn(Word, u64) -> bool) -> bool {
        let last = self.lo.len().saturating_sub(1);
        let tail = tail_mask(self.width);
        self.words()
            .enumerate()
            .all(|(w, word)| pred(word, if w == last { tail } else { u64::MAX }))
    }

    /// Counts the in-width bits set in `select(word)`.
    pub(crate) fn count(&self, select: impl Fn(Word) -> u64) -> usize {
        let last = self.lo.len().saturating_sub(1);
        let tail = tail_mask(self.width);
        self.words()
            .enumerate()
            .map(|(w, word)| {
                let m = if w == last { tail } else { u64::MAX };
                (select(word) & m).count_ones() as usize
            })
            .sum()
    }

    /// Index of the first in-width position whose bit is set in `select(word)`.
    pub(crate) fn position(&self, select: impl Fn(Word) -> u64) -> Option<usize> {
        let last = self.lo.len().saturating_sub(1);
        let tail = tail_mask(self.width);
        self.words().enumerate().find_map(|(w, word)| {
            let m = if w == last { tail } else { u64::MAX };
            let hits = select(word) & m;
            (hits != 0).then(|| (w << BITS_LOG2) + hits.trailing_zeros() as usize)
        })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn word_arithmetic() {
        assert_eq!(words_needed(0), 0);
        assert_eq!(words_needed(1), 1);
        assert_eq!(words_needed(64), 1);
        assert_eq!(words_needed(65), 2);
        assert_eq!(words_needed(128), 2);

        assert_eq!(tail_mask(0), u64::MAX);
        assert_eq!(tail_mask(1), 1);
        assert_eq!(tail_mask(63), u64::MAX >> 1);
        assert_eq!(tail_mask(64), u64::MAX);
        assert_eq!(tail_mask(65), 1);
    }

    #[test]
    fn splat_and_bits_at() {
        for bits in 0..4u8 {
            let w = Word::splat(bits);
            assert_eq!(w.bits_at(0), bits);
            assert_eq!(w.bits_at(63), bits);
        }
        let w = Word { lo: 0b10, hi: 0b01 };
        assert_eq!(w.bits_at(0), 0b10);
        assert_eq!(w.bits_at(1), 0b01);
        assert_eq!(w.bits_at(2), 0b00);
    }

    #[test]
    fn filled_masks_tail() {
        let p = Planes::filled(70, Word::splat(0b11));
        assert_eq!(p.words().len(), 2);
        let last = p.words().last().unwrap();
        assert_eq!(last, Word { lo: 0b11_1111, hi: 0b11_1111 });

        let empty = Planes::filled(0, Word::splat(0b11));
        assert_eq!(empty.words().len(), 0);
        assert!(empty.all(|_, _| false));
        assert_eq!(empty.count(|w| w.lo), 0);
    }

    #[test]
    fn set_bits_grows_with_unknown() {
        let mut p = Planes::filled(3, Word::splat(0b01));
        p.set_bits(130, 0b10);
        assert_eq!(p.width(), 131);
        assert_eq!(p.words().len(), 3);
        assert_eq!(p.bits(0), 0b01);
        assert_eq!(p.bits(2), 0b01);
        assert_eq!(p.bits(3), 0b00);
        assert_eq!(p.bits(129), 0b00);
        assert_eq!(p.bits(130), 0b10);
    }

    #[test]
    fn resize_fills_old_tail_and_new_words() {
        let mut p = Planes::filled(60, Word::UNKNOWN);
        p.resize(130, Word::splat(0b11));
        assert_eq!(p.count(|w| w.lo & w.hi), 70);
        assert_eq!(p.bits(59), 0b00);
        assert_eq!(p.bits(60), 0b11);
        assert_eq!(p.bits(129), 0b11);

        p.resize(61, Word::UNKNOWN);
        assert_eq!(p.width(), 61);
        assert_eq!(p.words().len(), 1);
        assert_eq!(p.count(|w| w.lo), 1);
    }

    #[test]
    fn zip_with_pads_with_unknown() {
        let short = Planes::filled(10, Word::splat(0b11));
        let long = Planes::filled(100, Word::UNKNOWN);
        let z = short.zip_with(&long, belnap_merge);
        assert_eq!(z.width(), 100);
        assert_eq!(z.count(|w| w.lo & w.hi), 10);
    }

    #[test]
    fn position_respects_tail() {
        let mut p = Planes::filled(70, Word::UNKNOWN);
        assert_eq!(p.position(|w| w.lo), None);
        assert_eq!(p.position(|w| !w.lo), Some(0));
        p.set_bits(66, 0b01);
        assert_eq!(p.position(|w| w.lo), Some(66));
        p.truncate(66);
        assert_eq!(p.position(|w| w.lo), None);
    }

    // A position's scalar result must not depend on its neighbours, so a
    // formula applied to random words is checked bit by bit against the same
    // formula applied to a splatted single position.
    fn check_unary(f: fn(Word) -> Word, a: Word) {
        let out = f(a);
        for b in 0..BITS {
            let expected = f(Word::splat(a.bits_at(b))).bits_at(0);
            assert_eq!(out.bits_at(b), expected, "bit {b}");
        }
    }

    fn check_binary(f: fn(Word, Word) -> Word, a: Word, c: Word) {
        let out = f(a, c);
        for b in 0..BITS {
            let expected = f(Word::splat(a.bits_at(b)), Word::splat(c.bits_at(b))).bits_at(0);
            assert_eq!(out.bits_at(b), expected, "bit {b}");
        }
    }

    fn kleene_word(value: u64, known: u64) -> Word {
        Word {
            lo: value & known,
            hi: known,
        }
    }

    proptest! {
        #[test]
        fn kleene_formulas_are_positionwise(av: u64, ak: u64, bv: u64, bk: u64) {
            let (a, b) = (kleene_word(av, ak), kleene_word(bv, bk));
            check_unary(kleene_not, a);
            check_binary(kleene_and, a, b);
            check_binary(kleene_or, a, b);
            // value => known survives every formula
            for w in [kleene_not(a), kleene_and(a, b), kleene_or(a, b)] {
                prop_assert_eq!(w.lo & !w.hi, 0);
            }
        }

        #[test]
        fn belnap_formulas_are_positionwise(ap: u64, an: u64, bp: u64, bn: u64) {
            let (a, b) = (Word { lo: ap, hi: an }, Word { lo: bp, hi: bn });
            check_unary(belnap_not, a);
            check_binary(belnap_and, a, b);
            check_binary(belnap_or, a, b);
            check_binary(belnap_merge, a, b);
        }
    }
}
