//! Embedding of Kleene logic into Belnap logic and the partial projection back.

use tracing::debug;

use crate::belnap::{Belnap, BelnapVec};
use crate::bitplane::Word;
use crate::error::Contradiction;
use crate::kleene::{Kleene, KleeneVec};

/// `(known, value)` to `(pos, neg)`.
const fn kleene_to_belnap_word(w: Word) -> Word {
    Word {
        lo: w.lo,
        hi: w.hi & !w.lo,
    }
}

/// `(pos, neg)` to `(known, value)`. Only meaningful when no position is Both.
const fn belnap_to_kleene_word(w: Word) -> Word {
    Word {
        lo: w.lo,
        hi: w.lo | w.hi,
    }
}

impl From<Kleene> for Belnap {
    fn from(k: Kleene) -> Self {
        match k {
            Kleene::Unknown => Belnap::Unknown,
            Kleene::True => Belnap::True,
            Kleene::False => Belnap::False,
        }
    }
}

impl TryFrom<Belnap> for Kleene {
    type Error = Contradiction;

    fn try_from(b: Belnap) -> Result<Self, Contradiction> {
        match b {
            Belnap::Unknown => Ok(Kleene::Unknown),
            Belnap::True => Ok(Kleene::True),
            Belnap::False => Ok(Kleene::False),
            Belnap::Both => Err(Contradiction { index: 0 }),
        }
    }
}

impl From<&KleeneVec> for BelnapVec {
    fn from(kv: &KleeneVec) -> Self {
        BelnapVec::from_planes(kv.planes().map(kleene_to_belnap_word))
    }
}

impl From<KleeneVec> for BelnapVec {
    fn from(kv: KleeneVec) -> Self {
        BelnapVec::from(&kv)
    }
}

impl TryFrom<&BelnapVec> for KleeneVec {
    type Error = Contradiction;

    fn try_from(bv: &BelnapVec) -> Result<Self, Contradiction> {
        if let Some(index) = bv.first_contradiction() {
            debug!(index, width = bv.width(), "refusing Kleene projection");
            return Err(Contradiction { index });
        }
        Ok(KleeneVec::from_planes(
            bv.planes().map(belnap_to_kleene_word),
        ))
    }
}

impl BelnapVec {
    /// Embeds a Kleene vector. Never produces `Both`.
    #[must_use]
    pub fn from_kleene(kv: &KleeneVec) -> Self {
        Self::from(kv)
    }

    /// Convert to `KleeneVec` if no position is `Both`.
    ///
    /// # Errors
    ///
    /// Returns `Contradiction` naming the first `Both` position.
    pub fn to_kleene(&self) -> Result<KleeneVec, Contradiction> {
        KleeneVec::try_from(self)
    }
}
