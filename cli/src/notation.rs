//! One-character-per-position text notation for truth vectors.
//!
//! `T`/`1` is True, `F`/`0` is False, `U`/`?`/`-` is Unknown and `B` is Both.
//! Letters are case-insensitive and `_` may be used as a separator.

use hbt_logic::{Belnap, BelnapVec, Kleene, KleeneVec};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid symbol {symbol:?} at offset {offset}")]
    InvalidSymbol { symbol: char, offset: usize },
    #[error("`B` at offset {offset} has no Kleene value, use --logic belnap")]
    NotKleene { offset: usize },
}

const SEPARATOR: char = '_';

fn symbols(input: &str) -> impl Iterator<Item = Result<(usize, Belnap), Error>> + '_ {
    input
        .char_indices()
        .filter(|&(_, c)| c != SEPARATOR)
        .map(|(offset, c)| match c.to_ascii_uppercase() {
            'T' | '1' => Ok((offset, Belnap::True)),
            'F' | '0' => Ok((offset, Belnap::False)),
            'U' | '?' | '-' => Ok((offset, Belnap::Unknown)),
            'B' => Ok((offset, Belnap::Both)),
            _ => Err(Error::InvalidSymbol { symbol: c, offset }),
        })
}

pub fn parse_belnap(input: &str) -> Result<BelnapVec, Error> {
    symbols(input).map(|r| r.map(|(_, b)| b)).collect()
}

pub fn parse_kleene(input: &str) -> Result<KleeneVec, Error> {
    symbols(input)
        .map(|r| {
            let (offset, b) = r?;
            Kleene::try_from(b).map_err(|_| Error::NotKleene { offset })
        })
        .collect()
}

pub fn belnap_symbol(b: Belnap) -> char {
    match b {
        Belnap::Unknown => 'U',
        Belnap::True => 'T',
        Belnap::False => 'F',
        Belnap::Both => 'B',
    }
}

pub fn render_belnap(v: &BelnapVec) -> String {
    v.iter().map(belnap_symbol).collect()
}

pub fn render_kleene(v: &KleeneVec) -> String {
    v.iter().map(|k| belnap_symbol(Belnap::from(k))).collect()
}
