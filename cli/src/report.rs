use std::fmt;

use hbt_logic::{BelnapVec, KleeneVec};
use serde::Serialize;

use crate::notation::{render_belnap, render_kleene};

#[derive(Debug, Serialize)]
pub struct Vector {
    pub width: usize,
    pub values: String,
}

impl Vector {
    pub fn kleene(v: &KleeneVec) -> Self {
        Self {
            width: v.width(),
            values: render_kleene(v),
        }
    }

    pub fn belnap(v: &BelnapVec) -> Self {
        Self {
            width: v.width(),
            values: render_belnap(v),
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.values)
    }
}

#[derive(Debug, Serialize)]
pub struct Counts {
    #[serde(rename = "true")]
    pub true_: usize,
    #[serde(rename = "false")]
    pub false_: usize,
    pub unknown: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub both: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct Stats {
    #[serde(flatten)]
    pub vector: Vector,
    pub counts: Counts,
    pub all_true: bool,
    pub all_false: bool,
    /// Every position is True or False.
    pub all_determined: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistent: Option<bool>,
}

impl Stats {
    pub fn kleene(v: &KleeneVec) -> Self {
        Self {
            vector: Vector::kleene(v),
            counts: Counts {
                true_: v.count_true(),
                false_: v.count_false(),
                unknown: v.count_unknown(),
                both: None,
            },
            all_true: v.is_all_true(),
            all_false: v.is_all_false(),
            all_determined: v.is_all_known(),
            consistent: None,
        }
    }

    pub fn belnap(v: &BelnapVec) -> Self {
        Self {
            vector: Vector::belnap(v),
            counts: Counts {
                true_: v.count_true(),
                false_: v.count_false(),
                unknown: v.count_unknown(),
                both: Some(v.count_both()),
            },
            all_true: v.is_all_true(),
            all_false: v.is_all_false(),
            all_determined: v.is_all_determined(),
            consistent: Some(v.is_consistent()),
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "values: {}", self.vector)?;
        writeln!(f, "width: {}", self.vector.width)?;
        write!(
            f,
            "true: {}, false: {}, unknown: {}",
            self.counts.true_, self.counts.false_, self.counts.unknown
        )?;
        if let Some(both) = self.counts.both {
            write!(f, ", both: {both}")?;
        }
        writeln!(f)?;
        writeln!(f, "all true: {}", self.all_true)?;
        writeln!(f, "all false: {}", self.all_false)?;
        write!(f, "all determined: {}", self.all_determined)?;
        if let Some(consistent) = self.consistent {
            write!(f, "\nconsistent: {consistent}")?;
        }
        Ok(())
    }
}

/// Outcome of merging independent assertions about the same positions.
#[derive(Debug, Serialize)]
pub struct Check {
    pub merged: Vector,
    pub consistent: bool,
    pub contradictions: Vec<usize>,
    /// The merged assertions as a Kleene vector, when they are consistent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kleene: Option<Vector>,
}

impl Check {
    pub fn new(merged: &BelnapVec) -> Self {
        let contradictions = merged
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_contradicted())
            .map(|(i, _)| i)
            .collect();
        Self {
            merged: Vector::belnap(merged),
            consistent: merged.is_consistent(),
            contradictions,
            kleene: merged.to_kleene().ok().as_ref().map(Vector::kleene),
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "merged: {}", self.merged)?;
        write!(f, "consistent: {}", self.consistent)?;
        if !self.contradictions.is_empty() {
            let positions: Vec<String> = self.contradictions.iter().map(ToString::to_string).collect();
            write!(f, "\ncontradictions: {}", positions.join(", "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Report {
    Vector(Vector),
    Stats(Stats),
    Check(Check),
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Vector(v) => fmt::Display::fmt(v, f),
            Report::Stats(s) => fmt::Display::fmt(s, f),
            Report::Check(c) => fmt::Display::fmt(c, f),
        }
    }
}
