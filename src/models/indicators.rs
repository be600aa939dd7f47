use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A numeric series aligned 1:1 with a price series. `None` = not available.
pub type Series = Vec<Option<f64>>;

/// Named indicator series computed from one [`PriceSeries`](super::PriceSeries).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    len: usize,
    series: BTreeMap<String, Series>,
}

impl IndicatorSet {
    /// An empty set for a price series of `len` bars.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            series: BTreeMap::new(),
        }
    }

    /// Insert a series, replacing any previous one with the same name.
    ///
    /// Series of the wrong length are padded with `None` at the front (or
    /// truncated from the front) so that the last element stays aligned with
    /// the latest bar.
    pub fn insert(&mut self, name: impl Into<String>, mut values: Series) {
        if values.len() > self.len {
            values.drain(..values.len() - self.len);
        } else if values.len() < self.len {
            let mut padded = vec![None; self.len - values.len()];
            padded.append(&mut values);
            values = padded;
        }
        self.series.insert(name.into(), values);
    }

    pub fn get(&self, name: &str) -> Option<&Series> {
        self.series.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.series.contains_key(name)
    }

    /// Value on the most recent bar.
    pub fn latest(&self, name: &str) -> Option<f64> {
        self.value_at(name, 0)
    }

    /// Value `back` bars before the most recent one.
    pub fn value_at(&self, name: &str, back: usize) -> Option<f64> {
        let series = self.series.get(name)?;
        let index = series.len().checked_sub(back + 1)?;
        series[index]
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Number of bars every series is aligned to.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of named series.
    pub fn series_count(&self) -> usize {
        self.series.len()
    }
}
