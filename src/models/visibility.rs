use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::config::ExchangeId;

/// Exchanges currently drawn and listed in the tooltip. Starts with the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibleSeries {
    visible: BTreeSet<ExchangeId>,
}

impl Default for VisibleSeries {
    fn default() -> Self {
        Self::all()
    }
}

impl VisibleSeries {
    pub fn all() -> Self {
        Self {
            visible: ExchangeId::iter().collect(),
        }
    }

    pub fn none() -> Self {
        Self {
            visible: BTreeSet::new(),
        }
    }

    pub fn only(ids: impl IntoIterator<Item = ExchangeId>) -> Self {
        Self {
            visible: ids.into_iter().collect(),
        }
    }

    pub fn is_visible(&self, id: ExchangeId) -> bool {
        self.visible.contains(&id)
    }

    /// Flips membership. Returns the new visibility.
    pub fn toggle(&mut self, id: ExchangeId) -> bool {
        if self.visible.remove(&id) {
            false
        } else {
            self.visible.insert(id);
            true
        }
    }

    /// Toggle by identifier text. Unknown identifiers are ignored and return `None`.
    pub fn toggle_by_name(&mut self, name: &str) -> Option<bool> {
        match ExchangeId::from_str(name) {
            Ok(id) => Some(self.toggle(id)),
            Err(_) => {
                log::debug!("Ignoring toggle for unknown series '{}'", name);
                None
            }
        }
    }

    /// Visible ids in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = ExchangeId> + '_ {
        self.visible.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn everything_visible_initially() {
        let vis = VisibleSeries::default();
        assert_eq!(vis.len(), ExchangeId::COUNT);
        assert!(ExchangeId::iter().all(|id| vis.is_visible(id)));
    }

    #[test]
    fn toggle_flips_membership() {
        let mut vis = VisibleSeries::default();
        assert!(!vis.toggle(ExchangeId::Binance));
        assert!(!vis.is_visible(ExchangeId::Binance));
        assert!(vis.toggle(ExchangeId::Binance));
        assert!(vis.is_visible(ExchangeId::Binance));
    }

    #[test]
    fn unknown_name_is_a_no_op() {
        let mut vis = VisibleSeries::default();
        assert_eq!(vis.toggle_by_name("ftx"), None);
        assert_eq!(vis, VisibleSeries::default());
        assert_eq!(vis.toggle_by_name("BYBIT"), Some(false));
        assert!(!vis.is_visible(ExchangeId::Bybit));
    }

    #[test]
    fn iteration_follows_catalog_order() {
        let vis = VisibleSeries::only([ExchangeId::Paradex, ExchangeId::Aster, ExchangeId::Mexc]);
        let ids: Vec<ExchangeId> = vis.iter().collect();
        assert_eq!(ids, vec![ExchangeId::Aster, ExchangeId::Mexc, ExchangeId::Paradex]);
    }

    #[test]
    fn serializes_as_plain_list() {
        let vis = VisibleSeries::only([ExchangeId::Okx, ExchangeId::Drift]);
        assert_eq!(serde_json::to_string(&vis).unwrap(), r#"["drift","okx"]"#);
    }
}
