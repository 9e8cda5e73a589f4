//! Fixed catalog of tracked exchanges and selectable assets.

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// One tracked exchange, i.e. one line on the funding chart.
/// Declaration order is the catalog order used everywhere (legend, tooltip, export columns).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExchangeId {
    Aster,
    Binance,
    Bingx,
    Bitget,
    Bluefin,
    Bybit,
    Cryptocom,
    Drift,
    Edgex,
    Ethereal,
    Extended,
    Gateio,
    Hibachi,
    Huobi,
    Hyperliquid,
    Kucoin,
    Kuma,
    Lighter,
    Mexc,
    Okx,
    Pacifica,
    Paradex,
}

impl ExchangeId {
    /// Lowercase identifier. This is also the text hashed into the series seed.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Upper-case label for legend and tooltip rows.
    pub fn display_name(self) -> String {
        self.as_str().to_uppercase()
    }

    pub const fn color(self) -> Color32 {
        match self {
            Self::Aster => Color32::from_rgb(139, 92, 246),
            Self::Binance => Color32::from_rgb(243, 186, 47),
            Self::Bingx => Color32::from_rgb(0, 130, 255),
            Self::Bitget => Color32::from_rgb(0, 130, 255),
            Self::Bluefin => Color32::from_rgb(59, 130, 246),
            Self::Bybit => Color32::from_rgb(247, 166, 0),
            Self::Cryptocom => Color32::from_rgb(16, 63, 104),
            Self::Drift => Color32::from_rgb(0, 212, 255),
            Self::Edgex => Color32::from_rgb(99, 102, 241),
            Self::Ethereal => Color32::from_rgb(16, 185, 129),
            Self::Extended => Color32::from_rgb(245, 158, 11),
            Self::Gateio => Color32::from_rgb(201, 148, 0),
            Self::Hibachi => Color32::from_rgb(239, 68, 68),
            Self::Huobi => Color32::from_rgb(0, 212, 255),
            Self::Hyperliquid => Color32::from_rgb(0, 212, 255),
            Self::Kucoin => Color32::from_rgb(38, 161, 123),
            Self::Kuma => Color32::from_rgb(255, 107, 107),
            Self::Lighter => Color32::from_rgb(139, 92, 246),
            Self::Mexc => Color32::from_rgb(0, 212, 255),
            Self::Okx => Color32::from_rgb(0, 0, 0),
            Self::Pacifica => Color32::from_rgb(6, 182, 212),
            Self::Paradex => Color32::from_rgb(99, 102, 241),
        }
    }

    /// `#RRGGBB`, used by the JSON export.
    pub fn color_hex(self) -> String {
        let c = self.color();
        format!("#{:02X}{:02X}{:02X}", c.r(), c.g(), c.b())
    }
}

pub struct AssetCatalog {
    pub symbols: &'static [&'static str],
    pub default_symbol: &'static str,
}

pub const ASSETS: AssetCatalog = AssetCatalog {
    symbols: &[
        "BTC", "ETH", "SOL", "BNB", "XRP", "ADA", "DOGE", "DOT", "MATIC", "AVAX",
    ],
    default_symbol: "BTC",
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn catalog_has_all_exchanges_in_order() {
        assert_eq!(ExchangeId::COUNT, 22);
        let ids: Vec<ExchangeId> = ExchangeId::iter().collect();
        assert_eq!(ids.first(), Some(&ExchangeId::Aster));
        assert_eq!(ids.last(), Some(&ExchangeId::Paradex));
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn identifiers_round_trip_through_strings() {
        for id in ExchangeId::iter() {
            assert_eq!(ExchangeId::from_str(id.as_str()), Ok(id));
            assert_eq!(id.to_string(), id.as_str());
        }
        assert_eq!(ExchangeId::from_str("HyperLiquid"), Ok(ExchangeId::Hyperliquid));
        assert!(ExchangeId::from_str("ftx").is_err());
    }

    #[test]
    fn colors_match_catalog_table() {
        assert_eq!(ExchangeId::Binance.color_hex(), "#F3BA2F");
        assert_eq!(ExchangeId::Okx.color_hex(), "#000000");
        assert_eq!(ExchangeId::Cryptocom.color_hex(), "#103F68");
    }

    #[test]
    fn display_name_is_upper_case() {
        assert_eq!(ExchangeId::Gateio.display_name(), "GATEIO");
    }

    #[test]
    fn default_asset_is_listed() {
        assert!(ASSETS.symbols.contains(&ASSETS.default_symbol));
    }
}
