use serde::{Deserialize, Serialize};

use crate::domain::a008_amc_price::aggregate::AmcPrice;

/// Counters returned by `/sales-settings/dashboard-stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_installers: u32,
    pub active_installers: u32,
    pub total_agencies: u32,
    pub active_offers: u32,
    pub total_bundles: u32,
    pub total_amc_prices: u32,
    pub journey_stages: u32,
}

impl DashboardStats {
    /// (label, value) pairs in display order
    pub fn cards(&self) -> Vec<(&'static str, u32)> {
        vec![
            ("Installers", self.total_installers),
            ("Active Installers", self.active_installers),
            ("Agencies", self.total_agencies),
            ("Active Offers", self.active_offers),
            ("Bundle Plans", self.total_bundles),
            ("AMC Prices", self.total_amc_prices),
            ("Journey Stages", self.journey_stages),
        ]
    }
}

/// Pricing health computed on the client from the AMC price list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSummary {
    pub total: usize,
    pub active: usize,
    /// Margin at or above zero but below the threshold
    pub low_margin: usize,
    /// Selling below cost
    pub negative_margin: usize,
    /// Mean margin percent over prices with a selling price
    pub average_margin_percent: Option<f64>,
}

impl PriceSummary {
    pub fn from_prices(prices: &[AmcPrice], low_margin_percent: f64) -> Self {
        let margins: Vec<f64> = prices.iter().filter_map(|p| p.margin_percent()).collect();
        let average_margin_percent = if margins.is_empty() {
            None
        } else {
            Some(margins.iter().sum::<f64>() / margins.len() as f64)
        };
        Self {
            total: prices.len(),
            active: prices.iter().filter(|p| p.status.is_active()).count(),
            low_margin: margins
                .iter()
                .filter(|m| **m >= 0.0 && **m < low_margin_percent)
                .count(),
            negative_margin: margins.iter().filter(|m| **m < 0.0).count(),
            average_margin_percent,
        }
    }

    /// "18.5%" or "-"
    pub fn average_label(&self) -> String {
        match self.average_margin_percent {
            Some(avg) => format!("{:.1}%", avg),
            None => "-".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(id: &str, cost: f64, selling: f64, status: &str) -> AmcPrice {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "category": "residential",
            "costPrice": cost,
            "sellingPrice": selling,
            "status": status,
        }))
        .unwrap()
    }

    #[test]
    fn test_price_summary() {
        let prices = vec![
            price("1", 800.0, 1000.0, "active"), // 20%
            price("2", 950.0, 1000.0, "active"), // 5%
            price("3", 1100.0, 1000.0, "inactive"), // -10%
            price("4", 500.0, 0.0, "active"), // no margin
        ];
        let summary = PriceSummary::from_prices(&prices, 10.0);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.active, 3);
        assert_eq!(summary.low_margin, 1);
        assert_eq!(summary.negative_margin, 1);
        assert_eq!(summary.average_label(), "5.0%");
    }

    #[test]
    fn test_empty() {
        let summary = PriceSummary::from_prices(&[], 10.0);
        assert_eq!(summary, PriceSummary::default());
        assert_eq!(summary.average_label(), "-");
    }

    #[test]
    fn test_stats_defaults_missing_counters() {
        let stats: DashboardStats = serde_json::from_str(r#"{"totalInstallers":12}"#).unwrap();
        assert_eq!(stats.total_installers, 12);
        assert_eq!(stats.cards()[2], ("Agencies", 0));
    }
}
