//! Budget results model
//!
//! The derived snapshot produced by the budget aggregator. It is recomputed
//! wholesale on every calculation and never patched in place.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

use super::palette::palette_color;

/// Fixed/variable split of one category or account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketTotals {
    pub total: f64,
    #[serde(alias = "fixe")]
    pub fixed: f64,
    pub variable: f64,
    /// Only set on category buckets: colour of the first contributing expense
    #[serde(default, alias = "couleur", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl BucketTotals {
    /// Add an amount to the total and to the fixed or variable side
    pub fn add(&mut self, amount: f64, is_recurring: bool) {
        self.total += amount;
        if is_recurring {
            self.fixed += amount;
        } else {
            self.variable += amount;
        }
    }
}

/// Named buckets kept in first-seen order
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Breakdown {
    buckets: Vec<(String, BucketTotals)>,
    index: HashMap<String, usize>,
}

impl Breakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bucket for `name`, created empty on first use
    pub fn bucket_mut(&mut self, name: &str) -> &mut BucketTotals {
        let index = match self.index.get(name) {
            Some(&index) => index,
            None => {
                let index = self.buckets.len();
                self.buckets.push((name.to_string(), BucketTotals::default()));
                self.index.insert(name.to_string(), index);
                index
            }
        };
        &mut self.buckets[index].1
    }

    pub fn get(&self, name: &str) -> Option<&BucketTotals> {
        self.index.get(name).map(|&index| &self.buckets[index].1)
    }

    /// Buckets in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BucketTotals)> {
        self.buckets.iter().map(|(n, b)| (n.as_str(), b))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Sum of all bucket totals
    pub fn grand_total(&self) -> f64 {
        self.buckets.iter().map(|(_, b)| b.total).sum()
    }
}

impl Serialize for Breakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for (name, bucket) in &self.buckets {
            map.serialize_entry(name, bucket)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Breakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BreakdownVisitor;

        impl<'de> Visitor<'de> for BreakdownVisitor {
            type Value = Breakdown;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of bucket name to totals")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut breakdown = Breakdown::new();
                while let Some((name, bucket)) = access.next_entry::<String, BucketTotals>()? {
                    *breakdown.bucket_mut(&name) = bucket;
                }
                Ok(breakdown)
            }
        }

        deserializer.deserialize_map(BreakdownVisitor)
    }
}

/// One slice of the category chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    #[serde(alias = "couleur")]
    pub color: String,
}

/// Full output of a budget calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetResults {
    #[serde(alias = "revenusTotal")]
    pub total_income: f64,
    #[serde(alias = "depensesFixesTotal")]
    pub total_fixed_expenses: f64,
    #[serde(alias = "depensesVariablesTotal")]
    pub total_variable_expenses: f64,
    #[serde(alias = "depensesTotal")]
    pub total_expenses: f64,
    #[serde(alias = "epargneRecommandee")]
    pub recommended_savings: f64,
    #[serde(alias = "soldeRestant")]
    pub remaining_balance: f64,
    #[serde(alias = "estNegatif")]
    pub is_deficit: bool,
    #[serde(alias = "donneesPie")]
    pub pie_data: Vec<PieSlice>,
    #[serde(alias = "depensesParCategorie")]
    pub by_category: Breakdown,
    #[serde(alias = "depensesParCompte")]
    pub by_account: Breakdown,
    /// `total_expenses / total_income * 100`.
    ///
    /// With zero income: `0.0` when there are no expenses either, otherwise
    /// an infinity carrying the sign of the expenses. Infinities are written
    /// as the strings `"Infinity"` / `"-Infinity"`; a legacy `null` reads
    /// back as `+inf`.
    #[serde(alias = "pourcentageUtilise", with = "non_finite")]
    pub utilization_percent: f64,
}

impl BudgetResults {
    /// Account chart slices, coloured by first-seen account order
    pub fn account_slices(&self) -> Vec<PieSlice> {
        self.by_account
            .iter()
            .enumerate()
            .map(|(index, (name, bucket))| PieSlice {
                name: name.to_string(),
                value: bucket.total,
                color: palette_color(index).to_string(),
            })
            .collect()
    }

    /// Utilization clamped to `0..=100` for progress bars
    pub fn utilization_capped(&self) -> f64 {
        if self.utilization_percent.is_nan() {
            return 0.0;
        }
        self.utilization_percent.clamp(0.0, 100.0)
    }

    /// Whether expenses exceed income
    pub fn is_over_budget(&self) -> bool {
        self.utilization_percent > 100.0
    }
}

/// Serde adapter keeping the sign of infinite floats
mod non_finite {
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    const POSITIVE: &str = "Infinity";
    const NEGATIVE: &str = "-Infinity";

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if *value == f64::NEG_INFINITY {
            serializer.serialize_str(NEGATIVE)
        } else if *value == f64::INFINITY {
            serializer.serialize_str(POSITIVE)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(PercentVisitor)
    }

    struct PercentVisitor;

    impl<'de> Visitor<'de> for PercentVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number, \"Infinity\", \"-Infinity\" or null")
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
            match value {
                POSITIVE | "inf" | "+inf" => Ok(f64::INFINITY),
                NEGATIVE | "-inf" => Ok(f64::NEG_INFINITY),
                other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
            }
        }

        fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
            Ok(f64::INFINITY)
        }

        fn visit_none<E: de::Error>(self) -> Result<f64, E> {
            Ok(f64::INFINITY)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<f64, D::Error> {
            deserializer.deserialize_any(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_results(utilization_percent: f64) -> BudgetResults {
        let mut by_category = Breakdown::new();
        by_category.bucket_mut("Rent").add(1000.0, true);
        by_category.bucket_mut("Food").add(200.0, false);
        by_category.bucket_mut("Rent").color = Some("#8884d8".into());

        let mut by_account = Breakdown::new();
        by_account.bucket_mut("Main account").add(1200.0, false);

        BudgetResults {
            total_income: 0.0,
            total_fixed_expenses: 1000.0,
            total_variable_expenses: 200.0,
            total_expenses: 1200.0,
            recommended_savings: 0.0,
            remaining_balance: -1200.0,
            is_deficit: true,
            pie_data: Vec::new(),
            by_category,
            by_account,
            utilization_percent,
        }
    }

    #[test]
    fn test_bucket_split() {
        let mut bucket = BucketTotals::default();
        bucket.add(10.0, true);
        bucket.add(5.0, false);
        assert_eq!(bucket.total, 15.0);
        assert_eq!(bucket.fixed, 10.0);
        assert_eq!(bucket.variable, 5.0);
    }

    #[test]
    fn test_breakdown_keeps_first_seen_order() {
        let results = sample_results(50.0);
        let names: Vec<_> = results.by_category.names().collect();
        assert_eq!(names, vec!["Rent", "Food"]);
        assert_eq!(results.by_category.grand_total(), 1200.0);
    }

    #[test]
    fn test_breakdown_serializes_as_ordered_object() {
        let results = sample_results(50.0);
        let json = serde_json::to_string(&results.by_category).unwrap();
        assert!(json.starts_with(r#"{"Rent":"#));
        assert!(json.find("Rent").unwrap() < json.find("Food").unwrap());
        // accounts carry no colour
        let json = serde_json::to_string(&results.by_account).unwrap();
        assert!(!json.contains("color"));

        let back: Breakdown = serde_json::from_str(
            &serde_json::to_string(&results.by_category).unwrap(),
        )
        .unwrap();
        assert_eq!(back, results.by_category);
    }

    #[test]
    fn test_infinite_utilization_round_trips() {
        let results = sample_results(f64::INFINITY);
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["utilizationPercent"], "Infinity");

        let back: BudgetResults = serde_json::from_value(json).unwrap();
        assert_eq!(back.utilization_percent, f64::INFINITY);
        assert!(back.is_over_budget());
        assert_eq!(back.utilization_capped(), 100.0);
    }

    #[test]
    fn test_negative_infinite_utilization_keeps_sign() {
        let results = sample_results(f64::NEG_INFINITY);
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["utilizationPercent"], "-Infinity");

        let back: BudgetResults = serde_json::from_value(json).unwrap();
        assert_eq!(back.utilization_percent, f64::NEG_INFINITY);
        assert!(!back.is_over_budget());
        assert_eq!(back.utilization_capped(), 0.0);

        let yaml = serde_yaml::to_string(&results).unwrap();
        let back: BudgetResults = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.utilization_percent, f64::NEG_INFINITY);
    }

    #[test]
    fn test_null_utilization_reads_as_infinity() {
        let mut json = serde_json::to_value(sample_results(50.0)).unwrap();
        json["utilizationPercent"] = serde_json::Value::Null;
        let back: BudgetResults = serde_json::from_value(json).unwrap();
        assert_eq!(back.utilization_percent, f64::INFINITY);
    }

    #[test]
    fn test_legacy_result_keys() {
        let legacy = r##"{
            "revenusTotal": 2000,
            "depensesFixesTotal": 850,
            "depensesVariablesTotal": 150,
            "depensesTotal": 1000,
            "epargneRecommandee": 400,
            "soldeRestant": 600,
            "estNegatif": false,
            "donneesPie": [{"name": "Logement", "value": 850, "couleur": "#8884d8"}],
            "depensesParCategorie": {
                "Logement": {"total": 850, "fixe": 850, "variable": 0, "couleur": "#8884d8"},
                "Loisirs": {"total": 150, "fixe": 0, "variable": 150, "couleur": "#82ca9d"}
            },
            "depensesParCompte": {"Compte courant": {"total": 1000, "fixe": 850, "variable": 150}},
            "pourcentageUtilise": 50
        }"##;
        let results: BudgetResults = serde_json::from_str(legacy).unwrap();
        assert_eq!(results.total_income, 2000.0);
        assert_eq!(results.pie_data[0].color, "#8884d8");
        let housing = results.by_category.get("Logement").unwrap();
        assert_eq!(housing.fixed, 850.0);
        assert_eq!(housing.color.as_deref(), Some("#8884d8"));
        assert_eq!(results.by_account.get("Compte courant").unwrap().variable, 150.0);
        assert_eq!(results.utilization_percent, 50.0);
    }

    #[test]
    fn test_breakdown_lookup_after_many_buckets() {
        let mut breakdown = Breakdown::new();
        for i in 0..500 {
            breakdown.bucket_mut(&format!("bucket {}", i % 250)).add(1.0, i % 2 == 0);
        }
        assert_eq!(breakdown.len(), 250);
        assert_eq!(breakdown.get("bucket 249").unwrap().total, 2.0);
        assert_eq!(breakdown.names().nth(10), Some("bucket 10"));

        let json = serde_json::to_string(&breakdown).unwrap();
        let mut back: Breakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(back, breakdown);
        back.bucket_mut("bucket 0").add(1.0, true);
        assert_eq!(back.len(), 250);
    }

    #[test]
    fn test_account_slices_are_deterministic() {
        let results = sample_results(40.0);
        assert_eq!(results.account_slices(), results.account_slices());
        assert_eq!(results.account_slices()[0].color, "#8884d8");
    }
}
