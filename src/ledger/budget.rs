use std::fmt;

use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

/// Spending limit configured for a single category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLimit {
    pub category: String,
    pub limit: f64,
}

/// Monthly spending guardrails supplied by the caller.
///
/// Category limits keep their configuration order and serialize as a JSON
/// object (`{"Travel": 3000, ...}`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BudgetConfig {
    pub monthly: f64,
    #[serde(default)]
    pub categories: CategoryLimits,
}

impl BudgetConfig {
    pub fn new(monthly: f64) -> Self {
        Self {
            monthly,
            categories: CategoryLimits::default(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>, limit: f64) -> Self {
        self.categories.set(category, limit);
        self
    }

    /// Limit for `category`, or `0` when it is not configured.
    pub fn limit_for(&self, category: &str) -> f64 {
        self.categories.get(category).unwrap_or(0.0)
    }
}

/// Ordered category → limit mapping. Lookups use exact string equality.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryLimits(Vec<CategoryLimit>);

impl CategoryLimits {
    pub fn get(&self, category: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.limit)
    }

    /// Inserts or overwrites a limit. Overwrites keep the original position.
    pub fn set(&mut self, category: impl Into<String>, limit: f64) {
        let category = category.into();
        match self.0.iter_mut().find(|entry| entry.category == category) {
            Some(entry) => entry.limit = limit,
            None => self.0.push(CategoryLimit { category, limit }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryLimit> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for CategoryLimits {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut limits = CategoryLimits::default();
        for (category, limit) in iter {
            limits.set(category, limit);
        }
        limits
    }
}

impl Serialize for CategoryLimits {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.category, &entry.limit)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategoryLimits {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LimitsVisitor;

        impl<'de> Visitor<'de> for LimitsVisitor {
            type Value = CategoryLimits;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category names to limits")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut limits = CategoryLimits::default();
                while let Some((category, limit)) = access.next_entry::<String, f64>()? {
                    limits.set(category, limit);
                }
                Ok(limits)
            }
        }

        deserializer.deserialize_map(LimitsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_category_has_zero_limit() {
        let budget = BudgetConfig::new(1000.0).with_category("Food", 250.0);
        assert_eq!(budget.limit_for("Food"), 250.0);
        assert_eq!(budget.limit_for("food"), 0.0);
        assert_eq!(budget.limit_for("Travel"), 0.0);
    }

    #[test]
    fn json_object_order_is_preserved() {
        let json = r#"{
            "monthly": 45000,
            "categories": {"Travel": 3000, "Food": 2500, "Groceries": 5000}
        }"#;
        let budget: BudgetConfig = serde_json::from_str(json).unwrap();
        let names: Vec<_> = budget.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Travel", "Food", "Groceries"]);

        let back = serde_json::to_string(&budget).unwrap();
        assert!(back.find("Travel").unwrap() < back.find("Groceries").unwrap());
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut limits: CategoryLimits = [("A", 1.0), ("B", 2.0)].into_iter().collect();
        limits.set("A", 10.0);
        assert_eq!(limits.len(), 2);
        assert_eq!(limits.iter().next().map(|e| e.limit), Some(10.0));
    }
}
