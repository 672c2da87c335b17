//! Static page copy, embedded at build time and validated once at startup.

use serde::Deserialize;

use crate::category::Category;
use crate::error::ContentError;

const CATALOG_JSON: &str = include_str!("../assets/content.json");

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Metric {
    pub percentage: u8,
    pub label: String,
    pub description: String,
    #[serde(default)]
    pub delay_ms: Option<u32>,
}

impl Metric {
    /// Stagger delay before the bar fills, 0 when unset.
    pub fn delay(&self) -> u32 {
        self.delay_ms.unwrap_or(0)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ContentBundle {
    pub title: String,
    pub tag: String,
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub pathways: Option<Vec<String>>,
}

impl ContentBundle {
    pub fn pathways(&self) -> &[String] {
        self.pathways.as_deref().unwrap_or(&[])
    }
}

// One field per category so a missing bundle is a parse error, never a runtime gap.
#[derive(Deserialize, Debug, Clone, PartialEq)]
struct Bundles {
    clinical: ContentBundle,
    general: ContentBundle,
    athlete: ContentBundle,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Discipline {
    pub name: String,
    pub focus: String,
    pub points: Vec<String>,
    pub goal: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Distinction {
    pub physio: Discipline,
    pub physiology: Discipline,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ProtocolStep {
    pub step: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Catalog {
    bundles: Bundles,
    pub distinction: Distinction,
    pub protocol: Vec<ProtocolStep>,
}

impl Catalog {
    /// Parses and validates the catalog shipped with the binary.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(CATALOG_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn bundle(&self, category: Category) -> &ContentBundle {
        match category {
            Category::Clinical => &self.bundles.clinical,
            Category::General => &self.bundles.general,
            Category::Athlete => &self.bundles.athlete,
        }
    }

    fn validate(&self) -> Result<(), ContentError> {
        for category in Category::ALL {
            let bundle = self.bundle(category);
            if bundle.title.trim().is_empty() {
                return Err(ContentError::EmptyTitle(category));
            }
            if bundle.metrics.is_empty() {
                return Err(ContentError::NoMetrics(category));
            }
            if let Some(metric) = bundle.metrics.iter().find(|m| m.percentage > 100) {
                return Err(ContentError::PercentageOutOfRange {
                    category,
                    label: metric.label.clone(),
                    percentage: metric.percentage,
                });
            }
            match (category, bundle.pathways().is_empty()) {
                (Category::Clinical, true) => return Err(ContentError::MissingPathways(category)),
                (Category::General | Category::Athlete, false) => {
                    return Err(ContentError::UnexpectedPathways(category))
                }
                _ => {}
            }
        }
        if self.protocol.is_empty() {
            return Err(ContentError::NoProtocolSteps);
        }
        Ok(())
    }
}
