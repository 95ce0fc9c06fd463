use models::{RiskLevel, Scheme};
use serde::Deserialize;

use crate::error::ValidationError;

/// Form payload for the scheme editor. An `id` means update-in-place;
/// without one a new scheme is appended.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeForm {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub min_investment: Option<f64>,
    #[serde(default)]
    pub target_return: String,
    #[serde(default = "default_risk")]
    pub risk: RiskLevel,
    /// Comma-separated; entries are trimmed and empties dropped.
    #[serde(default)]
    pub features: String,
}

fn default_risk() -> RiskLevel {
    RiskLevel::Medium
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

/// Scheme list as the admin editor sees it.
#[derive(Debug, Clone)]
pub struct SchemeCatalog {
    schemes: Vec<Scheme>,
}

impl SchemeCatalog {
    pub fn seeded() -> Self {
        Self {
            schemes: demo_data::investment_schemes(),
        }
    }

    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    /// Creates or updates a scheme. Name, minimum investment and target
    /// return are required; color and return period derive from the form.
    pub fn save(&mut self, form: SchemeForm) -> Result<(SaveOutcome, Scheme), ValidationError> {
        let min_investment = match form.min_investment {
            Some(v) if !form.name.trim().is_empty() && !form.target_return.trim().is_empty() => v,
            _ => return Err(ValidationError::MissingSchemeFields),
        };

        let features: Vec<String> = form
            .features
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();
        let color = match form.risk {
            RiskLevel::High => "primary",
            _ => "accent",
        };

        let existing_id = form.id.filter(|id| !id.trim().is_empty());
        match existing_id {
            Some(id) => {
                let pos = self
                    .schemes
                    .iter()
                    .position(|s| s.id == id)
                    .ok_or_else(|| ValidationError::UnknownScheme(id.clone()))?;
                let scheme = Scheme {
                    id,
                    name: form.name,
                    description: form.description,
                    min_investment,
                    target_return: form.target_return,
                    return_period: "month".to_string(),
                    risk: form.risk,
                    features,
                    color: color.to_string(),
                };
                self.schemes[pos] = scheme.clone();
                Ok((SaveOutcome::Updated, scheme))
            }
            None => {
                let scheme = Scheme {
                    id: (self.schemes.len() + 1).to_string(),
                    name: form.name,
                    description: form.description,
                    min_investment,
                    target_return: form.target_return,
                    return_period: "month".to_string(),
                    risk: form.risk,
                    features,
                    color: color.to_string(),
                };
                self.schemes.push(scheme.clone());
                Ok((SaveOutcome::Created, scheme))
            }
        }
    }

    /// Remove-by-id; `false` when nothing matched.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.schemes.len();
        self.schemes.retain(|s| s.id != id);
        self.schemes.len() != before
    }
}

impl Default for SchemeCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> SchemeForm {
        SchemeForm {
            id: None,
            name: "Fixed Income Plan".to_string(),
            description: "Short lock-in, conservative allocation.".to_string(),
            min_investment: Some(25000.0),
            target_return: "4–6%".to_string(),
            risk: RiskLevel::Low,
            features: "Weekly payouts, , Capital guarantee ".to_string(),
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut catalog = SchemeCatalog::seeded();
        let mut form = complete_form();
        form.name = "".to_string();

        assert_eq!(
            catalog.save(form),
            Err(ValidationError::MissingSchemeFields)
        );
        assert_eq!(catalog.schemes().len(), 2);
    }

    #[test]
    fn test_add_appends_with_new_id() {
        let mut catalog = SchemeCatalog::seeded();
        let (outcome, scheme) = catalog.save(complete_form()).unwrap();

        assert_eq!(outcome, SaveOutcome::Created);
        assert_eq!(scheme.id, "3");
        assert_eq!(scheme.return_period, "month");
        assert_eq!(scheme.color, "accent");
        assert_eq!(scheme.features, ["Weekly payouts", "Capital guarantee"]);
        assert_eq!(catalog.schemes().last().unwrap().id, "3");
    }

    #[test]
    fn test_update_keeps_id_and_position() {
        let mut catalog = SchemeCatalog::seeded();
        let form = SchemeForm {
            id: Some("1".to_string()),
            name: "Monthly Income Plan v2".to_string(),
            description: "Rebalanced allocation.".to_string(),
            min_investment: Some(60000.0),
            target_return: "6–9%".to_string(),
            risk: RiskLevel::High,
            features: "Monthly payouts".to_string(),
        };

        let (outcome, scheme) = catalog.save(form).unwrap();
        assert_eq!(outcome, SaveOutcome::Updated);
        assert_eq!(scheme.id, "1");
        assert_eq!(scheme.color, "primary");
        assert_eq!(catalog.schemes()[0].name, "Monthly Income Plan v2");
        assert_eq!(catalog.schemes().len(), 2);
    }

    #[test]
    fn test_update_unknown_id_leaves_catalog_unchanged() {
        let mut catalog = SchemeCatalog::seeded();
        let mut form = complete_form();
        form.id = Some("99".to_string());

        assert_eq!(
            catalog.save(form),
            Err(ValidationError::UnknownScheme("99".to_string()))
        );
        assert_eq!(catalog.schemes().len(), 2);
    }

    #[test]
    fn test_blank_id_counts_as_new() {
        let mut catalog = SchemeCatalog::seeded();
        let mut form = complete_form();
        form.id = Some("".to_string());

        let (outcome, scheme) = catalog.save(form).unwrap();
        assert_eq!(outcome, SaveOutcome::Created);
        assert_eq!(scheme.id, "3");
    }

    #[test]
    fn test_delete_by_id() {
        let mut catalog = SchemeCatalog::seeded();
        assert!(catalog.delete("1"));
        assert_eq!(catalog.schemes().len(), 1);
        assert_eq!(catalog.schemes()[0].id, "2");

        assert!(!catalog.delete("1"));
        assert_eq!(catalog.schemes().len(), 1);
    }
}
