use chrono::NaiveDate;
use models::{AdminInvestor, InvestorStatus};
use serde::Deserialize;

use crate::error::ValidationError;

/// Form payload for registering an investor from the admin page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewInvestor {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub total_invested: Option<f64>,
    pub scheme: String,
    pub expected_payout: Option<f64>,
}

/// Admin investor roster, seeded from the demo dataset.
#[derive(Debug, Clone)]
pub struct AdminInvestors {
    records: Vec<AdminInvestor>,
}

impl AdminInvestors {
    pub fn seeded() -> Self {
        Self {
            records: demo_data::all_investors(),
        }
    }

    pub fn records(&self) -> &[AdminInvestor] {
        &self.records
    }

    /// Case-insensitive substring match over name, email and id. Does not
    /// mutate the roster; an empty query matches everyone.
    pub fn search(&self, query: &str) -> Vec<&AdminInvestor> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|investor| {
                investor.name.to_lowercase().contains(&needle)
                    || investor.email.to_lowercase().contains(&needle)
                    || investor.id.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Validates the required fields and prepends the new investor with a
    /// freshly assigned zero-padded id.
    pub fn add(
        &mut self,
        new: NewInvestor,
        today: NaiveDate,
    ) -> Result<AdminInvestor, ValidationError> {
        if new.name.trim().is_empty()
            || new.email.trim().is_empty()
            || new.phone.trim().is_empty()
            || new.scheme.trim().is_empty()
            || new.total_invested.is_none()
        {
            return Err(ValidationError::MissingInvestorFields);
        }

        let record = AdminInvestor {
            id: format!("INV{:03}", self.records.len() + 1),
            name: new.name,
            email: new.email,
            phone: new.phone,
            total_invested: new.total_invested.unwrap_or(0.0),
            active_schemes: 1,
            status: InvestorStatus::Active,
            joined_date: today.to_string(),
            scheme: Some(new.scheme),
            expected_payout: Some(new.expected_payout.unwrap_or(0.0)),
        };
        self.records.insert(0, record.clone());
        Ok(record)
    }
}

impl Default for AdminInvestors {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 20).unwrap()
    }

    fn complete_form() -> NewInvestor {
        NewInvestor {
            name: "Kiran Rao".to_string(),
            email: "kiran@example.com".to_string(),
            phone: "+91 11111 22222".to_string(),
            total_invested: Some(200000.0),
            scheme: "Growth Plan".to_string(),
            expected_payout: None,
        }
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let mut roster = AdminInvestors::seeded();
        let before = roster.records().len();

        let mut no_name = complete_form();
        no_name.name = "  ".to_string();
        assert_eq!(
            roster.add(no_name, today()),
            Err(ValidationError::MissingInvestorFields)
        );

        let mut no_amount = complete_form();
        no_amount.total_invested = None;
        assert_eq!(
            roster.add(no_amount, today()),
            Err(ValidationError::MissingInvestorFields)
        );

        assert_eq!(roster.records().len(), before);
    }

    #[test]
    fn test_add_prepends_with_generated_id() {
        let mut roster = AdminInvestors::seeded();
        let added = roster.add(complete_form(), today()).unwrap();

        assert_eq!(added.id, "INV006");
        assert_eq!(added.status, InvestorStatus::Active);
        assert_eq!(added.active_schemes, 1);
        assert_eq!(added.joined_date, "2024-12-20");
        assert_eq!(added.expected_payout, Some(0.0));
        assert_eq!(roster.records()[0].id, "INV006");
        assert_eq!(roster.records().len(), 6);
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_email_id() {
        let roster = AdminInvestors::seeded();

        let by_name: Vec<_> = roster.search("RAHUL").iter().map(|i| i.id.clone()).collect();
        assert_eq!(by_name, ["INV001"]);

        let by_email = roster.search("priya@");
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].name, "Priya Patel");

        let by_id = roster.search("inv00");
        assert_eq!(by_id.len(), 5);
    }

    #[test]
    fn test_search_empty_query_matches_all_and_does_not_mutate() {
        let roster = AdminInvestors::seeded();
        assert_eq!(roster.search("").len(), roster.records().len());
        assert_eq!(roster.search("zzz").len(), 0);
        assert_eq!(roster.records().len(), 5);
    }
}
