use chrono::NaiveDate;
use models::{AdminWithdrawal, Withdrawal, WithdrawalStatus};

use crate::error::ValidationError;

/// Withdrawal page state for the demo investor: the request history plus
/// the wallet balance requests are validated against.
#[derive(Debug, Clone)]
pub struct InvestorWithdrawals {
    wallet_balance: f64,
    records: Vec<Withdrawal>,
}

impl InvestorWithdrawals {
    pub fn seeded() -> Self {
        Self {
            wallet_balance: demo_data::demo_investor().wallet_balance,
            records: demo_data::investor_withdrawals(),
        }
    }

    pub fn records(&self) -> &[Withdrawal] {
        &self.records
    }

    pub fn wallet_balance(&self) -> f64 {
        self.wallet_balance
    }

    /// Validates and prepends a new Pending request. The balance itself is
    /// never debited; payouts in the demo are resolved by the admin queue.
    pub fn submit(&mut self, amount: f64, today: NaiveDate) -> Result<Withdrawal, ValidationError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::InvalidAmount);
        }
        if amount > self.wallet_balance {
            return Err(ValidationError::InsufficientBalance);
        }

        let record = Withdrawal {
            id: format!("WD-{:03}", self.records.len() + 1),
            amount,
            request_date: today.to_string(),
            status: WithdrawalStatus::Pending,
            processed_date: None,
            bank_details: "HDFC ***4521".to_string(),
        };
        self.records.insert(0, record.clone());
        Ok(record)
    }
}

impl Default for InvestorWithdrawals {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Admin approval queue over all investors' requests. Independent of the
/// investor page above; the two never share records.
#[derive(Debug, Clone)]
pub struct AdminWithdrawals {
    records: Vec<AdminWithdrawal>,
}

impl AdminWithdrawals {
    pub fn seeded() -> Self {
        Self {
            records: demo_data::all_withdrawals(),
        }
    }

    pub fn records(&self) -> &[AdminWithdrawal] {
        &self.records
    }

    pub fn pending_count(&self) -> usize {
        self.records
            .iter()
            .filter(|w| w.status == WithdrawalStatus::Pending)
            .count()
    }

    /// Update-by-id to Approved. Returns the updated record, or `None` when
    /// the id matches nothing (the queue is left untouched).
    pub fn approve(&mut self, id: &str) -> Option<AdminWithdrawal> {
        self.transition(id, WithdrawalStatus::Approved)
    }

    pub fn reject(&mut self, id: &str) -> Option<AdminWithdrawal> {
        self.transition(id, WithdrawalStatus::Rejected)
    }

    fn transition(&mut self, id: &str, status: WithdrawalStatus) -> Option<AdminWithdrawal> {
        let record = self.records.iter_mut().find(|w| w.id == id)?;
        record.status = status;
        Some(record.clone())
    }
}

impl Default for AdminWithdrawals {
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

    #[test]
    fn test_zero_and_negative_amounts_rejected() {
        let mut page = InvestorWithdrawals::seeded();
        let before = page.records().len();

        assert_eq!(page.submit(0.0, today()), Err(ValidationError::InvalidAmount));
        assert_eq!(page.submit(-50.0, today()), Err(ValidationError::InvalidAmount));
        assert_eq!(
            page.submit(f64::NAN, today()),
            Err(ValidationError::InvalidAmount)
        );
        assert_eq!(page.records().len(), before);
    }

    #[test]
    fn test_amount_over_balance_rejected() {
        let mut page = InvestorWithdrawals::seeded();
        let before = page.records().len();

        assert_eq!(
            page.submit(50000.0, today()),
            Err(ValidationError::InsufficientBalance)
        );
        assert_eq!(page.records().len(), before);
    }

    #[test]
    fn test_valid_submission_prepends_pending_record() {
        let mut page = InvestorWithdrawals::seeded();
        let record = page.submit(5000.0, today()).unwrap();

        assert_eq!(record.id, "WD-003");
        assert_eq!(record.status, WithdrawalStatus::Pending);
        assert_eq!(record.processed_date, None);
        assert_eq!(record.request_date, "2024-12-20");

        let ids: Vec<&str> = page.records().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["WD-003", "WD-001", "WD-002"]);
        assert!(ids.iter().filter(|id| **id == "WD-003").count() == 1);
    }

    #[test]
    fn test_exact_balance_is_withdrawable() {
        let mut page = InvestorWithdrawals::seeded();
        assert!(page.submit(28500.0, today()).is_ok());
    }

    #[test]
    fn test_approve_changes_only_the_matching_record() {
        let mut queue = AdminWithdrawals::seeded();
        let before: Vec<_> = queue.records().to_vec();

        let updated = queue.approve("WD-001").unwrap();
        assert_eq!(updated.status, WithdrawalStatus::Approved);

        for (old, new) in before.iter().zip(queue.records()) {
            if new.id == "WD-001" {
                assert_eq!(new.status, WithdrawalStatus::Approved);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_reject_and_pending_count() {
        let mut queue = AdminWithdrawals::seeded();
        assert_eq!(queue.pending_count(), 2);

        let updated = queue.reject("WD-002").unwrap();
        assert_eq!(updated.status, WithdrawalStatus::Rejected);
        assert_eq!(queue.pending_count(), 1);
    }

    #[test]
    fn test_unknown_id_is_a_no_op() {
        let mut queue = AdminWithdrawals::seeded();
        let before: Vec<_> = queue.records().to_vec();

        assert_eq!(queue.approve("WD-999"), None);
        assert_eq!(queue.records(), before.as_slice());
    }
}
