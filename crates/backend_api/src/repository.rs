use async_trait::async_trait;
use chrono::NaiveDate;
use models::{AdminInvestor, AdminWithdrawal, Scheme, Withdrawal};
use tokio::sync::RwLock;
use view_models::{
    AdminInvestors, AdminWithdrawals, InvestorWithdrawals, NewInvestor, SaveOutcome,
    SchemeCatalog, SchemeForm,
};

use crate::error::{ApiError, Result};

/// Repository trait over the per-page demo state.
/// This abstraction keeps persistence swappable behind an explicit
/// interface; the demo ships only the in-memory implementation.
#[async_trait]
pub trait PlatformRepository: Send + Sync {
    async fn investor_withdrawals(&self) -> (f64, Vec<Withdrawal>);
    async fn submit_withdrawal(&self, amount: f64, today: NaiveDate) -> Result<Withdrawal>;

    async fn admin_withdrawals(&self) -> Vec<AdminWithdrawal>;
    async fn approve_withdrawal(&self, id: &str) -> Result<AdminWithdrawal>;
    async fn reject_withdrawal(&self, id: &str) -> Result<AdminWithdrawal>;

    async fn investors(&self, search: Option<&str>) -> Vec<AdminInvestor>;
    async fn add_investor(&self, new: NewInvestor, today: NaiveDate) -> Result<AdminInvestor>;

    async fn schemes(&self) -> Vec<Scheme>;
    async fn save_scheme(&self, form: SchemeForm) -> Result<(SaveOutcome, Scheme)>;
    async fn delete_scheme(&self, id: &str) -> bool;

    /// Re-seed every page to its defaults (the page-reload analog).
    async fn reset(&self);
}

/// In-memory implementation. Each page owns an independently seeded copy;
/// mutating one is never visible through another.
pub struct InMemoryPlatformRepository {
    withdrawals: RwLock<InvestorWithdrawals>,
    approvals: RwLock<AdminWithdrawals>,
    investors: RwLock<AdminInvestors>,
    schemes: RwLock<SchemeCatalog>,
}

impl InMemoryPlatformRepository {
    pub fn new() -> Self {
        Self {
            withdrawals: RwLock::new(InvestorWithdrawals::seeded()),
            approvals: RwLock::new(AdminWithdrawals::seeded()),
            investors: RwLock::new(AdminInvestors::seeded()),
            schemes: RwLock::new(SchemeCatalog::seeded()),
        }
    }
}

impl Default for InMemoryPlatformRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlatformRepository for InMemoryPlatformRepository {
    async fn investor_withdrawals(&self) -> (f64, Vec<Withdrawal>) {
        let page = self.withdrawals.read().await;
        (page.wallet_balance(), page.records().to_vec())
    }

    async fn submit_withdrawal(&self, amount: f64, today: NaiveDate) -> Result<Withdrawal> {
        let mut page = self.withdrawals.write().await;
        Ok(page.submit(amount, today)?)
    }

    async fn admin_withdrawals(&self) -> Vec<AdminWithdrawal> {
        self.approvals.read().await.records().to_vec()
    }

    async fn approve_withdrawal(&self, id: &str) -> Result<AdminWithdrawal> {
        self.approvals
            .write()
            .await
            .approve(id)
            .ok_or_else(|| ApiError::WithdrawalNotFound(id.to_string()))
    }

    async fn reject_withdrawal(&self, id: &str) -> Result<AdminWithdrawal> {
        self.approvals
            .write()
            .await
            .reject(id)
            .ok_or_else(|| ApiError::WithdrawalNotFound(id.to_string()))
    }

    async fn investors(&self, search: Option<&str>) -> Vec<AdminInvestor> {
        let roster = self.investors.read().await;
        match search {
            Some(query) => roster.search(query).into_iter().cloned().collect(),
            None => roster.records().to_vec(),
        }
    }

    async fn add_investor(&self, new: NewInvestor, today: NaiveDate) -> Result<AdminInvestor> {
        let mut roster = self.investors.write().await;
        Ok(roster.add(new, today)?)
    }

    async fn schemes(&self) -> Vec<Scheme> {
        self.schemes.read().await.schemes().to_vec()
    }

    async fn save_scheme(&self, form: SchemeForm) -> Result<(SaveOutcome, Scheme)> {
        let mut catalog = self.schemes.write().await;
        Ok(catalog.save(form)?)
    }

    async fn delete_scheme(&self, id: &str) -> bool {
        self.schemes.write().await.delete(id)
    }

    async fn reset(&self) {
        *self.withdrawals.write().await = InvestorWithdrawals::seeded();
        *self.approvals.write().await = AdminWithdrawals::seeded();
        *self.investors.write().await = AdminInvestors::seeded();
        *self.schemes.write().await = SchemeCatalog::seeded();
    }
}
