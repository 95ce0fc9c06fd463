use serde::{Deserialize, Serialize};

// Access control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	Investor,
	Admin,
}

impl Role {
	/// Route prefix each role lands on after login.
	pub fn home_path(&self) -> &'static str {
		match self {
			Role::Investor => "/investor",
			Role::Admin => "/admin",
		}
	}

}

/// The single in-memory record for the currently logged-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
	pub email: String,
	pub role: Role,
	pub name: String,
}

/// Fixed demo credential pair. Never mutated after startup.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CredentialRecord {
	pub email: &'static str,
	pub password: &'static str,
	pub role: Role,
}

// Status enums, serialized with their display spellings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WithdrawalStatus {
	Pending,
	Approved,
	Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestorStatus {
	Active,
	#[serde(rename = "Pending KYC")]
	PendingKyc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
	Low,
	Medium,
	High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
	#[serde(rename = "Profit Credit")]
	ProfitCredit,
	Investment,
}

// Catalog records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
	pub id: String,
	pub name: String,
	pub description: String,
	pub min_investment: f64,
	pub target_return: String,
	pub return_period: String,
	pub risk: RiskLevel,
	pub features: Vec<String>,
	pub color: String,
}

/// Profile of the demo investor shown on the investor dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorProfile {
	pub id: String,
	pub name: String,
	pub email: String,
	pub phone: String,
	pub joined_date: String,
	pub kyc_status: String,
	pub total_invested: f64,
	pub current_profit: f64,
	pub wallet_balance: f64,
	pub active_schemes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
	pub id: String,
	pub scheme_name: String,
	pub invested_amount: f64,
	pub current_value: f64,
	pub profit: f64,
	pub start_date: String,
	pub status: String,
	pub return_rate: String,
}

/// Ledger entry; negative amounts are outflows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
	pub id: String,
	#[serde(rename = "type")]
	pub kind: TransactionKind,
	pub amount: f64,
	pub date: String,
	pub status: String,
	pub scheme: String,
}

/// Withdrawal as the investor page sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
	pub id: String,
	pub amount: f64,
	pub request_date: String,
	pub status: WithdrawalStatus,
	pub processed_date: Option<String>,
	pub bank_details: String,
}

/// Withdrawal as the admin queue sees it, with investor attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminWithdrawal {
	pub id: String,
	pub investor_id: String,
	pub investor_name: String,
	pub amount: f64,
	pub request_date: String,
	pub status: WithdrawalStatus,
	pub bank_details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminInvestor {
	pub id: String,
	pub name: String,
	pub email: String,
	pub phone: String,
	pub total_invested: f64,
	pub active_schemes: u32,
	pub status: InvestorStatus,
	pub joined_date: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub scheme: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub expected_payout: Option<f64>,
}

// Landing / admin aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
	pub capital_managed: String,
	pub active_investors: u32,
	pub avg_monthly_return: String,
	pub total_payouts: String,
	pub total_profit_generated: f64,
	pub pending_payouts: f64,
	pub paid_payouts: f64,
	pub net_profit_after_distribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitPoint {
	pub month: String,
	pub profit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSlice {
	pub name: String,
	pub value: f64,
	pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorStatPoint {
	pub month: String,
	pub investors: u32,
	pub invested: f64,
}
