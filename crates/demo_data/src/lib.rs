//! Hard-coded datasets backing the demo platform.
//!
//! Every function returns a fresh owned copy, so each page seeds its own
//! working state. Nothing here is ever mutated in place; mutations happen on
//! the per-page copies and are gone after a demo reset.

mod format;

pub use format::{format_currency, format_date};

use models::{
    AdminInvestor, AdminWithdrawal, CredentialRecord, DistributionSlice, Investment,
    InvestorProfile, InvestorStatPoint, InvestorStatus, PlatformStats, ProfitPoint, RiskLevel,
    Role, Scheme, Transaction, TransactionKind, Withdrawal, WithdrawalStatus,
};

/// The two demo credential pairs, documented in-app as click-to-fill
/// shortcuts on the login page.
pub fn demo_credentials() -> [CredentialRecord; 2] {
    [
        CredentialRecord {
            email: "investor@demo.com",
            password: "demo123",
            role: Role::Investor,
        },
        CredentialRecord {
            email: "admin@demo.com",
            password: "admin123",
            role: Role::Admin,
        },
    ]
}

pub fn investment_schemes() -> Vec<Scheme> {
    vec![
        Scheme {
            id: "1".to_string(),
            name: "Monthly Income Plan".to_string(),
            description: "Stable returns with monthly payouts. Ideal for passive income seekers."
                .to_string(),
            min_investment: 50000.0,
            target_return: "6–8%".to_string(),
            return_period: "month".to_string(),
            risk: RiskLevel::Medium,
            features: vec![
                "Monthly payouts".to_string(),
                "Capital preservation focus".to_string(),
                "Diversified portfolio".to_string(),
            ],
            color: "accent".to_string(),
        },
        Scheme {
            id: "2".to_string(),
            name: "Growth Plan".to_string(),
            description: "Higher growth potential for aggressive investors. Compound your wealth."
                .to_string(),
            min_investment: 100000.0,
            target_return: "8–12%".to_string(),
            return_period: "month".to_string(),
            risk: RiskLevel::High,
            features: vec![
                "Quarterly compounding".to_string(),
                "Growth-focused".to_string(),
                "Active trading".to_string(),
            ],
            color: "primary".to_string(),
        },
    ]
}

pub fn demo_investor() -> InvestorProfile {
    InvestorProfile {
        id: "INV001".to_string(),
        name: "Demo Investor".to_string(),
        email: "investor@demo.com".to_string(),
        phone: "+91 98765 43210".to_string(),
        joined_date: "2024-06-15".to_string(),
        kyc_status: "Verified".to_string(),
        total_invested: 250000.0,
        current_profit: 18500.0,
        wallet_balance: 28500.0,
        active_schemes: 2,
    }
}

pub fn investor_investments() -> Vec<Investment> {
    vec![
        Investment {
            id: "INV-001".to_string(),
            scheme_name: "Monthly Income Plan".to_string(),
            invested_amount: 100000.0,
            current_value: 108500.0,
            profit: 8500.0,
            start_date: "2024-08-01".to_string(),
            status: "Active".to_string(),
            return_rate: "7.2%".to_string(),
        },
        Investment {
            id: "INV-002".to_string(),
            scheme_name: "Growth Plan".to_string(),
            invested_amount: 150000.0,
            current_value: 165000.0,
            profit: 15000.0,
            start_date: "2024-07-15".to_string(),
            status: "Active".to_string(),
            return_rate: "9.8%".to_string(),
        },
    ]
}

pub fn investor_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "TXN-001".to_string(),
            kind: TransactionKind::ProfitCredit,
            amount: 7200.0,
            date: "2024-12-01".to_string(),
            status: "Completed".to_string(),
            scheme: "Monthly Income Plan".to_string(),
        },
        Transaction {
            id: "TXN-002".to_string(),
            kind: TransactionKind::ProfitCredit,
            amount: 14700.0,
            date: "2024-12-01".to_string(),
            status: "Completed".to_string(),
            scheme: "Growth Plan".to_string(),
        },
        Transaction {
            id: "TXN-003".to_string(),
            kind: TransactionKind::ProfitCredit,
            amount: 6800.0,
            date: "2024-11-01".to_string(),
            status: "Completed".to_string(),
            scheme: "Monthly Income Plan".to_string(),
        },
        Transaction {
            id: "TXN-004".to_string(),
            kind: TransactionKind::Investment,
            amount: -150000.0,
            date: "2024-07-15".to_string(),
            status: "Completed".to_string(),
            scheme: "Growth Plan".to_string(),
        },
        Transaction {
            id: "TXN-005".to_string(),
            kind: TransactionKind::Investment,
            amount: -100000.0,
            date: "2024-08-01".to_string(),
            status: "Completed".to_string(),
            scheme: "Monthly Income Plan".to_string(),
        },
    ]
}

/// Withdrawal history seeded on the investor page. Independent of the
/// admin queue below; the two pages never share state.
pub fn investor_withdrawals() -> Vec<Withdrawal> {
    vec![
        Withdrawal {
            id: "WD-001".to_string(),
            amount: 10000.0,
            request_date: "2024-11-20".to_string(),
            status: WithdrawalStatus::Approved,
            processed_date: Some("2024-11-22".to_string()),
            bank_details: "HDFC ***4521".to_string(),
        },
        Withdrawal {
            id: "WD-002".to_string(),
            amount: 5000.0,
            request_date: "2024-12-10".to_string(),
            status: WithdrawalStatus::Pending,
            processed_date: None,
            bank_details: "HDFC ***4521".to_string(),
        },
    ]
}

pub fn all_investors() -> Vec<AdminInvestor> {
    vec![
        AdminInvestor {
            id: "INV001".to_string(),
            name: "Rahul Sharma".to_string(),
            email: "rahul@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            total_invested: 250000.0,
            active_schemes: 2,
            status: InvestorStatus::Active,
            joined_date: "2024-06-15".to_string(),
            scheme: None,
            expected_payout: None,
        },
        AdminInvestor {
            id: "INV002".to_string(),
            name: "Priya Patel".to_string(),
            email: "priya@example.com".to_string(),
            phone: "+91 87654 32109".to_string(),
            total_invested: 500000.0,
            active_schemes: 1,
            status: InvestorStatus::Active,
            joined_date: "2024-05-20".to_string(),
            scheme: None,
            expected_payout: None,
        },
        AdminInvestor {
            id: "INV003".to_string(),
            name: "Amit Kumar".to_string(),
            email: "amit@example.com".to_string(),
            phone: "+91 76543 21098".to_string(),
            total_invested: 150000.0,
            active_schemes: 1,
            status: InvestorStatus::Active,
            joined_date: "2024-07-10".to_string(),
            scheme: None,
            expected_payout: None,
        },
        AdminInvestor {
            id: "INV004".to_string(),
            name: "Sneha Gupta".to_string(),
            email: "sneha@example.com".to_string(),
            phone: "+91 65432 10987".to_string(),
            total_invested: 300000.0,
            active_schemes: 2,
            status: InvestorStatus::PendingKyc,
            joined_date: "2024-08-05".to_string(),
            scheme: None,
            expected_payout: None,
        },
        AdminInvestor {
            id: "INV005".to_string(),
            name: "Vikram Singh".to_string(),
            email: "vikram@example.com".to_string(),
            phone: "+91 54321 09876".to_string(),
            total_invested: 750000.0,
            active_schemes: 2,
            status: InvestorStatus::Active,
            joined_date: "2024-04-12".to_string(),
            scheme: None,
            expected_payout: None,
        },
    ]
}

pub fn all_withdrawals() -> Vec<AdminWithdrawal> {
    vec![
        AdminWithdrawal {
            id: "WD-001".to_string(),
            investor_id: "INV001".to_string(),
            investor_name: "Rahul Sharma".to_string(),
            amount: 10000.0,
            request_date: "2024-12-15".to_string(),
            status: WithdrawalStatus::Pending,
            bank_details: "HDFC ***4521".to_string(),
        },
        AdminWithdrawal {
            id: "WD-002".to_string(),
            investor_id: "INV002".to_string(),
            investor_name: "Priya Patel".to_string(),
            amount: 25000.0,
            request_date: "2024-12-14".to_string(),
            status: WithdrawalStatus::Pending,
            bank_details: "ICICI ***7890".to_string(),
        },
        AdminWithdrawal {
            id: "WD-003".to_string(),
            investor_id: "INV005".to_string(),
            investor_name: "Vikram Singh".to_string(),
            amount: 50000.0,
            request_date: "2024-12-10".to_string(),
            status: WithdrawalStatus::Approved,
            bank_details: "SBI ***1234".to_string(),
        },
        AdminWithdrawal {
            id: "WD-004".to_string(),
            investor_id: "INV003".to_string(),
            investor_name: "Amit Kumar".to_string(),
            amount: 8000.0,
            request_date: "2024-12-08".to_string(),
            status: WithdrawalStatus::Rejected,
            bank_details: "Axis ***5678".to_string(),
        },
    ]
}

pub fn platform_stats() -> PlatformStats {
    PlatformStats {
        capital_managed: "₹5 Cr".to_string(),
        active_investors: 320,
        avg_monthly_return: "6–10%".to_string(),
        total_payouts: "₹85 Lakh".to_string(),
        total_profit_generated: 4850000.0,
        pending_payouts: 93000.0,
        paid_payouts: 4757000.0,
        net_profit_after_distribution: 4250000.0,
    }
}

pub fn profit_chart() -> Vec<ProfitPoint> {
    [
        ("Jul", 12000.0),
        ("Aug", 15500.0),
        ("Sep", 14200.0),
        ("Oct", 18900.0),
        ("Nov", 21500.0),
        ("Dec", 18500.0),
    ]
    .into_iter()
    .map(|(month, profit)| ProfitPoint {
        month: month.to_string(),
        profit,
    })
    .collect()
}

pub fn profit_distribution() -> Vec<DistributionSlice> {
    vec![
        DistributionSlice {
            name: "Distributed to Investors".to_string(),
            value: 4757000.0,
            color: "hsl(142, 71%, 45%)".to_string(),
        },
        DistributionSlice {
            name: "Pending Payouts".to_string(),
            value: 93000.0,
            color: "hsl(38, 92%, 50%)".to_string(),
        },
        DistributionSlice {
            name: "Platform Profit".to_string(),
            value: 4250000.0,
            color: "hsl(45, 93%, 47%)".to_string(),
        },
    ]
}

pub fn investor_stats() -> Vec<InvestorStatPoint> {
    [
        ("Jul", 45, 1200000.0),
        ("Aug", 62, 1800000.0),
        ("Sep", 58, 1500000.0),
        ("Oct", 78, 2200000.0),
        ("Nov", 92, 2800000.0),
        ("Dec", 85, 2400000.0),
    ]
    .into_iter()
    .map(|(month, investors, invested)| InvestorStatPoint {
        month: month.to_string(),
        investors,
        invested,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_two_credential_pairs() {
        let creds = demo_credentials();
        assert_eq!(creds.len(), 2);
        assert_eq!(creds[0].role, Role::Investor);
        assert_eq!(creds[1].role, Role::Admin);
    }

    #[test]
    fn test_seeds_return_fresh_copies() {
        let mut a = investment_schemes();
        a.clear();
        assert_eq!(investment_schemes().len(), 2);
    }

    #[test]
    fn test_admin_queue_pending_total() {
        let pending: f64 = all_withdrawals()
            .iter()
            .filter(|w| w.status == WithdrawalStatus::Pending)
            .map(|w| w.amount)
            .sum();
        assert_eq!(pending, 35000.0);
    }
}
