use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Settlement state of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransactionStatus {
    #[default]
    Pending,
    Posted,
    Reconciled,
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatus::Pending => write!(f, "Pending"),
            TransactionStatus::Posted => write!(f, "Posted"),
            TransactionStatus::Reconciled => write!(f, "Reconciled"),
        }
    }
}

impl FromStr for TransactionStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(TransactionStatus::Pending),
            "Posted" => Ok(TransactionStatus::Posted),
            "Reconciled" => Ok(TransactionStatus::Reconciled),
            _ => Err(()),
        }
    }
}

/// Kind of account behind a payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AccountType {
    Checking,
    Credit,
    Savings,
    Cash,
    #[default]
    Unknown,
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountType::Checking => write!(f, "Checking"),
            AccountType::Credit => write!(f, "Credit"),
            AccountType::Savings => write!(f, "Savings"),
            AccountType::Cash => write!(f, "Cash"),
            AccountType::Unknown => write!(f, "Unknown"),
        }
    }
}

impl FromStr for AccountType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Checking" => Ok(AccountType::Checking),
            "Credit" => Ok(AccountType::Credit),
            "Savings" => Ok(AccountType::Savings),
            "Cash" => Ok(AccountType::Cash),
            "Unknown" => Ok(AccountType::Unknown),
            _ => Err(()),
        }
    }
}
