//! Payment processing and account ledger use cases.
//!
//! # Responsibility
//! - Route transactions through a payment channel.
//! - Debit an account under its kind-specific rules.
//! - Keep every attempted transaction in a permissive ledger.
//!
//! # Invariants
//! - Savings accounts never go below zero; a rejected debit leaves the
//!   balance unchanged.

use crate::model::transaction::{format_amount, Transaction};
use crate::repo::record_store::RecordStore;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type FinanceResult<T> = Result<T, FinanceError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinanceError {
    InsufficientFunds {
        account: String,
        balance_cents: i64,
        requested_cents: i64,
    },
}

impl Display for FinanceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientFunds {
                account,
                balance_cents,
                requested_cents,
            } => write!(
                f,
                "Insufficient funds in {account}: balance {}, requested {}",
                format_amount(*balance_cents),
                format_amount(*requested_cents)
            ),
        }
    }
}

impl Error for FinanceError {}

/// Payment channel that confirms a transaction.
pub trait TransactionProcessor {
    fn channel(&self) -> &'static str;

    /// Returns the confirmation line for `transaction`.
    fn process(&self, transaction: &Transaction) -> String {
        format!(
            "{}: Processing {} for {}",
            self.channel(),
            format_amount(transaction.amount_cents),
            transaction.category
        )
    }
}

pub struct BankTransferProcessor;
pub struct MobileMoneyProcessor;
pub struct CryptoWalletProcessor;

impl TransactionProcessor for BankTransferProcessor {
    fn channel(&self) -> &'static str {
        "Bank Transfer"
    }
}

impl TransactionProcessor for MobileMoneyProcessor {
    fn channel(&self) -> &'static str {
        "Mobile Money"
    }
}

impl TransactionProcessor for CryptoWalletProcessor {
    fn channel(&self) -> &'static str {
        "Crypto Wallet"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Debits always apply, overdraft allowed.
    Standard,
    /// Debits larger than the balance are rejected.
    Savings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub number: String,
    pub kind: AccountKind,
    balance_cents: i64,
}

impl Account {
    pub fn new(number: impl Into<String>, kind: AccountKind, balance_cents: i64) -> Self {
        Self {
            number: number.into(),
            kind,
            balance_cents,
        }
    }

    pub fn savings(number: impl Into<String>, balance_cents: i64) -> Self {
        Self::new(number, AccountKind::Savings, balance_cents)
    }

    pub fn balance_cents(&self) -> i64 {
        self.balance_cents
    }

    /// Debits `transaction` and returns the new balance.
    pub fn apply_transaction(&mut self, transaction: &Transaction) -> FinanceResult<i64> {
        if self.kind == AccountKind::Savings && transaction.amount_cents > self.balance_cents {
            return Err(FinanceError::InsufficientFunds {
                account: self.number.clone(),
                balance_cents: self.balance_cents,
                requested_cents: transaction.amount_cents,
            });
        }
        self.balance_cents -= transaction.amount_cents;
        Ok(self.balance_cents)
    }
}

/// Outcome of recording one transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub confirmation: String,
    /// New balance, or why the debit was refused.
    pub debit: FinanceResult<i64>,
}

pub struct FinanceService {
    account: Account,
    ledger: RecordStore<Transaction>,
}

impl FinanceService {
    pub fn new(account: Account) -> Self {
        Self {
            account,
            ledger: RecordStore::permissive(),
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.ledger.get_all()
    }

    /// Processes, debits and logs one transaction.
    ///
    /// The transaction is kept in the ledger even when the debit is refused.
    pub fn record(
        &mut self,
        transaction: Transaction,
        processor: &dyn TransactionProcessor,
    ) -> Receipt {
        let confirmation = processor.process(&transaction);
        let debit = self.account.apply_transaction(&transaction);
        match &debit {
            Ok(balance) => info!(
                "event=transaction_apply module=finance status=ok id={} channel={} balance_cents={}",
                transaction.id,
                processor.channel(),
                balance
            ),
            Err(err) => warn!(
                "event=transaction_apply module=finance status=error id={} channel={} error={}",
                transaction.id,
                processor.channel(),
                err
            ),
        }
        self.ledger.push(transaction);
        Receipt {
            confirmation,
            debit,
        }
    }
}
