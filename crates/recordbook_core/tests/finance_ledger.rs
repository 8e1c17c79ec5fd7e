use chrono::NaiveDate;
use recordbook_core::{
    Account, AccountKind, BankTransferProcessor, CryptoWalletProcessor, FinanceError,
    FinanceService, MobileMoneyProcessor, Transaction, TransactionProcessor,
};

fn tx(id: u32, amount_cents: i64, category: &str) -> Transaction {
    Transaction::new(
        id,
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
        amount_cents,
        category,
    )
}

#[test]
fn processors_report_their_channel() {
    let groceries = tx(1, 15_000, "Groceries");
    assert_eq!(
        MobileMoneyProcessor.process(&groceries),
        "Mobile Money: Processing $150.00 for Groceries"
    );
    assert_eq!(
        BankTransferProcessor.process(&groceries),
        "Bank Transfer: Processing $150.00 for Groceries"
    );
    assert_eq!(
        CryptoWalletProcessor.process(&groceries),
        "Crypto Wallet: Processing $150.00 for Groceries"
    );
}

#[test]
fn savings_account_debits_and_records_in_order() {
    let mut service = FinanceService::new(Account::savings("SAV001", 100_000));

    let first = service.record(tx(1, 15_000, "Groceries"), &MobileMoneyProcessor);
    let second = service.record(tx(2, 20_000, "Utilities"), &BankTransferProcessor);
    let third = service.record(tx(3, 7_550, "Entertainment"), &CryptoWalletProcessor);

    assert_eq!(first.debit, Ok(85_000));
    assert_eq!(second.debit, Ok(65_000));
    assert_eq!(third.debit, Ok(57_450));
    assert_eq!(service.account().balance_cents(), 57_450);
    let ids: Vec<u32> = service.transactions().iter().map(|t| t.id).collect();
    assert_eq!(ids, [1, 2, 3]);
}

#[test]
fn savings_account_rejects_overdraft_but_keeps_ledger_entry() {
    let mut service = FinanceService::new(Account::savings("SAV002", 5_000));

    let receipt = service.record(tx(1, 6_000, "Rent"), &BankTransferProcessor);

    assert!(matches!(
        receipt.debit,
        Err(FinanceError::InsufficientFunds {
            balance_cents: 5_000,
            requested_cents: 6_000,
            ..
        })
    ));
    assert_eq!(service.account().balance_cents(), 5_000);
    assert_eq!(service.transactions().len(), 1);
}

#[test]
fn standard_account_allows_overdraft() {
    let mut account = Account::new("CHK001", AccountKind::Standard, 1_000);
    assert_eq!(account.apply_transaction(&tx(1, 2_500, "Fees")), Ok(-1_500));
}
