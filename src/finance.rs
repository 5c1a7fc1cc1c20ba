// 💰 Finance - transaction channels + account debit policies
//
// Two debit policies live side by side on purpose:
// - Standard: always subtracts, the balance may go negative
// - Savings:  refuses a debit larger than the balance, balance unchanged

use crate::entities::Transaction;
use crate::error::RecordResult;
use crate::repository::KeyedRepository;
use anyhow::Result;
use chrono::Utc;
use std::io::Write;
use tracing::{debug, info};

/// Render an amount the way every finance line prints it
pub fn format_money(symbol: &str, amount: f64) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, -amount)
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

// ============================================================================
// PROCESSORS
// ============================================================================

/// A payment channel a transaction is routed through before it is applied
pub trait TransactionProcessor {
    /// Label printed in brackets, e.g. "Bank Transfer"
    fn channel(&self) -> &'static str;

    fn process(&self, transaction: &Transaction, currency: &str, out: &mut dyn Write) -> Result<()> {
        debug!(channel = self.channel(), id = transaction.id, "processing transaction");
        writeln!(
            out,
            "[{}] {} - Amount: {}",
            self.channel(),
            transaction.category,
            format_money(currency, transaction.amount)
        )?;
        Ok(())
    }
}

pub struct BankTransferProcessor;

impl TransactionProcessor for BankTransferProcessor {
    fn channel(&self) -> &'static str {
        "Bank Transfer"
    }
}

pub struct MobileMoneyProcessor;

impl TransactionProcessor for MobileMoneyProcessor {
    fn channel(&self) -> &'static str {
        "Mobile Money"
    }
}

pub struct CryptoWalletProcessor;

impl TransactionProcessor for CryptoWalletProcessor {
    fn channel(&self) -> &'static str {
        "Crypto Wallet"
    }
}

// ============================================================================
// ACCOUNT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Unconditional debit
    Standard,
    /// Debit only when covered by the balance
    Savings,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DebitOutcome {
    Applied { new_balance: f64 },
    InsufficientFunds { balance: f64, requested: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    account_number: String,
    balance: f64,
    kind: AccountKind,
}

impl Account {
    pub fn new(account_number: impl Into<String>, initial_balance: f64, kind: AccountKind) -> Self {
        Account {
            account_number: account_number.into(),
            balance: initial_balance,
            kind,
        }
    }

    pub fn savings(account_number: impl Into<String>, initial_balance: f64) -> Self {
        Self::new(account_number, initial_balance, AccountKind::Savings)
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Debit the transaction amount according to this account's policy
    pub fn apply_transaction(&mut self, transaction: &Transaction) -> DebitOutcome {
        if self.kind == AccountKind::Savings && transaction.amount > self.balance {
            info!(
                account = %self.account_number,
                id = transaction.id,
                "debit refused: insufficient funds"
            );
            return DebitOutcome::InsufficientFunds {
                balance: self.balance,
                requested: transaction.amount,
            };
        }

        self.balance -= transaction.amount;
        DebitOutcome::Applied {
            new_balance: self.balance,
        }
    }
}

// ============================================================================
// PROGRAM
// ============================================================================

pub struct FinanceApp {
    transactions: KeyedRepository<Transaction>,
    account: Account,
    currency: String,
}

impl FinanceApp {
    pub fn new(account: Account, currency: impl Into<String>) -> Self {
        FinanceApp {
            transactions: KeyedRepository::new(),
            account,
            currency: currency.into(),
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.list_all()
    }

    /// Record, route and apply one transaction
    ///
    /// A savings account prints the new balance after a debit; a standard
    /// account prints only the processor line. The outer result is an
    /// output failure. The inner one is the
    /// repository's verdict: a reused id is rejected before anything is
    /// printed or debited. A refused debit is printed, not raised, and the
    /// transaction stays recorded.
    pub fn submit(
        &mut self,
        processor: &dyn TransactionProcessor,
        transaction: Transaction,
        out: &mut dyn Write,
    ) -> Result<RecordResult<DebitOutcome>> {
        if let Err(e) = self.transactions.add(transaction.clone()) {
            return Ok(Err(e));
        }

        processor.process(&transaction, &self.currency, out)?;
        let outcome = self.account.apply_transaction(&transaction);
        match outcome {
            // Only savings accounts confirm a debit; standard ones stay silent
            DebitOutcome::Applied { new_balance } if self.account.kind() == AccountKind::Savings => {
                writeln!(
                    out,
                    "Transaction successful. New balance: {}",
                    format_money(&self.currency, new_balance)
                )?
            }
            DebitOutcome::Applied { .. } => {}
            DebitOutcome::InsufficientFunds { .. } => {
                writeln!(out, "Insufficient funds for this transaction.")?
            }
        }

        Ok(Ok(outcome))
    }
}

/// Three transactions through three channels against one savings account
pub fn run(opening_balance: f64, currency: &str, out: &mut dyn Write) -> Result<()> {
    let mut app = FinanceApp::new(Account::savings("ACCT-001", opening_balance), currency);
    let now = Utc::now();

    let batch: [(&dyn TransactionProcessor, Transaction); 3] = [
        (&MobileMoneyProcessor, Transaction::new(1, now, 120.0, "Groceries")),
        (&BankTransferProcessor, Transaction::new(2, now, 300.0, "Utilities")),
        (&CryptoWalletProcessor, Transaction::new(3, now, 450.0, "Entertainment")),
    ];

    for (processor, transaction) in batch {
        if let Err(e) = app.submit(processor, transaction, out)? {
            writeln!(out, "Error: {}", e)?;
        }
    }

    info!(
        account = app.account().account_number(),
        balance = app.account().balance(),
        recorded = app.transactions().len(),
        "finance run complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordError;

    fn tx(id: u32, amount: f64) -> Transaction {
        Transaction::new(id, Utc::now(), amount, "Test")
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("$", 120.0), "$120.00");
        assert_eq!(format_money("$", -5.5), "-$5.50");
    }

    #[test]
    fn test_savings_rejects_overdraft() {
        let mut account = Account::savings("S-1", 100.0);
        let outcome = account.apply_transaction(&tx(1, 150.0));

        assert_eq!(
            outcome,
            DebitOutcome::InsufficientFunds {
                balance: 100.0,
                requested: 150.0
            }
        );
        assert_eq!(account.balance(), 100.0);
    }

    #[test]
    fn test_savings_allows_exact_balance() {
        let mut account = Account::savings("S-1", 100.0);
        let outcome = account.apply_transaction(&tx(1, 100.0));
        assert_eq!(outcome, DebitOutcome::Applied { new_balance: 0.0 });
    }

    #[test]
    fn test_standard_account_underflows() {
        let mut account = Account::new("C-1", 100.0, AccountKind::Standard);
        let outcome = account.apply_transaction(&tx(1, 150.0));

        assert_eq!(outcome, DebitOutcome::Applied { new_balance: -50.0 });
        assert_eq!(account.balance(), -50.0);
    }

    #[test]
    fn test_processor_line() {
        let mut out = Vec::new();
        MobileMoneyProcessor
            .process(&tx(1, 120.0), "$", &mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[Mobile Money] Test - Amount: $120.00\n"
        );
    }

    #[test]
    fn test_run_output() {
        let mut out = Vec::new();
        run(1000.0, "$", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = "\
[Mobile Money] Groceries - Amount: $120.00
Transaction successful. New balance: $880.00
[Bank Transfer] Utilities - Amount: $300.00
Transaction successful. New balance: $580.00
[Crypto Wallet] Entertainment - Amount: $450.00
Transaction successful. New balance: $130.00
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_run_with_small_balance_refuses_last() {
        let mut out = Vec::new();
        run(500.0, "$", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("New balance: $380.00"));
        assert!(text.contains("New balance: $80.00"));
        assert!(text.ends_with("Insufficient funds for this transaction.\n"));
    }

    #[test]
    fn test_refused_transaction_still_recorded() {
        let mut app = FinanceApp::new(Account::savings("S-1", 10.0), "$");
        let mut out = Vec::new();

        let outcome = app
            .submit(&BankTransferProcessor, tx(1, 50.0), &mut out)
            .unwrap()
            .unwrap();

        assert!(matches!(outcome, DebitOutcome::InsufficientFunds { .. }));
        assert_eq!(app.transactions().len(), 1);
        assert_eq!(app.account().balance(), 10.0);
    }

    #[test]
    fn test_standard_account_submit_prints_only_processor_line() {
        let mut app = FinanceApp::new(Account::new("C-1", 100.0, AccountKind::Standard), "$");
        let mut out = Vec::new();

        let outcome = app
            .submit(&CryptoWalletProcessor, tx(1, 150.0), &mut out)
            .unwrap()
            .unwrap();

        assert_eq!(outcome, DebitOutcome::Applied { new_balance: -50.0 });
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[Crypto Wallet] Test - Amount: $150.00\n"
        );
    }

    #[test]
    fn test_duplicate_transaction_not_applied() {
        let mut app = FinanceApp::new(Account::savings("S-1", 100.0), "$");
        let mut out = Vec::new();

        app.submit(&BankTransferProcessor, tx(1, 10.0), &mut out)
            .unwrap()
            .unwrap();
        let second = app
            .submit(&BankTransferProcessor, tx(1, 10.0), &mut out)
            .unwrap();

        assert!(matches!(second, Err(RecordError::DuplicateKey { .. })));
        assert_eq!(app.account().balance(), 90.0);
        assert_eq!(app.transactions().len(), 1);
    }
}
