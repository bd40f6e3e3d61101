//! Proxy: a bank account reachable only through a PIN-checking stand-in.

use crate::error::AccountError;

/// Every call carries the PIN; the real account ignores it, the proxy checks it.
pub trait BankAccount {
    fn deposit(&mut self, amount: f64, pin: &str) -> Result<f64, AccountError>;
    fn withdraw(&mut self, amount: f64, pin: &str) -> Result<f64, AccountError>;
    fn balance(&self, pin: &str) -> Result<f64, AccountError>;
}

#[derive(Debug, Default)]
pub struct RealBankAccount {
    balance: f64,
}

impl RealBankAccount {
    pub fn new(initial_balance: f64) -> Self {
        Self {
            balance: initial_balance,
        }
    }
}

impl BankAccount for RealBankAccount {
    fn deposit(&mut self, amount: f64, _pin: &str) -> Result<f64, AccountError> {
        if !(amount.is_finite() && amount > 0.0) {
            return Err(AccountError::NonPositiveDeposit { amount });
        }
        self.balance += amount;
        Ok(self.balance)
    }

    fn withdraw(&mut self, amount: f64, _pin: &str) -> Result<f64, AccountError> {
        if !(amount.is_finite() && amount > 0.0 && amount <= self.balance) {
            return Err(AccountError::InvalidWithdrawal {
                amount,
                balance: self.balance,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }

    fn balance(&self, _pin: &str) -> Result<f64, AccountError> {
        Ok(self.balance)
    }
}

pub struct BankAccountProxy {
    real_account: RealBankAccount,
    pin: String,
}

impl BankAccountProxy {
    pub fn new(initial_balance: f64, pin: impl Into<String>) -> Self {
        Self {
            real_account: RealBankAccount::new(initial_balance),
            pin: pin.into(),
        }
    }

    pub fn authenticate(&self, pin: &str) -> bool {
        pin == self.pin
    }

    fn guard(&self, pin: &str, operation: &'static str) -> Result<(), AccountError> {
        if self.authenticate(pin) {
            Ok(())
        } else {
            tracing::warn!(operation, "authentication failed");
            Err(AccountError::AuthenticationFailed { operation })
        }
    }
}

impl BankAccount for BankAccountProxy {
    fn deposit(&mut self, amount: f64, pin: &str) -> Result<f64, AccountError> {
        self.guard(pin, "deposit")?;
        self.real_account.deposit(amount, pin)
    }

    fn withdraw(&mut self, amount: f64, pin: &str) -> Result<f64, AccountError> {
        self.guard(pin, "withdraw")?;
        self.real_account.withdraw(amount, pin)
    }

    fn balance(&self, pin: &str) -> Result<f64, AccountError> {
        self.guard(pin, "retrieve balance")?;
        self.real_account.balance(pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIN: &str = "1234";

    #[test]
    fn test_deposit_and_withdraw_with_correct_pin() {
        let mut account = BankAccountProxy::new(100.0, PIN);
        assert_eq!(account.deposit(50.0, PIN), Ok(150.0));
        assert_eq!(account.withdraw(30.0, PIN), Ok(120.0));
        assert_eq!(account.balance(PIN), Ok(120.0));
    }

    #[test]
    fn test_wrong_pin_refused_and_balance_unchanged() {
        let mut account = BankAccountProxy::new(100.0, PIN);

        assert_eq!(
            account.deposit(20.0, "wrong_pin"),
            Err(AccountError::AuthenticationFailed { operation: "deposit" })
        );
        assert!(matches!(
            account.withdraw(20.0, "wrong_pin"),
            Err(AccountError::AuthenticationFailed { .. })
        ));
        assert!(matches!(
            account.balance("wrong_pin"),
            Err(AccountError::AuthenticationFailed { .. })
        ));
        assert_eq!(account.balance(PIN), Ok(100.0));
    }

    #[test]
    fn test_overdraw_refused() {
        let mut account = BankAccountProxy::new(120.0, PIN);
        assert!(matches!(
            account.withdraw(150.0, PIN),
            Err(AccountError::InvalidWithdrawal { .. })
        ));
        assert_eq!(account.balance(PIN), Ok(120.0));
    }

    #[test]
    fn test_withdraw_entire_balance() {
        let mut account = BankAccountProxy::new(40.0, PIN);
        assert_eq!(account.withdraw(40.0, PIN), Ok(0.0));
    }

    #[test]
    fn test_non_positive_amounts_refused() {
        let mut account = RealBankAccount::new(10.0);
        assert!(matches!(
            account.deposit(0.0, ""),
            Err(AccountError::NonPositiveDeposit { .. })
        ));
        assert!(account.deposit(-5.0, "").is_err());
        assert!(account.withdraw(-5.0, "").is_err());
        assert_eq!(account.balance(""), Ok(10.0));
    }

    #[test]
    fn test_non_finite_amounts_refused() {
        let mut account = BankAccountProxy::new(100.0, PIN);
        assert!(matches!(
            account.deposit(f64::INFINITY, PIN),
            Err(AccountError::NonPositiveDeposit { .. })
        ));
        assert!(account.deposit(f64::NAN, PIN).is_err());
        assert!(matches!(
            account.withdraw(f64::INFINITY, PIN),
            Err(AccountError::InvalidWithdrawal { .. })
        ));
        assert!(account.withdraw(f64::NAN, PIN).is_err());

        assert_eq!(account.withdraw(5.0, PIN), Ok(95.0));
        assert_eq!(account.balance(PIN), Ok(95.0));
    }

    #[test]
    fn test_proxy_usable_as_trait_object() {
        let mut account: Box<dyn BankAccount> = Box::new(BankAccountProxy::new(0.0, PIN));
        account.deposit(5.0, PIN).unwrap();
        assert_eq!(account.balance(PIN), Ok(5.0));
    }
}
