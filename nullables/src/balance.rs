//! Nullable balance source.

use disperse_types::{EvmAddress, NativeAmount};
use disperse_wallet_core::{BalanceSource, WalletError};
use std::cell::RefCell;
use std::collections::HashMap;

/// Balances held in memory. Unknown accounts hold zero unless the source
/// is set to fail.
pub struct NullBalance {
    balances: RefCell<HashMap<EvmAddress, NativeAmount>>,
    failure: RefCell<Option<String>>,
}

impl NullBalance {
    pub fn new() -> Self {
        Self {
            balances: RefCell::new(HashMap::new()),
            failure: RefCell::new(None),
        }
    }

    pub fn set(&self, account: &EvmAddress, balance: NativeAmount) {
        self.balances.borrow_mut().insert(account.clone(), balance);
    }

    /// Make every lookup fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.borrow_mut() = Some(message.into());
    }

    pub fn recover(&self) {
        *self.failure.borrow_mut() = None;
    }
}

impl Default for NullBalance {
    fn default() -> Self {
        Self::new()
    }
}

impl BalanceSource for NullBalance {
    async fn balance(&self, account: &EvmAddress) -> Result<NativeAmount, WalletError> {
        if let Some(message) = self.failure.borrow().as_ref() {
            return Err(WalletError::Rpc(message.clone()));
        }
        Ok(self
            .balances
            .borrow()
            .get(account)
            .copied()
            .unwrap_or(NativeAmount::ZERO))
    }
}
