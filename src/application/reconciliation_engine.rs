//! Read-modify-write rules for charges and settlements.
//!
//! Both functions run against a [`DebtLedger`] that is already bound to an
//! open transaction. They never commit or roll back themselves: returning
//! `Err` is what makes the caller's transaction roll back.

use tracing::debug;

use crate::domain::{
    errors::LedgerError,
    repositories::ledger::DebtLedger,
    value_objects::ledger::{Amount, DebtChange, DebtOutcome, LedgerPair, PaymentOutcome},
};

pub fn add_debt<L>(ledger: &mut L, pair: LedgerPair, amount: Amount) -> Result<DebtOutcome, LedgerError>
where
    L: DebtLedger + ?Sized,
{
    let previous_balance = ledger.current_debt(pair)?;
    let balance = DebtChange::after_charge(previous_balance, amount)?.balance();
    ledger.set_debt(pair, balance)?;

    debug!(%pair, previous_balance, balance, "ledger: debt accrued");

    Ok(DebtOutcome {
        photographer_id: pair.photographer_id,
        client_id: pair.client_id,
        previous_balance,
        balance,
    })
}

pub fn add_payment<L>(
    ledger: &mut L,
    pair: LedgerPair,
    amount: Amount,
) -> Result<PaymentOutcome, LedgerError>
where
    L: DebtLedger + ?Sized,
{
    let previous_balance = ledger.current_debt(pair)?;
    let change = DebtChange::after_payment(previous_balance, amount);
    match change {
        DebtChange::Clear => ledger.clear_debt(pair)?,
        DebtChange::Set(remainder) => ledger.set_debt(pair, remainder)?,
    }

    // The payment row always carries the full requested amount.
    let payment = ledger.append_payment(pair, amount)?;

    let applied = amount.get().min(previous_balance.max(0));
    let discarded = amount.get() - applied;
    debug!(
        %pair,
        previous_balance,
        applied,
        discarded,
        balance = change.balance(),
        "ledger: payment settled"
    );

    Ok(PaymentOutcome {
        photographer_id: pair.photographer_id,
        client_id: pair.client_id,
        previous_balance,
        applied,
        discarded,
        balance: change.balance(),
        payment,
    })
}
