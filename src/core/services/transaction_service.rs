//! Transaction append logic and the balance invariant.

use crate::domain::{Profile, Transaction, TransactionDraft};

pub struct TransactionService;

impl TransactionService {
    /// Appends a transaction built from `draft` and returns the updated
    /// profile. The input profile is untouched.
    ///
    /// Two composed steps keep the category invariant auditable: the
    /// draft's category is ensured in the category list first, then the
    /// completed transaction is prepended (newest-first ordering). The
    /// balance moves by the transaction's signed amount, so it stays equal
    /// to income total minus expense total.
    pub fn add(profile: &Profile, draft: TransactionDraft) -> Profile {
        let mut updated = profile.clone();
        updated.ensure_category(&draft.category);

        let transaction = Transaction::from_draft(draft);
        updated.balance += transaction.signed_amount();
        updated.transactions.insert(0, transaction);
        updated
    }
}
