//! Form drafts persisted to the local key-value store.
//!
//! Each form is declared once with `define_draft_form!`, which produces the
//! form type, an all-optional patch type, and the merge between them. A
//! [`FormDraftStore`] then keeps one form's state in sync with storage under
//! the key `form_<name>`.

mod forms;
mod key;
mod macros;
mod store;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub(crate) use macros::define_draft_form;

pub use forms::{
    BillPaymentForm, BillPaymentPatch, GiftCardForm, GiftCardPatch, HotelBookingForm,
    HotelBookingPatch, TransferForm, TransferPatch,
};
pub use key::{DRAFT_KEY_PREFIX, DraftKey, FORM_NAME_MAX_LEN, FormName, FormNameValidationError};
pub use store::{Draft, FormDraftStore, clear_all_drafts};

/// A form whose in-progress state can be drafted.
pub trait DraftForm: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Partial update where every field is optional.
    type Patch: DeserializeOwned;

    /// Overwrite each field present in `patch`, leaving the rest untouched.
    fn merge(&mut self, patch: Self::Patch);
}
