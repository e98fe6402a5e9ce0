//! Application forms whose progress survives reloads.
//!
//! Field values are held as typed by the user. Amounts stay strings until
//! submission so a half-typed `"1,2"` can be restored exactly.

use super::define_draft_form;

define_draft_form! {
    /// Bank transfer to another account.
    pub struct TransferForm / TransferPatch {
        /// Recipient name as resolved from the account lookup.
        recipient: String,
        /// Destination account number.
        account_number: String,
        /// Destination bank code.
        bank_code: String,
        /// Amount as typed.
        amount: String,
        /// Optional note shown on the recipient's statement.
        narration: String,
    }
}

define_draft_form! {
    /// Utility or subscription bill payment.
    pub struct BillPaymentForm / BillPaymentPatch {
        /// Biller identifier, such as an electricity distributor.
        biller: String,
        /// Meter, smartcard, or phone number.
        customer_id: String,
        /// Amount as typed.
        amount: String,
        /// Selected bundle or package, if the biller offers them.
        package_code: String,
    }
}

define_draft_form! {
    /// Gift card purchase.
    pub struct GiftCardForm / GiftCardPatch {
        /// Gift card brand.
        brand: String,
        /// Country the card is redeemable in.
        country_code: String,
        /// Face value as typed.
        denomination: String,
        /// Number of cards.
        quantity: u32,
        /// Where the codes are delivered.
        recipient_email: String,
    }
}

define_draft_form! {
    /// Hotel search and booking.
    pub struct HotelBookingForm / HotelBookingPatch {
        /// Destination city.
        city: String,
        /// Check-in date as typed.
        check_in: String,
        /// Check-out date as typed.
        check_out: String,
        /// Number of guests.
        guests: u32,
        /// Number of rooms.
        rooms: u32,
    }
}

impl TransferForm {
    /// Form name the transfer screen stores its draft under.
    pub const NAME: &'static str = "transfer";
}

impl BillPaymentForm {
    /// Form name the bill payment screen stores its draft under.
    pub const NAME: &'static str = "bill-payment";
}

impl GiftCardForm {
    /// Form name the gift card screen stores its draft under.
    pub const NAME: &'static str = "gift-card";
}

impl HotelBookingForm {
    /// Form name the hotel booking screen stores its draft under.
    pub const NAME: &'static str = "hotel-booking";
}
