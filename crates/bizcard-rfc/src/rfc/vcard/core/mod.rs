//! Core vCard types.

mod contact;
mod parameter;
mod property;
mod structured;
mod value;
mod vcard;

pub use contact::ContactRecord;
pub use parameter::{VCardParameter, types};
pub use property::{VCardProperty, names};
pub use structured::Address;
pub use value::VCardValue;
pub use vcard::{VCard, VCardVersion};
