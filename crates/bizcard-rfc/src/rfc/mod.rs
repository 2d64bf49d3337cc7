pub mod link;
pub mod vcard;
