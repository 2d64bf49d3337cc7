/// Route component constants shared across crates
pub const CONTACT_ROUTE_COMPONENT: &str = "contact";
pub const CONTACT_FILE_COMPONENT: &str = const_str::concat!(CONTACT_ROUTE_COMPONENT, ".vcf");
pub const CONTACT_FILE_ROUTE: &str = const_str::concat!("/", CONTACT_FILE_COMPONENT);

pub const CONTACT_OPEN_COMPONENT: &str = "open";
pub const CONTACT_OPEN_ROUTE: &str =
    const_str::concat!("/", CONTACT_ROUTE_COMPONENT, "/", CONTACT_OPEN_COMPONENT);

pub const BLOB_ROUTE_COMPONENT: &str = "blob";
pub const BLOB_ROUTE_PREFIX: &str = const_str::concat!("/", BLOB_ROUTE_COMPONENT);

pub const PROFILE_IMAGE_COMPONENT: &str = "profile-image";
pub const PROFILE_IMAGE_ROUTE: &str = const_str::concat!("/", PROFILE_IMAGE_COMPONENT);

/// Media type attached to serialized vCards.
pub const VCARD_MEDIA_TYPE: &str = "text/vcard";
/// `Content-Type` header value sent with vCard bodies.
pub const VCARD_CONTENT_TYPE: &str = const_str::concat!(VCARD_MEDIA_TYPE, "; charset=utf-8");
/// File extension of downloaded contact files.
pub const VCARD_EXTENSION: &str = "vcf";
