//! Feature slices mounted into the server-rendered back office pages.
pub mod deletion;
pub mod logout;
pub mod postcode;
pub mod stickers;
pub mod telephone;
