//! bizcard contact card server - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `bizcard_test::` paths.

pub mod component {
    pub use bizcard_core::*;

    pub mod delivery {
        pub use bizcard_service::delivery::*;
    }

    pub mod image {
        pub use bizcard_service::image::*;
    }

    // Re-export config from both core and app
    pub mod config {
        pub use bizcard_app::config::{ConfigHandler, get_config_from_depot};
        pub use bizcard_core::config::*;
    }
}

pub mod app {
    pub use bizcard_app::*;
}

pub use bizcard_rfc as rfc;
