// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod bill_store_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod bill_document_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod bills_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod bill;
        pub(crate) mod display_bill;
        pub(crate) mod handlers;
        pub(crate) mod routes;
        pub(crate) mod view_state;
    }
    pub(crate) mod logic {
        pub(crate) mod display_format;
    }
    pub(crate) mod repositories {
        pub(crate) mod bills_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod fetch_bills_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod bills_page_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::bill::*;
        pub use crate::domain::entities::display_bill::*;
        pub use crate::domain::entities::handlers::*;
        pub use crate::domain::entities::routes::*;
        pub use crate::domain::entities::view_state::*;
    }

    pub mod datasources {
        pub use crate::data::datasources::bill_store_datasource::BillStoreDatasource;
    }
}
