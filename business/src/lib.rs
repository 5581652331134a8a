pub mod application {
    pub mod product {
        pub mod catalog_service;
        pub mod list_view_model;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod sort;
    }
}
