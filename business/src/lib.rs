pub mod application {
    pub mod logo {
        pub mod fetch_domain_logo;
        pub mod lookup_bin;
        pub mod resolve_batch;
        pub mod resolve_by_card;
        pub mod resolve_by_name;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod logo {
        pub mod cache;
        pub mod chain;
        pub mod domain_guess;
        pub mod errors;
        pub mod model;
        pub mod placeholder;
        pub mod services;
        pub mod strategies;
        pub mod value_objects;
        pub mod use_cases {
            pub mod fetch_domain_logo;
            pub mod lookup_bin;
            pub mod resolve_batch;
            pub mod resolve_by_card;
            pub mod resolve_by_name;
        }
    }
}
