pub mod application {
    pub mod collection {
        pub mod add;
        pub mod remove;
    }
    pub mod ingredient {
        pub mod get_by_id;
        pub mod import;
        pub mod search;
    }
    pub mod recipe {
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod list;
        pub mod update;
    }
    pub mod shopping_cart {
        pub mod download;
    }
    pub mod subscription {
        mod feed;
        pub mod list;
        pub mod subscribe;
        pub mod unsubscribe;
    }
    pub mod tag {
        pub mod get_all;
        pub mod get_by_id;
    }
    pub mod user {
        pub mod get_profile;
        pub mod upsert_profile;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod collection {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod remove;
        }
    }
    pub mod ingredient {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_by_id;
            pub mod import;
            pub mod search;
        }
    }
    pub mod recipe {
        pub mod errors;
        pub mod model;
        pub mod projection;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod list;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
    pub mod shopping_cart {
        pub mod aggregation;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod download;
        }
    }
    pub mod subscription {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod list;
            pub mod subscribe;
            pub mod unsubscribe;
        }
    }
    pub mod tag {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_profile;
            pub mod upsert_profile;
        }
    }
}
