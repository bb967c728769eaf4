pub mod api {
    pub mod error;
    pub mod security;
    pub mod tags;
    #[cfg(test)]
    pub(crate) mod test_support;

    pub mod collection {
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod health {
        pub mod routes;
    }
    pub mod ingredient {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod recipe {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod shopping_cart {
        pub mod error_mapper;
        pub mod export;
        pub mod routes;
    }
    pub mod subscription {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod tag {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod user {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}

pub mod config {
    pub mod app_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod error;
    pub mod jwt_config;
    pub mod server_config;
}

pub mod setup {
    pub mod dependency_injection;
    pub mod server;
}
