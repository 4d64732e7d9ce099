pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get_summary;
        pub mod remove_item;
        pub mod update_quantity;
    }
    pub mod catalog {
        pub mod get_by_id;
        pub mod search;
    }
    pub mod customer {
        pub mod register;
        pub mod update_profile;
    }
    pub mod industry {
        pub mod register;
        pub mod update_profile;
    }
    pub mod order {
        pub mod get_all;
        pub mod get_by_id;
        pub mod place;
        pub mod update_status;
    }
    pub mod pickup {
        pub mod cancel;
        pub mod create;
        pub mod get_all;
        pub mod update_status;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod services;
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod pricing;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get_summary;
            pub mod remove_item;
            pub mod update_quantity;
        }
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_by_id;
            pub mod search;
        }
    }
    pub mod customer {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod register;
            pub mod update_profile;
        }
    }
    pub mod industry {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod register;
            pub mod update_profile;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod place;
            pub mod update_status;
        }
    }
    pub mod pickup {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod cancel;
            pub mod create;
            pub mod get_all;
            pub mod update_status;
        }
    }
}
