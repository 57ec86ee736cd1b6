pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod add_vas_item;
        pub mod display;
        pub mod remove_item;
        pub mod reset;
    }
}

pub mod domain {
    pub mod logger;
    pub mod cart {
        pub mod constants;
        pub mod errors;
        pub mod item;
        pub mod model;
        pub mod promotion;
        pub mod validator;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add_item;
            pub mod add_vas_item;
            pub mod display;
            pub mod remove_item;
            pub mod reset;
        }
    }
}
