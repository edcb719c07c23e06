// Crate entry point. Declares and exposes modules so tests and the binary can import them.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod shared {
    pub mod core {
        pub mod clock;
    }
    pub mod infrastructure {
        pub mod auth_gate;
    }
}

pub mod modules {
    pub mod properties {
        pub mod core {
            pub mod decode;
            pub mod ports;
            pub mod record;
            pub mod validate;
            pub mod views;
        }
        pub mod controller;
        pub mod use_cases {
            pub mod load_records {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod create_record {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_record {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod remove_record {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_records {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod sign_out {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod in_memory_record_store;
            }
        }
    }
    pub mod session {
        pub mod inbound {
            pub mod http;
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod test_support {
    pub mod fixtures;
    pub mod inbound;
}
