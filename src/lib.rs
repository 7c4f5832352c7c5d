// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod shared {
    pub mod infrastructure {
        pub mod event_store;
        pub mod mailer;
        pub mod media_store;
    }
}

pub mod modules {
    pub mod gatherings {
        pub mod core {
            pub mod capacity;
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod projections;
            pub mod state;
        }
        pub mod adapters {
            pub mod projections;
            pub mod projections_in_memory;
        }
        pub mod handler;
        pub mod projector;
        pub mod queries;
        pub mod use_cases {
            pub mod respond;

            pub mod create_gathering {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_gathering {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod remove_gathering {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod add_time_slot {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_time_slot {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod remove_time_slot {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod place_reservation {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod change_reservation {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod cancel_reservation {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }

            pub mod browse_gatherings {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_reservations {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod lookup_reservation {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_guests {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod send_mailing {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod upload_media {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;

pub mod test_support {
    pub mod fixtures {
        pub mod commands;
        pub mod http;
        pub mod states;
    }
}
