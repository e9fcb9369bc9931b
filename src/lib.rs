pub mod shared {
    pub mod infrastructure {
        pub mod backend;
    }
}

pub mod modules {
    pub mod issues {
        pub mod core {
            pub mod aggregate;
            pub mod issue;
            pub mod notification;
            pub mod profile;
            pub mod views;
        }
        pub mod use_cases {
            pub mod report_issue {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_issue {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_issues {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod cast_vote {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod transition;
            }
            pub mod view_dashboard {
                pub mod charts;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod panel;
                pub mod selection;
            }
            pub mod view_profile {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
