pub mod env {
    pub const ENV_PREFIX: &str = "LATCHKEY";
    pub const ENV_SEPARATOR: &str = "__";
}

pub const SERVICE_NAME: &str = "auth-api";
pub const SERVICE_TITLE: &str = "Authentication API";

pub mod files {
    pub const DEFAULT_CONFIG: &str = "config/default";
    pub const LOCAL_CONFIG: &str = "config/local";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:8000";

    pub mod hashing {
        pub const MEMORY_KIB: u32 = 15000;
        pub const ITERATIONS: u32 = 2;
        pub const PARALLELISM: u32 = 1;
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";

    pub mod hashing {
        pub const MEMORY_KIB: u32 = 1024;
        pub const ITERATIONS: u32 = 1;
        pub const PARALLELISM: u32 = 1;
    }
}
