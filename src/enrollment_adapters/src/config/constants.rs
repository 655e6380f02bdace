pub mod env {
    pub const ENV_PREFIX: &str = "ENROLLMENT";
    pub const ENV_SEPARATOR: &str = "__";
    pub const SERVER_ADDRESS_ENV_VAR: &str = "ENROLLMENT__SERVER__ADDRESS";
    pub const ALLOWED_ORIGINS_ENV_VAR: &str = "ENROLLMENT__SERVER__ALLOWED_ORIGINS";
    pub const LOG_FILTER_ENV_VAR: &str = "ENROLLMENT__LOG__FILTER";
}

pub const CONFIG_FILE: &str = "config/base";
pub const DEFAULT_LOG_FILTER: &str = "info";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
