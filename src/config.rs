/// Application-level constants
pub const APP_NAME: &str = "Drepana";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default bind address for the HTTP API.
pub const DEFAULT_BIND: &str = "127.0.0.1:8750";

/// Maximum accepted chat message length (characters).
pub const MAX_MESSAGE_CHARS: usize = 2000;

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    #[test]
    fn app_name_is_drepana() {
        assert_eq!(APP_NAME, "Drepana");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn default_bind_is_a_valid_socket_address() {
        let addr: SocketAddr = DEFAULT_BIND.parse().unwrap();
        assert_eq!(addr.port(), 8750);
    }
}
