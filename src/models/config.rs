use serde::Deserialize;

#[derive(Clone, Deserialize)]
pub struct Config {
    pub catalogue: CatalogueConfig,
    pub server: ServerConfig,
}

#[derive(Clone, Deserialize)]
pub struct CatalogueConfig {
    pub directory: String,
}

#[derive(Clone, Deserialize)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
    /// Upper bound for the artificial latency injected before serving a random
    /// joke. Set to 0 to disable the delay entirely.
    #[serde(default = "default_simulated_delay_max_millis")]
    pub simulated_delay_max_millis: u64,
}

fn default_simulated_delay_max_millis() -> u64 {
    1000
}

impl ServerConfig {
    pub fn get_socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::V4(std::net::SocketAddrV4::new(
            self.ip.parse().unwrap(),
            self.port,
        ))
    }
}
