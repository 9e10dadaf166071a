mod board_server;
pub use board_server::BoardServer;

mod server_config;
pub use server_config::ServerConfig;
