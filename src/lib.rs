pub mod errors;
pub mod m3u_parser;
pub mod models;
pub mod utils;
pub mod xmltv_generator;
