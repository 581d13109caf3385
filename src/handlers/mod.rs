pub mod command_payload;
pub mod token;
