pub mod init;
pub mod kinds;
pub mod new;
pub mod render;
