pub mod impl_console;
pub mod init;
pub mod interface;
pub mod timer;
