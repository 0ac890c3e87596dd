pub mod init;
pub mod install;
