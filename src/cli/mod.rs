pub mod completions;
pub mod init;
pub mod list;
pub mod remove;
pub mod set_folder;
pub mod set_host;
pub mod show;
