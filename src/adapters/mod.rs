pub mod environments_file;
pub mod juju_command;

pub use environments_file::EnvironmentsFile;
pub use juju_command::JujuCommandClient;
