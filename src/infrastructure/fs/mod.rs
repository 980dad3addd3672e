//! File System Implementations

mod home;
mod local;

pub use home::{lessonpack_home_dir, user_config_path, TEST_HOME_VAR};
pub use local::LocalFs;
