//! Testing utilities for the booru image viewer

pub mod host;
pub mod robot;
pub mod robot_assertions;

pub use host::RecordingHost;
pub use robot::*;

pub mod prelude {
    pub use crate::host::RecordingHost;
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}
