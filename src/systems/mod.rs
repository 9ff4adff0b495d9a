//! Systems that mutate sprite state: motion, pointer drag and capture.

pub mod capture;
pub mod drag;
pub mod kinematics;
