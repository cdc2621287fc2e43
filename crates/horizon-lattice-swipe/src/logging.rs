//! Logging targets for swipe actions.
//!
//! The crate logs through `tracing`. Nothing is printed unless the host
//! installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_lattice_swipe=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Crate root target.
    pub const SWIPE: &str = "horizon_lattice_swipe";
    /// Interaction state machine target.
    pub const CONTROLLER: &str = "horizon_lattice_swipe::controller";
    /// Pointer translation target.
    pub const POINTER: &str = "horizon_lattice_swipe::pointer";
    /// Facade and listener dispatch target.
    pub const CALLBACK: &str = "horizon_lattice_swipe::callback";
}
