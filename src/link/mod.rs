//! Wireless link abstraction and association state.

mod supervisor;

pub mod mock;


pub use supervisor::{ASSOCIATE_DWELL_MS, ConnectionSupervisor, REAFFIRM_DWELL_MS};

/// Health of the station's association with the network.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LinkState {
    Unassociated,
    NoRadioHardware,
    Associated,
}

/// Network credentials supplied once at startup.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Credentials {
    pub ssid: &'static str,
    pub secret: &'static str,
}

impl Credentials {
    pub const fn new(ssid: &'static str, secret: &'static str) -> Self {
        Self { ssid, secret }
    }
}

/// Radio module firmware revision.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct FirmwareVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl FirmwareVersion {
    /// Oldest revision known to associate reliably. Older firmware still
    /// gets a connection attempt, just with a warning.
    pub const MIN_SUPPORTED: Self = Self::new(0, 3, 0);

    pub const fn new(major: u8, minor: u8, patch: u8) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

/// Opaque driver status code from an association attempt.
///
/// The radio driver does not reliably distinguish bad credentials from
/// transient radio faults, so the supervisor logs this code and never
/// branches on it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct JoinStatus(pub i8);

/// Polled wireless radio seam.
pub trait RadioLink {
    fn hardware_present(&mut self) -> bool;
    fn firmware_version(&mut self) -> FirmwareVersion;
    fn begin_association(&mut self, credentials: &Credentials) -> JoinStatus;
    fn link_state(&mut self) -> LinkState;
    fn assigned_address(&mut self) -> [u8; 4];
    fn signal_strength_dbm(&mut self) -> i32;
}

/// Terminal conditions for association bring-up.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LinkError {
    /// Network identifier is empty; nothing to associate with.
    MissingCredentials,
    /// Radio module absent or unresponsive. The caller decides whether
    /// to park the device; the condition never clears on its own.
    RadioAbsent,
}

/// Outcome of a successful bring-up.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AssociationReport {
    /// Association attempts made before the link came up.
    pub attempts: u32,
    /// Whether the radio firmware was below the supported minimum.
    pub firmware_outdated: bool,
}
