use super::{Credentials, FirmwareVersion, JoinStatus, LinkState, RadioLink};

/// No-hardware radio used during bring-up.
#[derive(Debug, Clone, Copy)]
pub struct MockRadio {
    joined: bool,
}

impl MockRadio {
    pub const fn new() -> Self {
        Self { joined: false }
    }
}

impl Default for MockRadio {
    fn default() -> Self {
        Self::new()
    }
}

impl RadioLink for MockRadio {
    fn hardware_present(&mut self) -> bool {
        true
    }

    fn firmware_version(&mut self) -> FirmwareVersion {
        FirmwareVersion::MIN_SUPPORTED
    }

    fn begin_association(&mut self, _credentials: &Credentials) -> JoinStatus {
        self.joined = true;
        JoinStatus(0)
    }

    fn link_state(&mut self) -> LinkState {
        if self.joined {
            LinkState::Associated
        } else {
            LinkState::Unassociated
        }
    }

    fn assigned_address(&mut self) -> [u8; 4] {
        [192, 168, 0, 2]
    }

    fn signal_strength_dbm(&mut self) -> i32 {
        -40
    }
}
