//! Association bring-up and re-check loop.

use embedded_hal::delay::DelayNs;
use log::{debug, info, warn};

use super::{
    AssociationReport, Credentials, FirmwareVersion, LinkError, LinkState, RadioLink,
};
use crate::status::{self, StatusPanel, StatusSnapshot};

/// Dwell between bring-up attempts. Long enough to avoid hammering the
/// radio or a rate-limiting access point.
pub const ASSOCIATE_DWELL_MS: u32 = 5_000;
/// Dwell between re-check attempts after the link was once up.
pub const REAFFIRM_DWELL_MS: u32 = 2_000;

/// Drives the radio from [`LinkState::Unassociated`] to
/// [`LinkState::Associated`] and owns the link state thereafter.
///
/// The association loop is intentionally unbounded: the device has no
/// fallback path, so it keeps retrying until the link comes up or power
/// is cut. Dwell waits go through an injected [`DelayNs`] so hosts can
/// run the loop without wall-clock time.
pub struct ConnectionSupervisor<R: RadioLink> {
    radio: R,
    credentials: Credentials,
    state: LinkState,
}

impl<R: RadioLink> ConnectionSupervisor<R> {
    pub const fn new(radio: R, credentials: Credentials) -> Self {
        Self {
            radio,
            credentials,
            state: LinkState::Unassociated,
        }
    }

    pub const fn link_state(&self) -> LinkState {
        self.state
    }

    /// Initial bring-up: hardware check, firmware currency check, then
    /// the unbounded association loop.
    ///
    /// Returns only with the link associated, or with a terminal error
    /// the caller must resolve (there is no in-core recovery for an
    /// absent radio module).
    pub fn ensure_associated(
        &mut self,
        delay: &mut impl DelayNs,
        panel: &mut impl StatusPanel,
    ) -> Result<AssociationReport, LinkError> {
        if self.credentials.ssid.is_empty() {
            return Err(LinkError::MissingCredentials);
        }

        if !self.radio.hardware_present() {
            self.state = LinkState::NoRadioHardware;
            warn!("radio module absent; halting bring-up");
            panel.show(&status::radio_absent_lines());
            return Err(LinkError::RadioAbsent);
        }

        let firmware = self.radio.firmware_version();
        let firmware_outdated = firmware < FirmwareVersion::MIN_SUPPORTED;
        if firmware_outdated {
            warn!(
                "radio firmware {}.{}.{} below supported minimum",
                firmware.major, firmware.minor, firmware.patch
            );
            panel.show(&status::firmware_warning_lines());
        }

        let attempts = self.associate_until_joined(delay, panel, ASSOCIATE_DWELL_MS);
        panel.show(&status::telemetry_lines(&self.telemetry()));

        Ok(AssociationReport {
            attempts,
            firmware_outdated,
        })
    }

    /// Periodic health re-check after initial bring-up. Engages the
    /// retry loop only if the link has dropped; returns the attempts
    /// made (0 when still associated).
    pub fn reaffirm_association(
        &mut self,
        delay: &mut impl DelayNs,
        panel: &mut impl StatusPanel,
    ) -> u32 {
        self.associate_until_joined(delay, panel, REAFFIRM_DWELL_MS)
    }

    /// Live link telemetry, read from the radio at call time.
    pub fn telemetry(&mut self) -> StatusSnapshot {
        StatusSnapshot {
            ssid: self.credentials.ssid,
            address: self.radio.assigned_address(),
            rssi_dbm: self.radio.signal_strength_dbm(),
        }
    }

    fn associate_until_joined(
        &mut self,
        delay: &mut impl DelayNs,
        panel: &mut impl StatusPanel,
        dwell_ms: u32,
    ) -> u32 {
        let mut attempts = 0u32;

        self.state = self.radio.link_state();
        while self.state != LinkState::Associated {
            panel.show(&status::connecting_lines(self.credentials.ssid));
            let code = self.radio.begin_association(&self.credentials);
            attempts = attempts.saturating_add(1);
            debug!(
                "association attempt {} status_code={}",
                attempts, code.0
            );
            delay.delay_ms(dwell_ms);
            self.state = self.radio.link_state();
        }

        if attempts > 0 {
            info!("associated with {} after {} attempts", self.credentials.ssid, attempts);
        }
        attempts
    }
}
