//! Pure formatting of link telemetry for a small character display.
//!
//! Nothing here touches hardware or fails: values that do not fit the
//! display field are truncated best-effort.

use core::fmt::Write as _;

use heapless::String;

/// Character width of one display line.
pub const LINE_CHARS: usize = 20;

pub type StatusLine = String<LINE_CHARS>;

/// Live link telemetry, read from the radio at the moment it is shown.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StatusSnapshot {
    pub ssid: &'static str,
    pub address: [u8; 4],
    pub rssi_dbm: i32,
}

/// Four display lines; unused lines stay blank.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StatusLines {
    pub lines: [StatusLine; 4],
}

impl StatusLines {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_texts(texts: [&str; 4]) -> Self {
        let mut out = Self::new();
        for (line, text) in out.lines.iter_mut().zip(texts) {
            push_truncated(line, text);
        }
        out
    }
}

/// Display surface seam. Implementations must tolerate blank lines and
/// must not fail.
pub trait StatusPanel {
    fn show(&mut self, lines: &StatusLines);
}

/// Telemetry summary: identifier, dotted-quad address, signal strength.
pub fn telemetry_lines(snapshot: &StatusSnapshot) -> StatusLines {
    let mut out = StatusLines::new();

    push_truncated(&mut out.lines[0], "SSID: ");
    push_truncated(&mut out.lines[0], snapshot.ssid);

    let [a, b, c, d] = snapshot.address;
    let _ = write!(out.lines[1], "IP: {}.{}.{}.{}", a, b, c, d);

    let _ = write!(out.lines[3], "RSSI: {} dBm", snapshot.rssi_dbm);

    out
}

pub fn connecting_lines(ssid: &str) -> StatusLines {
    StatusLines::from_texts(["Connecting to", ssid, "", ""])
}

pub fn radio_absent_lines() -> StatusLines {
    StatusLines::from_texts(["Comms with WiFi", "module failed!", "", "Halting"])
}

pub fn firmware_warning_lines() -> StatusLines {
    StatusLines::from_texts(["Old wifi firmware", "Please upgrade", "", ""])
}

fn push_truncated(line: &mut StatusLine, text: &str) {
    for ch in text.chars() {
        if line.push(ch).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn telemetry_formats_all_fields() {
        let lines = telemetry_lines(&StatusSnapshot {
            ssid: "workshop",
            address: [10, 0, 4, 17],
            rssi_dbm: -67,
        });
        assert_eq!(lines.lines[0].as_str(), "SSID: workshop");
        assert_eq!(lines.lines[1].as_str(), "IP: 10.0.4.17");
        assert_eq!(lines.lines[2].as_str(), "");
        assert_eq!(lines.lines[3].as_str(), "RSSI: -67 dBm");
    }

    #[test]
    fn telemetry_is_total_on_boundary_values() {
        let lines = telemetry_lines(&StatusSnapshot {
            ssid: "",
            address: [0, 255, 0, 255],
            rssi_dbm: i32::MIN,
        });
        assert_eq!(lines.lines[0].as_str(), "SSID: ");
        assert_eq!(lines.lines[1].as_str(), "IP: 0.255.0.255");
        // i32::MIN does not fit the field; best-effort prefix survives.
        assert!(lines.lines[3].as_str().starts_with("RSSI: -"));
        assert!(lines.lines[3].len() <= LINE_CHARS);
    }

    #[test]
    fn long_identifier_is_truncated_to_field_width() {
        let lines = connecting_lines("a-network-name-well-beyond-the-display-width");
        assert_eq!(lines.lines[1].len(), LINE_CHARS);
        assert!(lines.lines[1].as_str().starts_with("a-network-name"));
    }

    #[test]
    fn fatal_and_warning_lines_fit_the_panel() {
        for lines in [radio_absent_lines(), firmware_warning_lines()] {
            assert!(lines.lines.iter().all(|line| line.len() <= LINE_CHARS));
        }
        assert_eq!(radio_absent_lines().lines[3].as_str(), "Halting");
        assert_eq!(firmware_warning_lines().lines[2].as_str(), "");
    }
}
