//! Host service traits and desktop implementations.

use atrium_types::error::{AtriumError, Result};

// ---------------------------------------------------------------------------
// Link service
// ---------------------------------------------------------------------------

/// Abstraction over opening an external URL in a new browsing context.
pub trait LinkService {
    /// Open the URL. Must not block on the opened context.
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Desktop implementation that hands the URL to the platform opener.
#[derive(Debug, Default)]
pub struct DesktopLinkService;

impl DesktopLinkService {
    pub fn new() -> Self {
        Self
    }

    fn opener() -> &'static str {
        if cfg!(target_os = "macos") {
            "open"
        } else if cfg!(target_os = "windows") {
            "explorer"
        } else {
            "xdg-open"
        }
    }
}

impl LinkService for DesktopLinkService {
    fn open(&mut self, url: &str) -> Result<()> {
        let opener = Self::opener();
        std::process::Command::new(opener)
            .arg(url)
            .spawn()
            .map(|_| ())
            .map_err(|e| AtriumError::Service(format!("{opener} failed for {url}: {e}")))
    }
}

// ---------------------------------------------------------------------------
// Time service
// ---------------------------------------------------------------------------

/// A wall-clock time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl std::fmt::Display for WallTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Abstraction over wall-clock time.
pub trait TimeService {
    /// Current time of day.
    fn now(&self) -> Result<WallTime>;
}

/// `std`-backed time service. UTC breakdown only; the taskbar clock does
/// not attempt timezone handling.
#[derive(Debug, Default)]
pub struct SystemTimeService;

impl SystemTimeService {
    pub fn new() -> Self {
        Self
    }
}

impl TimeService for SystemTimeService {
    fn now(&self) -> Result<WallTime> {
        use std::time::SystemTime as StdTime;
        let dur = StdTime::now()
            .duration_since(StdTime::UNIX_EPOCH)
            .unwrap_or_default();
        let time_of_day = dur.as_secs() % 86400;
        Ok(WallTime {
            hour: (time_of_day / 3600) as u8,
            minute: ((time_of_day % 3600) / 60) as u8,
            second: (time_of_day % 60) as u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockLinkService, MockTimeService};

    #[test]
    fn wall_time_display_zero_padding() {
        let t = WallTime {
            hour: 9,
            minute: 3,
            second: 7,
        };
        assert_eq!(t.to_string(), "09:03:07");
    }

    #[test]
    fn system_time_service_in_range() {
        let svc = SystemTimeService::new();
        let t = svc.now().unwrap();
        assert!(t.hour < 24);
        assert!(t.minute < 60);
        assert!(t.second < 60);
    }

    #[test]
    fn mock_time_service_fixed() {
        let svc = MockTimeService::at(14, 30);
        assert_eq!(svc.now().unwrap().hour, 14);
    }

    #[test]
    fn opener_is_nonempty() {
        assert!(!DesktopLinkService::opener().is_empty());
    }

    #[test]
    fn mock_link_service_records() {
        let (mut svc, log) = MockLinkService::new();
        svc.open("https://example.com/").unwrap();
        assert_eq!(*log.borrow(), vec!["https://example.com/".to_string()]);
    }

    #[test]
    fn mock_link_service_failure() {
        let mut svc = MockLinkService::failing();
        assert!(svc.open("https://example.com/").is_err());
    }
}
