//! Shared test utilities for shell tests.

use std::cell::RefCell;
use std::rc::Rc;

use atrium_types::error::{AtriumError, Result};

use crate::services::{LinkService, TimeService, WallTime};

/// Mock link service recording opened URLs, optionally failing. The log is
/// shared so tests keep a handle after boxing the service into the
/// controller.
pub struct MockLinkService {
    log: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl MockLinkService {
    pub fn new() -> (Self, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                log: Rc::clone(&log),
                fail: false,
            },
            log,
        )
    }

    pub fn failing() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
            fail: true,
        }
    }
}

impl LinkService for MockLinkService {
    fn open(&mut self, url: &str) -> Result<()> {
        if self.fail {
            return Err(AtriumError::Service("opener unavailable".into()));
        }
        self.log.borrow_mut().push(url.to_string());
        Ok(())
    }
}

/// Mock time service with a fixed readout.
pub struct MockTimeService {
    pub time: WallTime,
}

impl MockTimeService {
    pub fn at(hour: u8, minute: u8) -> Self {
        Self {
            time: WallTime {
                hour,
                minute,
                second: 0,
            },
        }
    }
}

impl TimeService for MockTimeService {
    fn now(&self) -> Result<WallTime> {
        Ok(self.time)
    }
}
