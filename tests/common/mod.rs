use std::cell::RefCell;
use std::rc::Rc;

use layer_led_indicator::{Rgb, StripDriver};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Frames written to a [`MockStrip`], shared so it can be inspected after
/// the strip was moved into the code under test
pub type WriteLog = Rc<RefCell<Vec<Vec<Rgb>>>>;

/// Strip that records every frame written to it
#[derive(Debug, Default)]
pub struct MockStrip {
    pub ready: bool,
    /// Status returned by the next writes, `None` for success
    pub fail_with: Option<i32>,
    log: WriteLog,
}

impl MockStrip {
    pub fn ready() -> Self {
        Self {
            ready: true,
            ..Self::default()
        }
    }

    pub fn not_ready() -> Self {
        Self::default()
    }

    /// Handle to the write log that outlives the strip
    pub fn log(&self) -> WriteLog {
        Rc::clone(&self.log)
    }

    pub fn writes(&self) -> Vec<Vec<Rgb>> {
        self.log.borrow().clone()
    }

    pub fn write_count(&self) -> usize {
        self.log.borrow().len()
    }

    pub fn last_write(&self) -> Option<Vec<Rgb>> {
        self.log.borrow().last().cloned()
    }
}

impl StripDriver for MockStrip {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn write(&mut self, pixels: &[Rgb]) -> Result<(), i32> {
        if let Some(code) = self.fail_with {
            return Err(code);
        }
        self.log.borrow_mut().push(pixels.to_vec());
        Ok(())
    }
}
