use chrono::Local;

use liturgia_core::CanonicalDate;

/// Source of "today" for operations that default their date.
pub trait Clock: Send + Sync {
    fn today(&self) -> CanonicalDate;
}

/// The process-local calendar day.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CanonicalDate {
        CanonicalDate::saturating_from(Local::now().date_naive())
    }
}

/// A clock stuck on one day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CanonicalDate);

impl Clock for FixedClock {
    fn today(&self) -> CanonicalDate {
        self.0
    }
}
