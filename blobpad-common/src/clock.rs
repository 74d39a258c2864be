use std::time::SystemTime;

/// Time source for the server. Real time in production; tests pin it to a
/// fixed instant so responses containing durations are deterministic.
#[derive(Debug, Clone, Default)]
pub struct Clock {
    fixed_time: Option<SystemTime>,
}

impl Clock {
    pub fn new() -> Self {
        Self { fixed_time: None }
    }

    pub fn new_with_fixed_time(fixed_time: SystemTime) -> Self {
        Self {
            fixed_time: Some(fixed_time),
        }
    }

    pub fn now(&self) -> SystemTime {
        self.fixed_time.unwrap_or_else(SystemTime::now)
    }
}
