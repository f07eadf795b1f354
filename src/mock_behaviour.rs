//! This module provides ways to tweak a mocked event source, so that it can return errors on some tests

use std::error::Error;

/// This stores some behaviour tweaks, that describe how a mocked instance will behave during a given test
///
/// So that a functions fails _n_ times after _m_ initial successes, set `(m, n)` for the suited parameter
#[derive(Default, Clone, Debug)]
pub struct MockBehaviour {
    /// If this is true, every action will be allowed
    pub is_suspended: bool,

    pub get_events_behaviour: (u32, u32),
    pub create_event_behaviour: (u32, u32),
    pub update_event_behaviour: (u32, u32),
    pub delete_event_behaviour: (u32, u32),
}

impl MockBehaviour {
    pub fn new() -> Self {
        Self::default()
    }

    /// All actions will fail at once, for `n_fails` times
    pub fn fail_now(n_fails: u32) -> Self {
        Self {
            is_suspended: false,
            get_events_behaviour: (0, n_fails),
            create_event_behaviour: (0, n_fails),
            update_event_behaviour: (0, n_fails),
            delete_event_behaviour: (0, n_fails),
        }
    }

    /// Suspend this mock behaviour until you call `resume`
    pub fn suspend(&mut self) {
        self.is_suspended = true;
    }
    /// Make this behaviour active again
    pub fn resume(&mut self) {
        self.is_suspended = false;
    }

    pub fn can_get_events(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.get_events_behaviour, "get_events")
    }
    pub fn can_create_event(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.create_event_behaviour, "create_event")
    }
    pub fn can_update_event(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.update_event_behaviour, "update_event")
    }
    pub fn can_delete_event(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.delete_event_behaviour, "delete_event")
    }
}


/// Return Ok(()) in case the value is `(1+, _)` or `(_, 0)`, or return Err and decrement otherwise
fn decrement(value: &mut (u32, u32), descr: &str) -> Result<(), Box<dyn Error>> {
    let remaining_successes = value.0;
    let remaining_failures = value.1;

    if remaining_successes > 0 {
        value.0 -= 1;
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    } else if remaining_failures > 0 {
        value.1 -= 1;
        log::debug!("Mock behaviour: failing a {} ({:?})", descr, value);
        Err(format!("Mocked behaviour requires this {} to fail this time. ({:?})", descr, value).into())
    } else {
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_mock_behaviour() {
        let mut ok = MockBehaviour::new();
        for _ in 0..5 {
            assert!(ok.can_get_events().is_ok());
            assert!(ok.can_delete_event().is_ok());
        }

        let mut now = MockBehaviour::fail_now(2);
        assert!(now.can_get_events().is_err());
        assert!(now.can_create_event().is_err());
        assert!(now.can_create_event().is_err());
        assert!(now.can_get_events().is_err());
        assert!(now.can_get_events().is_ok());
        assert!(now.can_get_events().is_ok());
        assert!(now.can_create_event().is_ok());

        let mut custom = MockBehaviour{
            get_events_behaviour: (0,1),
            update_event_behaviour: (1,3),
            ..MockBehaviour::default()
        };
        assert!(custom.can_get_events().is_err());
        assert!(custom.can_get_events().is_ok());
        assert!(custom.can_update_event().is_ok());
        assert!(custom.can_update_event().is_err());
        assert!(custom.can_update_event().is_err());
        assert!(custom.can_update_event().is_err());
        assert!(custom.can_update_event().is_ok());
    }

    #[test]
    fn suspended_behaviour_allows_everything() {
        let mut behaviour = MockBehaviour::fail_now(1);
        behaviour.suspend();
        assert!(behaviour.can_delete_event().is_ok());
        behaviour.resume();
        assert!(behaviour.can_delete_event().is_err());
        assert!(behaviour.can_delete_event().is_ok());
    }
}
