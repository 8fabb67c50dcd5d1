//! Honeypot engagement sessions.

/// An active conversation with a scammer, run by the honeypot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoneypotSession {
    pub id: String,
    /// Scammer display name shown in the session header
    pub name: String,
    pub messages_exchanged: u32,
    /// Status dot; cleared when the session is ended
    pub status_active: bool,
    /// Rendered dimmed once ended
    pub faded: bool,
}

impl HoneypotSession {
    pub fn new(id: impl Into<String>, name: impl Into<String>, messages_exchanged: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            messages_exchanged,
            status_active: true,
            faded: false,
        }
    }

    /// Mark the session ended.
    pub fn end(&mut self) {
        self.status_active = false;
        self.faded = true;
    }
}

pub fn demo_sessions() -> Vec<HoneypotSession> {
    vec![
        HoneypotSession::new("session-1", "Prince Adewale", 14),
        HoneypotSession::new("session-2", "Lottery Claims Dept", 8),
        HoneypotSession::new("session-3", "IT Support Desk", 5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_session() {
        let mut session = HoneypotSession::new("s", "Name", 1);
        assert!(session.status_active);
        session.end();
        assert!(!session.status_active);
        assert!(session.faded);
    }
}
