//! Current user identity lookup.
//!
//! Best-effort only: a failed lookup yields an empty username rather than
//! an error, because the prompt must render regardless.

/// Identity of the user the shell runs as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    /// Login name; empty when the lookup failed
    pub name: String,
    /// Effective uid; 0 means root
    pub uid: u32,
    /// Machine hostname, when resolvable
    pub hostname: Option<String>,
}

impl UserIdentity {
    /// Look up the current user. Never fails; degraded fields are empty.
    pub fn current() -> Self {
        let name = whoami::fallible::username().unwrap_or_default();
        let hostname = whoami::fallible::hostname().ok();
        let uid = unsafe { libc::geteuid() };

        UserIdentity {
            name,
            uid,
            hostname,
        }
    }

    /// Whether this identity is the superuser
    pub fn is_root(&self) -> bool {
        self.uid == 0
    }
}
