use uuid::Uuid;

/// Process-wide identifier generator
///
/// The service invokes it exactly once per create call, whether or not the
/// item passes validation. Injected as a capability so tests can make ids
/// deterministic and count invocations.
#[cfg_attr(test, mockall::automock)]
pub trait IdProvider: Send + Sync {
    /// Return a fresh identifier, assumed collision-free in practice
    fn next_id(&self) -> String;
}

/// Random UUID implementation used outside of tests
#[derive(Debug, Default, Clone)]
pub struct UuidProvider;

impl IdProvider for UuidProvider {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
