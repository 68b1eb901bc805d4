/// Transient user-facing notices. The host renders and expires them; the
/// engine only ever emits.
pub trait NotifierPort: Send + Sync {
    fn error(&self, message: &str);

    fn success(&self, message: &str);
}
