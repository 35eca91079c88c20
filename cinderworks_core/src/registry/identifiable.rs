//! Shared trait for anything a [`Registry`](super::Registry) can hold.

/// Content addressable both by unlocalized name and by numeric id.
pub trait Identifiable {
    /// This content's numeric id. Assigned when it is registered.
    fn id(&self) -> u16;

    /// The `namespace:name` identifier this content is registered under.
    fn unlocalized_name(&self) -> &str;

    /// Called by the registry at registration time. Don't call this yourself.
    fn set_numeric_id(&mut self, id: u16);
}
