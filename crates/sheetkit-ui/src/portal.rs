//! Off-tree render target for the sheet.

/// Fixed id of the singleton portal container.
pub const PORTAL_CONTAINER_ID: &str = "sheetkit-portal-root";

pub const PORTAL_CONTAINER_CLASS: &str = "sheetkit-portal";

/// A document that can host the portal container.
pub trait PortalDocument {
    type Container: Clone;
    type Error;

    fn find_by_id(&self, id: &str) -> Option<Self::Container>;

    /// Creates a container with `id` and `class_name` and attaches it to the
    /// document root.
    fn create_attached(&mut self, id: &str, class_name: &str)
        -> Result<Self::Container, Self::Error>;
}

/// Returns the portal container, creating it on first use. Later calls
/// return the same container.
pub fn portal_container<D>(document: &mut D) -> Result<D::Container, D::Error>
where
    D: PortalDocument + ?Sized,
{
    if let Some(existing) = document.find_by_id(PORTAL_CONTAINER_ID) {
        return Ok(existing);
    }
    log::debug!("creating portal container #{PORTAL_CONTAINER_ID}");
    document.create_attached(PORTAL_CONTAINER_ID, PORTAL_CONTAINER_CLASS)
}
