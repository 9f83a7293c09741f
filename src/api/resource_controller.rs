use tracing::debug;
use uuid::Uuid;

use crate::core::Resource;
use crate::error::GanttResult;

use super::GanttEngine;
use super::validation::ensure_positive;

impl GanttEngine {
    /// Appends a resource row at the bottom and rebuilds the layout (the row
    /// dividers depend on the height list).
    pub fn add_resource(&mut self, resource: Resource) -> GanttResult<Uuid> {
        resource.validate()?;
        let id = resource.id();
        self.resources.push(resource);
        self.rebuild_layout();
        debug!(resource = %id, count = self.resources.len(), "resource added");
        Ok(id)
    }

    pub fn remove_resource(&mut self, id: Uuid) -> Option<Resource> {
        let index = self.resources.iter().position(|r| r.id() == id)?;
        let removed = self.resources.remove(index);
        self.rebuild_layout();
        debug!(resource = %id, count = self.resources.len(), "resource removed");
        Some(removed)
    }

    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Resource at a vertical position, top to bottom.
    #[must_use]
    pub fn resource_by_index(&self, index: usize) -> Option<&Resource> {
        self.resources.get(index)
    }

    #[must_use]
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    pub fn set_resource_height(&mut self, id: Uuid, height_px: f64) -> GanttResult<bool> {
        let height_px = ensure_positive(height_px, "resource height")?;
        let Some(resource) = self.resources.iter_mut().find(|r| r.id() == id) else {
            return Ok(false);
        };
        resource.set_height(height_px);
        self.rebuild_layout();
        Ok(true)
    }
}
