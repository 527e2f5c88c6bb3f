//! The boundary between particle motion and whatever draws it.

use glam::Vec3;

/// Floats per instance record: `x, y, z, scale`.
pub const INSTANCE_STRIDE: usize = 4;

/// Constructs, registers and positions particle visuals.
///
/// A handle belongs to exactly one particle, so writes through different
/// handles never overlap.
pub trait Scene {
    type Handle;

    /// Build a visual from the shared base shape at the given scale and
    /// register it for drawing.
    fn spawn(&mut self, scale: f32) -> Self::Handle;

    fn set_position(&mut self, handle: &Self::Handle, position: Vec3);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstanceSlot(usize);

impl InstanceSlot {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Flat per-instance attribute data, laid out for a single `ARRAY_BUFFER`
/// upload with a vertex attribute divisor of 1.
#[derive(Debug, Default)]
pub struct InstanceBuffer {
    data: Vec<f32>,
}

impl InstanceBuffer {
    pub fn with_capacity(instances: usize) -> Self {
        Self {
            data: Vec::with_capacity(instances * INSTANCE_STRIDE),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len() / INSTANCE_STRIDE
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn position(&self, slot: InstanceSlot) -> Vec3 {
        let base = slot.index() * INSTANCE_STRIDE;
        Vec3::from_slice(&self.data[base..base + 3])
    }

    pub fn scale(&self, slot: InstanceSlot) -> f32 {
        self.data[slot.index() * INSTANCE_STRIDE + 3]
    }
}

impl Scene for InstanceBuffer {
    type Handle = InstanceSlot;

    fn spawn(&mut self, scale: f32) -> InstanceSlot {
        let slot = InstanceSlot(self.len());
        self.data.extend_from_slice(&[0.0, 0.0, 0.0, scale]);
        slot
    }

    fn set_position(&mut self, handle: &InstanceSlot, position: Vec3) {
        let base = handle.index() * INSTANCE_STRIDE;
        position.write_to_slice(&mut self.data[base..base + 3]);
    }
}
