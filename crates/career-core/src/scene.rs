//! Placed objects and the registry that owns them for the whole session.

use crate::layout::{LayoutBody, LayoutPacker, RelaxReport};
use crate::mesh::MeshData;
use crate::motion::{axis_pulse, MotionParams};
use crate::state::ray_sphere;
use fnv::FnvHashMap;
use glam::{Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    AxisShaft(usize),
    AxisTip(usize),
    Origin,
    Person,
    Model(usize),
}

impl ObjectKind {
    pub fn axis_index(&self) -> Option<usize> {
        match *self {
            ObjectKind::AxisShaft(i) | ObjectKind::AxisTip(i) => Some(i),
            _ => None,
        }
    }

    /// Models take part in picking and layout; scenery does not.
    pub fn is_model(&self) -> bool {
        matches!(self, ObjectKind::Person | ObjectKind::Model(_))
    }
}

#[derive(Clone, Debug)]
pub struct PlacedObject {
    pub kind: ObjectKind,
    pub mesh: MeshData,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    /// Radians per second around world +Y.
    pub spin: f32,
    pub motion: MotionParams,
    /// Axis index whose pulse drives this object's local Y scale.
    pub pulse: Option<usize>,
    pub highlighted: bool,
    local_center: Vec3,
    local_radius: f32,
}

impl PlacedObject {
    pub fn new(kind: ObjectKind, mesh: MeshData) -> Self {
        let local_center = mesh.center();
        let local_radius = mesh.bounding_radius();
        Self {
            kind,
            mesh,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            spin: 0.0,
            motion: MotionParams::still(),
            pulse: None,
            highlighted: false,
            local_center,
            local_radius,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    pub fn with_spin(mut self, radians_per_sec: f32) -> Self {
        self.spin = radians_per_sec;
        self
    }

    pub fn with_motion(mut self, motion: MotionParams) -> Self {
        self.motion = motion;
        self
    }

    pub fn with_pulse(mut self, axis_index: usize) -> Self {
        self.pulse = Some(axis_index);
        self
    }

    /// Bounding radius in world units, ignoring per-frame pulses.
    pub fn radius(&self) -> f32 {
        self.local_radius * self.scale.max_element()
    }

    fn center_offset(&self) -> Vec3 {
        self.rotation * (self.local_center * self.scale)
    }

    /// Center of the bounding sphere at rest (no motion offset).
    pub fn rest_center(&self) -> Vec3 {
        self.position + self.center_offset()
    }

    pub fn center_at(&self, t: f32) -> Vec3 {
        self.rest_center() + self.motion.offset(t)
    }

    pub fn model_matrix(&self, t: f32) -> Mat4 {
        let mut scale = self.scale;
        if let Some(i) = self.pulse {
            scale.y *= axis_pulse(t, i);
        }
        let rotation = Quat::from_rotation_y(self.spin * t) * self.rotation;
        Mat4::from_scale_rotation_translation(scale, rotation, self.position + self.motion.offset(t))
    }
}

#[derive(Default)]
pub struct Scene {
    objects: Vec<(ObjectId, PlacedObject)>,
    index: FnvHashMap<ObjectId, usize>,
    next_id: u32,
    time: f32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, object: PlacedObject) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.index.insert(id, self.objects.len());
        self.objects.push((id, object));
        id
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, id: ObjectId) -> Option<&PlacedObject> {
        self.index.get(&id).map(|&i| &self.objects[i].1)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut PlacedObject> {
        let i = *self.index.get(&id)?;
        Some(&mut self.objects[i].1)
    }

    /// Objects in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &PlacedObject)> {
        self.objects.iter().map(|(id, o)| (*id, o))
    }

    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects.iter().map(|(id, _)| *id)
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn advance(&mut self, dt_sec: f32) {
        self.time += dt_sec.max(0.0);
    }

    pub fn model_matrix(&self, id: ObjectId) -> Option<Mat4> {
        self.get(id).map(|o| o.model_matrix(self.time))
    }

    /// Toggle the hover highlight on both parts of axis `index`.
    pub fn set_axis_highlight(&mut self, index: usize, on: bool) {
        for (_, o) in &mut self.objects {
            if o.kind.axis_index() == Some(index) {
                o.highlighted = on;
            }
        }
    }

    pub fn model_count(&self) -> usize {
        self.objects.iter().filter(|(_, o)| o.kind.is_model()).count()
    }

    /// Rest-state bounding spheres of every model, in insertion order.
    pub fn layout_bodies(&self) -> Vec<LayoutBody> {
        self.objects
            .iter()
            .filter(|(_, o)| o.kind.is_model())
            .map(|(id, o)| LayoutBody {
                id: *id,
                position: o.rest_center(),
                radius: o.radius(),
            })
            .collect()
    }

    /// Move objects so their bounding-sphere centers match the relaxed bodies.
    pub fn apply_layout(&mut self, bodies: &[LayoutBody]) {
        for body in bodies {
            if let Some(o) = self.get_mut(body.id) {
                o.position = body.position - o.center_offset();
            }
        }
    }

    /// Relax overlapping models in place and write the result back.
    pub fn relax_models(&mut self, packer: &mut LayoutPacker) -> RelaxReport {
        let mut bodies = self.layout_bodies();
        let report = packer.relax(&mut bodies);
        self.apply_layout(&bodies);
        report
    }

    /// Nearest model hit by the ray at the current time.
    pub fn pick(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<ObjectId> {
        let mut best = None::<(ObjectId, f32)>;
        for (id, o) in &self.objects {
            if !o.kind.is_model() {
                continue;
            }
            if let Some(t) = ray_sphere(ray_origin, ray_dir, o.center_at(self.time), o.radius()) {
                match best {
                    Some((_, bt)) if t >= bt => {}
                    _ => best = Some((*id, t)),
                }
            }
        }
        best.map(|(id, _)| id)
    }
}
