use glam::IVec3;
use worldbuilder_core::types::Position;
use worldbuilder_shapes::ShapeKind;
use worldbuilder_world::Marks;

/// Configuration for a single benchmark scene.
pub struct SceneConfig {
    pub name: &'static str,
    pub kind: ShapeKind,
    pub args: &'static [&'static str],
    /// Marks placed before the build.
    pub marks: &'static [[i32; 3]],
    /// Builder position used as the center when no single mark is set.
    pub origin: [i32; 3],
}

impl SceneConfig {
    pub fn marks(&self) -> Marks {
        Marks::from_positions(self.marks.iter().map(|&p| IVec3::from_array(p)))
    }

    pub fn origin(&self) -> Position {
        IVec3::from_array(self.origin)
    }
}

/// Return the standard suite of benchmark scenes, from small shapes up to a
/// fill that has to be split into many pieces.
pub fn standard_scenes() -> Vec<SceneConfig> {
    vec![
        SceneConfig {
            name: "sphere-r3",
            kind: ShapeKind::Sphere,
            args: &["3"],
            marks: &[],
            origin: [0, 64, 0],
        },
        SceneConfig {
            name: "sphere-r16-filled",
            kind: ShapeKind::Sphere,
            args: &["16", "filled"],
            marks: &[],
            origin: [0, 64, 0],
        },
        SceneConfig {
            name: "ellipsoid-24x8x12",
            kind: ShapeKind::Ellipsoid,
            args: &["24", "8", "12"],
            marks: &[],
            origin: [0, 64, 0],
        },
        SceneConfig {
            name: "cylinder-r12-h40",
            kind: ShapeKind::Cylinder,
            args: &["12", "40", "filled"],
            marks: &[],
            origin: [0, 64, 0],
        },
        SceneConfig {
            name: "cylinder-down-h30",
            kind: ShapeKind::Cylinder,
            args: &["10", "-30"],
            marks: &[],
            origin: [0, 64, 0],
        },
        SceneConfig {
            name: "pyramid-20",
            kind: ShapeKind::Pyramid,
            args: &["20", "filled"],
            marks: &[],
            origin: [0, 64, 0],
        },
        SceneConfig {
            name: "pyramid-inverted-20",
            kind: ShapeKind::Pyramid,
            args: &["-20"],
            marks: &[],
            origin: [0, 64, 0],
        },
        SceneConfig {
            name: "wall-3-anchors",
            kind: ShapeKind::Wall,
            args: &["20"],
            marks: &[[0, 64, 0], [60, 64, 0], [60, 64, 60]],
            origin: [0, 64, 0],
        },
        SceneConfig {
            name: "fill-64x32x64",
            kind: ShapeKind::Fill,
            args: &["1"],
            marks: &[[0, 10, 0], [63, 41, 63]],
            origin: [0, 64, 0],
        },
    ]
}
