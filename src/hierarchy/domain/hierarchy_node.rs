use super::PersonName;

/// Vertical distance between two adjacent generations
pub const VERTICAL_PITCH: f64 = 100.0;

/// 2-D position of a node on the rendering surface
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A person placed in the hierarchy
///
/// `level` is 0 for the focal person, negative for ancestors and positive
/// for descendants. It is carried explicitly; `position.y` is derived from
/// it and never the other way around.
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyNode {
    id: PersonName,
    level: i32,
    position: Position,
}

impl HierarchyNode {
    /// Creates a node at `x = 0` on the row belonging to `level`.
    pub fn new(id: PersonName, level: i32) -> Self {
        Self {
            id,
            level,
            position: Position {
                x: 0.0,
                y: f64::from(level) * VERTICAL_PITCH,
            },
        }
    }

    pub fn id(&self) -> &PersonName {
        &self.id
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn place(&mut self, x: f64) {
        self.position = Position {
            x,
            y: f64::from(self.level) * VERTICAL_PITCH,
        };
    }
}
