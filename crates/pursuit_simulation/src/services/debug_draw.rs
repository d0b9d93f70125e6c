//! Debug gizmos (wire shapes) для визуализации AI
//!
//! Ядро не рисует само: складывает shapes в буфер, хост рисует как умеет.

use bevy::prelude::*;

/// Цвет gizmo (без зависимости от bevy_color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GizmoColor {
    Red,
    Blue,
    Magenta,
}

/// Одна wire-фигура
#[derive(Debug, Clone, PartialEq)]
pub enum DebugShape {
    WireCube {
        center: Vec3,
        size: Vec3,
        color: GizmoColor,
    },
    WireSphere {
        center: Vec3,
        radius: f32,
        color: GizmoColor,
    },
}

/// Буфер фигур за один кадр
#[derive(Debug, Clone, Default)]
pub struct GizmoBuffer {
    shapes: Vec<DebugShape>,
}

impl GizmoBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wire_cube(&mut self, center: Vec3, size: Vec3, color: GizmoColor) {
        self.shapes.push(DebugShape::WireCube { center, size, color });
    }

    pub fn wire_sphere(&mut self, center: Vec3, radius: f32, color: GizmoColor) {
        self.shapes.push(DebugShape::WireSphere { center, radius, color });
    }

    pub fn shapes(&self) -> &[DebugShape] {
        &self.shapes
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn into_shapes(self) -> Vec<DebugShape> {
        self.shapes
    }
}

/// Resource: gizmos всех AI за последний тик (рисует хост, если `enabled`)
#[derive(Resource, Debug, Default)]
pub struct DebugShapes {
    pub enabled: bool,
    pub shapes: Vec<DebugShape>,
}
