//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.02, 1.0]; // #050505
    pub const OBSTACLE: [f32; 4] = [0.1, 0.1, 0.1, 1.0]; // #1a1a1a
    pub const OBSTACLE_EDGE: [f32; 4] = [0.267, 0.267, 0.267, 1.0]; // #444
    pub const GOAL: [f32; 4] = [1.0, 0.0, 0.898, 1.0]; // #ff00e5
    pub const GOAL_CORE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const ORB: [f32; 4] = [0.0, 0.949, 1.0, 1.0]; // #00f2ff
    pub const WELL: [f32; 3] = [0.0, 0.949, 1.0];
}
