pub mod frame;
pub mod viewer3d;
