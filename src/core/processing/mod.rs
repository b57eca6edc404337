pub mod letterbox;
pub mod padding;
pub mod resize;
pub mod sampler;
