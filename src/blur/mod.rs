pub mod engine;
pub mod kernel;

pub use self::engine::gaussian_blur;
pub use self::kernel::gaussian_kernel_1d;
