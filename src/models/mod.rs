pub mod grid;
pub mod matrix;
pub mod qr_code;

pub use grid::{Module, ModuleGrid};
pub use matrix::BitMatrix;
pub use qr_code::{ECLevel, MaskPattern, QrMatrix, Version};
