pub mod paths;

pub use paths::ShapeKeyPaths;
