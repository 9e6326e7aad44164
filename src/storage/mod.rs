mod registry;

pub use registry::Registry;
