pub mod composite;
pub mod encode;
pub mod raster;
