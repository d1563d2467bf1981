pub mod complex;
pub mod raster;
pub mod region;
