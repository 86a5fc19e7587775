pub mod helical;
pub mod placement;
