mod free_space_packer;
mod placement;

#[doc(inline)]
pub use free_space_packer::FreeSpacePacker;
#[doc(inline)]
pub use placement::PlacementResult;
