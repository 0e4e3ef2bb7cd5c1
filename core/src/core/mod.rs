pub mod bus;
pub mod memmap;

pub use bus::Bus;
