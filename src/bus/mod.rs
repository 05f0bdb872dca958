/// This contains the console's address space.
pub mod mem_bus;
